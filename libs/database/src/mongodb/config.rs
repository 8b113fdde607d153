#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default, env_required};

/// MongoDB connection settings
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "shop")
///     .with_app_name("products-api");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, `mongodb://[user:pass@]host[:port][/?options]`
    pub url: String,

    /// Database holding the service collections
    pub database: String,

    /// Application name reported to the server
    pub app_name: Option<String>,

    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_database(url, "default")
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

/// Environment variables:
/// - `MONGO_URI` (required)
/// - `MONGO_DBNAME` (required)
/// - `MONGO_APP_NAME` (optional)
/// - `MONGO_MAX_POOL_SIZE` (optional, default: 100)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required("MONGO_URI")?;
        let database = env_required("MONGO_DBNAME")?;

        let max_pool_size = env_or_default("MONGO_MAX_POOL_SIZE", "100")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "MONGO_MAX_POOL_SIZE".to_string(),
                details: format!("{}", e),
            })?;

        let mut config = Self::with_database(url, database);
        config.app_name = std::env::var("MONGO_APP_NAME").ok();
        config.max_pool_size = max_pool_size;

        Ok(config)
    }
}
