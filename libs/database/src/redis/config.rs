#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_required, env_required_parse};

/// Redis connection settings
///
/// ```ignore
/// use database::redis::RedisConfig;
///
/// let config = RedisConfig::with_database("redis://127.0.0.1:6379", 2);
/// let conn = database::redis::connect_from_config(&config).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RedisConfig {
    /// Connection URL, `redis://[user:pass@]host[:port][/db]`
    pub url: String,

    /// Logical database index, used when the URL carries none
    pub database: u8,
}

impl RedisConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_database(url, 0)
    }

    pub fn with_database(url: impl Into<String>, database: u8) -> Self {
        Self {
            url: url.into(),
            database,
        }
    }

    /// The URL handed to the client. A database index already present in the
    /// URL path wins over `database`.
    pub fn connection_url(&self) -> String {
        let (base, query) = match self.url.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (self.url.as_str(), None),
        };

        let authority = base.split_once("://").map_or(base, |(_, rest)| rest);
        let has_db_path = authority
            .split_once('/')
            .is_some_and(|(_, path)| !path.is_empty());

        let mut url = if has_db_path {
            base.to_string()
        } else {
            format!("{}/{}", base.trim_end_matches('/'), self.database)
        };

        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Environment variables:
/// - `REDIS_URI` (required)
/// - `REDIS_DBNAME` (required) - numeric database index
#[cfg(feature = "config")]
impl FromEnv for RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required("REDIS_URI")?;
        let database = env_required_parse("REDIS_DBNAME")?;

        Ok(Self { url, database })
    }
}
