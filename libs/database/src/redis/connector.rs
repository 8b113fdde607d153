use redis::Client;
use redis::aio::ConnectionManager;
use tracing::info;

use super::RedisConfig;

/// Connect to Redis and return a [`ConnectionManager`]
///
/// The manager reconnects on its own after the initial handshake. The
/// initial `PING` is attempted once.
///
/// ```ignore
/// use redis::AsyncCommands;
///
/// let mut conn = database::redis::connect("redis://127.0.0.1:6379/0").await?;
/// conn.set::<_, _, ()>("key", "value").await?;
/// ```
pub async fn connect(url: &str) -> redis::RedisResult<ConnectionManager> {
    let client = Client::open(url)?;
    let manager = ConnectionManager::new(client).await?;

    let mut conn = manager.clone();
    let _: String = redis::cmd("PING").query_async(&mut conn).await?;

    Ok(manager)
}

/// Connect using a [`RedisConfig`], selecting its logical database
pub async fn connect_from_config(config: &RedisConfig) -> redis::RedisResult<ConnectionManager> {
    info!(database = config.database, "Connecting to Redis");
    let manager = connect(&config.connection_url()).await?;
    info!(database = config.database, "Successfully connected to Redis");
    Ok(manager)
}
