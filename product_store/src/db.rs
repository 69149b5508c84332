use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use tracing::info;

use crate::cfg::Config;

pub fn connect_options(cfg: &Config) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .database(&cfg.db_name)
        .username(&cfg.username)
        .password(&cfg.password)
}

/// Builds the pool handed to the repositories.
pub async fn connect(cfg: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .idle_timeout(cfg.idle_timeout())
        .connect_with(connect_options(cfg))
        .await?;
    info!(host = %cfg.host, port = cfg.port, db = %cfg.db_name, "connected to postgres");
    Ok(pool)
}
