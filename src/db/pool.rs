// src/db/pool.rs

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    PgPool,
};
use std::{str::FromStr, time::Duration};

use crate::common::error::AppError;

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Monta as opções de conexão a partir da URL.
/// TLS é obrigatório: qualquer `sslmode` vindo da URL é sobrescrito.
pub fn connect_options(database_url: &str) -> Result<PgConnectOptions, AppError> {
    let options = PgConnectOptions::from_str(database_url)?.ssl_mode(PgSslMode::Require);
    Ok(options)
}

/// Cria a pool compartilhada. Chamada uma única vez na inicialização.
pub async fn init(database_url: &str) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(connect_options(database_url)?)
        .await?;

    tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
    Ok(pool)
}

/// Fecha a pool, esperando as conexões em uso serem devolvidas.
pub async fn shutdown(pool: &PgPool) {
    pool.close().await;
    tracing::info!("🔌 Pool de conexões encerrada.");
}
