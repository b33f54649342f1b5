// src/config.rs

use crate::{
    common::error::AppError,
    db::{self, DashboardRepository},
    services::dashboard_service::DashboardService,
};
use sqlx::PgPool;
use std::{env, net::SocketAddr};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

// Configuração lida do ambiente (.env incluso)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separado do `from_env` para dar pra testar sem mexer no ambiente do processo
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("POSTGRES_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("POSTGRES_URL deve ser definida".into()))?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e| AppError::ConfigError(format!("BIND_ADDR inválido: {}", e)))?;

        Ok(Self { database_url, bind_addr })
    }
}

// O estado compartilhado, criado uma vez e clonado para cada request
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = db::pool::init(&config.database_url).await?;
        Ok(Self::from_pool(db_pool))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_pool(db_pool: PgPool) -> Self {
        let dashboard_repo = DashboardRepository::new(db_pool.clone());
        let dashboard_service = DashboardService::new(dashboard_repo);

        Self {
            db_pool,
            dashboard_service,
        }
    }

    pub async fn shutdown(&self) {
        db::pool::shutdown(&self.db_pool).await;
    }
}
