use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// A camada de consultas não classifica nem recupera nada: tudo sobe com `?`.
#[derive(Debug, Error)]
pub enum AppError {
    // Falha de conexão, autenticação no banco ou execução da query
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Linha com formato inesperado (ex: mês fora de 1..=12)
    #[error("Dados inesperados: {0}")]
    UnexpectedData(String),

    #[error("Erro de configuração: {0}")]
    ConfigError(String),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Para a UI, qualquer falha vira um estado genérico de erro.
        // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
        tracing::error!("Erro Interno do Servidor: {}", self);

        let body = Json(json!({ "error": "Ocorreu um erro inesperado." }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
