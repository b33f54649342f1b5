// src/db/dashboard_repo.rs

use sqlx::PgPool;
use crate::{
    common::error::AppError,
    models::dashboard::{InvoiceStatusTotals, LatestInvoiceRow, RevenueRow},
};

// Quantidade fixa de faturas no card "Últimas Faturas"
pub const LATEST_INVOICES_LIMIT: i64 = 5;

// Repositório somente leitura sobre as tabelas 'invoices' e 'customers'
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Receita por mês (só faturas pagas)
    // Meses sem faturas pagas simplesmente não aparecem.
    pub async fn revenue_by_month(&self) -> Result<Vec<RevenueRow>, AppError> {
        let rows = sqlx::query_as::<_, RevenueRow>(
            r#"
            SELECT
                EXTRACT(MONTH FROM date)::INT4 AS month,
                SUM(amount)::NUMERIC AS revenue
            FROM invoices
            WHERE status = 'paid'
            GROUP BY 1
            ORDER BY 1 ASC
            "#,
        )
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(months = rows.len(), "Receita mensal carregada");
        Ok(rows)
    }

    // 2. Últimas faturas com os dados do cliente
    pub async fn latest_invoices(&self) -> Result<Vec<LatestInvoiceRow>, AppError> {
        let rows = sqlx::query_as::<_, LatestInvoiceRow>(
            r#"
            SELECT
                invoices.id,
                customers.name,
                customers.email,
                customers.image_url,
                invoices.amount::NUMERIC AS amount
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            ORDER BY invoices.date DESC
            LIMIT $1
            "#,
        )
            .bind(LATEST_INVOICES_LIMIT)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(invoices = rows.len(), "Últimas faturas carregadas");
        Ok(rows)
    }

    // 3a. Total de faturas
    pub async fn count_invoices(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // 3b. Total de clientes
    pub async fn count_customers(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // 3c. Pagas e pendentes numa única query (soma condicional)
    pub async fn invoice_status_totals(&self) -> Result<InvoiceStatusTotals, AppError> {
        let totals = sqlx::query_as::<_, InvoiceStatusTotals>(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END), 0)::NUMERIC AS paid,
                COALESCE(SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END), 0)::NUMERIC AS pending
            FROM invoices
            "#,
        )
            .fetch_one(&self.pool)
            .await?;

        Ok(totals)
    }
}
