// src/services/dashboard_service.rs

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::{CardData, LatestInvoice, RevenuePoint},
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    // Gráfico de receita: um ponto por mês com faturas pagas, sem preencher os vazios
    pub async fn fetch_revenue(&self) -> Result<Vec<RevenuePoint>, AppError> {
        self.repo
            .revenue_by_month()
            .await?
            .into_iter()
            .map(RevenuePoint::try_from)
            .collect()
    }

    pub async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoice>, AppError> {
        let rows = self.repo.latest_invoices().await?;
        Ok(rows.into_iter().map(LatestInvoice::from).collect())
    }

    /// Cards do topo.
    ///
    /// Dispara as três consultas ao mesmo tempo e espera todas terminarem.
    /// Se qualquer uma falhar, a operação inteira falha (sem resultado parcial).
    pub async fn fetch_card_data(&self) -> Result<CardData, AppError> {
        let (invoice_count, customer_count, totals) = tokio::try_join!(
            self.repo.count_invoices(),
            self.repo.count_customers(),
            self.repo.invoice_status_totals(),
        )?;

        let cards = CardData::assemble(invoice_count, customer_count, totals);

        tracing::debug!(
            invoices = cards.number_of_invoices,
            customers = cards.number_of_customers,
            "Cards do dashboard calculados"
        );

        Ok(cards)
    }
}
