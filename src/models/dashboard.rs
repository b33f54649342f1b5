// src/models/dashboard.rs

use chrono::Month;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::common::error::AppError;

// =========================================================================
//  LINHAS CRUAS (o que o Postgres devolve)
// =========================================================================

// Receita agrupada pelo número do mês (1..=12)
#[derive(Debug, Clone, FromRow)]
pub struct RevenueRow {
    pub month: i32,
    pub revenue: Option<Decimal>, // SUM pode vir NULL
}

// Fatura + dados do cliente via JOIN
#[derive(Debug, Clone, FromRow)]
pub struct LatestInvoiceRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: Decimal,
}

// Totais condicionais (pagas / pendentes) numa única ida ao banco
#[derive(Debug, Clone, Default, FromRow)]
pub struct InvoiceStatusTotals {
    pub paid: Option<Decimal>,
    pub pending: Option<Decimal>,
}

// =========================================================================
//  PROJEÇÕES PARA A UI
// =========================================================================

// 1. Gráfico de Receita
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub month: String, // "Jan", "Feb", ...
    pub revenue: Decimal,
}

impl TryFrom<RevenueRow> for RevenuePoint {
    type Error = AppError;

    fn try_from(row: RevenueRow) -> Result<Self, Self::Error> {
        Ok(Self {
            month: month_label(row.month)?,
            revenue: row.revenue.unwrap_or(Decimal::ZERO),
        })
    }
}

// 2. Últimas Faturas (5)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: Decimal, // Valor cru; formatação de moeda é da UI
}

impl From<LatestInvoiceRow> for LatestInvoice {
    fn from(row: LatestInvoiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            amount: row.amount,
        }
    }
}

// 3. Cards do Topo
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: Decimal,
    pub total_pending_invoices: Decimal,
}

impl CardData {
    /// Junta os três resultados independentes. Soma sem linhas vira zero.
    pub fn assemble(invoice_count: i64, customer_count: i64, totals: InvoiceStatusTotals) -> Self {
        Self {
            number_of_invoices: invoice_count,
            number_of_customers: customer_count,
            total_paid_invoices: totals.paid.unwrap_or(Decimal::ZERO),
            total_pending_invoices: totals.pending.unwrap_or(Decimal::ZERO),
        }
    }
}

/// Converte o número do mês (1 = janeiro) na abreviação em inglês ("Jan").
pub fn month_label(month: i32) -> Result<String, AppError> {
    let month = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| AppError::UnexpectedData(format!("mês fora do intervalo 1..=12: {}", month)))?;

    Ok(month.name()[..3].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn month_label_uses_short_english_names() {
        let labels: Vec<String> = (1..=12).map(|m| month_label(m).unwrap()).collect();
        assert_eq!(
            labels,
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
    }

    #[test]
    fn month_label_rejects_out_of_range() {
        assert!(matches!(month_label(0), Err(AppError::UnexpectedData(_))));
        assert!(matches!(month_label(13), Err(AppError::UnexpectedData(_))));
        assert!(matches!(month_label(-1), Err(AppError::UnexpectedData(_))));
    }

    #[test]
    fn revenue_row_with_null_sum_becomes_zero() {
        let point = RevenuePoint::try_from(RevenueRow { month: 3, revenue: None }).unwrap();
        assert_eq!(point.month, "Mar");
        assert_eq!(point.revenue, Decimal::ZERO);
    }

    #[test]
    fn card_data_defaults_missing_totals_to_zero() {
        let cards = CardData::assemble(0, 4, InvoiceStatusTotals::default());
        assert_eq!(cards.number_of_invoices, 0);
        assert_eq!(cards.number_of_customers, 4);
        assert_eq!(cards.total_paid_invoices, Decimal::ZERO);
        assert_eq!(cards.total_pending_invoices, Decimal::ZERO);
    }

    #[test]
    fn card_data_serializes_as_numbers_in_camel_case() {
        let cards = CardData::assemble(
            2,
            1,
            InvoiceStatusTotals {
                paid: Some(Decimal::from(100)),
                pending: Some(Decimal::from(200)),
            },
        );

        assert_eq!(
            serde_json::to_value(&cards).unwrap(),
            json!({
                "numberOfInvoices": 2,
                "numberOfCustomers": 1,
                "totalPaidInvoices": 100.0,
                "totalPendingInvoices": 200.0,
            })
        );
    }

    #[test]
    fn latest_invoice_keeps_image_url_field_name() {
        let invoice = LatestInvoice::from(LatestInvoiceRow {
            id: Uuid::nil(),
            name: "Lee Robinson".into(),
            email: "lee@robinson.com".into(),
            image_url: "/customers/lee-robinson.png".into(),
            amount: Decimal::from(15795),
        });

        let value = serde_json::to_value(&invoice).unwrap();
        assert_eq!(value["image_url"], "/customers/lee-robinson.png");
        assert_eq!(value["amount"], 15795.0);
    }
}
