//! Example: Fetching every report for one employee
//!
//! Loads configuration the same way an application would (environment
//! first, then `config.toml`/`config.json`), installs logging and prints a
//! short summary of each report.
//!
//! # Setup
//!
//! ```bash
//! export SALESDESK_API_BASE_URL=https://erp.example.com/api
//! export SALESDESK_TOKEN=<bearer token>
//! export SALESDESK_EMPLOYEE_ID=EMP-001
//! cargo run -p salesdesk-infra --example fetch_reports
//! ```

use std::sync::Arc;

use anyhow::Context;
use salesdesk_domain::{InvoiceQueryParams, ManagerMonthlyQueryParams, TeamQueryParams};
use salesdesk_infra::{config, init_tracing, ApiClient, ApiClientConfig, Credentials, ReportClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No .env file loaded: {}", e);
    }

    let config = config::load().context("loading configuration")?;
    init_tracing(&config.logging).context("installing logging")?;

    let token = std::env::var("SALESDESK_TOKEN").unwrap_or_default();
    let employee_id =
        std::env::var("SALESDESK_EMPLOYEE_ID").context("SALESDESK_EMPLOYEE_ID is not set")?;
    let year = std::env::var("SALESDESK_YEAR")
        .ok()
        .and_then(|y| y.parse().ok())
        .unwrap_or(2024);

    let client = ApiClient::new(ApiClientConfig::from(&config.api))?;
    let reports = ReportClient::new(Arc::new(client));
    let credentials = Credentials::bearer(token);

    let first_page = InvoiceQueryParams::new().page(1).limit(10);
    let invoices = reports.get_invoice_sales(&credentials, &employee_id, &first_page).await?;
    println!("Invoices: success={} message={:?}", invoices.success, invoices.message);
    for invoice in invoices.data.iter().flat_map(|page| page.data.iter()) {
        println!(
            "  {} {} {:.2}",
            invoice.invoice_number.as_deref().unwrap_or("-"),
            invoice.status.as_deref().unwrap_or("-"),
            invoice.total.unwrap_or_default()
        );
    }

    let monthly = reports
        .get_manager_monthly(&credentials, &employee_id, &ManagerMonthlyQueryParams::new(year))
        .await?;
    if let Some(payload) = &monthly.data {
        println!("Manager monthly {}: total {:.2}", year, payload.total);
        for month in &payload.data {
            println!("  {:<10} {:>14.2}", month.month, month.total);
        }
    }

    let team = reports.get_team(&credentials, &employee_id, &TeamQueryParams::new(year)).await?;
    if let Some(payload) = &team.data {
        println!("Team ({} members)", payload.total);
        for member in &payload.data {
            println!("  {:<24} {:>14.2}", member.name, member.total_commission);
        }
    }

    Ok(())
}
