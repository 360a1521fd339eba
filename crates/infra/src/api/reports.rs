//! Report operations
//!
//! High-level, typed entry points for the sales, manager and team reports.
//! Each call issues exactly one GET and returns the decoded envelope as-is;
//! an envelope with `success: false` comes back as `Ok`. See
//! [`EnsureSuccess`](super::errors::EnsureSuccess) to treat it as an error.

use std::sync::Arc;

use salesdesk_domain::types::{
    InvoiceQueryParams, InvoiceSalesResponseData, InvoiceSalesShowResponseData,
    ManagerMonthlyQueryParams, ManagerMonthlyResponseData, TeamQueryParams, TeamResponseData,
};
use tracing::{debug, instrument};

use super::auth::Credentials;
use super::client::ApiClient;
use super::errors::ApiError;
use super::routes;

/// Report API operations
#[derive(Clone)]
pub struct ReportClient {
    client: Arc<ApiClient>,
}

impl ReportClient {
    /// Create a new report client
    ///
    /// # Arguments
    ///
    /// * `client` - API client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    // === Sales Invoices ===

    /// List an employee's sales invoices
    ///
    /// # Arguments
    ///
    /// * `credentials` - Bearer credentials for this request
    /// * `employee_id` - Salesperson whose invoices are listed
    /// * `params` - Filters and paging, passed through as the query string
    ///
    /// # Errors
    ///
    /// Returns error if `employee_id` is blank or the API request fails
    #[instrument(skip(self, credentials, params), fields(employee_id = %employee_id))]
    pub async fn get_invoice_sales(
        &self,
        credentials: &Credentials,
        employee_id: &str,
        params: &InvoiceQueryParams,
    ) -> Result<InvoiceSalesResponseData, ApiError> {
        let path = routes::invoice_list(employee_id)?;
        let response: InvoiceSalesResponseData =
            self.client.get_with_query(credentials, &path, params).await?;

        debug!(
            success = response.success,
            count = response.data.as_ref().map_or(0, |d| d.data.len()),
            "Invoices listed"
        );
        Ok(response)
    }

    /// Get a single invoice
    ///
    /// # Errors
    ///
    /// Returns error if either id is blank or the API request fails
    #[instrument(
        skip(self, credentials),
        fields(employee_id = %employee_id, invoice_id = %invoice_id)
    )]
    pub async fn get_invoice_by_id(
        &self,
        credentials: &Credentials,
        employee_id: &str,
        invoice_id: &str,
    ) -> Result<InvoiceSalesShowResponseData, ApiError> {
        let path = routes::invoice_detail(employee_id, invoice_id)?;
        let response: InvoiceSalesShowResponseData = self.client.get(credentials, &path).await?;

        debug!(success = response.success, "Invoice fetched");
        Ok(response)
    }

    // === Manager Reports ===

    /// Monthly sales aggregates for a manager's team
    ///
    /// # Errors
    ///
    /// Returns error if `employee_id` is blank or the API request fails
    #[instrument(skip(self, credentials), fields(employee_id = %employee_id, year = params.year))]
    pub async fn get_manager_monthly(
        &self,
        credentials: &Credentials,
        employee_id: &str,
        params: &ManagerMonthlyQueryParams,
    ) -> Result<ManagerMonthlyResponseData, ApiError> {
        let path = routes::manager_monthly(employee_id)?;
        let response: ManagerMonthlyResponseData =
            self.client.get_with_query(credentials, &path, params).await?;

        debug!(
            success = response.success,
            months = response.data.as_ref().map_or(0, |d| d.data.len()),
            "Manager monthly report fetched"
        );
        Ok(response)
    }

    /// Team members and their commission for a year
    ///
    /// # Errors
    ///
    /// Returns error if `employee_id` is blank or the API request fails
    #[instrument(skip(self, credentials), fields(employee_id = %employee_id, year = params.year))]
    pub async fn get_team(
        &self,
        credentials: &Credentials,
        employee_id: &str,
        params: &TeamQueryParams,
    ) -> Result<TeamResponseData, ApiError> {
        let path = routes::manager_team(employee_id)?;
        let response: TeamResponseData =
            self.client.get_with_query(credentials, &path, params).await?;

        debug!(
            success = response.success,
            members = response.data.as_ref().map_or(0, |d| d.data.len()),
            "Team fetched"
        );
        Ok(response)
    }
}
