//! Sales invoice types

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{optional_amount, ApiEnvelope, ListPayload};

/// Filters for the per-employee invoice list.
///
/// Unset fields are left out of the query string. `extra` carries any
/// additional filter the API understands; its entries are forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl InvoiceQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.extra.remove("page");
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.extra.remove("limit");
        self.limit = Some(limit);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.extra.remove("search");
        self.search = Some(search.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.extra.remove("status");
        self.status = Some(status.into());
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.extra.remove("start_date");
        self.extra.remove("end_date");
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Add a raw filter, forwarded as-is.
    ///
    /// A key that names a dedicated field (`page`, `status`, ...) replaces
    /// that field's value, so each key is sent once. The last call wins.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        match key.as_str() {
            "page" => self.page = None,
            "limit" => self.limit = None,
            "search" => self.search = None,
            "status" => self.status = None,
            "start_date" => self.start_date = None,
            "end_date" => self.end_date = None,
            _ => {}
        }
        self.extra.insert(key, value.into());
        self
    }
}

/// One row of the invoice list.
///
/// The API does not publish a schema for invoices, so every modelled field is
/// optional and everything else (ids, the `ai` invoice key, ...) is kept in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "optional_amount", skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// Fields the API sends that are not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A product line on an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "optional_amount", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "optional_amount", skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "optional_amount", skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Full invoice as returned by the detail endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "optional_amount", skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
    #[serde(default, deserialize_with = "optional_amount", skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(default, deserialize_with = "optional_amount", skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default)]
    pub items: Vec<InvoiceLineItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type InvoiceSalesResponseData = ApiEnvelope<ListPayload<InvoiceSummary>>;

pub type InvoiceSalesShowResponseData = ApiEnvelope<InvoiceDetail>;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_summary_fields_are_kept() {
        let summary: InvoiceSummary = serde_json::from_value(json!({
            "id": 7,
            "invoice_number": "INV-0007",
            "customer_name": "PT Maju Jaya",
            "invoice_date": "2024-03-01",
            "status": "paid",
            "total": "2500000.00",
            "salesperson": "Rina"
        }))
        .unwrap();

        assert_eq!(summary.total, Some(2_500_000.0));
        assert_eq!(summary.due_date, None);
        assert_eq!(summary.extra.get("id"), Some(&json!(7)));
        assert_eq!(summary.extra.get("salesperson"), Some(&json!("Rina")));
    }

    #[test]
    fn summary_with_unfamiliar_keys_still_decodes() {
        let summary: InvoiceSummary =
            serde_json::from_value(json!({ "ai": "A-1", "name": "Cust", "total": 100 })).unwrap();

        assert_eq!(summary.invoice_number, None);
        assert_eq!(summary.total, Some(100.0));
        assert_eq!(summary.extra.get("ai"), Some(&json!("A-1")));
        assert_eq!(summary.extra.get("name"), Some(&json!("Cust")));
    }

    #[test]
    fn detail_without_items_defaults_to_empty() {
        let detail: InvoiceDetail = serde_json::from_value(json!({
            "invoice_number": "INV-0001",
            "customer_name": "CV Sentosa",
            "invoice_date": "2024-01-10",
            "due_date": "2024-02-10",
            "status": "unpaid",
            "subtotal": 1000,
            "tax": 110,
            "total": 1110
        }))
        .unwrap();

        assert!(detail.items.is_empty());
        assert_eq!(detail.tax, Some(110.0));
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let result = serde_json::from_value::<InvoiceSummary>(json!({
            "invoice_number": "INV-0001",
            "total": "a lot"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn query_builder_sets_fields() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let params = InvoiceQueryParams::new()
            .page(2)
            .limit(25)
            .date_range(start, end)
            .filter("branch", "Bandung");

        assert_eq!(params.page, Some(2));
        assert_eq!(params.limit, Some(25));
        assert_eq!(params.start_date, Some(start));
        assert_eq!(params.extra.get("branch").map(String::as_str), Some("Bandung"));
    }

    #[test]
    fn filter_replaces_dedicated_field() {
        let params = InvoiceQueryParams::new().page(2).filter("page", "9");

        assert_eq!(params.page, None);
        assert_eq!(params.extra.get("page").map(String::as_str), Some("9"));
    }

    #[test]
    fn setter_replaces_earlier_filter() {
        let params = InvoiceQueryParams::new().filter("status", "void").status("paid");

        assert_eq!(params.status.as_deref(), Some("paid"));
        assert!(params.extra.is_empty());
    }
}
