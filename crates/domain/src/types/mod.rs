//! Report payload and query types
//!
//! Every response from the report API shares the same envelope:
//! `{ "success": bool, "message": string, "data": ... }`. A `success: false`
//! envelope is still a well-formed response; deciding what to do with it is
//! up to the caller.

pub mod manager;
pub mod sales;
pub mod team;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use manager::{
    ManagerMonthlyData, ManagerMonthlyDetail, ManagerMonthlyPayload, ManagerMonthlyQueryParams,
    ManagerMonthlyResponseData,
};
pub use sales::{
    InvoiceDetail, InvoiceLineItem, InvoiceQueryParams, InvoiceSalesResponseData,
    InvoiceSalesShowResponseData, InvoiceSummary,
};
pub use team::{ManagerTeamData, TeamQueryParams, TeamResponseData};

/// Common response envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: String,
    /// `None` when the API sent `null` or left the field out. On a
    /// `success: false` envelope it is also `None` when `data` does not have
    /// the success shape (failures often carry `[]` or `{}`).
    pub data: Option<T>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    success: bool,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

impl<'de, T> Deserialize<'de> for ApiEnvelope<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEnvelope::deserialize(deserializer)?;

        let data = match raw.data {
            None | Some(Value::Null) => None,
            Some(value) => match T::deserialize(value) {
                Ok(data) => Some(data),
                Err(_) if !raw.success => None,
                Err(err) => return Err(D::Error::custom(err)),
            },
        };

        Ok(Self { success: raw.success, message: raw.message, data })
    }
}

impl<T> ApiEnvelope<T> {
    /// Whether the API reported the request as logically successful.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Consume the envelope and return its payload, if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// List payload nested inside an envelope: `{ "data": [...], "total": n }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPayload<T> {
    pub data: Vec<T>,
    pub total: i64,
}

impl<T> Default for ListPayload<T> {
    fn default() -> Self {
        Self { data: Vec::new(), total: 0 }
    }
}

/// Accepts an amount sent either as a JSON number or as a numeric string
/// (`"1500000.00"`). `null` and a missing field (with `#[serde(default)]`)
/// decode as `None`.
pub(crate) fn optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawAmount>::deserialize(deserializer)?.map(RawAmount::parse).transpose()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn parse<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("expected a numeric amount, got {text:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct MaybeAmount {
        #[serde(default, deserialize_with = "optional_amount")]
        value: Option<f64>,
    }

    #[test]
    fn envelope_without_data_decodes_as_none() {
        let envelope: ApiEnvelope<ListPayload<String>> =
            serde_json::from_str(r#"{ "success": false, "message": "Employee not found" }"#)
                .unwrap();

        assert!(!envelope.is_success());
        assert_eq!(envelope.message, "Employee not found");
        assert!(envelope.into_data().is_none());
    }

    #[test]
    fn envelope_with_null_data_decodes_as_none() {
        let envelope: ApiEnvelope<ListPayload<String>> =
            serde_json::from_str(r#"{ "success": false, "message": "nope", "data": null }"#)
                .unwrap();

        assert!(envelope.data.is_none());
    }

    #[test]
    fn failed_envelope_with_mismatched_data_decodes_as_none() {
        let envelope: ApiEnvelope<ListPayload<String>> = serde_json::from_str(
            r#"{ "success": false, "message": "Employee not found", "data": [] }"#,
        )
        .unwrap();

        assert!(!envelope.is_success());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn successful_envelope_with_mismatched_data_is_rejected() {
        let result = serde_json::from_str::<ApiEnvelope<ListPayload<String>>>(
            r#"{ "success": true, "message": "ok", "data": [] }"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn amount_accepts_numbers_and_numeric_strings() {
        let from_number: MaybeAmount = serde_json::from_str(r#"{ "value": 1250.5 }"#).unwrap();
        let from_text: MaybeAmount =
            serde_json::from_str(r#"{ "value": " 1250.50 " }"#).unwrap();

        assert_eq!(from_number.value, Some(1250.5));
        assert_eq!(from_text.value, Some(1250.5));
    }

    #[test]
    fn amount_rejects_non_numeric_strings() {
        let result = serde_json::from_str::<MaybeAmount>(r#"{ "value": "lots" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn amount_allows_null_and_missing() {
        let missing: MaybeAmount = serde_json::from_str("{}").unwrap();
        let null: MaybeAmount = serde_json::from_str(r#"{ "value": null }"#).unwrap();

        assert_eq!(missing.value, None);
        assert_eq!(null.value, None);
    }
}
