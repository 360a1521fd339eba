//! Manager monthly aggregate types

use serde::{Deserialize, Serialize};

use super::ApiEnvelope;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerMonthlyQueryParams {
    pub year: i32,
}

impl ManagerMonthlyQueryParams {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

/// Per-salesperson figures within a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerMonthlyDetail {
    pub name: String,
    pub count: i64,
    pub total: f64,
}

/// One month of the manager report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerMonthlyData {
    /// Month label as sent by the API (e.g. `"January"`)
    pub month: String,
    pub detail: Vec<ManagerMonthlyDetail>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerMonthlyPayload {
    /// Total across all months
    pub total: f64,
    pub data: Vec<ManagerMonthlyData>,
}

pub type ManagerMonthlyResponseData = ApiEnvelope<ManagerMonthlyPayload>;
