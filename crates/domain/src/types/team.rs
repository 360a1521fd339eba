//! Team commission types

use serde::{Deserialize, Serialize};

use super::{ApiEnvelope, ListPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamQueryParams {
    pub year: i32,
}

impl TeamQueryParams {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

/// One team member and their commission for the requested year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerTeamData {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub photo_profile: String,
    pub job_position: String,
    pub organization_name: String,
    pub job_level: String,
    pub branch: String,
    pub manager_id: i64,
    #[serde(rename = "totalCommission")]
    pub total_commission: f64,
}

pub type TeamResponseData = ApiEnvelope<ListPayload<ManagerTeamData>>;
