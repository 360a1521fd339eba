//! Path templates for the report API
//!
//! Identifiers are validated and percent-encoded as single path segments,
//! so an id containing `/` or `?` can never change the target resource.

use urlencoding::encode;

use super::errors::ApiError;

/// `/sales/{employee_id}/invoice`
pub fn invoice_list(employee_id: &str) -> Result<String, ApiError> {
    Ok(format!("/sales/{}/invoice", segment("employee_id", employee_id)?))
}

/// `/sales/{employee_id}/invoice/{invoice_id}`
pub fn invoice_detail(employee_id: &str, invoice_id: &str) -> Result<String, ApiError> {
    Ok(format!(
        "/sales/{}/invoice/{}",
        segment("employee_id", employee_id)?,
        segment("invoice_id", invoice_id)?
    ))
}

/// `/manager/{employee_id}/monthly`
pub fn manager_monthly(employee_id: &str) -> Result<String, ApiError> {
    Ok(format!("/manager/{}/monthly", segment("employee_id", employee_id)?))
}

/// `/manager/{employee_id}/team`
pub fn manager_team(employee_id: &str) -> Result<String, ApiError> {
    Ok(format!("/manager/{}/team", segment("employee_id", employee_id)?))
}

fn segment(name: &str, value: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::InvalidInput(format!("{name} must not be empty")));
    }
    Ok(encode(value).into_owned())
}
