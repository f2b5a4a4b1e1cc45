//! Request body validation.

use crate::error::AppError;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Take the named fields from a JSON object body, checking them in the given
    /// order. A field that is absent, null, not a string or empty is reported as
    /// missing; the first such field wins.
    pub fn required_strings(body: &Value, fields: &[&str]) -> Result<Vec<String>, AppError> {
        let obj = body
            .as_object()
            .ok_or_else(|| AppError::BadRequest("Request body must be a JSON object".into()))?;
        let mut out = Vec::with_capacity(fields.len());
        for field in fields {
            match obj.get(*field).and_then(Value::as_str) {
                Some(s) if !s.is_empty() => out.push(s.to_string()),
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "Missing '{}' in request body",
                        field
                    )))
                }
            }
        }
        Ok(out)
    }
}
