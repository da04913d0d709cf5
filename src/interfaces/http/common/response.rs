//! Response envelope shared by every endpoint

use serde::Serialize;
use utoipa::ToSchema;

/// `{successful, errors, data}` wrapper.
///
/// `data` is always present in the JSON, `null` on failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub successful: bool,
    pub errors: Vec<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            successful: true,
            errors: Vec::new(),
            data: Some(data),
        }
    }

    pub fn error(messages: Vec<String>) -> Self {
        Self {
            successful: false,
            errors: messages,
            data: None,
        }
    }
}

/// Plain `{message}` payload
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_has_null_data() {
        let body = serde_json::to_value(ApiResponse::<()>::error(vec!["boom".into()])).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"successful": false, "errors": ["boom"], "data": null})
        );
    }
}
