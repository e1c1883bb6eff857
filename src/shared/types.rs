use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success(Some(vec![1, 2]), None, Some(Meta { total: 2 }));
        assert!(resp.success);
        assert_eq!(resp.data, Some(vec![1, 2]));
        assert!(resp.errors.is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let resp = ApiResponse::<()>::error(
            Some("Database error occurred".to_string()),
            Some(vec!["connection reset".to_string()]),
        );
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.errors.unwrap().len(), 1);
    }
}
