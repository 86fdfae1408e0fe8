//! Application error type and its HTTP mapping.
//!
//! Every error response carries an [`ErrorReport`] in its extensions so the
//! error-audit middleware can log and persist it without re-deriving the
//! classification.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

/// Detail returned to callers for every unhandled fault.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Detail returned to callers for request validation failures.
pub const VALIDATION_ERROR_DETAIL: &str = "Invalid request data";

/// Detail persisted in the audit log for request validation failures.
pub const VALIDATION_AUDIT_DETAIL: &str = "Validation error";

/// Errors surfaced by handlers, services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed body or schema violation. `errors` is a JSON array of
    /// `{loc, msg, type}` items.
    #[error("Invalid request data")]
    Validation { errors: Value },

    #[error("Custom alias already in use")]
    AliasConflict { alias: String },

    #[error("Short URL not found")]
    NotFound,

    /// Unknown route, answered through the same error path.
    #[error("Not Found")]
    RouteNotFound,

    #[error("Short URL has expired")]
    Expired,

    #[error("Could not allocate a unique short code after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    /// Catch-all fault. `message` is diagnostic only and never sent to the caller.
    #[error("{message}")]
    Internal { message: String },
}

/// How an error response is logged and audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Raised deliberately by a handler or service.
    Expected,
    /// Rejected by the request schema before a handler ran.
    Validation,
    /// Anything else.
    Internal,
}

/// Classification attached to every error response as an extension.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub class: ErrorClass,
    /// Detail persisted in the audit log.
    pub detail: String,
    /// Internal context for the log line, never exposed to the caller.
    pub diagnostic: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Value>,
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Builds a validation error with a single item.
    pub fn invalid(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self::Validation {
            errors: json!([{ "loc": loc, "msg": msg.into(), "type": kind }]),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::AliasConflict { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Expired => StatusCode::GONE,
            AppError::ExhaustedRetries { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            AppError::Validation { .. } => ErrorClass::Validation,
            AppError::Internal { .. } => ErrorClass::Internal,
            _ => ErrorClass::Expected,
        }
    }

    /// Detail shown to the caller.
    pub fn detail(&self) -> String {
        match self {
            AppError::Internal { .. } => INTERNAL_ERROR_DETAIL.to_string(),
            other => other.to_string(),
        }
    }

    fn report(&self) -> ErrorReport {
        let (detail, diagnostic) = match self {
            AppError::Validation { errors } => {
                (VALIDATION_AUDIT_DETAIL.to_string(), Some(errors.to_string()))
            }
            AppError::Internal { message } => {
                (INTERNAL_ERROR_DETAIL.to_string(), Some(message.clone()))
            }
            AppError::ExhaustedRetries { .. } => (self.detail(), Some(self.to_string())),
            other => (other.detail(), None),
        };

        ErrorReport {
            class: self.class(),
            detail,
            diagnostic,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let report = self.report();

        let body = match self {
            AppError::Validation { errors } => ErrorBody {
                detail: VALIDATION_ERROR_DETAIL.to_string(),
                errors: Some(errors),
            },
            other => ErrorBody {
                detail: other.detail(),
                errors: None,
            },
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(report);
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "json_data",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body",
        };

        AppError::invalid(&["body"], rejection.body_text(), kind)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let items: Vec<Value> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    json!({ "loc": ["body", field], "msg": msg, "type": e.code })
                })
            })
            .collect();

        AppError::Validation {
            errors: Value::Array(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use validator::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::AliasConflict {
                alias: "x".to_string()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Expired.status_code(), StatusCode::GONE);
        assert_eq!(
            AppError::invalid(&["body"], "bad", "x").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let err = AppError::internal("connection refused on 10.0.0.5:5432");

        assert_eq!(err.detail(), INTERNAL_ERROR_DETAIL);

        let report = err.report();
        assert_eq!(report.class, ErrorClass::Internal);
        assert_eq!(report.detail, INTERNAL_ERROR_DETAIL);
        assert!(report.diagnostic.unwrap().contains("10.0.0.5"));
    }

    #[test]
    fn test_expected_report() {
        let report = AppError::Expired.report();

        assert_eq!(report.class, ErrorClass::Expected);
        assert_eq!(report.detail, "Short URL has expired");
        assert!(report.diagnostic.is_none());
    }

    #[test]
    fn test_validation_report_uses_audit_detail() {
        let report = AppError::invalid(&["body", "url"], "bad url", "url").report();

        assert_eq!(report.class, ErrorClass::Validation);
        assert_eq!(report.detail, VALIDATION_AUDIT_DETAIL);
    }

    #[test]
    fn test_into_response_attaches_report() {
        let response = AppError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let report = response.extensions().get::<ErrorReport>().unwrap();
        assert_eq!(report.detail, "Short URL not found");
    }

    #[test]
    fn test_from_validation_errors() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "url",
            ValidationError::new("url").with_message(Cow::from("Must be an absolute URL")),
        );

        let err = AppError::from(errors);

        match err {
            AppError::Validation { errors } => {
                let items = errors.as_array().unwrap();
                assert_eq!(items.len(), 1);
                assert_eq!(items[0]["loc"], json!(["body", "url"]));
                assert_eq!(items[0]["msg"], "Must be an absolute URL");
                assert_eq!(items[0]["type"], "url");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
