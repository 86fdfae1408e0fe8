//! Logs every error response and queues it for the error-log store.

use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::audit_event::AuditEvent;
use crate::error::{ErrorClass, ErrorReport, INTERNAL_ERROR_DETAIL};
use crate::state::AppState;

/// Middleware that reports every 4xx/5xx response.
///
/// Responses built from [`crate::error::AppError`] carry an [`ErrorReport`];
/// anything else (framework rejections such as 405, missing static assets)
/// is classified by status with its canonical reason phrase as detail.
///
/// Bodiless framework errors are rewritten to the `{"detail": ...}` shape,
/// keeping their headers. Every other response passes through untouched.
pub async fn layer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let (report, needs_body) = match response.extensions().get::<ErrorReport>() {
        Some(report) => (report.clone(), false),
        None => (
            report_for_status(status),
            !response.headers().contains_key(header::CONTENT_TYPE),
        ),
    };

    let diagnostic = report.diagnostic.as_deref().unwrap_or("");
    match report.class {
        ErrorClass::Internal => tracing::error!(
            %method,
            %path,
            status = status.as_u16(),
            detail = %report.detail,
            error = %diagnostic,
            "Unhandled error"
        ),
        ErrorClass::Validation => tracing::warn!(
            %method,
            %path,
            status = status.as_u16(),
            detail = %report.detail,
            errors = %diagnostic,
            "Request validation failed"
        ),
        ErrorClass::Expected => tracing::warn!(
            %method,
            %path,
            status = status.as_u16(),
            detail = %report.detail,
            "Request failed"
        ),
    }

    state.audit.record(AuditEvent::new(
        path,
        method.as_str(),
        status.as_u16(),
        report.detail.clone(),
    ));

    if needs_body {
        return with_detail_body(response, report);
    }
    response
}

/// Replaces the body of `response` with `{"detail": ...}`, keeping its
/// status and every header except the body framing ones.
fn with_detail_body(response: Response, report: ErrorReport) -> Response {
    let (parts, _) = response.into_parts();

    let mut rebuilt = (parts.status, Json(json!({ "detail": &report.detail }))).into_response();
    for (name, value) in parts.headers.iter() {
        if name == header::CONTENT_TYPE || name == header::CONTENT_LENGTH {
            continue;
        }
        rebuilt.headers_mut().append(name.clone(), value.clone());
    }
    rebuilt.extensions_mut().insert(report);
    rebuilt
}

fn report_for_status(status: StatusCode) -> ErrorReport {
    if status.is_server_error() {
        return ErrorReport {
            class: ErrorClass::Internal,
            detail: status
                .canonical_reason()
                .unwrap_or(INTERNAL_ERROR_DETAIL)
                .to_string(),
            diagnostic: None,
        };
    }

    ErrorReport {
        class: ErrorClass::Expected,
        detail: status.canonical_reason().unwrap_or("Error").to_string(),
        diagnostic: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_client_status() {
        let report = report_for_status(StatusCode::METHOD_NOT_ALLOWED);

        assert_eq!(report.class, ErrorClass::Expected);
        assert_eq!(report.detail, "Method Not Allowed");
    }

    #[test]
    fn test_report_for_server_status() {
        let report = report_for_status(StatusCode::SERVICE_UNAVAILABLE);

        assert_eq!(report.class, ErrorClass::Internal);
        assert_eq!(report.detail, "Service Unavailable");
    }

    #[tokio::test]
    async fn test_detail_body_keeps_headers() {
        let response = Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header(header::ALLOW, "GET,HEAD")
            .body(axum::body::Body::empty())
            .unwrap();

        let rebuilt = with_detail_body(response, report_for_status(StatusCode::METHOD_NOT_ALLOWED));

        assert_eq!(rebuilt.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(rebuilt.headers()[header::ALLOW], "GET,HEAD");
        assert_eq!(rebuilt.headers()[header::CONTENT_TYPE], "application/json");
        assert!(rebuilt.extensions().get::<ErrorReport>().is_some());

        let bytes = axum::body::to_bytes(rebuilt.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "detail": "Method Not Allowed" }));
    }
}
