//! Request extractors shared by the handlers.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Extracts a payload from either a JSON or a form-encoded body.
///
/// `POST /links` serves two callers with the same shape: API clients send
/// `application/json`, the index page submits a plain HTML form. The
/// `Content-Type` header picks the codec; anything else is rejected the
/// same way a malformed body is.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::validation(rejection.body_text(), json!({})))?;
            return Ok(Self(payload));
        }

        let Form(payload) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text(), json!({})))?;
        Ok(Self(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    use crate::api::dto::CreateLinkRequest;

    #[tokio::test]
    async fn test_json_body_is_extracted() {
        let req = HttpRequest::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"url":"http://example.com/"}"#))
            .unwrap();

        let JsonOrForm(payload) = JsonOrForm::<CreateLinkRequest>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.url, "http://example.com/");
    }

    #[tokio::test]
    async fn test_form_body_is_extracted() {
        let req = HttpRequest::builder()
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("url=http%3A%2F%2Fexample.com%2F"))
            .unwrap();

        let JsonOrForm(payload) = JsonOrForm::<CreateLinkRequest>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.url, "http://example.com/");
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let req = HttpRequest::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let result = JsonOrForm::<CreateLinkRequest>::from_request(req, &()).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
