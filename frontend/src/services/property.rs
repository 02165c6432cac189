//! Property service boundary.
//!
//! [`PropertyService`] is the only way the wizard and dashboard talk to the
//! backend. [`HttpPropertyService`] implements it over `gloo-net`; tests use
//! in-memory doubles.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::config::AppContext;
use crate::models::PropertyDraft;
use crate::types::{
    ApiErrorBody, AppError, AppResult, CreatedProperty, PropertySummary, UploadedImages,
};

/// Remote property service.
#[async_trait(?Send)]
pub trait PropertyService {
    /// File handle accepted by the upload call.
    type File;

    /// Persist a draft and return its identifier.
    async fn create_property(&self, draft: &PropertyDraft) -> AppResult<CreatedProperty>;

    /// Attach images to an existing property in a single request.
    async fn upload_property_images(
        &self,
        property_id: &str,
        files: &[Self::File],
    ) -> AppResult<UploadedImages>;

    /// Listings owned by the signed-in user.
    async fn list_my_properties(&self) -> AppResult<Vec<PropertySummary>>;
}

/// Responses come either bare or wrapped as `{ "data": ... }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

/// Decode a success body.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> AppResult<T> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(Envelope::into_inner)
        .map_err(|e| AppError::Unexpected(format!("Failed to parse response: {}", e)))
}

/// Build the error for a non-2xx response.
pub fn service_error(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(ApiErrorBody::into_message)
        .unwrap_or_else(|| {
            let text = body.trim();
            if text.is_empty() || text.starts_with('<') {
                format!("Request failed with status {}", status)
            } else {
                text.to_string()
            }
        });
    AppError::Service { status, message }
}

/// HTTP implementation of [`PropertyService`].
#[derive(Clone, Debug)]
pub struct HttpPropertyService {
    base_url: String,
    auth_token: Option<String>,
}

impl HttpPropertyService {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            base_url: ctx.api_base_url.clone(),
            auth_token: ctx.auth_token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn read<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

        if !response.ok() {
            return Err(service_error(status, &body));
        }
        parse_body(&body)
    }
}

#[async_trait(?Send)]
impl PropertyService for HttpPropertyService {
    type File = File;

    async fn create_property(&self, draft: &PropertyDraft) -> AppResult<CreatedProperty> {
        let request = self
            .authorized(Request::post(&self.url("/properties")))
            .json(draft)
            .map_err(|e| AppError::Unexpected(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        Self::read(response).await
    }

    async fn upload_property_images(
        &self,
        property_id: &str,
        files: &[File],
    ) -> AppResult<UploadedImages> {
        let form_data =
            FormData::new().map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

        for file in files {
            form_data
                .append_with_blob_and_filename("images", file, &file.name())
                .map_err(|e| AppError::Upload(format!("Failed to append {}: {:?}", file.name(), e)))?;
        }

        let request = self
            .authorized(Request::post(&self.url(&format!("/properties/{}/images", property_id))))
            .body(form_data)
            .map_err(|e| AppError::Unexpected(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        Self::read(response).await
    }

    async fn list_my_properties(&self) -> AppResult<Vec<PropertySummary>> {
        let response = self
            .authorized(Request::get(&self.url("/properties/mine")))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wrapped_and_bare_bodies() {
        let created: CreatedProperty =
            parse_body(r#"{ "success": true, "data": { "_id": "abc123" } }"#).unwrap();
        assert_eq!(created.id, "abc123");

        let created: CreatedProperty = parse_body(r#"{ "id": "xyz" }"#).unwrap();
        assert_eq!(created.id, "xyz");

        let list: Vec<PropertySummary> = parse_body(
            r#"{ "data": [
                { "_id": "1", "title_ar": "شاليه على البحر", "city": "Marina",
                  "price_per_night": 2500, "image_count": 6, "status": "approved" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].image_count, 6);
        assert_eq!(list[0].price_per_night, 2500.0);
    }

    #[test]
    fn test_parse_garbage_is_unexpected() {
        let err = parse_body::<CreatedProperty>("not json").unwrap_err();
        assert!(matches!(err, AppError::Unexpected(_)));
    }

    #[test]
    fn test_service_error_message_sources() {
        let err = service_error(400, r#"{ "message": "Title already used" }"#);
        assert_eq!(
            err,
            AppError::Service {
                status: 400,
                message: "Title already used".into()
            }
        );

        let err = service_error(502, "<html>Bad gateway</html>");
        assert_eq!(err.user_message(), "Request failed with status 502");

        let err = service_error(500, "database unavailable");
        assert_eq!(err.user_message(), "database unavailable");
    }

    #[test]
    fn test_http_service_urls() {
        let ctx = AppContext::new("https://api.sakan.app/", None);
        let service = HttpPropertyService::new(&ctx);
        assert_eq!(service.url("/properties"), "https://api.sakan.app/api/properties");
    }
}
