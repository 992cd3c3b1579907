//! # API Client
//!
//! Transport adapter for the storefront API. Every endpoint module issues its
//! requests through [`ApiClient::request`].

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::{ErrorResponse, LoginResponse, NewProduct, Order, Product, ProductPatch, User};

use crate::core::error::TransportError;
use crate::core::service::ApiService;

/// Binary file attached to a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    fn into_part(self) -> Result<Part, TransportError> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.content_type)
            .map_err(|e| TransportError::InvalidRequest(format!("bad content type: {}", e)))
    }
}

/// Multipart body: text fields plus file parts, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    fields: Vec<(String, String)>,
    files: Vec<(String, Attachment)>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn file(mut self, name: &str, attachment: Attachment) -> Self {
        self.files.push((name.to_string(), attachment));
        self
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    fn into_form(self) -> Result<Form, TransportError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for (name, attachment) in self.files {
            form = form.part(name, attachment.into_part()?);
        }
        Ok(form)
    }
}

/// Request body encoding, chosen per call.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartBody),
}

impl RequestBody {
    /// Encode a serializable value as a JSON body.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, TransportError> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))
    }
}

/// HTTP client for the storefront API.
///
/// The underlying `reqwest::Client` keeps a cookie store, so the session
/// cookie set by `/auth/login` is sent on every later request. The client
/// pools connections and can be shared behind an `Arc`.
///
/// No retry and no timeout are configured; both are left to reqwest defaults.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:8000/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| TransportError::NetworkFailure(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client was built with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL of `path` with `segment` appended as one percent-encoded path segment.
    pub(crate) fn url_with_segment(&self, path: &str, segment: &str) -> Result<String, TransportError> {
        let mut url = Url::parse(&self.url(path))
            .map_err(|e| TransportError::InvalidRequest(format!("bad request url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidRequest("base url cannot carry a path".to_string()))?
            .pop_if_empty()
            .push(segment);
        Ok(url.into())
    }

    /// Send one request and classify the outcome.
    ///
    /// Returns the response only for 2xx statuses; everything else becomes a
    /// [`TransportError`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Response, TransportError> {
        self.request_url(method, self.url(path), body).await
    }

    /// [`ApiClient::request`] against an already built URL.
    pub(crate) async fn request_url(
        &self,
        method: Method,
        url: String,
        body: RequestBody,
    ) -> Result<Response, TransportError> {
        let start = std::time::Instant::now();
        let response = self.send_url(method.clone(), &url, body).await?;
        let status = response.status();
        let duration = start.elapsed();

        if status.is_success() {
            tracing::debug!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request succeeded"
            );
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = error_for_status(status, &body);
        tracing::warn!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            error = %error,
            "Request failed"
        );
        Err(error)
    }

    /// Send one request without looking at the status.
    ///
    /// Only network-level failures are errors here.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Response, TransportError> {
        self.send_url(method, &self.url(path), body).await
    }

    async fn send_url(&self, method: Method, url: &str, body: RequestBody) -> Result<Response, TransportError> {
        let builder = self.client.request(method.clone(), url);
        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(multipart) => builder.multipart(multipart.into_form()?),
        };

        builder.send().await.map_err(|e| {
            tracing::error!(error = %e, method = %method, url = %url, "Network error");
            TransportError::NetworkFailure(e.to_string())
        })
    }
}

/// Decode a successful response body.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
    response.json::<T>().await.map_err(|e| {
        tracing::error!(error = %e, "Response parse error");
        TransportError::Decode(e.to_string())
    })
}

/// Map a non-2xx status and its body to a [`TransportError`].
pub(crate) fn error_for_status(status: StatusCode, body: &str) -> TransportError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return TransportError::Unauthorized;
    }
    server_error(status, body)
}

/// `ServerError` carrying the body's message, or the reason phrase.
pub(crate) fn server_error(status: StatusCode, body: &str) -> TransportError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(ErrorResponse::into_message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });

    TransportError::ServerError {
        status: status.as_u16(),
        message,
    }
}

/// Turn a 2xx `{ success: false, message }` envelope into an error.
pub(crate) fn rejected(status: StatusCode, message: Option<String>, fallback: &str) -> TransportError {
    TransportError::ServerError {
        status: status.as_u16(),
        message: message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string()),
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<LoginResponse, TransportError> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn logout(&self) -> Result<(), TransportError> {
        crate::services::api::auth::logout(self).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, TransportError> {
        crate::services::api::products::list_products(self).await
    }

    async fn create_product(
        &self,
        product: NewProduct,
        attachments: Vec<Attachment>,
    ) -> Result<Product, TransportError> {
        crate::services::api::products::create_product(self, product, attachments).await
    }

    async fn update_product(
        &self,
        patch: ProductPatch,
        image: Option<Attachment>,
    ) -> Result<Product, TransportError> {
        crate::services::api::products::update_product(self, patch, image).await
    }

    async fn delete_product(&self, product_id: String) -> Result<(), TransportError> {
        crate::services::api::products::delete_product(self, product_id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, TransportError> {
        crate::services::api::users::list_users(self).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, TransportError> {
        crate::services::api::orders::list_orders(self).await
    }

    async fn list_user_orders(&self, user_id: String) -> Result<Vec<Order>, TransportError> {
        crate::services::api::orders::list_user_orders(self, &user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_and_forbidden_map_to_unauthorized() {
        assert_eq!(error_for_status(StatusCode::UNAUTHORIZED, ""), TransportError::Unauthorized);
        assert_eq!(
            error_for_status(StatusCode::FORBIDDEN, r#"{"message":"Admins only"}"#),
            TransportError::Unauthorized
        );
    }

    #[test]
    fn server_error_uses_body_message() {
        let err = error_for_status(StatusCode::BAD_REQUEST, r#"{"success":false,"message":"Price required"}"#);
        assert_eq!(
            err,
            TransportError::ServerError {
                status: 400,
                message: "Price required".to_string()
            }
        );
    }

    #[test]
    fn server_error_falls_back_to_reason_phrase() {
        let err = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(
            err,
            TransportError::ServerError {
                status: 500,
                message: "Internal Server Error".to_string()
            }
        );
    }

    #[test]
    fn rejected_envelope_uses_fallback_for_empty_message() {
        let err = rejected(StatusCode::OK, Some(String::new()), "Update failed");
        assert_eq!(err.user_message(), "Update failed");
    }

    #[test]
    fn url_joins_without_double_slashes() {
        let client = ApiClient::new("http://localhost:8000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/order/all"), "http://localhost:8000/api/order/all");
        assert_eq!(client.url("user/getusers"), "http://localhost:8000/api/user/getusers");
    }

    #[test]
    fn id_segment_is_percent_encoded() {
        let client = ApiClient::new("http://localhost:8000/api").unwrap();
        assert_eq!(
            client.url_with_segment("/order/user", "665f1c2a").unwrap(),
            "http://localhost:8000/api/order/user/665f1c2a"
        );
        assert_eq!(
            client.url_with_segment("/order/user", "../admin?x=1#y").unwrap(),
            "http://localhost:8000/api/order/user/..%2Fadmin%3Fx=1%23y"
        );
    }

    #[test]
    fn multipart_body_keeps_fields_and_files() {
        let body = MultipartBody::new()
            .text("productId", "p1")
            .text("price", 499.0)
            .file("images", Attachment::new("a.png", "image/png", vec![1, 2, 3]));
        assert_eq!(body.field_count(), 2);
        assert_eq!(body.file_count(), 1);
        assert!(body.into_form().is_ok());
    }
}
