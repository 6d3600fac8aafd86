//! # HTTP Backend
//!
//! `reqwest`-based implementation of [`PosBackend`].
//!
//! ## Endpoints
//! ```text
//! POST   {base}/order/create       create order from cart snapshot
//! GET    {base}/order/{id}         order status
//! DELETE {base}/order/{id}         best-effort cancel
//! POST   {base}/payment/process    record payment
//! GET    {base}/menu/categories    menu with items
//! GET    {base}/menu/tax-settings  store tax configuration
//! ```
//!
//! Non-success responses carry the backend's message body verbatim into
//! [`GatewayError::OrderCreation`] / [`GatewayError::Payment`]; transport
//! timeouts become [`GatewayError::Timeout`] so the checkout layer can treat
//! the outcome as unknown rather than failed.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use kasir_core::{MenuCategory, Order};

use crate::api::PosBackend;
use crate::error::{GatewayError, GatewayResult};
use crate::types::{CreateOrderRequest, PaymentResponse, ProcessPaymentRequest, TaxSettings};

/// Default timeout for backend requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// Configuration
// =============================================================================

/// Explicit backend configuration - initialised once by the shell, no hidden
/// global state.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    base_url: String,
    bearer_token: Option<String>,
    timeout: Duration,
}

impl BackendConfig {
    /// Creates a config for the given base URL (normalised, see
    /// [`normalize_base_url`]).
    pub fn new(base_url: &str) -> Self {
        BackendConfig {
            base_url: normalize_base_url(base_url),
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Attaches the session's bearer token (from the login flow).
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The normalised base URL (ends in `/api`, no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Normalises a user-entered backend URL:
/// - ensure a scheme (http for localhost/LAN setups, https otherwise)
/// - strip trailing slashes
/// - ensure the `/api` prefix all endpoints hang off
pub fn normalize_base_url(url: &str) -> String {
    let mut url = url.trim().to_string();

    if !url.starts_with("http://") && !url.starts_with("https://") {
        if url.starts_with("localhost") || url.starts_with("127.0.0.1") || url.starts_with("192.168.") {
            url = format!("http://{url}");
        } else {
            url = format!("https://{url}");
        }
    }

    while url.ends_with('/') {
        url.pop();
    }

    if !url.ends_with("/api") {
        url.push_str("/api");
    }

    url
}

// =============================================================================
// HTTP Backend
// =============================================================================

/// The real POS backend over HTTP.
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Builds the backend client.
    pub fn new(config: BackendConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Http(format!("failed to build HTTP client: {e}")))?;

        info!(base_url = %config.base_url, "backend gateway configured");
        Ok(HttpBackend { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, self.url(path));
        if let Some(token) = &self.config.bearer_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Maps a transport error, distinguishing timeouts (outcome unknown)
    /// from plain connectivity failures.
    fn transport_error(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(format!("no response from {}", self.config.base_url))
        } else if err.is_connect() {
            GatewayError::Http(format!("cannot reach backend at {}", self.config.base_url))
        } else {
            GatewayError::Http(err.to_string())
        }
    }

    /// Reads a successful JSON body, or returns the error body verbatim via
    /// `reject` for non-success statuses.
    async fn read_json<T, F>(&self, response: Response, reject: F) -> GatewayResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce(String) -> GatewayError,
    {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| GatewayError::UnexpectedResponse(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status_message(status)
        } else {
            body
        };
        Err(reject(message))
    }
}

fn status_message(status: StatusCode) -> String {
    format!("backend returned {status}")
}

impl PosBackend for HttpBackend {
    async fn create_order(&self, request: &CreateOrderRequest) -> GatewayResult<Order> {
        debug!(items = request.items.len(), "create_order");

        let response = self
            .request(reqwest::Method::POST, "order/create")
            .json(request)
            .send()
            .await
            .map_err(|e| match self.transport_error(e) {
                GatewayError::Timeout(m) => GatewayError::Timeout(m),
                other => GatewayError::OrderCreation(other.to_string()),
            })?;

        let order: Order = self
            .read_json(response, GatewayError::OrderCreation)
            .await?;
        info!(order_id = order.id, order_number = %order.order_number, total = %order.total, "order created");
        Ok(order)
    }

    async fn get_order(&self, order_id: i64) -> GatewayResult<Order> {
        debug!(order_id, "get_order");

        let response = self
            .request(reqwest::Method::GET, &format!("order/{order_id}"))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.read_json(response, GatewayError::UnexpectedResponse)
            .await
    }

    async fn cancel_order(&self, order_id: i64) -> GatewayResult<bool> {
        debug!(order_id, "cancel_order");

        let response = self
            .request(reqwest::Method::DELETE, &format!("order/{order_id}"))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let acknowledged = response.status().is_success();
        if !acknowledged {
            warn!(order_id, status = %response.status(), "backend declined order cancellation");
        }
        Ok(acknowledged)
    }

    async fn process_payment(&self, request: &ProcessPaymentRequest) -> GatewayResult<PaymentResponse> {
        debug!(
            order_id = request.order_id,
            method = ?request.payment_method,
            amount = %request.amount_paid,
            "process_payment"
        );

        let response = self
            .request(reqwest::Method::POST, "payment/process")
            .json(request)
            .send()
            .await
            .map_err(|e| match self.transport_error(e) {
                GatewayError::Timeout(m) => GatewayError::Timeout(m),
                other => GatewayError::Payment(other.to_string()),
            })?;

        let payment: PaymentResponse = self.read_json(response, GatewayError::Payment).await?;
        info!(
            transaction_id = payment.transaction_id,
            order_number = %payment.order_number,
            "payment recorded"
        );
        Ok(payment)
    }

    async fn menu_categories(&self) -> GatewayResult<Vec<MenuCategory>> {
        debug!("menu_categories");

        let response = self
            .request(reqwest::Method::GET, "menu/categories")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.read_json(response, GatewayError::UnexpectedResponse)
            .await
    }

    async fn tax_settings(&self) -> GatewayResult<TaxSettings> {
        debug!("tax_settings");

        let response = self
            .request(reqwest::Method::GET, "menu/tax-settings")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.read_json(response, GatewayError::UnexpectedResponse)
            .await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
