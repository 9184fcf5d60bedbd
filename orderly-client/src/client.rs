//! The orders API client.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use orderly_core::{Order, OrderId};

use crate::error::ClientError;

/// Bytes percent-encoded when an id becomes a URL path segment. Ids are
/// opaque strings, so anything the path grammar reserves must be escaped.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    item: &'a str,
    quantity: f64,
}

#[derive(Debug, Serialize)]
struct PutOrderRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    item: &'a str,
    quantity: f64,
}

/// HTTP client for one orderly gateway instance.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    http: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl OrdersClient {
    /// Creates a client for the gateway at `base_url` (scheme and authority,
    /// e.g. `http://127.0.0.1:3000`). Trailing slashes are tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        OrdersClient {
            http: Client::new(),
            base_url,
            bearer_token: None,
        }
    }

    /// Attaches a bearer token sent with every request.
    ///
    /// The gateway itself does not inspect it; deployments that front the
    /// gateway with an authorizing proxy need it on the wire.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// `POST /orders` — create an order and return the stored record.
    ///
    /// # Errors
    /// Returns [`ClientError::Api`] on any non-success status, or
    /// [`ClientError::Transport`] if the request never completes.
    pub async fn create(&self, item: &str, quantity: f64) -> Result<Order, ClientError> {
        let request = self
            .authorize(self.http.post(self.endpoint("/orders")))
            .json(&CreateOrderRequest { item, quantity });
        decode(request.send().await?).await
    }

    /// `GET /orders/:id` — fetch one order.
    ///
    /// # Errors
    /// Returns [`ClientError::Api`] with status 404 if the order does not
    /// exist, or [`ClientError::Transport`] if the request never completes.
    pub async fn get(&self, id: &OrderId) -> Result<Order, ClientError> {
        let encoded = utf8_percent_encode(id.as_str(), PATH_SEGMENT);
        let request = self.authorize(self.http.get(self.endpoint(&format!("/orders/{encoded}"))));
        decode(request.send().await?).await
    }

    /// `GET /orders` — list every stored order.
    ///
    /// # Errors
    /// Returns [`ClientError::Api`] on any non-success status, or
    /// [`ClientError::Transport`] if the request never completes.
    pub async fn list(&self) -> Result<Vec<Order>, ClientError> {
        let request = self.authorize(self.http.get(self.endpoint("/orders")));
        decode(request.send().await?).await
    }

    /// `PUT /orders` — create or replace an order. With an `id` the stored
    /// record under that ID is replaced wholesale; without one this behaves
    /// like [`OrdersClient::create`].
    ///
    /// # Errors
    /// Returns [`ClientError::Api`] on any non-success status, or
    /// [`ClientError::Transport`] if the request never completes.
    pub async fn put(
        &self,
        id: Option<&OrderId>,
        item: &str,
        quantity: f64,
    ) -> Result<Order, ClientError> {
        let request = self
            .authorize(self.http.put(self.endpoint("/orders")))
            .json(&PutOrderRequest {
                id: id.map(OrderId::as_str),
                item,
                quantity,
            });
        decode(request.send().await?).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }
}

/// Pulls the `message` field out of an error body, falling back to the raw
/// text for bodies that are not the API's JSON shape.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| body.to_owned())
}
