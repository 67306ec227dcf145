//! Vapi REST API HTTP client.

use reqwest::multipart::Form;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::VapiConfig;
use crate::error::VapiError;

/// Low-level client for the Vapi REST API.
///
/// Every request carries the private key as a Bearer token. Successful
/// responses are returned as raw JSON so callers can normalize the
/// provider's field names themselves.
#[derive(Clone)]
pub struct VapiClient {
    http: Client,
    config: VapiConfig,
}

impl VapiClient {
    /// Create a client with the given configuration.
    pub fn new(config: VapiConfig) -> Result<Self, VapiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(VapiError::Http)?;

        if config.has_api_key() {
            info!("Vapi private API key configured: {}...", key_prefix(&config.api_key));
        } else {
            warn!("PRIVATE_API_KEY is not set - voice sessions will be mocked");
        }
        match config.assistant_id {
            Some(ref id) => info!("Vapi assistant ID configured: {}", id),
            None => warn!("VAPI_ASSISTANT_ID is not set"),
        }

        Ok(Self { http, config })
    }

    /// Whether a private API key is present.
    pub fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }

    /// Get the configuration.
    pub fn config(&self) -> &VapiConfig {
        &self.config
    }

    /// Check connectivity against the provider's health endpoint.
    pub async fn health_check(&self) -> Result<(), VapiError> {
        if !self.is_configured() {
            return Err(VapiError::Config("PRIVATE_API_KEY is not set".to_string()));
        }
        self.request(Method::GET, "/v1/health", None).await?;
        Ok(())
    }

    /// Make a JSON request to an endpoint such as `/call`.
    ///
    /// A 404 becomes [`VapiError::EndpointNotFound`] and any other
    /// non-success status becomes [`VapiError::Api`] with the response body.
    /// An empty success body is returned as `{}`.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value, VapiError> {
        let url = self.config.url(endpoint);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&self.config.api_key);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!("Vapi API request failed: {}", e);
            VapiError::Http(e)
        })?;

        debug!("Vapi API {} {}: {}", method, endpoint, response.status());
        read_json(endpoint, response).await
    }

    /// POST a multipart form to an endpoint.
    pub async fn post_multipart(&self, endpoint: &str, form: Form) -> Result<Value, VapiError> {
        let response = self
            .http
            .post(self.config.url(endpoint))
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(VapiError::Http)?;

        debug!("Vapi API POST {} (multipart): {}", endpoint, response.status());
        read_json(endpoint, response).await
    }
}

impl std::fmt::Debug for VapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VapiClient")
            .field("config", &self.config)
            .finish()
    }
}

async fn read_json(endpoint: &str, response: Response) -> Result<Value, VapiError> {
    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        let body = response.text().await.unwrap_or_default();
        error!("Vapi API 404 on {}: {}", endpoint, body);
        return Err(VapiError::EndpointNotFound {
            endpoint: endpoint.to_string(),
        });
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("no response body")
                .to_string()
        } else {
            body
        };
        error!("Vapi API error ({}): {}", status.as_u16(), detail);
        return Err(VapiError::Api {
            status: status.as_u16(),
            detail,
        });
    }

    let bytes = response.bytes().await.map_err(VapiError::Http)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    Ok(serde_json::from_slice(&bytes)?)
}

/// First characters of a key, safe to log.
fn key_prefix(key: &str) -> String {
    key.chars().take(8).collect()
}
