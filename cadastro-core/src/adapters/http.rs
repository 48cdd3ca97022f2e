//! Clientes HTTP client
//!
//! Talks to the remote `clientes` JSON collection:
//! - `GET  {base}/clientes`       -> `[{ id, nome, email, telefone, cidade }]`
//! - `POST {base}/clientes`       -> created record with server-assigned `id`
//! - `PUT  {base}/clientes/{id}`  -> response body ignored

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::domain::result::{Error as DomainError, Result as DomainResult};
use crate::domain::{Customer, NewCustomer};
use crate::ports::CustomerApi;

/// Collection path under the base URL
const COLLECTION: &str = "clientes";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP implementation of the customer API
#[derive(Debug)]
pub struct HttpCustomerApi {
    client: Client,
    base_url: Url,
    timeout_secs: u64,
}

impl HttpCustomerApi {
    /// Create a client for the API at `base_url` with the default timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let parsed = Url::parse(base_url).context("Invalid API URL format")?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("API URL must use http or https, got '{}'", parsed.scheme());
        }
        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            anyhow::bail!("API URL must include a host");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: parsed,
            timeout_secs,
        })
    }

    /// `{base}/clientes`, or `{base}/clientes/{id}` when an id is given
    fn endpoint(&self, id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow::anyhow!("API URL cannot be used as a base"))?;
            segments.pop_if_empty().push(COLLECTION);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn fetch_all(&self) -> Result<Vec<Customer>> {
        let url = self.endpoint(None)?;
        debug!(%url, "GET customers");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let response = self.check_response_status(response)?;

        response
            .json::<Vec<Customer>>()
            .await
            .context("Failed to parse customer list")
    }

    async fn post(&self, customer: &NewCustomer) -> Result<Customer> {
        let url = self.endpoint(None)?;
        debug!(%url, "POST customer");

        let response = self
            .client
            .post(url)
            .json(customer)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let response = self.check_response_status(response)?;

        response
            .json::<Customer>()
            .await
            .context("Failed to parse created customer")
    }

    async fn put(&self, customer: &Customer) -> Result<()> {
        let url = self.endpoint(Some(&customer.id))?;
        debug!(%url, id = %customer.id, "PUT customer");

        let response = self
            .client
            .put(url)
            .json(customer)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        self.check_response_status(response)?;
        Ok(())
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> anyhow::Error {
        if error.is_timeout() {
            anyhow::anyhow!("Connection timed out after {} seconds", self.timeout_secs)
        } else if error.is_connect() {
            anyhow::anyhow!("Unable to connect to the clientes API at {}", self.base_url)
        } else {
            anyhow::anyhow!("Clientes API request failed: {}", error)
        }
    }

    /// Any 2xx is success
    fn check_response_status(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status.as_u16() {
            404 => anyhow::bail!("Clientes resource not found (HTTP 404)"),
            code => anyhow::bail!("Clientes API error: HTTP {}", code),
        }
    }
}

#[async_trait]
impl CustomerApi for HttpCustomerApi {
    fn name(&self) -> &str {
        "http"
    }

    async fn list(&self) -> DomainResult<Vec<Customer>> {
        self.fetch_all()
            .await
            .map_err(|e| DomainError::api(format!("{:#}", e)))
    }

    async fn create(&self, customer: &NewCustomer) -> DomainResult<Customer> {
        self.post(customer)
            .await
            .map_err(|e| DomainError::api(format!("{:#}", e)))
    }

    async fn update(&self, customer: &Customer) -> DomainResult<()> {
        self.put(customer)
            .await
            .map_err(|e| DomainError::api(format!("{:#}", e)))
    }
}
