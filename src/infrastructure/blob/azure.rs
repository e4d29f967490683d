//! Azure Blob Storage client using shared key authorization

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::Sha256;
use std::time::Duration;
use tracing::debug;

use crate::domain::blob::BlobStore;
use crate::domain::DomainError;

type HmacSha256 = Hmac<Sha256>;

const API_VERSION: &str = "2021-08-06";

/// Configuration for the Azure blob store
#[derive(Debug, Clone)]
pub struct AzureBlobConfig {
    /// Storage account name
    pub account: String,
    /// Base64-encoded storage account access key
    pub access_key: String,
    /// Container holding the image blobs
    pub container: String,
    /// Endpoint override, defaults to the public Azure endpoint
    pub endpoint: Option<String>,
}

impl AzureBlobConfig {
    pub fn new(
        account: impl Into<String>,
        access_key: impl Into<String>,
        container: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            access_key: access_key.into(),
            container: container.into(),
            endpoint: None,
        }
    }

    /// Points the client at a different endpoint, e.g. a local emulator
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// Blob store backed by the Azure Blob Storage REST API
///
/// Requests are signed with the account access key using the shared key
/// scheme, so no SDK dependency is needed.
#[derive(Debug)]
pub struct AzureBlobStore {
    config: AzureBlobConfig,
    decoded_key: Vec<u8>,
    client: Client,
}

impl AzureBlobStore {
    /// Creates a new store, validating the access key up front
    pub fn new(config: AzureBlobConfig) -> Result<Self, DomainError> {
        let decoded_key = STANDARD.decode(&config.access_key).map_err(|e| {
            DomainError::configuration(format!("Invalid storage access key: {}", e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            decoded_key,
            client,
        })
    }

    fn endpoint(&self) -> String {
        match &self.config.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}.blob.core.windows.net", self.config.account),
        }
    }

    fn blob_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint(), self.config.container, key)
    }

    fn container_url(&self) -> String {
        format!(
            "{}/{}?restype=container",
            self.endpoint(),
            self.config.container
        )
    }

    /// Canonicalized resource for a request against the container,
    /// optionally narrowed to one blob and query parameters
    fn canonicalized_resource(&self, blob: Option<&str>, query: &[(&str, &str)]) -> String {
        let mut resource = match blob {
            Some(key) => format!(
                "/{}/{}/{}",
                self.config.account, self.config.container, key
            ),
            None => format!("/{}/{}", self.config.account, self.config.container),
        };

        let mut params: Vec<(&str, &str)> = query.to_vec();
        params.sort();

        for (name, value) in params {
            resource.push_str(&format!("\n{}:{}", name, value));
        }

        resource
    }

    /// Builds the string to sign for a request carrying only the
    /// `x-ms-date` and `x-ms-version` headers
    fn string_to_sign(verb: &str, date: &str, resource: &str) -> String {
        format!(
            "{verb}\n\n\n\n\n\n\n\n\n\n\n\nx-ms-date:{date}\nx-ms-version:{version}\n{resource}",
            verb = verb,
            date = date,
            version = API_VERSION,
            resource = resource,
        )
    }

    fn sign(&self, string_to_sign: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.decoded_key)
            .expect("HMAC can take key of any size");
        mac.update(string_to_sign.as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }

    fn authorization(&self, signature: &str) -> String {
        format!("SharedKey {}:{}", self.config.account, signature)
    }

    async fn send_signed(
        &self,
        verb: reqwest::Method,
        url: &str,
        resource: &str,
    ) -> Result<reqwest::Response, DomainError> {
        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let signature = self.sign(&Self::string_to_sign(verb.as_str(), &date, resource));

        self.client
            .request(verb, url)
            .header("Authorization", self.authorization(&signature))
            .header("x-ms-date", date)
            .header("x-ms-version", API_VERSION)
            .send()
            .await
            .map_err(|e| DomainError::retrieval(format!("Storage request failed: {}", e)))
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    async fn download(&self, key: &str) -> Result<Vec<u8>, DomainError> {
        debug!(key = key, "Downloading blob");

        let resource = self.canonicalized_resource(Some(key), &[]);
        let response = self
            .send_signed(reqwest::Method::GET, &self.blob_url(key), &resource)
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DomainError::retrieval(format!("Blob '{}' not found", key)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::retrieval(format!(
                "Blob download failed with HTTP {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DomainError::retrieval(format!("Failed to read blob body: {}", e)))?;

        Ok(bytes.to_vec())
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        let resource = self.canonicalized_resource(Some(key), &[]);
        let response = self
            .send_signed(reqwest::Method::HEAD, &self.blob_url(key), &resource)
            .await?;

        let status = response.status();

        if status.is_success() {
            return Ok(true);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }

        Err(DomainError::retrieval(format!(
            "Blob existence check failed with HTTP {}",
            status
        )))
    }

    async fn container_exists(&self) -> Result<bool, DomainError> {
        let resource = self.canonicalized_resource(None, &[("restype", "container")]);
        let response = self
            .send_signed(reqwest::Method::HEAD, &self.container_url(), &resource)
            .await?;

        let status = response.status();

        if status.is_success() {
            return Ok(true);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }

        Err(DomainError::retrieval(format!(
            "Container check failed with HTTP {}",
            status
        )))
    }
}
