use async_trait::async_trait;
use human_bytes::human_bytes;
use logging_timer::timer;
use reqwest::{Certificate, Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::conf::Endpoint;
use crate::errors::SeedError;
use crate::models::bulk::{to_ndjson, BulkIndexAction, BulkResponse};
use crate::models::server_info::ServerInfo;
use crate::store::SearchStore;

const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// HTTP handle to one Elasticsearch (or OpenSearch) endpoint.
#[derive(Debug, Clone)]
pub struct EsClient {
    endpoint: Endpoint,
    http_client: Client,
}

fn inject_auth(request_builder: RequestBuilder, endpoint: &Endpoint) -> RequestBuilder {
    if endpoint.has_basic_auth() {
        request_builder.basic_auth(endpoint.get_username(), endpoint.get_password())
    } else {
        request_builder
    }
}

/// Builds the reqwest client, trusting any PEM root certificates listed for
/// the endpoint on top of the system roots.
pub async fn build_http_client(endpoint: &Endpoint) -> Result<Client, SeedError> {
    let mut builder = Client::builder();
    for path in endpoint.get_root_certificates() {
        let content = tokio::fs::read(path).await.map_err(|e| {
            SeedError::config(format!("failed to read root certificate {:?}: {}", path, e))
        })?;
        let cert = Certificate::from_pem(&content).map_err(|e| {
            SeedError::config(format!("invalid root certificate {:?}: {}", path, e))
        })?;
        debug!(path = %path, "Added root certificate");
        builder = builder.add_root_certificate(cert);
    }
    builder
        .build()
        .map_err(|e| SeedError::connection(format!("failed to build HTTP client: {}", e)))
}

impl EsClient {
    pub fn new(endpoint: Endpoint, http_client: Client) -> Self {
        Self {
            endpoint,
            http_client,
        }
    }

    pub async fn connect(endpoint: Endpoint) -> Result<Self, SeedError> {
        let http_client = build_http_client(&endpoint).await?;
        Ok(Self::new(endpoint, http_client))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.get_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn server_info(&self) -> Result<ServerInfo, SeedError> {
        let request = inject_auth(self.http_client.get(self.url("/")), &self.endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| SeedError::connection(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::connection(format!("GET / returned {}", status)));
        }
        response
            .json::<ServerInfo>()
            .await
            .map_err(|e| SeedError::connection(format!("unexpected server info: {}", e)))
    }

    /// Logs what we are talking to. A failure here is not fatal; the index
    /// check that follows decides whether the store is reachable.
    pub async fn print_server_info(&self, prefix: &str) {
        match self.server_info().await {
            Ok(server_info) => info!(
                "{}: node={}, cluster={}, uuid={}, distribution={}, version={}, major={:?}",
                prefix,
                server_info.get_node_name(),
                server_info.get_cluster_name(),
                server_info.get_cluster_uuid().unwrap_or("-"),
                server_info.get_distribution(),
                server_info.get_version(),
                server_info.get_version_major()
            ),
            Err(e) => warn!(
                "{}: server info unavailable at {}: {}",
                prefix,
                self.endpoint.get_url(),
                e
            ),
        }
    }
}

#[async_trait]
impl SearchStore for EsClient {
    async fn index_exists(&self, index: &str) -> Result<bool, SeedError> {
        let url = self.url(index);
        let request = inject_auth(self.http_client.head(&url), &self.endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| SeedError::connection(format!("HEAD {} failed: {}", url, e)))?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => {
                error!(status = %status, url = %url, "Index existence check failed");
                Err(SeedError::connection(format!(
                    "HEAD {} returned {}",
                    url, status
                )))
            }
        }
    }

    async fn create_index(&self, index: &str, body: &Value) -> Result<(), SeedError> {
        let url = self.url(index);
        let request = inject_auth(self.http_client.put(&url).json(body), &self.endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| SeedError::connection(format!("PUT {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Create index request failed");
            return Err(SeedError::create_index(format!(
                "Create index {} failed with status {}: {}",
                index, status, error_body
            )));
        }

        debug!(index = %index, "Create index acknowledged");
        Ok(())
    }

    async fn bulk(&self, actions: &[BulkIndexAction]) -> Result<BulkResponse, SeedError> {
        let _tmr = timer!("BULK_REQUEST", "{} actions", actions.len());

        let body = to_ndjson(actions)?;
        debug!(
            actions = actions.len(),
            payload = %human_bytes(body.len() as f64),
            "Sending bulk request"
        );

        let url = self.url("_bulk");
        let request = self
            .http_client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, NDJSON_CONTENT_TYPE)
            .body(body);
        let response = inject_auth(request, &self.endpoint)
            .send()
            .await
            .map_err(|e| SeedError::bulk_write(format!("POST {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk request failed");
            return Err(SeedError::bulk_write(format!(
                "Bulk request failed with status {}: {}",
                status, error_body
            )));
        }

        response
            .json::<BulkResponse>()
            .await
            .map_err(|e| SeedError::bulk_write(format!("malformed bulk response: {}", e)))
    }
}
