use std::path::{Path, PathBuf};

use serde_with::skip_serializing_none;
use twelf::reexports::serde::{Deserialize, Serialize};
use twelf::{config, Layer};

use crate::errors::SeedError;
use crate::schema::DEFAULT_INDEX_NAME;
use crate::seeder::{SeedPlan, DEFAULT_DOCUMENT_COUNT};

pub const ENV_PREFIX: &str = "ES_SEED_";
pub const DEFAULT_URL: &str = "http://localhost:9200";
const REDACTED_VALUE: &str = "***";

#[config]
#[derive(Debug, Default)]
pub struct Config {
    #[serde(default)]
    endpoint: Option<Endpoint>,
    #[serde(default)]
    index_name: Option<String>,
    #[serde(default)]
    document_count: Option<usize>,
    #[serde(default)]
    strict: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Endpoint {
    #[serde(default = "default_url")]
    url: String,
    #[serde(default)]
    basic_auth: Option<BasicAuth>,
    #[serde(default)]
    root_certificates: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BasicAuth {
    username: String,
    #[serde(default)]
    password: Option<String>,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: default_url(),
            basic_auth: None,
            root_certificates: Vec::new(),
        }
    }
}

/// Loads the config file (TOML, or JSON by extension) if one is given, then
/// lets `ES_SEED_*` environment variables override it.
pub fn load(path: Option<&Path>) -> Result<Config, SeedError> {
    let mut layers = Vec::new();
    if let Some(path) = path {
        if !path.is_file() {
            return Err(SeedError::config(format!(
                "config file {:?} does not exist",
                path
            )));
        }
        layers.push(file_layer(path.to_path_buf()));
    }
    layers.push(Layer::Env(Some(ENV_PREFIX.to_string())));

    Config::with_layers(&layers).map_err(|e| SeedError::config(e.to_string()))
}

fn file_layer(path: PathBuf) -> Layer {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Layer::Json(path),
        _ => Layer::Toml(path),
    }
}

impl Config {
    pub fn new(endpoint: Endpoint, index_name: &str, document_count: usize, strict: bool) -> Self {
        Self {
            endpoint: Some(endpoint),
            index_name: Some(index_name.to_string()),
            document_count: Some(document_count),
            strict: Some(strict),
        }
    }

    pub fn get_endpoint(&self) -> Endpoint {
        self.endpoint.clone().unwrap_or_default()
    }
    pub fn get_index_name(&self) -> String {
        self.index_name
            .clone()
            .unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string())
    }
    pub fn get_document_count(&self) -> usize {
        self.document_count.unwrap_or(DEFAULT_DOCUMENT_COUNT)
    }
    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    /// Command line values take precedence over file and environment.
    pub fn with_overrides(
        mut self,
        url: Option<String>,
        index_name: Option<String>,
        document_count: Option<usize>,
        strict: bool,
    ) -> Self {
        if let Some(url) = url {
            let mut endpoint = self.get_endpoint();
            endpoint.url = url;
            self.endpoint = Some(endpoint);
        }
        if index_name.is_some() {
            self.index_name = index_name;
        }
        if document_count.is_some() {
            self.document_count = document_count;
        }
        if strict {
            self.strict = Some(true);
        }
        self
    }

    pub fn validate(&self) -> Result<(), SeedError> {
        let url = self.get_endpoint().url;
        reqwest::Url::parse(&url)
            .map_err(|e| SeedError::config(format!("invalid endpoint url {:?}: {}", url, e)))?;
        if self.get_index_name().trim().is_empty() {
            return Err(SeedError::config("index_name must not be empty"));
        }
        if self.get_document_count() == 0 {
            return Err(SeedError::config("document_count must be at least 1"));
        }
        Ok(())
    }

    pub fn to_plan(&self) -> SeedPlan {
        SeedPlan {
            index_name: self.get_index_name(),
            document_count: self.get_document_count(),
            strict: self.is_strict(),
            ..SeedPlan::default()
        }
    }
}

impl BasicAuth {
    pub fn new(username: &str, password: Option<&str>) -> Self {
        Self {
            username: username.to_string(),
            password: password.map(str::to_string),
        }
    }
    pub fn get_username(&self) -> &String {
        &self.username
    }
    pub fn get_password(&self) -> &Option<String> {
        &self.password
    }
}

impl Endpoint {
    pub fn new(url: &str, basic_auth: Option<BasicAuth>, root_certificates: Vec<String>) -> Self {
        Self {
            url: url.to_string(),
            basic_auth,
            root_certificates,
        }
    }
    pub fn get_url(&self) -> &String {
        &self.url
    }
    pub fn get_root_certificates(&self) -> &Vec<String> {
        &self.root_certificates
    }
    pub fn has_basic_auth(&self) -> bool {
        self.basic_auth.is_some()
    }
    pub fn get_username(&self) -> String {
        self.basic_auth
            .as_ref()
            .map(|auth| auth.username.clone())
            .unwrap_or_default()
    }
    pub fn get_password(&self) -> Option<String> {
        self.basic_auth
            .as_ref()
            .and_then(|auth| auth.password.clone())
    }

    /// Copy safe to print: the password, if any, is masked.
    pub fn redacted(&self) -> Self {
        let mut endpoint = self.clone();
        if let Some(auth) = endpoint.basic_auth.as_mut() {
            if auth.password.is_some() {
                auth.password = Some(REDACTED_VALUE.to_string());
            }
        }
        endpoint
    }
}
