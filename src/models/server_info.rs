use semver::Version as Semver;
use serde::{Deserialize, Serialize};

/// Response of `GET /` on an Elasticsearch or OpenSearch node.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerInfo {
    #[serde(rename = "name")]
    node_name: String,
    cluster_name: String,
    #[serde(default)]
    cluster_uuid: Option<String>,
    version: Version,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Version {
    number: String,
    #[serde(default)]
    distribution: Option<String>,
    #[serde(default)]
    lucene_version: Option<String>,
}

impl ServerInfo {
    pub fn get_node_name(&self) -> &String {
        &self.node_name
    }
    pub fn get_cluster_name(&self) -> &String {
        &self.cluster_name
    }
    pub fn get_cluster_uuid(&self) -> Option<&str> {
        self.cluster_uuid.as_deref()
    }
    pub fn get_version(&self) -> &String {
        &self.version.number
    }
    pub fn get_distribution(&self) -> &str {
        self.version
            .distribution
            .as_deref()
            .unwrap_or("elasticsearch")
    }

    pub fn get_version_major(&self) -> Option<u64> {
        Semver::parse(&self.version.number).ok().map(|v| v.major)
    }
}
