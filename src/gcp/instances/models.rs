//! Compute instance data models

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::gcp::traits::PagedResponse;

/// A compute instance from the aggregated list API
///
/// `project_id` and `zone` are not part of the payload; the collector
/// stamps them after deserialization.
#[derive(Deserialize, Debug, Clone)]
pub struct Instance {
    pub id: String,

    pub name: String,

    /// Full machine-type resource URL
    #[serde(rename = "machineType")]
    pub machine_type: String,

    #[serde(rename = "networkInterfaces", default)]
    pub network_interfaces: Vec<NetworkInterface>,

    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    #[serde(default)]
    pub tags: Tags,

    /// Owning project id, stamped by the collector
    #[serde(skip)]
    pub project_id: String,

    /// Short zone name, stamped by the collector
    #[serde(skip)]
    pub zone: String,
}

impl Instance {
    /// Last path segment of the machine-type resource URL
    pub fn machine_type_short(&self) -> &str {
        self.machine_type
            .rsplit('/')
            .next()
            .unwrap_or(&self.machine_type)
    }

    /// First interface's internal address, or "none"
    pub fn internal_ip(&self) -> &str {
        self.network_interfaces
            .first()
            .and_then(|ni| ni.network_ip.as_deref())
            .unwrap_or("none")
    }

    /// First interface's first access-config NAT address, or "none"
    pub fn external_ip(&self) -> &str {
        self.network_interfaces
            .first()
            .and_then(|ni| ni.access_configs.first())
            .and_then(|ac| ac.nat_ip.as_deref())
            .unwrap_or("none")
    }

    /// Labels rendered as "key=value, ..." pairs, or "none" when absent
    pub fn labels_display(&self) -> String {
        if self.labels.is_empty() {
            return "none".to_string();
        }
        self.labels
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Network tag items joined with ", " (empty string when none)
    pub fn tags_display(&self) -> String {
        self.tags.items.join(", ")
    }
}

/// Network interface on an instance
#[derive(Deserialize, Debug, Clone)]
pub struct NetworkInterface {
    #[serde(rename = "networkIP")]
    pub network_ip: Option<String>,

    #[serde(rename = "accessConfigs", default)]
    pub access_configs: Vec<AccessConfig>,
}

/// External access configuration on a network interface
#[derive(Deserialize, Debug, Clone)]
pub struct AccessConfig {
    #[serde(rename = "natIP")]
    pub nat_ip: Option<String>,
}

/// Network tags block
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Tags {
    #[serde(default)]
    pub items: Vec<String>,
}

/// Per-zone bucket in an aggregated list response
///
/// Zones with no instances carry only a warning object, hence the default.
#[derive(Deserialize, Debug)]
pub struct InstancesScopedList {
    #[serde(default)]
    pub instances: Vec<Instance>,
}

/// Response wrapper for the aggregated instance list endpoint
///
/// Zone keys look like "zones/us-central1-a"; a BTreeMap keeps the
/// per-page zone order deterministic.
#[derive(Deserialize, Debug)]
pub struct AggregatedInstancesResponse {
    #[serde(default)]
    pub items: BTreeMap<String, InstancesScopedList>,

    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

impl PagedResponse<Instance> for AggregatedInstancesResponse {
    /// Flatten the zone-keyed map, stamping each instance with the short
    /// zone name extracted from its scope key
    fn into_items(self) -> Vec<Instance> {
        let mut instances = Vec::new();
        for (scope, scoped) in self.items {
            let zone = scope.rsplit('/').next().unwrap_or(&scope).to_string();
            for mut instance in scoped.instances {
                instance.zone = zone.clone();
                instances.push(instance);
            }
        }
        instances
    }

    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}
