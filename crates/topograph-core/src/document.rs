//! Saved topology documents, as persisted by the configuration form.
//!
//! A document is the raw form state: per-UPF role and coordinates (often still the strings the
//! user typed), the gNB count, the gNB -> UPF checkbox matrix, and the extra links. It is turned
//! into an engine [`Configuration`] once, at the boundary.

use crate::config::{Configuration, ExplicitLink, GatewayCoord};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Egress name used by the backend when a saved document does not carry one.
pub const DEFAULT_DOCUMENT_EGRESS_NAME: &str = "Remote Surgery";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GatewayRole {
    /// PDU session anchor; the single UPF wired to the data network.
    #[serde(rename = "PCA")]
    Pca,
    /// Edge UPF; the only role gNBs may be assigned to.
    #[serde(rename = "edge")]
    Edge,
    #[serde(rename = "intermediate")]
    Intermediate,
    #[default]
    #[serde(rename = "", other)]
    Unspecified,
}

/// A coordinate as stored by the form: either a JSON number or the raw input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate::Text(String::new())
    }
}

impl Coordinate {
    /// Numeric value; blank text reads as `0`, unparseable text as `None`.
    pub fn value(&self) -> Option<f64> {
        match self {
            Coordinate::Number(v) => Some(*v),
            Coordinate::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Some(0.0);
                }
                text.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coordinate::Number(v) => write!(f, "{v}"),
            Coordinate::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(rename = "type", default)]
    pub role: GatewayRole,
    #[serde(default)]
    pub x: Coordinate,
    #[serde(default)]
    pub y: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyDocument {
    /// Informational; the UPF list itself is authoritative.
    #[serde(rename = "numUPFs", default, skip_serializing_if = "Option::is_none")]
    pub num_upfs: Option<usize>,
    #[serde(default)]
    pub upf_configs: Vec<GatewayConfig>,
    #[serde(rename = "numGNBs", default, skip_serializing_if = "Option::is_none")]
    pub num_gnbs: Option<usize>,
    #[serde(default)]
    pub gnb_assignments: BTreeMap<usize, Vec<usize>>,
    #[serde(default)]
    pub links: Vec<ExplicitLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
    #[serde(default)]
    pub dns_upf_connections: Vec<usize>,
}

impl TopologyDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Index of the PCA gateway, if any. Errors when more than one UPF claims the role.
    pub fn pca_gateway(&self) -> Result<Option<usize>> {
        let mut pca: Option<usize> = None;
        for (idx, upf) in self.upf_configs.iter().enumerate() {
            if upf.role != GatewayRole::Pca {
                continue;
            }
            if let Some(first) = pca {
                return Err(Error::DuplicatePca {
                    first: first + 1,
                    second: idx + 1,
                });
            }
            pca = Some(idx);
        }
        Ok(pca)
    }

    fn is_edge_gateway(&self, gateway: usize) -> bool {
        self.upf_configs
            .get(gateway)
            .is_some_and(|c| c.role == GatewayRole::Edge)
    }
}

impl Configuration {
    /// Converts a saved form document into an engine configuration.
    ///
    /// - gNBs `0..numGNBs` each keep only their assignments to `edge` UPFs;
    /// - the PCA UPF, when present, is the sole data-network connection;
    /// - a blank `dnsName` falls back to [`DEFAULT_DOCUMENT_EGRESS_NAME`].
    pub fn from_document(doc: &TopologyDocument) -> Result<Self> {
        let pca = doc.pca_gateway()?;

        let mut gateway_coords = Vec::with_capacity(doc.upf_configs.len());
        for (idx, upf) in doc.upf_configs.iter().enumerate() {
            let coordinate = |axis: &'static str, c: &Coordinate| {
                c.value().ok_or_else(|| Error::InvalidCoordinate {
                    gateway: idx + 1,
                    axis,
                    value: c.to_string(),
                })
            };
            gateway_coords.push(GatewayCoord {
                x: coordinate("x", &upf.x)?,
                y: coordinate("y", &upf.y)?,
            });
        }

        let access_points = doc.num_gnbs.unwrap_or(doc.gnb_assignments.len());
        let access_assignments = (0..access_points)
            .map(|gnb| {
                let assigned: Vec<usize> = doc
                    .gnb_assignments
                    .get(&gnb)
                    .map(|upfs| {
                        upfs.iter()
                            .copied()
                            .filter(|&upf| doc.is_edge_gateway(upf))
                            .collect()
                    })
                    .unwrap_or_default();
                (gnb, assigned)
            })
            .collect();

        let egress_name = doc
            .dns_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_DOCUMENT_EGRESS_NAME)
            .to_string();

        let egress_gateway_connections = match pca {
            Some(idx) => vec![idx],
            None => doc.dns_upf_connections.clone(),
        };

        Ok(Self {
            gateway_coords,
            access_assignments,
            explicit_links: doc.links.clone(),
            egress_name,
            egress_gateway_connections,
        })
    }
}

/// Parses either an engine [`Configuration`] or a saved [`TopologyDocument`] (recognised by
/// its `upfConfigs` key) from JSON text.
pub fn parse_configuration_json(text: &str) -> Result<Configuration> {
    let value: Value = serde_json::from_str(text)?;
    // The backend wraps loaded documents as `{ "status": ..., "data": {...} }`.
    let value = match value {
        Value::Object(mut map) if map.contains_key("status") && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    if value.get("upfConfigs").is_some() {
        let doc: TopologyDocument = serde_json::from_value(value)?;
        tracing::debug!(
            upfs = doc.upf_configs.len(),
            gnbs = ?doc.num_gnbs,
            "converting saved topology document"
        );
        return Configuration::from_document(&doc);
    }
    Ok(serde_json::from_value(value)?)
}
