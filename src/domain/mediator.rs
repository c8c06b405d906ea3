//! Mediator descriptor models
//!
//! These mirror the mediator registration document the OpenHIM core API accepts
//! on `POST /mediators`, and the channel document accepted on `POST /channels`.
//! Fields the bridge does not inspect are carried through untouched in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A mediator registration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediatorDescriptor {
    /// Unique mediator URN, e.g. `urn:mediator:shr`
    pub urn: String,

    /// Mediator version
    pub version: String,

    /// Human-readable name
    pub name: String,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Endpoints the switch can reach this mediator on
    #[serde(default)]
    pub endpoints: Vec<RouteDefinition>,

    /// Channels to install alongside the mediator
    #[serde(default)]
    pub default_channel_config: Vec<ChannelDefinition>,

    /// Remaining document fields (config definitions, defaults, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MediatorDescriptor {
    /// The channel installed for this mediator at startup
    pub fn default_channel(&self) -> Option<&ChannelDefinition> {
        self.default_channel_config.first()
    }
}

/// A routing channel on the switch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDefinition {
    /// Channel name (unique on the switch)
    pub name: String,

    /// Regular expression matched against incoming request paths
    pub url_pattern: String,

    /// Routes requests are forwarded to
    #[serde(default)]
    pub routes: Vec<RouteDefinition>,

    /// Roles or clients allowed to use the channel
    #[serde(default)]
    pub allow: Vec<String>,

    /// HTTP methods accepted
    #[serde(default)]
    pub methods: Vec<String>,

    /// Channel type
    #[serde(rename = "type", default = "default_route_type")]
    pub channel_type: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A route or endpoint target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDefinition {
    pub name: String,
    pub host: String,
    pub port: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default)]
    pub primary: bool,

    #[serde(rename = "type", default = "default_route_type")]
    pub route_type: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_route_type() -> String {
    "http".to_string()
}
