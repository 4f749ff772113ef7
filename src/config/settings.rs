//! Configuration settings structures.
//!
//! These structs represent the endpoint configuration tree, matching the
//! keys in `endpoint.yml` / `deployment.yml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Which default port a role binds to when `port == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Agent,
    Manager,
}

impl Role {
    pub fn default_port(self) -> u16 {
        match self {
            Role::Agent => crate::DEFAULT_AGENT_PORT,
            Role::Manager => crate::DEFAULT_MANAGER_PORT,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Agent
    }
}

/// Top-level endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub log: String,

    pub role: Role,
    pub bind_address: String,
    /// 0 means "use the role's default" (161 for Agent, 162 for Manager).
    pub bind_port: u16,
    pub recv_buffer_size: usize,

    pub community: Vec<String>,
    pub community_rw: Vec<String>,
    pub snmpver: u8,
    pub snmptimeout_us: u64,
    pub snmpretries: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            log: "warning".into(),
            role: Role::Agent,
            bind_address: "0.0.0.0".into(),
            bind_port: 0,
            recv_buffer_size: crate::MAX_DATAGRAM_SIZE,
            community: vec!["public".into()],
            community_rw: vec!["private".into()],
            snmpver: 1,
            snmptimeout_us: 3_000_000,
            snmpretries: 2,
        }
    }
}

impl EndpointConfig {
    /// Resolves the effective bind port: `bind_port` if non-zero,
    /// otherwise the role's default.
    pub fn effective_port(&self) -> u16 {
        if self.bind_port == 0 {
            self.role.default_port()
        } else {
            self.bind_port
        }
    }

    /// Apply overrides from a YAML value (deployment.yml).
    pub fn apply_overrides(&mut self, overrides: &serde_yaml::Value) -> Result<()> {
        if let Some(v) = overrides.get("community") {
            if let Ok(communities) = serde_yaml::from_value::<Vec<String>>(v.clone()) {
                self.community = communities;
            }
        }
        if let Some(v) = overrides.get("community_rw") {
            if let Ok(communities) = serde_yaml::from_value::<Vec<String>>(v.clone()) {
                self.community_rw = communities;
            }
        }
        if let Some(v) = overrides.get("bind_address").and_then(|v| v.as_str()) {
            self.bind_address = v.to_string();
        }
        if let Some(v) = overrides.get("bind_port").and_then(|v| v.as_u64()) {
            self.bind_port = v as u16;
        }
        if let Some(v) = overrides.get("snmpretries").and_then(|v| v.as_u64()) {
            self.snmpretries = v as u32;
        }
        Ok(())
    }

    /// Apply environment variable overrides (for container deployments).
    pub fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SNMP_ENDPOINT_COMMUNITY") {
            self.community = v.split(',').map(String::from).collect();
        }
        if let Ok(v) = std::env::var("SNMP_ENDPOINT_BIND_ADDRESS") {
            self.bind_address = v;
        }
        if let Ok(v) = std::env::var("SNMP_ENDPOINT_BIND_PORT") {
            if let Ok(port) = v.parse() {
                self.bind_port = port;
            }
        }
    }
}
