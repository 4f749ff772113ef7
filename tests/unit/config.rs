//! Unit tests for the endpoint configuration layer.

use pretty_assertions::assert_eq;
use snmp_endpoint::config::settings::*;

#[test]
fn default_role_is_agent_on_port_161() {
    let config = EndpointConfig::default();
    assert_eq!(config.role, Role::Agent);
    assert_eq!(config.effective_port(), 161);
}

#[test]
fn manager_role_defaults_to_162() {
    let mut config = EndpointConfig::default();
    config.role = Role::Manager;
    assert_eq!(config.effective_port(), 162);
}

#[test]
fn explicit_port_overrides_role_default() {
    let mut config = EndpointConfig::default();
    config.bind_port = 1161;
    assert_eq!(config.effective_port(), 1161);
}

#[test]
fn default_communities_are_public_and_private() {
    let config = EndpointConfig::default();
    assert_eq!(config.community, vec!["public".to_string()]);
    assert_eq!(config.community_rw, vec!["private".to_string()]);
}

#[test]
fn apply_overrides_replaces_community_list() {
    let mut config = EndpointConfig::default();
    let overrides: serde_yaml::Value =
        serde_yaml::from_str("community: [\"secret1\", \"secret2\"]").unwrap();
    config.apply_overrides(&overrides).unwrap();
    assert_eq!(config.community, vec!["secret1", "secret2"]);
}

#[test]
fn apply_overrides_replaces_bind_address_and_port() {
    let mut config = EndpointConfig::default();
    let overrides: serde_yaml::Value =
        serde_yaml::from_str("bind_address: \"10.0.0.5\"\nbind_port: 9161").unwrap();
    config.apply_overrides(&overrides).unwrap();
    assert_eq!(config.bind_address, "10.0.0.5");
    assert_eq!(config.bind_port, 9161);
}

#[test]
fn apply_overrides_ignores_unknown_keys() {
    let mut config = EndpointConfig::default();
    let before = config.clone();
    let overrides: serde_yaml::Value = serde_yaml::from_str("unknown_field: 42").unwrap();
    config.apply_overrides(&overrides).unwrap();
    assert_eq!(config.bind_address, before.bind_address);
    assert_eq!(config.community, before.community);
}

#[test]
fn env_overrides_take_precedence_over_defaults() {
    std::env::set_var("SNMP_ENDPOINT_COMMUNITY", "envcomm1,envcomm2");
    std::env::set_var("SNMP_ENDPOINT_BIND_ADDRESS", "127.0.0.1");
    std::env::set_var("SNMP_ENDPOINT_BIND_PORT", "1610");

    let mut config = EndpointConfig::default();
    config.apply_env_overrides();

    assert_eq!(config.community, vec!["envcomm1", "envcomm2"]);
    assert_eq!(config.bind_address, "127.0.0.1");
    assert_eq!(config.bind_port, 1610);

    std::env::remove_var("SNMP_ENDPOINT_COMMUNITY");
    std::env::remove_var("SNMP_ENDPOINT_BIND_ADDRESS");
    std::env::remove_var("SNMP_ENDPOINT_BIND_PORT");
}

#[test]
fn invalid_env_port_is_ignored() {
    std::env::set_var("SNMP_ENDPOINT_BIND_PORT", "not-a-port");
    let mut config = EndpointConfig::default();
    config.apply_env_overrides();
    assert_eq!(config.bind_port, 0);
    std::env::remove_var("SNMP_ENDPOINT_BIND_PORT");
}
