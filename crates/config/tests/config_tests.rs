use neo_config::{ClientConfig, ConfigError, NetworkType};
use std::io::Write;

#[test]
fn test_partial_toml_uses_defaults() {
    let config = ClientConfig::from_toml_str(
        r#"
        network = "MainNet"
        allow_transmission_on_fault = true
        "#,
    )
    .unwrap();

    assert_eq!(config.network, NetworkType::MainNet);
    assert!(config.allow_transmission_on_fault);
    assert_eq!(config.max_valid_until_block_increment, 5760);
    assert_eq!(config.network_magic(), 0x334f454e);
}

#[test]
fn test_private_network_requires_magic() {
    let err = ClientConfig::from_toml_str(r#"network = "Private""#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let config = ClientConfig::from_toml_str(
        r#"
        network = "Private"
        network_magic = 769
        "#,
    )
    .unwrap();
    assert_eq!(config.network_magic(), 769);
}

#[test]
fn test_rejects_zero_increment_and_bad_token() {
    assert!(ClientConfig::from_toml_str("max_valid_until_block_increment = 0").is_err());
    assert!(ClientConfig::from_toml_str(r#"fee_token_hash = "0x1234""#).is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rpc_url = \"http://seed1t5.neo.org:20332\"").unwrap();
    writeln!(file, "request_timeout_ms = 5000").unwrap();

    let config = ClientConfig::load(file.path()).unwrap();
    assert_eq!(config.rpc_url, "http://seed1t5.neo.org:20332");
    assert_eq!(config.request_timeout_ms, 5000);
}

#[test]
fn test_unparseable_toml() {
    let err = ClientConfig::from_toml_str("network = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
