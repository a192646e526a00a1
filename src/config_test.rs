use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 9000 ")), Ok(9000));
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn parse_bind_addr_defaults_to_unspecified() {
    assert_eq!(parse_bind_addr(None), Ok(DEFAULT_BIND_ADDR));
}

#[test]
fn parse_bind_addr_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_bind_addr(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert!(parse_bind_addr(Some("::1")).is_ok_and(|addr| addr.is_loopback()));
}

#[test]
fn parse_bind_addr_rejects_hostnames() {
    assert_eq!(
        parse_bind_addr(Some("localhost")),
        Err(ConfigError::InvalidBindAddr("localhost".into()))
    );
}

#[test]
fn resolve_data_dir_defaults_to_manifest_data() {
    let dir = resolve_data_dir(None);
    assert!(dir.ends_with("data"));
    assert!(dir.join("raw.json").is_file());
}

#[test]
fn resolve_data_dir_uses_override() {
    assert_eq!(resolve_data_dir(Some("/srv/collections")), PathBuf::from("/srv/collections"));
}

#[test]
fn socket_addr_combines_bind_and_port() {
    let config = ServerConfig {
        bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 4000,
        data_dir: default_data_dir(),
    };
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4000");
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT: x");
    assert_eq!(ConfigError::InvalidBindAddr("y".into()).to_string(), "invalid BIND_ADDR: y");
}
