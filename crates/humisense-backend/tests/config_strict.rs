#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use humisense_backend::config::{self, SourceKind};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  prot: 4000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn empty_document_is_defaults() {
    let cfg = config::load_from_str("").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.port, 3001);
    assert_eq!(cfg.server.service_name, "backend");
    assert_eq!(cfg.source.kind, SourceKind::Stub);
    assert_eq!(cfg.ui.title, "Humidity Sensor UI");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  host: "127.0.0.1"
  port: 8081
  service_name: "greenhouse"
source:
  kind: simulated
  dht20_addr: 0x38
  photores_gpio: 27
  simulated:
    humidity: 70.5
    temperature_c: 18.0
    light_raw: 900
ui:
  caption: "Greenhouse 2"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().to_string(), "127.0.0.1:8081");
    assert_eq!(cfg.source.kind, SourceKind::Simulated);
    assert_eq!(cfg.source.photores_gpio, 27);
    assert_eq!(cfg.source.simulated.light_raw, 900);
    assert_eq!(cfg.ui.caption, "Greenhouse 2");
    assert_eq!(cfg.ui.button_label, "Test Button");
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn out_of_range_simulation_rejected() {
    let bad = r#"
source:
  kind: simulated
  simulated:
    humidity: 140.0
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn bad_host_rejected() {
    let bad = r#"
server:
  host: "not-an-ip"
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn port_env_defaults_to_3001() {
    let cfg = config::load("does-not-exist.yaml", None).unwrap();
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 3001);
}

#[test]
fn port_env_overrides_port() {
    let cfg = config::load("does-not-exist.yaml", Some("4242")).unwrap();
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 4242);

    let mut cfg = config::load_from_str("server:\n  port: 9000\n").unwrap();
    cfg.server.apply_port_override(Some("5000")).unwrap();
    assert_eq!(cfg.server.port, 5000);
}

#[test]
fn invalid_port_env_rejected() {
    for raw in ["abc", "70000", "-1", ""] {
        let err = config::load("does-not-exist.yaml", Some(raw)).expect_err(raw);
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    }
}

#[test]
fn empty_port_env_explains_itself() {
    let err = config::load("does-not-exist.yaml", Some("")).expect_err("empty PORT");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    assert!(err.to_string().contains("PORT is set but empty"));
}
