#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use cspreport_gateway::config::{self, LogFormat};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
reporter:
  listen: "0.0.0.0:8080"
  max_body_byte: 2048 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.reporter.listen, "0.0.0.0:8080");
    assert_eq!(cfg.reporter.path, "/csp");
    assert_eq!(cfg.reporter.max_body_bytes, 64 * 1024);
    assert_eq!(cfg.metrics.listen, "0.0.0.0:9200");
    assert_eq!(cfg.metrics.namespace, "csr");
    assert_eq!(cfg.log.format, LogFormat::Json);
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
reporter:
  listen: "127.0.0.1:8081"
  path: "/report/csp"
  max_body_bytes: 4096
metrics:
  listen: "127.0.0.1:9201"
  namespace: "foomo_csr"
log:
  format: pretty
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.reporter.listen_addr().unwrap().port(), 8081);
    assert_eq!(cfg.reporter.path, "/report/csp");
    assert_eq!(cfg.metrics.namespace, "foomo_csr");
    assert_eq!(cfg.log.format, LogFormat::Pretty);
}

#[test]
fn version_must_be_one() {
    assert!(config::load_from_str("version: 2\n").is_err());
}

#[test]
fn missing_version_fails() {
    assert!(config::load_from_str("reporter: {}\n").is_err());
}

#[test]
fn out_of_range_values_fail() {
    let cases = [
        "version: 1\nreporter: { max_body_bytes: 10 }\n",
        "version: 1\nreporter: { path: \"csp\" }\n",
        "version: 1\nreporter: { path: \"/:\" }\n",
        "version: 1\nreporter: { path: \"/report/:id\" }\n",
        "version: 1\nreporter: { path: \"/*rest\" }\n",
        "version: 1\nreporter: { path: \"/csp/\" }\n",
        "version: 1\nreporter: { path: \"//csp\" }\n",
        "version: 1\nreporter: { listen: \"localhost\" }\n",
        "version: 1\nmetrics: { namespace: \"9lives\" }\n",
        "version: 1\nmetrics: { namespace: \"with-dash\" }\n",
        "version: 1\nmetrics: { listen: \"0.0.0.0:8080\" }\n",
        "version: 1\nlog: { format: xml }\n",
    ];
    for c in cases {
        let err = config::load_from_str(c).expect_err(c);
        assert_eq!(err.client_code().as_str(), "INVALID_CONFIG", "{c}");
    }
}

#[test]
fn root_path_is_accepted_and_routable() {
    let cfg = config::load_from_str("version: 1\nreporter: { path: \"/\" }\n").expect("must parse");
    let _ = cspreport_gateway::router::build_report_router(
        cspreport_gateway::app_state::AppState::new(cfg),
    );
}
