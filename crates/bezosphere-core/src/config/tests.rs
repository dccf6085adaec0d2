use super::*;
use serial_test::serial;
use std::env;
use std::io::Write;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_bezosphere_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("BEZOSPHERE_POSTGRES_CONN");
        env::remove_var("BEZOSPHERE_SPANX_ADDRESS");
        env::remove_var("BEZOSPHERE_ADDRESS");
        env::remove_var("BEZOSPHERE_CERT");
        env::remove_var("BEZOSPHERE_CERT_KEY");
    }
}

fn write_temp_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"placeholder").expect("write temp file");
    file
}

#[test]
#[serial]
fn from_env_fails_when_required_vars_are_missing() {
    clear_bezosphere_env();
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::MissingEnvVar { name } if name == "BEZOSPHERE_SPANX_ADDRESS"));
}

#[test]
#[serial]
fn from_env_reads_all_fields() {
    clear_bezosphere_env();
    let config = with_env_vars(
        &[
            ("BEZOSPHERE_POSTGRES_CONN", "postgres://localhost/bezosphere"),
            ("BEZOSPHERE_SPANX_ADDRESS", "spanx.internal:8443"),
            ("BEZOSPHERE_ADDRESS", "0.0.0.0:9000"),
            ("BEZOSPHERE_CERT", "/etc/bezosphere/server.crt"),
            ("BEZOSPHERE_CERT_KEY", "/etc/bezosphere/server.key"),
        ],
        Config::from_env,
    )
    .unwrap();

    assert_eq!(
        config.postgres_conn.as_deref(),
        Some("postgres://localhost/bezosphere")
    );
    assert_eq!(config.spanx_address, "spanx.internal:8443");
    assert_eq!(config.address, "0.0.0.0:9000");
    assert_eq!(config.cert, PathBuf::from("/etc/bezosphere/server.crt"));
    assert!(config.has_store());
}

#[test]
#[serial]
fn from_env_allows_absent_postgres_conn() {
    clear_bezosphere_env();
    let config = with_env_vars(
        &[
            ("BEZOSPHERE_SPANX_ADDRESS", "spanx.internal:8443"),
            ("BEZOSPHERE_ADDRESS", "0.0.0.0:9000"),
            ("BEZOSPHERE_CERT", "/etc/bezosphere/server.crt"),
            ("BEZOSPHERE_CERT_KEY", "/etc/bezosphere/server.key"),
        ],
        Config::from_env,
    )
    .unwrap();

    assert!(!config.has_store());
}

#[test]
fn validate_rejects_unparseable_address() {
    let cert = write_temp_file();
    let config = Config {
        postgres_conn: None,
        spanx_address: "spanx:8443".to_string(),
        address: "not-an-address".to_string(),
        cert: cert.path().to_path_buf(),
        cert_key: cert.path().to_path_buf(),
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
}

#[test]
fn validate_rejects_missing_cert_file() {
    let cert = write_temp_file();
    let config = Config {
        postgres_conn: None,
        spanx_address: "spanx:8443".to_string(),
        address: "0.0.0.0:9000".to_string(),
        cert: PathBuf::from("/nonexistent/server.crt"),
        cert_key: cert.path().to_path_buf(),
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn validate_accepts_well_formed_config() {
    let cert = write_temp_file();
    let key = write_temp_file();
    let config = Config {
        postgres_conn: Some("postgres://localhost/bezosphere".to_string()),
        spanx_address: "spanx:8443".to_string(),
        address: "0.0.0.0:9000".to_string(),
        cert: cert.path().to_path_buf(),
        cert_key: key.path().to_path_buf(),
    };

    config.validate().unwrap();
}
