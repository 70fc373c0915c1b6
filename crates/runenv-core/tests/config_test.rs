use runenv_core::RunenvConfig;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = RunenvConfig::load(tmp.path()).unwrap();

    assert_eq!(config.deploy.env_file, PathBuf::from(".env"));
    assert_eq!(config.deploy.source, ".");
    assert_eq!(config.deploy.port, 8000);
    assert!(config.deploy.allow_unauthenticated);
    assert_eq!(
        config.deploy.forward_env,
        vec![
            "GOOGLE_CLOUD_PROJECT",
            "GOOGLE_CLOUD_LOCATION",
            "GOOGLE_GENAI_USE_VERTEXAI",
        ]
    );
    assert_eq!(config.logs.limit, 100);
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[deploy]
env_file = "deploy/.env.prod"
source = "./service"
port = 8080
allow_unauthenticated = false
forward_env = ["GOOGLE_CLOUD_PROJECT", "FIREBASE_SECRET_ID"]

[logs]
limit = 25
"#;
    std::fs::write(tmp.path().join("runenv.toml"), toml).unwrap();

    let config = RunenvConfig::load(tmp.path()).unwrap();

    assert_eq!(config.deploy.env_file, PathBuf::from("deploy/.env.prod"));
    assert_eq!(config.deploy.source, "./service");
    assert_eq!(config.deploy.port, 8080);
    assert!(!config.deploy.allow_unauthenticated);
    assert_eq!(
        config.deploy.forward_env,
        vec!["GOOGLE_CLOUD_PROJECT", "FIREBASE_SECRET_ID"]
    );
    assert_eq!(config.logs.limit, 25);
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[deploy]
port = 3000
"#;
    std::fs::write(tmp.path().join("runenv.toml"), toml).unwrap();

    let config = RunenvConfig::load(tmp.path()).unwrap();

    assert_eq!(config.deploy.port, 3000);
    // Defaults preserved
    assert_eq!(config.deploy.source, ".");
    assert_eq!(config.deploy.forward_env.len(), 3);
    assert_eq!(config.logs.limit, 100);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("runenv.toml"), "not valid {{{{ toml").unwrap();

    let result = RunenvConfig::load(tmp.path());
    assert!(result.is_err());

    let err = result.unwrap_err().to_string();
    assert!(err.contains("parse"));
}

#[test]
fn load_wrong_type_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("runenv.toml"),
        "[deploy]\nport = \"eight thousand\"\n",
    )
    .unwrap();

    let err = RunenvConfig::load(tmp.path()).unwrap_err();
    assert!(matches!(err, runenv_core::Error::ConfigParse { .. }));
}

#[test]
fn load_empty_config_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("runenv.toml"), "").unwrap();

    let config = RunenvConfig::load(tmp.path()).unwrap();
    assert_eq!(config.deploy.port, 8000);
}

#[test]
fn load_empty_forward_list_is_kept() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("runenv.toml"),
        "[deploy]\nforward_env = []\n",
    )
    .unwrap();

    let config = RunenvConfig::load(tmp.path()).unwrap();
    assert!(config.deploy.forward_env.is_empty());
}
