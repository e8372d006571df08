use pocketbook_config::{Config, ConfigError, ConfigManager};
use std::{fs, path::PathBuf};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency_symbol.is_empty());
    assert!(!cfg.expenses_file.is_empty());
    assert!(!cfg.tasks_file.is_empty());
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path());

    let loaded = manager.load().expect("load defaults");
    assert_eq!(loaded, Config::default());
    assert!(!manager.config_path().exists());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("nested").join("config.json"));

    let mut cfg = Config::default();
    cfg.currency_symbol = "€".to_string();
    cfg.ui_color_enabled = false;
    cfg.data_root = Some(PathBuf::from("/tmp/records"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("nested").join("config.json.tmp").exists());
}

#[test]
fn malformed_config_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path());
    fs::write(manager.config_path(), "currency = 'toml?'").unwrap();

    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}
