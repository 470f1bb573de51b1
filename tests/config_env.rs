use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use reliability::{CONFIG_ENV, LogLevel, default_config_path, load_config};

struct EnvGuard;

impl EnvGuard {
    fn set(value: &std::path::Path) -> Self {
        unsafe {
            std::env::set_var(CONFIG_ENV, value);
        }
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            std::env::remove_var(CONFIG_ENV);
        }
    }
}

#[test]
#[serial]
fn env_override_is_used_for_path_and_load() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("custom_config.xml");
    fs::write(
        &cfg,
        r#"<config>
  <log_level>info</log_level>
  <json_logs>true</json_logs>
</config>"#,
    )
    .unwrap();
    let _env = EnvGuard::set(&cfg);

    assert_eq!(default_config_path().unwrap(), cfg);
    let loaded = load_config().unwrap().expect("config present");
    assert_eq!(loaded.log_level, LogLevel::Info);
    assert!(loaded.json);
    assert_eq!(loaded.log_file, None);
}

#[test]
#[serial]
fn malformed_file_is_an_error() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("broken.xml");
    fs::write(&cfg, "<config><log_level>info</config>").unwrap();
    let _env = EnvGuard::set(&cfg);

    assert!(load_config().is_err());
}

#[test]
#[serial]
fn default_location_ends_with_app_dir() {
    unsafe {
        std::env::remove_var(CONFIG_ENV);
    }
    let p = default_config_path().unwrap();
    assert!(p.ends_with("reliability/config.xml"), "{}", p.display());
}
