use super::{apply_env, apply_file, load_settings, ClientSettings, DEFAULT_ENDPOINT_URL};

use std::{
    collections::HashMap,
    env, fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn defaults_point_at_mathjs_with_ten_digits() {
    let settings = ClientSettings::default();
    assert_eq!(settings.endpoint_url, DEFAULT_ENDPOINT_URL);
    assert_eq!(settings.precision, 10);
    assert_eq!(settings.request_timeout_secs, None);
}

#[test]
fn file_values_override_defaults() {
    let mut settings = ClientSettings::default();
    apply_file(
        &mut settings,
        "endpoint_url = \"http://127.0.0.1:9000/v4\"\nprecision = 4\nrequest_timeout_secs = 5\n",
        Path::new("calculator.toml"),
    );
    assert_eq!(settings.endpoint_url, "http://127.0.0.1:9000/v4");
    assert_eq!(settings.precision, 4);
    assert_eq!(settings.request_timeout_secs, Some(5));
}

#[test]
fn malformed_file_keeps_defaults() {
    let mut settings = ClientSettings::default();
    apply_file(&mut settings, "precision = [", Path::new("calculator.toml"));
    assert_eq!(settings, ClientSettings::default());
}

#[test]
fn negative_precision_in_file_is_ignored() {
    let mut settings = ClientSettings::default();
    apply_file(&mut settings, "precision = -3", Path::new("calculator.toml"));
    assert_eq!(settings.precision, 10);
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let vars: HashMap<&str, &str> = [
        ("CALC_ENDPOINT_URL", "http://plain.example/v4"),
        ("APP__ENDPOINT_URL", "http://app.example/v4"),
        ("APP__PRECISION", "not-a-number"),
        ("APP__REQUEST_TIMEOUT_SECS", "30"),
    ]
    .into_iter()
    .collect();

    let mut settings = ClientSettings::default();
    apply_env(&mut settings, |name| vars.get(name).map(|v| v.to_string()));

    assert_eq!(settings.endpoint_url, "http://app.example/v4");
    assert_eq!(settings.precision, 10);
    assert_eq!(settings.request_timeout_secs, Some(30));
}

#[test]
fn missing_file_is_not_an_error() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("remote_calc_missing_{suffix}.toml"));

    let settings = load_settings(Some(&path));
    assert_eq!(settings.precision, ClientSettings::default().precision);
}

#[test]
fn reads_settings_file_from_disk() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("remote_calc_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("calculator.toml");
    fs::write(&path, "precision = 6\n").expect("write settings");

    let settings = load_settings(Some(&path));
    assert_eq!(settings.precision, 6);

    fs::remove_dir_all(temp_root).expect("cleanup");
}
