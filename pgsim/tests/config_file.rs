use pgsim::{AppConfig, Format, Overrides, simulate, write_reports};
use rstest::*;
use std::{fs, path::PathBuf};

#[fixture]
fn config_path() -> PathBuf {
    let path = std::env::temp_dir().join(format!("pgsim-{}.toml", std::process::id()));
    fs::write(
        &path,
        r#"
[model]
gap_threshold = 1.10

[presets.sauces]
label = "Pasta Sauces"

[presets.sauces.base_demand]
default = 12000.0
"#,
    )
    .unwrap();
    path
}

#[rstest]
#[tokio::test]
async fn file_layers_over_defaults(config_path: PathBuf) {
    let config = AppConfig::load(Some(config_path.as_path())).unwrap();
    fs::remove_file(&config_path).unwrap();

    assert_eq!(config.model.gap_threshold, 1.10);
    assert_eq!(config.model.penalty_factor, 0.70);
    assert_eq!(config.presets.len(), 3);

    let reports = simulate(&config, vec!["sauces".to_owned()], &Overrides::default())
        .await
        .unwrap();
    assert_eq!(reports[0].label.as_deref(), Some("Pasta Sauces"));
    assert_eq!(reports[0].parameters.base_demand, 12000.0);
    assert_eq!(reports[0].parameters.gap_threshold, 1.10);

    let mut text = Vec::new();
    write_reports(&reports, Format::Text, &mut text).unwrap();
    let text = String::from_utf8(text).unwrap();
    assert!(text.starts_with("Pasta Sauces\n"));
    assert!(text.contains("Nash Equilibrium (Profit-Based)"));
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("pgsim-does-not-exist.toml");
    let err = AppConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}
