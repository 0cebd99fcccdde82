use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use marquee::config::Configuration;

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
slides:
  - label: one
  - label: two
    asset: "assets/two.jpg"
advance-interval: 3s
transition-duration: 500ms
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.slides.len(), 2);
    assert_eq!(cfg.slides[0].label, "one");
    assert_eq!(cfg.slides[0].asset, None);
    assert_eq!(cfg.slides[1].asset, Some(PathBuf::from("assets/two.jpg")));
    assert_eq!(cfg.advance_interval, Duration::from_secs(3));
    assert_eq!(cfg.transition_duration, Duration::from_millis(500));
    assert!(cfg.menu.is_none());
}

#[test]
fn defaults_apply_when_fields_are_omitted() {
    let cfg: Configuration = serde_yaml::from_str("slides: []").unwrap();
    assert!(cfg.slides.is_empty());
    assert_eq!(cfg.advance_interval, Duration::from_secs(3));
    assert_eq!(cfg.transition_duration, Duration::from_millis(500));
    assert!(cfg.menu.is_none());
}

#[test]
fn parse_menu_section() {
    let yaml = r#"
menu:
  toggle-id: navbar-toggler
  menu-id: mobile-menu
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let menu = cfg.menu.expect("menu section should parse");
    assert_eq!(menu.toggle_id, "navbar-toggler");
    assert_eq!(menu.menu_id, "mobile-menu");
}

#[test]
fn empty_deck_passes_validation() {
    // An empty deck disables the carousel at wiring time; it is not a
    // configuration error.
    let cfg: Configuration = serde_yaml::from_str("slides: []").unwrap();
    assert!(cfg.validated().is_ok());
}

#[test]
fn zero_advance_interval_is_rejected() {
    let cfg: Configuration = serde_yaml::from_str("advance-interval: 0s").unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("advance-interval"));
}

#[test]
fn transition_longer_than_interval_is_rejected() {
    let yaml = r#"
advance-interval: 1s
transition-duration: 2s
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("transition-duration"));
}

#[test]
fn empty_menu_id_is_rejected() {
    let yaml = r#"
menu:
  toggle-id: ""
  menu-id: mobile-menu
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("toggle-id"));
}

#[test]
fn load_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "slides:\n  - label: alpha\nadvance-interval: 250ms\ntransition-duration: 100ms\n"
    )
    .unwrap();

    let cfg = Configuration::from_yaml_file(file.path()).unwrap();
    assert_eq!(cfg.slides[0].label, "alpha");
    assert_eq!(cfg.advance_interval, Duration::from_millis(250));
}

#[test]
fn missing_file_reports_path() {
    let err = Configuration::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.yaml"));
}
