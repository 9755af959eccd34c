use scriptscan::config::*;

#[test]
fn test_default_margins() {
    let margins = Margins::default();
    assert_eq!(margins.before, 100);
    assert_eq!(margins.after, 2000);
    assert_eq!(margins.anchor, Anchor::MatchStart);
}

#[test]
fn test_anchored_keeps_sizes() {
    let margins = Margins::new(5, 7).anchored(Anchor::MatchEnd);
    assert_eq!(margins.before, 5);
    assert_eq!(margins.after, 7);
    assert_eq!(margins.anchor, Anchor::MatchEnd);
}

#[test]
fn test_for_path_uses_defaults() {
    let config = ScanConfig::for_path("portal/main.js");
    assert!(config.source_path.ends_with("main.js"));
    assert_eq!(config.margins, Margins::default());
    assert_eq!(config.max_source_size, DEFAULT_MAX_SOURCE_SIZE);
    assert!(!config.lossy_decoding);
}

#[test]
fn test_config_serde_roundtrip() {
    let config = ScanConfig {
        margins: Margins::new(3, 3).anchored(Anchor::MatchEnd),
        lossy_decoding: true,
        ..ScanConfig::for_path("main.js")
    };
    let json = serde_json::to_string_pretty(&config).unwrap();
    let deserialized: ScanConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, deserialized);
}
