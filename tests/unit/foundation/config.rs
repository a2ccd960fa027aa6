use super::*;

#[test]
fn defaults_match_the_reference_render() {
    let cfg = EffectConfig::default();
    assert_eq!(cfg.width, 1000);
    assert_eq!(cfg.height, 600);
    assert_eq!(cfg.font_size_px, 100.0);
    assert_eq!(cfg.output_path, PathBuf::from("daft_punk_effect.png"));
    cfg.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let cfg: EffectConfig = serde_json::from_str(r#"{ "text": "AB", "width": 200 }"#).unwrap();
    assert_eq!(cfg.text, "AB");
    assert_eq!(cfg.width, 200);
    assert_eq!(cfg.height, 600);
}

#[test]
fn invalid_font_size_is_rejected() {
    let cfg = EffectConfig {
        font_size_px: 0.0,
        ..EffectConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(ChromaError::Validation(_))));
}

#[test]
fn explicit_seed_wins() {
    let cfg = EffectConfig {
        noise_seed: Some(42),
        ..EffectConfig::default()
    };
    assert_eq!(cfg.resolved_noise_seed(), 42);
}

#[test]
fn load_json_config_reports_parse_errors() {
    let dir = PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_json_config::<EffectConfig>(&path).unwrap_err();
    assert!(matches!(err, ChromaError::Serde(_)));

    let missing = load_json_config::<EffectConfig>(&dir.join("absent.json")).unwrap_err();
    assert!(matches!(missing, ChromaError::Other(_)));
}

#[test]
fn oversized_font_is_rejected() {
    let cfg = EffectConfig {
        font_size_px: 1e9,
        ..EffectConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(ChromaError::Validation(_))));
    let at_limit = EffectConfig {
        font_size_px: MAX_FONT_SIZE_PX,
        ..EffectConfig::default()
    };
    at_limit.validate().unwrap();
}
