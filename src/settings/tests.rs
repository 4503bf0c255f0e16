use super::loader::DEFAULT_CONFIG;
use super::*;
use ::config::{Config, File, FileFormat};

fn parse(overrides: &str) -> AppConfig {
    Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        .add_source(File::from_str(overrides, FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn test_embedded_defaults_are_valid() {
    let config = parse("");
    assert_eq!(config.agent.max_steps, 100);
    assert_eq!(config.paths.inbox.to_str(), Some("data/inbox"));
    assert!(!config.cycle.enabled);
    validate_config(&config).unwrap();
}

#[test]
fn test_llm_settings_map_to_ollama() {
    let config = parse("[llm]\nbase_url = \"http://gpu:11434/\"\nmodel = \"qwen2.5\"\ntimeout_secs = 30");
    let ollama = config.llm.to_ollama();
    assert_eq!(ollama.base_url, "http://gpu:11434");
    assert_eq!(ollama.model, "qwen2.5");
    assert_eq!(ollama.timeout.as_secs(), 30);
}

#[test]
fn test_zero_max_steps_rejected() {
    let config = parse("[agent]\nmax_steps = 0");
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_empty_path_rejected() {
    let config = parse("[paths]\nreport = \"\"");
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("paths.report"));
}

#[test]
fn test_zero_interval_rejected_only_when_cycling() {
    let idle = parse("[cycle]\nenabled = false\ninterval_secs = 0");
    assert!(validate_config(&idle).is_ok());

    let cycling = parse("[cycle]\nenabled = true\ninterval_secs = 0");
    assert!(validate_config(&cycling).is_err());
}
