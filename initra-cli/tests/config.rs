use initra_cli::commands::init::PackageManager;
use initra_cli::commands::project::{detect_framework, detect_language, Framework};
use initra_cli::commands::templates::Language;
use initra_cli::config::{InitraConfig, CONFIG_FILE};
use initra_cli::error::InitraError;
use std::fs;
use tempfile::TempDir;

// ── initra.toml ─────────────────────────────────────────────────────

#[test]
fn parse_full_config() {
    let config = InitraConfig::parse(
        r#"
[defaults]
language = "js"
package_manager = "yarn"

[paths]
components = "app/components"
pages = "app/views"
"#,
    )
    .unwrap();
    assert_eq!(config.language, Some(Language::JavaScript));
    assert_eq!(config.package_manager, Some(PackageManager::Yarn));
    assert_eq!(config.components_dir.as_deref(), Some("app/components"));
    assert_eq!(config.pages_dir.as_deref(), Some("app/views"));
}

#[test]
fn parse_empty_config() {
    assert_eq!(InitraConfig::parse("").unwrap(), InitraConfig::default());
}

#[test]
fn parse_long_language_names() {
    let config = InitraConfig::parse("[defaults]\nlanguage = \"TypeScript\"\n").unwrap();
    assert_eq!(config.language, Some(Language::TypeScript));
}

#[test]
fn parse_rejects_unknown_language() {
    let err = InitraConfig::parse("[defaults]\nlanguage = \"rust\"\n").unwrap_err();
    assert!(matches!(err, InitraError::Config(_)));
    assert!(err.to_string().contains("defaults.language"));
}

#[test]
fn parse_rejects_unknown_package_manager() {
    let err = InitraConfig::parse("[defaults]\npackage_manager = \"pnpm\"\n").unwrap_err();
    assert!(err.to_string().contains("defaults.package_manager"));
}

#[test]
fn parse_rejects_non_string_value() {
    let err = InitraConfig::parse("[paths]\ncomponents = 3\n").unwrap_err();
    assert!(err.to_string().contains("paths.components must be a string"));
}

#[test]
fn parse_rejects_invalid_toml() {
    let err = InitraConfig::parse("[defaults\nlanguage = ").unwrap_err();
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn load_missing_file_is_default() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(InitraConfig::load(tmp.path()).unwrap(), InitraConfig::default());
}

#[test]
fn load_reads_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), "[defaults]\nlanguage = \"js\"\n").unwrap();
    let config = InitraConfig::load(tmp.path()).unwrap();
    assert_eq!(config.language, Some(Language::JavaScript));
}

// ── language resolution ─────────────────────────────────────────────

#[test]
fn resolve_language_flag_wins() {
    let tmp = TempDir::new().unwrap();
    let config = InitraConfig {
        language: Some(Language::JavaScript),
        ..Default::default()
    };
    assert_eq!(config.resolve_language(true, false, tmp.path()), Language::TypeScript);
    assert_eq!(
        InitraConfig::default().resolve_language(false, true, tmp.path()),
        Language::JavaScript
    );
}

#[test]
fn resolve_language_config_over_detection() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tsconfig.json"), "{}").unwrap();
    let config = InitraConfig {
        language: Some(Language::JavaScript),
        ..Default::default()
    };
    assert_eq!(config.resolve_language(false, false, tmp.path()), Language::JavaScript);
}

#[test]
fn resolve_language_detection_then_default() {
    let tmp = TempDir::new().unwrap();
    let config = InitraConfig::default();
    assert_eq!(config.resolve_language(false, false, tmp.path()), Language::TypeScript);

    fs::write(tmp.path().join("jsconfig.json"), "{}").unwrap();
    assert_eq!(config.resolve_language(false, false, tmp.path()), Language::JavaScript);
}

// ── project detection ───────────────────────────────────────────────

#[test]
fn detect_language_from_config_files() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(detect_language(tmp.path()), None);
    fs::write(tmp.path().join("tsconfig.app.json"), "{}").unwrap();
    assert_eq!(detect_language(tmp.path()), Some(Language::TypeScript));
}

#[test]
fn detect_framework_next_wins_over_react() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("package.json"),
        r#"{"dependencies": {"react": "18.2.0", "next": "14.0.0"}}"#,
    )
    .unwrap();
    assert_eq!(detect_framework(tmp.path()), Framework::Next);
}

#[test]
fn detect_framework_express_from_dev_dependencies() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("package.json"),
        r#"{"devDependencies": {"express": "4.18.2"}}"#,
    )
    .unwrap();
    assert_eq!(detect_framework(tmp.path()), Framework::Node);
}

#[test]
fn detect_framework_defaults_to_react() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(detect_framework(tmp.path()), Framework::React);

    fs::write(tmp.path().join("package.json"), "not json").unwrap();
    assert_eq!(detect_framework(tmp.path()), Framework::React);
}

#[test]
fn framework_from_str() {
    assert_eq!("React".parse::<Framework>().unwrap(), Framework::React);
    assert_eq!("nextjs".parse::<Framework>().unwrap(), Framework::Next);
    assert_eq!("express".parse::<Framework>().unwrap(), Framework::Node);
    let err = "vue".parse::<Framework>().unwrap_err();
    assert!(err.to_string().contains("Unknown template 'vue'"));
}

#[test]
fn framework_starter_repositories() {
    assert_eq!(Framework::React.starter_repository(), "blessedrajp/react-template");
    assert_eq!(Framework::Node.starter_repository(), "blessedrajp/nodeJs-template");
    assert_eq!(Framework::Next.starter_repository(), "blessedrajp/next-template");
}
