use modsplit::utils::validation::Validate;
use modsplit::{SplitError, SplitStyle, TomlConfig};
use std::io::Write;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("modsplit.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_end_to_end_config_resolution() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[project]
name = "shop-frontend"
version = "2.3.0"
description = "Storefront SPA"

[splitting]
style = "SmallModulesFor"
packages = ["com.shop.checkout", "com.shop.catalog", "com.shop.checkout"]
"#,
    );

    let config = TomlConfig::from_file(&path).unwrap();
    config.validate().unwrap();

    let style = config.resolve_split_style().unwrap();
    // duplicate entry collapsed, order kept
    assert_eq!(
        style.to_string(),
        "SmallModulesFor(com.shop.checkout, com.shop.catalog)"
    );
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = TomlConfig::from_file("/nonexistent/modsplit.toml").unwrap_err();
    assert!(matches!(err, SplitError::IoError(_)));
}

#[test]
fn test_splitting_section_is_optional() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[project]
name = "minimal"
"#,
    );

    let config = TomlConfig::from_file(&path).unwrap();
    assert_eq!(
        config.resolve_split_style().unwrap(),
        SplitStyle::FewestModules
    );
}

#[test]
fn test_style_requiring_packages_fails_without_them() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[project]
name = "broken"

[splitting]
style = "SmallModulesFor"
"#,
    );

    let config = TomlConfig::from_file(&path).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, SplitError::MissingPackages { .. }));
}

#[test]
fn test_malformed_package_in_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[project]
name = "broken"

[splitting]
style = "SmallModulesFor"
packages = ["com..bar"]
"#,
    );

    let config = TomlConfig::from_file(&path).unwrap();
    let err = config.resolve_split_style().unwrap_err();
    assert!(matches!(err, SplitError::MalformedPackageName(value) if value == "com..bar"));
}

#[test]
fn test_empty_project_name_is_rejected() {
    let config = TomlConfig::from_toml_str(
        r#"
[project]
name = ""
"#,
    )
    .unwrap();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, SplitError::InvalidConfigValue { field, .. } if field == "project.name"));
}
