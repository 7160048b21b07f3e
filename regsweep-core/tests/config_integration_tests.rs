// regsweep-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use regsweep_core::config::{PatternConfig, PatternRule};

fn write_config(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_single_pattern() -> Result<()> {
    let file = write_config(
        r#"patterns:
  - name: "test pattern"
    pattern: 'test'
    description: "test description"
    replacement: 'replaced'
"#,
    )?;
    let config = PatternConfig::load_from_file(file.path())?;
    assert_eq!(
        config.patterns,
        vec![PatternRule::new("test pattern", "test", "test description", "replaced")]
    );
    Ok(())
}

#[test]
fn test_load_multiple_patterns_keeps_order() -> Result<()> {
    let file = write_config(
        r#"patterns:
  - name: "pattern1"
    pattern: 'test1'
    description: "desc1"
    replacement: 'rep1'
  - name: "pattern2"
    pattern: 'test2'
    description: "desc2"
    replacement: 'rep2'
"#,
    )?;
    let config = PatternConfig::load_from_file(file.path())?;
    let names: Vec<&str> = config.patterns.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["pattern1", "pattern2"]);
    Ok(())
}

#[test]
fn test_load_empty_list_and_empty_file() -> Result<()> {
    let file = write_config("patterns: []")?;
    assert!(PatternConfig::load_from_file(file.path())?.patterns.is_empty());

    let file = write_config("")?;
    assert!(PatternConfig::load_from_file(file.path())?.patterns.is_empty());
    Ok(())
}

#[test]
fn test_missing_patterns_key() -> Result<()> {
    let file = write_config("not_patterns: []")?;
    assert!(PatternConfig::load_from_file(file.path())?.patterns.is_empty());
    Ok(())
}

#[test]
fn test_invalid_yaml_reports_parse_error() -> Result<()> {
    let file = write_config("invalid: : yaml: :")?;
    let err = PatternConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_missing_file_reports_read_error() {
    let err = PatternConfig::load_from_file("non_existent_file.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_directory_reports_read_error() -> Result<()> {
    let dir = TempDir::new()?;
    let err = PatternConfig::load_from_file(dir.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
    Ok(())
}

#[test]
fn test_special_characters_survive_yaml_quoting() -> Result<()> {
    let file = write_config(
        r#"patterns:
  - name: "price"
    pattern: '\$(\d+)'
    replacement: 'USD $1'
  - name: "double newline"
    pattern: '\n\n'
    replacement: '\n'
"#,
    )?;
    let config = PatternConfig::load_from_file(file.path())?;
    assert_eq!(config.patterns[0].pattern, r"\$(\d+)");
    assert_eq!(config.patterns[0].replacement, "USD $1");
    assert_eq!(config.patterns[1].pattern, r"\n\n");
    Ok(())
}
