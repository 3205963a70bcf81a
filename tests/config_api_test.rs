//! Integration tests for config module public API.

use judgeconf::config::{
    effective_hints, load_merged_config, parse_hints, resolve_string, validate,
    InterpolationContext, JudgeconfConfig, OutputMode, RenderFormat, CONFIG_DIR,
};
use judgeconf::executors::ExecutorId;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    // Verify types are exported correctly
    let _config = JudgeconfConfig::default();
    let _ctx = InterpolationContext::new();
    let _mode = OutputMode::Verbose;
    let _format = RenderFormat::Json;
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(CONFIG_DIR);
    fs::create_dir_all(&dir).unwrap();

    fs::write(
        dir.join("config.yml"),
        r#"
executors: [python3, gcc]
overrides:
  python3:
    path: /opt/python/bin/python3
tests:
  problem_dirs: [problems/aplusb]
"#,
    )
    .unwrap();

    let config = load_merged_config(temp.path()).unwrap();
    validate(&config).unwrap();

    assert_eq!(config.executors, ["python3", "gcc"]);
    assert_eq!(
        config.overrides["python3"].get("path"),
        Some("/opt/python/bin/python3")
    );
    assert_eq!(
        config.tests.resolved_dirs(temp.path()),
        [temp.path().join("problems/aplusb")]
    );

    let mut runtime = BTreeMap::new();
    runtime.insert(
        "python3".to_string(),
        serde_yaml::Value::from("/opt/python/bin/python3"),
    );
    let ctx = InterpolationContext::from_runtime(&runtime);
    let command = resolve_string("${python3} main.py", &ctx).unwrap();

    assert_eq!(command, "/opt/python/bin/python3 main.py");
}

#[test]
fn config_merge_workflow() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(CONFIG_DIR);
    fs::create_dir_all(&dir).unwrap();

    // Base config
    fs::write(
        dir.join("config.yml"),
        r#"
executors: [python3, gcc, java]
settings:
  default_output: verbose
overrides:
  gcc:
    path: /usr/bin/gcc
"#,
    )
    .unwrap();

    // Local override
    fs::write(
        dir.join("config.local.yml"),
        r#"
executors: [python3, gcc]
settings:
  default_output: quiet
overrides:
  gcc:
    path: /opt/gcc/bin/gcc
"#,
    )
    .unwrap();

    let config = load_merged_config(temp.path()).unwrap();

    // Arrays replace, mappings merge
    assert_eq!(config.executors, ["python3", "gcc"]);
    assert_eq!(
        config.settings.default_output,
        Some(judgeconf::config::schema::OutputMode::Quiet)
    );
    assert_eq!(config.overrides["gcc"].get("path"), Some("/opt/gcc/bin/gcc"));
}

#[test]
fn invalid_config_fails_validation() {
    let config: JudgeconfConfig =
        serde_yaml::from_str("executors: [gcc, gcc]\n").unwrap();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("gcc"));
}

#[test]
fn rendered_document_feeds_back_as_hints() {
    let rendered = parse_hints(
        "runtime:\n  python3: /usr/bin/python3\n  gcc: /usr/bin/gcc\n",
        Path::new("runtime.yml"),
    )
    .unwrap();

    let config: JudgeconfConfig =
        serde_yaml::from_str("overrides:\n  gcc:\n    gcc: /opt/gcc/bin/gcc\n").unwrap();
    let hints = effective_hints(&config, &rendered);

    // Explicit overrides win over the rendered document
    assert_eq!(
        hints[&ExecutorId::from("gcc")].get("gcc"),
        Some("/opt/gcc/bin/gcc")
    );
    assert_eq!(
        hints[&ExecutorId::from("python3")].get("python3"),
        Some("/usr/bin/python3")
    );
}
