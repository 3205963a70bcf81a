//! Deep merge for layered YAML configuration.
//!
//! `.judgeconf/config.local.yml` is layered over `.judgeconf/config.yml`
//! before the result is parsed into a typed config.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (an overlay `executors:` list is the new order)
//! - Null values in the overlay delete the corresponding key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Deep merge two YAML values, `overlay` taking precedence.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        // An empty layer file parses to null and changes nothing.
        (base, Value::Null) => base.clone(),

        (_, overlay) => overlay.clone(),
    }
}

/// Merge layers in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn local_override_replaces_single_hint() {
        let base = yaml(
            r#"
overrides:
  python3:
    path: /usr/bin/python3
    version_args: --version
"#,
        );
        let overlay = yaml(
            r#"
overrides:
  python3:
    path: /opt/python/bin/python3
"#,
        );

        let result = deep_merge(&base, &overlay);

        assert_eq!(result["overrides"]["python3"]["path"], "/opt/python/bin/python3");
        assert_eq!(result["overrides"]["python3"]["version_args"], "--version");
    }

    #[test]
    fn executor_lists_are_replaced_not_merged() {
        let base = yaml("executors: [python3, gcc, java]");
        let overlay = yaml("executors: [gcc]");

        let result = deep_merge(&base, &overlay);
        let executors = result["executors"].as_sequence().unwrap();

        assert_eq!(executors.len(), 1);
        assert_eq!(executors[0], "gcc");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml(
            r#"
overrides:
  python3:
    path: /usr/bin/python3
  gcc:
    path: /usr/bin/gcc
"#,
        );
        let overlay = yaml(
            r#"
overrides:
  python3: null
"#,
        );

        let result = deep_merge(&base, &overlay);

        assert!(result["overrides"].get("python3").is_none());
        assert_eq!(result["overrides"]["gcc"]["path"], "/usr/bin/gcc");
    }

    #[test]
    fn null_layer_leaves_base_unchanged() {
        let base = yaml("executors: [python3]");
        let result = deep_merge(&base, &Value::Null);
        assert_eq!(result["executors"][0], "python3");
    }

    #[test]
    fn merge_configs_merges_multiple_in_order() {
        let configs = vec![yaml("a: 1\nb: 2"), yaml("b: 3\nc: 4"), yaml("c: 5")];

        let result = merge_configs(&configs);

        assert_eq!(result["a"], 1);
        assert_eq!(result["b"], 3);
        assert_eq!(result["c"], 5);
    }

    #[test]
    fn merge_empty_configs_returns_empty() {
        let result = merge_configs(&[]);
        assert!(result.as_mapping().unwrap().is_empty());
    }
}
