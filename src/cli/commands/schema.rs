//! Schema command implementation.
//!
//! The `judgeconf schema` command prints the JSON Schema of
//! `.judgeconf/config.yml`, for editor integration.

use crate::config::JudgeconfConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand;

impl SchemaCommand {
    /// Render the config schema as pretty-printed JSON.
    pub fn render() -> Result<String> {
        let schema = schemars::schema_for!(JudgeconfConfig);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

impl Command for SchemaCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        println!("{}", Self::render()?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_describes_top_level_keys() {
        let rendered = SchemaCommand::render().unwrap();
        let schema: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("executors").is_some());
        assert!(properties.get("overrides").is_some());
        assert!(properties.get("custom_executors").is_some());
        assert!(properties.get("tests").is_some());
    }
}
