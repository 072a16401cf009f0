use crate::commands::{CmdMessage, CmdResult};
use crate::config::SarfConfig;
use crate::error::{Result, SarfError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetSeedDefaults(bool),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = SarfConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetSeedDefaults(value) => {
            config.seed_defaults = value;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "seed-defaults set to {}",
                value
            )));
        }
    }

    Ok(result.with_config(config))
}

pub fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        other => Err(SarfError::Store(format!(
            "expected a boolean, got '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(dir.path(), ConfigAction::SetSeedDefaults(false)).unwrap();
        assert!(!result.config.unwrap().seed_defaults);

        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert!(!result.config.unwrap().seed_defaults);
    }

    #[test]
    fn parses_boolean_spellings() {
        assert!(parse_bool("true").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
