use crate::commands::{CmdMessage, CmdResult};
use crate::config::MedcartConfig;
use crate::error::{MedcartError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Gets or sets relay configuration in the data directory's config.json.
pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = MedcartConfig::load(data_dir)?;

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                "service-id" => config.relay.service_id = value,
                "template-id" => config.relay.template_id = value,
                "public-key" => config.relay.public_key = value,
                "timeout-secs" => {
                    config.timeout_secs = value.parse().map_err(|_| {
                        MedcartError::Validation("timeout-secs must be a number".into())
                    })?;
                }
                other => {
                    return Err(MedcartError::Api(format!("Unknown config key: {}", other)));
                }
            }
            config.save(data_dir)?;

            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} updated", key)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_then_show_roundtrips() {
        let dir = TempDir::new().unwrap();

        run(
            dir.path(),
            ConfigAction::Set("service-id".into(), "service_abc".into()),
        )
        .unwrap();

        let shown = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.unwrap().relay.service_id, "service_abc");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::Set("nope".into(), "x".into()));
        assert!(result.is_err());
    }
}
