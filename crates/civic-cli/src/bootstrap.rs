use anyhow::Context;
use civic_config::CivicConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CivicConfig> {
    let mut config = CivicConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    let data_dir = config.storage.resolved_data_dir();
    tracing::debug!(
        data_dir = %data_dir.display(),
        key = %config.storage.key,
        "configuration loaded"
    );
    Ok(config)
}

fn apply_overrides(config: &mut CivicConfig, flags: &GlobalFlags) {
    if let Some(data_dir) = &flags.data_dir {
        config.storage.data_dir.clone_from(data_dir);
    }
}

#[cfg(test)]
mod tests {
    use civic_config::CivicConfig;

    use super::apply_overrides;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

    fn flags(data_dir: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            color: ColorMode::Never,
            quiet: false,
            data_dir: data_dir.map(String::from),
        }
    }

    #[test]
    fn data_dir_flag_overrides_config() {
        let mut config = CivicConfig::default();
        config.storage.data_dir = "/from/config".into();
        apply_overrides(&mut config, &flags(Some("/from/flag")));
        assert_eq!(config.storage.data_dir, "/from/flag");
    }

    #[test]
    fn absent_flag_keeps_config() {
        let mut config = CivicConfig::default();
        config.storage.data_dir = "/from/config".into();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.storage.data_dir, "/from/config");
    }
}
