//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_FILES: [&str; 2] = ["gitgen.toml", ".gitgen.toml"];
const ENV_PREFIX: &str = "GITGEN_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `GITGEN_*` environment variables (`GITGEN_MODEL__NAME=gpt-4.1`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./gitgen.toml` or `./.gitgen.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/gitgen/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(Self::global_config_path(), config_path)
            .extract()
            .map_err(Box::new)
    }

    fn figment(global_path: Option<PathBuf>, config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path.filter(|p| p.exists()) {
            debug!("Using global config {}", global_path.display());
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            debug!("Using project config {}", project_path.display());
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            debug!("Using explicit config {}", path.display());
            // Toml::file is lenient about missing files; an explicit path is not
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gitgen").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use gitgen_domain::Model;

    fn load_in_jail(global: Option<PathBuf>, explicit: Option<&Path>) -> figment::error::Result<FileConfig> {
        ConfigLoader::figment(global, explicit).extract()
    }

    #[test]
    fn test_defaults_without_files() {
        Jail::expect_with(|_jail| {
            let config = load_in_jail(None, None)?;
            assert_eq!(config.model.name, "gpt-4o");
            assert!(config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with("gitgen/config.toml"));
    }

    #[test]
    fn test_project_file_overrides_global() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "global.toml",
                "[model]\nname = \"gpt-4.1\"\n[output]\ncolor = false\n",
            )?;
            jail.create_file(".gitgen.toml", "[model]\nname = \"gpt-4o-mini\"\n")?;

            let config = load_in_jail(Some(jail.directory().join("global.toml")), None)?;
            assert_eq!(config.model.parse_model().0, Model::Gpt4oMini);
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_plain_name_preferred_over_dotfile() {
        Jail::expect_with(|jail| {
            jail.create_file("gitgen.toml", "[model]\nname = \"gpt-4.1\"\n")?;
            jail.create_file(".gitgen.toml", "[model]\nname = \"o3-mini\"\n")?;

            let config = load_in_jail(None, None)?;
            assert_eq!(config.model.parse_model().0, Model::Gpt41);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project() {
        Jail::expect_with(|jail| {
            jail.create_file("gitgen.toml", "[pipeline]\nshow_analysis = false\n")?;
            jail.create_file("custom.toml", "[pipeline]\nshow_analysis = true\n")?;

            let explicit = jail.directory().join("custom.toml");
            let config = load_in_jail(None, Some(&explicit))?;
            assert!(config.pipeline.show_analysis);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            let missing = jail.directory().join("nope.toml");
            assert!(load_in_jail(None, Some(&missing)).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("gitgen.toml", "[model]\nname = \"gpt-4.1\"\n")?;
            jail.set_env("GITGEN_MODEL__NAME", "o3-mini");
            jail.set_env("GITGEN_PROVIDERS__OPENAI__MAX_TOOL_ROUNDS", "9");

            let config = load_in_jail(None, None)?;
            assert_eq!(config.model.parse_model().0, Model::O3Mini);
            assert_eq!(config.providers.openai.max_tool_rounds, 9);
            Ok(())
        });
    }

    #[test]
    fn test_type_error_is_reported() {
        Jail::expect_with(|jail| {
            jail.create_file("gitgen.toml", "[output]\ncolor = \"sometimes\"\n")?;
            assert!(load_in_jail(None, None).is_err());
            Ok(())
        });
    }
}
