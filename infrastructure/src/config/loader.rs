//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["webscraper.toml", ".webscraper.toml"];

/// Prefix of environment variable overrides
const ENV_PREFIX: &str = "WEBSCRAPER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `WEBSCRAPER_*` environment variables (e.g. `WEBSCRAPER_FETCH__USER_AGENT`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./webscraper.toml` or `./.webscraper.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/webscraper/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::layered(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// File sources with `WEBSCRAPER_*` environment variables on top
    fn layered(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        Self::figment(global, project, explicit).merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Merge the file sources that exist on top of the defaults
    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // An explicit path is merged even if missing so that typos surface
        // as an extraction error instead of silently using defaults.
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/webscraper/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("webscraper").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./webscraper.toml or ./.webscraper.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::fs;
    use tempfile::tempdir;

    fn extract(figment: Figment) -> FileConfig {
        figment.extract().unwrap()
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.fetch.user_agent, "WebScraperAgent/1.0");
        assert!(config.fetch.timeout_seconds.is_none());
    }

    #[test]
    fn test_global_config_path_names_app_dir() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("webscraper"));
            assert!(path.ends_with("config.toml"));
        }
    }

    #[test]
    fn test_figment_without_files_is_default() {
        let config = extract(ConfigLoader::figment(None, None, None));
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_missing_optional_files_are_skipped() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let config = extract(ConfigLoader::figment(Some(&missing), Some(&missing), None));
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        fs::write(
            &global,
            "[fetch]\nuser_agent = \"GlobalBot/1.0\"\ntimeout_seconds = 10\n",
        )
        .unwrap();
        fs::write(&project, "[fetch]\nuser_agent = \"ProjectBot/1.0\"\n").unwrap();

        let config = extract(ConfigLoader::figment(Some(&global), Some(&project), None));
        assert_eq!(config.fetch.user_agent, "ProjectBot/1.0");
        // Keys absent from the project file fall through to the global file
        assert_eq!(config.fetch.timeout_seconds, Some(10));
    }

    #[test]
    fn test_explicit_overrides_project() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("project.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&project, "[fetch]\ntimeout_seconds = 10\n").unwrap();
        fs::write(&explicit, "[fetch]\ntimeout_seconds = 99\n").unwrap();

        let config = extract(ConfigLoader::figment(None, Some(&project), Some(&explicit)));
        assert_eq!(config.fetch.timeout_seconds, Some(99));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("typo.toml");
        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(&missing)).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "explicit.toml",
                "[fetch]\nuser_agent = \"FileBot/1.0\"\ntimeout_seconds = 10\nconnect_timeout_seconds = 3\n",
            )?;
            jail.set_env("WEBSCRAPER_FETCH__USER_AGENT", "EnvBot/9");
            jail.set_env("WEBSCRAPER_FETCH__TIMEOUT_SECONDS", 42);

            let config: FileConfig =
                ConfigLoader::layered(None, None, Some(Path::new("explicit.toml"))).extract()?;

            assert_eq!(config.fetch.user_agent, "EnvBot/9");
            assert_eq!(config.fetch.timeout_seconds, Some(42));
            // Keys without an env override keep the file value
            assert_eq!(config.fetch.connect_timeout_seconds, Some(3));
            Ok(())
        });
    }

    #[test]
    fn test_env_applies_without_files() {
        Jail::expect_with(|jail| {
            jail.set_env("WEBSCRAPER_FETCH__CONNECT_TIMEOUT_SECONDS", 7);
            jail.set_env("OTHERAPP_FETCH__USER_AGENT", "Ignored/1.0");

            let config: FileConfig = ConfigLoader::layered(None, None, None).extract()?;

            assert_eq!(config.fetch.connect_timeout_seconds, Some(7));
            assert_eq!(config.fetch.user_agent, "WebScraperAgent/1.0");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_type_is_an_error() {
        let dir = tempdir().unwrap();
        let explicit = dir.path().join("bad.toml");
        fs::write(&explicit, "[fetch]\ntimeout_seconds = \"soon\"\n").unwrap();

        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(&explicit)).extract();
        assert!(result.is_err());
    }
}
