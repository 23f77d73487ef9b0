use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};

pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join("Library/Application Support/seeker"))
    }

    #[cfg(target_os = "linux")]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
            .map(|c| c.join("seeker"))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .map(|a| a.join("seeker"))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join(".config/seeker"))
    }
}

/// Values left out of the file fall back to the conventional environment
/// variables at construction time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub model: Option<String>,
    pub max_iterations: Option<usize>,
    #[serde(default)]
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub google: GoogleSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GoogleSettings {
    pub api_key: Option<String>,
    pub cse_id: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn load(path_override: Option<&Path>) -> Self {
        let mut builder = Config::builder();

        match path_override {
            Some(path) => {
                builder = builder.add_source(File::from(path.to_path_buf()));
            }
            None => {
                if let Some(path) = Self::get_config_path() {
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }

        builder = builder.add_source(Environment::with_prefix("SEEKER").separator("__"));

        builder
            .build()
            .and_then(Config::try_deserialize)
            .unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load config: {e}");
                Self::default()
            })
    }

    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        get_config_dir().map(|dir| dir.join("config.toml"))
    }

    pub fn init_default() -> Result<PathBuf, io::Error> {
        let path = Self::get_config_path().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {}", path.display()),
            ));
        }

        fs::write(&path, Self::template())?;
        Ok(path)
    }

    #[must_use]
    pub fn template() -> String {
        let sample = Self {
            model: Some("gpt-4o-mini".to_string()),
            max_iterations: Some(10),
            openai: OpenAiSettings {
                api_key: Some(String::new()),
            },
            google: GoogleSettings {
                api_key: Some(String::new()),
                cse_id: Some(String::new()),
            },
        };

        let body = toml::to_string_pretty(&sample).unwrap_or_default();
        format!(
            "# seeker configuration\n\
             # Empty keys fall back to OPENAI_API_KEY, GOOGLE_API_KEY and GOOGLE_CSE_ID.\n\n\
             {body}"
        )
    }
}
