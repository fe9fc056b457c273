use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    /// Directory holding `TvIconImageCut.yaml` and the `Tv/` documents
    pub conf_dir: String,
    pub static_image_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub layout: Layout,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let base = env::current_dir().map_err(|e| ConfigError::Message(e.to_string()))?;

        Self::load(&base)
    }

    /// Loads settings rooted at `base`: `configs/default`, `configs/{RUN_MODE}`,
    /// then `.env` and the process environment.
    pub fn load(base: &Path) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());
        let configs = base.join("configs");

        // Flat variables kept from the original deployment scripts
        let dotenv = read_dotenv(&base.join(".env"))
            .map_err(|e| ConfigError::Message(format!(".env: {e}")))?;
        let legacy = Config::builder()
            .add_source(File::from_str(&dotenv, FileFormat::Ini))
            .add_source(Environment::default().try_parsing(true))
            .build()?;

        let mut settings: Settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logger.level", "info")?
            .set_default("layout.static_image_path", "")?
            .add_source(File::from(configs.join("default")).required(false))
            .add_source(File::from(configs.join(&run_mode)).required(false))
            .add_source(Environment::default().separator("__"))
            .set_override_option("layout.conf_dir", legacy_string(&legacy, "conf_dir"))?
            .set_override_option(
                "layout.static_image_path",
                legacy_string(&legacy, "static_image_path"),
            )?
            .set_override_option("server.port", legacy_int(&legacy, "api_port"))?
            .build()?
            .try_deserialize()?;

        settings.layout.conf_dir = normalize_path(base, &settings.layout.conf_dir)
            .map_err(|e| ConfigError::Message(e.to_string()))?
            .to_string_lossy()
            .to_string();

        Ok(settings)
    }

    pub fn conf_dir(&self) -> PathBuf {
        PathBuf::from(&self.layout.conf_dir)
    }
}

/// `.env` content with shell `export ` prefixes removed, empty when the file is absent.
fn read_dotenv(path: &Path) -> io::Result<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(String::new()),
        Err(e) => return Err(e),
    };

    Ok(content
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            trimmed.strip_prefix("export ").unwrap_or(trimmed)
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

fn legacy_string(legacy: &Config, key: &str) -> Option<String> {
    legacy
        .get_string(key)
        .or_else(|_| legacy.get_string(&key.to_uppercase()))
        .ok()
}

fn legacy_int(legacy: &Config, key: &str) -> Option<i64> {
    legacy
        .get_int(key)
        .or_else(|_| legacy.get_int(&key.to_uppercase()))
        .ok()
}

fn normalize_path(base: &Path, path: &str) -> io::Result<PathBuf> {
    if path.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "conf_dir is empty"));
    }

    let path_buf = PathBuf::from(path);

    Ok(if path_buf.is_absolute() {
        path_buf
    } else {
        base.join(path_buf)
    })
}
