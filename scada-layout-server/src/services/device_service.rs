use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use scada_layout_api::models::Device;

use crate::configs::Settings;
use crate::errors::LayoutError;
use crate::models::{ImageCutMap, TvConfig};
use crate::services::{FileType, LayoutBuilder, TimeProvider, decode_file};

pub const ICON_IMAGE_CUT_FILE: &str = "TvIconImageCut.yaml";
pub const DEVICE_CONFIG_DIR: &str = "Tv";

/// Resolves a device layout from the configuration directory.
///
/// Documents are re-read on every call; nothing is cached between requests.
#[derive(Clone)]
pub struct DeviceService {
    conf_dir: PathBuf,
    image_base_url: String,
    time_provider: Arc<dyn TimeProvider>,
}

impl DeviceService {
    pub fn new(settings: &Settings, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            conf_dir: settings.conf_dir(),
            image_base_url: settings.layout.static_image_path.clone(),
            time_provider,
        }
    }

    pub fn resolve(&self, requested_id: Option<&str>) -> Result<Device, LayoutError> {
        let image_cuts = self.load_image_cuts()?;
        tracing::debug!("loaded {} icon image cuts", image_cuts.len());

        let files = self.device_config_files()?;
        if files.is_empty() {
            return Err(LayoutError::ConfigurationDefect(format!(
                "no tv config files found in {}",
                self.conf_dir.display()
            )));
        }

        let (file, config) = Self::select_device(&files, requested_id)?.ok_or(LayoutError::NotFound)?;
        tracing::info!("resolving tv {} from {}", config.id, file.display());

        let pages = LayoutBuilder::new(self.time_provider.as_ref()).build_pages(&config)?;
        if pages.is_empty() {
            return Err(LayoutError::ConfigurationDefect(
                "tv config missing pages".to_string(),
            ));
        }

        Ok(Device {
            id: config.id,
            image_base_url: self.image_base_url.clone(),
            pages,
        })
    }

    /// First document with a non-empty id that satisfies the request, in file order.
    /// Later files are not read once a match is found.
    pub fn select_device<'a>(
        files: &'a [PathBuf],
        requested_id: Option<&str>,
    ) -> Result<Option<(&'a Path, TvConfig)>, LayoutError> {
        for file in files {
            let Some(file_type) = FileType::from_path(file) else {
                continue;
            };
            let config: TvConfig = decode_file(file, file_type)?;

            if config.id.is_empty() {
                continue;
            }

            match requested_id {
                None => return Ok(Some((file, config))),
                Some(id) if id == config.id => return Ok(Some((file, config))),
                Some(_) => {}
            }
        }

        Ok(None)
    }

    fn load_image_cuts(&self) -> Result<ImageCutMap, LayoutError> {
        decode_file(&self.conf_dir.join(ICON_IMAGE_CUT_FILE), FileType::Yaml)
    }

    /// Device documents in lexical file-name order.
    fn device_config_files(&self) -> Result<Vec<PathBuf>, LayoutError> {
        let dir = self.conf_dir.join(DEVICE_CONFIG_DIR);
        let glob_error = |source: io::Error| LayoutError::Glob {
            pattern: dir.join("*.{yaml,yml,json}").display().to_string(),
            source,
        };

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(glob_error(e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(glob_error)?.path();
            if path.is_file() && FileType::from_path(&path).is_some() {
                files.push(path);
            }
        }
        files.sort();

        tracing::debug!("found {} tv config files in {}", files.len(), dir.display());

        Ok(files)
    }
}
