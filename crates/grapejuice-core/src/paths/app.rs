//! Application directories composed from the base directories.
//!
//! Everything here is a plain join under exactly one base directory. The
//! cache root is the only one created, since callers write into it directly.

use std::path::PathBuf;

use super::bootstrap::bootstrap_copy;
use super::ensure::ensure_directory;
use super::error::PathError;
use super::resolver::Resolver;

const PREFIXES_DIR: &str = "prefixes";
const PACKAGE_MANIFEST: &str = "package_manifest.json";
const FAST_FLAGS_FILE: &str = "fast_flags.json";
const USER_SETTINGS_FILE: &str = "user_settings.json";

impl Resolver {
    pub(super) fn resolve_configuration_base_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.xdg_config_home()?.join(&self.layout.organization))
    }

    pub(super) fn resolve_config_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self
            .configuration_base_dir()?
            .join(&self.layout.application))
    }

    pub(super) fn resolve_cache_dir(&self) -> Result<PathBuf, PathError> {
        let dir = self.xdg_cache_home()?.join(&self.layout.application);
        ensure_directory(&dir)?;
        Ok(dir)
    }

    pub(super) fn resolve_data_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.xdg_data_home()?.join(&self.layout.application))
    }

    pub(super) fn resolve_logging_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.local_log()?.join(&self.layout.application))
    }

    pub(super) fn resolve_wineprefixes_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join(PREFIXES_DIR))
    }

    pub(super) fn resolve_application_manifest(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join(PACKAGE_MANIFEST))
    }

    pub(super) fn resolve_fast_flag_cache(&self) -> Result<PathBuf, PathError> {
        Ok(self.cache_dir()?.join(FAST_FLAGS_FILE))
    }

    /// The settings path is returned even when the bootstrap copy fails;
    /// consumers fall back to their own defaults for a missing file.
    pub(super) fn resolve_user_settings(&self) -> Result<PathBuf, PathError> {
        let settings = self.home()?.join(USER_SETTINGS_FILE);

        if !settings.is_file() {
            match bootstrap_copy(&self.layout.settings_template, &settings) {
                Ok(true) => tracing::info!(
                    template = %self.layout.settings_template.display(),
                    path = %settings.display(),
                    "copied user settings from template"
                ),
                Ok(false) => {}
                Err(e) => tracing::warn!(
                    template = %self.layout.settings_template.display(),
                    path = %settings.display(),
                    error = %e,
                    "could not bootstrap user settings"
                ),
            }
        }

        Ok(settings)
    }
}
