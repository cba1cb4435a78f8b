//! Packaged asset tree and translation catalogs.
//!
//! Both roots are discovered, never created. Asset sub-paths are joins under
//! the discovered asset root and fail exactly when it does.

use std::env;
use std::path::{Path, PathBuf};

use super::discovery::{discover, has_message_catalog, is_directory, resolve_lenient};
use super::error::PathError;
use super::resolver::Resolver;

const ASSETS_DIR: &str = "assets";
const GLADE_DIR: &str = "glade";

impl Resolver {
    /// Asset roots in search order: next to the installation, then under
    /// the working directory.
    pub fn asset_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![self.layout.install_dir.join(ASSETS_DIR)];
        match env::current_dir() {
            Ok(cwd) => candidates.push(cwd.join(ASSETS_DIR)),
            Err(e) => tracing::debug!(error = %e, "skipping working directory asset candidate"),
        }
        candidates
    }

    /// Locale roots in search order: the override variable (if set), the
    /// user data locale directory, then the system locations.
    pub fn locale_candidates(&self) -> Result<Vec<PathBuf>, PathError> {
        let mut candidates = Vec::with_capacity(self.layout.system_locale_dirs.len() + 2);

        if let Some(raw) = self.env.non_empty_var(&self.layout.locale_override_var) {
            match resolve_lenient(Path::new(&raw)) {
                Ok(dir) => candidates.push(dir),
                Err(e) => tracing::debug!(
                    variable = %self.layout.locale_override_var,
                    error = %e,
                    "ignoring unusable locale override"
                ),
            }
        }

        candidates.push(self.local_share_locale()?);
        candidates.extend(self.layout.system_locale_dirs.iter().cloned());
        Ok(candidates)
    }

    pub(super) fn resolve_assets_dir(&self) -> Result<PathBuf, PathError> {
        let candidates = self.asset_candidates();
        match discover(&candidates, is_directory) {
            Some(dir) => {
                tracing::debug!(path = %dir.display(), "found assets directory");
                Ok(dir)
            }
            None => Err(PathError::AssetsNotFound { candidates }),
        }
    }

    pub(super) fn resolve_locale_dir(&self) -> Result<PathBuf, PathError> {
        let candidates = self.locale_candidates()?;
        let catalog = self.layout.catalog_file_name();

        match discover(&candidates, |dir| has_message_catalog(dir, &catalog)) {
            Some(dir) => {
                tracing::debug!(path = %dir.display(), "found locale directory");
                Ok(dir)
            }
            None => Err(PathError::LocaleNotFound {
                domain: self.layout.application.clone(),
                candidates,
            }),
        }
    }

    pub(super) fn resolve_po_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.assets_dir()?.join("po"))
    }

    pub(super) fn resolve_desktop_assets_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.assets_dir()?.join("desktop"))
    }

    pub(super) fn resolve_mime_xml_assets_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.assets_dir()?.join("mime_xml"))
    }

    pub(super) fn resolve_icons_assets_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.assets_dir()?.join("icons"))
    }

    pub(super) fn resolve_glade_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.assets_dir()?.join(GLADE_DIR))
    }

    pub(super) fn resolve_grapejuice_glade(&self) -> Result<PathBuf, PathError> {
        Ok(self.glade_dir()?.join("grapejuice.glade"))
    }

    pub(super) fn resolve_global_css(&self) -> Result<PathBuf, PathError> {
        Ok(self.glade_dir()?.join("global.css"))
    }

    pub(super) fn resolve_about_glade(&self) -> Result<PathBuf, PathError> {
        Ok(self.glade_dir()?.join("about.glade"))
    }

    pub(super) fn resolve_fast_flag_editor_glade(&self) -> Result<PathBuf, PathError> {
        Ok(self.glade_dir()?.join("fast_flag_editor.glade"))
    }

    pub(super) fn resolve_grapejuice_components_glade(&self) -> Result<PathBuf, PathError> {
        Ok(self.glade_dir()?.join("grapejuice_components.glade"))
    }

    pub(super) fn resolve_fast_flag_warning_glade(&self) -> Result<PathBuf, PathError> {
        Ok(self.glade_dir()?.join("fast_flag_warning.glade"))
    }

    pub(super) fn resolve_exception_viewer_glade(&self) -> Result<PathBuf, PathError> {
        Ok(self.glade_dir()?.join("exception_viewer.glade"))
    }

    pub(super) fn resolve_settings_glade(&self) -> Result<PathBuf, PathError> {
        Ok(self.glade_dir()?.join("settings.glade"))
    }
}
