//! Base directories: home and the XDG fallback chain.

use std::fs;
use std::path::{self, PathBuf};

use super::ensure::ensure_directory;
use super::env::{HOME, XDG_CACHE_HOME, XDG_CONFIG_HOME, XDG_DATA_HOME};
use super::error::PathError;
use super::resolver::Resolver;

impl Resolver {
    pub(super) fn resolve_home(&self) -> Result<PathBuf, PathError> {
        let raw = self
            .env
            .non_empty_var(HOME)
            .ok_or(PathError::MissingVariable { variable: HOME })?;

        let home = fs::canonicalize(&raw).map_err(|e| PathError::InvalidVariable {
            variable: HOME,
            value: raw.clone(),
            reason: e.to_string(),
        })?;

        if !home.is_dir() {
            return Err(PathError::InvalidVariable {
                variable: HOME,
                value: raw,
                reason: "not a directory".to_string(),
            });
        }

        Ok(home)
    }

    pub(super) fn resolve_dot_local(&self) -> Result<PathBuf, PathError> {
        let dir = self.home()?.join(".local");
        ensure_directory(&dir)?;
        Ok(dir)
    }

    pub(super) fn resolve_xdg_config_home(&self) -> Result<PathBuf, PathError> {
        if let Some(dir) = self.ensured_override(XDG_CONFIG_HOME)? {
            return Ok(dir);
        }
        let dir = self.home()?.join(".config");
        ensure_directory(&dir)?;
        Ok(dir)
    }

    pub(super) fn resolve_xdg_cache_home(&self) -> Result<PathBuf, PathError> {
        if let Some(dir) = self.ensured_override(XDG_CACHE_HOME)? {
            return Ok(dir);
        }
        let dir = self.home()?.join(".cache");
        ensure_directory(&dir)?;
        Ok(dir)
    }

    pub(super) fn resolve_xdg_data_home(&self) -> Result<PathBuf, PathError> {
        if let Some(dir) = self.ensured_override(XDG_DATA_HOME)? {
            return Ok(dir);
        }
        Ok(self.dot_local()?.join("share"))
    }

    pub(super) fn resolve_local_share_locale(&self) -> Result<PathBuf, PathError> {
        Ok(self.xdg_data_home()?.join("locale"))
    }

    pub(super) fn resolve_local_var(&self) -> Result<PathBuf, PathError> {
        Ok(self.dot_local()?.join("var"))
    }

    pub(super) fn resolve_local_log(&self) -> Result<PathBuf, PathError> {
        Ok(self.local_var()?.join("log"))
    }

    /// Directory named by `variable`, made absolute, created, and
    /// canonicalized. `None` when the variable is unset or empty.
    fn ensured_override(&self, variable: &'static str) -> Result<Option<PathBuf>, PathError> {
        let Some(raw) = self.env.non_empty_var(variable) else {
            return Ok(None);
        };

        let dir = path::absolute(&raw).map_err(|e| PathError::InvalidVariable {
            variable,
            value: raw.clone(),
            reason: e.to_string(),
        })?;
        ensure_directory(&dir)?;

        fs::canonicalize(&dir)
            .map(Some)
            .map_err(|e| PathError::InvalidVariable {
                variable,
                value: raw,
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::error::PathErrorKind;
    use crate::paths::test_utils::Sandbox;

    #[test]
    fn home_missing_is_configuration_error() {
        let mut sandbox = Sandbox::new();
        sandbox.remove_var(HOME);

        let err = sandbox.resolver().home().unwrap_err();
        assert_eq!(err.kind(), PathErrorKind::Configuration);
    }

    #[test]
    fn home_nonexistent_is_configuration_error() {
        let mut sandbox = Sandbox::new();
        let missing = sandbox.root().join("does-not-exist");
        sandbox.set_var(HOME, missing.to_string_lossy());

        let err = sandbox.resolver().home().unwrap_err();
        assert!(matches!(err, PathError::InvalidVariable { variable: "HOME", .. }));
        assert!(!missing.exists(), "home must never be created");
    }

    #[test]
    fn home_pointing_at_file_is_rejected() {
        let mut sandbox = Sandbox::new();
        let file = sandbox.root().join("file");
        fs::write(&file, b"").unwrap();
        sandbox.set_var(HOME, file.to_string_lossy());

        assert_eq!(
            sandbox.resolver().home().unwrap_err().kind(),
            PathErrorKind::Configuration
        );
    }

    #[test]
    fn config_home_defaults_under_home() {
        let sandbox = Sandbox::new();
        let dir = sandbox.resolver().xdg_config_home().unwrap();

        assert_eq!(dir, sandbox.home().join(".config"));
        assert!(dir.is_dir());
    }

    #[test]
    fn config_home_override_is_created() {
        let mut sandbox = Sandbox::new();
        let custom = sandbox.root().join("custom").join("config");
        sandbox.set_var(XDG_CONFIG_HOME, custom.to_string_lossy());

        let dir = sandbox.resolver().xdg_config_home().unwrap();
        assert_eq!(dir, fs::canonicalize(&custom).unwrap());
        assert!(dir.is_dir());
        assert!(!sandbox.home().join(".config").exists());
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let mut sandbox = Sandbox::new();
        sandbox.set_var(XDG_CACHE_HOME, "");

        let dir = sandbox.resolver().xdg_cache_home().unwrap();
        assert_eq!(dir, sandbox.home().join(".cache"));
    }

    #[test]
    fn cache_home_is_idempotent() {
        let sandbox = Sandbox::new();
        let resolver = sandbox.resolver();

        let first = resolver.xdg_cache_home().unwrap();
        let second = resolver.xdg_cache_home().unwrap();
        assert_eq!(first, second);
        assert!(second.is_dir());
    }

    #[test]
    fn override_occupied_by_file_is_filesystem_error() {
        let mut sandbox = Sandbox::new();
        let file = sandbox.root().join("not-a-dir");
        fs::write(&file, b"").unwrap();
        sandbox.set_var(XDG_CACHE_HOME, file.to_string_lossy());

        let err = sandbox.resolver().xdg_cache_home().unwrap_err();
        assert_eq!(err.kind(), PathErrorKind::Filesystem);
    }

    #[test]
    fn data_home_default_creates_only_dot_local() {
        let sandbox = Sandbox::new();
        let dir = sandbox.resolver().xdg_data_home().unwrap();

        assert_eq!(dir, sandbox.home().join(".local").join("share"));
        assert!(sandbox.home().join(".local").is_dir());
        assert!(!dir.exists());
    }

    #[test]
    fn data_home_override_is_created() {
        let mut sandbox = Sandbox::new();
        let custom = sandbox.root().join("data");
        sandbox.set_var(XDG_DATA_HOME, custom.to_string_lossy());

        let dir = sandbox.resolver().xdg_data_home().unwrap();
        assert_eq!(dir, fs::canonicalize(&custom).unwrap());
        assert!(dir.is_dir());
    }

    #[test]
    fn local_log_sits_under_dot_local() {
        let sandbox = Sandbox::new();
        let resolver = sandbox.resolver();

        assert_eq!(
            resolver.local_log().unwrap(),
            sandbox.home().join(".local/var/log")
        );
        assert_eq!(
            resolver.local_share_locale().unwrap(),
            sandbox.home().join(".local/share/locale")
        );
    }
}
