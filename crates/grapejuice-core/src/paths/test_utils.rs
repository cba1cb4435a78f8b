//! Test fixtures for path resolution.
//!
//! Most tests build a [`Sandbox`]: a temporary directory holding a home,
//! an install directory and a settings template, plus an in-memory
//! environment and a private resolution record. Tests that need the live
//! process environment use [`ENV_LOCK`] and [`EnvVarGuard`] instead.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use super::env::{HOME, MapEnv};
use super::layout::AppLayout;
use super::record::ResolutionRecord;
use super::resolver::Resolver;

/// Held by every test that reads or writes the live process environment
/// (`HOME`, the `XDG_*` variables, `GRAPEJUICE_LOCALE_DIRECTORY`) through
/// [`ProcessEnv`](super::env::ProcessEnv).
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets one process variable for the guard's lifetime, then puts back
/// whatever was there before (or removes it).
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvVarGuard {
    #[allow(unsafe_code)]
    pub fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var(key).ok();
        // SAFETY: callers hold ENV_LOCK, so no other test thread touches the environment.
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: still under ENV_LOCK; the guard is dropped before the lock.
        match self.previous.take() {
            Some(value) => unsafe { env::set_var(self.key, value) },
            None => unsafe { env::remove_var(self.key) },
        }
    }
}

/// An isolated filesystem and environment for a single test.
pub struct Sandbox {
    _temp: TempDir,
    root: PathBuf,
    env: MapEnv,
    record: Arc<ResolutionRecord>,
}

impl Sandbox {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(temp.path()).unwrap();
        fs::create_dir_all(root.join("home")).unwrap();
        fs::create_dir_all(root.join("install")).unwrap();

        let env = MapEnv::new().with(HOME, root.join("home").to_string_lossy());

        Self {
            _temp: temp,
            root,
            env,
            record: Arc::new(ResolutionRecord::new()),
        }
    }

    /// Canonical root of the sandbox.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn home(&self) -> PathBuf {
        self.root.join("home")
    }

    pub fn install_dir(&self) -> PathBuf {
        self.root.join("install")
    }

    pub fn template(&self) -> PathBuf {
        self.root.join("template").join("user_settings.json")
    }

    pub fn record(&self) -> &Arc<ResolutionRecord> {
        &self.record
    }

    pub fn set_var(&mut self, key: &str, value: impl Into<String>) {
        self.env.set(key, value);
    }

    pub fn remove_var(&mut self, key: &str) {
        self.env.remove(key);
    }

    /// Layout pointing every search location into the sandbox.
    pub fn layout(&self) -> AppLayout {
        AppLayout {
            settings_template: self.template(),
            system_locale_dirs: Vec::new(),
            install_dir: self.install_dir(),
            ..AppLayout::default()
        }
    }

    /// Resolver over the sandbox environment, writing to the sandbox record.
    pub fn resolver(&self) -> Resolver {
        Resolver::new()
            .with_env(self.env.clone())
            .with_layout(self.layout())
            .with_record(Arc::clone(&self.record))
    }

    pub fn write_template(&self, contents: &[u8]) {
        let template = self.template();
        fs::create_dir_all(template.parent().unwrap()).unwrap();
        fs::write(template, contents).unwrap();
    }

    /// Create the packaged asset tree next to the install dir.
    pub fn install_assets(&self) -> PathBuf {
        let assets = self.install_dir().join("assets");
        fs::create_dir_all(assets.join("glade")).unwrap();
        assets
    }

    /// Place a catalog in the default user locale directory and return it.
    pub fn install_catalog(&self, lang: &str) -> PathBuf {
        let locale = self.home().join(".local/share/locale");
        Self::write_catalog(&locale, lang);
        locale
    }

    /// Write `<root>/<lang>/LC_MESSAGES/grapejuice.mo`.
    pub fn write_catalog(root: &Path, lang: &str) {
        let dir = root.join(lang).join("LC_MESSAGES");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("grapejuice.mo"), b"").unwrap();
    }
}
