//! Fixed names and search locations.
//!
//! An [`AppLayout`] holds the data the resolver composes paths from: the
//! application identity, the locale override variable, the packaged settings
//! template, and the candidate roots scanned during discovery. The default
//! layout is Grapejuice's; every field can be overridden from JSON.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Organization segment of the configuration root.
pub const DEFAULT_ORGANIZATION: &str = "brinkervii";
/// Application segment of every application directory.
pub const DEFAULT_APPLICATION: &str = "grapejuice";
/// Variable that, when set, is searched first for message catalogs.
pub const DEFAULT_LOCALE_OVERRIDE_VAR: &str = "GRAPEJUICE_LOCALE_DIRECTORY";
/// Packaged template copied to the user settings file on first access.
pub const DEFAULT_SETTINGS_TEMPLATE: &str = "/app/user_settings.json";
/// Well-known system install locations for compiled message catalogs.
pub const DEFAULT_SYSTEM_LOCALE_DIRS: [&str; 3] = [
    "/app/share/runtime/locale",
    "/app/share/locale",
    "/app/locales",
];

/// Application identity and search locations used by a resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppLayout {
    /// Vendor directory under the XDG configuration base.
    pub organization: String,

    /// Application directory name; also the gettext domain.
    pub application: String,

    /// Environment variable naming a user locale directory.
    pub locale_override_var: String,

    /// Template copied into place when the user settings file is missing.
    pub settings_template: PathBuf,

    /// System locale directories, searched after the user data locale dir.
    pub system_locale_dirs: Vec<PathBuf>,

    /// Installation directory; its `assets` child is the first asset candidate.
    pub install_dir: PathBuf,
}

impl Default for AppLayout {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            application: DEFAULT_APPLICATION.to_string(),
            locale_override_var: DEFAULT_LOCALE_OVERRIDE_VAR.to_string(),
            settings_template: PathBuf::from(DEFAULT_SETTINGS_TEMPLATE),
            system_locale_dirs: DEFAULT_SYSTEM_LOCALE_DIRS
                .iter()
                .map(PathBuf::from)
                .collect(),
            install_dir: default_install_dir(),
        }
    }
}

impl AppLayout {
    /// Parse a layout from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// File name of the compiled message catalog for this application.
    pub fn catalog_file_name(&self) -> String {
        format!("{}.mo", self.application)
    }
}

/// Installation directory of the running executable.
fn default_install_dir() -> PathBuf {
    let exe = env::current_exe().ok().and_then(|exe| exe.canonicalize().ok());
    install_dir_for(exe.as_deref(), Path::new(env!("CARGO_MANIFEST_DIR")))
}

/// Installation directory for an executable at `exe`.
///
/// A binary running from inside the source checkout (`target/` builds and
/// tests) uses the crate directory `source_dir`. Any other binary uses its own
/// directory. Without a known executable, `source_dir` is used.
pub(crate) fn install_dir_for(exe: Option<&Path>, source_dir: &Path) -> PathBuf {
    let Some(exe) = exe else {
        return source_dir.to_path_buf();
    };

    // crates/<name> -> workspace root
    let checkout = source_dir
        .parent()
        .and_then(Path::parent)
        .unwrap_or(source_dir);
    let checkout = checkout
        .canonicalize()
        .unwrap_or_else(|_| checkout.to_path_buf());

    if exe.starts_with(&checkout) {
        return source_dir.to_path_buf();
    }

    exe.parent()
        .map_or_else(|| source_dir.to_path_buf(), Path::to_path_buf)
}
