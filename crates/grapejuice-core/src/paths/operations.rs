//! The table of recorded path operations.
//!
//! Each operation is declared once, as `name => unrecorded implementation`.
//! The declaration expands to the public method, which routes through
//! [`Resolver::recorded`], and to an entry in [`PATH_OPERATIONS`]. Adding an
//! operation anywhere else leaves it unreachable from outside the module, so
//! a public path operation cannot exist without being recorded, and none can
//! be wrapped twice.

use std::path::PathBuf;

use super::error::PathError;
use super::resolver::{ResolveFn, Resolver};

/// A named, recorded path operation.
#[derive(Debug, Clone, Copy)]
pub struct PathOperation {
    pub name: &'static str,
    pub resolve: ResolveFn,
}

macro_rules! path_operations {
    ($($(#[$meta:meta])* $name:ident => $unrecorded:ident;)+) => {
        impl Resolver {
            $(
                $(#[$meta])*
                pub fn $name(&self) -> Result<PathBuf, PathError> {
                    self.recorded(stringify!($name), Self::$unrecorded)
                }
            )+
        }

        /// Every recorded path operation, in declaration order.
        pub static PATH_OPERATIONS: &[PathOperation] = &[
            $(PathOperation { name: stringify!($name), resolve: Resolver::$name },)+
        ];
    };
}

path_operations! {
    /// `$HOME`, canonicalized. Never created.
    home => resolve_home;
    /// `~/.local`, created if missing.
    dot_local => resolve_dot_local;
    /// `$XDG_CONFIG_HOME` or `~/.config`, created if missing.
    xdg_config_home => resolve_xdg_config_home;
    /// `$XDG_CACHE_HOME` or `~/.cache`, created if missing.
    xdg_cache_home => resolve_xdg_cache_home;
    /// `$XDG_DATA_HOME` (created if missing) or `~/.local/share`.
    ///
    /// Only `~/.local` is created in the fallback case; `share` is left alone.
    xdg_data_home => resolve_xdg_data_home;
    /// `<data home>/locale`.
    local_share_locale => resolve_local_share_locale;
    /// `~/.local/var`.
    local_var => resolve_local_var;
    /// `~/.local/var/log`.
    local_log => resolve_local_log;

    /// `<config home>/<org>`.
    configuration_base_dir => resolve_configuration_base_dir;
    /// `<config home>/<org>/<app>`.
    config_dir => resolve_config_dir;
    /// `<cache home>/<app>`, created if missing.
    cache_dir => resolve_cache_dir;
    /// `<data home>/<app>`.
    data_dir => resolve_data_dir;
    /// `~/.local/var/log/<app>`.
    logging_dir => resolve_logging_dir;
    /// `<data dir>/prefixes`.
    wineprefixes_dir => resolve_wineprefixes_dir;
    /// `<data dir>/package_manifest.json`.
    application_manifest => resolve_application_manifest;
    /// `<cache dir>/fast_flags.json`.
    fast_flag_cache => resolve_fast_flag_cache;
    /// `~/user_settings.json`, bootstrapped from the packaged template.
    user_settings => resolve_user_settings;

    /// First existing `assets` directory among the candidates.
    assets_dir => resolve_assets_dir;
    /// First candidate holding `*/LC_MESSAGES/<app>.mo` catalogs.
    locale_dir => resolve_locale_dir;

    po_dir => resolve_po_dir;
    desktop_assets_dir => resolve_desktop_assets_dir;
    mime_xml_assets_dir => resolve_mime_xml_assets_dir;
    icons_assets_dir => resolve_icons_assets_dir;
    glade_dir => resolve_glade_dir;
    grapejuice_glade => resolve_grapejuice_glade;
    global_css => resolve_global_css;
    about_glade => resolve_about_glade;
    fast_flag_editor_glade => resolve_fast_flag_editor_glade;
    grapejuice_components_glade => resolve_grapejuice_components_glade;
    fast_flag_warning_glade => resolve_fast_flag_warning_glade;
    exception_viewer_glade => resolve_exception_viewer_glade;
    settings_glade => resolve_settings_glade;
}
