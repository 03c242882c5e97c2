//! External collaborators — device link, log export, browser.
//!
//! None of the device features exist yet.  The shell only needs to know it
//! can call them; [`PlaceholderLink`] logs each call and returns.

use std::path::{Path, PathBuf};

use crate::platform::launch;

/// Everything the dashboard can ask of the outside world.
pub trait DeviceLink {
    fn connect_device(&mut self);
    fn start_live_scan(&mut self);
    fn load_scan_logs(&mut self);
    /// Ask the user where to put exported logs.  `None` means cancelled.
    fn browse_save_path(&mut self) -> Option<PathBuf>;
    fn export_logs(&mut self, dest: &Path);
    fn open_link(&mut self, url: &str);
}

/// Stand-in used until real device support lands.
#[derive(Debug, Default)]
pub struct PlaceholderLink;

impl DeviceLink for PlaceholderLink {
    fn connect_device(&mut self) {
        tracing::info!("connect device requested (not implemented)");
    }

    fn start_live_scan(&mut self) {
        tracing::info!("live scan requested (not implemented)");
    }

    fn load_scan_logs(&mut self) {
        tracing::info!("scan logs requested (not implemented)");
    }

    fn browse_save_path(&mut self) -> Option<PathBuf> {
        tracing::info!("save dialog requested (not implemented)");
        None
    }

    fn export_logs(&mut self, dest: &Path) {
        tracing::info!(dest = %dest.display(), "log export requested (not implemented)");
    }

    fn open_link(&mut self, url: &str) {
        if !launch::open_url(url) {
            tracing::warn!(url, "could not open browser");
        }
    }
}
