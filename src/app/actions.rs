//! Named actions that buttons fire.
//!
//! Buttons carry an action *name*; the table maps names to handlers.  A name
//! with no handler does nothing, so half-built features can ship a button
//! before they ship a handler.

use std::collections::HashMap;

use crate::core::router::View;

use super::state::ZyncShell;

pub type ActionHandler = fn(&mut ZyncShell);

pub const CONNECT_DEVICE: &str = "connect_device";
pub const LIVE_SCAN: &str = "live_scan";
pub const SCAN_LOGS: &str = "scan_logs";
pub const EXPORT_LOGS: &str = "export_logs";
pub const DEVICE_INFO: &str = "device_info";
pub const OPEN_SETTINGS: &str = "open_settings";
pub const BACK: &str = "back";
pub const OPEN_PROJECT_PAGE: &str = "open_project_page";

pub struct ActionTable {
    handlers: HashMap<&'static str, ActionHandler>,
}

impl ActionTable {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// The shipped bindings.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.bind(CONNECT_DEVICE, connect_device);
        table.bind(LIVE_SCAN, |s| s.link_mut().start_live_scan());
        table.bind(SCAN_LOGS, |s| s.link_mut().load_scan_logs());
        table.bind(EXPORT_LOGS, export_logs);
        table.bind(DEVICE_INFO, |s| s.navigate(View::DeviceInfo));
        table.bind(OPEN_SETTINGS, |s| s.navigate(View::Settings));
        table.bind(BACK, |s| s.navigate(View::Dashboard));
        table.bind(OPEN_PROJECT_PAGE, open_project_page);
        table
    }

    /// Bind (or rebind) `name`.
    pub fn bind(&mut self, name: &'static str, handler: ActionHandler) {
        self.handlers.insert(name, handler);
    }

    pub fn get(&self, name: &str) -> Option<ActionHandler> {
        self.handlers.get(name).copied()
    }
}

fn connect_device(shell: &mut ZyncShell) {
    shell.set_device_status("Device Status: Connecting...");
    shell.link_mut().connect_device();
}

fn export_logs(shell: &mut ZyncShell) {
    match shell.link_mut().browse_save_path() {
        Some(dest) => shell.link_mut().export_logs(&dest),
        None => tracing::debug!("log export cancelled"),
    }
}

/// Package `homepage`, opened by the settings view's "Project Page" button.
pub const PROJECT_URL: &str = env!("CARGO_PKG_HOMEPAGE");

fn open_project_page(shell: &mut ZyncShell) {
    shell.link_mut().open_link(PROJECT_URL);
}
