//! Hand URLs to the desktop's default browser.

use std::process::{Command, Stdio};

/// Ask the OS to open `url`.  Returns `true` if the launcher ran and exited
/// successfully.
pub fn open_url(url: &str) -> bool {
    #[cfg(target_os = "macos")]
    {
        return run_launcher("open", &[url]);
    }

    #[cfg(target_os = "windows")]
    {
        // The empty string is `start`'s window title argument.
        return run_launcher("cmd", &["/C", "start", "", url]);
    }

    #[cfg(target_os = "linux")]
    {
        if run_launcher("xdg-open", &[url]) {
            return true;
        }
        return run_launcher("gio", &["open", url]);
    }

    #[allow(unreachable_code)]
    {
        let _ = url;
        false
    }
}

fn run_launcher(cmd: &str, args: &[&str]) -> bool {
    let status = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match status {
        Ok(s) => s.success(),
        Err(e) => {
            tracing::debug!(cmd, error = %e, "launcher unavailable");
            false
        }
    }
}
