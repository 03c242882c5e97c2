//! OS dark-mode detection for the `System` theme.

use crate::core::palette::DarkModeProbe;

/// Reads the desktop's appearance from the environment: `GTK_THEME`, then the
/// terminal's `COLORFGBG`, then (on macOS) the global `AppleInterfaceStyle`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvAppearanceProbe;

impl DarkModeProbe for EnvAppearanceProbe {
    fn prefers_dark(&self) -> Option<bool> {
        if let Some(dark) = std::env::var("GTK_THEME")
            .ok()
            .and_then(|name| dark_from_theme_name(&name))
        {
            return Some(dark);
        }
        if let Some(dark) = std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| dark_from_colorfgbg(&v))
        {
            return Some(dark);
        }
        macos_interface_style()
    }
}

/// `"Adwaita:dark"` → dark, `"Breeze-Light"` → light, anything else unknown.
fn dark_from_theme_name(name: &str) -> Option<bool> {
    let normalized = name.trim().to_ascii_lowercase();
    if normalized.contains("dark") {
        Some(true)
    } else if normalized.contains("light") {
        Some(false)
    } else {
        None
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); the last field is the
/// background's ANSI index.
fn dark_from_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}

#[cfg(target_os = "macos")]
fn macos_interface_style() -> Option<bool> {
    use std::process::Command;

    // Exits non-zero when the key is unset, which means light mode.
    let out = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    Some(out.status.success() && String::from_utf8_lossy(&out.stdout).trim() == "Dark")
}

#[cfg(not(target_os = "macos"))]
fn macos_interface_style() -> Option<bool> {
    None
}
