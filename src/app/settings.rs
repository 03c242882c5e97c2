//! Settings choices (data only).
//!
//! The settings view builds one dropdown per item and the input handler
//! applies selections through the same table, so neither needs to know the
//! option lists.

use crate::config::Preferences;
use crate::core::palette::{FontScale, Theme};
use crate::core::scene::ChoiceTarget;

use super::state::ZyncShell;

/// A dropdown cycling through a fixed list of values.
pub struct SettingsItem {
    pub label: &'static str,
    pub target: ChoiceTarget,
    pub options: fn() -> Vec<&'static str>,
    pub current: fn(&Preferences) -> usize,
    pub select: fn(&mut ZyncShell, usize),
}

/// All dropdowns shown in the settings view, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem {
        label: "Theme",
        target: ChoiceTarget::Theme,
        options: || Theme::ALL.iter().map(|t| t.label()).collect(),
        current: |p| Theme::ALL.iter().position(|t| *t == p.theme).unwrap_or(0),
        select: |s, i| {
            if let Some(&theme) = Theme::ALL.get(i) {
                s.set_theme(theme);
            }
        },
    },
    SettingsItem {
        label: "Font Size",
        target: ChoiceTarget::FontScale,
        options: || FontScale::ALL.iter().map(|f| f.label()).collect(),
        current: |p| {
            FontScale::ALL
                .iter()
                .position(|f| *f == p.font_scale)
                .unwrap_or(1)
        },
        select: |s, i| {
            if let Some(&scale) = FontScale::ALL.get(i) {
                s.set_font_scale(scale);
            }
        },
    },
];

pub fn item_for(target: ChoiceTarget) -> Option<&'static SettingsItem> {
    SETTINGS_ITEMS.iter().find(|item| item.target == target)
}

/// Index `step` places away from `current`, wrapping.
pub fn cycle_index(current: usize, len: usize, step: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + step).rem_euclid(len) as usize
}
