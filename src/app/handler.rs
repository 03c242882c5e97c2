//! Input handling — maps key events to shell requests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::palette::{FontScale, Theme};
use crate::core::router::View;

use super::actions;
use super::settings::cycle_index;
use super::state::ZyncShell;

/// Process a key event.
pub fn handle_key(shell: &mut ZyncShell, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        shell.should_quit = true;
        return;
    }

    shell.notice = None;

    match key.code {
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => shell.move_focus(-1),
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => shell.move_focus(1),
        KeyCode::Left | KeyCode::Char('h') => shell.cycle_choice(-1),
        KeyCode::Right | KeyCode::Char('l') => shell.cycle_choice(1),
        KeyCode::Enter | KeyCode::Char(' ') => shell.activate(),
        KeyCode::Char('t') => cycle_theme(shell),
        KeyCode::Char('f') => cycle_font_scale(shell),
        KeyCode::Esc => match shell.active_view() {
            View::Dashboard => shell.should_quit = true,
            View::DeviceInfo | View::Settings => {
                shell.dispatch(actions::BACK);
            }
        },
        KeyCode::Char('q') => shell.should_quit = true,
        _ => {}
    }
}

/// A save-failure notice from `set_theme` takes precedence over the echo.
fn cycle_theme(shell: &mut ZyncShell) {
    let idx = Theme::ALL
        .iter()
        .position(|t| *t == shell.prefs.theme)
        .unwrap_or(0);
    let next = Theme::ALL[cycle_index(idx, Theme::ALL.len(), 1)];
    shell.set_theme(next);
    if shell.notice.is_none() {
        shell.notify(format!("Theme: {}", next.label()));
    }
}

fn cycle_font_scale(shell: &mut ZyncShell) {
    let idx = FontScale::ALL
        .iter()
        .position(|f| *f == shell.prefs.font_scale)
        .unwrap_or(1);
    let next = FontScale::ALL[cycle_index(idx, FontScale::ALL.len(), 1)];
    shell.set_font_scale(next);
    if shell.notice.is_none() {
        shell.notify(format!("Font size: {}", next.label()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::collab::PlaceholderLink;
    use crate::config::SettingsStore;
    use crate::core::palette::DarkModeProbe;

    struct NoProbe;

    impl DarkModeProbe for NoProbe {
        fn prefers_dark(&self) -> Option<bool> {
            None
        }
    }

    fn press(shell: &mut ZyncShell, code: KeyCode) {
        handle_key(shell, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn shell(dir: &std::path::Path) -> ZyncShell {
        ZyncShell::new(
            SettingsStore::in_dir(dir),
            Box::new(NoProbe),
            Box::new(PlaceholderLink),
        )
    }

    #[test]
    fn enter_on_top_bar_opens_settings_and_esc_returns() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path());
        press(&mut shell, KeyCode::Enter);
        assert_eq!(shell.active_view(), View::Settings);
        press(&mut shell, KeyCode::Esc);
        assert_eq!(shell.active_view(), View::Dashboard);
        assert!(!shell.should_quit);
        press(&mut shell, KeyCode::Esc);
        assert!(shell.should_quit);
    }

    #[test]
    fn hotkeys_cycle_preferences_from_any_view() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path());
        shell.navigate(View::DeviceInfo);
        press(&mut shell, KeyCode::Char('t'));
        assert_eq!(shell.prefs.theme, Theme::Light);
        press(&mut shell, KeyCode::Char('f'));
        assert_eq!(shell.prefs.font_scale, FontScale::Large);
        assert_eq!(shell.active_view(), View::DeviceInfo);
        assert_eq!(shell.notice.as_deref(), Some("Font size: Large"));
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path());
        shell.navigate(View::Settings);
        handle_key(
            &mut shell,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(shell.should_quit);
    }

    #[test]
    fn arrows_walk_dashboard_tiles() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(dir.path());
        // Five steps down from the top-bar button is the Device Info tile.
        for _ in 0..5 {
            press(&mut shell, KeyCode::Down);
        }
        press(&mut shell, KeyCode::Enter);
        assert_eq!(shell.active_view(), View::DeviceInfo);
        assert_eq!(shell.focus, 0);
    }
}
