//! The shell — composition root for preferences, theme, and views.
//!
//! All mutable UI state lives in [`ZyncShell`].  The renderer reads it through
//! `&ZyncShell`; input handling and actions mutate it through `&mut`.

use crate::config::{Preferences, SettingsStore};
use crate::core::palette::{DarkModeProbe, FontScale, Palette, Theme};
use crate::core::router::{ChromeSlot, View, ViewRouter};
use crate::core::scene::{NodeId, NodeKind, Scene, SceneNode, StyleRole};
use crate::core::style;

use super::actions::ActionTable;
use super::collab::DeviceLink;
use super::settings::{self, cycle_index};
use super::views::{ShellViews, DEVICE_STATUS};

const INITIAL_DEVICE_STATUS: &str = "Device Status: Not Connected";

pub struct ZyncShell {
    /// Current preferences; always what was last requested, even if saving
    /// failed.
    pub prefs: Preferences,
    /// Palette resolved from `prefs.theme`.
    pub palette: Palette,
    pub scene: Scene,
    /// Window root; repaints start here.
    pub root: NodeId,
    pub router: ViewRouter,
    /// Index into [`ZyncShell::focusables`].
    pub focus: usize,
    /// Dashboard status line.  Lives here so it survives view rebuilds.
    pub device_status: String,
    /// Transient message for the bottom line (cleared on next input).
    pub notice: Option<String>,
    /// Controls the main event loop.
    pub should_quit: bool,
    store: SettingsStore,
    probe: Box<dyn DarkModeProbe>,
    link: Box<dyn DeviceLink>,
    actions: ActionTable,
}

impl ZyncShell {
    /// Load preferences, build the window, and paint it.
    pub fn new(
        store: SettingsStore,
        probe: Box<dyn DarkModeProbe>,
        link: Box<dyn DeviceLink>,
    ) -> Self {
        let prefs = store.load();
        let palette = Palette::resolve(prefs.theme, probe.as_ref());
        let device_status = INITIAL_DEVICE_STATUS.to_string();

        let mut scene = Scene::new();
        let root = scene.insert_root(SceneNode::container(StyleRole::Background));
        let router = {
            let mut views = ShellViews {
                prefs: &prefs,
                palette: &palette,
                device_status: &device_status,
            };
            ViewRouter::mount(&mut scene, root, &mut views)
        };
        style::repaint(&mut scene, root, &palette, &prefs.font_scale.sizes());
        tracing::info!(theme = ?prefs.theme, font = ?prefs.font_scale, "shell ready");

        Self {
            prefs,
            palette,
            scene,
            root,
            router,
            focus: 0,
            device_status,
            notice: None,
            should_quit: false,
            store,
            probe,
            link,
            actions: ActionTable::builtin(),
        }
    }

    #[cfg(test)]
    pub fn with_actions(mut self, actions: ActionTable) -> Self {
        self.actions = actions;
        self
    }

    pub fn active_view(&self) -> View {
        self.router.active()
    }

    // ── preferences ─────────────────────────────────────────────

    pub fn set_theme(&mut self, theme: Theme) {
        if self.prefs.theme == theme {
            return;
        }
        self.prefs.theme = theme;
        self.palette = Palette::resolve(theme, self.probe.as_ref());
        tracing::info!(
            ?theme,
            background = %self.palette.background,
            accent = %self.palette.accent,
            "theme changed"
        );
        self.preferences_changed();
    }

    pub fn set_font_scale(&mut self, scale: FontScale) {
        if self.prefs.font_scale == scale {
            return;
        }
        self.prefs.font_scale = scale;
        tracing::info!(?scale, "font scale changed");
        self.preferences_changed();
    }

    fn preferences_changed(&mut self) {
        style::repaint(
            &mut self.scene,
            self.root,
            &self.palette,
            &self.prefs.font_scale.sizes(),
        );
        self.sync_choices();
        if let Err(e) = self.store.save(&self.prefs) {
            tracing::warn!(error = %e, "failed to save preferences");
            self.notify(format!("Settings not saved: {e}"));
        }
    }

    /// Point every visible dropdown at the current preference value.
    fn sync_choices(&mut self) {
        for id in self.scene.descendants(self.router.content()) {
            let Some(node) = self.scene.get_mut(id) else {
                continue;
            };
            if let NodeKind::Choice { selected, target, .. } = &mut node.kind {
                if let Some(item) = settings::item_for(*target) {
                    *selected = (item.current)(&self.prefs);
                }
            }
        }
    }

    // ── navigation ──────────────────────────────────────────────

    /// Replace the content region with `view`, built in the current theme.
    pub fn navigate(&mut self, view: View) {
        let mut views = ShellViews {
            prefs: &self.prefs,
            palette: &self.palette,
            device_status: &self.device_status,
        };
        let t = self.router.show(view, &mut self.scene, &mut views);
        self.focus = 0;
        tracing::debug!(
            from = ?t.from,
            to = ?t.to,
            removed = t.removed,
            mounted = t.mounted,
            live = self.scene.live_count(),
            "view transition"
        );
    }

    /// Run the handler bound to `action`.  Unbound names are ignored.
    /// Returns whether a handler ran.
    pub fn dispatch(&mut self, action: &str) -> bool {
        match self.actions.get(action) {
            Some(handler) => {
                tracing::debug!(action, "dispatch");
                handler(self);
                true
            }
            None => {
                tracing::debug!(action, "no handler bound, ignoring");
                false
            }
        }
    }

    pub fn link_mut(&mut self) -> &mut dyn DeviceLink {
        self.link.as_mut()
    }

    /// Update the status line, in place if the dashboard is mounted.
    pub fn set_device_status(&mut self, text: impl Into<String>) {
        self.device_status = text.into();
        if let Some(id) = self.scene.find_named(self.router.content(), DEVICE_STATUS) {
            if let Some(NodeKind::Label { text }) = self.scene.get_mut(id).map(|n| &mut n.kind) {
                text.clone_from(&self.device_status);
            }
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    // ── focus ───────────────────────────────────────────────────

    /// Focusable nodes in the visible regions, top to bottom.
    pub fn focusables(&self) -> Vec<NodeId> {
        let mut regions = Vec::with_capacity(3);
        if self.router.is_visible(ChromeSlot::TopBar) {
            regions.push(self.router.chrome_region(ChromeSlot::TopBar));
        }
        regions.push(self.router.content());
        if self.router.is_visible(ChromeSlot::BottomBar) {
            regions.push(self.router.chrome_region(ChromeSlot::BottomBar));
        }

        regions
            .into_iter()
            .flat_map(|r| self.scene.descendants(r))
            .filter(|&id| self.scene.get(id).is_some_and(|n| n.kind.is_focusable()))
            .collect()
    }

    pub fn focused(&self) -> Option<NodeId> {
        let all = self.focusables();
        all.get(self.focus.min(all.len().saturating_sub(1))).copied()
    }

    pub fn move_focus(&mut self, step: isize) {
        let len = self.focusables().len();
        self.focus = cycle_index(self.focus.min(len.saturating_sub(1)), len, step);
    }

    /// Activate the focused node: fire a button or advance a dropdown.
    pub fn activate(&mut self) {
        let Some(id) = self.focused() else {
            return;
        };
        let action = match self.scene.get(id).map(|n| &n.kind) {
            Some(NodeKind::Button { action, .. }) => Some(action.clone()),
            Some(NodeKind::Choice { .. }) => None,
            _ => return,
        };
        match action {
            Some(action) => {
                self.dispatch(&action);
            }
            None => self.cycle_choice(1),
        }
    }

    /// Step the focused dropdown and apply the new value.
    pub fn cycle_choice(&mut self, step: isize) {
        let Some(id) = self.focused() else {
            return;
        };
        let Some(NodeKind::Choice {
            options,
            selected,
            target,
            ..
        }) = self.scene.get(id).map(|n| &n.kind)
        else {
            return;
        };
        let next = cycle_index(*selected, options.len(), step);
        if let Some(item) = settings::item_for(*target) {
            (item.select)(self, next);
        }
    }
}
