//! Node trees for each view and for the window chrome.
//!
//! Nodes are painted as they are created, using the palette and font sizes
//! current at build time, so a freshly mounted view never needs a separate
//! repaint.

use crate::config::Preferences;
use crate::core::palette::{FontSizes, Palette};
use crate::core::router::{ChromeSlot, View, ViewBuilder};
use crate::core::scene::{NodeId, NodeKind, Scene, SceneNode, StyleRole, TextKind};
use crate::core::style::paint_node;

use super::actions;
use super::settings::SETTINGS_ITEMS;

/// Name of the dashboard's device-status label.
pub const DEVICE_STATUS: &str = "device-status";

/// Dashboard tiles: label → action name.
pub const DASHBOARD_TILES: &[(&str, &str)] = &[
    ("Connect Device", actions::CONNECT_DEVICE),
    ("Live Scan", actions::LIVE_SCAN),
    ("Scan Logs", actions::SCAN_LOGS),
    ("Export Logs", actions::EXPORT_LOGS),
    ("Device Info", actions::DEVICE_INFO),
    ("Settings", actions::OPEN_SETTINGS),
];

/// Builds views from a snapshot of the shell's state.
pub struct ShellViews<'a> {
    pub prefs: &'a Preferences,
    pub palette: &'a Palette,
    pub device_status: &'a str,
}

impl ViewBuilder for ShellViews<'_> {
    fn build_chrome(&mut self, slot: ChromeSlot, scene: &mut Scene, region: NodeId) {
        let mut m = self.mount(scene, None);
        let built = match slot {
            ChromeSlot::TopBar => top_bar(&mut m, region),
            ChromeSlot::BottomBar => bottom_bar(&mut m, region),
        };
        if built.is_none() {
            tracing::warn!(?slot, "chrome region vanished during build");
        }
    }

    fn build_view(&mut self, view: View, scene: &mut Scene, region: NodeId) {
        let device_status = self.device_status;
        let prefs = self.prefs;
        let mut m = self.mount(scene, Some(view));
        let built = match view {
            View::Dashboard => dashboard(&mut m, region, device_status),
            View::DeviceInfo => device_info(&mut m, region, device_status),
            View::Settings => settings(&mut m, region, prefs),
        };
        if built.is_none() {
            tracing::warn!(?view, "content region vanished during build");
        }
    }
}

impl ShellViews<'_> {
    fn mount<'s>(&self, scene: &'s mut Scene, origin: Option<View>) -> Mount<'s> {
        Mount {
            scene,
            palette: *self.palette,
            sizes: self.prefs.font_scale.sizes(),
            origin,
        }
    }
}

/// Adds painted, origin-tagged nodes.
struct Mount<'s> {
    scene: &'s mut Scene,
    palette: Palette,
    sizes: FontSizes,
    origin: Option<View>,
}

impl Mount<'_> {
    fn add(&mut self, parent: NodeId, mut node: SceneNode) -> Option<NodeId> {
        node.origin = self.origin;
        paint_node(&mut node, &self.palette, &self.sizes);
        self.scene.add_child(parent, node)
    }
}

// ───────────────────────────────────────── chrome ────────────

fn top_bar(m: &mut Mount, region: NodeId) -> Option<()> {
    m.add(
        region,
        SceneNode::label("ZYNC", StyleRole::AccentText, TextKind::SectionHeader).bold(),
    )?;
    m.add(region, SceneNode::button("Settings", actions::OPEN_SETTINGS))?;
    Some(())
}

fn bottom_bar(m: &mut Mount, region: NodeId) -> Option<()> {
    m.add(
        region,
        SceneNode::label(
            format!(
                "v{}  ·  ↑↓ move  Enter select  t theme  f font  q quit",
                env!("CARGO_PKG_VERSION")
            ),
            StyleRole::SecondaryText,
            TextKind::Small,
        ),
    )?;
    Some(())
}

// ───────────────────────────────────────── views ─────────────

fn dashboard(m: &mut Mount, region: NodeId, device_status: &str) -> Option<()> {
    m.add(
        region,
        SceneNode::label("ZYNC", StyleRole::PrimaryText, TextKind::Title).bold(),
    )?;
    let status = SceneNode::label(device_status, StyleRole::AccentText, TextKind::Body)
        .named(DEVICE_STATUS);
    m.add(region, status)?;

    let tiles = m.add(region, SceneNode::container(StyleRole::Surface))?;
    for &(label, action) in DASHBOARD_TILES {
        m.add(tiles, SceneNode::button(label, action))?;
    }
    Some(())
}

fn device_info(m: &mut Mount, region: NodeId, device_status: &str) -> Option<()> {
    m.add(region, SceneNode::button("← Back", actions::BACK))?;
    m.add(
        region,
        SceneNode::label("Device Info", StyleRole::PrimaryText, TextKind::SectionHeader).bold(),
    )?;

    let card = m.add(region, SceneNode::container(StyleRole::Surface))?;
    m.add(
        card,
        SceneNode::label(device_status, StyleRole::PrimaryText, TextKind::Body),
    )?;
    for field in ["Name", "Firmware", "Signal"] {
        m.add(
            card,
            SceneNode::label(format!("{field}: —"), StyleRole::PrimaryText, TextKind::Body),
        )?;
    }
    m.add(
        card,
        SceneNode::label(
            "Connect a device from the dashboard to see its details.",
            StyleRole::SecondaryText,
            TextKind::Small,
        ),
    )?;
    Some(())
}

fn settings(m: &mut Mount, region: NodeId, prefs: &Preferences) -> Option<()> {
    m.add(region, SceneNode::button("← Back", actions::BACK))?;
    m.add(
        region,
        SceneNode::label("Settings", StyleRole::PrimaryText, TextKind::SectionHeader).bold(),
    )?;

    let appearance = m.add(region, SceneNode::container(StyleRole::Surface))?;
    m.add(
        appearance,
        SceneNode::label("Appearance", StyleRole::AccentText, TextKind::SectionHeader),
    )?;
    for item in SETTINGS_ITEMS {
        let choice = SceneNode::new(NodeKind::Choice {
            label: item.label.to_string(),
            options: (item.options)().into_iter().map(String::from).collect(),
            selected: (item.current)(prefs),
            target: item.target,
        })
        .role(StyleRole::AccentControl)
        .text_kind(TextKind::Body);
        m.add(appearance, choice)?;
    }

    let about = m.add(region, SceneNode::container(StyleRole::Surface).transparent())?;
    m.add(
        about,
        SceneNode::label("About", StyleRole::AccentText, TextKind::SectionHeader),
    )?;
    m.add(
        about,
        SceneNode::label(
            format!("ZYNC v{}", env!("CARGO_PKG_VERSION")),
            StyleRole::SecondaryText,
            TextKind::Body,
        ),
    )?;
    m.add(about, SceneNode::button("Project Page", actions::OPEN_PROJECT_PAGE))?;
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::{FontScale, Theme};
    use crate::core::scene::ChoiceTarget;

    fn build(view: View, prefs: Preferences) -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let region = scene.insert_root(SceneNode::container(StyleRole::Background));
        let palette = Palette::LIGHT;
        let mut views = ShellViews {
            prefs: &prefs,
            palette: &palette,
            device_status: "Device Status: Not Connected",
        };
        views.build_view(view, &mut scene, region);
        (scene, region)
    }

    fn actions_in(scene: &Scene, region: NodeId) -> Vec<String> {
        scene
            .descendants(region)
            .into_iter()
            .filter_map(|id| match &scene.get(id).unwrap().kind {
                NodeKind::Button { action, .. } => Some(action.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn dashboard_has_every_tile_and_status() {
        let (scene, region) = build(View::Dashboard, Preferences::default());
        let expected: Vec<String> = DASHBOARD_TILES.iter().map(|(_, a)| a.to_string()).collect();
        assert_eq!(actions_in(&scene, region), expected);
        assert!(scene.find_named(region, DEVICE_STATUS).is_some());
    }

    #[test]
    fn sub_views_offer_back() {
        for view in [View::DeviceInfo, View::Settings] {
            let (scene, region) = build(view, Preferences::default());
            assert_eq!(actions_in(&scene, region)[0], actions::BACK);
        }
    }

    #[test]
    fn built_nodes_are_tagged_and_painted() {
        let (scene, region) = build(View::Settings, Preferences::default());
        for id in scene.descendants(region).into_iter().skip(1) {
            let node = scene.get(id).unwrap();
            assert_eq!(node.origin, Some(View::Settings));
            if matches!(node.role, Some(StyleRole::PrimaryText)) {
                assert_eq!(node.appearance.fg, Some(Palette::LIGHT.text_primary));
            }
            if node.text_kind.is_some() {
                assert!(node.appearance.font.is_some());
            }
        }
    }

    #[test]
    fn settings_choices_reflect_preferences() {
        let prefs = Preferences {
            theme: Theme::Light,
            font_scale: FontScale::Small,
        };
        let (scene, region) = build(View::Settings, prefs);
        let mut seen = 0;
        for id in scene.descendants(region) {
            if let NodeKind::Choice {
                options, selected, target, ..
            } = &scene.get(id).unwrap().kind
            {
                seen += 1;
                match target {
                    ChoiceTarget::Theme => assert_eq!(options[*selected], "Light"),
                    ChoiceTarget::FontScale => assert_eq!(options[*selected], "Small"),
                }
            }
        }
        assert_eq!(seen, 2);
    }
}
