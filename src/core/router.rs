//! View router — exactly one logical screen mounted in the content region.
//!
//! The router owns the window skeleton (top bar, content, bottom bar) but not
//! what goes into it; a [`ViewBuilder`] supplies the nodes.  A transition
//! needs `&mut self`, so a second transition can never start while one is
//! still running.

use super::scene::{NodeId, Scene, SceneNode, StyleRole};

/// The logical screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    DeviceInfo,
    Settings,
}

impl View {
    /// Persistent top/bottom bars are shown on the dashboard only.
    pub fn shows_chrome(self) -> bool {
        self == View::Dashboard
    }
}

/// The persistent bars around the content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeSlot {
    TopBar,
    BottomBar,
}

/// Populates regions with nodes.  Implementations must only add children
/// under the region they are handed.
pub trait ViewBuilder {
    fn build_chrome(&mut self, slot: ChromeSlot, scene: &mut Scene, region: NodeId);
    fn build_view(&mut self, view: View, scene: &mut Scene, region: NodeId);
}

/// What a single [`ViewRouter::show`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: View,
    pub to: View,
    pub removed: usize,
    pub mounted: usize,
}

#[derive(Debug)]
pub struct ViewRouter {
    active: View,
    top_bar: NodeId,
    content: NodeId,
    bottom_bar: NodeId,
}

impl ViewRouter {
    /// Lay out the window skeleton under `root`, fill the chrome, and mount
    /// the dashboard.
    pub fn mount(scene: &mut Scene, root: NodeId, builder: &mut dyn ViewBuilder) -> Self {
        let top_bar = add_region(scene, root, StyleRole::Surface);
        let content = add_region(scene, root, StyleRole::Background);
        let bottom_bar = add_region(scene, root, StyleRole::Surface);

        builder.build_chrome(ChromeSlot::TopBar, scene, top_bar);
        builder.build_chrome(ChromeSlot::BottomBar, scene, bottom_bar);

        let mut router = Self {
            active: View::Dashboard,
            top_bar,
            content,
            bottom_bar,
        };
        router.show(View::Dashboard, scene, builder);
        router
    }

    /// Switch the content region to `view`.
    ///
    /// The old view's nodes are all destroyed before the first node of the
    /// new view exists.
    pub fn show(
        &mut self,
        view: View,
        scene: &mut Scene,
        builder: &mut dyn ViewBuilder,
    ) -> Transition {
        let from = self.active;
        let removed = scene.clear_children(self.content);
        builder.build_view(view, scene, self.content);
        let mounted = scene.descendants(self.content).len().saturating_sub(1);
        self.active = view;
        Transition {
            from,
            to: view,
            removed,
            mounted,
        }
    }

    pub fn active(&self) -> View {
        self.active
    }

    pub fn content(&self) -> NodeId {
        self.content
    }

    pub fn chrome_region(&self, slot: ChromeSlot) -> NodeId {
        match slot {
            ChromeSlot::TopBar => self.top_bar,
            ChromeSlot::BottomBar => self.bottom_bar,
        }
    }

    /// Layout-slot visibility, derived from the active view.
    pub fn is_visible(&self, slot: ChromeSlot) -> bool {
        match slot {
            ChromeSlot::TopBar | ChromeSlot::BottomBar => self.active.shows_chrome(),
        }
    }
}

fn add_region(scene: &mut Scene, root: NodeId, role: StyleRole) -> NodeId {
    scene
        .add_child(root, SceneNode::container(role))
        .unwrap_or_else(|| scene.insert_root(SceneNode::container(role)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{NodeKind, TextKind};

    const ALL_VIEWS: &[View] = &[View::Dashboard, View::DeviceInfo, View::Settings];

    /// Builds two labels per view, tagged with their origin.
    struct Stamp {
        chrome_builds: usize,
    }

    impl ViewBuilder for Stamp {
        fn build_chrome(&mut self, _slot: ChromeSlot, scene: &mut Scene, region: NodeId) {
            self.chrome_builds += 1;
            scene
                .add_child(region, SceneNode::label("bar", StyleRole::PrimaryText, TextKind::Small))
                .unwrap();
        }

        fn build_view(&mut self, view: View, scene: &mut Scene, region: NodeId) {
            for i in 0..2 {
                let text = format!("{view:?}-{i}");
                let mut node = SceneNode::label(text, StyleRole::PrimaryText, TextKind::Body);
                node.origin = Some(view);
                scene.add_child(region, node).unwrap();
            }
        }
    }

    fn setup() -> (Scene, ViewRouter, Stamp) {
        let mut scene = Scene::new();
        let root = scene.insert_root(SceneNode::container(StyleRole::Background));
        let mut builder = Stamp { chrome_builds: 0 };
        let router = ViewRouter::mount(&mut scene, root, &mut builder);
        (scene, router, builder)
    }

    fn mounted_origins(scene: &Scene, router: &ViewRouter) -> Vec<Option<View>> {
        scene
            .get(router.content())
            .unwrap()
            .children
            .iter()
            .map(|&id| scene.get(id).unwrap().origin)
            .collect()
    }

    #[test]
    fn starts_on_dashboard_with_chrome() {
        let (scene, router, builder) = setup();
        assert_eq!(router.active(), View::Dashboard);
        assert!(router.is_visible(ChromeSlot::TopBar));
        assert!(router.is_visible(ChromeSlot::BottomBar));
        assert_eq!(builder.chrome_builds, 2);
        assert_eq!(mounted_origins(&scene, &router), vec![Some(View::Dashboard); 2]);
    }

    #[test]
    fn every_transition_leaves_only_the_new_view() {
        let (mut scene, mut router, mut builder) = setup();
        for &from in ALL_VIEWS {
            for &to in ALL_VIEWS {
                router.show(from, &mut scene, &mut builder);
                let t = router.show(to, &mut scene, &mut builder);
                assert_eq!(t.from, from);
                assert_eq!(t.removed, 2);
                assert_eq!(router.active(), to);
                assert_eq!(mounted_origins(&scene, &router), vec![Some(to); 2]);
            }
        }
    }

    #[test]
    fn chrome_visible_iff_dashboard() {
        let (mut scene, mut router, mut builder) = setup();
        for &view in ALL_VIEWS {
            router.show(view, &mut scene, &mut builder);
            let expected = view == View::Dashboard;
            assert_eq!(router.is_visible(ChromeSlot::TopBar), expected);
            assert_eq!(router.is_visible(ChromeSlot::BottomBar), expected);
        }
    }

    #[test]
    fn chrome_survives_transitions() {
        let (mut scene, mut router, mut builder) = setup();
        let top = router.chrome_region(ChromeSlot::TopBar);
        router.show(View::Settings, &mut scene, &mut builder);
        let bar = scene.get(top).unwrap().children[0];
        assert!(matches!(
            &scene.get(bar).unwrap().kind,
            NodeKind::Label { text } if text == "bar"
        ));
        assert_eq!(builder.chrome_builds, 2);
    }

    #[test]
    fn round_trip_does_not_leak_nodes() {
        let (mut scene, mut router, mut builder) = setup();
        let baseline = scene.live_count();
        for _ in 0..10 {
            router.show(View::Settings, &mut scene, &mut builder);
            router.show(View::Dashboard, &mut scene, &mut builder);
        }
        assert_eq!(scene.live_count(), baseline);
    }
}
