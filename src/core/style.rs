//! Style walker — re-applies palette colours and font sizes in place.
//!
//! Colours are chosen from each node's [`StyleRole`] and sizes from its
//! [`TextKind`]; the values currently painted on a node are never consulted.

use super::palette::{FontSizes, Palette};
use super::scene::{Font, NodeId, Scene, SceneNode, StyleRole, TextKind};

/// Repaint `root` and every descendant exactly once, depth-first.
///
/// Returns the number of nodes visited.  Calling it twice with the same
/// palette and sizes leaves the tree unchanged the second time.
pub fn repaint(scene: &mut Scene, root: NodeId, palette: &Palette, sizes: &FontSizes) -> usize {
    let mut visited = 0;
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let Some(node) = scene.get_mut(id) else {
            continue;
        };
        paint_node(node, palette, sizes);
        stack.extend(node.children.iter().rev().copied());
        visited += 1;
    }
    tracing::debug!(root = ?root, visited, "repainted subtree");
    visited
}

/// Paint a single node.  Also used when a view builds fresh nodes so they
/// come up in the current theme.
pub fn paint_node(node: &mut SceneNode, palette: &Palette, sizes: &FontSizes) {
    let look = &mut node.appearance;
    match node.role {
        Some(StyleRole::Background) => {
            look.fill = (!node.transparent).then_some(palette.background);
        }
        Some(StyleRole::Surface) => {
            look.fill = (!node.transparent).then_some(palette.surface);
        }
        Some(StyleRole::AccentText) => look.fg = Some(palette.accent),
        Some(StyleRole::PrimaryText) => look.fg = Some(palette.text_primary),
        Some(StyleRole::SecondaryText) => look.fg = Some(palette.text_secondary),
        Some(StyleRole::AccentControl) => {
            look.fg = Some(palette.accent);
            look.hover = Some(palette.hover);
        }
        None => {}
    }

    if let Some(kind) = node.text_kind {
        let bold = look.font.is_some_and(|f| f.bold);
        look.font = Some(Font {
            size: size_for(kind, sizes),
            bold,
        });
    }
}

fn size_for(kind: TextKind, sizes: &FontSizes) -> u16 {
    match kind {
        TextKind::Title => sizes.title,
        TextKind::SectionHeader => sizes.header,
        TextKind::Body => sizes.normal,
        TextKind::Small => sizes.small,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::FontScale;
    use crate::core::scene::{Appearance, NodeKind};

    fn sample() -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let root = scene.insert_root(SceneNode::container(StyleRole::Background));
        let card = scene
            .add_child(root, SceneNode::container(StyleRole::Surface))
            .unwrap();
        scene
            .add_child(card, SceneNode::container(StyleRole::Surface).transparent())
            .unwrap();
        let title = SceneNode::label("ZYNC", StyleRole::PrimaryText, TextKind::Title).bold();
        scene.add_child(card, title).unwrap();
        scene
            .add_child(card, SceneNode::label("hint", StyleRole::SecondaryText, TextKind::Small))
            .unwrap();
        scene.add_child(card, SceneNode::button("Go", "go")).unwrap();
        scene.add_child(root, SceneNode::new(NodeKind::Container)).unwrap();
        (scene, root)
    }

    fn snapshot(scene: &Scene, root: NodeId) -> Vec<Appearance> {
        scene
            .descendants(root)
            .into_iter()
            .map(|id| scene.get(id).unwrap().appearance)
            .collect()
    }

    #[test]
    fn visits_every_node_once() {
        let (mut scene, root) = sample();
        let sizes = FontScale::Medium.sizes();
        assert_eq!(repaint(&mut scene, root, &Palette::DARK, &sizes), 7);
    }

    #[test]
    fn repaint_is_idempotent() {
        let (mut scene, root) = sample();
        let sizes = FontScale::Large.sizes();
        repaint(&mut scene, root, &Palette::LIGHT, &sizes);
        let once = snapshot(&scene, root);
        repaint(&mut scene, root, &Palette::LIGHT, &sizes);
        assert_eq!(snapshot(&scene, root), once);
    }

    #[test]
    fn colours_follow_roles() {
        let (mut scene, root) = sample();
        let sizes = FontScale::Medium.sizes();
        repaint(&mut scene, root, &Palette::DARK, &sizes);
        repaint(&mut scene, root, &Palette::LIGHT, &sizes);

        for id in scene.descendants(root) {
            let node = scene.get(id).unwrap();
            let look = node.appearance;
            match node.role {
                Some(StyleRole::Background) => {
                    assert_eq!(look.fill, Some(Palette::LIGHT.background))
                }
                Some(StyleRole::Surface) if node.transparent => assert_eq!(look.fill, None),
                Some(StyleRole::Surface) => assert_eq!(look.fill, Some(Palette::LIGHT.surface)),
                Some(StyleRole::PrimaryText) => {
                    assert_eq!(look.fg, Some(Palette::LIGHT.text_primary))
                }
                Some(StyleRole::SecondaryText) => {
                    assert_eq!(look.fg, Some(Palette::LIGHT.text_secondary))
                }
                Some(StyleRole::AccentControl) => {
                    assert_eq!(look.fg, Some(Palette::LIGHT.accent));
                    assert_eq!(look.hover, Some(Palette::LIGHT.hover));
                }
                Some(StyleRole::AccentText) => assert_eq!(look.fg, Some(Palette::LIGHT.accent)),
                None => assert_eq!(look, Appearance::default()),
            }
        }
    }

    #[test]
    fn font_size_tracks_scale_and_keeps_bold() {
        let (mut scene, root) = sample();
        repaint(&mut scene, root, &Palette::DARK, &FontScale::Small.sizes());
        repaint(&mut scene, root, &Palette::DARK, &FontScale::Large.sizes());

        let title = scene
            .descendants(root)
            .into_iter()
            .find(|&id| scene.get(id).unwrap().text_kind == Some(TextKind::Title))
            .unwrap();
        let font = scene.get(title).unwrap().appearance.font.unwrap();
        assert_eq!(font, Font { size: 56, bold: true });

        let hint = scene
            .descendants(root)
            .into_iter()
            .find(|&id| scene.get(id).unwrap().text_kind == Some(TextKind::Small))
            .unwrap();
        assert_eq!(
            scene.get(hint).unwrap().appearance.font,
            Some(Font { size: 14, bold: false })
        );
    }

    #[test]
    fn shared_colour_does_not_confuse_roles() {
        // Both palettes use the same accent; the accent control must still
        // pick up the new hover colour.
        assert_eq!(Palette::DARK.accent, Palette::LIGHT.accent);
        let mut scene = Scene::new();
        let root = scene.insert_root(SceneNode::button("x", "x"));
        let sizes = FontScale::Medium.sizes();
        repaint(&mut scene, root, &Palette::DARK, &sizes);
        repaint(&mut scene, root, &Palette::LIGHT, &sizes);
        assert_eq!(scene.get(root).unwrap().appearance.hover, Some(Palette::LIGHT.hover));
    }
}
