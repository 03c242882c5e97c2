//! Role-tagged scene graph that stands in for the live widget tree.
//!
//! Every [`SceneNode`] carries the semantic tags it was created with — a
//! [`StyleRole`] deciding its colours and a [`TextKind`] deciding its font
//! size — so restyling never has to guess from the node's current colour.
//! Nodes live in an arena and reference each other by [`NodeId`]; removed
//! slots are recycled so repeated view switches don't grow the arena.

use super::palette::Rgb;
use super::router::View;

// ───────────────────────────────────────── tags ──────────────

/// Handle to a node in a [`Scene`].
///
/// Carries the generation of the slot it was issued for, so a handle to a
/// removed node stays dead after its slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// Semantic colour category, fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    Background,
    Surface,
    AccentText,
    PrimaryText,
    SecondaryText,
    AccentControl,
}

/// Semantic font category, fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Title,
    SectionHeader,
    Body,
    Small,
}

/// Which preference a choice node edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceTarget {
    Theme,
    FontScale,
}

/// What the node is, independent of any toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Groups children vertically.
    Container,
    Label { text: String },
    /// Fires `action` through the shell's action table when activated.
    Button { text: String, action: String },
    /// A dropdown: `options[selected]` is shown.
    Choice {
        label: String,
        options: Vec<String>,
        selected: usize,
        target: ChoiceTarget,
    },
}

impl NodeKind {
    pub fn is_focusable(&self) -> bool {
        matches!(self, NodeKind::Button { .. } | NodeKind::Choice { .. })
    }
}

// ───────────────────────────────────────── appearance ────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub size: u16,
    pub bold: bool,
}

/// Painted state — written only by the style walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Appearance {
    pub fill: Option<Rgb>,
    pub fg: Option<Rgb>,
    pub hover: Option<Rgb>,
    pub font: Option<Font>,
}

// ───────────────────────────────────────── node ──────────────

#[derive(Debug, Clone)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub role: Option<StyleRole>,
    pub text_kind: Option<TextKind>,
    /// Skip the fill colour on repaint.
    pub transparent: bool,
    /// Stable lookup name (e.g. the dashboard status label).
    pub name: Option<&'static str>,
    /// The view that created this node; `None` for window chrome.
    pub origin: Option<View>,
    pub appearance: Appearance,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl SceneNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            role: None,
            text_kind: None,
            transparent: false,
            name: None,
            origin: None,
            appearance: Appearance::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn container(role: StyleRole) -> Self {
        Self::new(NodeKind::Container).role(role)
    }

    pub fn label(text: impl Into<String>, role: StyleRole, text_kind: TextKind) -> Self {
        Self::new(NodeKind::Label { text: text.into() })
            .role(role)
            .text_kind(text_kind)
    }

    pub fn button(text: impl Into<String>, action: impl Into<String>) -> Self {
        Self::new(NodeKind::Button {
            text: text.into(),
            action: action.into(),
        })
        .role(StyleRole::AccentControl)
        .text_kind(TextKind::Body)
    }

    pub fn role(mut self, role: StyleRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn text_kind(mut self, kind: TextKind) -> Self {
        self.text_kind = Some(kind);
        self
    }

    pub fn transparent(mut self) -> Self {
        self.transparent = true;
        self
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Seed a bold weight; the walker keeps it across repaints.
    pub fn bold(mut self) -> Self {
        let size = self.appearance.font.map_or(0, |f| f.size);
        self.appearance.font = Some(Font { size, bold: true });
        self
    }
}

// ───────────────────────────────────────── arena ─────────────

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    node: Option<SceneNode>,
}

/// Arena-backed scene graph.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parentless node (a window root).
    pub fn insert_root(&mut self, node: SceneNode) -> NodeId {
        self.alloc(node)
    }

    /// Add `node` as the last child of `parent`.  Returns `None` if `parent`
    /// has been removed.
    pub fn add_child(&mut self, parent: NodeId, mut node: SceneNode) -> Option<NodeId> {
        self.get(parent)?;
        node.parent = Some(parent);
        let id = self.alloc(node);
        if let Some(p) = self.get_mut(parent) {
            p.children.push(id);
        }
        Some(id)
    }

    fn alloc(&mut self, node: SceneNode) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.slot(id).and_then(|slot| slot.node.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Destroy every descendant of `id`, leaving `id` itself in place.
    /// Returns the number of nodes removed.
    pub fn clear_children(&mut self, id: NodeId) -> usize {
        let Some(node) = self.get_mut(id) else {
            return 0;
        };
        let mut stack = std::mem::take(&mut node.children);
        let mut removed = 0;
        while let Some(child) = stack.pop() {
            let Some(slot) = self
                .slots
                .get_mut(child.index)
                .filter(|slot| slot.generation == child.generation)
            else {
                continue;
            };
            if let Some(dead) = slot.node.take() {
                slot.generation = slot.generation.wrapping_add(1);
                stack.extend(dead.children);
                self.free.push(child.index);
                removed += 1;
            }
        }
        removed
    }

    /// Depth-first pre-order listing of `root` and all its descendants.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            out.push(id);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// First node under `root` (inclusive) carrying `name`.
    pub fn find_named(&self, root: NodeId, name: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.get(id).and_then(|n| n.name) == Some(name))
    }

    /// Number of live nodes in the arena.
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}
