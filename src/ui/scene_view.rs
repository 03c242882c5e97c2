//! Ratatui widgets that draw a region of the scene graph.
//!
//! [`RegionView`] stacks a region's nodes vertically (the content area);
//! [`BarView`] lays them out on one line (the chrome bars).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::scene::{NodeId, NodeKind, Scene, SceneNode, TextKind};

use super::theme;

/// Vertical rendering of `region` and its descendants.
pub struct RegionView<'a> {
    pub scene: &'a Scene,
    pub region: NodeId,
    pub focused: Option<NodeId>,
}

impl Widget for RegionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(region) = self.scene.get(self.region) else {
            return;
        };
        let base = theme::fill_style(&region.appearance);
        buf.set_style(area, base);

        let mut lines = Vec::new();
        for &child in &region.children {
            self.collect(child, 1, base, &mut lines);
        }
        Paragraph::new(lines).style(base).render(area, buf);
    }
}

impl RegionView<'_> {
    fn collect(&self, id: NodeId, indent: usize, bg: Style, out: &mut Vec<Line<'static>>) {
        let Some(node) = self.scene.get(id) else {
            return;
        };
        let pad = "  ".repeat(indent);
        match &node.kind {
            NodeKind::Container => {
                // Nested containers with their own fill read as cards.
                let card = bg.patch(theme::fill_style(&node.appearance));
                out.push(Line::raw(""));
                for &child in &node.children {
                    self.collect(child, indent + 1, card, out);
                }
                out.push(Line::raw(""));
            }
            _ => {
                let spans = node_spans(node, Some(id) == self.focused);
                let mut line = Line::from(Span::raw(pad)).style(bg);
                line.spans.extend(spans);
                out.push(line);
                if node.text_kind == Some(TextKind::Title) {
                    out.push(Line::raw(""));
                }
            }
        }
    }
}

/// One-line rendering of a chrome bar.
pub struct BarView<'a> {
    pub scene: &'a Scene,
    pub region: NodeId,
    pub focused: Option<NodeId>,
    pub bordered: bool,
    /// Replaces the bar's own text when set.
    pub notice: Option<&'a str>,
}

impl Widget for BarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(region) = self.scene.get(self.region) else {
            return;
        };
        let base = theme::fill_style(&region.appearance);
        buf.set_style(area, base);

        let mut spans = vec![Span::raw(" ")];
        match self.notice {
            Some(notice) => spans.push(Span::raw(notice.to_string())),
            None => {
                for id in self.scene.descendants(self.region).into_iter().skip(1) {
                    if let Some(node) = self.scene.get(id) {
                        spans.extend(node_spans(node, Some(id) == self.focused));
                        spans.push(Span::raw("   "));
                    }
                }
            }
        }

        let mut paragraph = Paragraph::new(Line::from(spans)).style(base);
        if self.bordered {
            paragraph = paragraph.block(Block::default().borders(Borders::BOTTOM).style(base));
        }
        paragraph.render(area, buf);
    }
}

fn node_spans(node: &SceneNode, focused: bool) -> Vec<Span<'static>> {
    let look = &node.appearance;
    let style = if focused {
        theme::focused_style(look)
    } else {
        theme::text_style(look)
    };
    let marker = if focused { "▸ " } else { "  " };

    match &node.kind {
        NodeKind::Label { text } => {
            let spacing = theme::letter_spacing(node.text_kind, look);
            vec![Span::styled(theme::spaced(text, spacing), theme::text_style(look))]
        }
        NodeKind::Button { text, .. } => vec![
            Span::raw(marker),
            Span::styled(format!("[ {text} ]"), style),
        ],
        NodeKind::Choice {
            label,
            options,
            selected,
            ..
        } => {
            let value = options.get(*selected).map_or("?", String::as_str);
            vec![
                Span::raw(marker),
                Span::styled(format!("{label}: ◂ {value} ▸"), style),
            ]
        }
        NodeKind::Container => Vec::new(),
    }
}
