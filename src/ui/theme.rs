//! Translate painted scene appearance into Ratatui styles.
//!
//! Colours come from the nodes themselves; nothing here knows about palettes.

use ratatui::style::{Color, Modifier, Style};

use crate::core::palette::Rgb;
use crate::core::scene::{Appearance, TextKind};

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Background fill for a container, if it paints one.
pub fn fill_style(look: &Appearance) -> Style {
    match look.fill {
        Some(fill) => Style::default().bg(color(fill)),
        None => Style::default(),
    }
}

/// Foreground style for text-bearing nodes.
pub fn text_style(look: &Appearance) -> Style {
    let mut style = Style::default();
    if let Some(fg) = look.fg {
        style = style.fg(color(fg));
    }
    if look.font.is_some_and(|f| f.bold) {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Text style with the hover colour behind it.
pub fn focused_style(look: &Appearance) -> Style {
    let style = text_style(look).add_modifier(Modifier::BOLD);
    match look.hover {
        Some(hover) => style.bg(color(hover)),
        None => style.add_modifier(Modifier::REVERSED),
    }
}

/// Terminals have one glyph size, so large text is letter-spaced instead:
/// one space per 24pt.
pub fn letter_spacing(kind: Option<TextKind>, look: &Appearance) -> usize {
    match (kind, look.font) {
        (Some(TextKind::Title), Some(font)) => usize::from(font.size / 24),
        _ => 0,
    }
}

pub fn spaced(text: &str, spacing: usize) -> String {
    if spacing == 0 {
        return text.to_string();
    }
    let gap = " ".repeat(spacing);
    text.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(&gap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::Font;

    #[test]
    fn bold_font_maps_to_modifier() {
        let look = Appearance {
            fg: Some(Rgb(1, 2, 3)),
            font: Some(Font { size: 14, bold: true }),
            ..Appearance::default()
        };
        let style = text_style(&look);
        assert_eq!(style.fg, Some(Color::Rgb(1, 2, 3)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn transparent_fill_paints_nothing() {
        assert_eq!(fill_style(&Appearance::default()), Style::default());
    }

    #[test]
    fn title_spacing_grows_with_size() {
        let at = |size| Appearance {
            font: Some(Font { size, bold: true }),
            ..Appearance::default()
        };
        assert_eq!(letter_spacing(Some(TextKind::Title), &at(36)), 1);
        assert_eq!(letter_spacing(Some(TextKind::Title), &at(48)), 2);
        assert_eq!(letter_spacing(Some(TextKind::Body), &at(48)), 0);
        assert_eq!(spaced("ZYNC", 1), "Z Y N C");
        assert_eq!(spaced("ZYNC", 0), "ZYNC");
    }
}
