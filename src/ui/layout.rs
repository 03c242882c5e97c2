//! Layout helpers — split the terminal area into the window's slots.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top bar, content, and bottom bar.  Hidden chrome slots get zero rows.
pub struct AppLayout {
    pub top_bar: Rect,
    pub content: Rect,
    pub bottom_bar: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect, top_visible: bool, bottom_visible: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if top_visible { 3 } else { 0 }),
                Constraint::Min(3), // content takes all remaining space
                Constraint::Length(if bottom_visible { 1 } else { 0 }),
            ])
            .split(area);

        Self {
            top_bar: chunks[0],
            content: chunks[1],
            bottom_bar: chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_chrome_gives_content_everything() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::from_area(area, false, false);
        assert_eq!(layout.top_bar.height, 0);
        assert_eq!(layout.bottom_bar.height, 0);
        assert_eq!(layout.content.height, 24);
    }

    #[test]
    fn visible_chrome_reserves_rows() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::from_area(area, true, true);
        assert_eq!(layout.top_bar.height, 3);
        assert_eq!(layout.bottom_bar.height, 1);
        assert_eq!(layout.content.height, 20);
    }
}
