//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! Reads the shell's scene graph and turns it into terminal cells.  No state
//! changes happen here.

pub mod layout;
pub mod scene_view;
pub mod theme;

use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::app::state::ZyncShell;
use crate::core::router::ChromeSlot;

use self::layout::AppLayout;
use self::scene_view::{BarView, RegionView};

/// Draw one frame.
pub fn draw(frame: &mut Frame, shell: &ZyncShell) {
    let router = &shell.router;
    let top_visible = router.is_visible(ChromeSlot::TopBar);
    let bottom_visible = router.is_visible(ChromeSlot::BottomBar);
    let area = frame.area();
    let layout = AppLayout::from_area(area, top_visible, bottom_visible);
    let focused = shell.focused();

    // The window root paints behind everything, including zero-height slots.
    if let Some(root) = shell.scene.get(shell.root) {
        frame
            .buffer_mut()
            .set_style(area, theme::fill_style(&root.appearance));
    }

    if top_visible {
        frame.render_widget(
            BarView {
                scene: &shell.scene,
                region: router.chrome_region(ChromeSlot::TopBar),
                focused,
                bordered: true,
                notice: None,
            },
            layout.top_bar,
        );
    }

    frame.render_widget(
        RegionView {
            scene: &shell.scene,
            region: router.content(),
            focused,
        },
        layout.content,
    );

    if bottom_visible {
        frame.render_widget(
            BarView {
                scene: &shell.scene,
                region: router.chrome_region(ChromeSlot::BottomBar),
                focused,
                bordered: false,
                notice: shell.notice.as_deref(),
            },
            layout.bottom_bar,
        );
    } else if let Some(notice) = shell.notice.as_deref() {
        // No bottom bar off the dashboard; borrow the content's last row.
        let content = layout.content;
        if content.height > 0 {
            let row = Rect::new(content.x, content.bottom() - 1, content.width, 1);
            let look = shell
                .scene
                .get(router.content())
                .map(|n| n.appearance)
                .unwrap_or_default();
            frame.render_widget(
                Paragraph::new(format!(" {notice}")).style(theme::fill_style(&look)),
                row,
            );
        }
    }
}
