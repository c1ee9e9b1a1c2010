use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const KEY_HINTS: &str = " Enter: Search │ ↑/↓: Select │ Del: Remove │ Ctrl+U: Clear │ Esc: Quit";

/// Key hints on the left; shown/total item counts and version on the right.
pub struct Footer {
    shown: usize,
    total: usize,
}

impl Footer {
    pub fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let right = format!("{}/{} shown │ v{} ", self.shown, self.total, VERSION);

        // Char count, not byte count: the hints contain box-drawing glyphs.
        let used = KEY_HINTS.chars().count() + right.chars().count();
        let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(KEY_HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
