use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, HN_ORANGE, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Your Hacker Stories";
pub const SUBTITLE: &str = "Get your stories from hacker news";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title line, plus an offline marker when no network is used.
    pub fn widget(&self, offline: bool) -> Paragraph<'static> {
        let mut title = vec![
            Span::styled("  ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                TITLE,
                Style::default().fg(HN_ORANGE).add_modifier(Modifier::BOLD),
            ),
        ];
        if offline {
            title.push(Span::styled("  │  offline", Style::default().fg(MUTED_TEXT)));
        }
        let subtitle = Line::from(Span::styled(
            format!("  {SUBTITLE}"),
            Style::default().fg(MUTED_TEXT),
        ));

        Paragraph::new(vec![Line::from(title), subtitle]).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
