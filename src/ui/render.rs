use crate::search::ResultItem;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_sections, layout_regions};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, HN_ORANGE, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let visible = app.visible_items();

    frame.render_widget(Header::new().widget(app.is_offline()), header);
    let footer_widget = Footer::new(visible.len(), app.results().items.len());
    frame.render_widget(footer_widget.widget(footer), footer);

    if body.height == 0 {
        return;
    }
    let [search, hint, status, list] = body_sections(body);
    draw_search_box(frame, app, search);
    draw_hint(frame, app, hint);
    draw_status(frame, app, status);
    draw_results(frame, app, &visible, list);
}

fn draw_search_box(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Search for ", Style::default().fg(HN_ORANGE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let input = if app.term().is_empty() {
        Paragraph::new(Span::styled(
            "Insert search term here...",
            Style::default().fg(MUTED_TEXT),
        ))
    } else {
        Paragraph::new(Span::styled(
            app.term().to_string(),
            Style::default().fg(HEADER_TEXT),
        ))
    };
    frame.render_widget(input.block(block), area);

    if area.width > 2 && area.height > 2 {
        let typed = u16::try_from(app.term().chars().count()).unwrap_or(u16::MAX);
        let x = area.x + 1 + typed.min(area.width.saturating_sub(3));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_hint(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = match app.input_hint() {
        Some(hint) => Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::from(Span::styled(
            format!(" Press Enter to search for {}", app.term()),
            Style::default().fg(MUTED_TEXT),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let results = app.results();
    let line = if results.is_loading {
        Line::from(Span::styled(
            " Loading data ...",
            Style::default().fg(HEADER_TEXT),
        ))
    } else if results.is_error {
        Line::from(Span::styled(
            " Error loading data.",
            Style::default().fg(STATUS_ERROR),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_results(frame: &mut Frame<'_>, app: &App, visible: &[&ResultItem], area: Rect) {
    let last = &app.results().last_queried_term;
    let title = if last.is_empty() {
        " Your News ".to_string()
    } else {
        format!(" Your News about {last} ")
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(HN_ORANGE)))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if visible.is_empty() {
        let message = if app.results().is_loading {
            ""
        } else {
            " No stories match the current term."
        };
        let empty = Paragraph::new(Span::styled(message, Style::default().fg(MUTED_TEXT)));
        frame.render_widget(empty.block(block), area);
        return;
    }

    let items: Vec<ListItem> = visible.iter().map(|item| story_item(item)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(app.selection()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn story_item(item: &ResultItem) -> ListItem<'static> {
    let mut title = vec![Span::styled(
        item.title.clone(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    if let Some(link) = item.link() {
        title.push(Span::styled(
            format!("  {link}"),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    let details = Line::from(Span::styled(
        format!(
            "  by {}  │  {} likes  │  {} comments",
            item.author, item.score, item.comment_count
        ),
        Style::default().fg(MUTED_TEXT),
    ));
    ListItem::new(vec![Line::from(title), details])
}
