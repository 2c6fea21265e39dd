use crate::ui::app::{Focus, TodoView};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{first_visible_item, layout_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, ITEM_INDEX};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const SUBMIT_LABEL: &str = "[ ADD ITEM ]";

pub fn draw(frame: &mut Frame<'_>, view: &TodoView) {
    let regions = layout_regions(frame.area());
    let state = view.view_state();
    let items = state.mirrored.items();

    frame.render_widget(Header::new(view.title(), items.len()).widget(), regions.header);

    frame.render_widget(Clear, regions.list);
    frame.render_widget(item_list(items, regions.list), regions.list);

    let input_focused = view.focus() == Focus::Input;
    let field = &state.pending_input;
    let inner_width = regions.input.width.saturating_sub(2) as usize;
    let before_cursor: String = field.value.chars().take(field.cursor).collect();
    let cursor_col = Span::raw(before_cursor).width();
    // Keep the cursor inside the box by scrolling long input sideways
    let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

    let input = Paragraph::new(field.value.as_str())
        .style(Style::default().fg(HEADER_TEXT))
        .scroll((0, scroll as u16))
        .block(bordered("New item", input_focused));
    frame.render_widget(input, regions.input);

    if input_focused && regions.input.width > 2 && regions.input.height > 2 {
        let x = regions.input.x + 1 + (cursor_col - scroll) as u16;
        let y = regions.input.y + 1;
        frame.set_cursor_position((x, y));
    }

    let mut submit_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    if !input_focused {
        submit_style = submit_style.bg(ACTIVE_HIGHLIGHT);
    }
    let submit = Paragraph::new(Span::styled(SUBMIT_LABEL, submit_style))
        .alignment(Alignment::Center)
        .block(bordered("", !input_focused));
    frame.render_widget(submit, regions.submit);

    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);
}

/// One row per item, in order, numbered by position.
fn item_list(items: &[String], area: Rect) -> Paragraph<'_> {
    let visible = area.height.saturating_sub(2) as usize;
    let first = first_visible_item(items.len(), visible);
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(first)
        .map(|(idx, item)| {
            Line::from(vec![
                Span::styled(format!("{:>3}. ", idx + 1), Style::default().fg(ITEM_INDEX)),
                Span::styled(item.as_str(), Style::default().fg(HEADER_TEXT)),
            ])
        })
        .collect();

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn bordered(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}
