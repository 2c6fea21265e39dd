use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const INPUT_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
pub const SUBMIT_WIDTH: u16 = 16;

/// Screen regions, top to bottom.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Regions {
    pub header: Rect,
    pub list: Rect,
    pub input: Rect,
    pub submit: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SUBMIT_WIDTH)])
        .split(rows[2]);

    Regions {
        header: rows[0],
        list: rows[1],
        input: input_row[0],
        submit: input_row[1],
        footer: rows[3],
    }
}

/// Index of the first item shown when only `visible` rows fit, so that the
/// newest items stay on screen.
pub fn first_visible_item(total: usize, visible: usize) -> usize {
    total.saturating_sub(visible)
}
