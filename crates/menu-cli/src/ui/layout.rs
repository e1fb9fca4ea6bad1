use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Full,
    /// Too short for the help block; it is dropped so the list keeps a row.
    /// The status row is dropped too when only the path row fits.
    Compact,
}

#[derive(Debug, Clone, Copy)]
pub struct BrowserLayout {
    pub kind: LayoutKind,
    pub list: Rect,
    pub status: Rect,
    pub help: Rect,
    pub path: Rect,
}

pub fn compute_browser_layout(area: Rect, help_rows: u16, show_status: bool) -> BrowserLayout {
    let status_rows = u16::from(show_status);
    let path_rows = 1;
    let footer = status_rows + help_rows + path_rows;

    let (kind, help_rows) = if area.height > footer {
        (LayoutKind::Full, help_rows)
    } else {
        (LayoutKind::Compact, 0)
    };
    // the path row always keeps the last line
    let status_rows = if area.height > status_rows + path_rows {
        status_rows
    } else {
        0
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(status_rows),
            Constraint::Length(help_rows),
            Constraint::Length(path_rows),
        ])
        .split(area);

    BrowserLayout {
        kind,
        list: rows[0],
        status: rows[1],
        help: rows[2],
        path: rows[3],
    }
}
