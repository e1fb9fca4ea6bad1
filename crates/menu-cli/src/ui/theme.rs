use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct ThemeTokens {
    pub entry: Style,
    pub selected: Style,
    pub help: Style,
    pub path: Style,
    pub status_error: Style,
}

pub fn build_theme(no_color: bool) -> ThemeTokens {
    if no_color {
        return monochrome_theme();
    }
    default_theme()
}

fn default_theme() -> ThemeTokens {
    ThemeTokens {
        entry: Style::default().fg(Color::White),
        selected: Style::default().fg(Color::Black).bg(Color::White),
        help: Style::default().fg(Color::White).bg(Color::Black),
        path: Style::default().fg(Color::LightYellow).bg(Color::Black),
        status_error: Style::default().fg(Color::Red),
    }
}

fn monochrome_theme() -> ThemeTokens {
    let base = Style::default();
    ThemeTokens {
        entry: base,
        selected: base.add_modifier(Modifier::REVERSED),
        help: base,
        path: base.add_modifier(Modifier::BOLD),
        status_error: base.add_modifier(Modifier::BOLD),
    }
}
