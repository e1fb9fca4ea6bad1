pub const HIDDEN_HINT: &str = "[Home] to toggle help";

pub fn help_lines() -> &'static [&'static str] {
    &[
        "[esc] to go up, [enter] to go in, [up/down] to navigate, [ctrl + C] to quit",
        "[ctrl + S/W] to jump to bottom/top, [PageDown/PageUp] to jump pages, [Home] to hide help",
    ]
}

/// Rows the help block takes for the given visibility.
pub fn help_rows(help_visible: bool) -> u16 {
    if help_visible {
        help_lines().len() as u16
    } else {
        1
    }
}

pub fn footer_text(help_visible: bool) -> String {
    if help_visible {
        help_lines().join("\n")
    } else {
        HIDDEN_HINT.to_string()
    }
}
