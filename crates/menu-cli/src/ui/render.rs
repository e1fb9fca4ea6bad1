use std::borrow::Cow;

const TAB: &str = "    ";

/// Text for one list row: `"> entry"` when selected, otherwise the 1-based
/// absolute index followed by the entry.
pub fn format_row(index: usize, entry: &str, selected: bool) -> String {
    let entry = sanitize(entry);
    if selected {
        format!("> {entry}")
    } else {
        format!("{} {entry}", index + 1)
    }
}

/// Expands tabs and drops control characters so a line cannot move the
/// terminal cursor.
pub fn sanitize(value: &str) -> Cow<'_, str> {
    if !value.chars().any(char::is_control) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\t' => out.push_str(TAB),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub fn position_label(selected: usize, len: usize) -> String {
    if len == 0 {
        return "0/0".into();
    }
    format!("{}/{len}", selected + 1)
}

pub fn truncate_middle(value: &str, max_chars: usize) -> Cow<'_, str> {
    if value.chars().count() <= max_chars {
        return Cow::Borrowed(value);
    }

    if max_chars <= 3 {
        return Cow::Owned("...".chars().take(max_chars).collect());
    }

    let keep = max_chars - 3;
    let left = keep / 2;
    let right = keep - left;
    let start: String = value.chars().take(left).collect();
    let end: String = value
        .chars()
        .rev()
        .take(right)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    Cow::Owned(format!("{start}...{end}"))
}

pub fn compose_status(left: &str, right: &str, width: usize) -> String {
    let left_chars = left.chars().count();
    let right_chars = right.chars().count();

    if right.is_empty() || left_chars + 1 + right_chars >= width {
        return left.to_string();
    }

    let spaces = width.saturating_sub(left_chars + right_chars);
    format!("{left}{}{}", " ".repeat(spaces), right)
}
