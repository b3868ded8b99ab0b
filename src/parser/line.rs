//! README line classification.

/// One classified README line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// ATX heading (`#` to `######`) with its trimmed text.
    Heading { level: usize, text: &'a str },
    /// A `>` line with nothing but whitespace after the marker.
    QuoteBlank,
    /// A `>` line, marker and surrounding whitespace removed.
    Quote(&'a str),
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else, trimmed.
    Text(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a raw source line.
    pub fn classify(raw: &'a str) -> Self {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Line::Blank;
        }

        if let Some(rest) = trimmed.strip_prefix('>') {
            let rest = rest.trim();
            return if rest.is_empty() {
                Line::QuoteBlank
            } else {
                Line::Quote(rest)
            };
        }

        if let Some((level, text)) = heading(trimmed) {
            return Line::Heading { level, text };
        }

        Line::Text(trimmed)
    }

    /// Content of the line with any quote marker removed.
    pub fn content(&self) -> &'a str {
        match *self {
            Line::Heading { text, .. } => text,
            Line::Quote(text) | Line::Text(text) => text,
            Line::QuoteBlank | Line::Blank => "",
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Line::Heading { .. })
    }
}

/// Split `## Title` into (2, "Title").
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some((level, rest.trim()))
}

/// Text of a `-` bullet, or `None` for any other line.
pub fn bullet(content: &str) -> Option<&str> {
    let rest = content.strip_prefix('-')?;
    if rest.is_empty() {
        return Some("");
    }
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}
