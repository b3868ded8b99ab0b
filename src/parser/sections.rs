//! Purpose, feature and use-case extraction.
//!
//! README files are scanned one line at a time. The scanner starts in
//! `Seeking` and moves between states on these triggers:
//!
//! - `> Purpose` (any case) enters `InPurpose`; only the first one counts.
//! - A blank quote line (`>`) ends the purpose block and enters
//!   `InFeatures`.
//! - Any heading ends the purpose or feature block.
//! - `### Use Cases` (any case) enters `InUseCases`, which runs until the
//!   next level-1 or level-2 heading, or until a first `> Purpose` line
//!   hands over to the purpose block. Lines starting with `#` are skipped.
//!
//! A section that never appears simply stays empty.

use super::line::{bullet, Line};

/// Sections extracted from one README.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    /// Purpose lines joined with `\n`.
    pub purpose: String,
    /// One entry per `-` bullet.
    pub features: Vec<String>,
    /// Non-blank, non-heading lines of the use-case section.
    pub use_cases: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Seeking,
    InPurpose,
    InFeatures,
    InUseCases,
}

struct Scanner {
    state: State,
    seen_purpose: bool,
    seen_use_cases: bool,
    purpose: Vec<String>,
    features: Vec<String>,
    use_cases: Vec<String>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: State::Seeking,
            seen_purpose: false,
            seen_use_cases: false,
            purpose: Vec::new(),
            features: Vec::new(),
            use_cases: Vec::new(),
        }
    }

    fn feed(&mut self, raw: &str) {
        let line = Line::classify(raw);

        match self.state {
            State::Seeking => self.seek(line),
            State::InPurpose => match line {
                Line::QuoteBlank => self.state = State::InFeatures,
                Line::Heading { .. } => self.reseek(line),
                Line::Blank => {}
                other => self.purpose.push(other.content().to_string()),
            },
            State::InFeatures => match line {
                Line::Heading { .. } => self.reseek(line),
                Line::Blank | Line::QuoteBlank => {}
                other => self.push_feature_line(other.content()),
            },
            State::InUseCases => match line {
                Line::Heading { level, .. } if level <= 2 => self.reseek(line),
                Line::Quote(text) if self.opens_purpose(text) => self.reseek(line),
                Line::Blank => {}
                _ if raw.trim_start().starts_with('#') => {}
                _ => self.use_cases.push(raw.trim().to_string()),
            },
        }
    }

    /// Leave the current section and look at `line` again from `Seeking`.
    fn reseek(&mut self, line: Line<'_>) {
        self.state = State::Seeking;
        self.seek(line);
    }

    fn seek(&mut self, line: Line<'_>) {
        match line {
            Line::Quote(text) if self.opens_purpose(text) => {
                self.seen_purpose = true;
                self.state = State::InPurpose;
            }
            Line::Heading { level: 3, text }
                if !self.seen_use_cases && text.eq_ignore_ascii_case("use cases") =>
            {
                self.seen_use_cases = true;
                self.state = State::InUseCases;
            }
            _ => {}
        }
    }

    fn opens_purpose(&self, text: &str) -> bool {
        !self.seen_purpose && text.eq_ignore_ascii_case("purpose")
    }

    fn push_feature_line(&mut self, content: &str) {
        if let Some(item) = bullet(content) {
            self.features.push(item.to_string());
            return;
        }

        // Continuation of the previous bullet; text before the first bullet is a label.
        if let Some(last) = self.features.last_mut() {
            if !last.is_empty() {
                last.push(' ');
            }
            last.push_str(content);
        }
    }

    fn finish(self) -> Sections {
        Sections {
            purpose: self.purpose.join("\n"),
            features: self.features,
            use_cases: self.use_cases,
        }
    }
}

/// Extract the purpose, feature and use-case sections from README text.
pub fn extract_sections(source: &str) -> Sections {
    let mut scanner = Scanner::new();
    for raw in source.lines() {
        scanner.feed(raw);
    }
    scanner.finish()
}
