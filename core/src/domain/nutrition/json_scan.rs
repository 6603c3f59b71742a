/// Quote, escape and depth tracking for a character-by-character object scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanState {
    depth: usize,
    quote: Option<char>,
    escape: bool,
}

impl ScanState {
    /// Consumes one character. Returns `true` when it closes the outermost object.
    pub fn advance(&mut self, ch: char) -> bool {
        if self.escape {
            self.escape = false;
            return false;
        }

        if let Some(open) = self.quote {
            if ch == '\\' {
                self.escape = true;
            } else if ch == open {
                self.quote = None;
            }
            return false;
        }

        match ch {
            '"' | '\'' => self.quote = Some(ch),
            '{' => self.depth += 1,
            '}' => {
                self.depth = self.depth.saturating_sub(1);
                return self.depth == 0;
            }
            _ => {}
        }

        false
    }

    pub fn in_string(&self) -> bool {
        self.quote.is_some()
    }
}

/// Returns the first brace-balanced object in `text`, from its first `{` to the
/// `}` that closes it.
///
/// Braces inside single- or double-quoted strings are not counted, and a
/// backslash inside a string escapes exactly one character. Yields `None` when
/// the text has no `{` or the object is never closed.
pub fn extract_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut state = ScanState::default();

    for (offset, ch) in text[start..].char_indices() {
        if state.advance(ch) {
            let end = start + offset + ch.len_utf8();
            return Some(&text[start..end]);
        }
    }

    None
}

/// Whether `text`, scanned from its first `{`, stops inside an unterminated string.
pub fn ends_inside_string(text: &str) -> bool {
    let Some(start) = text.find('{') else {
        return false;
    };

    let mut state = ScanState::default();
    for ch in text[start..].chars() {
        state.advance(ch);
    }

    state.in_string()
}
