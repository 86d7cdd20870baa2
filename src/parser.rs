//! Extractor for the legacy Python settings file
//!
//! Pulls string and string-list assignments out of a `config.py`-style
//! file without evaluating it. Only the assignment shapes the legacy
//! file actually uses are recognized; every other line (imports,
//! numbers, function definitions) is skipped, not an error.

use std::collections::HashMap;

/// Values extracted from the legacy settings file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSettings {
    /// Top-level `NAME = 'value'` string assignments
    pub strings: HashMap<String, String>,
    /// Top-level `NAME = [...]` string-list assignments
    pub lists: HashMap<String, Vec<String>>,
    /// `class Name:` sections, each holding its own string assignments
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl ParsedSettings {
    /// Look up a top-level string assignment
    pub fn string(&self, name: &str) -> Option<&str> {
        self.strings.get(name).map(String::as_str)
    }

    /// Look up a top-level string-list assignment
    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.lists.get(name).map(Vec::as_slice)
    }

    /// Look up a string assignment inside a `class` section
    pub fn section_string(&self, section: &str, name: &str) -> Option<&str> {
        self.sections
            .get(section)?
            .get(name)
            .map(String::as_str)
    }
}

/// Parse legacy settings content
///
/// Recognized shapes:
///
/// ```text
/// SCRYPT_ID_PEPPER = 'hex...'
/// SUPPORTED_LOCALES = ['en_US', 'fr_FR']
/// class SourceInterfaceFlaskConfig:
///     SECRET_KEY = 'hex...'
/// ```
///
/// Lists may span multiple lines up to the closing bracket. `#`
/// comments outside of quotes run to end of line.
pub fn parse_settings(content: &str) -> ParsedSettings {
    let mut parsed = ParsedSettings::default();
    let mut section: Option<String> = None;
    let mut lines = content.lines();

    while let Some(raw) = lines.next() {
        let line = strip_comment(raw);
        if line.trim().is_empty() {
            continue;
        }

        let indented = line.starts_with([' ', '\t']);
        if !indented {
            // Any non-indented statement ends the current class body
            section = None;
        }

        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("class ") {
            if !indented {
                let name: String = rest
                    .chars()
                    .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                    .collect();
                if !name.is_empty() {
                    parsed.sections.entry(name.clone()).or_default();
                    section = Some(name);
                }
            }
            continue;
        }

        let Some((lhs, rhs)) = trimmed.split_once('=') else {
            continue;
        };
        let name = lhs.trim();
        if !is_identifier(name) {
            continue;
        }
        let rhs = rhs.trim();

        if rhs.starts_with('\'') || rhs.starts_with('"') {
            let Some(value) = parse_quoted(rhs) else {
                continue;
            };
            match (indented, &section) {
                (true, Some(sec)) => {
                    parsed
                        .sections
                        .entry(sec.clone())
                        .or_default()
                        .insert(name.to_string(), value);
                }
                (false, _) => {
                    parsed.strings.insert(name.to_string(), value);
                }
                (true, None) => {}
            }
        } else if rhs.starts_with('[') {
            // The list may continue over following lines until the
            // brackets balance
            let mut buf = rhs.to_string();
            while bracket_depth(&buf) > 0 {
                match lines.next() {
                    Some(next) => {
                        buf.push(' ');
                        buf.push_str(strip_comment(next));
                    }
                    None => break,
                }
            }
            if !indented && bracket_depth(&buf) == 0 {
                parsed
                    .lists
                    .insert(name.to_string(), parse_string_items(&buf));
            }
        }
    }

    parsed
}

/// Truncate a line at the first `#` that sits outside quotes
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\'' | '"' => match quote {
                Some(q) if q == c => quote = None,
                Some(_) => {}
                None => quote = Some(c),
            },
            '#' if quote.is_none() => return &line[..i],
            _ => {}
        }
    }
    line
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a quoted string literal at the start of `rhs`
///
/// Returns `None` for an unterminated literal. A backslash escapes the
/// following character; anything after the closing quote is ignored.
fn parse_quoted(rhs: &str) -> Option<String> {
    let mut chars = rhs.chars();
    let quote = chars.next()?;
    let mut value = String::new();
    let mut escaped = false;
    for c in chars {
        if escaped {
            value.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some(value);
        } else {
            value.push(c);
        }
    }
    None
}

/// Net bracket nesting of `text`, ignoring brackets inside quotes
fn bracket_depth(text: &str) -> i32 {
    let mut depth = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in text.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\'' | '"' => match quote {
                Some(q) if q == c => quote = None,
                Some(_) => {}
                None => quote = Some(c),
            },
            '[' if quote.is_none() => depth += 1,
            ']' if quote.is_none() => depth -= 1,
            _ => {}
        }
    }
    depth
}

/// Collect every quoted string inside a bracketed list expression
fn parse_string_items(text: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\'' || c == '"' {
            let quote = c;
            let mut value = String::new();
            let mut escaped = false;
            for c in chars.by_ref() {
                if escaped {
                    value.push(c);
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == quote {
                    items.push(value);
                    break;
                } else {
                    value.push(c);
                }
            }
        }
    }
    items
}
