//! Positional format templates.
//!
//! A template carries three slots, `{0}` (logger name), `{1}` (level name)
//! and `{2}` (message). `{{` and `}}` produce literal braces. Templates are
//! parsed once when set, so rendering a line never fails.

use std::fmt;

use thiserror::Error;

/// Default template for the plain console sink.
pub const DEFAULT_CONSOLE_FORMAT: &str = "[{0}] {1}: {2}";

/// Default template for the host-runtime sink, which tags the name itself.
pub const DEFAULT_HOST_FORMAT: &str = "{1}: {2}";

/// Errors from parsing a format template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A placeholder other than `{0}`, `{1}` or `{2}`.
    #[error("invalid placeholder {{{placeholder}}} at byte {offset}; expected {{0}}, {{1}} or {{2}}")]
    UnknownPlaceholder { placeholder: String, offset: usize },

    /// A `{` with no matching `}`.
    #[error("unclosed '{{' at byte {0}")]
    Unclosed(usize),

    /// A `}` that is neither `}}` nor closing a placeholder.
    #[error("unmatched '}}' at byte {0}")]
    Unmatched(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Name,
    Level,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// A parsed format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFormat {
    template: String,
    segments: Vec<Segment>,
}

impl LogFormat {
    /// Parse a template string.
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut placeholder = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        placeholder.push(inner);
                    }
                    if !closed {
                        return Err(FormatError::Unclosed(offset));
                    }
                    let slot = match placeholder.trim() {
                        "0" => Slot::Name,
                        "1" => Slot::Level,
                        "2" => Slot::Message,
                        _ => {
                            return Err(FormatError::UnknownPlaceholder {
                                placeholder: placeholder.clone(),
                                offset,
                            });
                        }
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(slot));
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(FormatError::Unmatched(offset)),
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    /// The template this format was parsed from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Substitute name, level name and message into the template.
    pub fn render(&self, name: &str, level: &str, message: &str) -> String {
        let mut out = String::with_capacity(self.template.len() + name.len() + message.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(Slot::Name) => out.push_str(name),
                Segment::Slot(Slot::Level) => out.push_str(level),
                Segment::Slot(Slot::Message) => out.push_str(message),
            }
        }
        out
    }

    /// The parsed form of [`DEFAULT_CONSOLE_FORMAT`].
    pub fn console_default() -> Self {
        Self {
            template: DEFAULT_CONSOLE_FORMAT.to_string(),
            segments: vec![
                Segment::Literal("[".into()),
                Segment::Slot(Slot::Name),
                Segment::Literal("] ".into()),
                Segment::Slot(Slot::Level),
                Segment::Literal(": ".into()),
                Segment::Slot(Slot::Message),
            ],
        }
    }

    /// The parsed form of [`DEFAULT_HOST_FORMAT`].
    pub fn host_default() -> Self {
        Self {
            template: DEFAULT_HOST_FORMAT.to_string(),
            segments: vec![
                Segment::Slot(Slot::Level),
                Segment::Literal(": ".into()),
                Segment::Slot(Slot::Message),
            ],
        }
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::console_default()
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl std::str::FromStr for LogFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
