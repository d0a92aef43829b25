//! Template scanner for `print_line`
//!
//! A template is literal text with `{}` substitution sites. Literal braces
//! are written doubled (`{{`, `}}`). The scanner is a two-state machine:
//!
//! ```text
//!              '{' or '}'
//!   Normal ───────────────▶ BracePending(brace, position)
//!     ▲  │ other: copy            │
//!     └──┘                        │ "{}"  → placeholder
//!     ▲                           │ "{{"  → literal '{'
//!     └───────────────────────────┘ "}}"  → literal '}'
//!                                   anything else, or end of input
//!                                   → InvalidTemplate at `position`
//! ```
//!
//! Positions are zero-based character offsets of the pending brace.

use crate::config::ArgumentPolicy;
use std::str::FromStr;
use tracing::warn;
use velocity_core::{Format, Result, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim (escapes already resolved)
    Literal(String),
    /// Substitution site for the next positional argument
    Placeholder,
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Normal,
    BracePending { brace: char, position: usize },
}

/// A validated template, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
    placeholders: usize,
}

impl Template {
    /// Scan `source` into segments, rejecting malformed brace sequences
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut placeholders = 0;
        let mut state = ScanState::Normal;

        for (offset, c) in source.chars().enumerate() {
            state = match state {
                ScanState::Normal => match c {
                    '{' | '}' => ScanState::BracePending {
                        brace: c,
                        position: offset,
                    },
                    _ => {
                        literal.push(c);
                        ScanState::Normal
                    }
                },
                ScanState::BracePending { brace: '{', .. } if c == '}' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder);
                    placeholders += 1;
                    ScanState::Normal
                }
                ScanState::BracePending { brace, .. } if c == brace => {
                    literal.push(brace);
                    ScanState::Normal
                }
                ScanState::BracePending { brace, position } => {
                    return Err(invalid(brace, position, Some(c)));
                }
            };
        }

        if let ScanState::BracePending { brace, position } = state {
            return Err(invalid(brace, position, None));
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            segments,
            placeholders,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of `{}` substitution sites
    pub fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    /// Substitute `args` in order, checking the count against `policy`
    pub fn render(&self, args: &[&dyn Format], policy: ArgumentPolicy) -> Result<String> {
        let arguments = args.len();
        if arguments < self.placeholders
            || (arguments > self.placeholders && policy == ArgumentPolicy::Strict)
        {
            return Err(RuntimeError::ArgumentCount {
                placeholders: self.placeholders,
                arguments,
            });
        }
        if arguments > self.placeholders {
            warn!(
                placeholders = self.placeholders,
                arguments, "ignoring surplus template arguments"
            );
        }

        let mut out = String::new();
        let mut next = args.iter();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder => {
                    if let Some(arg) = next.next() {
                        out.push_str(&arg.format());
                    }
                }
            }
        }
        Ok(out)
    }
}

impl FromStr for Template {
    type Err = RuntimeError;

    fn from_str(source: &str) -> Result<Self> {
        Self::parse(source)
    }
}

fn invalid(brace: char, position: usize, found: Option<char>) -> RuntimeError {
    let reason = match (brace, found) {
        ('{', Some(c)) => format!("'{{' must be followed by '}}' or '{{', found {:?}", c),
        ('{', None) => "unmatched '{' at end of template".to_string(),
        (_, Some(c)) => format!("'}}' must be followed by '}}', found {:?}", c),
        (_, None) => "unmatched '}' at end of template".to_string(),
    };
    RuntimeError::InvalidTemplate { position, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, args: &[&dyn Format]) -> Result<String> {
        Template::parse(source)?.render(args, ArgumentPolicy::Strict)
    }

    #[test]
    fn test_plain_text() {
        let t = Template::parse("hello world").unwrap();
        assert_eq!(t.placeholder_count(), 0);
        assert_eq!(t.segments(), &[Segment::Literal("hello world".to_string())]);
        assert_eq!(render("hello world", &[]).unwrap(), "hello world");
    }

    #[test]
    fn test_empty_template() {
        let t = Template::parse("").unwrap();
        assert!(t.segments().is_empty());
        assert_eq!(render("", &[]).unwrap(), "");
    }

    #[test]
    fn test_placeholders_in_order() {
        let t = Template::parse("{} + {} = {}").unwrap();
        assert_eq!(t.placeholder_count(), 3);
        assert_eq!(render("{} + {} = {}", &[&1, &2, &3]).unwrap(), "1 + 2 = 3");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(render("{{}}", &[]).unwrap(), "{}");
        assert_eq!(render("{{{}}}", &[&7]).unwrap(), "{7}");
        assert_eq!(render("}}{{", &[]).unwrap(), "}{");
    }

    #[test]
    fn test_lone_open_brace() {
        match Template::parse("{") {
            Err(RuntimeError::InvalidTemplate { position, .. }) => assert_eq!(position, 0),
            other => panic!("Expected InvalidTemplate, got {:?}", other),
        }
    }

    #[test]
    fn test_open_brace_followed_by_text() {
        match Template::parse("ab{x}") {
            Err(RuntimeError::InvalidTemplate { position, reason }) => {
                assert_eq!(position, 2);
                assert!(reason.contains("'x'"));
            }
            other => panic!("Expected InvalidTemplate, got {:?}", other),
        }
    }

    #[test]
    fn test_lone_close_brace() {
        assert!(matches!(
            Template::parse("a}b"),
            Err(RuntimeError::InvalidTemplate { position: 1, .. })
        ));
        assert!(matches!(
            Template::parse("{}}"),
            Err(RuntimeError::InvalidTemplate { position: 2, .. })
        ));
        assert!(matches!(
            Template::parse("}{"),
            Err(RuntimeError::InvalidTemplate { position: 0, .. })
        ));
    }

    #[test]
    fn test_positions_count_characters() {
        // 'é' is two bytes but one character
        assert!(matches!(
            Template::parse("é{"),
            Err(RuntimeError::InvalidTemplate { position: 1, .. })
        ));
        assert_eq!(render("é{}ü", &[&"–"]).unwrap(), "é–ü");
    }

    #[test]
    fn test_strict_rejects_surplus_and_missing() {
        assert!(matches!(
            render("{}", &[&1, &2]),
            Err(RuntimeError::ArgumentCount {
                placeholders: 1,
                arguments: 2
            })
        ));
        assert!(matches!(
            render("{} {}", &[&1]),
            Err(RuntimeError::ArgumentCount {
                placeholders: 2,
                arguments: 1
            })
        ));
    }

    #[test]
    fn test_lenient_ignores_surplus_only() {
        let t = Template::parse("x = {}").unwrap();
        assert_eq!(
            t.render(&[&1, &"extra"], ArgumentPolicy::Lenient).unwrap(),
            "x = 1"
        );
        assert!(t.render(&[], ArgumentPolicy::Lenient).is_err());
    }

    #[test]
    fn test_from_str() {
        let t: Template = "{} items".parse().unwrap();
        assert_eq!(t.placeholder_count(), 1);
        assert!("oops }".parse::<Template>().is_err());
    }
}
