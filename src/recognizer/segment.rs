use super::error::RecognizerError;
use super::state::{CharSpec, Specificity};

use crate::query::QueryParams;

use std::borrow::Cow;

use smallvec::SmallVec;

const SLASH: char = '/';
const COLON: char = ':';
const STAR: char = '*';
const QUESTION: char = '?';

/// One `/`-delimited piece of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text.
    Static {
        text: Box<str>,
        case_sensitive: bool,
    },
    /// `:name` or `:name?`, captures one path component.
    Dynamic { name: Box<str>, optional: bool },
    /// `*name`, captures the rest of the path including slashes.
    Star { name: Box<str> },
    /// An empty token.
    Epsilon,
}

impl Segment {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Dynamic { name, .. } | Self::Star { name } => Some(&**name),
            _ => None,
        }
    }

    pub fn is_optional(&self) -> bool {
        match self {
            Self::Dynamic { optional, .. } => *optional,
            _ => false,
        }
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    pub(crate) fn each_spec(&self, mut f: impl FnMut(CharSpec)) {
        match self {
            Self::Static {
                text,
                case_sensitive,
            } => {
                for ch in text.chars() {
                    if *case_sensitive {
                        let mut buf = [0; 4];
                        f(CharSpec::valid(&*ch.encode_utf8(&mut buf)));
                    } else {
                        let folded: String = ch.to_uppercase().chain(ch.to_lowercase()).collect();
                        f(CharSpec::valid(folded));
                    }
                }
            }
            Self::Dynamic { .. } => f(CharSpec::invalid("/").repeating()),
            Self::Star { .. } => f(CharSpec::invalid("").repeating()),
            Self::Epsilon => {}
        }
    }

    pub fn regex_fragment(&self) -> Cow<'static, str> {
        match self {
            Self::Static { text, .. } => Cow::Owned(regex::escape(text)),
            Self::Dynamic { .. } => Cow::Borrowed("([^/]+)"),
            Self::Star { .. } => Cow::Borrowed("(.+)"),
            Self::Epsilon => Cow::Borrowed(""),
        }
    }

    /// Renders the literal piece of a generated path. Captures record their
    /// name in `consumed` whether or not a value is bound.
    pub fn generate_value<'s, 'p>(
        &'s self,
        params: &'p QueryParams,
        consumed: &mut SmallVec<[&'s str; 8]>,
    ) -> Option<Cow<'p, str>>
    where
        's: 'p,
    {
        match self {
            Self::Static { text, .. } => Some(Cow::Borrowed(&**text)),
            Self::Dynamic { name, .. } | Self::Star { name } => {
                consumed.push(&**name);
                params.get(&**name).and_then(|v| v.to_segment())
            }
            Self::Epsilon => Some(Cow::Borrowed("")),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ParsedPattern {
    pub(crate) segments: Vec<Segment>,
    pub(crate) names: Vec<Box<str>>,
    pub(crate) types: Specificity,
}

pub(crate) fn parse_pattern(
    pattern: &str,
    case_sensitive: bool,
) -> Result<ParsedPattern, RecognizerError> {
    let trimmed = pattern.strip_prefix(SLASH).unwrap_or(pattern);
    let mut parsed = ParsedPattern::default();

    for token in trimmed.split(SLASH) {
        if let Some((name, optional)) = dynamic_name(token) {
            if name.contains('=') {
                return Err(RecognizerError::DefaultValue {
                    param: name.into(),
                    pattern: pattern.into(),
                });
            }
            parsed.segments.push(Segment::Dynamic {
                name: name.into(),
                optional,
            });
            parsed.names.push(name.into());
            parsed.types.dynamics += 1;
        } else if let Some(name) = star_name(token) {
            parsed.segments.push(Segment::Star { name: name.into() });
            parsed.names.push(name.into());
            parsed.types.stars += 1;
        } else if token.is_empty() {
            parsed.segments.push(Segment::Epsilon);
        } else {
            parsed.segments.push(Segment::Static {
                text: token.into(),
                case_sensitive,
            });
            parsed.types.statics += 1;
        }
    }

    Ok(parsed)
}

/// `:name` or `:name?`; the name is non-empty and free of `?`.
fn dynamic_name(token: &str) -> Option<(&str, bool)> {
    let rest = token.strip_prefix(COLON)?;
    let (name, optional) = match rest.strip_suffix(QUESTION) {
        Some(name) => (name, true),
        None => (rest, false),
    };
    if name.is_empty() || name.contains(QUESTION) {
        return None;
    }
    Some((name, optional))
}

fn star_name(token: &str) -> Option<&str> {
    token.strip_prefix(STAR).filter(|name| !name.is_empty())
}
