use std::borrow::Cow;

/// A value in a parameter bag: a scalar, a list, a presence flag or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The text substituted for a path capture, `None` when unbound.
    pub(crate) fn to_segment(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => None,
            Self::Bool(true) => Some(Cow::Borrowed("true")),
            Self::Bool(false) => Some(Cow::Borrowed("false")),
            Self::Str(s) => Some(Cow::Borrowed(s)),
            Self::List(v) => Some(Cow::Owned(v.join(","))),
        }
    }
}

impl Default for ParamValue {
    fn default() -> Self {
        Self::Null
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(str::to_owned).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(x: Option<T>) -> Self {
        match x {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

macro_rules! from_display {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(x: $ty) -> Self {
                    Self::Str(x.to_string())
                }
            }
        )+
    };
}

from_display!(char, i32, i64, u32, u64, usize);

/// Builds a [`QueryParams`](crate::QueryParams) bag.
///
/// ```
/// use path_recognizer::{params, ParamValue};
///
/// let p = params! { "id" => 42, "tags" => vec!["a", "b"] };
/// assert_eq!(p["id"], ParamValue::from("42"));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::QueryParams::new()
    };
    {$($key:expr => $value:expr),+ $(,)?} => {{
        let mut __params = $crate::QueryParams::new();
        $(
            __params.insert(
                ::std::string::String::from($key),
                $crate::ParamValue::from($value),
            );
        )+
        __params
    }};
}
