//! Path recognition over a shared character automaton.
//!
//! Routes are registered as `/`-delimited patterns with static text,
//! `:name` / `:name?` captures and `*name` globs. Recognizing a path picks
//! the most specific match and extracts its parameters; generating a path
//! replays a named route with a parameter bag.

#![forbid(unsafe_code)]

mod dsl;
mod query;
mod recognizer;

#[cfg(feature = "http-recognizer")]
mod http_recognizer;

pub use crate::dsl::RouteMap;
pub use crate::query::{decode_query_string, encode_query_string, ParamValue, QueryParams};
pub use crate::recognizer::{
    HandlerEntry, Params, RecognizeResults, RecognizedRoute, RecognizerError, Route, RouteConfig,
    RouteId, RouteKey, RouteRecognizer, Segment, Specificity,
};

#[cfg(feature = "http-recognizer")]
pub use crate::http_recognizer::{HttpRecognizer, Method};
