mod config;
mod core;
mod error;
mod imp;
mod params;
mod segment;
mod state;

pub use self::config::{RouteConfig, RouteId, RouteKey};
pub use self::error::RecognizerError;
pub use self::params::{Params, RecognizeResults, RecognizedRoute};
pub use self::segment::Segment;
pub use self::state::Specificity;

use self::state::Automaton;

use std::collections::HashMap;

use regex::Regex;

/// Compiles route patterns into one shared character automaton and matches
/// paths against it.
///
/// Registration takes `&mut self`; once built, recognition and generation
/// only read and can be shared across threads.
#[derive(Debug)]
pub struct RouteRecognizer<H> {
    automaton: Automaton,
    routes: Vec<Route<H>>,
    names: HashMap<Box<str>, usize>,
}

/// A compiled route: what `generate` replays and what terminals point at.
#[derive(Debug)]
pub struct Route<H> {
    pattern: Box<str>,
    segments: Vec<Segment>,
    handlers: Vec<HandlerEntry<H>>,
    regex: Regex,
    href: Option<Box<str>>,
    star_tail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerEntry<H> {
    pub handler: H,
    pub names: Vec<Box<str>>,
}

impl<H> Route<H> {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn handlers(&self) -> &[HandlerEntry<H>] {
        &self.handlers
    }

    /// The anchored regex used to extract captures.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}
