use crate::query::QueryParams;

use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Parameters captured from a recognized path, in declaration order.
///
/// An optional capture that was skipped is present with no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(Box<str>, Option<String>); 4]>,
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find(|(k, _)| &**k == name)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.buf.iter().any(|(k, _)| &**k == name)
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.buf.iter().map(|(k, v)| (&**k, v.as_deref()))
    }
}

impl Params {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    /// A repeated name keeps its first position and takes the later value.
    pub(super) fn insert(&mut self, name: &str, value: Option<String>) {
        match self.buf.iter_mut().find(|(k, _)| &**k == name) {
            Some(slot) => slot.1 = value,
            None => self.buf.push((name.into(), value)),
        }
    }
}

/// One handler entry of a recognized route.
#[derive(Debug)]
pub struct RecognizedRoute<'r, H> {
    pub handler: &'r H,
    pub params: Params,
    pub is_dynamic: bool,
}

/// Result of a successful `recognize`: one record per handler entry of the
/// winning route plus the decoded query string.
#[derive(Debug)]
pub struct RecognizeResults<'r, H> {
    pub(super) routes: SmallVec<[RecognizedRoute<'r, H>; 2]>,
    pub query_params: QueryParams,
}

impl<'r, H> Deref for RecognizeResults<'r, H> {
    type Target = [RecognizedRoute<'r, H>];
    fn deref(&self) -> &Self::Target {
        &*self.routes
    }
}

impl<'r, H> IntoIterator for RecognizeResults<'r, H> {
    type Item = RecognizedRoute<'r, H>;
    type IntoIter = smallvec::IntoIter<[RecognizedRoute<'r, H>; 2]>;
    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}
