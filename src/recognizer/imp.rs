use super::config::{RouteConfig, RouteId, RouteKey};
use super::error::RecognizerError;
use super::params::RecognizeResults;
use super::state::Automaton;
use super::{HandlerEntry, Route, RouteRecognizer};

use crate::query::QueryParams;

use std::collections::HashMap;

impl<H> Default for RouteRecognizer<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteRecognizer<H> {
    pub fn new() -> Self {
        Self {
            automaton: Automaton::new(),
            routes: Vec::new(),
            names: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registers a route, panicking on a malformed pattern.
    pub fn add(&mut self, config: RouteConfig<H>) -> RouteId {
        let pattern = config.path.clone();
        match self.add_chain(vec![config]) {
            Ok(id) => id,
            Err(e) => panic!("{}: pattern = {:?}", e, pattern),
        }
    }

    pub fn try_add(&mut self, config: RouteConfig<H>) -> Result<RouteId, RecognizerError> {
        self.add_chain(vec![config])
    }

    /// Registers each config in turn. Routes added before a failing one stay
    /// registered.
    pub fn add_all<I>(&mut self, configs: I) -> Result<Vec<RouteId>, RecognizerError>
    where
        I: IntoIterator<Item = RouteConfig<H>>,
    {
        configs
            .into_iter()
            .map(|config| self.try_add(config))
            .collect()
    }

    /// Registers a parent-to-leaf chain as one route whose paths are
    /// concatenated. Recognition yields one record per config in the chain.
    /// The leaf's names, href and case sensitivity apply to the whole chain.
    pub fn add_nested(&mut self, chain: Vec<RouteConfig<H>>) -> Result<RouteId, RecognizerError> {
        self.add_chain(chain)
    }

    pub fn has_route<'k>(&self, key: impl Into<RouteKey<'k>>) -> bool {
        self.find_route(key.into()).is_some()
    }

    pub fn route<'k>(&self, key: impl Into<RouteKey<'k>>) -> Option<&Route<H>> {
        self.find_route(key.into())
    }

    pub fn handlers_for<'k>(
        &self,
        key: impl Into<RouteKey<'k>>,
    ) -> Result<&[HandlerEntry<H>], RecognizerError> {
        let key = key.into();
        match self.find_route(key) {
            Some(route) => Ok(route.handlers()),
            None => Err(RecognizerError::NotFound {
                route: key.to_string().into(),
            }),
        }
    }

    /// Builds a path for the route, appending unconsumed params as a query
    /// string.
    pub fn generate<'k>(
        &self,
        key: impl Into<RouteKey<'k>>,
        params: &QueryParams,
    ) -> Result<String, RecognizerError> {
        self.generate_path(key.into(), params)
    }

    /// Matches `path` (optionally carrying a query string) against every
    /// registered route. `None` means nothing matched.
    pub fn recognize(&self, path: &str) -> Option<RecognizeResults<'_, H>> {
        self.recognize_path(path)
    }
}

impl<H: PartialEq> RouteRecognizer<H> {
    /// Looks a route up by its handler. The latest registration wins.
    pub fn route_id_of(&self, handler: &H) -> Option<RouteId> {
        self.routes
            .iter()
            .rposition(|route| {
                route
                    .handlers
                    .last()
                    .map(|entry| entry.handler == *handler)
                    .unwrap_or(false)
            })
            .map(RouteId)
    }
}
