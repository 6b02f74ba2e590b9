use super::config::{RouteConfig, RouteId, RouteKey};
use super::error::RecognizerError;
use super::params::{Params, RecognizeResults, RecognizedRoute};
use super::segment::{parse_pattern, Segment};
use super::state::{Accept, CharSpec, Specificity, StateId, ROOT};
use super::{HandlerEntry, Route, RouteRecognizer};

use crate::query::{decode_query_string, decode_uri, encode_query_string, QueryParams};

use std::borrow::Cow;
use std::mem;

use regex::{Captures, RegexBuilder};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

type StateSet = SmallVec<[StateId; 8]>;

const SLASH: &str = "/";
const STAR_TAIL: &str = "(.+)$";

impl<H> RouteRecognizer<H> {
    /// Compiles a chain of configs into one route. A single config is a
    /// chain of length one; longer chains aggregate several handler entries
    /// on the same terminal.
    pub(super) fn add_chain(
        &mut self,
        chain: Vec<RouteConfig<H>>,
    ) -> Result<RouteId, RecognizerError> {
        let (names, href, case_sensitive) = match chain.last() {
            Some(leaf) => (leaf.names.clone(), leaf.href.clone(), leaf.case_sensitive),
            None => return Err(RecognizerError::EmptyChain),
        };

        let mut pattern = String::new();
        let mut segments: Vec<Segment> = Vec::new();
        let mut handlers: Vec<HandlerEntry<H>> = Vec::with_capacity(chain.len());
        let mut types = Specificity::default();

        for config in chain {
            let parsed = parse_pattern(&config.path, case_sensitive)?;
            pattern.push_str(&config.path);
            segments.extend(parsed.segments);
            types.statics += parsed.types.statics;
            types.dynamics += parsed.types.dynamics;
            types.stars += parsed.types.stars;
            handlers.push(HandlerEntry {
                handler: config.handler,
                names: parsed.names,
            });
        }

        let source = anchored_regex(&segments);
        let regex = RegexBuilder::new(&source)
            .case_insensitive(!case_sensitive)
            .build()?;

        let id = self.routes.len();
        let accept = Accept { route: id, types };

        for state in self.build_states(&segments) {
            if let Some(prev) = self.automaton.set_accept(state, accept) {
                debug!(
                    state,
                    previous = prev.route,
                    route = id,
                    "terminal state taken over by a later route"
                );
            }
        }

        debug!(route = id, pattern = %pattern, regex = %source, "route registered");

        self.routes.push(Route {
            pattern: pattern.into(),
            segments,
            handlers,
            star_tail: source.ends_with(STAR_TAIL),
            regex,
            href: href.map(Into::into),
        });

        for name in names {
            self.names.entry(name.into()).or_insert(id);
        }

        Ok(RouteId(id))
    }

    /// Threads the segments through the automaton and returns every state
    /// that must accept: the final state plus trailing optional end states.
    fn build_states(&mut self, segments: &[Segment]) -> SmallVec<[StateId; 4]> {
        let automaton = &mut self.automaton;
        let mut current = ROOT;
        let mut skippable: SmallVec<[StateId; 4]> = SmallVec::new();
        let mut is_empty = true;

        for segment in segments.iter().filter(|s| !s.is_epsilon()) {
            let first = automaton.put(current, CharSpec::valid(SLASH));
            let mut last = first;
            segment.each_spec(|spec| last = automaton.put(last, spec));

            for &s in skippable.iter() {
                automaton.link(s, first);
            }

            if segment.is_optional() {
                skippable.push(last);
            } else {
                current = last;
                skippable.clear();
                is_empty = false;
            }
        }

        if is_empty {
            current = automaton.put(current, CharSpec::valid(SLASH));
        }

        skippable.push(current);
        skippable
    }

    pub(super) fn find_route(&self, key: RouteKey<'_>) -> Option<&Route<H>> {
        match key {
            RouteKey::Name(name) => self.names.get(name).map(|&i| &self.routes[i]),
            RouteKey::Id(RouteId(i)) => self.routes.get(i),
        }
    }

    pub(super) fn generate_path(
        &self,
        key: RouteKey<'_>,
        params: &QueryParams,
    ) -> Result<String, RecognizerError> {
        let route = self
            .find_route(key)
            .ok_or_else(|| RecognizerError::NotFound {
                route: key.to_string().into(),
            })?;

        if let Some(ref href) = route.href {
            return Ok(href.to_string());
        }

        let mut rest = params.clone();
        let mut consumed: SmallVec<[&str; 8]> = SmallVec::new();
        let mut output = String::new();

        for segment in route.segments.iter().filter(|s| !s.is_epsilon()) {
            match segment.generate_value(params, &mut consumed) {
                Some(value) => {
                    output.push_str(SLASH);
                    output.push_str(&value);
                }
                None if segment.is_optional() => {}
                None => {
                    return Err(RecognizerError::MissingParameter {
                        param: segment.name().unwrap_or_default().into(),
                        route: key.to_string().into(),
                    })
                }
            }
        }

        if !output.starts_with(SLASH) {
            output.insert_str(0, SLASH);
        }

        for name in consumed {
            rest.remove(name);
        }

        let query = encode_query_string(&rest);
        if !query.is_empty() {
            output.push('?');
            output.push_str(&query);
        }

        Ok(output)
    }

    pub(super) fn recognize_path(&self, path: &str) -> Option<RecognizeResults<'_, H>> {
        let (raw_path, query_params) = match path.find('?') {
            Some(i) => (&path[..i], decode_query_string(&path[i + 1..])),
            None => (path, QueryParams::new()),
        };

        let mut normalized: String = decode_uri(raw_path).into_owned();
        if !normalized.starts_with(SLASH) {
            normalized.insert_str(0, SLASH);
        }
        let slash_dropped = normalized.len() > 1 && normalized.ends_with(SLASH);
        if slash_dropped {
            normalized.pop();
        }

        let mut states: StateSet = smallvec![ROOT];
        let mut next: StateSet = SmallVec::new();

        for ch in normalized.chars() {
            next.clear();
            for &s in states.iter() {
                self.automaton.match_char(s, ch, &mut next);
            }
            if next.is_empty() {
                trace!(path = %normalized, "no route accepts path");
                return None;
            }
            next.sort_unstable();
            next.dedup();
            mem::swap(&mut states, &mut next);
        }

        let mut solutions: SmallVec<[&Accept; 4]> = states
            .iter()
            .filter_map(|&s| self.automaton.accept(s))
            .collect();

        solutions.sort_by(|a, b| a.types.rank(&b.types).then(a.route.cmp(&b.route)));
        solutions.dedup_by_key(|a| a.route);

        for accept in solutions {
            let route = &self.routes[accept.route];

            let candidate: Cow<'_, str> = if slash_dropped && route.star_tail {
                Cow::Owned(format!("{}{}", normalized, SLASH))
            } else {
                Cow::Borrowed(normalized.as_str())
            };

            match route.regex.captures(&candidate) {
                Some(caps) => {
                    return Some(RecognizeResults {
                        routes: distribute(route, &caps),
                        query_params,
                    })
                }
                None => trace!(
                    path = %candidate,
                    route = accept.route,
                    "candidate rejected by route regex"
                ),
            }
        }

        trace!(path = %normalized, "no terminal state reached");
        None
    }
}

/// Hands captures out to handler entries in declaration order.
fn distribute<'r, H>(
    route: &'r Route<H>,
    caps: &Captures<'_>,
) -> SmallVec<[RecognizedRoute<'r, H>; 2]> {
    let mut index = 1;
    route
        .handlers
        .iter()
        .map(|entry| {
            let mut params = Params::new();
            for name in entry.names.iter() {
                params.insert(name, caps.get(index).map(|m| m.as_str().to_owned()));
                index += 1;
            }
            RecognizedRoute {
                handler: &entry.handler,
                params,
                is_dynamic: !entry.names.is_empty(),
            }
        })
        .collect()
}

fn anchored_regex(segments: &[Segment]) -> String {
    let mut source = String::from("^");
    let mut is_empty = true;

    for segment in segments.iter().filter(|s| !s.is_epsilon()) {
        let fragment = segment.regex_fragment();
        if segment.is_optional() {
            source.push_str("(?:/");
            source.push_str(&fragment);
            source.push_str(")?");
        } else {
            source.push_str(SLASH);
            source.push_str(&fragment);
            is_empty = false;
        }
    }

    if is_empty {
        source.push_str("/?");
    }
    source.push('$');
    source
}
