use std::cmp::Ordering;

use smallvec::SmallVec;

pub(crate) type StateId = usize;

pub(crate) const ROOT: StateId = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CharClass {
    Valid(Box<str>),
    Invalid(Box<str>),
}

/// Constraint on the input character that enters a state.
///
/// Two specs are the same transition when their classes compare equal as
/// strings, regardless of `repeat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CharSpec {
    class: CharClass,
    repeat: bool,
}

impl CharSpec {
    pub(crate) fn valid(chars: impl Into<Box<str>>) -> Self {
        Self {
            class: CharClass::Valid(chars.into()),
            repeat: false,
        }
    }

    pub(crate) fn invalid(chars: impl Into<Box<str>>) -> Self {
        Self {
            class: CharClass::Invalid(chars.into()),
            repeat: false,
        }
    }

    pub(crate) fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    #[inline]
    pub(crate) fn accepts(&self, ch: char) -> bool {
        match self.class {
            CharClass::Valid(ref s) => s.contains(ch),
            CharClass::Invalid(ref s) => !s.contains(ch),
        }
    }
}

/// Segment-kind tally of a route, used only to rank competing matches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Specificity {
    pub statics: usize,
    pub dynamics: usize,
    pub stars: usize,
}

impl Specificity {
    /// `Less` means `self` is the more specific match.
    ///
    /// Fewer stars first; with stars present, more statics then more
    /// dynamics; then fewer dynamics; then more statics.
    pub fn rank(&self, other: &Self) -> Ordering {
        let by_stars = self.stars.cmp(&other.stars);
        if by_stars != Ordering::Equal {
            return by_stars;
        }

        if self.stars > 0 {
            let ord = other
                .statics
                .cmp(&self.statics)
                .then_with(|| other.dynamics.cmp(&self.dynamics));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        self.dynamics
            .cmp(&other.dynamics)
            .then_with(|| other.statics.cmp(&self.statics))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Accept {
    pub(crate) route: usize,
    pub(crate) types: Specificity,
}

#[derive(Debug)]
struct State {
    spec: Option<CharSpec>,
    next: SmallVec<[StateId; 4]>,
    accept: Option<Accept>,
}

/// Arena of states. Edges are plain indices, so repeat self-loops and
/// optional skip edges need no shared ownership.
#[derive(Debug)]
pub(crate) struct Automaton {
    states: Vec<State>,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    pub(crate) fn new() -> Self {
        Self {
            states: vec![State {
                spec: None,
                next: SmallVec::new(),
                accept: None,
            }],
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn get(&self, from: StateId, spec: &CharSpec) -> Option<StateId> {
        self.states[from].next.iter().cloned().find(|&child| {
            self.states[child]
                .spec
                .as_ref()
                .map(|s| s.class == spec.class)
                .unwrap_or(false)
        })
    }

    pub(crate) fn put(&mut self, from: StateId, spec: CharSpec) -> StateId {
        if let Some(child) = self.get(from, &spec) {
            return child;
        }

        let id = self.states.len();
        let repeat = spec.repeat;
        let mut next = SmallVec::new();
        if repeat {
            next.push(id);
        }
        self.states.push(State {
            spec: Some(spec),
            next,
            accept: None,
        });
        self.states[from].next.push(id);
        id
    }

    /// Adds an ordinary transition `from -> to`, entered on `to`'s spec.
    pub(crate) fn link(&mut self, from: StateId, to: StateId) {
        let next = &mut self.states[from].next;
        if !next.contains(&to) {
            next.push(to);
        }
    }

    pub(crate) fn match_char(&self, from: StateId, ch: char, out: &mut SmallVec<[StateId; 8]>) {
        for &child in self.states[from].next.iter() {
            if let Some(ref spec) = self.states[child].spec {
                if spec.accepts(ch) {
                    out.push(child);
                }
            }
        }
    }

    pub(crate) fn accept(&self, id: StateId) -> Option<&Accept> {
        self.states[id].accept.as_ref()
    }

    /// Marks `id` terminal and returns the payload it replaced, if any.
    pub(crate) fn set_accept(&mut self, id: StateId, accept: Accept) -> Option<Accept> {
        self.states[id].accept.replace(accept)
    }
}
