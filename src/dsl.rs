use crate::recognizer::{RecognizerError, RouteConfig, RouteId, RouteRecognizer};

use tracing::debug;

/// Declarative builder for nested route trees.
///
/// Child paths are relative to their parent. Installing the map registers
/// one aggregated route per leaf, carrying the handlers of every ancestor.
///
/// ```
/// use path_recognizer::{RouteConfig, RouteMap, RouteRecognizer};
///
/// let mut map = RouteMap::new();
/// map.nest(RouteConfig::new("/posts", "posts"), |posts| {
///     posts
///         .to(RouteConfig::new("/", "index").name("posts.index"))
///         .to(RouteConfig::new("/:id", "show").name("posts.show"));
/// });
///
/// let mut recognizer = RouteRecognizer::new();
/// map.install(&mut recognizer).unwrap();
///
/// let result = recognizer.recognize("/posts/7").unwrap();
/// assert_eq!(*result[0].handler, "posts");
/// assert_eq!(*result[1].handler, "show");
/// assert_eq!(result[1].params.get("id"), Some("7"));
/// ```
#[derive(Debug)]
pub struct RouteMap<H> {
    entries: Vec<Entry<H>>,
}

#[derive(Debug)]
struct Entry<H> {
    config: RouteConfig<H>,
    children: Option<RouteMap<H>>,
}

impl<H> Default for RouteMap<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteMap<H> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn to(&mut self, config: RouteConfig<H>) -> &mut Self {
        self.entries.push(Entry {
            config,
            children: None,
        });
        self
    }

    pub fn nest(
        &mut self,
        config: RouteConfig<H>,
        f: impl FnOnce(&mut RouteMap<H>),
    ) -> &mut Self {
        let mut children = Self::new();
        f(&mut children);
        self.entries.push(Entry {
            config,
            children: Some(children),
        });
        self
    }
}

impl<H: Clone> RouteMap<H> {
    /// Registers every leaf chain in declaration order. Chains installed
    /// before a failing one stay registered.
    pub fn install(
        self,
        recognizer: &mut RouteRecognizer<H>,
    ) -> Result<Vec<RouteId>, RecognizerError> {
        let mut chains = Vec::new();
        self.collect_chains(&[], &mut chains);
        debug!(chains = chains.len(), "installing route map");

        chains
            .into_iter()
            .map(|chain| recognizer.add_nested(chain))
            .collect()
    }

    fn collect_chains(self, base: &[RouteConfig<H>], out: &mut Vec<Vec<RouteConfig<H>>>) {
        for entry in self.entries {
            let mut chain = base.to_vec();
            chain.push(entry.config);
            match entry.children {
                Some(children) if !children.entries.is_empty() => {
                    children.collect_chains(&chain, out)
                }
                _ => out.push(chain),
            }
        }
    }
}
