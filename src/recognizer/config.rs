use std::fmt;

/// A route to register: a path pattern plus the handler it resolves to.
#[derive(Debug, Clone)]
pub struct RouteConfig<H> {
    pub path: String,
    pub handler: H,
    pub names: Vec<String>,
    pub case_sensitive: bool,
    pub href: Option<String>,
}

impl<H> RouteConfig<H> {
    pub fn new(path: impl Into<String>, handler: H) -> Self {
        Self {
            path: path.into(),
            handler,
            names: Vec::new(),
            case_sensitive: false,
            href: None,
        }
    }

    /// Adds an alias the route can be looked up by.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    /// A literal href returned by `generate` instead of replaying the pattern.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// Handle of a registered route, returned by `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKey<'a> {
    Name(&'a str),
    Id(RouteId),
}

impl<'a> From<&'a str> for RouteKey<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for RouteKey<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

impl From<RouteId> for RouteKey<'_> {
    fn from(id: RouteId) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for RouteKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Id(id) => write!(f, "#{}", id.0),
        }
    }
}
