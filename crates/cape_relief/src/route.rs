//! Compiled routes and the ordered table they live in.

use std::fmt;

use cape_carton::{camelize, String};

use crate::action::{Action, Verb};
use crate::errors::RoutingError;
use crate::params::{Params, ACTION_KEY, COLLECTION_KEY, MODULE_KEY};
use crate::pattern::RoutePattern;

/// Name under which a component factory is registered.
///
/// Derived once, when the route is declared, so a missing registration can be
/// detected before any navigation happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentIdentity(String);

impl ComponentIdentity {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentIdentity {
    fn from(name: &str) -> Self {
        Self(String::from(name))
    }
}

/// What a route points at: a resource, an action, and the namespace it was
/// declared under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    resource: String,
    action: Action,
    namespace: Option<String>,
    module: Option<String>,
}

impl RouteTarget {
    pub fn new(resource: impl Into<String>, action: Action) -> Self {
        Self {
            resource: resource.into(),
            action,
            namespace: None,
            module: None,
        }
    }

    /// Parse a `"collection#action"` target.
    ///
    /// Both halves must be non-empty and exactly one `#` must be present.
    pub fn parse(target: &str) -> Result<Self, RoutingError> {
        let invalid = || RoutingError::InvalidTarget {
            target: String::from(target),
        };
        let (resource, action) = target.split_once('#').ok_or_else(invalid)?;
        if resource.is_empty() || action.is_empty() || action.contains('#') {
            return Err(invalid());
        }
        Ok(Self::new(resource.trim_matches('/'), Action::parse(action)))
    }

    /// Place the target under a namespace path and identity module.
    ///
    /// `module` defaults to the namespace when `None`.
    pub fn within(mut self, namespace: Option<&str>, module: Option<&str>) -> Self {
        self.namespace = namespace.filter(|ns| !ns.is_empty()).map(String::from);
        self.module = module
            .filter(|m| !m.is_empty())
            .map(String::from)
            .or_else(|| self.namespace.clone());
        self
    }

    #[inline]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    #[inline]
    pub fn action(&self) -> &Action {
        &self.action
    }

    #[inline]
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// Namespace-prefixed collection path, e.g. `admin/members`.
    pub fn collection(&self) -> String {
        match &self.namespace {
            Some(ns) => {
                let mut collection = ns.clone();
                collection.push('/');
                collection.push_str(&self.resource);
                collection
            }
            None => self.resource.clone(),
        }
    }

    /// `camelize(module) + camelize(resource) + camelize(action)`.
    pub fn component(&self) -> ComponentIdentity {
        let mut name = String::default();
        if let Some(module) = &self.module {
            name.push_str(&camelize(module));
        }
        name.push_str(&camelize(&self.resource));
        name.push_str(&camelize(self.action.as_str()));
        ComponentIdentity(name)
    }

    /// Static parameters every match of this target carries.
    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert(COLLECTION_KEY, self.collection());
        params.insert(ACTION_KEY, self.action.as_str());
        if let Some(module) = &self.module {
            params.insert(MODULE_KEY, module.clone());
        }
        params
    }
}

/// One compiled, immutable table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: RoutePattern,
    params: Params,
    component: ComponentIdentity,
    verb: Option<Verb>,
}

impl Route {
    pub fn new(pattern: RoutePattern, target: &RouteTarget, verb: Option<Verb>) -> Self {
        Self {
            pattern,
            params: target.params(),
            component: target.component(),
            verb,
        }
    }

    #[inline]
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// Capture keys, parent keys first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pattern.keys()
    }

    /// Parameters fixed at declaration time.
    #[inline]
    pub fn static_params(&self) -> &Params {
        &self.params
    }

    pub fn collection(&self) -> &str {
        self.params.collection().unwrap_or_default()
    }

    pub fn action(&self) -> &str {
        self.params.action().unwrap_or_default()
    }

    #[inline]
    pub fn component(&self) -> &ComponentIdentity {
        &self.component
    }

    #[inline]
    pub fn verb(&self) -> Option<Verb> {
        self.verb
    }
}

/// Ordered routes; earlier entries win.
///
/// Routes are only ever appended, so indices stay valid for the table's
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Move every route of `other` to the end of this table.
    pub fn append(&mut self, other: RouteTable) {
        self.routes.extend(other.routes);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
