//! Component contracts and the registry that constructs them.

use std::fmt;

use cape_carton::{FxHashMap, String};
use cape_relief::Params;

/// A routed component.
///
/// The router constructs one instance per successful navigation, mounts it
/// into the container, and unmounts it before its replacement is built.
pub trait Component {
    /// Render into `container` using the matched parameters.
    fn mount(&mut self, container: &str, params: &Params);

    /// Tear down before the next component is mounted.
    fn unmount(&mut self) {}
}

/// A long-lived listener refreshed after every successful navigation.
///
/// Subscribers are compared by `Rc` pointer, so attaching the same instance
/// twice has no effect.
pub trait Subscriber {
    fn refresh(&self, params: &Params);
}

/// Constructor registered for one component identity.
pub type ComponentFactory = Box<dyn Fn() -> Box<dyn Component>>;

/// Explicit identity -> factory table, populated at startup.
#[derive(Default)]
pub struct ComponentRegistry {
    factories: FxHashMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `identity`, replacing any previous entry.
    pub fn register<F>(&mut self, identity: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Component> + 'static,
    {
        self.factories.insert(String::from(identity), Box::new(factory));
        self
    }

    /// Register a component type constructed with `Default`.
    pub fn register_default<C>(&mut self, identity: &str) -> &mut Self
    where
        C: Component + Default + 'static,
    {
        self.register(identity, || Box::new(C::default()))
    }

    /// Look up the factory for `identity`.
    pub fn get(&self, identity: &str) -> Option<&ComponentFactory> {
        self.factories.get(identity)
    }

    /// Check whether `identity` is registered.
    pub fn contains(&self, identity: &str) -> bool {
        self.factories.contains_key(identity)
    }

    /// Get the number of registered components.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered identities, sorted.
    pub fn identities(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.factories.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.identities()).finish()
    }
}
