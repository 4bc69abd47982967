//! The router state machine.
//!
//! ```text
//!            navigate / trigger (match + mount)
//! Unmounted ------------------------------------> Mounted <--+
//!     |                                            |  |      | navigate
//!     |                                            |  +------+ (unmount -> hooks -> mount)
//!     +------------------- stop -------------------+--> Stopped
//! ```
//!
//! One navigation cycle runs to completion before the next begins:
//! idempotence check, recognize, resolve the factory, unmount the previous
//! component, run before-hooks, construct and mount, refresh subscribers,
//! record the fragment.

use std::rc::Rc;

use cape_armature::recognize;
use cape_atelier::RoutingMapper;
use cape_carton::String;
use cape_relief::{ComponentIdentity, Params, RouteTable};

use crate::component::{Component, ComponentRegistry, Subscriber};
use crate::error::RouterError;
use crate::location::{Location, MemoryLocation};
use crate::navigator::{Navigator, MAX_QUEUED_NAVIGATIONS};

/// Callback run before every mount, in registration order.
pub type BeforeHook = Box<dyn FnMut(&Params)>;

/// Lifecycle phase of a [`Router`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing mounted yet.
    Unmounted,
    /// A component is mounted.
    Mounted,
    /// Location changes are no longer observed.
    Stopped,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// A new component was mounted.
    Mounted { component: ComponentIdentity },
    /// The fragment equals the current one; nothing happened.
    Unchanged,
    /// No route accepts the fragment. The mounted component stays.
    NoRoute { fragment: String },
    /// The router is not observing location changes.
    Ignored,
}

struct MountedComponent {
    identity: ComponentIdentity,
    instance: Box<dyn Component>,
}

#[derive(Default)]
struct RouterState {
    container: Option<String>,
    observing: bool,
    stopped: bool,
    current_fragment: Option<String>,
    params: Params,
    mounted: Option<MountedComponent>,
    before_hooks: Vec<BeforeHook>,
}

/// Resolves fragments to components and drives their lifecycle.
///
/// # Examples
/// ```
/// use cape_maestro::{Component, ComponentRegistry, Navigation, Router};
/// use cape_relief::Params;
///
/// #[derive(Default)]
/// struct TopIndex;
///
/// impl Component for TopIndex {
///     fn mount(&mut self, _container: &str, _params: &Params) {}
/// }
///
/// let mut registry = ComponentRegistry::new();
/// registry.register_default::<TopIndex>("TopIndex");
///
/// let mut router = Router::new(registry);
/// router.draw(|m| {
///     m.root("top#index");
/// })
/// .unwrap();
/// router.mount("main");
///
/// let navigation = router.start().unwrap();
/// assert_eq!(
///     navigation,
///     Navigation::Mounted { component: "TopIndex".into() }
/// );
/// ```
pub struct Router<L: Location = MemoryLocation> {
    routes: RouteTable,
    registry: ComponentRegistry,
    location: L,
    state: RouterState,
    subscribers: Vec<Rc<dyn Subscriber>>,
    navigator: Navigator,
}

impl Router<MemoryLocation> {
    /// Create a router over an in-memory location starting at the root.
    pub fn new(registry: ComponentRegistry) -> Self {
        Self::with_location(registry, MemoryLocation::default())
    }
}

impl<L: Location> Router<L> {
    /// Create a router over `location`.
    pub fn with_location(registry: ComponentRegistry, location: L) -> Self {
        Self {
            routes: RouteTable::new(),
            registry,
            location,
            state: RouterState::default(),
            subscribers: Vec::new(),
            navigator: Navigator::default(),
        }
    }

    /// Declare routes.
    ///
    /// The block's routes are appended only if every declaration is valid.
    pub fn draw(
        &mut self,
        block: impl FnOnce(&mut RoutingMapper<'_>),
    ) -> Result<&mut Self, RouterError> {
        let table = cape_atelier::draw(block)?;
        tracing::debug!(routes = table.len(), "routes drawn");
        self.routes.append(table);
        Ok(self)
    }

    /// Set the container id components are mounted into.
    pub fn mount(&mut self, container: &str) -> &mut Self {
        self.state.container = Some(String::from(container));
        self
    }

    /// Begin observing location changes and navigate to the current fragment.
    pub fn start(&mut self) -> Result<Navigation, RouterError> {
        tracing::info!(container = ?self.state.container, "router started");
        self.state.observing = true;
        self.state.stopped = false;
        self.trigger()
    }

    /// Stop observing location changes. The mounted component stays mounted.
    pub fn stop(&mut self) {
        tracing::info!("router stopped");
        self.state.observing = false;
        self.state.stopped = true;
    }

    /// Set the location to `fragment` and navigate to it.
    pub fn navigate(&mut self, fragment: &str) -> Result<Navigation, RouterError> {
        self.location.set_fragment(fragment);
        self.run(fragment)
    }

    /// Handle an observed location change.
    ///
    /// Ignored unless the router was started and not stopped since.
    pub fn trigger(&mut self) -> Result<Navigation, RouterError> {
        if !self.state.observing {
            tracing::debug!("location change ignored; router is not observing");
            return Ok(Navigation::Ignored);
        }
        let fragment = self.location.fragment();
        self.run(&fragment)
    }

    /// Drain navigations queued through the [`Navigator`] outside a cycle.
    ///
    /// Returns the outcome of the last one, if any were queued.
    pub fn process_pending(&mut self) -> Result<Option<Navigation>, RouterError> {
        let mut last = None;
        let mut drained = 0;
        while let Some(next) = self.navigator.take() {
            drained += 1;
            if drained > MAX_QUEUED_NAVIGATIONS {
                self.navigator.clear();
                tracing::warn!(fragment = %next, "navigation queue limit reached");
                return Err(RouterError::NavigationLoop {
                    limit: MAX_QUEUED_NAVIGATIONS,
                    fragment: next,
                });
            }
            self.location.set_fragment(&next);
            match self.cycle(&next) {
                Ok(navigation) => last = Some(navigation),
                Err(err) => {
                    self.navigator.clear();
                    return Err(err);
                }
            }
        }
        Ok(last)
    }

    /// Unmount the current component and forget the current fragment.
    pub fn unmount(&mut self) {
        if let Some(mut previous) = self.state.mounted.take() {
            tracing::debug!(component = %previous.identity, "unmounting");
            previous.instance.unmount();
        }
        self.state.current_fragment = None;
    }

    /// Register a before-hook. Hooks cannot be removed.
    pub fn before_action(&mut self, hook: impl FnMut(&Params) + 'static) -> &mut Self {
        self.state.before_hooks.push(Box::new(hook));
        self
    }

    /// Add a subscriber. Returns `false` if it was already attached.
    pub fn attach(&mut self, subscriber: Rc<dyn Subscriber>) -> bool {
        let ptr = Rc::as_ptr(&subscriber) as *const ();
        if self.position(ptr).is_some() {
            return false;
        }
        self.subscribers.push(subscriber);
        true
    }

    /// Remove a subscriber. Returns `false` if it was not attached.
    pub fn detach<S: Subscriber + ?Sized>(&mut self, subscriber: &Rc<S>) -> bool {
        match self.position(Rc::as_ptr(subscriber) as *const ()) {
            Some(index) => {
                self.subscribers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Refresh every subscriber with the current parameters.
    pub fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber.refresh(&self.state.params);
        }
    }

    /// Report every route whose component is not registered.
    pub fn verify_components(&self) -> Result<(), RouterError> {
        let mut missing: Vec<ComponentIdentity> = Vec::new();
        for route in &self.routes {
            let identity = route.component();
            if !self.registry.contains(identity.as_str()) && !missing.contains(identity) {
                missing.push(identity.clone());
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RouterError::UnregisteredComponents(missing))
        }
    }

    pub fn phase(&self) -> Phase {
        if self.state.stopped {
            Phase::Stopped
        } else if self.state.mounted.is_some() {
            Phase::Mounted
        } else {
            Phase::Unmounted
        }
    }

    /// Parameters of the last successful navigation.
    pub fn params(&self) -> &Params {
        &self.state.params
    }

    pub fn current_fragment(&self) -> Option<&str> {
        self.state.current_fragment.as_deref()
    }

    pub fn mounted_component(&self) -> Option<&ComponentIdentity> {
        self.state.mounted.as_ref().map(|m| &m.identity)
    }

    pub fn container(&self) -> Option<&str> {
        self.state.container.as_deref()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Handle for queueing navigations from hooks and components.
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    fn position(&self, ptr: *const ()) -> Option<usize> {
        self.subscribers
            .iter()
            .position(|s| Rc::as_ptr(s) as *const () == ptr)
    }

    fn run(&mut self, fragment: &str) -> Result<Navigation, RouterError> {
        let navigation = match self.cycle(fragment) {
            Ok(navigation) => navigation,
            Err(err) => {
                self.navigator.clear();
                return Err(err);
            }
        };
        Ok(self.process_pending()?.unwrap_or(navigation))
    }

    fn cycle(&mut self, fragment: &str) -> Result<Navigation, RouterError> {
        if self.state.current_fragment.as_deref() == Some(fragment) {
            tracing::debug!(fragment, "fragment unchanged");
            return Ok(Navigation::Unchanged);
        }

        let Some(recognized) = recognize(&self.routes, fragment) else {
            tracing::warn!(fragment, "no route matches fragment");
            return Ok(Navigation::NoRoute {
                fragment: String::from(fragment),
            });
        };
        let container = self
            .state
            .container
            .clone()
            .ok_or(RouterError::NoContainer)?;
        let identity = recognized.route.component().clone();
        let factory = self.registry.get(identity.as_str()).ok_or_else(|| {
            RouterError::ComponentNotRegistered {
                identity: identity.clone(),
                fragment: String::from(fragment),
            }
        })?;

        if let Some(mut previous) = self.state.mounted.take() {
            tracing::debug!(component = %previous.identity, "unmounting");
            previous.instance.unmount();
        }

        self.state.params = recognized.params;
        for hook in self.state.before_hooks.iter_mut() {
            hook(&self.state.params);
        }

        tracing::debug!(component = %identity, fragment, container = %container, "mounting");
        let mut instance = factory();
        instance.mount(&container, &self.state.params);
        self.state.mounted = Some(MountedComponent {
            identity: identity.clone(),
            instance,
        });

        self.notify();
        self.state.current_fragment = Some(String::from(fragment));
        Ok(Navigation::Mounted {
            component: identity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    type Log = Rc<RefCell<Vec<std::string::String>>>;

    struct Recorder {
        name: &'static str,
        log: Log,
    }

    impl Component for Recorder {
        fn mount(&mut self, container: &str, _params: &Params) {
            self.log.borrow_mut().push(format!("mount {} {}", self.name, container));
        }

        fn unmount(&mut self) {
            self.log.borrow_mut().push(format!("unmount {}", self.name));
        }
    }

    fn router(log: &Log) -> Router {
        let mut registry = ComponentRegistry::new();
        for name in ["MembersIndex", "MembersShow"] {
            let log = log.clone();
            registry.register(name, move || {
                Box::new(Recorder {
                    name,
                    log: log.clone(),
                })
            });
        }
        let mut router = Router::new(registry);
        router
            .draw(|m| {
                m.resources("members");
            })
            .unwrap();
        router.mount("main");
        router
    }

    #[test]
    fn test_phase_transitions() {
        let log = Log::default();
        let mut router = router(&log);
        assert_eq!(router.phase(), Phase::Unmounted);

        router.navigate("members").unwrap();
        assert_eq!(router.phase(), Phase::Mounted);

        router.stop();
        assert_eq!(router.phase(), Phase::Stopped);
        assert_eq!(router.mounted_component().map(|c| c.as_str()), Some("MembersIndex"));
    }

    #[test]
    fn test_trigger_ignored_until_started() {
        let log = Log::default();
        let mut router = router(&log);
        router.location_mut().set_fragment("members");
        assert_eq!(router.trigger().unwrap(), Navigation::Ignored);
        assert!(log.borrow().is_empty());

        router.start().unwrap();
        assert_eq!(log.borrow().as_slice(), ["mount MembersIndex main"]);
    }

    #[test]
    fn test_missing_component_keeps_current() {
        let log = Log::default();
        let mut router = router(&log);
        router.navigate("members").unwrap();

        let err = router.navigate("members/1/edit").unwrap_err();
        assert!(matches!(
            err,
            RouterError::ComponentNotRegistered { ref identity, .. } if identity.as_str() == "MembersEdit"
        ));
        assert_eq!(router.current_fragment(), Some("members"));
        assert_eq!(log.borrow().as_slice(), ["mount MembersIndex main"]);
    }

    #[test]
    fn test_no_container() {
        let mut router = Router::new(ComponentRegistry::new());
        router
            .draw(|m| {
                m.root("top#index");
            })
            .unwrap();
        assert!(matches!(router.navigate(""), Err(RouterError::NoContainer)));
    }

    #[test]
    fn test_draw_is_atomic() {
        let mut router = Router::new(ComponentRegistry::new());
        let result = router.draw(|m| {
            m.resources("members");
            m.match_route("broken", "broken");
        });
        assert!(matches!(result, Err(RouterError::Declaration(_))));
        assert!(router.routes().is_empty());
    }

    #[test]
    fn test_unmount() {
        let log = Log::default();
        let mut router = router(&log);
        router.navigate("members").unwrap();
        router.unmount();
        assert_eq!(router.phase(), Phase::Unmounted);
        assert_eq!(router.current_fragment(), None);
        assert_eq!(
            log.borrow().as_slice(),
            ["mount MembersIndex main", "unmount MembersIndex"]
        );
    }
}
