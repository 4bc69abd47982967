//! The route declaration DSL.
//!
//! [`RoutingMapper`] appends compiled routes to a [`RouteTable`]. Nested
//! blocks (`resources_nested`, `resource_nested`, `namespace`) run with a
//! narrower scope, which is restored when the block returns.
//!
//! Declaration errors do not stop the block. They are collected and
//! returned together by [`RoutingMapper::finish`].

use std::mem;

use cape_armature::compile_with;
use cape_carton::{format_compact, pluralize, singularize, String};
use cape_relief::{
    Action, Constraints, Route, RoutePattern, RouteTable, RouteTarget, RoutingError,
    RoutingErrors, Verb,
};

use crate::options::{CustomRouteOptions, NameList, NamespaceOptions, On, ResourceOptions};

/// Enclosing `resources`/`resource` block.
#[derive(Debug, Clone)]
struct ResourceScope {
    /// Resource name used for `collection` and the component identity.
    name: String,
    /// Full path of the resource, without the member capture.
    path: String,
    singular: bool,
    /// Constraints for the `:id` capture of member routes.
    constraints: Constraints,
}

#[derive(Debug, Clone, Default)]
struct Scope {
    path: String,
    namespace: Option<String>,
    module: Option<String>,
    /// Constraints for parent captures (`member_id`, ...).
    constraints: Constraints,
    resource: Option<ResourceScope>,
}

fn join(prefix: &str, segment: &str) -> String {
    let segment = segment.trim_matches('/');
    if prefix.is_empty() {
        String::from(segment)
    } else if segment.is_empty() {
        String::from(prefix)
    } else {
        format_compact!("{}/{}", prefix, segment)
    }
}

/// Builder that expands route declarations into a [`RouteTable`].
///
/// # Examples
/// ```
/// use cape_atelier::{draw, On, ResourceOptions};
///
/// let table = draw(|m| {
///     m.root("top#index");
///     m.resources_nested("members", ResourceOptions::default().only("show"), |m| {
///         m.get("info", On::Member);
///     });
/// })
/// .unwrap();
///
/// let patterns: Vec<_> = table.iter().map(|r| r.pattern().to_string()).collect();
/// assert_eq!(patterns, ["", "members/:id", "members/:id/info"]);
/// ```
pub struct RoutingMapper<'t> {
    table: &'t mut RouteTable,
    scope: Scope,
    errors: Vec<RoutingError>,
}

impl<'t> RoutingMapper<'t> {
    pub fn new(table: &'t mut RouteTable) -> Self {
        Self {
            table,
            scope: Scope::default(),
            errors: Vec::new(),
        }
    }

    /// Errors collected so far.
    pub fn errors(&self) -> &[RoutingError] {
        &self.errors
    }

    /// Record a declaration error without stopping the block.
    pub fn report(&mut self, error: RoutingError) {
        tracing::debug!(%error, "route declaration rejected");
        self.errors.push(error);
    }

    /// Consume the mapper, failing if any declaration was rejected.
    pub fn finish(self) -> Result<(), RoutingErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(RoutingErrors::new(self.errors))
        }
    }

    /// Declare `pattern` for a `"collection#action"` target.
    pub fn match_route(&mut self, pattern: &str, target: &str) -> &mut Self {
        self.match_constrained(pattern, target, &Constraints::none())
    }

    /// Declare `pattern` with per-capture constraint fragments.
    pub fn match_constrained(
        &mut self,
        pattern: &str,
        target: &str,
        constraints: &Constraints,
    ) -> &mut Self {
        let target = match RouteTarget::parse(target) {
            Ok(target) => target,
            Err(error) => {
                self.report(error);
                return self;
            }
        };

        let path = join(&self.scope.path, pattern);
        let inherited = self.scope.constraints.merged(constraints);
        let compiled = compile_with(&path, |key| inherited.get(key)).and_then(|compiled| {
            match constraints
                .keys()
                .find(|key| !compiled.keys().any(|k| k == *key))
            {
                Some(key) => Err(RoutingError::UnknownConstraintKey {
                    key: String::from(key),
                    pattern: path.clone(),
                }),
                None => Ok(compiled),
            }
        });
        self.push(compiled, target, None);
        self
    }

    /// Declare the empty fragment (or the bare namespace path).
    pub fn root(&mut self, target: &str) -> &mut Self {
        self.match_route("", target)
    }

    /// `index`, `new`, `show`, and `edit` routes for a plural resource.
    pub fn resources(&mut self, name: &str) -> &mut Self {
        self.resources_nested(name, ResourceOptions::default(), |_| {})
    }

    pub fn resources_with(&mut self, name: &str, options: ResourceOptions) -> &mut Self {
        self.resources_nested(name, options, |_| {})
    }

    /// Plural resource whose `block` is scoped under
    /// `<path>/:<singular>_id`.
    pub fn resources_nested(
        &mut self,
        name: &str,
        options: ResourceOptions,
        block: impl FnOnce(&mut Self),
    ) -> &mut Self {
        if !self.validate_resource(name, &options) {
            return self;
        }

        let base = join(&self.scope.path, options.path.as_deref().unwrap_or(name));
        let member = join(&base, ":id");
        let routes = [
            (Action::Index, base.clone()),
            (Action::New, join(&base, &options.path_names.new)),
            (Action::Show, member.clone()),
            (Action::Edit, join(&member, &options.path_names.edit)),
        ];
        for (action, path) in routes {
            if options.includes(action.as_str()) {
                self.emit(&path, RouteTarget::new(name, action), &options.constraints, None);
            }
        }

        let parent_key = format_compact!("{}_id", singularize(name));
        let mut constraints = self.scope.constraints.clone();
        if let Some(id) = options.constraints.get("id") {
            constraints.insert(parent_key.clone(), id);
        }
        let nested = Scope {
            path: join(&base, &format_compact!(":{}", parent_key)),
            constraints,
            resource: Some(ResourceScope {
                name: String::from(name),
                path: base,
                singular: false,
                constraints: options.constraints,
            }),
            ..self.scope.clone()
        };
        self.within(nested, block)
    }

    /// `show`, `new`, and `edit` routes for a singular resource.
    ///
    /// The `collection` parameter is still the plural form.
    pub fn resource(&mut self, name: &str) -> &mut Self {
        self.resource_nested(name, ResourceOptions::default(), |_| {})
    }

    pub fn resource_with(&mut self, name: &str, options: ResourceOptions) -> &mut Self {
        self.resource_nested(name, options, |_| {})
    }

    /// Singular resource whose `block` is scoped under its own path.
    pub fn resource_nested(
        &mut self,
        name: &str,
        options: ResourceOptions,
        block: impl FnOnce(&mut Self),
    ) -> &mut Self {
        if !self.validate_resource(name, &options) {
            return self;
        }

        let collection = pluralize(name);
        let base = join(&self.scope.path, options.path.as_deref().unwrap_or(name));
        let routes = [
            (Action::Show, base.clone()),
            (Action::New, join(&base, &options.path_names.new)),
            (Action::Edit, join(&base, &options.path_names.edit)),
        ];
        for (action, path) in routes {
            if options.includes(action.as_str()) {
                let target = RouteTarget::new(collection.clone(), action);
                self.emit(&path, target, &options.constraints, None);
            }
        }

        let nested = Scope {
            path: base.clone(),
            resource: Some(ResourceScope {
                name: collection,
                path: base,
                singular: true,
                constraints: options.constraints,
            }),
            ..self.scope.clone()
        };
        self.within(nested, block)
    }

    /// Prefix the path, `collection`, and component identity of every route
    /// declared in `block` with `name`.
    pub fn namespace(&mut self, name: &str, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.namespace_with(name, NamespaceOptions::default(), block)
    }

    /// Namespace whose identity prefix (`module`) or path may differ from
    /// its name.
    pub fn namespace_with(
        &mut self,
        name: &str,
        options: NamespaceOptions,
        block: impl FnOnce(&mut Self),
    ) -> &mut Self {
        if name.trim_matches('/').is_empty() {
            self.report(RoutingError::MalformedDeclaration {
                reason: String::from("namespace name must not be empty"),
            });
            return self;
        }

        let outer_namespace = self.scope.namespace.as_deref().unwrap_or_default();
        let outer_module = self.scope.module.as_deref().unwrap_or_default();
        let nested = Scope {
            path: join(&self.scope.path, options.path.as_deref().unwrap_or(name)),
            namespace: Some(join(outer_namespace, name)),
            module: Some(join(outer_module, options.module.as_deref().unwrap_or(name))),
            constraints: self.scope.constraints.clone(),
            resource: None,
        };
        self.within(nested, block)
    }

    pub fn get(
        &mut self,
        actions: impl Into<NameList>,
        options: impl Into<CustomRouteOptions>,
    ) -> &mut Self {
        self.custom(Verb::Get, actions.into(), options.into())
    }

    pub fn post(
        &mut self,
        actions: impl Into<NameList>,
        options: impl Into<CustomRouteOptions>,
    ) -> &mut Self {
        self.custom(Verb::Post, actions.into(), options.into())
    }

    pub fn put(
        &mut self,
        actions: impl Into<NameList>,
        options: impl Into<CustomRouteOptions>,
    ) -> &mut Self {
        self.custom(Verb::Put, actions.into(), options.into())
    }

    pub fn patch(
        &mut self,
        actions: impl Into<NameList>,
        options: impl Into<CustomRouteOptions>,
    ) -> &mut Self {
        self.custom(Verb::Patch, actions.into(), options.into())
    }

    pub fn delete(
        &mut self,
        actions: impl Into<NameList>,
        options: impl Into<CustomRouteOptions>,
    ) -> &mut Self {
        self.custom(Verb::Delete, actions.into(), options.into())
    }

    /// One route per action name, rooted at the enclosing resource.
    pub fn custom(
        &mut self,
        verb: Verb,
        actions: NameList,
        options: CustomRouteOptions,
    ) -> &mut Self {
        let Some(resource) = self.scope.resource.clone() else {
            for action in actions.iter() {
                self.report(RoutingError::CustomRouteOutsideResource {
                    action: String::from(action),
                });
            }
            return self;
        };

        for action in actions.iter() {
            let path = match (resource.singular, options.on) {
                (true, On::Collection) => {
                    self.report(RoutingError::CollectionRouteOnSingular {
                        resource: resource.name.clone(),
                        action: String::from(action),
                    });
                    continue;
                }
                (false, On::Member) => join(&join(&resource.path, ":id"), action),
                (true, On::Member) | (false, On::Collection) => join(&resource.path, action),
            };
            let target = RouteTarget::new(resource.name.clone(), Action::parse(action));
            self.emit(&path, target, &resource.constraints, Some(verb));
        }
        self
    }

    fn validate_resource(&mut self, name: &str, options: &ResourceOptions) -> bool {
        let mut valid = true;
        if name.trim_matches('/').is_empty() {
            self.report(RoutingError::MalformedDeclaration {
                reason: String::from("resource name must not be empty"),
            });
            valid = false;
        }
        let path_names = [("new", &options.path_names.new), ("edit", &options.path_names.edit)];
        for (action, segment) in path_names {
            if segment.is_empty() || segment.contains('/') || segment.starts_with(':') {
                self.report(RoutingError::MalformedDeclaration {
                    reason: format_compact!(
                        "path name for '{}' must be a single literal segment, got '{}'",
                        action,
                        segment
                    ),
                });
                valid = false;
            }
        }
        for action in options.filter_names() {
            if Action::standard(action).is_none() {
                self.report(RoutingError::UnknownAction {
                    name: String::from(action),
                });
                valid = false;
            }
        }
        valid
    }

    fn within(&mut self, scope: Scope, block: impl FnOnce(&mut Self)) -> &mut Self {
        let saved = mem::replace(&mut self.scope, scope);
        block(self);
        self.scope = saved;
        self
    }

    /// Compile `path`, looking captures up in `local` and then in the
    /// inherited scope constraints.
    fn emit(
        &mut self,
        path: &str,
        target: RouteTarget,
        local: &Constraints,
        verb: Option<Verb>,
    ) {
        let inherited = &self.scope.constraints;
        let compiled = compile_with(path, |key| local.get(key).or_else(|| inherited.get(key)));
        self.push(compiled, target, verb);
    }

    fn push(
        &mut self,
        compiled: Result<RoutePattern, RoutingError>,
        target: RouteTarget,
        verb: Option<Verb>,
    ) {
        let target = target.within(self.scope.namespace.as_deref(), self.scope.module.as_deref());
        match compiled {
            Ok(pattern) => {
                let route = Route::new(pattern, &target, verb);
                tracing::debug!(
                    pattern = %route.pattern(),
                    component = %route.component(),
                    "route declared"
                );
                self.table.push(route);
            }
            Err(error) => self.report(error),
        }
    }
}

/// Run `block` against a fresh table.
///
/// Returns the table only if every declaration was accepted.
pub fn draw(block: impl FnOnce(&mut RoutingMapper<'_>)) -> Result<RouteTable, RoutingErrors> {
    let mut table = RouteTable::new();
    let mut mapper = RoutingMapper::new(&mut table);
    block(&mut mapper);
    mapper.finish()?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(table: &RouteTable) -> Vec<std::string::String> {
        table.iter().map(|r| r.pattern().to_string()).collect()
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "members"), "members");
        assert_eq!(join("admin", "members"), "admin/members");
        assert_eq!(join("admin", ""), "admin");
        assert_eq!(join("admin", "/members/"), "admin/members");
    }

    #[test]
    fn test_scope_is_restored() {
        let table = draw(|m| {
            m.namespace("admin", |m| {
                m.resources_with("members", ResourceOptions::default().only("index"));
            });
            m.resources_with("members", ResourceOptions::default().only("index"));
        })
        .unwrap();
        assert_eq!(patterns(&table), ["admin/members", "members"]);
        assert_eq!(table.get(1).map(|r| r.collection()), Some("members"));
        assert!(table.get(1).is_some_and(|r| r.static_params().module().is_none()));
    }

    #[test]
    fn test_errors_are_collected() {
        let mut table = RouteTable::new();
        let mut mapper = RoutingMapper::new(&mut table);
        mapper
            .match_route("members", "members")
            .match_route("members/:", "members#show")
            .match_route("members", "members#index");
        assert_eq!(mapper.errors().len(), 2);
        let errors = mapper.finish().unwrap_err();
        assert!(matches!(errors.first(), Some(RoutingError::InvalidTarget { .. })));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_match_rejects_unknown_constraint_key() {
        let errors = draw(|m| {
            m.match_constrained("members/:id", "members#show", &Constraints::from([("name", "x")]));
        })
        .unwrap_err();
        assert!(matches!(
            errors.first(),
            Some(RoutingError::UnknownConstraintKey { key, .. }) if key == "name"
        ));
    }

    #[test]
    fn test_custom_route_outside_resource() {
        let errors = draw(|m| {
            m.get("info", On::Member);
        })
        .unwrap_err();
        assert!(matches!(
            errors.first(),
            Some(RoutingError::CustomRouteOutsideResource { .. })
        ));
    }

    #[test]
    fn test_collection_route_on_singular() {
        let errors = draw(|m| {
            m.resource_nested("account", ResourceOptions::default().only(NameList::empty()), |m| {
                m.get("list", On::Collection);
            });
        })
        .unwrap_err();
        assert!(matches!(
            errors.first(),
            Some(RoutingError::CollectionRouteOnSingular { resource, .. }) if resource == "accounts"
        ));
    }

    #[test]
    fn test_unknown_action_in_filter() {
        let errors = draw(|m| {
            m.resources_with("members", ResourceOptions::default().except(["shw", "edit"]));
        })
        .unwrap_err();
        assert_eq!(
            errors.into_vec(),
            vec![RoutingError::UnknownAction {
                name: String::from("shw")
            }]
        );
    }

    #[test]
    fn test_empty_resource_name() {
        let errors = draw(|m| {
            m.resources("");
        })
        .unwrap_err();
        assert!(matches!(
            errors.first(),
            Some(RoutingError::MalformedDeclaration { .. })
        ));
    }

    #[test]
    fn test_path_names_must_be_literal_segments() {
        for (new, edit) in [("", "edit"), ("new", "a/b"), (":id", "edit")] {
            let errors = draw(|m| {
                m.resources_with("members", ResourceOptions::default().path_names(new, edit));
                m.resource_with("account", ResourceOptions::default().path_names(new, edit));
            })
            .unwrap_err();
            assert_eq!(errors.len(), 2, "{:?}", (new, edit));
            assert!(errors
                .iter()
                .all(|error| matches!(error, RoutingError::MalformedDeclaration { .. })));
        }
    }

    #[test]
    fn test_verbs_are_recorded() {
        let table = draw(|m| {
            m.resources_nested("members", ResourceOptions::default().only(NameList::empty()), |m| {
                m.post("publish", On::Member).delete("purge", On::Collection);
            });
        })
        .unwrap();
        let verbs: Vec<_> = table.iter().map(|r| r.verb()).collect();
        assert_eq!(verbs, [Some(Verb::Post), Some(Verb::Delete)]);
        assert_eq!(patterns(&table), ["members/:id/publish", "members/purge"]);
    }
}
