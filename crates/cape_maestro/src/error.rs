//! Router errors.

use cape_carton::String;
use cape_relief::{ComponentIdentity, RoutingErrors};

/// Failures that abort a navigation or a declaration.
///
/// An unmatched fragment is not an error; it is reported as
/// [`Navigation::NoRoute`](crate::Navigation::NoRoute).
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("invalid route declaration: {0}")]
    Declaration(#[from] RoutingErrors),

    #[error("no container to mount into; call mount(container) first")]
    NoContainer,

    #[error("component '{identity}' is not registered (fragment '{fragment}')")]
    ComponentNotRegistered {
        identity: ComponentIdentity,
        fragment: String,
    },

    #[error("components not registered: {}", join_identities(.0))]
    UnregisteredComponents(Vec<ComponentIdentity>),

    #[error("more than {limit} queued navigations; stopping at '{fragment}'")]
    NavigationLoop { limit: usize, fragment: String },
}

fn join_identities(identities: &[ComponentIdentity]) -> std::string::String {
    identities
        .iter()
        .map(ComponentIdentity::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_components_message() {
        let err = RouterError::UnregisteredComponents(vec![
            ComponentIdentity::from("MembersShow"),
            ComponentIdentity::from("MembersEdit"),
        ]);
        assert_eq!(
            err.to_string(),
            "components not registered: MembersShow, MembersEdit"
        );
    }
}
