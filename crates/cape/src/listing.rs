//! Human-readable route listings.

use std::fmt::Write;

use cape_relief::{Params, RouteTable};

/// Render `table` as aligned columns: verb, pattern, target, component.
///
/// Routes declared without a verb are listed as `ANY`.
pub fn format_routes(table: &RouteTable) -> String {
    let rows: Vec<[String; 4]> = table
        .iter()
        .map(|route| {
            [
                route
                    .verb()
                    .map_or("ANY", |verb| verb.as_str())
                    .to_string(),
                format!("/{}", route.pattern()),
                format!("{}#{}", route.collection(), route.action()),
                route.component().to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for [verb, pattern, target, component] in &rows {
        let _ = writeln!(
            out,
            "{:<w0$}  {:<w1$}  {:<w2$}  {}",
            verb,
            pattern,
            target,
            component,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        );
    }
    out
}

/// Render `params` one `key = value` per line, sorted by key.
pub fn format_params(params: &Params) -> String {
    let mut out = String::new();
    for (key, value) in params.sorted() {
        let _ = writeln!(out, "  {} = {}", key, value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cape_atelier::{draw, On, ResourceOptions};

    #[test]
    fn test_format_routes() {
        let table = draw(|m| {
            m.root("top#index");
            m.resources_nested("members", ResourceOptions::default().only(["index", "show"]), |m| {
                m.patch("activate", On::Member);
            });
            m.namespace("admin", |m| {
                m.resource_with("account", ResourceOptions::default().only("edit"));
            });
        })
        .unwrap();

        insta::assert_snapshot!(format_routes(&table), @r"
        ANY    /                      top#index            TopIndex
        ANY    /members               members#index        MembersIndex
        ANY    /members/:id           members#show         MembersShow
        PATCH  /members/:id/activate  members#activate     MembersActivate
        ANY    /admin/account/edit    admin/accounts#edit  AdminAccountsEdit
        ");
    }

    #[test]
    fn test_format_params() {
        let params = Params::from([("collection", "members"), ("action", "show"), ("id", "7")]);
        assert_eq!(
            format_params(&params),
            "  action = show\n  collection = members\n  id = 7\n"
        );
    }
}
