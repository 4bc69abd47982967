//! Naming convention utilities.
//!
//! Component identities are derived from route metadata by camelizing
//! slash-joined resource paths, so `admin/user_groups` + `show` resolves to
//! `AdminUserGroupsShow`.

use crate::String;

/// Characters treated as word boundaries when camelizing.
#[inline]
pub fn is_segment_separator(c: char) -> bool {
    matches!(c, '/' | '.' | '_' | '-')
}

/// Uppercase the first character, leaving the rest untouched.
///
/// # Examples
/// ```
/// use cape_carton::capitalize;
///
/// assert_eq!(capitalize("members"), "Members");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(s.len());
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::default(),
    }
}

/// Convert a slash/underscore/dash/dot separated path into PascalCase.
///
/// Every run between separators becomes one capitalized word; empty runs
/// (doubled separators) are skipped.
///
/// # Examples
/// ```
/// use cape_carton::camelize;
///
/// assert_eq!(camelize("admin/members"), "AdminMembers");
/// assert_eq!(camelize("user_groups"), "UserGroups");
/// assert_eq!(camelize("top"), "Top");
/// ```
pub fn camelize(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in s.split(is_segment_separator).filter(|w| !w.is_empty()) {
        result.push_str(&capitalize(word));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("show").as_str(), "Show");
        assert_eq!(capitalize("Show").as_str(), "Show");
        assert_eq!(capitalize("").as_str(), "");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("admin/members").as_str(), "AdminMembers");
        assert_eq!(camelize("admin.members").as_str(), "AdminMembers");
        assert_eq!(camelize("admin/user_groups").as_str(), "AdminUserGroups");
        assert_eq!(camelize("sign-in").as_str(), "SignIn");
        assert_eq!(camelize("a//b").as_str(), "AB");
        assert_eq!(camelize("").as_str(), "");
    }
}
