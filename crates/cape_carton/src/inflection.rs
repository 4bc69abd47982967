//! English inflection for resource names.
//!
//! Only the rules that matter for route declarations are covered: a
//! singular `resource` still resolves to a plural collection, and nested
//! resources derive their parent key (`member_id`) from the plural name.
//! Compound snake_case names inflect their last word only
//! (`user_address` -> `user_addresses`).

use phf::{phf_map, phf_set};

use crate::String;

/// Irregular singular -> plural forms
static IRREGULAR_PLURALS: phf::Map<&'static str, &'static str> = phf_map! {
    "person" => "people",
    "man" => "men",
    "woman" => "women",
    "child" => "children",
    "mouse" => "mice",
    "goose" => "geese",
    "foot" => "feet",
    "tooth" => "teeth",
    "ox" => "oxen",
};

/// Irregular plural -> singular forms
static IRREGULAR_SINGULARS: phf::Map<&'static str, &'static str> = phf_map! {
    "people" => "person",
    "men" => "man",
    "women" => "woman",
    "children" => "child",
    "mice" => "mouse",
    "geese" => "goose",
    "feet" => "foot",
    "teeth" => "tooth",
    "oxen" => "ox",
};

/// Words with identical singular and plural forms
static UNCOUNTABLE: phf::Set<&'static str> = phf_set! {
    "equipment", "information", "rice", "money", "species", "series",
    "fish", "sheep", "deer", "news", "data", "media", "feedback",
};

/// Words ending in a single `z` whose plural doubles it (`quiz` -> `quizzes`)
static DOUBLED_Z: phf::Set<&'static str> = phf_set! {
    "quiz", "whiz", "fez", "biz",
};

/// Singulars ending in a single `s` after `a`, `e`, or `i`
///
/// Their plurals (`canvases`) are otherwise indistinguishable from plurals of
/// `-se` words (`cases`).
static S_SINGULARS: phf::Set<&'static str> = phf_set! {
    "canvas", "alias", "atlas", "gas", "bias", "lens", "iris",
};

/// Singular endings in `-use` whose plural is not `-uses` -> `-us`
const USE_ENDINGS: [&str; 11] = [
    "house", "cause", "pause", "clause", "fuse", "muse", "excuse", "abuse", "spouse",
    "blouse", "accuse",
];

/// Singular endings that take `-es` in the plural
const SIBILANT_ENDINGS: [&str; 5] = ["ss", "x", "zz", "ch", "sh"];

/// Split `user_address` into (`user_`, `address`).
#[inline]
fn split_last_word(word: &str) -> (&str, &str) {
    match word.rfind('_') {
        Some(idx) => word.split_at(idx + 1),
        None => ("", word),
    }
}

#[inline]
fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn join(prefix: &str, word: &str, suffix: &str) -> String {
    let mut result = String::with_capacity(prefix.len() + word.len() + suffix.len());
    result.push_str(prefix);
    result.push_str(word);
    result.push_str(suffix);
    result
}

/// Return the plural form of a (lowercase) singular resource name.
///
/// Any word ending in `s` or `z` takes `-es`, so the input is assumed to be
/// singular: `pluralize("canvas") == "canvases"`.
///
/// # Examples
/// ```
/// use cape_carton::pluralize;
///
/// assert_eq!(pluralize("member"), "members");
/// assert_eq!(pluralize("address"), "addresses");
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("person"), "people");
/// assert_eq!(pluralize("quiz"), "quizzes");
/// ```
pub fn pluralize(word: &str) -> String {
    let (prefix, last) = split_last_word(word);
    if last.is_empty() || UNCOUNTABLE.contains(last) || IRREGULAR_SINGULARS.contains_key(last) {
        return String::from(word);
    }
    if let Some(plural) = IRREGULAR_PLURALS.get(last) {
        return join(prefix, plural, "");
    }
    if DOUBLED_Z.contains(last) {
        return join(prefix, last, "zes");
    }
    if last.ends_with('s')
        || last.ends_with('z')
        || SIBILANT_ENDINGS.iter().any(|end| last.ends_with(end))
    {
        return join(prefix, last, "es");
    }

    let bytes = last.as_bytes();
    if bytes.len() > 1 && bytes[bytes.len() - 1] == b'y' && !is_vowel(bytes[bytes.len() - 2]) {
        return join(prefix, &last[..last.len() - 1], "ies");
    }

    join(prefix, last, "s")
}

/// Return the singular form of a (lowercase) resource name.
///
/// Inverts [`pluralize`]: `singularize(&pluralize(w)) == w` for singular `w`.
///
/// # Examples
/// ```
/// use cape_carton::singularize;
///
/// assert_eq!(singularize("members"), "member");
/// assert_eq!(singularize("addresses"), "address");
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("people"), "person");
/// assert_eq!(singularize("quizzes"), "quiz");
/// ```
pub fn singularize(word: &str) -> String {
    let (prefix, last) = split_last_word(word);
    if last.is_empty() || UNCOUNTABLE.contains(last) || IRREGULAR_PLURALS.contains_key(last) {
        return String::from(word);
    }
    if let Some(singular) = IRREGULAR_SINGULARS.get(last) {
        return join(prefix, singular, "");
    }
    if last.len() > 3 && last.ends_with("ies") {
        return join(prefix, &last[..last.len() - 3], "y");
    }
    if let Some(stem) = last.strip_suffix("es") {
        if let Some(single) = stem.strip_suffix('z').filter(|single| DOUBLED_Z.contains(*single)) {
            return join(prefix, single, "");
        }
        if SIBILANT_ENDINGS.iter().any(|end| stem.ends_with(end))
            || stem.ends_with("tz")
            || S_SINGULARS.contains(stem)
        {
            return join(prefix, stem, "");
        }
        // `focuses` -> `focus`, but `houses` -> `house`
        let with_e = &last[..last.len() - 1];
        if stem.ends_with("us")
            && with_e != "use"
            && !USE_ENDINGS.iter().any(|end| with_e.ends_with(end))
        {
            return join(prefix, stem, "");
        }
    }
    if last.ends_with("ss") || last.ends_with("us") || S_SINGULARS.contains(last) {
        return String::from(word);
    }
    if last.len() > 1 && last.ends_with('s') {
        return join(prefix, &last[..last.len() - 1], "");
    }

    String::from(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_regular() {
        assert_eq!(pluralize("member").as_str(), "members");
        assert_eq!(pluralize("account").as_str(), "accounts");
        assert_eq!(pluralize("password").as_str(), "passwords");
        assert_eq!(pluralize("day").as_str(), "days");
    }

    #[test]
    fn test_pluralize_suffix_rules() {
        assert_eq!(pluralize("address").as_str(), "addresses");
        assert_eq!(pluralize("box").as_str(), "boxes");
        assert_eq!(pluralize("match").as_str(), "matches");
        assert_eq!(pluralize("status").as_str(), "statuses");
        assert_eq!(pluralize("category").as_str(), "categories");
    }

    #[test]
    fn test_pluralize_s_and_z_endings() {
        assert_eq!(pluralize("quiz").as_str(), "quizzes");
        assert_eq!(pluralize("buzz").as_str(), "buzzes");
        assert_eq!(pluralize("waltz").as_str(), "waltzes");
        assert_eq!(pluralize("canvas").as_str(), "canvases");
        assert_eq!(pluralize("focus").as_str(), "focuses");
        assert_eq!(pluralize("bus").as_str(), "buses");
    }

    #[test]
    fn test_pluralize_keeps_irregular_and_uncountable_plurals() {
        assert_eq!(pluralize("people").as_str(), "people");
        assert_eq!(pluralize("news").as_str(), "news");
    }

    #[test]
    fn test_pluralize_compound() {
        assert_eq!(pluralize("user_address").as_str(), "user_addresses");
        assert_eq!(pluralize("sales_person").as_str(), "sales_people");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("members").as_str(), "member");
        assert_eq!(singularize("addresses").as_str(), "address");
        assert_eq!(singularize("boxes").as_str(), "box");
        assert_eq!(singularize("matches").as_str(), "match");
        assert_eq!(singularize("statuses").as_str(), "status");
        assert_eq!(singularize("categories").as_str(), "category");
        assert_eq!(singularize("groups").as_str(), "group");
        assert_eq!(singularize("children").as_str(), "child");
        assert_eq!(singularize("houses").as_str(), "house");
        assert_eq!(singularize("sizes").as_str(), "size");
        assert_eq!(singularize("cases").as_str(), "case");
    }

    #[test]
    fn test_singularize_s_and_z_endings() {
        assert_eq!(singularize("quizzes").as_str(), "quiz");
        assert_eq!(singularize("buzzes").as_str(), "buzz");
        assert_eq!(singularize("waltzes").as_str(), "waltz");
        assert_eq!(singularize("focuses").as_str(), "focus");
        assert_eq!(singularize("campuses").as_str(), "campus");
        assert_eq!(singularize("viruses").as_str(), "virus");
        assert_eq!(singularize("canvases").as_str(), "canvas");
        assert_eq!(singularize("causes").as_str(), "cause");
        assert_eq!(singularize("excuses").as_str(), "excuse");
        assert_eq!(singularize("uses").as_str(), "use");
    }

    #[test]
    fn test_singularize_keeps_singulars() {
        assert_eq!(singularize("address").as_str(), "address");
        assert_eq!(singularize("status").as_str(), "status");
        assert_eq!(singularize("member").as_str(), "member");
        assert_eq!(singularize("series").as_str(), "series");
        assert_eq!(singularize("canvas").as_str(), "canvas");
        assert_eq!(singularize("focus").as_str(), "focus");
    }

    #[test]
    fn test_singularize_compound() {
        assert_eq!(singularize("user_groups").as_str(), "user_group");
    }

    #[test]
    fn test_singularize_inverts_pluralize() {
        let words = [
            "member", "address", "box", "match", "wish", "status", "focus", "campus", "bus",
            "virus", "quiz", "fez", "buzz", "waltz", "canvas", "alias", "gas", "category", "day",
            "person", "child", "house", "cause", "excuse", "size", "case", "user_address",
            "sales_person", "news",
        ];
        for word in words {
            let plural = pluralize(word);
            assert_eq!(singularize(&plural).as_str(), word, "via {}", plural);
        }
    }
}
