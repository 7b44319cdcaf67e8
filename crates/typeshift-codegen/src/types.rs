//! Type-string parsing.
//!
//! Maps a raw C# type signature to a TypeScript type expression. No real
//! type system is available at this stage; recognition works on the literal
//! signature text through a small recursive dispatcher with an explicit
//! shape-priority list:
//!
//! 1. exact translation-table match (bypasses all structural parsing)
//! 2. array suffix (`T[]`)
//! 3. single-argument generic collections (`List<T>`, `IEnumerable<T>`, ...)
//! 4. two-argument generic dictionaries (`Dictionary<K, V>`, ...)
//! 5. scalar token, translated or passed through verbatim
//!
//! Unknown tokens pass through unchanged so references to sibling generated
//! interfaces keep working.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+)\[\]\?*$").unwrap());
static COLLECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:I?List|IReadOnlyList|IEnumerable|ICollection|IReadOnlyCollection|HashSet|ISet)<(.+)>\?*$",
    )
    .unwrap()
});
static DICTIONARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:I?Dictionary|IReadOnlyDictionary|SortedDictionary)<([\w\d]+)\s*,\s*(.+)>\?*$")
        .unwrap()
});
static SIMPLE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w\d]+$").unwrap());

/// Builtin scalar translations, C# token to TypeScript type.
const BUILTIN_TRANSLATIONS: &[(&str, &str)] = &[
    ("int", "number"),
    ("double", "number"),
    ("float", "number"),
    ("Int32", "number"),
    ("Int64", "number"),
    ("short", "number"),
    ("long", "number"),
    ("decimal", "number"),
    ("bool", "boolean"),
    ("DateTime", "string"),
    ("DateTimeOffset", "string"),
    ("Guid", "string"),
    ("dynamic", "any"),
    ("object", "any"),
];

/// The active translation table plus the shape dispatcher.
#[derive(Debug, Clone)]
pub struct TypeMap {
    translations: HashMap<String, String>,
}

impl TypeMap {
    /// Builds the table from the builtin defaults merged with user
    /// overrides; overrides win on conflict.
    pub fn new(overrides: &HashMap<String, String>) -> Self {
        let mut translations: HashMap<String, String> = BUILTIN_TRANSLATIONS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (k, v) in overrides {
            translations.insert(k.clone(), v.clone());
        }
        Self { translations }
    }

    /// Returns true if the signature has the two-argument dictionary shape.
    pub fn is_dictionary(raw: &str) -> bool {
        DICTIONARY_RE.is_match(raw)
    }

    /// Translates a bare token through the table, passing unknown tokens
    /// through verbatim.
    pub fn translate<'a>(&'a self, token: &'a str) -> &'a str {
        self.translations
            .get(token)
            .map(String::as_str)
            .unwrap_or(token)
    }

    /// Maps a raw type signature to a TypeScript type expression, for a
    /// property position. Dictionary shapes render as `Record<K, V>` here;
    /// the index-signature form is a separate entry point.
    pub fn parse_type(&self, raw: &str) -> String {
        // Exact matches win over structural shapes so composite signatures
        // can be special-cased through the translation table.
        if let Some(mapped) = self.translations.get(raw) {
            return mapped.clone();
        }

        if let Some(captures) = ARRAY_RE.captures(raw) {
            return format!("{}[]", self.parse_type(&captures[1]));
        }

        if let Some(captures) = COLLECTION_RE.captures(raw) {
            return format!("{}[]", self.element_type(&captures[1]));
        }

        if let Some(captures) = DICTIONARY_RE.captures(raw) {
            return format!(
                "Record<{}, {}>",
                self.translate(&captures[1]),
                self.element_type(&captures[2])
            );
        }

        let token = raw.strip_suffix('?').unwrap_or(raw);
        self.translate(token).to_string()
    }

    /// Renders a dictionary-shaped signature as an index signature
    /// (`[key: K]: V`), or `None` if the shape does not match.
    pub fn index_signature(&self, raw: &str) -> Option<String> {
        DICTIONARY_RE.captures(raw).map(|captures| {
            format!(
                "[key: {}]: {}",
                self.translate(&captures[1]),
                self.element_type(&captures[2])
            )
        })
    }

    /// A generic argument: simple tokens go straight through the table,
    /// anything else recurses through the full parser.
    fn element_type(&self, inner: &str) -> String {
        if SIMPLE_TOKEN_RE.is_match(inner) {
            self.translate(inner).to_string()
        } else {
            self.parse_type(inner)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> TypeMap {
        TypeMap::new(&HashMap::new())
    }

    #[test]
    fn test_scalar_translations() {
        let map = map();
        assert_eq!(map.parse_type("int"), "number");
        assert_eq!(map.parse_type("bool"), "boolean");
        assert_eq!(map.parse_type("Guid"), "string");
        assert_eq!(map.parse_type("dynamic"), "any");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let map = map();
        assert_eq!(map.parse_type("UserDto"), "UserDto");
        assert_eq!(map.parse_type("Result<string>"), "Result<string>");
    }

    #[test]
    fn test_optionality_marker_is_stripped() {
        let map = map();
        assert_eq!(map.parse_type("int?"), "number");
        assert_eq!(map.parse_type("UserDto?"), "UserDto");
    }

    #[test]
    fn test_array_suffix() {
        let map = map();
        assert_eq!(map.parse_type("int[]"), "number[]");
        assert_eq!(map.parse_type("int[][]"), "number[][]");
        assert_eq!(map.parse_type("UserDto[]?"), "UserDto[]");
    }

    #[test]
    fn test_collections() {
        let map = map();
        assert_eq!(map.parse_type("List<int>"), "number[]");
        assert_eq!(map.parse_type("IEnumerable<string>"), "string[]");
        assert_eq!(map.parse_type("HashSet<Guid>"), "string[]");
        assert_eq!(map.parse_type("List<int>?"), "number[]");
    }

    #[test]
    fn test_nested_collections() {
        let map = map();
        assert_eq!(map.parse_type("List<List<int>>"), "number[][]");
        assert_eq!(
            map.parse_type("List<Dictionary<string,int>>"),
            "Record<string, number>[]"
        );
    }

    #[test]
    fn test_dictionaries() {
        let map = map();
        assert_eq!(
            map.parse_type("Dictionary<string,int>"),
            "Record<string, number>"
        );
        assert_eq!(
            map.parse_type("IDictionary<string, UserDto>"),
            "Record<string, UserDto>"
        );
        assert_eq!(
            map.parse_type("Dictionary<string, List<int>>"),
            "Record<string, number[]>"
        );
    }

    #[test]
    fn test_index_signature_form() {
        let map = map();
        assert_eq!(
            map.index_signature("Dictionary<string,int>").unwrap(),
            "[key: string]: number"
        );
        assert_eq!(
            map.index_signature("Dictionary<string,string>").unwrap(),
            "[key: string]: string"
        );
        assert!(map.index_signature("List<int>").is_none());
    }

    #[test]
    fn test_exact_match_beats_structure() {
        let mut overrides = HashMap::new();
        overrides.insert("List<int>".to_string(), "IntList".to_string());
        overrides.insert("int".to_string(), "bigint".to_string());
        let map = TypeMap::new(&overrides);

        // The composite signature maps verbatim, and the scalar override
        // wins over the builtin entry everywhere else.
        assert_eq!(map.parse_type("List<int>"), "IntList");
        assert_eq!(map.parse_type("int"), "bigint");
        assert_eq!(map.parse_type("List<long>"), "number[]");
    }

    #[test]
    fn test_is_dictionary() {
        assert!(TypeMap::is_dictionary("Dictionary<string,string>"));
        assert!(TypeMap::is_dictionary("IReadOnlyDictionary<string, int>"));
        assert!(!TypeMap::is_dictionary("List<string>"));
        assert!(!TypeMap::is_dictionary("UserDto"));
    }
}
