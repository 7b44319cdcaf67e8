//! Converter configuration.
//!
//! All behavior switches live in a single immutable [`Config`] value that is
//! passed by reference into every rendering function. Each option's effect is
//! a pure function of (input, config); nothing here is global state.

use std::collections::HashMap;

use serde::Deserialize;

/// Where member identifiers come from.
///
/// With `JsonProperty` or `DataMember`, the extractor substitutes the
/// serialization attribute's name for the declared identifier. Those names
/// are wire names and are used verbatim: the casing transform only applies
/// under the `Default` policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PropertyNameSource {
    #[default]
    Default,
    JsonProperty,
    DataMember,
}

/// Tokenization options for the lower-camel identifier transform, matching
/// the options of the `camelcase` package the original tooling used.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CamelCaseOptions {
    /// Upper-case the first word as well (PascalCase output).
    pub pascal_case: bool,
    /// Keep embedded all-uppercase runs (`FooBAR` stays `fooBAR`).
    pub preserve_consecutive_uppercase: bool,
}

/// The full recognized option set for one converter run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Scalar translations merged over the builtin table; overrides win.
    /// An exact match here also bypasses structural parsing, so whole
    /// composite signatures can be special-cased verbatim.
    pub custom_type_translations: HashMap<String, String>,
    /// Wraps all output in `declare module <name> { ... }`.
    pub namespace: Option<String>,
    /// Enables the lower-camel identifier transform for member names.
    pub camel_case: bool,
    pub camel_case_options: CamelCaseOptions,
    /// Case-folds enum key text used as a string literal or value.
    pub camel_case_enums: bool,
    /// Explicit-enum mode emits numeric/raw representations instead of
    /// string values.
    pub numeric_enums: bool,
    /// Emit enums as unions of string literals instead of `enum` blocks.
    pub string_literal_types_instead_of_enums: bool,
    /// Enables documentation block emission.
    pub include_comments: bool,
    /// Suppresses the per-block `// <file path>` comment.
    pub omit_file_path_comment: bool,
    /// Suppresses the trailing `;` on member and index-signature lines.
    pub omit_semicolon: bool,
    /// Additionally marks a member optional when its serialization
    /// metadata disables default emission.
    pub validate_emit_default_value: bool,
    pub property_name_source: PropertyNameSource,
}

impl Config {
    /// The trailing terminator for member and index-signature lines.
    pub fn semicolon(&self) -> &'static str {
        if self.omit_semicolon {
            ""
        } else {
            ";"
        }
    }
}
