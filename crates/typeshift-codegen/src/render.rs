//! Model and enum rendering.
//!
//! [`Converter`] turns a batch of extractor [`FileRecord`]s into one
//! TypeScript declaration payload. Output is built as rows of text, file by
//! file, in extractor order; file blocks that render empty are filtered out
//! before joining, and a configured namespace wraps the joined content in a
//! `declare module` block with one extra level of indentation.

use typeshift_ast::{Enum, EnumMember, FileRecord, Member, Model};

use crate::casing::camel_case;
use crate::comment::format_comment;
use crate::config::{CamelCaseOptions, Config, PropertyNameSource};
use crate::types::TypeMap;

/// Renders extractor output to TypeScript declarations under one config.
///
/// Holds the per-run list of enum identifiers; the list is rebuilt at the
/// top of every [`convert`](Converter::convert) call and never leaks
/// between runs, so a single instance is safe to reuse as a library.
pub struct Converter<'a> {
    config: &'a Config,
    types: TypeMap,
    enum_names: Vec<String>,
}

impl<'a> Converter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            types: TypeMap::new(&config.custom_type_translations),
            enum_names: Vec::new(),
        }
    }

    /// Converts a batch of file records into one declaration payload.
    ///
    /// Deterministic: the same input and config produce byte-identical
    /// output. File order follows the input sequence.
    pub fn convert(&mut self, files: &[FileRecord]) -> String {
        self.enum_names.clear();
        for file in files {
            for enum_ in &file.enums {
                self.enum_names.push(enum_.identifier.clone());
            }
        }

        let namespaced = self.config.namespace.is_some();
        let mut blocks = Vec::with_capacity(files.len());

        for file in files {
            let mut rows = Vec::new();
            for model in &file.models {
                rows.extend(self.render_model(model, &file.file_name));
            }
            for enum_ in &file.enums {
                rows.extend(self.render_enum(enum_, &file.file_name));
            }

            let block = if namespaced {
                rows.iter()
                    .map(|row| format!("    {row}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            } else {
                rows.join("\n")
            };
            blocks.push(block);
        }

        let filtered: Vec<String> = blocks.into_iter().filter(|b| !b.is_empty()).collect();

        match &self.config.namespace {
            Some(namespace) => format!(
                "declare module {} {{\n{}\n}}",
                namespace,
                filtered.join("\n")
            ),
            None => filtered.join("\n"),
        }
    }

    /// Renders one model as an `export interface` block.
    ///
    /// The first dictionary-shaped base type becomes an index signature;
    /// dictionary-shaped entries never appear in the `extends` clause.
    /// A model with no members and no index signature renders nothing.
    fn render_model(&self, model: &Model, filename: &str) -> Vec<String> {
        let index_signature = model
            .base_classes
            .iter()
            .find(|base| TypeMap::is_dictionary(base))
            .and_then(|base| self.types.index_signature(base));

        if model.is_empty() && index_signature.is_none() {
            return Vec::new();
        }

        // An interface cannot extend an enum, so base types naming an enum
        // from this batch are dropped alongside the dictionary shapes.
        let extends: Vec<&str> = model
            .base_classes
            .iter()
            .filter(|base| !TypeMap::is_dictionary(base))
            .filter(|base| !self.enum_names.iter().any(|e| e == *base))
            .map(|base| self.types.translate(base))
            .collect();

        let mut rows = Vec::new();

        if !self.config.omit_file_path_comment {
            rows.push(format!("// {filename}"));
        }
        if self.config.include_comments {
            if let Some(doc) = model.doc() {
                if let Some(comment) = format_comment(doc, "") {
                    rows.extend(comment);
                }
            }
        }

        let extends_clause = if extends.is_empty() {
            String::new()
        } else {
            format!(" extends {}", extends.join(", "))
        };
        rows.push(format!(
            "export interface {}{} {{",
            model.model_name, extends_clause
        ));

        if let Some(signature) = index_signature {
            rows.push(format!("    {}{}", signature, self.config.semicolon()));
        }

        for member in model.members() {
            rows.extend(self.render_member(member));
        }

        rows.push("}\n".to_string());
        rows
    }

    /// Renders one member line, preceded by its documentation block when
    /// comment emission is enabled.
    fn render_member(&self, member: &Member) -> Vec<String> {
        let mut rows = Vec::new();

        if self.config.include_comments {
            if let Some(doc) = member.doc() {
                if let Some(comment) = format_comment(doc, "    ") {
                    rows.extend(comment);
                }
            }
        }

        let optional = member.is_optional()
            || (self.config.validate_emit_default_value && !member.emits_default());
        let marker = if optional { "?" } else { "" };
        let identifier = self.convert_identifier(member.name());
        let rendered_type = self.types.parse_type(&member.raw_type);

        rows.push(format!(
            "    {}{}: {}{}",
            identifier,
            marker,
            rendered_type,
            self.config.semicolon()
        ));
        rows
    }

    /// Renders one enum, either as a union of string literals or as an
    /// explicit `export enum` block.
    fn render_enum(&self, enum_: &Enum, filename: &str) -> Vec<String> {
        let mut rows = Vec::new();

        if !self.config.omit_file_path_comment {
            rows.push(format!("// {filename}"));
        }
        if self.config.include_comments {
            if let Some(doc) = enum_.doc() {
                if let Some(comment) = format_comment(doc, "") {
                    rows.extend(comment);
                }
            }
        }

        if self.config.string_literal_types_instead_of_enums {
            rows.push(format!("export type {} =", enum_.identifier));
            let last = enum_.values.len().saturating_sub(1);
            for (i, member) in enum_.values.iter().enumerate() {
                let delimiter = if i == last { ";" } else { " |" };
                rows.push(format!("    '{}'{}", self.enum_literal(&member.key), delimiter));
            }
            rows.push(String::new());
        } else {
            rows.push(format!("export enum {} {{", enum_.identifier));
            self.render_enum_keys(enum_, &mut rows);
            rows.push("}\n".to_string());
        }

        rows
    }

    fn render_enum_keys(&self, enum_: &Enum, rows: &mut Vec<String>) {
        // TypeScript's implicit member value, tracked so valueless keys can
        // stay bare while the implicit value still equals their declaration
        // index. None once an explicit value no longer parses as an integer.
        let mut next_implicit: Option<i64> = Some(0);

        for (index, member) in enum_.values.iter().enumerate() {
            if self.config.include_comments {
                if let Some(doc) = member.doc().filter(|d| d.obsolete) {
                    if let Some(comment) = format_comment(doc, "    ") {
                        rows.extend(comment);
                    }
                }
            }

            if !self.config.numeric_enums {
                rows.push(format!(
                    "    {} = '{}',",
                    member.key,
                    self.enum_literal(&member.key)
                ));
                continue;
            }

            match member.normalized_value() {
                Some(value) => {
                    rows.push(format!("    {} = {},", member.key, value));
                    next_implicit = parse_enum_int(&value).map(|n| n + 1);
                }
                None => {
                    if next_implicit == Some(index as i64) {
                        rows.push(format!("    {},", member.key));
                    } else {
                        // An earlier explicit value shifted the implicit
                        // counter; pin this key to its declaration index.
                        rows.push(format!("    {} = {},", member.key, index));
                    }
                    next_implicit = Some(index as i64 + 1);
                }
            }
        }
    }

    /// Enum key text used as a string literal, case-folded when configured.
    fn enum_literal(&self, key: &str) -> String {
        if self.config.camel_case_enums {
            camel_case(key, &CamelCaseOptions::default())
        } else {
            key.to_string()
        }
    }

    /// Member identifier under the active naming policy. Names supplied by
    /// serialization attributes are wire names and bypass the casing
    /// transform.
    fn convert_identifier(&self, identifier: &str) -> String {
        if self.config.camel_case
            && self.config.property_name_source == PropertyNameSource::Default
        {
            camel_case(identifier, &self.config.camel_case_options)
        } else {
            identifier.to_string()
        }
    }
}

/// Parses an explicit enum value for implicit-counter tracking: decimal,
/// `0x` hex, or `0b` binary, with an optional leading sign.
fn parse_enum_int(value: &str) -> Option<i64> {
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value),
    };

    let parsed = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = digits.strip_prefix("0b").or_else(|| digits.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2).ok()
    } else {
        digits.parse::<i64>().ok()
    };

    parsed.map(|n| sign * n)
}
