//! Intermediate representation for the typeshift converter.
//!
//! These records mirror the JSON emitted by the `csharp-models-to-json`
//! extractor, one [`FileRecord`] per input file. They are constructed fresh
//! per run, consumed once by the renderer, and never mutated afterwards.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Documentation and serialization metadata attached to a declaration.
///
/// Purely descriptive: it only affects emitted comment text and member
/// optionality, never the type shape itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocInfo {
    /// Whether the declaration carries an `[Obsolete]` attribute.
    pub obsolete: bool,
    /// The message argument of the `[Obsolete]` attribute, if any.
    pub obsolete_message: Option<String>,
    /// The `<summary>` text of the XML doc comment.
    pub summary: Option<String>,
    /// The `<remarks>` text of the XML doc comment.
    pub remarks: Option<String>,
    /// `EmitDefaultValue` from a `[DataMember]` attribute. Defaults to true.
    #[serde(default = "default_true")]
    pub emit_default_value: bool,
}

impl Default for DocInfo {
    fn default() -> Self {
        Self {
            obsolete: false,
            obsolete_message: None,
            summary: None,
            remarks: None,
            emit_default_value: true,
        }
    }
}

impl DocInfo {
    /// Returns true if there is anything to render: a summary, remarks,
    /// or a deprecation flag.
    pub fn has_content(&self) -> bool {
        self.obsolete
            || self.summary.as_deref().is_some_and(|s| !s.trim().is_empty())
            || self.remarks.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

fn default_true() -> bool {
    true
}

/// A field or property of a model. The extractor emits both through the
/// same shape, so they are unified here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Member {
    /// The declared identifier text. For fields this is the raw declarator
    /// text and can carry initializer tokens after the name.
    pub identifier: String,
    /// The source type signature, possibly with a trailing `?`.
    #[serde(rename = "Type")]
    pub raw_type: String,
    #[serde(default)]
    pub extra_info: Option<DocInfo>,
}

impl Member {
    /// The member name: the first whitespace-delimited token of the
    /// declared identifier. Multi-variable field declarations are not
    /// supported; only the first declarator is taken.
    pub fn name(&self) -> &str {
        self.identifier.split_whitespace().next().unwrap_or("")
    }

    /// Whether the source type carries a trailing optionality marker.
    pub fn is_optional(&self) -> bool {
        self.raw_type.ends_with('?')
    }

    /// Whether the member is serialized when holding its default value.
    pub fn emits_default(&self) -> bool {
        self.extra_info
            .as_ref()
            .map_or(true, |d| d.emit_default_value)
    }

    pub fn doc(&self) -> Option<&DocInfo> {
        self.extra_info.as_ref()
    }
}

/// One class, interface, or record declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    /// The declared name, including a generic parameter suffix when
    /// present (e.g. `Response<T>`).
    pub model_name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub fields: Vec<Member>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub properties: Vec<Member>,
    /// Raw base-type signature strings, in declaration order.
    #[serde(default, deserialize_with = "null_to_default")]
    pub base_classes: Vec<String>,
    #[serde(default)]
    pub extra_info: Option<DocInfo>,
}

impl Model {
    /// All members in declaration order: fields first, then properties.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.fields.iter().chain(self.properties.iter())
    }

    /// Returns true if the model declares no members at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.properties.is_empty()
    }

    pub fn doc(&self) -> Option<&DocInfo> {
        self.extra_info.as_ref()
    }
}

/// A single enum value: an optional explicit raw value plus metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnumValue {
    /// The explicit value text, or `None` for a positional default.
    pub value: Option<String>,
    pub extra_info: Option<DocInfo>,
}

/// One key of an enum declaration, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub key: String,
    pub value: EnumValue,
}

impl EnumMember {
    /// The explicit raw value with numeric separators stripped, so values
    /// like `1_002` normalize to `1002` before emission.
    pub fn normalized_value(&self) -> Option<String> {
        self.value.value.as_ref().map(|v| v.replace('_', ""))
    }

    pub fn doc(&self) -> Option<&DocInfo> {
        self.value.extra_info.as_ref()
    }
}

/// One enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Enum {
    pub identifier: String,
    /// Keys in declaration order. The extractor emits a JSON object; entry
    /// order is preserved as it appears in the document.
    #[serde(default, deserialize_with = "ordered_values")]
    pub values: Vec<EnumMember>,
    #[serde(default)]
    pub extra_info: Option<DocInfo>,
}

impl Enum {
    pub fn doc(&self) -> Option<&DocInfo> {
        self.extra_info.as_ref()
    }
}

/// The extractor's output for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileRecord {
    /// Path of the source file, as reported by the extractor.
    pub file_name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub models: Vec<Model>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub enums: Vec<Enum>,
}

/// The extractor emits `null` for absent collections; map that to empty.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes an enum's `Values` object into a vector so declaration
/// order survives; a map type would lose it.
fn ordered_values<'de, D>(deserializer: D) -> Result<Vec<EnumMember>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ValuesVisitor;

    impl<'de> Visitor<'de> for ValuesVisitor {
        type Value = Vec<EnumMember>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of enum keys to value records")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, EnumValue>()? {
                members.push(EnumMember { key, value });
            }
            Ok(members)
        }
    }

    deserializer.deserialize_map(ValuesVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_name_takes_first_token() {
        let member = Member {
            identifier: "Count = 3".to_string(),
            raw_type: "int".to_string(),
            extra_info: None,
        };
        assert_eq!(member.name(), "Count");

        let plain = Member {
            identifier: "Name".to_string(),
            raw_type: "string?".to_string(),
            extra_info: None,
        };
        assert_eq!(plain.name(), "Name");
        assert!(plain.is_optional());
    }

    #[test]
    fn test_emits_default() {
        let mut member = Member {
            identifier: "Id".to_string(),
            raw_type: "int".to_string(),
            extra_info: None,
        };
        assert!(member.emits_default());

        member.extra_info = Some(DocInfo {
            emit_default_value: false,
            ..DocInfo::default()
        });
        assert!(!member.emits_default());
    }

    #[test]
    fn test_members_order_fields_then_properties() {
        let model = Model {
            model_name: "User".to_string(),
            fields: vec![Member {
                identifier: "id".to_string(),
                raw_type: "int".to_string(),
                extra_info: None,
            }],
            properties: vec![Member {
                identifier: "Name".to_string(),
                raw_type: "string".to_string(),
                extra_info: None,
            }],
            base_classes: vec![],
            extra_info: None,
        };

        let names: Vec<&str> = model.members().map(|m| m.name()).collect();
        assert_eq!(names, vec!["id", "Name"]);
    }

    #[test]
    fn test_deserialize_file_record() {
        let json = r#"{
            "FileName": "/src/Models/User.cs",
            "Models": [{
                "ModelName": "User",
                "Fields": [],
                "Properties": [
                    { "Identifier": "Id", "Type": "int" },
                    { "Identifier": "Name", "Type": "string?" }
                ],
                "BaseClasses": null,
                "ExtraInfo": { "Obsolete": true, "ObsoleteMessage": "use Account" }
            }],
            "Enums": [{
                "Identifier": "Color",
                "Values": {
                    "Red": { "Value": null },
                    "Green": { "Value": "5" }
                }
            }]
        }"#;

        let file: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(file.file_name, "/src/Models/User.cs");

        let model = &file.models[0];
        assert_eq!(model.model_name, "User");
        assert!(model.base_classes.is_empty());
        assert_eq!(model.members().count(), 2);
        assert!(model.doc().unwrap().obsolete);

        let enum_ = &file.enums[0];
        assert_eq!(enum_.identifier, "Color");
        let keys: Vec<&str> = enum_.values.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["Red", "Green"]);
        assert_eq!(enum_.values[0].value.value, None);
        assert_eq!(enum_.values[1].value.value.as_deref(), Some("5"));
    }

    #[test]
    fn test_enum_value_normalization() {
        let member = EnumMember {
            key: "Flag".to_string(),
            value: EnumValue {
                value: Some("0b_0000_0100".to_string()),
                extra_info: None,
            },
        };
        assert_eq!(member.normalized_value().as_deref(), Some("0b00000100"));

        let thousands = EnumMember {
            key: "Big".to_string(),
            value: EnumValue {
                value: Some("1_002".to_string()),
                extra_info: None,
            },
        };
        assert_eq!(thousands.normalized_value().as_deref(), Some("1002"));
    }

    #[test]
    fn test_doc_info_has_content() {
        assert!(!DocInfo::default().has_content());
        assert!(DocInfo {
            summary: Some("A user.".to_string()),
            ..DocInfo::default()
        }
        .has_content());
        assert!(DocInfo {
            obsolete: true,
            ..DocInfo::default()
        }
        .has_content());
        assert!(!DocInfo {
            summary: Some("   ".to_string()),
            ..DocInfo::default()
        }
        .has_content());
    }
}
