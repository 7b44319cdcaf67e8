//! TypeScript declaration generation for typeshift.
//!
//! The core is a pure transformation: given a [`Config`] and the extractor's
//! file records, [`Converter::convert`] produces one declaration payload.
//! No I/O happens here; locating sources, running the extractor, and writing
//! the output file are the CLI's concern.
//!
//! The core never fails on malformed *shape* input: unrecognized type tokens
//! pass through verbatim and missing optional metadata defaults to absent.
//! Structural validity of the input records is enforced upstream when they
//! are deserialized.
//!
//! # Example
//!
//! ```
//! use typeshift_codegen::{Config, Converter};
//!
//! let config = Config::default();
//! let files: Vec<typeshift_ast::FileRecord> = serde_json::from_str(
//!     r#"[{ "FileName": "User.cs",
//!           "Models": [{ "ModelName": "User",
//!                        "Properties": [{ "Identifier": "Id", "Type": "int" }] }] }]"#,
//! )
//! .unwrap();
//!
//! let output = Converter::new(&config).convert(&files);
//! assert!(output.contains("export interface User {"));
//! ```

pub mod casing;
pub mod comment;
pub mod config;
pub mod render;
pub mod types;

pub use config::{CamelCaseOptions, Config, PropertyNameSource};
pub use render::Converter;
pub use types::TypeMap;
