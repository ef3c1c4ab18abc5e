//! Code generation errors.

use std::error;
use std::fmt;

use itertools::Itertools;
use prost_types::FieldDescriptorProto;

/// A fatal code generation error.
///
/// Any variant aborts the whole invocation. The plugin binary reports the
/// error through the `error` field of the `CodeGeneratorResponse`; no
/// artifacts are emitted alongside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A requested file uses a syntax other than proto3.
    UnsupportedSyntax {
        /// Name of the offending `.proto` file.
        file: String,
        /// The syntax value found in the file descriptor.
        syntax: String,
    },

    /// A field uses a type the generator cannot express, either the legacy
    /// group type or an unrecognized type tag.
    UnknownFieldType {
        /// The raw type tag from the field descriptor.
        type_value: i32,
        /// The fully qualified type name, if the descriptor carried one.
        type_name: String,
    },

    /// One or more referenced types never resolved to a declaration.
    ///
    /// Both lists are complete and sorted; the check aggregates every
    /// missing name before reporting rather than stopping at the first.
    MissingTypeReference {
        missing_enums: Vec<String>,
        missing_messages: Vec<String>,
    },
}

impl Error {
    pub(crate) fn unsupported_syntax(file: &str, syntax: &str) -> Error {
        Error::UnsupportedSyntax {
            file: file.to_string(),
            syntax: syntax.to_string(),
        }
    }

    pub(crate) fn unknown_field_type(field: &FieldDescriptorProto) -> Error {
        Error::UnknownFieldType {
            type_value: field.r#type.unwrap_or_default(),
            type_name: field.type_name().to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnsupportedSyntax { file, syntax } => {
                write!(f, "Only proto3 supported. Found {} in {}", syntax, file)
            }
            Error::UnknownFieldType {
                type_value,
                type_name,
            } => {
                write!(f, "Unknown field type {}/{}", type_value, type_name)
            }
            Error::MissingTypeReference {
                missing_enums,
                missing_messages,
            } => {
                write!(f, "Error outputting file:")?;
                if !missing_enums.is_empty() {
                    write!(f, "\n  missing enums: {}", missing_enums.iter().join(", "))?;
                }
                if !missing_messages.is_empty() {
                    write!(
                        f,
                        "\n  missing messages: {}",
                        missing_messages.iter().join(", ")
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_syntax_display() {
        let error = Error::unsupported_syntax("legacy.proto", "proto2");
        assert_eq!(
            "Only proto3 supported. Found proto2 in legacy.proto",
            error.to_string(),
        );
    }

    #[test]
    fn test_missing_type_reference_display() {
        let error = Error::MissingTypeReference {
            missing_enums: vec!["Color".to_string()],
            missing_messages: vec!["Point".to_string(), "Rect".to_string()],
        };
        assert_eq!(
            "Error outputting file:\n  missing enums: Color\n  missing messages: Point, Rect",
            error.to_string(),
        );
    }

    #[test]
    fn test_missing_type_reference_display_enums_only() {
        let error = Error::MissingTypeReference {
            missing_enums: vec!["Mode".to_string()],
            missing_messages: vec![],
        };
        assert_eq!(
            "Error outputting file:\n  missing enums: Mode",
            error.to_string(),
        );
    }
}
