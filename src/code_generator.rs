use std::borrow::Cow;

use log::debug;
use prost_types::field_descriptor_proto::Type;
use prost_types::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto,
};

use crate::declarations::Declarations;
use crate::error::Error;
use crate::ident::{flatten, qualify};

/// Compiles the message and enum descriptors of a single file into
/// TypeScript declarations, registering each into the shared
/// [`Declarations`] accumulator.
pub struct CodeGenerator<'a> {
    package: String,
    declarations: &'a mut Declarations,
}

impl<'a> CodeGenerator<'a> {
    pub fn compile(
        file: &FileDescriptorProto,
        declarations: &mut Declarations,
    ) -> Result<(), Error> {
        if file.syntax() != "proto3" {
            return Err(Error::unsupported_syntax(file.name(), file.syntax()));
        }

        let mut code_gen = CodeGenerator {
            package: file.package().to_string(),
            declarations,
        };

        debug!("file: {:?}, package: {:?}", file.name(), code_gen.package);

        for message in &file.message_type {
            code_gen.append_message("", message)?;
        }

        for desc in &file.enum_type {
            code_gen.append_enum("", desc);
        }

        Ok(())
    }

    /// Appends a message and its nested types, depth first: nested enums and
    /// nested messages register before their container, so the shared table
    /// holds innermost declarations ahead of outer ones.
    fn append_message(&mut self, prefix: &str, message: &DescriptorProto) -> Result<(), Error> {
        debug!("  message: {:?}", message.name());

        let message_name = qualify(prefix, message.name());

        for inner in &message.enum_type {
            self.append_enum(&message_name, inner);
        }

        for inner in &message.nested_type {
            self.append_message(&message_name, inner)?;
        }

        let mut buf = String::new();
        buf.push_str("export interface ");
        buf.push_str(&message_name);
        buf.push_str(" {\n");
        for field in &message.field {
            self.append_field(&mut buf, field)?;
        }
        buf.push('}');

        self.declarations.insert_message(message_name, buf);
        Ok(())
    }

    fn append_enum(&mut self, prefix: &str, desc: &EnumDescriptorProto) {
        debug!("  enum: {:?}", desc.name());

        let enum_name = qualify(prefix, desc.name());

        let mut buf = String::new();
        buf.push_str("export const enum ");
        buf.push_str(&enum_name);
        buf.push_str(" {\n");
        for value in &desc.value {
            buf.push_str("  ");
            buf.push_str(value.name());
            buf.push_str(" = ");
            buf.push_str(&value.number().to_string());
            buf.push_str(",\n");
        }
        buf.push('}');

        self.declarations.insert_enum(enum_name, buf);
    }

    fn append_field(&mut self, buf: &mut String, field: &FieldDescriptorProto) -> Result<(), Error> {
        let ty = self.resolve_type(field)?;

        debug!("    field: {:?}, type: {:?}", field.name(), ty);

        buf.push_str("  ");
        buf.push_str(field.name());
        buf.push_str(": ");
        buf.push_str(&ty);
        buf.push_str(";\n");
        Ok(())
    }

    fn resolve_type(&mut self, field: &FieldDescriptorProto) -> Result<Cow<'static, str>, Error> {
        let type_ = match Type::try_from(field.r#type.unwrap_or_default()) {
            Ok(type_) => type_,
            Err(_) => return Err(Error::unknown_field_type(field)),
        };

        match type_ {
            Type::Float
            | Type::Double
            | Type::Int32
            | Type::Int64
            | Type::Uint32
            | Type::Uint64
            | Type::Sint32
            | Type::Sint64
            | Type::Fixed32
            | Type::Fixed64
            | Type::Sfixed32
            | Type::Sfixed64 => Ok(Cow::Borrowed("number")),
            Type::Bool => Ok(Cow::Borrowed("boolean")),
            // Bytes fields are represented textually rather than as a
            // binary buffer type.
            Type::String | Type::Bytes => Ok(Cow::Borrowed("string")),
            Type::Message => {
                let name = flatten(field.type_name(), &self.package);
                self.declarations.record_message_reference(name.clone());
                Ok(Cow::Owned(name))
            }
            Type::Enum => {
                let name = flatten(field.type_name(), &self.package);
                self.declarations.record_enum_reference(name.clone());
                Ok(Cow::Owned(name))
            }
            Type::Group => Err(Error::unknown_field_type(field)),
        }
    }
}
