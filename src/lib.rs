//! `protoc-gen-dts` is a `protoc` plugin which generates TypeScript
//! declaration files for proto3 messages and enums.
//!
//! For each requested `.proto` file the plugin emits one
//! `{package}_pb.d.ts` artifact containing an `export const enum` per enum
//! type and an `export interface` per message type. Only static type shapes
//! are generated; no runtime (de)serialization code is produced, and
//! services, maps, oneofs, and field multiplicity are not represented.
//!
//! ## Example
//!
//! Given `point.proto`:
//!
//! ```proto
//! syntax = "proto3";
//!
//! package demo;
//!
//! message Point {
//!     int32 x = 1;
//!     int32 y = 2;
//! }
//! ```
//!
//! running `protoc --dts_out=. point.proto` writes `demo_pb.d.ts`:
//!
//! ```typescript
//! export interface Point {
//!   x: number;
//!   y: number;
//! }
//! ```

mod code_generator;
mod declarations;
mod error;
mod ident;

use prost_types::compiler::{code_generator_response, CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::FileDescriptorProto;

pub use crate::declarations::Declarations;
pub use crate::error::Error;

use crate::code_generator::CodeGenerator;

/// Compiles a set of requested file descriptors into `(name, content)`
/// artifacts.
///
/// Every file must use proto3 syntax. Declarations accumulate across the
/// whole slice in a single [`Declarations`] table, so each artifact contains
/// the declarations of its own file and of every file compiled before it.
/// Cross-reference validation runs after each file against that cumulative
/// table; the first error aborts the run.
pub fn generate(files: &[FileDescriptorProto]) -> Result<Vec<(String, String)>, Error> {
    let mut declarations = Declarations::default();
    let mut artifacts = Vec::with_capacity(files.len());

    for file in files {
        CodeGenerator::compile(file, &mut declarations)?;
        declarations.check_references()?;
        artifacts.push((format!("{}_pb.d.ts", file.package()), declarations.assemble()));
    }

    Ok(artifacts)
}

/// Runs the code generator against a decoded plugin request and converts the
/// outcome into a response.
///
/// Only the files named in `file_to_generate` are compiled, in their
/// original order; the remaining entries of `proto_file` are dependencies
/// and produce no artifacts. The request's `parameter` field is ignored.
///
/// The response always carries exactly one outcome: the full artifact list
/// on success, or the single fatal error's message, never both.
pub fn run_plugin(request: CodeGeneratorRequest) -> CodeGeneratorResponse {
    let CodeGeneratorRequest {
        file_to_generate,
        proto_file,
        ..
    } = request;

    let files = proto_file
        .into_iter()
        .filter(|file| file_to_generate.iter().any(|name| name == file.name()))
        .collect::<Vec<_>>();

    match generate(&files) {
        Ok(artifacts) => CodeGeneratorResponse {
            file: artifacts
                .into_iter()
                .map(|(name, content)| code_generator_response::File {
                    name: Some(name),
                    content: Some(content),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        },
        Err(error) => CodeGeneratorResponse {
            error: Some(error.to_string()),
            ..Default::default()
        },
    }
}
