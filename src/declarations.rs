//! The accumulated output of one plugin invocation.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::error::Error;

/// Declaration tables and referenced-name sets shared across every file
/// compiled in one invocation.
///
/// Declarations are keyed by flattened name and emitted in registration
/// order. The tables are deliberately never reset between files: a type
/// registered while compiling one file remains visible to every later file
/// in the run, and every later artifact re-emits it. Registering a name
/// twice replaces the declaration text but keeps its original position.
///
/// Note that because [`check_references`](Declarations::check_references)
/// runs against the cumulative state once per file, a reference is satisfied
/// by a declaration from an earlier-processed file but not by one that only
/// appears in a later-processed file.
#[derive(Debug, Default)]
pub struct Declarations {
    enum_order: Vec<String>,
    enums: HashMap<String, String>,
    message_order: Vec<String>,
    messages: HashMap<String, String>,
    referenced_enums: HashSet<String>,
    referenced_messages: HashSet<String>,
}

impl Declarations {
    /// Registers an enum declaration under its flattened name.
    pub(crate) fn insert_enum(&mut self, name: String, declaration: String) {
        if self.enums.insert(name.clone(), declaration).is_none() {
            self.enum_order.push(name);
        }
    }

    /// Registers a message declaration under its flattened name.
    pub(crate) fn insert_message(&mut self, name: String, declaration: String) {
        if self.messages.insert(name.clone(), declaration).is_none() {
            self.message_order.push(name);
        }
    }

    /// Records that a field referenced the enum with the given flattened name.
    pub(crate) fn record_enum_reference(&mut self, name: String) {
        self.referenced_enums.insert(name);
    }

    /// Records that a field referenced the message with the given flattened
    /// name.
    pub(crate) fn record_message_reference(&mut self, name: String) {
        self.referenced_messages.insert(name);
    }

    /// Checks that every referenced name has a registered declaration.
    ///
    /// Aggregates every missing name rather than stopping at the first, and
    /// sorts both lists so the resulting error message is deterministic.
    pub fn check_references(&self) -> Result<(), Error> {
        let mut missing_enums = self
            .referenced_enums
            .iter()
            .filter(|name| !self.enums.contains_key(*name))
            .cloned()
            .collect::<Vec<_>>();
        let mut missing_messages = self
            .referenced_messages
            .iter()
            .filter(|name| !self.messages.contains_key(*name))
            .cloned()
            .collect::<Vec<_>>();

        if missing_enums.is_empty() && missing_messages.is_empty() {
            return Ok(());
        }

        missing_enums.sort();
        missing_messages.sort();
        Err(Error::MissingTypeReference {
            missing_enums,
            missing_messages,
        })
    }

    /// Assembles the artifact body: every enum declaration in registration
    /// order, then every message declaration in registration order, joined
    /// by blank lines.
    pub fn assemble(&self) -> String {
        self.enum_order
            .iter()
            .map(|name| self.enums[name].as_str())
            .chain(
                self.message_order
                    .iter()
                    .map(|name| self.messages[name].as_str()),
            )
            .join("\n\n")
    }
}
