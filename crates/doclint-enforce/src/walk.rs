//! Depth-first traversal of a schema file that collects every message under
//! its fully-qualified dotted name.
//!
//! Messages push a name segment while their children are visited. Services
//! are descended into without pushing, so a message declared inside a
//! service is qualified relative to whatever message nesting surrounds the
//! service (normally none).

use std::collections::btree_map::{self, BTreeMap};

use doclint_core::types::{Element, Message};

/// Qualified name → message, for a single file.
///
/// Built fresh by [`collect_messages`] for each file and dropped once the
/// file has been reported, so nothing carries over between files. Iteration
/// is ordered by qualified name.
#[derive(Debug, Default)]
pub struct MessageRegistry<'a> {
    entries: BTreeMap<String, &'a Message>,
}

impl<'a> MessageRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` under `qualified_name`.
    ///
    /// On a collision a non-extension entry is never displaced by an
    /// extension; otherwise the later declaration replaces the earlier one.
    /// Returns the entry that lost, if any.
    pub fn insert(&mut self, qualified_name: String, message: &'a Message) -> Option<&'a Message> {
        match self.entries.entry(qualified_name) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(message);
                None
            }
            btree_map::Entry::Occupied(mut slot) => {
                let existing = *slot.get();
                if message.is_extend && !existing.is_extend {
                    tracing::debug!(
                        name = %slot.key(),
                        "extension shares a qualified name with a message, keeping the message"
                    );
                    return Some(message);
                }
                if !message.is_extend && !existing.is_extend {
                    tracing::warn!(
                        name = %slot.key(),
                        first = %existing.position,
                        second = %message.position,
                        "duplicate qualified message name, keeping the later declaration"
                    );
                }
                Some(slot.insert(message))
            }
        }
    }

    pub fn get(&self, qualified_name: &str) -> Option<&'a Message> {
        self.entries.get(qualified_name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in qualified-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a Message)> + '_ {
        self.entries.iter().map(|(name, msg)| (name.as_str(), *msg))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

/// Walk `elements` (a file's top-level declarations) and return every message
/// found, keyed by qualified name.
pub fn collect_messages(elements: &[Element]) -> MessageRegistry<'_> {
    let mut registry = MessageRegistry::new();
    let mut enclosing: Vec<&str> = Vec::new();
    visit_elements(elements, &mut enclosing, &mut registry);
    registry
}

/// Join enclosing message names and the local name with `.`.
pub fn qualified_name(enclosing: &[&str], name: &str) -> String {
    if enclosing.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", enclosing.join("."), name)
    }
}

fn visit_elements<'a>(
    elements: &'a [Element],
    enclosing: &mut Vec<&'a str>,
    registry: &mut MessageRegistry<'a>,
) {
    for element in elements {
        visit(element, enclosing, registry);
    }
}

fn visit<'a>(element: &'a Element, enclosing: &mut Vec<&'a str>, registry: &mut MessageRegistry<'a>) {
    match element {
        Element::Message(message) => visit_message(message, enclosing, registry),
        Element::Service(service) => visit_elements(&service.elements, enclosing, registry),
        Element::Rpc(_)
        | Element::Field(_)
        | Element::Enum(_)
        | Element::Oneof(_)
        | Element::Option(_) => {}
    }
}

fn visit_message<'a>(
    message: &'a Message,
    enclosing: &mut Vec<&'a str>,
    registry: &mut MessageRegistry<'a>,
) {
    enclosing.push(&message.name);
    visit_elements(&message.elements, enclosing, registry);
    enclosing.pop();

    registry.insert(qualified_name(enclosing, &message.name), message);
}
