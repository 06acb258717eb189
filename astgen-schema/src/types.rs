//! Definition table data model.
//!
//! A [`DefinitionTable`] is an ordered list of [`NodeSpec`]s, each a node
//! name plus its ordered [`FieldSpec`]s. Values are validated on
//! construction and immutable afterwards.

use crate::error::SchemaError;
use crate::validation::{validate_field, validate_node};
use std::collections::HashMap;
use std::fmt;

/// A single `(type, name)` field of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    type_name: String,
    name: String,
}

impl FieldSpec {
    /// Creates a validated field.
    ///
    /// # Errors
    /// Returns `SchemaError` if `name` is not an identifier or `type_name`
    /// is not a type reference.
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Result<Self, SchemaError> {
        let type_name = type_name.into();
        let name = name.into();
        validate_field(&type_name, &name)?;
        Ok(Self { type_name, name })
    }

    /// Type reference as written (`Expr*`, `Token`, ...).
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Field identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// One node definition: a derived type name and its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    name: String,
    fields: Vec<FieldSpec>,
}

impl NodeSpec {
    /// Creates a validated node definition.
    ///
    /// # Errors
    /// Returns `SchemaError` if the name is invalid, `fields` is empty, or
    /// two fields share a name.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let name = name.into();
        validate_node(&name, &fields)?;
        Ok(Self { name, fields })
    }

    /// Node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order. Never empty.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Number of fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Display for NodeSpec {
    /// Formats the node back into entry syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Ordered collection of node definitions.
///
/// Insertion order is emission order.
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    nodes: Vec<NodeSpec>,
    node_map: HashMap<String, usize>,
}

impl DefinitionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateName` if a node with the same name
    /// is already present.
    pub fn push(&mut self, node: NodeSpec) -> Result<(), SchemaError> {
        if self.node_map.contains_key(node.name()) {
            return Err(SchemaError::DuplicateName {
                name: node.name().to_string(),
            });
        }
        self.node_map.insert(node.name().to_string(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Looks up a node by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NodeSpec> {
        self.node_map.get(name).map(|&idx| &self.nodes[idx])
    }

    /// Returns true if a node with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Nodes in table order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeSpec] {
        &self.nodes
    }

    /// Iterates nodes in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeSpec> {
        self.nodes.iter()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the table has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'a> IntoIterator for &'a DefinitionTable {
    type Item = &'a NodeSpec;
    type IntoIter = std::slice::Iter<'a, NodeSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
