//! Schema-constrained mutable XML element trees.
//!
//! This crate provides the generic node layer that typed part models (such
//! as the numbering part) are built on: a mutable element tree plus
//! declarative per-element schemas describing child cardinality, relative
//! child order and attribute value types. The schema-aware operations keep
//! a tree a valid instance of its schema under arbitrary mutation.
//!
//! # Example
//!
//! ```
//! use wordml_oxml::{AttributeRule, AttributeType, Cardinality, ChildRule, ElementSchema, Tree};
//!
//! const LIST: ElementSchema = ElementSchema {
//!     tag: "list",
//!     children: &[ChildRule {
//!         tag: "item",
//!         cardinality: Cardinality::ZeroOrMore,
//!         successors: &[],
//!     }],
//!     attributes: &[AttributeRule {
//!         name: "id",
//!         ty: AttributeType::DecimalNumber,
//!     }],
//! };
//!
//! let mut tree = Tree::new();
//! let list = tree.new_element("list");
//! tree.set_attribute(list, &LIST, "id", "3").unwrap();
//! assert!(tree.set_attribute(list, &LIST, "id", "-1").is_err());
//! ```
//!
//! # Architecture
//!
//! - [`tree`]: arena-backed element tree and raw mutation primitives
//! - [`schema`]: declarative cardinality/ordering/attribute tables
//! - [`simple_types`]: attribute value validators
//! - [`node`]: schema-constrained operations over the tree
//! - [`parse`]: XML text to tree (roxmltree)
//! - [`serialize`]: tree to XML text
//! - [`error`]: error types and Result alias

pub mod error;
pub mod node;
pub mod parse;
pub mod schema;
pub mod serialize;
pub mod simple_types;
pub mod tree;

pub use error::{OxmlError, Result};
pub use parse::parse;
pub use schema::{AttributeRule, Cardinality, ChildRule, ElementSchema};
pub use serialize::serialize;
pub use simple_types::AttributeType;
pub use tree::{NodeId, Tree};
