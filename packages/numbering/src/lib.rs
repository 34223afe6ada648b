//! Object model for the WordprocessingML numbering part (`numbering.xml`).
//!
//! The part holds the document's list definitions: abstract numbering
//! templates, the concrete instances that bind to them, per-instance level
//! overrides, and the `<w:numPr>` properties paragraphs use to reference
//! an instance. All mutation goes through schema-constrained operations
//! from [`wordml_oxml`], so the tree stays a valid instance of the WML
//! content models throughout.
//!
//! # Example
//!
//! ```
//! use wordml_numbering::NumberingPart;
//!
//! let mut part = NumberingPart::new();
//! let num = part.add_num(0).unwrap();
//! assert_eq!(num.num_id(part.tree()).unwrap(), 1);
//!
//! let found = part.num_with_id(1).unwrap();
//! assert_eq!(found.node(), num.node());
//! ```
//!
//! # Architecture
//!
//! - [`part`]: the `<w:numbering>` root, numId allocation and lookup
//! - [`abstract_num`]: `<w:abstractNum>` templates
//! - [`num`]: `<w:num>` concrete instances
//! - [`level`]: `<w:lvl>` definitions and `<w:lvlOverride>` overrides
//! - [`num_pr`]: `<w:numPr>` paragraph numbering properties
//! - [`schema`]: static element schemas for the part
//! - [`error`]: error types and Result alias

pub mod abstract_num;
pub mod error;
pub mod level;
pub mod num;
pub mod num_pr;
pub mod part;
pub mod schema;

pub use abstract_num::AbstractNum;
pub use error::{NumberingError, Result};
pub use level::{Level, LevelOverride};
pub use num::Num;
pub use num_pr::NumberingProperties;
pub use part::NumberingPart;
