//! Build indented, multi-line text without tracking newlines and indentation by hand
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use linebuild::TextAccumulator;
//!
//! let mut out = TextAccumulator::new("Inventory");
//! out.indent_increase()
//!     .header("fruit")
//!     .indexed_list(["apple", "pear"])
//!     .header("stock")
//!     .values(&BTreeMap::from([("apple", 3), ("pear", 0)]));
//!
//! assert_eq!(
//!     out.render(),
//!     "Inventory\nfruit\n\t[00] apple\n\t[01] pear\nstock\n\t[\"apple\"]: 3\n\t[\"pear\"]: 0"
//! );
//! ```

pub mod accumulator;
mod conditional;
pub mod error;
pub mod indentor;
pub mod options;
pub mod shape;
pub mod template;

pub use accumulator::TextAccumulator;
pub use error::{Error, Result};
pub use options::{Options, ReadMode};
pub use shape::{Scalar, Shape, Shaped};
