//! Render engine: nodes, elements, attribute output and streaming.
//!
//! # Examples
//!
//! ```
//! use reinhardt_markup::core::{Node, render_to_string};
//!
//! let node = Node::sequence(["a < b", " and "]);
//! assert_eq!(render_to_string(node).unwrap(), "a &lt; b and ");
//! ```

pub use reinhardt_markup_core::*;
