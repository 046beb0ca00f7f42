//! # Reinhardt Markup Core
//!
//! Typed markup trees rendered lazily to HTML fragments.
//!
//! ## Overview
//!
//! A tree is made of [`Node`] values: escaped text, raw markup, nested
//! [`Element`]s, sequences, and content computed on demand. Rendering walks
//! the tree depth-first and produces a [`Fragments`] stream; callers either
//! collect it into a string or forward each fragment to a sink as it is
//! produced.
//!
//! ## Modules
//!
//! - [`escape`]: HTML escaping and the attribute quoting rule
//! - [`node`]: the content model and the [`IntoNode`] conversion trait
//! - [`element`]: the contract implemented by element types
//! - [`attributes`]: typed attribute serialization
//! - [`render`]: the streaming render engine
//! - [`options`]: rendering options, loadable from TOML
//! - [`sink`]: writer and file sinks
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```
//! use reinhardt_markup_core::{Node, render_to_string};
//!
//! let page = Node::sequence([
//!     Node::text("1 < 2"),
//!     Node::deferred(|| "computed"),
//! ]);
//! assert_eq!(render_to_string(page).unwrap(), "1 &lt; 2computed");
//! ```

pub mod attributes;
pub mod element;
pub mod error;
pub mod escape;
pub mod node;
pub mod options;
pub mod render;
pub mod sink;

pub use attributes::{AttributeWriter, DataAttributes, FlagSet, Token};
pub use element::{Element, Literal};
pub use error::{BoxError, RenderError};
pub use escape::{attribute_value, html_escape};
pub use node::{Deferred, IntoNode, LazySequence, Node, NodeIter};
pub use options::{ConfigError, RenderOptions};
pub use render::{
	Fragments, render_fragments, render_fragments_with, render_to_string, render_to_string_with,
	to_raw,
};
pub use sink::{write_to, write_to_file};
