//! # Reinhardt Markup
//!
//! Typed HTML construction with lazy, streaming rendering.
//!
//! Documents are trees of [`Node`](core::Node)s built from typed elements.
//! Rendering walks the tree and yields the markup as a sequence of string
//! fragments, evaluating deferred content only when the walk reaches it.
//! A failure part-way through still produces the fragments emitted so far,
//! followed by the end tags that close every open element.
//!
//! ## Feature Flags
//!
//! - `tags` (default) - Typed HTML element catalog, helpers and literal blocks
//!
//! Without `tags`, only the render engine in [`core`] is available, which is
//! enough to render custom [`Element`](core::Element) implementations.
//!
//! ## Quick Example
//!
//! ```
//! # #[cfg(feature = "tags")]
//! # {
//! use reinhardt_markup::prelude::*;
//!
//! let names = ["ada", "grace"];
//! let page = html_document(
//!     "Users",
//!     Ul::new().child(Node::lazy(move || names.map(|n| Li::new().child(n)))),
//! );
//!
//! assert_eq!(
//!     render_to_string(page).unwrap(),
//!     "<!DOCTYPE html><head><title>Users</title>\
//!      <meta http-equiv=Content-type content='text/html; charset=utf-8'>\
//!      <body><ul><li>ada<li>grace</ul>"
//! );
//! # }
//! ```

pub mod core;
#[cfg(feature = "tags")]
pub mod tags;

pub mod prelude {
	// Render engine - always available
	pub use crate::core::{
		Element, IntoNode, Node, RenderError, RenderOptions, render_fragments,
		render_fragments_with, render_to_string, render_to_string_with, write_to, write_to_file,
	};

	#[cfg(feature = "tags")]
	pub use reinhardt_markup_tags::prelude::*;
}
