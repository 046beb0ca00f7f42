//! Typed HTML element catalog
//!
//! This module provides access to reinhardt-markup-tags: one struct per HTML
//! element, the global attributes shared by all of them, the enumerated
//! attribute values, and literal `<script>`/`<style>` blocks.
//!
//! ## Example
//!
//! ```
//! use reinhardt_markup::tags::{HtmlElement, Td, Tr};
//! use reinhardt_markup::core::render_to_string;
//!
//! let row = Tr::new().child(Td::new().child(1)).child(Td::new().child(2));
//! assert_eq!(render_to_string(row).unwrap(), "<tr><td>1<td>2");
//! ```

// Re-export all reinhardt-markup-tags functionality
pub use reinhardt_markup_tags::*;
