//! # Reinhardt Markup Tags
//!
//! Typed HTML elements for the reinhardt-markup render engine.
//!
//! ## Overview
//!
//! Each HTML element is a struct with strongly typed attribute fields, the
//! shared [`GlobalAttributes`], open-ended `data-*` attributes and a list of
//! content children. Start and end tags that HTML allows to be omitted are
//! omitted unless [`RenderOptions::all_tags`](reinhardt_markup_core::RenderOptions)
//! is set.
//!
//! ## Example
//!
//! ```
//! use reinhardt_markup_tags::prelude::*;
//!
//! let form = Form::new()
//!     .action("/login")
//!     .method(Method::Post)
//!     .child(Input::new().type_(InputType::Text).name("user"))
//!     .child(Button::new().type_(ButtonType::Submit).child("Sign in"));
//!
//! assert_eq!(
//!     form.into_node().render_to_string().unwrap(),
//!     "<form action=/login method=post><input name=user type=text>\
//!      <button type=submit>Sign in</button></form>"
//! );
//! ```

#[macro_use]
mod macros;

pub mod elements;
pub mod enums;
pub mod global;
pub mod helpers;
pub mod literal;

pub use elements::*;
pub use enums::*;
pub use global::{GlobalAttributes, HtmlElement};
pub use helpers::{accel, html_document, html_table};
pub use literal::{ScriptLiteral, StyleLiteral};

/// Everything needed to build and render documents.
pub mod prelude {
	pub use crate::elements::*;
	pub use crate::enums::*;
	pub use crate::global::{GlobalAttributes, HtmlElement};
	pub use crate::helpers::{accel, html_document, html_table};
	pub use crate::literal::{ScriptLiteral, StyleLiteral};
	pub use reinhardt_markup_core::{
		IntoNode, Node, RenderError, RenderOptions, render_to_string, render_to_string_with,
	};
}
