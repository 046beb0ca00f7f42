//! The contract between the render engine and element types.

use std::fmt;

use crate::attributes::AttributeWriter;
use crate::error::RenderError;
use crate::node::Node;

/// A markup element that the render engine can serialize.
///
/// Implementors describe a tag: its name, which of its tags are printed,
/// its attributes and its children. The engine never inspects concrete
/// element types; it walks trees of `Rc<dyn Element>`.
///
/// # Example
///
/// ```
/// use reinhardt_markup_core::{AttributeWriter, Element, Node, RenderError};
///
/// #[derive(Debug)]
/// struct Badge {
///     label: String,
///     children: Vec<Node>,
/// }
///
/// impl Element for Badge {
///     fn tag_name(&self) -> &'static str {
///         "span"
///     }
///
///     fn write_attributes(&self, out: &mut AttributeWriter) -> Result<(), RenderError> {
///         out.text("class", Some("badge"));
///         out.text("title", Some(self.label.as_str()));
///         Ok(())
///     }
///
///     fn child_nodes(&self) -> &[Node] {
///         &self.children
///     }
/// }
///
/// let badge = Badge { label: "new".into(), children: vec![Node::text("3")] };
/// assert_eq!(
///     Node::element(badge).render_to_string().unwrap(),
///     "<span class=badge title=new>3</span>"
/// );
/// ```
pub trait Element: fmt::Debug {
	/// Lowercase tag name.
	fn tag_name(&self) -> &'static str;

	/// Whether the start tag is printed when the element has no attributes.
	fn start_tag(&self) -> bool {
		true
	}

	/// Whether the end tag is printed.
	fn end_tag(&self) -> bool {
		true
	}

	/// Literal markup emitted before the element.
	fn preamble(&self) -> Option<&'static str> {
		None
	}

	/// Writes every set attribute, in declaration order.
	fn write_attributes(&self, out: &mut AttributeWriter) -> Result<(), RenderError> {
		let _ = out;
		Ok(())
	}

	/// Content children.
	fn child_nodes(&self) -> &[Node] {
		&[]
	}

	/// Verbatim output replacing the whole tag, attributes and children.
	fn literal(&self) -> Option<Literal<'_>> {
		None
	}
}

/// Verbatim markup of a literal block: open tag, unescaped payload, close tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
	open: &'static str,
	payload: &'a str,
	close: &'static str,
}

impl<'a> Literal<'a> {
	/// Creates a literal from its three parts.
	pub fn new(open: &'static str, payload: &'a str, close: &'static str) -> Self {
		Self {
			open,
			payload,
			close,
		}
	}

	pub fn open(&self) -> &'static str {
		self.open
	}

	pub fn payload(&self) -> &'a str {
		self.payload
	}

	pub fn close(&self) -> &'static str {
		self.close
	}
}
