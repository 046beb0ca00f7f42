//! Content values accepted by the render engine.
//!
//! A [`Node`] is anything that may appear as the content of an element: text,
//! nested elements, sequences of further nodes, or values that are computed
//! only when the render walk reaches them.
//!
//! ## Example
//!
//! ```
//! use reinhardt_markup_core::{IntoNode, Node};
//!
//! let node = ("Tom & Jerry", Node::raw("<br>"), 42).into_node();
//! assert_eq!(node.render_to_string().unwrap(), "Tom &amp; Jerry<br>42");
//! ```

use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::element::Element;
use crate::error::{BoxError, RenderError};
use crate::options::RenderOptions;
use crate::render::{self, Fragments};

/// Iterator type produced by lazy content sequences.
pub type NodeIter = Box<dyn Iterator<Item = Result<Node, BoxError>>>;

/// A unit of content in a markup tree.
///
/// Cloning a `Node` is cheap: every container variant is reference counted,
/// so one node may be placed at several positions in the same tree.
#[derive(Clone, Default)]
pub enum Node {
	/// Renders nothing.
	#[default]
	Null,
	/// Text that is HTML-escaped on output.
	Text(Cow<'static, str>),
	/// Markup emitted verbatim, without escaping.
	Raw(Cow<'static, str>),
	/// A list of plain strings, each escaped individually.
	Strings(Rc<[Cow<'static, str>]>),
	/// A nested element.
	Element(Rc<dyn Element>),
	/// An ordered list of nodes, flattened recursively.
	Sequence(Rc<[Node]>),
	/// Content computed when the render walk reaches it.
	Deferred(Deferred),
	/// A caller-supplied lazy sequence of nodes.
	Lazy(LazySequence),
	/// Any other displayable value; its string form is escaped on output.
	Opaque(Rc<dyn fmt::Display>),
}

impl fmt::Debug for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Node::Null => f.write_str("Null"),
			Node::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Node::Raw(raw) => f.debug_tuple("Raw").field(raw).finish(),
			Node::Strings(strings) => f.debug_tuple("Strings").field(strings).finish(),
			Node::Element(element) => f.debug_tuple("Element").field(element).finish(),
			Node::Sequence(nodes) => f.debug_tuple("Sequence").field(nodes).finish(),
			Node::Deferred(deferred) => fmt::Debug::fmt(deferred, f),
			Node::Lazy(lazy) => fmt::Debug::fmt(lazy, f),
			Node::Opaque(value) => f.debug_tuple("Opaque").field(&value.to_string()).finish(),
		}
	}
}

impl Node {
	/// Creates a text node.
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Node::Text(text.into())
	}

	/// Creates a node whose markup is emitted verbatim.
	///
	/// The caller is responsible for the content being well-formed and safe.
	pub fn raw(markup: impl Into<Cow<'static, str>>) -> Self {
		Node::Raw(markup.into())
	}

	/// Creates a node from a list of plain strings.
	pub fn strings<I, S>(strings: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Cow<'static, str>>,
	{
		Node::Strings(strings.into_iter().map(Into::into).collect())
	}

	/// Creates a sequence node.
	pub fn sequence(nodes: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Node::Sequence(nodes.into_iter().map(IntoNode::into_node).collect())
	}

	/// Wraps an element.
	pub fn element<E: Element + 'static>(element: E) -> Self {
		Node::Element(Rc::new(element))
	}

	/// Wraps an arbitrary displayable value.
	pub fn display<T: fmt::Display + 'static>(value: T) -> Self {
		Node::Opaque(Rc::new(value))
	}

	/// Creates content that is computed each time the render walk reaches it.
	pub fn deferred<F, T>(f: F) -> Self
	where
		F: Fn() -> T + 'static,
		T: IntoNode,
	{
		Node::Deferred(Deferred(Rc::new(move || {
			Ok::<Node, BoxError>(f().into_node())
		})))
	}

	/// Creates fallible deferred content.
	///
	/// An error returned by `f` is reported as
	/// [`RenderError::DeferredEvaluationFailure`] once the enclosing elements
	/// have been closed.
	pub fn try_deferred<F, T, E>(f: F) -> Self
	where
		F: Fn() -> Result<T, E> + 'static,
		T: IntoNode,
		E: Into<BoxError>,
	{
		Node::Deferred(Deferred(Rc::new(move || {
			f().map(IntoNode::into_node).map_err(Into::<BoxError>::into)
		})))
	}

	/// Creates a lazy sequence that is re-created by `factory` on every render.
	pub fn lazy<F, I>(factory: F) -> Self
	where
		F: Fn() -> I + 'static,
		I: IntoIterator,
		I::Item: IntoNode,
		I::IntoIter: 'static,
	{
		Node::Lazy(LazySequence::Repeatable(Rc::new(move || {
			Box::new(
				factory()
					.into_iter()
					.map(|item| Ok::<Node, BoxError>(item.into_node())),
			) as NodeIter
		})))
	}

	/// Creates a fallible lazy sequence that is re-created on every render.
	pub fn try_lazy<F, I, T, E>(factory: F) -> Self
	where
		F: Fn() -> I + 'static,
		I: IntoIterator<Item = Result<T, E>>,
		I::IntoIter: 'static,
		T: IntoNode,
		E: Into<BoxError>,
	{
		Node::Lazy(LazySequence::Repeatable(Rc::new(move || {
			Box::new(
				factory()
					.into_iter()
					.map(|item| item.map(IntoNode::into_node).map_err(Into::<BoxError>::into)),
			) as NodeIter
		})))
	}

	/// Creates a one-shot lazy sequence.
	///
	/// The iterator is consumed by the first render that reaches it; later
	/// renders produce no output for this node.
	pub fn once<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: IntoNode,
		I::IntoIter: 'static,
	{
		let iter: NodeIter = Box::new(
			items
				.into_iter()
				.map(|item| Ok::<Node, BoxError>(item.into_node())),
		);
		Node::Lazy(LazySequence::Once(Rc::new(RefCell::new(Some(iter)))))
	}

	/// Returns `true` for [`Node::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Node::Null)
	}

	/// Returns the lazy fragment stream for this node.
	pub fn fragments(&self) -> Fragments {
		render::render_fragments(self.clone())
	}

	/// Returns the lazy fragment stream for this node with custom options.
	pub fn fragments_with(&self, options: RenderOptions) -> Fragments {
		render::render_fragments_with(self.clone(), options)
	}

	/// Renders this node to a string.
	pub fn render_to_string(&self) -> Result<String, RenderError> {
		render::render_to_string(self.clone())
	}
}

/// Zero-argument content producer evaluated during rendering.
#[derive(Clone)]
pub struct Deferred(Rc<dyn Fn() -> Result<Node, BoxError>>);

impl Deferred {
	/// Invokes the producer.
	pub fn evaluate(&self) -> Result<Node, BoxError> {
		(self.0)()
	}
}

impl fmt::Debug for Deferred {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Deferred").field(&"<closure>").finish()
	}
}

/// A caller-supplied lazy sequence of nodes.
#[derive(Clone)]
pub enum LazySequence {
	/// A factory invoked once per render pass.
	Repeatable(Rc<dyn Fn() -> NodeIter>),
	/// A single iterator, consumed by the first render pass.
	Once(Rc<RefCell<Option<NodeIter>>>),
}

impl LazySequence {
	/// Starts iterating the sequence.
	///
	/// Returns `None` if this is a one-shot sequence that was already consumed.
	pub fn start(&self) -> Option<NodeIter> {
		match self {
			LazySequence::Repeatable(factory) => Some(factory()),
			LazySequence::Once(cell) => cell.borrow_mut().take(),
		}
	}

	/// Returns `true` if a one-shot sequence has already been taken.
	pub fn is_consumed(&self) -> bool {
		match self {
			LazySequence::Repeatable(_) => false,
			LazySequence::Once(cell) => cell.borrow().is_none(),
		}
	}
}

impl fmt::Debug for LazySequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LazySequence::Repeatable(_) => f.write_str("Lazy(<repeatable>)"),
			LazySequence::Once(_) if self.is_consumed() => f.write_str("Lazy(<consumed>)"),
			LazySequence::Once(_) => f.write_str("Lazy(<once>)"),
		}
	}
}

/// Conversion into a [`Node`].
///
/// This trait is implemented for strings, numbers, options, collections,
/// tuples and every element type, so that content can be passed to element
/// builders without explicit wrapping.
pub trait IntoNode {
	/// Converts `self` into a node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for &Node {
	fn into_node(self) -> Node {
		self.clone()
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self.clone()))
	}
}

impl IntoNode for Cow<'static, str> {
	fn into_node(self) -> Node {
		Node::Text(self)
	}
}

impl IntoNode for char {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self.to_string()))
	}
}

macro_rules! opaque_into_node {
	($($ty:ty),* $(,)?) => {
		$(
			impl IntoNode for $ty {
				fn into_node(self) -> Node {
					Node::Opaque(Rc::new(self))
				}
			}
		)*
	};
}

opaque_into_node!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Null,
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::Sequence(self.into_iter().map(IntoNode::into_node).collect())
	}
}

impl<T: IntoNode, const N: usize> IntoNode for [T; N] {
	fn into_node(self) -> Node {
		Node::Sequence(self.into_iter().map(IntoNode::into_node).collect())
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::Null
	}
}

// Tuple implementations for sequences

macro_rules! tuple_into_node {
	($($name:ident),+) => {
		impl<$($name: IntoNode),+> IntoNode for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_node(self) -> Node {
				let ($($name,)+) = self;
				Node::Sequence(Rc::from([$($name.into_node()),+]))
			}
		}
	};
}

tuple_into_node!(A);
tuple_into_node!(A, B);
tuple_into_node!(A, B, C);
tuple_into_node!(A, B, C, D);
tuple_into_node!(A, B, C, D, E);
tuple_into_node!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_option_none_is_null() {
		assert!(None::<String>.into_node().is_null());
		assert!(().into_node().is_null());
	}

	#[rstest]
	fn test_vec_becomes_sequence() {
		let node = vec!["a", "b"].into_node();
		match node {
			Node::Sequence(nodes) => assert_eq!(nodes.len(), 2),
			other => panic!("expected sequence, got {other:?}"),
		}
	}

	#[rstest]
	fn test_numbers_are_opaque() {
		assert!(matches!(3.5f64.into_node(), Node::Opaque(_)));
		assert!(matches!(true.into_node(), Node::Opaque(_)));
	}

	#[rstest]
	fn test_once_is_consumed_after_start() {
		let node = Node::once(["x"]);
		let Node::Lazy(lazy) = &node else {
			panic!("expected lazy node");
		};
		assert!(!lazy.is_consumed());
		assert!(lazy.start().is_some());
		assert!(lazy.is_consumed());
		assert!(lazy.start().is_none());
	}

	#[rstest]
	fn test_debug_hides_closures() {
		let node = Node::deferred(|| "x");
		assert_eq!(format!("{node:?}"), "Deferred(\"<closure>\")");
	}

	#[rstest]
	fn test_clone_shares_sequence() {
		let node = Node::sequence(["a", "b"]);
		let copy = node.clone();
		match (node, copy) {
			(Node::Sequence(a), Node::Sequence(b)) => assert!(Rc::ptr_eq(&a, &b)),
			_ => panic!("expected sequences"),
		}
	}
}
