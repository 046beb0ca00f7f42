//! The streaming render engine.
//!
//! [`Fragments`] walks a tree depth-first with an explicit stack and yields
//! markup fragments one at a time. Deferred content is evaluated only when
//! the walk reaches it.
//!
//! When deferred content or a lazy sequence fails, the stream first yields
//! the end tag of every element that is still open and then a single
//! [`RenderError::DeferredEvaluationFailure`]. Output already handed to a
//! sink therefore stays well-formed.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::attributes::AttributeWriter;
use crate::element::Element;
use crate::error::RenderError;
use crate::escape::html_escape;
use crate::node::{IntoNode, Node, NodeIter};
use crate::options::RenderOptions;

/// Returns the fragment stream for `root` with default options.
pub fn render_fragments(root: impl IntoNode) -> Fragments {
	Fragments::new(root.into_node(), RenderOptions::default())
}

/// Returns the fragment stream for `root`.
pub fn render_fragments_with(root: impl IntoNode, options: RenderOptions) -> Fragments {
	Fragments::new(root.into_node(), options)
}

/// Renders `root` to a single string with default options.
pub fn render_to_string(root: impl IntoNode) -> Result<String, RenderError> {
	render_to_string_with(root, RenderOptions::default())
}

/// Renders `root` to a single string.
pub fn render_to_string_with(
	root: impl IntoNode,
	options: RenderOptions,
) -> Result<String, RenderError> {
	let mut out = String::new();
	for fragment in render_fragments_with(root, options) {
		out.push_str(&fragment?);
	}
	Ok(out)
}

/// Renders `root` eagerly and wraps the markup as a [`Node::Raw`].
///
/// The result renders identically to `root`, without re-evaluating any
/// deferred content.
pub fn to_raw(root: impl IntoNode) -> Result<Node, RenderError> {
	Ok(Node::Raw(Cow::Owned(render_to_string(root)?)))
}

enum Frame {
	Nodes { nodes: Rc<[Node]>, next: usize },
	Children { element: Rc<dyn Element>, next: usize },
	Strings { strings: Rc<[Cow<'static, str>]>, next: usize },
	Lazy(NodeIter),
	EndTag(&'static str),
}

enum Step {
	Visit(Node),
	Emit(Cow<'static, str>),
	Close(&'static str),
	Pop,
	Fail(RenderError),
}

/// Lazy stream of markup fragments.
///
/// Each call to [`Iterator::next`] does a bounded amount of work and may
/// invoke caller-supplied deferred content. The stream is fused after the
/// first error.
pub struct Fragments {
	options: RenderOptions,
	stack: Vec<Frame>,
	pending: VecDeque<Cow<'static, str>>,
	failure: Option<RenderError>,
	finished: bool,
}

impl fmt::Debug for Fragments {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Fragments")
			.field("options", &self.options)
			.field("depth", &self.stack.len())
			.field("pending", &self.pending)
			.field("finished", &self.finished)
			.finish()
	}
}

impl Fragments {
	fn new(root: Node, options: RenderOptions) -> Self {
		Self {
			options,
			stack: vec![Frame::Nodes {
				nodes: Rc::from([root]),
				next: 0,
			}],
			pending: VecDeque::new(),
			failure: None,
			finished: false,
		}
	}

	fn step(&mut self) -> Result<(), RenderError> {
		let step = match self.stack.last_mut() {
			None => {
				self.finished = true;
				return Ok(());
			}
			Some(Frame::Nodes { nodes, next }) => match nodes.get(*next) {
				Some(node) => {
					*next += 1;
					Step::Visit(node.clone())
				}
				None => Step::Pop,
			},
			Some(Frame::Children { element, next }) => match element.child_nodes().get(*next) {
				Some(node) => {
					*next += 1;
					Step::Visit(node.clone())
				}
				None => Step::Pop,
			},
			Some(Frame::Strings { strings, next }) => match strings.get(*next) {
				Some(text) => {
					*next += 1;
					Step::Emit(escape_text(text.clone()))
				}
				None => Step::Pop,
			},
			Some(Frame::Lazy(iter)) => match iter.next() {
				Some(Ok(node)) => Step::Visit(node),
				Some(Err(err)) => Step::Fail(RenderError::deferred(err)),
				None => Step::Pop,
			},
			Some(Frame::EndTag(tag)) => Step::Close(*tag),
		};

		match step {
			Step::Visit(node) => self.visit(node)?,
			Step::Emit(fragment) => self.pending.push_back(fragment),
			Step::Close(tag) => {
				self.stack.pop();
				self.pending.push_back(end_tag(tag));
			}
			Step::Pop => {
				self.stack.pop();
			}
			Step::Fail(err) => return Err(err),
		}
		Ok(())
	}

	fn visit(&mut self, node: Node) -> Result<(), RenderError> {
		let mut node = node;
		loop {
			match node {
				Node::Null => {}
				Node::Text(text) => self.pending.push_back(escape_text(text)),
				Node::Raw(raw) => self.pending.push_back(raw),
				Node::Strings(strings) => self.stack.push(Frame::Strings { strings, next: 0 }),
				Node::Element(element) => self.open(element)?,
				Node::Sequence(nodes) => self.stack.push(Frame::Nodes { nodes, next: 0 }),
				Node::Deferred(deferred) => {
					node = deferred.evaluate().map_err(RenderError::deferred)?;
					continue;
				}
				Node::Lazy(lazy) => match lazy.start() {
					Some(iter) => self.stack.push(Frame::Lazy(iter)),
					None => trace!("one-shot content sequence already consumed, rendering nothing"),
				},
				Node::Opaque(value) => self
					.pending
					.push_back(escape_text(Cow::Owned(value.to_string()))),
			}
			return Ok(());
		}
	}

	fn open(&mut self, element: Rc<dyn Element>) -> Result<(), RenderError> {
		if let Some(literal) = element.literal() {
			self.pending.push_back(Cow::Borrowed(literal.open()));
			self.pending
				.push_back(Cow::Owned(literal.payload().to_owned()));
			self.pending.push_back(Cow::Borrowed(literal.close()));
			return Ok(());
		}

		let mut attributes = AttributeWriter::new();
		element.write_attributes(&mut attributes)?;

		if let Some(preamble) = element.preamble() {
			self.pending.push_back(Cow::Borrowed(preamble));
		}

		let tag = element.tag_name();
		if element.start_tag() || self.options.all_tags || !attributes.is_empty() {
			let mut start = String::with_capacity(tag.len() + 2);
			start.push('<');
			start.push_str(tag);
			attributes.write_into(&mut start);
			start.push('>');
			self.pending.push_back(Cow::Owned(start));
		}
		if element.end_tag() || self.options.all_tags {
			self.stack.push(Frame::EndTag(tag));
		}
		self.stack.push(Frame::Children { element, next: 0 });
		Ok(())
	}

	/// Drops every frame, queueing the end tags of open elements.
	fn unwind(&mut self) {
		let mut closed = 0usize;
		while let Some(frame) = self.stack.pop() {
			if let Frame::EndTag(tag) = frame {
				self.pending.push_back(end_tag(tag));
				closed += 1;
			}
		}
		debug!(closed, "deferred content failed, closing open elements");
	}
}

impl Iterator for Fragments {
	type Item = Result<Cow<'static, str>, RenderError>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if let Some(fragment) = self.pending.pop_front() {
				return Some(Ok(fragment));
			}
			if let Some(err) = self.failure.take() {
				self.finished = true;
				return Some(Err(err));
			}
			if self.finished {
				return None;
			}
			if let Err(err) = self.step() {
				if err.is_deferred() {
					self.unwind();
				} else {
					self.stack.clear();
				}
				self.failure = Some(err);
			}
		}
	}
}

impl std::iter::FusedIterator for Fragments {}

fn escape_text(text: Cow<'static, str>) -> Cow<'static, str> {
	match html_escape(&text) {
		Cow::Borrowed(_) => text,
		Cow::Owned(escaped) => Cow::Owned(escaped),
	}
}

fn end_tag(tag: &str) -> Cow<'static, str> {
	Cow::Owned(format!("</{tag}>"))
}
