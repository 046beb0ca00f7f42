//! Attributes shared by every element, and the builder trait exposing them.

use std::fmt;

use reinhardt_markup_core::{AttributeWriter, DataAttributes, Element, IntoNode, Node};

use crate::enums::{Dir, Dropzone, TrueFalse};

macro_rules! global_setter {
	($field:ident, text) => {
		fn $field(mut self, value: impl Into<String>) -> Self {
			self.global_mut().$field = Some(value.into());
			self
		}
	};
	($field:ident, flag) => {
		fn $field(mut self, value: bool) -> Self {
			self.global_mut().$field = value;
			self
		}
	};
	($field:ident, int) => {
		fn $field(mut self, value: i32) -> Self {
			self.global_mut().$field = Some(value);
			self
		}
	};
	($field:ident, token $t:ty) => {
		fn $field(mut self, value: $t) -> Self {
			self.global_mut().$field = Some(value);
			self
		}
	};
}

macro_rules! global_attributes {
	($($field:ident : $kind:ident $($arg:ty)?),* $(,)?) => {
		/// Attributes and event handlers accepted by every element.
		///
		/// They are written after an element's own attributes and its
		/// `data-*` attributes.
		#[derive(Debug, Clone, Default, PartialEq)]
		pub struct GlobalAttributes {
			$(pub $field: attr_type!($kind $($arg)?),)*
		}

		impl GlobalAttributes {
			/// Writes every set global attribute, in declaration order.
			pub fn write_attributes(&self, out: &mut AttributeWriter) {
				$(attr_write!(out, stringify!($field), self.$field, $kind $($arg)?);)*
			}
		}

		/// Builder methods shared by every catalog element.
		///
		/// ```
		/// use reinhardt_markup_tags::prelude::*;
		///
		/// let div = Div::new()
		///     .id("main")
		///     .class("wide")
		///     .hidden(true)
		///     .data_attr("page", 2)
		///     .child("text");
		/// assert_eq!(
		///     div.into_node().render_to_string().unwrap(),
		///     "<div data-page=\"2\" class=wide hidden id=main>text</div>"
		/// );
		/// ```
		pub trait HtmlElement: Element + Sized + 'static {
			/// Global attributes of this element.
			fn global_mut(&mut self) -> &mut GlobalAttributes;

			/// `data-*` attributes of this element.
			fn data_attributes_mut(&mut self) -> &mut DataAttributes;

			/// Content children of this element.
			fn children_mut(&mut self) -> &mut Vec<Node>;

			/// Appends one child.
			fn child(mut self, child: impl IntoNode) -> Self {
				self.children_mut().push(child.into_node());
				self
			}

			/// Appends several children.
			fn children(mut self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
				self.children_mut()
					.extend(children.into_iter().map(IntoNode::into_node));
				self
			}

			/// Replaces every child.
			fn with_content(mut self, content: impl IntoIterator<Item = impl IntoNode>) -> Self {
				self.set_content(content);
				self
			}

			/// Appends one child to an existing element.
			fn add(&mut self, child: impl IntoNode) {
				self.children_mut().push(child.into_node());
			}

			/// Replaces every child of an existing element.
			fn set_content(&mut self, content: impl IntoIterator<Item = impl IntoNode>) {
				let children = self.children_mut();
				children.clear();
				children.extend(content.into_iter().map(IntoNode::into_node));
			}

			/// Sets a `data-*` attribute. `key` is given without the prefix.
			///
			/// Keys are validated when the element is rendered.
			fn data_attr(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
				self.data_attributes_mut().set(key, value);
				self
			}

			$(global_setter!($field, $kind $($arg)?);)*
		}
	};
}

global_attributes! {
	accesskey: text,
	class: text,
	contenteditable: token TrueFalse,
	contextmenu: text,
	dir: token Dir,
	draggable: token TrueFalse,
	dropzone: token Dropzone,
	hidden: flag,
	id: text,
	itemid: text,
	itemprop: text,
	itemref: text,
	itemscope: flag,
	itemtype: text,
	lang: text,
	spellcheck: token TrueFalse,
	style: text,
	tabindex: int,
	title: text,
	onabort: text,
	onblur: text,
	oncanplay: text,
	oncanplaythrough: text,
	onchange: text,
	onclick: text,
	oncontextmenu: text,
	ondblclick: text,
	ondrag: text,
	ondragend: text,
	ondragenter: text,
	ondragleave: text,
	ondragover: text,
	ondragstart: text,
	ondrop: text,
	ondurationchange: text,
	onemptied: text,
	onended: text,
	onerror: text,
	onfocus: text,
	onformchange: text,
	onforminput: text,
	oninput: text,
	oninvalid: text,
	onkeydown: text,
	onkeypress: text,
	onkeyup: text,
	onload: text,
	onloadeddata: text,
	onloadedmetadata: text,
	onloadstart: text,
	onmousedown: text,
	onmousemove: text,
	onmouseout: text,
	onmouseover: text,
	onmouseup: text,
	onmousewheel: text,
	onpause: text,
	onplay: text,
	onplaying: text,
	onprogress: text,
	onratechange: text,
	onreset: text,
	onreadystatechange: text,
	onseeked: text,
	onseeking: text,
	onselect: text,
	onshow: text,
	onstalled: text,
	onsubmit: text,
	onsuspend: text,
	ontimeupdate: text,
	onvolumechange: text,
	onwaiting: text,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn written(global: &GlobalAttributes) -> String {
		let mut out = AttributeWriter::new();
		global.write_attributes(&mut out);
		out.into_fragments().concat()
	}

	#[rstest]
	fn test_default_writes_nothing() {
		assert_eq!(written(&GlobalAttributes::default()), "");
	}

	#[rstest]
	fn test_declaration_order() {
		let global = GlobalAttributes {
			title: Some("t".into()),
			id: Some("x".into()),
			class: Some("c".into()),
			onclick: Some("go()".into()),
			tabindex: Some(-1),
			dir: Some(Dir::Rtl),
			spellcheck: Some(TrueFalse::False),
			..Default::default()
		};
		assert_eq!(
			written(&global),
			" class=c dir=rtl id=x spellcheck=false tabindex=-1 title=t onclick=go()"
		);
	}
}
