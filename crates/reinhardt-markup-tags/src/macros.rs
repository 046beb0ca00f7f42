//! Declarative schema macros for the element catalog.
//!
//! Attribute kinds:
//!
//! | kind        | field type          | rendering                          |
//! |-------------|---------------------|------------------------------------|
//! | `text`      | `Option<String>`    | quoted per the attribute rule      |
//! | `flag`      | `bool`              | bare name when `true`              |
//! | `int`       | `Option<i32>`       | decimal                            |
//! | `float`     | `Option<f64>`       | decimal                            |
//! | `number`    | `f64`               | decimal, always present            |
//! | `list`      | `Option<Vec<i32>>`  | comma-separated decimals           |
//! | `token T`   | `Option<T>`         | fixed token of the member          |
//! | `flags T`   | `T`                 | space-joined tokens of set bits    |

macro_rules! attr_type {
	(text) => { Option<String> };
	(flag) => { bool };
	(int) => { Option<i32> };
	(float) => { Option<f64> };
	(number) => { f64 };
	(list) => { Option<Vec<i32>> };
	(token $t:ty) => { Option<$t> };
	(flags $t:ty) => { $t };
}

macro_rules! attr_name {
	($field:ident) => {
		stringify!($field)
	};
	($field:ident $name:literal) => {
		$name
	};
}

macro_rules! attr_setter {
	($field:ident, text) => {
		pub fn $field(mut self, value: impl Into<String>) -> Self {
			self.$field = Some(value.into());
			self
		}
	};
	($field:ident, flag) => {
		pub fn $field(mut self, value: bool) -> Self {
			self.$field = value;
			self
		}
	};
	($field:ident, int) => {
		pub fn $field(mut self, value: i32) -> Self {
			self.$field = Some(value);
			self
		}
	};
	($field:ident, float) => {
		pub fn $field(mut self, value: f64) -> Self {
			self.$field = Some(value);
			self
		}
	};
	($field:ident, number) => {
		pub fn $field(mut self, value: f64) -> Self {
			self.$field = value;
			self
		}
	};
	($field:ident, list) => {
		pub fn $field(mut self, value: impl Into<Vec<i32>>) -> Self {
			self.$field = Some(value.into());
			self
		}
	};
	($field:ident, token $t:ty) => {
		pub fn $field(mut self, value: $t) -> Self {
			self.$field = Some(value);
			self
		}
	};
	($field:ident, flags $t:ty) => {
		pub fn $field(mut self, value: $t) -> Self {
			self.$field = value;
			self
		}
	};
}

macro_rules! attr_write {
	($out:ident, $name:expr, $value:expr, text) => {
		$out.text($name, $value.as_deref());
	};
	($out:ident, $name:expr, $value:expr, flag) => {
		$out.flag($name, $value);
	};
	($out:ident, $name:expr, $value:expr, int) => {
		$out.number($name, $value);
	};
	($out:ident, $name:expr, $value:expr, float) => {
		$out.number($name, $value);
	};
	($out:ident, $name:expr, $value:expr, number) => {
		$out.number($name, Some($value));
	};
	($out:ident, $name:expr, $value:expr, list) => {
		$out.list($name, $value.as_deref());
	};
	($out:ident, $name:expr, $value:expr, token $t:ty) => {
		$out.token($name, $value);
	};
	($out:ident, $name:expr, $value:expr, flags $t:ty) => {
		$out.flags($name, $value);
	};
}

macro_rules! or_true {
	() => {
		true
	};
	($value:literal) => {
		$value
	};
}

macro_rules! optional {
	() => {
		None
	};
	($value:literal) => {
		Some($value)
	};
}

/// Defines element structs from a schema table.
///
/// ```text
/// /// docs
/// Name("tag", start = false, end = false, preamble = "...") {
///     field: kind,
///     field = "attr-name": kind,
/// }
/// ```
///
/// `start`, `end` and `preamble` are optional; both tags are printed by
/// default. Each generated struct gets builder setters for its own
/// attributes, implements [`Element`](reinhardt_markup_core::Element),
/// [`HtmlElement`](crate::HtmlElement) and
/// [`IntoNode`](reinhardt_markup_core::IntoNode).
macro_rules! html_elements {
	($(
		$(#[$meta:meta])*
		$name:ident(
			$tag:literal
			$(, start = $start:literal)?
			$(, end = $end:literal)?
			$(, preamble = $preamble:literal)?
		) {
			$($field:ident $(= $attr:literal)? : $kind:ident $($arg:ty)?),* $(,)?
		}
	)*) => {$(
		$(#[$meta])*
		#[derive(Debug, Clone, Default)]
		pub struct $name {
			$(pub $field: attr_type!($kind $($arg)?),)*
			/// Attributes shared by every element.
			pub global: GlobalAttributes,
			/// `data-*` attributes.
			pub data_attributes: DataAttributes,
			/// Content children.
			pub children: Vec<Node>,
		}

		impl $name {
			/// Creates an empty element.
			pub fn new() -> Self {
				Self::default()
			}

			$(attr_setter!($field, $kind $($arg)?);)*
		}

		impl Element for $name {
			fn tag_name(&self) -> &'static str {
				$tag
			}

			fn start_tag(&self) -> bool {
				or_true!($($start)?)
			}

			fn end_tag(&self) -> bool {
				or_true!($($end)?)
			}

			fn preamble(&self) -> Option<&'static str> {
				optional!($($preamble)?)
			}

			fn write_attributes(&self, out: &mut AttributeWriter) -> Result<(), RenderError> {
				$(attr_write!(out, attr_name!($field $($attr)?), self.$field, $kind $($arg)?);)*
				out.data(&self.data_attributes)?;
				self.global.write_attributes(out);
				Ok(())
			}

			fn child_nodes(&self) -> &[Node] {
				&self.children
			}
		}

		impl HtmlElement for $name {
			fn global_mut(&mut self) -> &mut GlobalAttributes {
				&mut self.global
			}

			fn data_attributes_mut(&mut self) -> &mut DataAttributes {
				&mut self.data_attributes
			}

			fn children_mut(&mut self) -> &mut Vec<Node> {
				&mut self.children
			}
		}

		impl IntoNode for $name {
			fn into_node(self) -> Node {
				Node::element(self)
			}
		}
	)*};
}
