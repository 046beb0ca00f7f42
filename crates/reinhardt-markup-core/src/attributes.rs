//! Attribute serialization.
//!
//! Elements describe their attributes to an [`AttributeWriter`], one typed
//! call per attribute slot, in declaration order. The writer skips unset
//! values and applies the quoting rule of [`attribute_value`].

use std::fmt;

use indexmap::IndexMap;

use crate::error::RenderError;
use crate::escape::{attribute_value, html_escape};

/// A closed enumeration with a fixed markup token per member.
pub trait Token: Copy {
	/// The token written as the attribute value.
	fn token(self) -> &'static str;
}

/// A bitmask of independently settable named bits.
pub trait FlagSet: Copy {
	/// Raw bits of the set.
	fn bits(self) -> u32;

	/// Token for a single bit, or `None` if the bit has no name.
	fn bit_token(bit: u32) -> Option<&'static str>;
}

/// Collects `" name=value"` fragments for one element.
#[derive(Debug, Default, Clone)]
pub struct AttributeWriter {
	fragments: Vec<String>,
}

impl AttributeWriter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Writes a string attribute if it is set.
	pub fn text(&mut self, name: &str, value: Option<&str>) -> &mut Self {
		if let Some(value) = value {
			self.fragments
				.push(format!(" {name}={}", attribute_value(value)));
		}
		self
	}

	/// Writes a bare boolean attribute if `value` is `true`.
	pub fn flag(&mut self, name: &str, value: bool) -> &mut Self {
		if value {
			self.fragments.push(format!(" {name}"));
		}
		self
	}

	/// Writes a numeric attribute if it is set.
	pub fn number<T: fmt::Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
		if let Some(value) = value {
			let value = value.to_string();
			self.text(name, Some(&value));
		}
		self
	}

	/// Writes an integer list attribute as comma-separated decimals.
	pub fn list(&mut self, name: &str, value: Option<&[i32]>) -> &mut Self {
		if let Some(values) = value {
			let joined = values
				.iter()
				.map(i32::to_string)
				.collect::<Vec<_>>()
				.join(",");
			self.text(name, Some(&joined));
		}
		self
	}

	/// Writes an enumerated attribute if it is set.
	pub fn token<T: Token>(&mut self, name: &str, value: Option<T>) -> &mut Self {
		if let Some(value) = value {
			self.text(name, Some(value.token()));
		}
		self
	}

	/// Writes a flag-set attribute if any bit is set.
	///
	/// Tokens are space-joined in ascending bit order, independently of the
	/// order in which the bits were combined.
	pub fn flags<T: FlagSet>(&mut self, name: &str, value: T) -> &mut Self {
		let bits = value.bits();
		if bits != 0 {
			let tokens: Vec<&str> = (0..u32::BITS)
				.map(|shift| 1u32 << shift)
				.filter(|bit| bits & bit != 0)
				.filter_map(T::bit_token)
				.collect();
			self.text(name, Some(&tokens.join(" ")));
		}
		self
	}

	/// Writes every `data-*` attribute, in insertion order.
	///
	/// Fails with [`RenderError::InvalidAttributeName`] on the first key that
	/// contains a character outside `[A-Za-z0-9_-]`; nothing is written in
	/// that case.
	pub fn data(&mut self, data: &DataAttributes) -> Result<&mut Self, RenderError> {
		for key in data.keys() {
			validate_data_key(key)?;
		}
		for (key, value) in data.iter() {
			self.fragments
				.push(format!(" data-{key}=\"{}\"", html_escape(value)));
		}
		Ok(self)
	}

	/// Returns `true` if no attribute has been written.
	pub fn is_empty(&self) -> bool {
		self.fragments.is_empty()
	}

	/// Appends every fragment to `out`.
	pub fn write_into(&self, out: &mut String) {
		for fragment in &self.fragments {
			out.push_str(fragment);
		}
	}

	pub fn into_fragments(self) -> Vec<String> {
		self.fragments
	}
}

fn validate_data_key(key: &str) -> Result<(), RenderError> {
	match key
		.chars()
		.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
	{
		Some(character) => Err(RenderError::InvalidAttributeName {
			key: key.to_string(),
			character,
		}),
		None => Ok(()),
	}
}

/// Open-ended `data-*` attributes of an element.
///
/// Keys are stored without the `data-` prefix and validated when the element
/// is rendered.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DataAttributes {
	entries: IndexMap<String, String>,
}

impl DataAttributes {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a value; an existing key keeps its position.
	pub fn set(&mut self, key: impl Into<String>, value: impl fmt::Display) {
		self.entries.insert(key.into(), value.to_string());
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	/// Removes a key, keeping the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.entries.shift_remove(key)
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(k, v)| (k.as_str(), v.as_str()))
	}
}
