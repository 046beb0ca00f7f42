//! Verbatim `<script>` and `<style>` blocks.
//!
//! The payload of a literal block is emitted without escaping. To keep it
//! from closing the block early, construction rejects payloads containing
//! `<!--`, `-->`, or an open or close tag of the block's own element.

use std::sync::OnceLock;

use regex::Regex;
use reinhardt_markup_core::{Element, IntoNode, Literal, Node, RenderError};
use tracing::debug;

static SCRIPT_BREAKOUT: OnceLock<Regex> = OnceLock::new();
static STYLE_BREAKOUT: OnceLock<Regex> = OnceLock::new();

fn script_breakout() -> &'static Regex {
	SCRIPT_BREAKOUT.get_or_init(|| Regex::new(r"(?i)<!--|-->|</?script\s*>").unwrap())
}

fn style_breakout() -> &'static Regex {
	STYLE_BREAKOUT.get_or_init(|| Regex::new(r"(?i)<!--|-->|</?style\s*>").unwrap())
}

fn validate(payload: &str, pattern: &Regex, tag: &'static str) -> Result<(), RenderError> {
	if let Some(found) = pattern.find(payload) {
		debug!(tag, offset = found.start(), "rejected literal payload");
		return Err(RenderError::InvalidLiteralPayload { tag });
	}
	Ok(())
}

/// A `<script>` block whose code is emitted verbatim.
///
/// ```
/// use reinhardt_markup_tags::ScriptLiteral;
/// use reinhardt_markup_core::render_to_string;
///
/// let script = ScriptLiteral::new("if (a < b) run();").unwrap();
/// assert_eq!(
///     render_to_string(script).unwrap(),
///     "<script type=text/javascript>if (a < b) run();</script>"
/// );
///
/// assert!(ScriptLiteral::new("</script><b>").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLiteral {
	code: String,
}

impl ScriptLiteral {
	/// Validates `code` and wraps it.
	pub fn new(code: impl Into<String>) -> Result<Self, RenderError> {
		let code = code.into();
		validate(&code, script_breakout(), "script")?;
		Ok(Self { code })
	}

	pub fn code(&self) -> &str {
		&self.code
	}
}

impl Element for ScriptLiteral {
	fn tag_name(&self) -> &'static str {
		"script"
	}

	fn literal(&self) -> Option<Literal<'_>> {
		Some(Literal::new(
			"<script type=text/javascript>",
			&self.code,
			"</script>",
		))
	}
}

impl IntoNode for ScriptLiteral {
	fn into_node(self) -> Node {
		Node::element(self)
	}
}

/// A `<style>` block whose CSS is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleLiteral {
	css: String,
}

impl StyleLiteral {
	/// Validates `css` and wraps it.
	pub fn new(css: impl Into<String>) -> Result<Self, RenderError> {
		let css = css.into();
		validate(&css, style_breakout(), "style")?;
		Ok(Self { css })
	}

	pub fn css(&self) -> &str {
		&self.css
	}
}

impl Element for StyleLiteral {
	fn tag_name(&self) -> &'static str {
		"style"
	}

	fn literal(&self) -> Option<Literal<'_>> {
		Some(Literal::new("<style type=text/css>", &self.css, "</style>"))
	}
}

impl IntoNode for StyleLiteral {
	fn into_node(self) -> Node {
		Node::element(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_markup_core::{RenderOptions, render_fragments_with};
	use rstest::rstest;

	#[rstest]
	#[case("<!-- hide")]
	#[case("done -->")]
	#[case("</script>")]
	#[case("</SCRIPT >")]
	#[case("<script>")]
	#[case("a</Script\n>b")]
	fn test_script_rejects_breakout(#[case] code: &str) {
		let err = ScriptLiteral::new(code).unwrap_err();
		assert!(matches!(err, RenderError::InvalidLiteralPayload { tag: "script" }));
	}

	#[rstest]
	#[case("var s = '<scripts>';")]
	#[case("a <script")]
	#[case("x = y > 1 && z < 2")]
	#[case("</style>")]
	fn test_script_accepts(#[case] code: &str) {
		assert_eq!(ScriptLiteral::new(code).unwrap().code(), code);
	}

	#[rstest]
	#[case("</style>")]
	#[case("<STYLE>")]
	#[case("<!--")]
	fn test_style_rejects_breakout(#[case] css: &str) {
		let err = StyleLiteral::new(css).unwrap_err();
		assert!(matches!(err, RenderError::InvalidLiteralPayload { tag: "style" }));
	}

	#[rstest]
	fn test_literal_ignores_all_tags() {
		let style = StyleLiteral::new("p > a { color: red }").unwrap();
		let fragments: Vec<String> =
			render_fragments_with(style, RenderOptions::new().all_tags(true))
				.map(|f| f.unwrap().into_owned())
				.collect();
		assert_eq!(
			fragments,
			vec!["<style type=text/css>", "p > a { color: red }", "</style>"]
		);
	}
}
