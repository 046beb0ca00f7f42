//! HTML escaping and attribute value quoting.

use std::borrow::Cow;

/// Replaces `&`, `<`, `>`, `"` and `'` with `&amp;`, `&lt;`, `&gt;`,
/// `&quot;` and `&#39;`.
///
/// Text without any of them is returned borrowed. The output is not meant
/// to be escaped again: a second pass turns `&amp;` into `&amp;amp;`.
pub fn html_escape(text: &str) -> Cow<'_, str> {
	let Some(first) = text.find(['&', '<', '>', '"', '\'']) else {
		return Cow::Borrowed(text);
	};
	let mut out = String::with_capacity(text.len() + 8);
	out.push_str(&text[..first]);
	for c in text[first..].chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	Cow::Owned(out)
}

fn needs_quotes(c: char) -> bool {
	c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '`')
}

/// Formats a raw attribute value for output after `name=`.
///
/// - An empty value becomes `''`.
/// - A value without whitespace or any of `` " ' = < > ` `` is emitted bare.
/// - A value without `'` is wrapped in single quotes.
/// - Anything else is wrapped in double quotes.
///
/// Quoted content is fully HTML-escaped, so neither delimiter can occur
/// unescaped inside it.
///
/// # Examples
///
/// ```
/// use reinhardt_markup_core::escape::attribute_value;
///
/// assert_eq!(attribute_value("hello"), "hello");
/// assert_eq!(attribute_value(""), "''");
/// assert_eq!(attribute_value("a\"b"), "'a&quot;b'");
/// assert_eq!(attribute_value("a'b"), "\"a&#39;b\"");
/// ```
pub fn attribute_value(raw: &str) -> Cow<'_, str> {
	if raw.is_empty() {
		return Cow::Borrowed("''");
	}
	if !raw.chars().any(needs_quotes) {
		return Cow::Borrowed(raw);
	}
	let delimiter = if raw.contains('\'') { '"' } else { '\'' };
	let escaped = html_escape(raw);
	let mut quoted = String::with_capacity(escaped.len() + 2);
	quoted.push(delimiter);
	quoted.push_str(&escaped);
	quoted.push(delimiter);
	Cow::Owned(quoted)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	fn test_html_escape_no_special_chars() {
		assert_eq!(html_escape("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	#[case("a & b", "a &amp; b")]
	#[case("<div>", "&lt;div&gt;")]
	#[case("\"test\" 'value'", "&quot;test&quot; &#39;value&#39;")]
	#[case("plain prefix then <b>", "plain prefix then &lt;b&gt;")]
	fn test_html_escape_special_chars(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(html_escape(input), expected);
	}

	#[rstest]
	fn test_html_escape_is_single_pass() {
		let once = html_escape("&<>'\"").into_owned();
		assert_eq!(once, "&amp;&lt;&gt;&#39;&quot;");
		let twice = html_escape(&once).into_owned();
		assert_eq!(twice, "&amp;amp;&amp;lt;&amp;gt;&amp;#39;&amp;quot;");
	}

	#[rstest]
	#[case("hello", "hello")]
	#[case("", "''")]
	#[case("a\"b", "'a&quot;b'")]
	#[case("a'b", "\"a&#39;b\"")]
	#[case("two words", "'two words'")]
	#[case("a=b", "'a=b'")]
	#[case("tick`", "'tick`'")]
	#[case("x<y", "'x&lt;y'")]
	#[case("it's \"quoted\"", "\"it&#39;s &quot;quoted&quot;\"")]
	#[case("a&b", "a&b")]
	#[case("tab\there", "'tab\there'")]
	fn test_attribute_value(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(attribute_value(raw), expected);
	}

	proptest! {
		#[test]
		fn prop_escaped_text_has_no_markup_chars(s in ".*") {
			let escaped = html_escape(&s);
			prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
		}

		#[test]
		fn prop_quoted_attribute_never_contains_its_delimiter(s in ".*") {
			let value = attribute_value(&s).into_owned();
			if let Some(first) = value.chars().next().filter(|c| *c == '\'' || *c == '"') {
				let inner = &value[1..value.len() - 1];
				prop_assert!(value.ends_with(first));
				prop_assert!(!inner.contains(first));
			} else {
				prop_assert!(!value.chars().any(needs_quotes));
			}
		}
	}
}
