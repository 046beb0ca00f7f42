//! Convenience builders composed from catalog elements.

use reinhardt_markup_core::{IntoNode, Node};

use crate::elements::{Body, Head, Html, Kbd, Meta, Table, Td, Title, Tr};
use crate::global::HtmlElement;

/// Builds a complete HTML document.
///
/// The head holds the title and a `Content-type` meta declaring UTF-8.
///
/// ```
/// use reinhardt_markup_tags::html_document;
/// use reinhardt_markup_core::{RenderOptions, render_to_string_with};
///
/// let doc = html_document("Title", "Hello");
/// assert_eq!(
///     render_to_string_with(doc, RenderOptions::new().all_tags(true)).unwrap(),
///     "<!DOCTYPE html><html><head><title>Title</title>\
///      <meta http-equiv=Content-type content='text/html; charset=utf-8'></meta>\
///      </head><body>Hello</body></html>"
/// );
/// ```
pub fn html_document(title: impl IntoNode, body: impl IntoNode) -> Html {
	Html::new()
		.child(
			Head::new()
				.child(Title::new().child(title))
				.child(
					Meta::new()
						.http_equiv("Content-type")
						.content("text/html; charset=utf-8"),
				),
		)
		.child(Body::new().child(body))
}

/// Builds a table from rows of cell contents.
///
/// When `class` is given it is set on the table, every row and every cell.
pub fn html_table<R, C>(class: Option<&str>, rows: R) -> Table
where
	R: IntoIterator,
	R::Item: IntoIterator<Item = C>,
	C: IntoNode,
{
	let rows = rows.into_iter().map(|row| {
		let cells = row
			.into_iter()
			.map(|cell| with_class(Td::new().child(cell), class));
		with_class(Tr::new().children(cells), class)
	});
	with_class(Table::new().children(rows), class)
}

fn with_class<E: HtmlElement>(element: E, class: Option<&str>) -> E {
	match class {
		Some(class) => element.class(class),
		None => element,
	}
}

/// Marks the keyboard shortcut `key` within `label`.
///
/// The first occurrence of `key` is wrapped in `<kbd>`; if `label` does not
/// contain it, ` (<kbd>key</kbd>)` is appended instead.
///
/// ```
/// use reinhardt_markup_tags::accel;
///
/// assert_eq!(accel("Save", 'a').render_to_string().unwrap(), "S<kbd>a</kbd>ve");
/// assert_eq!(accel("Save", 'x').render_to_string().unwrap(), "Save (<kbd>x</kbd>)");
/// ```
pub fn accel(label: &str, key: char) -> Node {
	match label.find(key) {
		Some(pos) => (
			label[..pos].to_string(),
			Kbd::new().child(key),
			label[pos + key.len_utf8()..].to_string(),
		)
			.into_node(),
		None => (label.to_string(), " (", Kbd::new().child(key), ")").into_node(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_markup_core::render_to_string;
	use rstest::rstest;

	#[rstest]
	fn test_document_default_omits_optional_tags() {
		assert_eq!(
			render_to_string(html_document("T", "Hello")).unwrap(),
			"<!DOCTYPE html><head><title>T</title>\
			 <meta http-equiv=Content-type content='text/html; charset=utf-8'>\
			 <body>Hello"
		);
	}

	#[rstest]
	fn test_table_class_everywhere() {
		let table = html_table(Some("grid"), [["a", "b"], ["c", "d"]]);
		assert_eq!(
			render_to_string(table).unwrap(),
			"<table class=grid><tr class=grid><td class=grid>a<td class=grid>b\
			 <tr class=grid><td class=grid>c<td class=grid>d</table>"
		);
	}

	#[rstest]
	fn test_table_without_class() {
		let table = html_table(None, vec![vec![1, 2]]);
		assert_eq!(render_to_string(table).unwrap(), "<table><tr><td>1<td>2</table>");
	}

	#[rstest]
	#[case("File", 'F', "<kbd>F</kbd>ile")]
	#[case("Exit", 't', "Exi<kbd>t</kbd>")]
	#[case("Über", 'b', "Ü<kbd>b</kbd>er")]
	#[case("a<b", 'b', "a&lt;<kbd>b</kbd>")]
	#[case("Open", 'z', "Open (<kbd>z</kbd>)")]
	fn test_accel(#[case] label: &str, #[case] key: char, #[case] expected: &str) {
		assert_eq!(render_to_string(accel(label, key)).unwrap(), expected);
	}
}
