//! Integration tests for the writer and file sinks

use std::fs;

use reinhardt_markup_core::{
	AttributeWriter, Element, Node, RenderError, RenderOptions, write_to, write_to_file,
};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[derive(Debug)]
struct Article {
	children: Vec<Node>,
}

impl Element for Article {
	fn tag_name(&self) -> &'static str {
		"article"
	}

	fn write_attributes(&self, out: &mut AttributeWriter) -> Result<(), RenderError> {
		out.text("lang", Some("en"));
		Ok(())
	}

	fn child_nodes(&self) -> &[Node] {
		&self.children
	}
}

#[fixture]
fn temp_dir() -> TempDir {
	tempfile::tempdir().unwrap()
}

#[rstest]
fn test_write_to_file_creates_file(temp_dir: TempDir) {
	// Arrange
	let path = temp_dir.path().join("out.html");
	let root = Node::element(Article {
		children: vec![Node::text("Fish & chips")],
	});

	// Act
	let written = write_to_file(&path, root, RenderOptions::new()).unwrap();

	// Assert
	let content = fs::read_to_string(&path).unwrap();
	assert_eq!(content, "<article lang=en>Fish &amp; chips</article>");
	assert_eq!(written, content.len());
}

#[rstest]
fn test_write_to_file_truncates_existing(temp_dir: TempDir) {
	// Arrange
	let path = temp_dir.path().join("out.html");
	fs::write(&path, "previous content that is much longer than the new one").unwrap();

	// Act
	write_to_file(&path, "new", RenderOptions::new()).unwrap();

	// Assert
	assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[rstest]
fn test_write_to_file_flushes_prefix_on_deferred_failure(temp_dir: TempDir) {
	// Arrange
	let path = temp_dir.path().join("partial.html");
	let root = Node::element(Article {
		children: vec![
			Node::text("intro"),
			Node::try_deferred(|| Err::<Node, _>("query failed")),
			Node::text("never rendered"),
		],
	});

	// Act
	let err = write_to_file(&path, root, RenderOptions::new()).unwrap_err();

	// Assert
	assert!(err.is_deferred());
	assert_eq!(
		fs::read_to_string(&path).unwrap(),
		"<article lang=en>intro</article>"
	);
}

#[rstest]
fn test_write_to_file_reports_io_error(temp_dir: TempDir) {
	// Arrange
	let path = temp_dir.path().join("missing-dir").join("out.html");

	// Act
	let err = write_to_file(&path, "x", RenderOptions::new()).unwrap_err();

	// Assert
	assert!(matches!(err, RenderError::Io(_)));
}

#[rstest]
fn test_write_to_honours_options() {
	// Arrange
	let mut out = Vec::new();
	let root = Node::element(Article { children: vec![] });

	// Act
	let written = write_to(&mut out, root, RenderOptions::new().all_tags(true)).unwrap();

	// Assert
	assert_eq!(String::from_utf8(out).unwrap(), "<article lang=en></article>");
	assert_eq!(written, 27);
}
