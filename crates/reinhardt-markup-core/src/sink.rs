//! Writing rendered fragments to I/O sinks.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::RenderError;
use crate::node::IntoNode;
use crate::options::RenderOptions;
use crate::render::render_fragments_with;

/// Streams the fragments of `root` into `writer` as they are produced.
///
/// Returns the number of bytes written. If deferred content fails, every
/// fragment produced before the failure, including the end tags of open
/// elements, is written and flushed before the error is returned.
pub fn write_to<W: Write>(
	mut writer: W,
	root: impl IntoNode,
	options: RenderOptions,
) -> Result<usize, RenderError> {
	let mut written = 0;
	for fragment in render_fragments_with(root, options) {
		match fragment {
			Ok(fragment) => {
				writer.write_all(fragment.as_bytes())?;
				written += fragment.len();
			}
			Err(err) => {
				writer.flush()?;
				return Err(err);
			}
		}
	}
	writer.flush()?;
	Ok(written)
}

/// Renders `root` into a newly created (or truncated) file.
///
/// The file is closed on every exit path. On a deferred failure the file
/// holds the well-formed prefix that was rendered before the error.
pub fn write_to_file(
	path: impl AsRef<Path>,
	root: impl IntoNode,
	options: RenderOptions,
) -> Result<usize, RenderError> {
	let path = path.as_ref();
	let file = File::create(path)?;
	let result = write_to(BufWriter::new(file), root, options);
	match &result {
		Ok(bytes) => debug!(path = %path.display(), bytes, "rendered markup to file"),
		Err(err) => debug!(path = %path.display(), error = %err, "rendering to file failed"),
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::node::Node;
	use rstest::rstest;

	#[rstest]
	fn test_write_to_counts_bytes() {
		let mut out = Vec::new();
		let written = write_to(&mut out, ("a<b", Node::raw("<br>")), RenderOptions::new()).unwrap();
		assert_eq!(out, b"a&lt;b<br>");
		assert_eq!(written, out.len());
	}

	#[rstest]
	fn test_write_to_keeps_prefix_on_failure() {
		let mut out = Vec::new();
		let root = ("ok", Node::try_deferred(|| Err::<Node, _>("nope")), "never");
		let err = write_to(&mut out, root, RenderOptions::new()).unwrap_err();
		assert!(err.is_deferred());
		assert_eq!(out, b"ok");
	}
}
