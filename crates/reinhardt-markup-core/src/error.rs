//! Error types for markup construction and rendering.

/// Boxed error produced by caller-supplied deferred content.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while building or rendering a markup tree.
///
/// Only [`RenderError::DeferredEvaluationFailure`] is deferred: the render
/// stream yields the end tags of every still-open element before it. The
/// other variants surface at the exact point they are detected.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	/// A verbatim `<script>`/`<style>` payload contains a sequence that would
	/// break out of the block.
	#[error("literal <{tag}> content may not contain <!--, -->, <{tag}> or </{tag}>")]
	InvalidLiteralPayload {
		/// Tag name of the literal block.
		tag: &'static str,
	},

	/// A `data-*` attribute key contains a character outside `[A-Za-z0-9_-]`.
	#[error("data attribute name `{key}` cannot contain character `{character}`")]
	InvalidAttributeName {
		/// The offending key, without the `data-` prefix.
		key: String,
		/// First disallowed character found in the key.
		character: char,
	},

	/// Deferred content or a lazy content sequence failed while rendering.
	#[error("deferred content evaluation failed: {source}")]
	DeferredEvaluationFailure {
		/// The error raised by the caller-supplied content.
		#[source]
		source: BoxError,
	},

	/// Writing rendered fragments to a sink failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl RenderError {
	/// Wraps an error raised by deferred content.
	pub fn deferred(source: impl Into<BoxError>) -> Self {
		Self::DeferredEvaluationFailure {
			source: source.into(),
		}
	}

	/// Returns `true` if this error was deferred until open elements were closed.
	pub fn is_deferred(&self) -> bool {
		matches!(self, Self::DeferredEvaluationFailure { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::error::Error;

	#[rstest]
	fn test_invalid_literal_payload_message() {
		let err = RenderError::InvalidLiteralPayload { tag: "script" };
		assert_eq!(
			err.to_string(),
			"literal <script> content may not contain <!--, -->, <script> or </script>"
		);
	}

	#[rstest]
	fn test_invalid_attribute_name_message() {
		let err = RenderError::InvalidAttributeName {
			key: "a b".to_string(),
			character: ' ',
		};
		assert_eq!(
			err.to_string(),
			"data attribute name `a b` cannot contain character ` `"
		);
		assert!(!err.is_deferred());
	}

	#[rstest]
	fn test_deferred_keeps_source() {
		let err = RenderError::deferred("boom");
		assert!(err.is_deferred());
		assert_eq!(err.source().map(|s| s.to_string()), Some("boom".to_string()));
	}
}
