//! Enumerated attribute values.
//!
//! Every enumeration maps its members to the fixed token written into the
//! markup. Unset attributes are represented by `None` on the element, so no
//! enumeration carries an "unset" member.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use reinhardt_markup_core::{FlagSet, Token};

/// Error returned when parsing an unknown attribute token.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a valid {kind} token")]
pub struct UnknownToken {
	/// Name of the enumeration.
	pub kind: &'static str,
	/// The rejected input.
	pub value: String,
}

macro_rules! token_enum {
	(
		$(#[$meta:meta])*
		$name:ident {
			$($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum $name {
			$($(#[$vmeta])* $variant),+
		}

		impl $name {
			/// Every member, in declaration order.
			pub const ALL: &'static [$name] = &[$($name::$variant),+];

			/// The markup token of this member.
			pub const fn as_str(self) -> &'static str {
				match self {
					$($name::$variant => $token),+
				}
			}
		}

		impl Token for $name {
			fn token(self) -> &'static str {
				self.as_str()
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl FromStr for $name {
			type Err = UnknownToken;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($token => Ok($name::$variant),)+
					_ => Err(UnknownToken {
						kind: stringify!($name),
						value: s.to_string(),
					}),
				}
			}
		}
	};
}

token_enum! {
	/// Shape of an image-map area.
	Shape {
		Circle => "circle",
		Default => "default",
		Poly => "poly",
		Rect => "rect",
	}
}

token_enum! {
	/// CORS settings for media and images.
	Cors {
		Anonymous => "anonymous",
		UseCredentials => "use-credentials",
	}
}

token_enum! {
	/// Preload hint for media elements.
	Preload {
		None => "none",
		Metadata => "metadata",
		Auto => "auto",
	}
}

token_enum! {
	ButtonType {
		Submit => "submit",
		Reset => "reset",
		Button => "button",
	}
}

token_enum! {
	CommandType {
		Command => "command",
		Checkbox => "checkbox",
		Radio => "radio",
	}
}

token_enum! {
	Autocomplete {
		On => "on",
		Off => "off",
	}
}

token_enum! {
	/// Form submission encoding.
	Enctype {
		UrlEncoded => "application/x-www-form-urlencoded",
		Multipart => "multipart/form-data",
		Plain => "text/plain",
	}
}

token_enum! {
	/// The `type` of an `<input>`.
	InputType {
		Hidden => "hidden",
		Text => "text",
		Search => "search",
		Tel => "tel",
		Url => "url",
		Email => "email",
		Password => "password",
		Datetime => "datetime",
		Date => "date",
		Month => "month",
		Week => "week",
		Time => "time",
		DatetimeLocal => "datetime-local",
		Number => "number",
		Range => "range",
		Color => "color",
		Checkbox => "checkbox",
		Radio => "radio",
		File => "file",
		Submit => "submit",
		Image => "image",
		Reset => "reset",
		Button => "button",
	}
}

token_enum! {
	Keytype {
		Rsa => "rsa",
	}
}

token_enum! {
	MenuType {
		Context => "context",
		Toolbar => "toolbar",
	}
}

token_enum! {
	/// Cells covered by a header cell.
	Scope {
		Row => "row",
		Col => "col",
		Rowgroup => "rowgroup",
		Colgroup => "colgroup",
		Auto => "auto",
	}
}

token_enum! {
	/// Line wrapping of submitted `<textarea>` values.
	Wrap {
		Soft => "soft",
		Hard => "hard",
	}
}

token_enum! {
	TrackKind {
		Subtitles => "subtitles",
		Captions => "captions",
		Descriptions => "descriptions",
		Chapters => "chapters",
		Metadata => "metadata",
	}
}

token_enum! {
	/// Explicit `true`/`false` value for enumerated boolean attributes.
	TrueFalse {
		True => "true",
		False => "false",
	}
}

impl From<bool> for TrueFalse {
	fn from(value: bool) -> Self {
		if value { TrueFalse::True } else { TrueFalse::False }
	}
}

token_enum! {
	/// Text direction.
	Dir {
		Ltr => "ltr",
		Rtl => "rtl",
		Auto => "auto",
	}
}

token_enum! {
	Dropzone {
		Copy => "copy",
		Move => "move",
		Link => "link",
	}
}

token_enum! {
	/// HTTP method of a form submission.
	Method {
		Get => "get",
		Post => "post",
	}
}

/// Restrictions lifted for the content of an `<iframe>`.
///
/// Bits combine with `|`; the rendered token list is always in ascending
/// bit order.
///
/// ```
/// use reinhardt_markup_tags::Sandbox;
///
/// let sandbox = Sandbox::ALLOW_SCRIPTS | Sandbox::ALLOW_SAME_ORIGIN;
/// assert!(sandbox.contains(Sandbox::ALLOW_SCRIPTS));
/// assert_eq!(sandbox.to_string(), "allow-same-origin allow-scripts");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sandbox(u32);

impl Sandbox {
	pub const NONE: Sandbox = Sandbox(0);
	pub const ALLOW_SAME_ORIGIN: Sandbox = Sandbox(1);
	pub const ALLOW_TOP_NAVIGATION: Sandbox = Sandbox(2);
	pub const ALLOW_FORMS: Sandbox = Sandbox(4);
	pub const ALLOW_SCRIPTS: Sandbox = Sandbox(8);

	const TOKENS: [(u32, &'static str); 4] = [
		(1, "allow-same-origin"),
		(2, "allow-top-navigation"),
		(4, "allow-forms"),
		(8, "allow-scripts"),
	];

	pub const fn is_empty(self) -> bool {
		self.0 == 0
	}

	pub const fn contains(self, other: Sandbox) -> bool {
		self.0 & other.0 == other.0
	}
}

impl BitOr for Sandbox {
	type Output = Sandbox;

	fn bitor(self, rhs: Sandbox) -> Sandbox {
		Sandbox(self.0 | rhs.0)
	}
}

impl BitOrAssign for Sandbox {
	fn bitor_assign(&mut self, rhs: Sandbox) {
		self.0 |= rhs.0;
	}
}

impl FlagSet for Sandbox {
	fn bits(self) -> u32 {
		self.0
	}

	fn bit_token(bit: u32) -> Option<&'static str> {
		Self::TOKENS
			.iter()
			.find(|(value, _)| *value == bit)
			.map(|(_, token)| *token)
	}
}

impl fmt::Display for Sandbox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for (bit, token) in Self::TOKENS {
			if self.0 & bit != 0 {
				if !first {
					f.write_str(" ")?;
				}
				f.write_str(token)?;
				first = false;
			}
		}
		Ok(())
	}
}
