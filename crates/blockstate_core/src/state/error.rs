use thiserror::Error;

use crate::state::{Tag, TagKind};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, StateError>;

/// Failure to decode one block-state property.
///
/// Both causes are terminal: nothing in the reader retries or substitutes a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
	/// Property is absent, or present with a tag kind the accessor does not accept.
	#[error("property \"{name}\" {}", describe_found(.found))]
	MissingOrWrongType {
		/// Property name that was looked up.
		name: String,
		/// Kind of the tag found under `name`, `None` when absent.
		found: Option<TagKind>,
	},
	/// Tag kind matched but the stored value is outside the accepted set or range.
	#[error("property \"{name}\" has unexpected value \"{value}\"{}", describe_reason(.reason))]
	BadValue {
		/// Property name that was looked up.
		name: String,
		/// Stringified offending value.
		value: String,
		/// Optional human-readable explanation.
		reason: Option<String>,
	},
}

impl StateError {
	/// Build a missing/wrong-type failure from the lookup result for `name`.
	pub fn missing_or_wrong_type(name: &str, tag: Option<&Tag>) -> Self {
		Self::MissingOrWrongType {
			name: name.to_owned(),
			found: tag.map(Tag::kind),
		}
	}

	/// Build a bad-value failure for `name` carrying the stringified value.
	pub fn bad_value(name: &str, value: impl Into<String>, reason: Option<String>) -> Self {
		Self::BadValue {
			name: name.to_owned(),
			value: value.into(),
			reason,
		}
	}

	/// Property name the failure refers to.
	pub fn name(&self) -> &str {
		match self {
			Self::MissingOrWrongType { name, .. } | Self::BadValue { name, .. } => name,
		}
	}

	/// Tag kind observed for a type failure; `None` for absent tags and value failures.
	pub fn found(&self) -> Option<TagKind> {
		match self {
			Self::MissingOrWrongType { found, .. } => *found,
			Self::BadValue { .. } => None,
		}
	}

	/// Stringified offending value for a value failure.
	pub fn value(&self) -> Option<&str> {
		match self {
			Self::MissingOrWrongType { .. } => None,
			Self::BadValue { value, .. } => Some(value),
		}
	}

	/// Reason text attached to a value failure.
	pub fn reason(&self) -> Option<&str> {
		match self {
			Self::MissingOrWrongType { .. } => None,
			Self::BadValue { reason, .. } => reason.as_deref(),
		}
	}

	/// True when the property was absent altogether.
	pub fn is_missing(&self) -> bool {
		matches!(self, Self::MissingOrWrongType { found: None, .. })
	}
}

fn describe_found(found: &Option<TagKind>) -> String {
	match found {
		Some(kind) => format!("has unexpected type {}", kind.as_str()),
		None => "is missing".to_owned(),
	}
}

fn describe_reason(reason: &Option<String>) -> String {
	match reason {
		Some(reason) => format!(" ({reason})"),
		None => String::new(),
	}
}
