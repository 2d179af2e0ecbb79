//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., non-empty names, validated
//! email, well-formed colors) so that once a value reaches the domain layer
//! it can be treated as trusted. Every wrapper deserializes through its
//! validating constructor.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use ammonia;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided color is not a `#rrggbb` hex triplet.
    #[error("invalid color: {0}")]
    InvalidColor(String),
    /// Provided document path does not point to a PDF file.
    #[error("document must be a PDF file")]
    InvalidDocument,
    /// Page size or page number was zero.
    #[error("{0} must be greater than zero")]
    NonPositive(&'static str),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trimmed_non_empty(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString)
    } else {
        Ok(trimmed.to_string())
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Trims the input; blank input is rejected.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trimmed_non_empty(value.into()).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    ClientId,
    "Stable identifier of a client record, never reused within a session."
);

non_empty_string_newtype!(
    EntryId,
    "Identifier of a settings catalog entry, user, template or chat."
);

non_empty_string_newtype!(ClientName, "Client display name.");

non_empty_string_newtype!(
    AgentName,
    "Name of the commercial agent owning a lead."
);

non_empty_string_newtype!(LocationName, "Site or branch name.");

non_empty_string_newtype!(PriorityName, "Priority tag label.");

non_empty_string_newtype!(CallStateName, "Call state label.");

non_empty_string_newtype!(DocumentName, "Knowledge document title.");

non_empty_string_newtype!(UserName, "Dashboard user display name.");

non_empty_string_newtype!(TemplateName, "Message template name.");

impl EntryId {
    /// Generates a fresh random identifier for a newly created entry.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Location value shown for records whose site is not known.
pub const UNKNOWN_LOCATION: &str = "Desconocido";

impl LocationName {
    /// The "unknown" location sentinel.
    pub fn unknown() -> Self {
        Self(UNKNOWN_LOCATION.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_LOCATION
    }
}

impl Default for LocationName {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct UserEmail(String);

impl UserEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = email.into().trim().to_lowercase();
        if normalized.validate_email() {
            Ok(Self(normalized))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserEmail> for String {
    fn from(value: UserEmail) -> Self {
        value.0
    }
}

/// `#rrggbb` color used to render priority and call state badges.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Accepts `#rrggbb` in either case and stores it lower-cased.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into().trim().to_lowercase();
        let valid = value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidColor(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self("#3b82f6".to_string())
    }
}

impl TryFrom<String> for HexColor {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

/// Free text stripped of unsafe markup. May be empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub struct SanitizedText(String);

impl SanitizedText {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(ammonia::clean(value.into().trim()).trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SanitizedText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<SanitizedText> for String {
    fn from(value: SanitizedText) -> Self {
        value.0
    }
}

/// Path of an uploaded knowledge document. Only PDF files are accepted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentPath(String);

impl DocumentPath {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let path = trimmed_non_empty(value.into())?;
        if path.to_lowercase().ends_with(".pdf") {
            Ok(Self(path))
        } else {
            Err(TypeConstraintError::InvalidDocument)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DocumentPath {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DocumentPath> for String {
    fn from(value: DocumentPath) -> Self {
        value.0
    }
}
