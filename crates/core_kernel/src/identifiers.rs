//! Strongly-typed identifiers for domain records
//!
//! Record identifiers are caller-supplied strings bounded to 50 characters.
//! Newtype wrappers provide type safety and prevent accidental mixing of
//! different identifier types; construction validates the bound once so the
//! rest of the system can trust a typed id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::validation::validate_string;

/// Maximum identifier length shared by all record types
pub const MAX_ID_LEN: usize = 50;

macro_rules! define_id {
    ($name:ident, $field:literal) => {
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a validated identifier from a caller-supplied string
            pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
                let value = value.into();
                validate_string(&value, $field, MAX_ID_LEN)?;
                Ok(Self(value))
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier, returning the underlying string
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(PolicyholderId, "Policyholder ID");
define_id!(PolicyId, "Policy ID");
define_id!(ClaimId, "Claim ID");
