use std::fmt;

use serde::{Deserialize, Serialize};

/// Host documents carry opaque string identifiers (not UUIDs), so every id
/// type here is a thin newtype over `String`. The macro keeps them from being
/// mixed up: a `FolderId` never flows into an API expecting a `CreatureId`.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Host document IDs
define_id!(ActorId);
define_id!(CreatureId);
define_id!(FolderId);
define_id!(TokenId);

// Scene artifact IDs
define_id!(MarkerId);
