//! Typed identifier newtypes backed by positive integers.
//!
//! Ids are assigned by the store as `max + 1` (see [`RecordId::successor`]),
//! so unlike random identifiers they carry ordering.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An identifier that a store can allocate sequentially.
pub trait RecordId: Copy + Eq + Ord + fmt::Debug + fmt::Display + Send + Sync {
    /// Identifier given to the first record of an empty collection.
    const FIRST: Self;

    /// The identifier immediately after `self`, or `None` once the integer
    /// range is used up.
    #[must_use]
    fn successor(self) -> Option<Self>;
}

/// A record addressable by a [`RecordId`].
pub trait Record {
    type Id: RecordId;

    /// The record's identifier.
    fn id(&self) -> Self::Id;
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw integer id.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Access the raw integer.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl RecordId for $name {
            const FIRST: Self = Self(1);

            fn successor(self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);

define_id!(
    /// Unique identifier for a [`Pet`](crate::pet::Pet).
    PetId
);
