//! Catalog identifiers.
//!
//! The catalog service numbers products and categories with plain integers.
//! Each gets its own wrapper so a category number can never be passed where
//! a product is expected, and a cart line is always keyed by a product.

/// Declare an integer identifier type.
///
/// The generated type serializes as a bare JSON number, orders and hashes
/// like its `i64`, displays without decoration (so it drops straight into
/// `/product/{id}` paths), and parses from trimmed text for route segments
/// and command-line arguments.
///
/// ```rust
/// # use product_store_core::define_id;
/// define_id!(VariantId);
///
/// let id: VariantId = " 12 ".parse().unwrap();
/// assert_eq!(id.as_i64(), 12);
/// assert_eq!(format!("/variant/{id}"), "/variant/12");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);
