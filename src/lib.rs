//! The Boundint crate provides integers that are confined to a closed range,
//! with the policy for out-of-range values and the strategy for converting
//! between ranges chosen when each kind of bounded integer is declared.
//!
//! ```
//! use boundint::units::{Deg180, Deg360};
//!
//! let bearing = Deg360::new(510);
//! assert_eq!(bearing.get(), 150);
//!
//! let heading = Deg180::convert_from(Deg360::new(359)).unwrap();
//! assert_eq!(heading.get(), -1);
//! ```



//		Global configuration																							

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::let_underscore_must_use,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	unused_results,
	reason = "Not useful in unit tests"
))]



//		Modules																											

mod bounded;
mod bounds;
pub mod capability;
mod converters;
mod errors;
mod integer;
mod iter;
mod macros;
mod resolvers;
pub mod units;



//		Packages																										

pub use bounded::BoundedInt;
pub use bounds::{Bounds, Span};
pub use converters::{CircularScale, Converter, LinearScale};
pub use errors::BoundedIntError;
pub use integer::{Integer, Operand};
pub use iter::BoundedIntIter;
pub use resolvers::{Infallible, Modulo, Resolution, Resolver, SetInvalid, Throw};


