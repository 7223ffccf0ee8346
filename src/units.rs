//! Ready-made kinds for angles and lengths.
//!
//! The angle kinds wrap around and convert circularly, so that e.g. 359° in
//! [`Deg360`] becomes -1° in [`Deg180`]. The length kinds invalidate values
//! outside their range and convert linearly, so that e.g. -567 mm in
//! [`MilliM`] becomes -567,000 µm in [`MicroM`].



//		Modules																											

#[cfg(test)]
#[path = "tests/units.rs"]
mod tests;



//		Packages																										

use crate::{
	bounded_int,
	converters::{CircularScale, LinearScale},
	resolvers::{Modulo, SetInvalid},
};



//		Constants																										

/// The number of micro-radians in a full turn, rounded down.
pub const MICRO_RAD_2PI: i64 = 6_283_185;



//		Angles																											

bounded_int! {
	/// An angle in whole degrees, in `[0, 359]`.
	pub type Deg360 = i64 [0, 359] as Deg360Bounds {
		resolver:  Modulo;
		converter: CircularScale;
		ops:       [Increment, Decrement, Add, Sub];
	}
}

bounded_int! {
	/// An angle in whole degrees, in `[-179, 180]`.
	pub type Deg180 = i64 [-179, 180] as Deg180Bounds {
		resolver:  Modulo;
		converter: CircularScale;
		ops:       [Increment, Decrement, Add, Sub, Neg];
	}
}

bounded_int! {
	/// An angle in micro-radians, in `[0, 2π)`.
	pub type Rad2Pi = i64 [0, MICRO_RAD_2PI as i128 - 1] as Rad2PiBounds {
		resolver:  Modulo;
		converter: CircularScale;
		ops:       [Increment, Decrement, Add, Sub];
	}
}



//		Lengths																											

bounded_int! {
	/// A length in millimetres, within a kilometre either side of zero.
	pub type MilliM = i64 [-1_000_000, 1_000_000] as MilliMBounds {
		resolver:  SetInvalid;
		converter: LinearScale;
		ops:       [Add, Sub, Neg];
	}
}

bounded_int! {
	/// A length in micrometres, within a kilometre either side of zero.
	pub type MicroM = i64 [-1_000_000_000, 1_000_000_000] as MicroMBounds {
		resolver:  SetInvalid;
		converter: LinearScale;
		ops:       [Add, Sub, Neg];
	}
}

bounded_int! {
	/// A length in millimetres, from zero to two kilometres.
	pub type MilliM2Million = i64 [0, 2_000_000] as MilliM2MillionBounds {
		resolver:  SetInvalid;
		converter: LinearScale;
		ops:       [Add, Sub];
	}
}


