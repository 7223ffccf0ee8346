//! Iteration over the values of a bounded-integer kind.



//		Modules																											

#[cfg(test)]
#[path = "tests/iter.rs"]
mod tests;



//		Packages																										

use crate::{
	bounded::BoundedInt,
	bounds::Bounds,
};
use core::{
	iter::FusedIterator,
	num::NonZeroU64,
};
use tracing::debug;



//		Enums																											

//		State																	
/// The state of a [`BoundedIntIter`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
	/// There are values left to yield.
	Active,
	
	/// The iterator has finished, and yields nothing more.
	Exhausted,
}



//		Structs																											

//		BoundedIntIter															
/// An iterator stepping through the values of a kind.
/// 
/// Starting from a given value, each step moves by the stride in the chosen
/// direction, with the result passing through the kind's resolver. The
/// iterator finishes when:
/// 
///   - a step produces an invalid value, or the resolver rejects it, which is
///     how iteration ends for [`SetInvalid`](crate::SetInvalid) and
///     [`Throw`](crate::Throw) kinds; or
///   - it has yielded the end value, which is the start value stepped once in
///     the opposite direction. With a [`Modulo`](crate::Modulo) kind this
///     means going round the circle exactly once.
/// 
/// An invalid start value yields nothing. Cloning the iterator gives an
/// independent iterator that restarts from the same position.
/// 
/// # Equality
/// 
/// Two iterators are equal when their current values are equal, regardless of
/// direction, stride, or how far they have come. Exhausted iterators all
/// compare equal to each other.
/// 
#[derive(Clone, Debug)]
pub struct BoundedIntIter<B: Bounds> {
	/// The value to be yielded next, or the invalid sentinel once exhausted.
	current: BoundedInt<B>,
	
	/// The last value to be yielded.
	end:     BoundedInt<B>,
	
	/// The distance of each step.
	stride:  NonZeroU64,
	
	/// Whether the iterator counts downwards.
	reverse: bool,
	
	/// The state of the iterator.
	state:   State,
}

//󰭅		BoundedIntIter															
impl<B: Bounds> BoundedIntIter<B> {
	//		Constructors														
	
	//		new																	
	/// Creates a new [`BoundedIntIter`] with a stride of one.
	/// 
	/// # Parameters
	/// 
	/// * `start`   - The first value to yield.
	/// * `reverse` - Whether to count downwards.
	/// 
	#[must_use]
	pub fn new(start: BoundedInt<B>, reverse: bool) -> Self {
		Self::with_stride_from(start, reverse, NonZeroU64::MIN)
	}
	
	//		Public methods														
	
	//		current																
	/// The value that will be yielded next. This is invalid once the iterator
	/// is exhausted.
	#[must_use]
	pub const fn current(&self) -> BoundedInt<B> {
		self.current
	}
	
	//		end																	
	/// The last value the iterator will yield, unless a step fails first.
	#[must_use]
	pub const fn end(&self) -> BoundedInt<B> {
		self.end
	}
	
	//		is_exhausted														
	/// Determines whether the iterator has finished.
	#[must_use]
	pub fn is_exhausted(&self) -> bool {
		self.state == State::Exhausted
	}
	
	//		is_reverse															
	/// Determines whether the iterator counts downwards.
	#[must_use]
	pub const fn is_reverse(&self) -> bool {
		self.reverse
	}
	
	//		with_stride															
	/// Changes the distance of each step, starting again from the current
	/// value.
	/// 
	/// # Parameters
	/// 
	/// * `stride` - The distance of each step.
	/// 
	#[must_use]
	pub fn with_stride(self, stride: NonZeroU64) -> Self {
		Self::with_stride_from(self.current, self.reverse, stride)
	}
	
	//		Private methods														
	
	//		delta																
	/// The signed distance of a step, forwards or against the direction.
	fn delta(stride: NonZeroU64, reverse: bool, against: bool) -> i128 {
		let distance  = i128::from(stride.get());
		#[expect(clippy::arithmetic_side_effects, reason = "Stride is at most 64 bits wide")]
		let backwards = -distance;
		if reverse == against { distance } else { backwards }
	}
	
	//		step																
	/// Steps from a value, returning [`None`] if the step fails.
	fn step(from: BoundedInt<B>, delta: i128) -> Option<BoundedInt<B>> {
		from.offset(delta).ok().filter(BoundedInt::is_valid)
	}
	
	//		with_stride_from													
	/// Creates a new [`BoundedIntIter`] with the given stride.
	fn with_stride_from(start: BoundedInt<B>, reverse: bool, stride: NonZeroU64) -> Self {
		let end = Self::step(start, Self::delta(stride, reverse, true)).unwrap_or(BoundedInt::INVALID);
		Self {
			current: start,
			end,
			stride,
			reverse,
			state:   if start.is_valid() { State::Active } else { State::Exhausted },
		}
	}
}

//󰭅		Iterator																
impl<B: Bounds> Iterator for BoundedIntIter<B> {
	type Item = BoundedInt<B>;
	
	//		next																
	fn next(&mut self) -> Option<Self::Item> {
		if self.state == State::Exhausted {
			return None;
		}
		let item = self.current;
		let next = if item == self.end {
			None
		} else {
			Self::step(item, Self::delta(self.stride, self.reverse, false))
		};
		if let Some(value) = next {
			self.current = value;
		} else {
			debug!(kind = B::NAME, last = %item, "Iterator exhausted");
			self.current = BoundedInt::INVALID;
			self.state   = State::Exhausted;
		}
		Some(item)
	}
}

//󰭅		FusedIterator															
impl<B: Bounds> FusedIterator for BoundedIntIter<B> {}

//󰭅		PartialEq																
impl<B: Bounds> PartialEq for BoundedIntIter<B> {
	//		eq																	
	fn eq(&self, other: &Self) -> bool {
		self.current == other.current
	}
}

//󰭅		Eq																		
impl<B: Bounds> Eq for BoundedIntIter<B> {}

//󰭅		BoundedInt																
impl<B: Bounds> BoundedInt<B> {
	//		Iteration															
	
	//		iter																
	/// Iterates over the values of the kind from the lowest upwards.
	#[must_use]
	pub fn iter() -> BoundedIntIter<B> {
		BoundedIntIter::new(Self::min_value(), false)
	}
	
	//		iter_from															
	/// Iterates upwards from the given value.
	/// 
	/// # Parameters
	/// 
	/// * `start` - The first value to yield.
	/// 
	#[must_use]
	pub fn iter_from(start: Self) -> BoundedIntIter<B> {
		BoundedIntIter::new(start, false)
	}
	
	//		iter_rev															
	/// Iterates over the values of the kind from the highest downwards.
	#[must_use]
	pub fn iter_rev() -> BoundedIntIter<B> {
		BoundedIntIter::new(Self::max_value(), true)
	}
	
	//		iter_rev_from														
	/// Iterates downwards from the given value.
	/// 
	/// # Parameters
	/// 
	/// * `start` - The first value to yield.
	/// 
	#[must_use]
	pub fn iter_rev_from(start: Self) -> BoundedIntIter<B> {
		BoundedIntIter::new(start, true)
	}
}


