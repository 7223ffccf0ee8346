//! Declaration of bounded-integer kinds.



//		Macros																											

//		bounded_int!															
/// Declares a bounded-integer kind, and a type alias for its values.
/// 
/// # Syntax
/// 
/// ```text
/// bounded_int! {
///     <visibility> type <Alias> = <storage> [<min>, <max>] as <Tag> {
///         resolver:  <Resolver>;
///         converter: <Converter>;
///         ops:       [<Capability>, ...];
///     }
/// }
/// ```
/// 
/// This declares a zero-sized tag type `<Tag>` implementing
/// [`Bounds`](crate::Bounds), implements the listed
/// [`capability`](crate::capability) traits for it, and declares
/// `<Alias>` as [`BoundedInt<Tag>`](crate::BoundedInt).
/// 
/// The block is optional, and so is each entry in it, but entries that are
/// present must appear in the order shown. The resolver defaults to
/// [`Modulo`](crate::Modulo), the converter to
/// [`LinearScale`](crate::LinearScale), and the list of operations to none.
/// 
/// The bounds are checked against the storage type when the kind is first
/// used, and invalid bounds are a compile-time error.
/// 
/// # Examples
/// 
/// ```
/// use boundint::{bounded_int, CircularScale, Modulo};
/// 
/// bounded_int! {
///     /// Compass bearing in whole degrees.
///     pub type Bearing = i32 [0, 359] as BearingBounds {
///         resolver:  Modulo;
///         converter: CircularScale;
///         ops:       [Increment, Add];
///     }
/// }
/// 
/// let mut bearing = Bearing::new(350);
/// bearing += 20;
/// assert_eq!(bearing.get(), 10);
/// ```
/// 
#[macro_export]
macro_rules! bounded_int {
	(
		$(#[$meta:meta])*
		$vis:vis type $alias:ident = $int:ident [$min:expr, $max:expr] as $tag:ident
		$({
			$(resolver:  $resolver:ty;)?
			$(converter: $converter:ty;)?
			$(ops:       [$($op:ident),* $(,)?];)?
		})?
	) => {
		#[doc = concat!("The range and policies of [`", stringify!($alias), "`].")]
		#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
		$vis struct $tag;
		
		impl $crate::Bounds for $tag {
			type Int       = $int;
			type Resolver  = $crate::__bounded_int_or!($($($resolver)?)? ; $crate::Modulo);
			type Converter = $crate::__bounded_int_or!($($($converter)?)? ; $crate::LinearScale);
			
			const MIN:  i128         = $min;
			const MAX:  i128         = $max;
			const NAME: &'static str = stringify!($alias);
		}
		
		$($($(
			impl $crate::capability::$op for $tag {}
		)*)?)?
		
		$(#[$meta])*
		$vis type $alias = $crate::BoundedInt<$tag>;
	};
}

//		__bounded_int_or!														
/// Picks the given type, or the default if none was given.
#[doc(hidden)]
#[macro_export]
macro_rules! __bounded_int_or {
	(; $default:ty) => {
		$default
	};
	($given:ty ; $default:ty) => {
		$given
	};
}


