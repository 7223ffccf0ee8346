//! Walks through the built-in kinds, logging each resolution and conversion.
//! 
//! Run with `RUST_LOG=trace` to see the resolver and converter decisions.



//		Global configuration																							

#![expect(clippy::print_stdout, reason = "Demonstration output")]



//		Packages																										

use boundint::{
	BoundedIntError,
	bounded_int,
	Throw,
	units::{Deg180, Deg360, MicroM, MilliM, MilliM2Million, Rad2Pi},
};
use tracing_subscriber::EnvFilter;



//		Kinds																											

bounded_int! {
	/// A floor number in a building with three basements.
	type Floor = i8 [-3, 40] as FloorBounds {
		resolver: Throw;
		ops:      [Increment, Decrement];
	}
}



//		Functions																										

//		main																	
fn main() -> Result<(), BoundedIntError> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();
	
	//	Angles wrap around
	let bearing = Deg360::new(510);
	println!("Deg360(510)           = {bearing:#}");
	println!("Deg360(-1)            = {:#}", Deg360::new(-1));
	println!("Deg360(359) as Deg180 = {:#}", Deg180::convert_from(Deg360::new(359))?);
	println!("Deg360(180) as Rad2Pi = {:#}", Rad2Pi::convert_from(Deg360::new(180))?);
	
	//	Lengths become invalid
	let length = MilliM::new(-567_000);
	println!("MilliM(-567000) as MicroM         = {:#}", MicroM::convert_from(length)?);
	println!("MilliM(-567000) as MilliM2Million = {:#}", MilliM2Million::convert_from(length)?);
	println!("MilliM(1500000)                   = {:#}", MilliM::new(1_500_000));
	
	//	Floors reject out-of-range values
	let mut floor = Floor::try_new(39)?;
	floor.increment()?;
	println!("Top floor = {floor:#}");
	if let Err(err) = floor.increment() {
		println!("Going up again: {err}");
	}
	println!("Floor after the error = {floor:?}");
	
	//	Iteration stops at the edge of the range
	let basements: Vec<String> = Floor::iter().take_while(|f| f.get() < 0).map(|f| f.to_string()).collect();
	println!("Basements = {}", basements.join(", "));
	
	Ok(())
}


