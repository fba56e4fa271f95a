//! One intake form per product, each implementing the shared
//! validate -> aggregate -> emit -> reset submission pipeline over its own
//! field store, line-item editor, error slot, and re-entrancy flag.

mod golfers;
mod marine_cargo;
mod medisure;

pub use golfers::{GolfersForm, GolfersQuote};
pub use marine_cargo::{MarineCargoForm, MarineCargoQuote};
pub use medisure::{FamilyMedisureForm, FamilyMedisureQuote};
