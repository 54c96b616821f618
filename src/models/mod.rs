pub mod card;
pub mod collection;
pub mod set;

pub use card::*;
pub use collection::*;
pub use set::*;
