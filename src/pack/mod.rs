pub mod generator;

pub use generator::{generate_pack, PackGenerator, CARDS_PER_PACK, UNCOMMONS_PER_PACK};
