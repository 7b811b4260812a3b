//! Template (.pot) handling: validation, automatic repair, and generation.

mod assets;
mod diagnostic;
mod edit;
mod validate;

pub use assets::assets_to_pot;
pub use validate::{PotError, PotValidator};
