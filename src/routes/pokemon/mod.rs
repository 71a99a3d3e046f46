mod handler;
mod model;

pub use handler::{create, index};
pub use model::{CreatePokemonRequest, Pokemon};
