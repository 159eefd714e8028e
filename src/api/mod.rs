//! API client for the external catalog service (PokéAPI)

pub mod pokeapi;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use pokeapi::{fetch_image, fetch_page, fetch_pokemon, fetch_type, DEFAULT_BASE_URL};
