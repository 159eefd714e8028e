//! Pokédex catalog browser
//!
//! Fetches Pokémon data from the PokéAPI, caches responses in memory for
//! the process lifetime, preloads artwork, and derives the views the
//! catalog UI renders: filtered and sorted listings, detail pages with
//! evolution chains, and similar-Pokémon sets.

pub mod api;
pub mod cache;
pub mod client;
pub mod detail;
pub mod error;
pub mod formatters;
pub mod listing;
pub mod models;

// Re-export commonly used items
pub use cache::{ImagePreloader, PreloadState, ResponseCache};
pub use client::{CatalogClient, MAX_CHAIN_STAGES, MAX_POKEMON, SIMILAR_LIMIT};
pub use detail::{load_detail, load_detail_guarded, DetailSession, DetailTicket, PokemonDetail};
pub use error::{PokedexError, Result};
pub use listing::{
    build_page, page_window, CatalogBrowser, ListingPage, ListingQuery, SortOrder, PAGE_SIZE,
};
pub use models::{NamedResource, Pokemon, PokemonPage, TypeMembership};
