//! Error types for pokedex_browser

use std::fmt;

/// Unified error type for catalog operations
#[derive(Debug)]
pub enum PokedexError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON response
    Parse(serde_json::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// Pokémon not found on the catalog service
    PokemonNotFound(String),
}

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokedexError::Network(e) => write!(f, "Network error: {}", e),
            PokedexError::Parse(e) => write!(f, "Parse error: {}", e),
            PokedexError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            PokedexError::PokemonNotFound(name) => {
                write!(f, "Pokémon not found: {}", name)
            }
        }
    }
}

impl std::error::Error for PokedexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PokedexError::Network(e) => Some(e),
            PokedexError::Parse(e) => Some(e),
            PokedexError::HttpStatus(_) => None,
            PokedexError::PokemonNotFound(_) => None,
        }
    }
}

impl From<reqwest::Error> for PokedexError {
    fn from(err: reqwest::Error) -> Self {
        PokedexError::Network(err)
    }
}

impl From<serde_json::Error> for PokedexError {
    fn from(err: serde_json::Error) -> Self {
        PokedexError::Parse(err)
    }
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, PokedexError>;
