//! PokéAPI endpoint functions
//!
//! Uses async reqwest for non-blocking HTTP requests. Each function takes
//! the base URL explicitly so tests can point it at a local mock server.

use crate::error::{PokedexError, Result};
use crate::models::{EvolutionChain, Pokemon, PokemonPage, Species, TypeIndex, TypeMembership};

/// Production host of the catalog service
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

const USER_AGENT: &str = "PokedexBrowser/1.0";

/// Fetch one catalog page of Pokémon references
pub async fn fetch_page(
    http: &reqwest::Client,
    base_url: &str,
    offset: u32,
    limit: u32,
) -> Result<PokemonPage> {
    let url = format!("{}/pokemon?offset={}&limit={}", base_url, offset, limit);
    log::debug!("Fetching catalog page: {}", url);

    let response = http
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<PokemonPage>().await?)
    } else {
        Err(PokedexError::HttpStatus(response.status()))
    }
}

/// Fetch a single Pokémon by numeric id or lowercase name
pub async fn fetch_pokemon(
    http: &reqwest::Client,
    base_url: &str,
    id_or_name: &str,
) -> Result<Pokemon> {
    let url = format!("{}/pokemon/{}", base_url, urlencoding::encode(id_or_name));
    log::debug!("Fetching Pokémon: {}", url);

    let response = http
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<Pokemon>().await?)
    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
        Err(PokedexError::PokemonNotFound(id_or_name.to_string()))
    } else {
        Err(PokedexError::HttpStatus(response.status()))
    }
}

/// Fetch the index of all type names
pub async fn fetch_type_index(http: &reqwest::Client, base_url: &str) -> Result<TypeIndex> {
    let url = format!("{}/type", base_url);
    log::debug!("Fetching type index: {}", url);

    let response = http
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<TypeIndex>().await?)
    } else {
        Err(PokedexError::HttpStatus(response.status()))
    }
}

/// Fetch the full membership list of one type
pub async fn fetch_type(
    http: &reqwest::Client,
    base_url: &str,
    name: &str,
) -> Result<TypeMembership> {
    let url = format!("{}/type/{}", base_url, urlencoding::encode(name));
    log::debug!("Fetching type membership: {}", url);

    let response = http
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<TypeMembership>().await?)
    } else {
        Err(PokedexError::HttpStatus(response.status()))
    }
}

/// Fetch a species resource by its absolute URL
pub async fn fetch_species(http: &reqwest::Client, url: &str) -> Result<Species> {
    log::debug!("Fetching species: {}", url);

    let response = http.get(url).header("User-Agent", USER_AGENT).send().await?;

    if response.status().is_success() {
        Ok(response.json::<Species>().await?)
    } else {
        Err(PokedexError::HttpStatus(response.status()))
    }
}

/// Fetch an evolution chain by its absolute URL
pub async fn fetch_evolution_chain(http: &reqwest::Client, url: &str) -> Result<EvolutionChain> {
    log::debug!("Fetching evolution chain: {}", url);

    let response = http.get(url).header("User-Agent", USER_AGENT).send().await?;

    if response.status().is_success() {
        Ok(response.json::<EvolutionChain>().await?)
    } else {
        Err(PokedexError::HttpStatus(response.status()))
    }
}

/// Fetch image bytes from a URL
pub async fn fetch_image(http: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    log::debug!("Fetching image from URL: {}", url);

    let response = http.get(url).header("User-Agent", USER_AGENT).send().await?;

    if response.status().is_success() {
        Ok(response.bytes().await?.to_vec())
    } else {
        Err(PokedexError::HttpStatus(response.status()))
    }
}

#[cfg(test)]
#[path = "pokeapi_tests.rs"]
mod tests;
