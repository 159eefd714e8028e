//! Catalog client: cached fetch and aggregation over the PokéAPI
//!
//! Orchestrates the response cache, artwork preloader, and the speculative
//! neighbor fetches that warm the cache for detail-page navigation.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::join_all;
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::api::pokeapi::{self, DEFAULT_BASE_URL};
use crate::cache::{ImagePreloader, ResponseCache};
use crate::error::Result;
use crate::models::{Pokemon, PokemonPage, TypeMembership};

/// Highest Pokémon id served by the catalog service
pub const MAX_POKEMON: u32 = 1025;
/// Longest evolution chain walked before giving up on malformed input
pub const MAX_CHAIN_STAGES: usize = 16;
/// Maximum number of similar Pokémon returned
pub const SIMILAR_LIMIT: usize = 4;
/// Concurrent entity fetches while hydrating a catalog window
const HYDRATE_CONCURRENCY: usize = 32;
/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the catalog service with response caching and artwork
/// preloading
///
/// Cloning is cheap; clones share the same cache and preloader.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<Mutex<ResponseCache>>,
    preloader: ImagePreloader,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Create a client against the production catalog service
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a specific catalog service host
    pub fn with_base_url(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http: http.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: Arc::new(Mutex::new(ResponseCache::new())),
            preloader: ImagePreloader::new(http),
        }
    }

    /// Access the shared artwork preloader
    pub fn preloader(&self) -> &ImagePreloader {
        &self.preloader
    }

    /// Total number of cached responses
    pub fn cached_responses(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// One catalog page of Pokémon references, cached by (offset, limit)
    pub async fn page(&self, offset: u32, limit: u32) -> Result<PokemonPage> {
        let cached = self.cache.lock().unwrap().get_page(offset, limit).cloned();
        if let Some(page) = cached {
            log::info!("Cache hit for page {}+{}", offset, limit);
            return Ok(page);
        }

        log::info!("Cache miss for page {}+{}, fetching from PokéAPI", offset, limit);
        let page = pokeapi::fetch_page(&self.http, &self.base_url, offset, limit).await?;
        self.cache
            .lock()
            .unwrap()
            .insert_page(offset, limit, page.clone());
        Ok(page)
    }

    /// One Pokémon, cached by the normalized request parameter
    ///
    /// A fresh fetch by numeric id also warms the cache with both
    /// positional neighbors; those fetches are best-effort and invisible.
    pub async fn pokemon(&self, id_or_name: &str) -> Result<Pokemon> {
        let cached = self.cache.lock().unwrap().get_pokemon(id_or_name).cloned();
        if let Some(found) = cached {
            log::info!("Cache hit for Pokémon {}", id_or_name);
            // Repeat navigation to cached data still warms the image cache
            if let Some(url) = found.artwork_url() {
                self.preloader.preload(url);
            }
            return Ok(found);
        }

        log::info!("Cache miss for Pokémon {}, fetching from PokéAPI", id_or_name);
        let found = self.fetch_and_cache(id_or_name).await?;

        if let Ok(id) = ResponseCache::pokemon_key(id_or_name).parse::<u32>() {
            self.spawn_neighbor_prefetch(id);
        }
        Ok(found)
    }

    /// Fetch one Pokémon, populate the cache, and preload its artwork
    ///
    /// Does not speculate further; see [`CatalogClient::pokemon`].
    async fn fetch_and_cache(&self, id_or_name: &str) -> Result<Pokemon> {
        let key = ResponseCache::pokemon_key(id_or_name);
        let found = pokeapi::fetch_pokemon(&self.http, &self.base_url, &key).await?;
        self.cache.lock().unwrap().insert_pokemon(&key, found.clone());
        if let Some(url) = found.artwork_url() {
            self.preloader.preload(url);
        }
        Ok(found)
    }

    /// Warm the cache with the entities adjacent to `id` (detail prev/next)
    fn spawn_neighbor_prefetch(&self, id: u32) {
        if id > 1 {
            self.spawn_speculative(id - 1);
        }
        if id < MAX_POKEMON {
            self.spawn_speculative(id + 1);
        }
    }

    fn spawn_speculative(&self, id: u32) {
        let client = self.clone();
        tokio::spawn(async move {
            let key = id.to_string();
            if client.cache.lock().unwrap().get_pokemon(&key).is_some() {
                return;
            }
            if let Err(e) = client.fetch_and_cache(&key).await {
                log::debug!("Speculative fetch of {} failed: {}", id, e);
            }
        });
    }

    /// Full membership list for one type, cached by type name
    pub async fn by_type(&self, name: &str) -> Result<TypeMembership> {
        let cached = self.cache.lock().unwrap().get_type(name).cloned();
        if let Some(membership) = cached {
            log::info!("Cache hit for type {}", name);
            return Ok(membership);
        }

        log::info!("Cache miss for type {}, fetching from PokéAPI", name);
        let membership = pokeapi::fetch_type(&self.http, &self.base_url, name).await?;
        self.cache
            .lock()
            .unwrap()
            .insert_type(name, membership.clone());
        Ok(membership)
    }

    /// All type names known to the catalog service
    pub async fn type_names(&self) -> Result<Vec<String>> {
        let index = pokeapi::fetch_type_index(&self.http, &self.base_url).await?;
        Ok(index.results.into_iter().map(|r| r.name).collect())
    }

    /// Fetch a catalog window and hydrate every listed entity
    ///
    /// Order follows the catalog listing. Any entity failure fails the
    /// whole load; callers surface it as a load-failed state.
    pub async fn load_catalog(&self, offset: u32, limit: u32) -> Result<Vec<Pokemon>> {
        let page = self.page(offset, limit).await?;
        log::info!("Hydrating {} catalog entries", page.results.len());
        stream::iter(page.results.iter().map(|entry| self.pokemon(&entry.name)))
            .buffered(HYDRATE_CONCURRENCY)
            .try_collect()
            .await
    }

    /// Walk an entity's evolution line, base form first
    ///
    /// Follows only the first listed successor at each stage. The walk is
    /// capped at [`MAX_CHAIN_STAGES`] so malformed chain data cannot loop.
    pub async fn evolution_chain(&self, pokemon: &Pokemon) -> Result<Vec<Pokemon>> {
        let Some(species_ref) = &pokemon.species else {
            return Ok(Vec::new());
        };
        let species = pokeapi::fetch_species(&self.http, &species_ref.url).await?;
        let evolution =
            pokeapi::fetch_evolution_chain(&self.http, &species.evolution_chain.url).await?;

        let mut chain = Vec::new();
        let mut link = Some(&evolution.chain);
        while let Some(node) = link {
            if chain.len() >= MAX_CHAIN_STAGES {
                log::warn!(
                    "Evolution chain for {} exceeds {} stages, truncating",
                    pokemon.name,
                    MAX_CHAIN_STAGES
                );
                break;
            }
            chain.push(self.pokemon(&node.species.name).await?);
            link = node.evolves_to.first();
        }
        Ok(chain)
    }

    /// Pokémon sharing this entity's exact type combination
    ///
    /// Scans the membership of the entity's first type (sorted by name),
    /// excluding the entity itself and every id in `exclude_ids`. Members
    /// that fail to load are skipped. At most [`SIMILAR_LIMIT`] entries,
    /// in membership order.
    pub async fn similar(&self, pokemon: &Pokemon, exclude_ids: &[u32]) -> Result<Vec<Pokemon>> {
        let target_types = pokemon.sorted_type_names();
        let Some(first_type) = target_types.first() else {
            return Ok(Vec::new());
        };
        let membership = self.by_type(first_type).await?;

        let candidates = join_all(
            membership
                .pokemon
                .iter()
                .map(|member| self.pokemon(&member.pokemon.name)),
        )
        .await;

        let mut matches = Vec::new();
        for candidate in candidates {
            let candidate = match candidate {
                Ok(found) => found,
                Err(e) => {
                    log::debug!("Skipping similar candidate: {}", e);
                    continue;
                }
            };
            if candidate.id == pokemon.id || exclude_ids.contains(&candidate.id) {
                continue;
            }
            if candidate.sorted_type_names() != target_types {
                continue;
            }
            matches.push(candidate);
            if matches.len() == SIMILAR_LIMIT {
                break;
            }
        }
        Ok(matches)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
