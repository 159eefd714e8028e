//! Detail view model: one Pokémon with its evolution line and peers

use std::sync::atomic::{AtomicU64, Ordering};

use crate::client::CatalogClient;
use crate::error::Result;
use crate::models::Pokemon;

/// Everything the detail view renders
#[derive(Debug, Clone)]
pub struct PokemonDetail {
    pub pokemon: Pokemon,
    /// Evolution line, base form first; empty when it could not be loaded
    pub evolutions: Vec<Pokemon>,
    /// Pokémon sharing the exact type combination, evolution line excluded
    pub similar: Vec<Pokemon>,
}

/// Load the full detail view for one Pokémon
///
/// The primary fetch propagates errors; evolution-chain and similar
/// failures degrade to empty collections so the page still renders.
pub async fn load_detail(client: &CatalogClient, id_or_name: &str) -> Result<PokemonDetail> {
    let pokemon = client.pokemon(id_or_name).await?;

    let evolutions = match client.evolution_chain(&pokemon).await {
        Ok(chain) => chain,
        Err(e) => {
            log::warn!("Failed to load evolution chain for {}: {}", pokemon.name, e);
            Vec::new()
        }
    };

    let exclude: Vec<u32> = evolutions.iter().map(|p| p.id).collect();
    let similar = match client.similar(&pokemon, &exclude).await {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Failed to load similar Pokémon for {}: {}", pokemon.name, e);
            Vec::new()
        }
    };

    Ok(PokemonDetail {
        pokemon,
        evolutions,
        similar,
    })
}

/// Supersede guard for rapid detail-page navigation
///
/// Each navigation begins a new ticket; a result arriving for an older
/// ticket is discarded instead of overwriting the newer page.
#[derive(Debug, Default)]
pub struct DetailSession {
    current: AtomicU64,
}

/// Token identifying one detail-page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket(u64);

impl DetailSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding any ticket issued earlier
    pub fn begin(&self) -> DetailTicket {
        DetailTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the most recent load
    pub fn is_current(&self, ticket: DetailTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}

/// Load a detail view, discarding the result if the session moved on
///
/// Returns `Ok(None)` when a newer load superseded this one while it was
/// in flight.
pub async fn load_detail_guarded(
    client: &CatalogClient,
    session: &DetailSession,
    ticket: DetailTicket,
    id_or_name: &str,
) -> Result<Option<PokemonDetail>> {
    let detail = load_detail(client, id_or_name).await?;
    if session.is_current(ticket) {
        Ok(Some(detail))
    } else {
        log::debug!("Discarding superseded detail load for {}", id_or_name);
        Ok(None)
    }
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
