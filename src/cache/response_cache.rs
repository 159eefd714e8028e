//! In-memory cache for catalog service responses
//!
//! Entries never expire and are never evicted; the cache lives for the
//! process lifetime. A duplicate insert overwrites (last write wins), so
//! concurrent misses for the same key are allowed to race.

use std::collections::HashMap;

use crate::models::{Pokemon, PokemonPage, TypeMembership};

/// Process-lifetime cache for catalog responses
#[derive(Debug, Default)]
pub struct ResponseCache {
    /// (offset, limit) -> catalog page
    pages: HashMap<(u32, u32), PokemonPage>,
    /// Normalized id-or-name -> Pokémon
    pokemon: HashMap<String, Pokemon>,
    /// Type name -> membership list
    types: HashMap<String, TypeMembership>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize an id-or-name request parameter into a cache key
    pub fn pokemon_key(id_or_name: &str) -> String {
        id_or_name.trim().to_lowercase()
    }

    /// Get a cached catalog page
    pub fn get_page(&self, offset: u32, limit: u32) -> Option<&PokemonPage> {
        self.pages.get(&(offset, limit))
    }

    /// Insert a catalog page into the cache
    pub fn insert_page(&mut self, offset: u32, limit: u32, page: PokemonPage) {
        self.pages.insert((offset, limit), page);
    }

    /// Get a cached Pokémon by the original request parameter
    pub fn get_pokemon(&self, id_or_name: &str) -> Option<&Pokemon> {
        self.pokemon.get(&Self::pokemon_key(id_or_name))
    }

    /// Insert a Pokémon into the cache
    pub fn insert_pokemon(&mut self, id_or_name: &str, pokemon: Pokemon) {
        self.pokemon.insert(Self::pokemon_key(id_or_name), pokemon);
    }

    /// Get a cached type membership list
    pub fn get_type(&self, name: &str) -> Option<&TypeMembership> {
        self.types.get(name)
    }

    /// Insert a type membership list into the cache
    pub fn insert_type(&mut self, name: &str, membership: TypeMembership) {
        self.types.insert(name.to_string(), membership);
    }

    /// Total number of cached responses
    pub fn len(&self) -> usize {
        self.pages.len() + self.pokemon.len() + self.types.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pokemon(id: u32, name: &str) -> Pokemon {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    fn test_page(count: u32) -> PokemonPage {
        serde_json::from_value(serde_json::json!({
            "count": count,
            "results": [{ "name": "bulbasaur", "url": "https://example.com/pokemon/1" }]
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = ResponseCache::new();
        assert!(cache.get_page(0, 8).is_none());
        assert!(cache.get_pokemon("25").is_none());
        assert!(cache.get_type("electric").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_page_insert_and_get() {
        let mut cache = ResponseCache::new();
        cache.insert_page(0, 8, test_page(1025));

        assert_eq!(cache.get_page(0, 8).unwrap().count, 1025);
        // A different window is a different key
        assert!(cache.get_page(8, 8).is_none());
    }

    #[test]
    fn test_pokemon_key_normalization() {
        assert_eq!(ResponseCache::pokemon_key("Pikachu"), "pikachu");
        assert_eq!(ResponseCache::pokemon_key("  25 "), "25");
        assert_eq!(ResponseCache::pokemon_key("MR-MIME"), "mr-mime");
    }

    #[test]
    fn test_pokemon_get_is_case_insensitive() {
        let mut cache = ResponseCache::new();
        cache.insert_pokemon("Pikachu", test_pokemon(25, "pikachu"));

        assert!(cache.get_pokemon("pikachu").is_some());
        assert!(cache.get_pokemon("PIKACHU").is_some());
        assert!(cache.get_pokemon(" pikachu ").is_some());
    }

    #[test]
    fn test_id_and_name_are_distinct_keys() {
        let mut cache = ResponseCache::new();
        cache.insert_pokemon("25", test_pokemon(25, "pikachu"));

        // Fetching by name has its own cache entry
        assert!(cache.get_pokemon("25").is_some());
        assert!(cache.get_pokemon("pikachu").is_none());
    }

    #[test]
    fn test_insert_overwrites_existing() {
        let mut cache = ResponseCache::new();
        cache.insert_pokemon("25", test_pokemon(25, "pikachu"));
        cache.insert_pokemon("25", test_pokemon(25, "pikachu-rock-star"));

        assert_eq!(cache.get_pokemon("25").unwrap().name, "pikachu-rock-star");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_type_insert_and_get() {
        let mut cache = ResponseCache::new();
        let membership: TypeMembership = serde_json::from_value(serde_json::json!({
            "pokemon": [{ "pokemon": { "name": "pikachu", "url": "" } }]
        }))
        .unwrap();
        cache.insert_type("electric", membership);

        assert_eq!(cache.get_type("electric").unwrap().pokemon.len(), 1);
        assert!(cache.get_type("fire").is_none());
    }

    #[test]
    fn test_len_spans_all_families() {
        let mut cache = ResponseCache::new();
        cache.insert_page(0, 8, test_page(1));
        cache.insert_pokemon("1", test_pokemon(1, "bulbasaur"));
        cache.insert_type("grass", serde_json::from_value(serde_json::json!({})).unwrap());

        assert_eq!(cache.len(), 3);
        assert!(!cache.is_empty());
    }
}
