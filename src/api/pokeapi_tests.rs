//! Tests for the PokéAPI endpoint functions

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::api::pokeapi::{
    fetch_evolution_chain, fetch_image, fetch_page, fetch_pokemon, fetch_species, fetch_type,
    fetch_type_index,
};
use crate::error::PokedexError;
use crate::models::Pokemon;

/// Helper: minimal Pokémon JSON for mock responses
fn pokemon_json(id: u32, name: &str, types: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "types": types
            .iter()
            .enumerate()
            .map(|(slot, t)| serde_json::json!({
                "slot": slot + 1,
                "type": { "name": t, "url": format!("https://example.com/type/{}", t) }
            }))
            .collect::<Vec<_>>(),
        "stats": [
            { "base_stat": 45, "stat": { "name": "hp" } },
            { "base_stat": 49, "stat": { "name": "attack" } }
        ],
        "sprites": { "other": { "official-artwork": {
            "front_default": format!("https://img.example.com/{}.png", id)
        } } },
        "species": { "name": name, "url": format!("https://example.com/species/{}", id) }
    })
}

#[tokio::test]
async fn test_fetch_pokemon_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(pokemon_json(25, "pikachu", &["electric"])),
        )
        .mount(&mock_server)
        .await;

    let pokemon = fetch_pokemon(&reqwest::Client::new(), &mock_server.uri(), "25")
        .await
        .unwrap();

    assert_eq!(pokemon.id, 25);
    assert_eq!(pokemon.name, "pikachu");
    assert_eq!(pokemon.sorted_type_names(), vec!["electric"]);
    assert_eq!(
        pokemon.artwork_url(),
        Some("https://img.example.com/25.png")
    );
    assert_eq!(pokemon.stats[0].base_stat, 45);
    assert_eq!(pokemon.stats[0].stat.name, "hp");
}

#[tokio::test]
async fn test_fetch_pokemon_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let result = fetch_pokemon(&reqwest::Client::new(), &mock_server.uri(), "missingno").await;

    assert!(matches!(result, Err(PokedexError::PokemonNotFound(name)) if name == "missingno"));
}

#[tokio::test]
async fn test_fetch_pokemon_server_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/25"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = fetch_pokemon(&reqwest::Client::new(), &mock_server.uri(), "25").await;

    assert!(matches!(result, Err(PokedexError::HttpStatus(status)) if status.as_u16() == 500));
}

#[tokio::test]
async fn test_fetch_page_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1025,
            "next": "https://example.com/pokemon?offset=2&limit=2",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://example.com/pokemon/1/" },
                { "name": "ivysaur", "url": "https://example.com/pokemon/2/" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let page = fetch_page(&reqwest::Client::new(), &mock_server.uri(), 0, 2)
        .await
        .unwrap();

    assert_eq!(page.count, 1025);
    assert!(page.previous.is_none());
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].name, "bulbasaur");
}

#[tokio::test]
async fn test_fetch_type_index_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                { "name": "normal", "url": "https://example.com/type/1/" },
                { "name": "fighting", "url": "https://example.com/type/2/" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let index = fetch_type_index(&reqwest::Client::new(), &mock_server.uri())
        .await
        .unwrap();

    assert_eq!(index.results.len(), 2);
    assert_eq!(index.results[1].name, "fighting");
}

#[tokio::test]
async fn test_fetch_type_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/type/electric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pokemon": [
                { "pokemon": { "name": "pikachu", "url": "https://example.com/pokemon/25/" } },
                { "pokemon": { "name": "raichu", "url": "https://example.com/pokemon/26/" } }
            ]
        })))
        .mount(&mock_server)
        .await;

    let membership = fetch_type(&reqwest::Client::new(), &mock_server.uri(), "electric")
        .await
        .unwrap();

    assert_eq!(membership.pokemon.len(), 2);
    assert_eq!(membership.pokemon[0].pokemon.name, "pikachu");
}

#[tokio::test]
async fn test_fetch_species_and_evolution_chain() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "evolution_chain": { "url": format!("{}/evolution-chain/1", mock_server.uri()) }
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/evolution-chain/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "chain": {
                "species": { "name": "bulbasaur", "url": "" },
                "evolves_to": [{
                    "species": { "name": "ivysaur", "url": "" },
                    "evolves_to": [{
                        "species": { "name": "venusaur", "url": "" },
                        "evolves_to": []
                    }]
                }]
            }
        })))
        .mount(&mock_server)
        .await;

    let http = reqwest::Client::new();
    let species = fetch_species(&http, &format!("{}/pokemon-species/1", mock_server.uri()))
        .await
        .unwrap();
    let evolution = fetch_evolution_chain(&http, &species.evolution_chain.url)
        .await
        .unwrap();

    assert_eq!(evolution.chain.species.name, "bulbasaur");
    let second = &evolution.chain.evolves_to[0];
    assert_eq!(second.species.name, "ivysaur");
    assert_eq!(second.evolves_to[0].species.name, "venusaur");
    assert!(second.evolves_to[0].evolves_to.is_empty());
}

#[tokio::test]
async fn test_fetch_image_success() {
    let mock_server = MockServer::start().await;
    let png_magic = vec![0x89, 0x50, 0x4E, 0x47];
    Mock::given(method("GET"))
        .and(path("/art/25.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_magic.clone()))
        .mount(&mock_server)
        .await;

    let bytes = fetch_image(
        &reqwest::Client::new(),
        &format!("{}/art/25.png", mock_server.uri()),
    )
    .await
    .unwrap();

    assert_eq!(bytes, png_magic);
}

#[tokio::test]
async fn test_fetch_image_error_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/art/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = fetch_image(
        &reqwest::Client::new(),
        &format!("{}/art/missing.png", mock_server.uri()),
    )
    .await;

    assert!(matches!(result, Err(PokedexError::HttpStatus(_))));
}

// ── model deserialization ────────────────────────────────────────────

#[test]
fn test_pokemon_deserialize_minimal() {
    let pokemon: Pokemon =
        serde_json::from_value(serde_json::json!({ "id": 132, "name": "ditto" })).unwrap();

    assert_eq!(pokemon.id, 132);
    assert_eq!(pokemon.name, "ditto");
    assert!(pokemon.types.is_empty());
    assert!(pokemon.stats.is_empty());
    assert!(pokemon.artwork_url().is_none());
    assert!(pokemon.species.is_none());
}

#[test]
fn test_pokemon_artwork_url_absent_artwork_block() {
    let pokemon: Pokemon = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "bulbasaur",
        "sprites": { "other": {} }
    }))
    .unwrap();

    assert!(pokemon.artwork_url().is_none());
}

#[test]
fn test_sorted_type_names_orders_dual_types() {
    let pokemon: Pokemon = serde_json::from_value(pokemon_json(6, "charizard", &["fire", "flying"]))
        .unwrap();

    assert_eq!(pokemon.sorted_type_names(), vec!["fire", "flying"]);

    let reversed: Pokemon =
        serde_json::from_value(pokemon_json(6, "charizard", &["flying", "fire"])).unwrap();
    assert_eq!(reversed.sorted_type_names(), vec!["fire", "flying"]);
}
