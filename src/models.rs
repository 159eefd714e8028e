//! Wire types for the catalog service (PokéAPI)

use serde::{Deserialize, Serialize};

/// Lightweight reference to an API resource
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Reference carrying only a resource URL
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub url: String,
}

/// One windowed catalog listing
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokemonPage {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Full Pokémon record
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub species: Option<NamedResource>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Sprites {
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OtherSprites {
    /// Official artwork is the only sprite set the catalog renders
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Pokemon {
    /// Get the official artwork URL, if the record carries one
    pub fn artwork_url(&self) -> Option<&str> {
        if let Some(ref other) = self.sprites.other {
            if let Some(ref artwork) = other.official_artwork {
                return artwork.front_default.as_deref();
            }
        }
        None
    }

    /// Type names in sorted order, for exact type-combination comparison
    pub fn sorted_type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .types
            .iter()
            .map(|slot| slot.kind.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

/// Index of all type names
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TypeIndex {
    pub results: Vec<NamedResource>,
}

/// Membership list of one type
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TypeMembership {
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TypeMember {
    pub pokemon: NamedResource,
}

/// Species resource; only the evolution-chain link is consumed
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Species {
    pub evolution_chain: ResourceRef,
}

/// Recursive evolution chain as served by the catalog service
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}
