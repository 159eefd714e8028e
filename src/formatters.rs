//! Terminal rendering for catalog listings and detail views

use crate::detail::PokemonDetail;
use crate::listing::ListingPage;
use crate::models::Pokemon;

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn type_line(pokemon: &Pokemon) -> String {
    pokemon
        .types
        .iter()
        .map(|slot| slot.kind.name.as_str())
        .collect::<Vec<_>>()
        .join("/")
}

/// One-line summary: "#025 Pikachu (electric)"
pub fn format_entry(pokemon: &Pokemon) -> String {
    format!(
        "#{:03} {} ({})",
        pokemon.id,
        capitalize(&pokemon.name),
        type_line(pokemon)
    )
}

/// Render one listing page with its pagination footer
pub fn format_listing(page: &ListingPage) -> String {
    let mut output = String::new();
    for entry in &page.entries {
        output.push_str(&format_entry(entry));
        output.push('\n');
    }
    output.push_str(&format!(
        "\nPage {}/{} ({} match{})\n",
        page.page,
        page.total_pages.max(1),
        page.total_matches,
        if page.total_matches == 1 { "" } else { "es" }
    ));
    output
}

/// Render the full detail view
pub fn format_detail(detail: &PokemonDetail) -> String {
    let pokemon = &detail.pokemon;
    let mut output = String::new();

    output.push_str(&format_entry(pokemon));
    output.push('\n');
    output.push_str(&format!(
        "Height: {}  Weight: {}\n",
        pokemon.height, pokemon.weight
    ));
    if let Some(url) = pokemon.artwork_url() {
        output.push_str(&format!("Artwork: {}\n", url));
    }

    if !pokemon.stats.is_empty() {
        output.push_str("Stats:\n");
        for stat in &pokemon.stats {
            output.push_str(&format!("  {:<16} {}\n", stat.stat.name, stat.base_stat));
        }
    }

    if !detail.evolutions.is_empty() {
        output.push_str("Evolution chain:\n  ");
        let line = detail
            .evolutions
            .iter()
            .map(|p| format!("#{:03} {}", p.id, capitalize(&p.name)))
            .collect::<Vec<_>>()
            .join(" > ");
        output.push_str(&line);
        output.push('\n');
    }

    if !detail.similar.is_empty() {
        output.push_str("Similar Pokémon:\n");
        for peer in &detail.similar {
            output.push_str(&format!("  {}\n", format_entry(peer)));
        }
    }

    output
}

/// Render the type-name index
pub fn format_type_names(names: &[String]) -> String {
    names
        .iter()
        .map(|name| capitalize(name))
        .collect::<Vec<_>>()
        .join(", ")
}
