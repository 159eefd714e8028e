//! Pokédex catalog browser CLI
//!
//! Terminal front end for the catalog library: list a window of the
//! Pokédex, show one Pokémon with its evolution chain and similar
//! entries, or browse with search, type filter, sorting, and pagination.

use clap::{Parser, Subcommand};
use pokedex_browser::api::pokeapi::DEFAULT_BASE_URL;
use pokedex_browser::{
    formatters, listing, load_detail, CatalogClient, ListingQuery, SortOrder, MAX_POKEMON,
};

/// Pokédex catalog browser - search, filter, and inspect Pokémon
#[derive(Parser, Debug)]
#[command(name = "pokedex_browser")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the catalog service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List one catalog page of Pokémon references
    List {
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Show one Pokémon with its evolution chain and similar entries
    Show {
        /// Numeric id or lowercase name
        id_or_name: String,
    },
    /// Browse the hydrated catalog with search, filter, sort, and paging
    Browse {
        /// Name substring or exact id
        #[arg(long, default_value = "")]
        search: String,
        /// Keep only Pokémon of this type
        #[arg(long)]
        type_filter: Option<String>,
        /// One of: id, name-asc, name-desc
        #[arg(long, default_value = "id")]
        sort: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// How many catalog entries to hydrate
        #[arg(long, default_value_t = MAX_POKEMON)]
        limit: u32,
        /// Logical viewport width for the page-number window
        #[arg(long, default_value_t = 1280)]
        viewport_width: u32,
    },
    /// List all known type names
    Types,
}

fn parse_sort(value: &str) -> Option<SortOrder> {
    match value {
        "id" => Some(SortOrder::ById),
        "name-asc" => Some(SortOrder::NameAsc),
        "name-desc" => Some(SortOrder::NameDesc),
        _ => None,
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let client = CatalogClient::with_base_url(&args.base_url);

    if let Err(e) = run(&client, args.command).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(client: &CatalogClient, command: Command) -> pokedex_browser::Result<()> {
    match command {
        Command::List { offset, limit } => {
            let page = client.page(offset, limit).await?;
            for entry in &page.results {
                println!("{}", entry.name);
            }
            println!("\n{} Pokémon total", page.count);
        }
        Command::Show { id_or_name } => {
            let detail = load_detail(client, &id_or_name).await?;
            print!("{}", formatters::format_detail(&detail));
        }
        Command::Browse {
            search,
            type_filter,
            sort,
            page,
            limit,
            viewport_width,
        } => {
            let Some(sort) = parse_sort(&sort) else {
                log::error!("Unknown sort order: {} (expected id, name-asc, or name-desc)", sort);
                std::process::exit(2);
            };
            let catalog = client.load_catalog(0, limit).await?;
            let query = ListingQuery {
                search,
                type_filter,
                sort,
            };
            let rendered = listing::build_page(&catalog, &query, page);
            print!("{}", formatters::format_listing(&rendered));
            let window = listing::page_window(rendered.page, rendered.total_pages, viewport_width);
            if !window.is_empty() {
                println!("Pages: {:?}", window);
            }
        }
        Command::Types => {
            let names = client.type_names().await?;
            println!("{}", formatters::format_type_names(&names));
        }
    }
    Ok(())
}
