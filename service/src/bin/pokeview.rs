//! Terminal front-end for the BFF.
//!
//! Mounts a [`PokemonView`] (fetching the default Pokémon) or fetches the
//! name given with `--name`, then prints the detail card.
//!
//! Usage: `cargo run --bin pokeview -- --name ditto`

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use clap::Parser;
use pokedex_bff::view::{PokemonView, DEFAULT_BFF_URL};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pokeview", about = "Show a Pokémon fetched through the BFF")]
struct Args {
    /// BFF base URL
    #[arg(long, default_value = DEFAULT_BFF_URL)]
    base_url: String,

    /// Pokémon to show instead of the default
    #[arg(long)]
    name: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let view = PokemonView::new(args.base_url);

    // Failures are logged by the view; the card just stays empty.
    match args.name {
        Some(name) => view.fetch_pokemon(&name).await,
        None => view.mount().await,
    };

    println!("{}", view.render());
}
