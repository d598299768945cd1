mod cli;
mod config;
mod courier;
mod error;
mod invoice;
mod render;
mod server;
mod source;
mod store;
mod view;

use clap::Parser;
use cli::{Cli, Command};

use crate::view::sort::{SortDirection, SortKey};
use crate::view::{DisplayMode, ViewConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Set up tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Open the local cache
    let db_path = config::db_path()?;
    let store = store::Store::open(&db_path)?;

    let source = source::RecordSource::new(config::source_url())?;
    let settings = config::CourierSettings::from_env();

    match cli.command {
        Command::Sync => cli::sync::sync(&store, &source).await?,
        Command::View {
            query,
            sort,
            desc,
            full,
            format,
            output,
        } => {
            let sort_key = match sort {
                Some(s) => Some(
                    SortKey::parse(&s).ok_or_else(|| anyhow::anyhow!("Unknown sort key '{s}'"))?,
                ),
                None => None,
            };
            let view_config = ViewConfig {
                mode: if full {
                    DisplayMode::Full
                } else {
                    DisplayMode::Minimal
                },
                sort_key,
                sort_direction: if desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                },
                query,
            };
            cli::view::view(&store, &view_config, &format, output.as_deref())?;
        }
        Command::Stats => cli::stats::stats(&store)?,
        Command::Invoice { id, output } => {
            cli::invoice::invoice(&store, &source, &id, output.as_deref()).await?
        }
        Command::Message { id } => cli::message::message(&store, &id)?,
        Command::Dispatch {
            id,
            courier,
            cod_amount,
            note,
        } => {
            let connectors = courier::build_courier_registry(&settings);
            cli::dispatch::dispatch(
                &store,
                &source,
                &connectors,
                &id,
                courier.as_deref(),
                cod_amount,
                note.as_deref(),
            )
            .await?;
        }
        Command::Status => cli::status::status(&store)?,
        Command::Serve { addr } => {
            let connectors = courier::build_courier_registry(&settings);
            server::serve(addr.parse()?, connectors).await?;
        }
    }

    Ok(())
}
