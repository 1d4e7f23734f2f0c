//! Command-line arguments and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Value, json};

use trakt_client::TraktClient;
use trakt_client::api::{Extended, WatchedType};

/// Query and update a Trakt account from the command line.
///
/// Configuration comes from `TRAKT_*` environment variables or a `.env` file.
/// Results are printed to stdout as JSON.
#[derive(Parser, Debug)]
#[command(name = "trakt", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Last activity timestamps per category.
    Activities,

    /// Details of one person.
    Person {
        /// Trakt id or slug, e.g. `bryan-cranston`.
        id: String,
    },

    /// A person's movie or show credits.
    Credits {
        /// Trakt id or slug of the person.
        id: String,

        #[arg(value_enum)]
        kind: CreditKind,
    },

    /// Watch history, optionally narrowed to a single item.
    History {
        /// Content type of the item; needs an id.
        #[arg(value_enum, requires = "id")]
        kind: Option<Kind>,

        /// Trakt id of the item; needs a type.
        #[arg(requires = "kind")]
        id: Option<u64>,
    },

    /// Paused playback progress.
    Playback {
        #[arg(value_enum)]
        kind: PlaybackKind,
    },

    /// Watchlist items of one type.
    Watchlist {
        #[arg(value_enum)]
        kind: Kind,
    },

    /// Shows being watched right now.
    Trending {
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },

    /// Remove any active check-in.
    Checkout,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Movies,
    Shows,
    Seasons,
    Episodes,
}

impl From<Kind> for WatchedType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Movies => WatchedType::Movies,
            Kind::Shows => WatchedType::Shows,
            Kind::Seasons => WatchedType::Seasons,
            Kind::Episodes => WatchedType::Episodes,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditKind {
    Movies,
    Shows,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackKind {
    Movies,
    Episodes,
}

impl From<PlaybackKind> for WatchedType {
    fn from(kind: PlaybackKind) -> Self {
        match kind {
            PlaybackKind::Movies => WatchedType::Movies,
            PlaybackKind::Episodes => WatchedType::Episodes,
        }
    }
}

impl Command {
    pub async fn run(&self, client: &TraktClient) -> anyhow::Result<Value> {
        let output = match self {
            Command::Activities => serde_json::to_value(client.last_activities().await?)?,
            Command::Person { id } => {
                serde_json::to_value(client.get_person_details(id, Extended::Full).await?)?
            }
            Command::Credits { id, kind } => {
                let credits = match kind {
                    CreditKind::Movies => client.get_movie_credits(id, Extended::Min).await?,
                    CreditKind::Shows => client.get_show_credits(id, Extended::Min).await?,
                };
                serde_json::to_value(credits)?
            }
            Command::History { kind, id } => {
                let history = match (kind, id) {
                    (Some(kind), Some(id)) => client.get_item_history((*kind).into(), *id).await?,
                    _ => client.get_history(None, None).await?,
                };
                serde_json::to_value(history)?
            }
            Command::Playback { kind } => {
                serde_json::to_value(client.get_playback_progress((*kind).into()).await?)?
            }
            Command::Watchlist { kind } => {
                serde_json::to_value(client.get_watchlist((*kind).into()).await?)?
            }
            Command::Trending { page, limit } => serde_json::to_value(
                client
                    .get_trending_shows(*page, *limit, Extended::Min)
                    .await?,
            )?,
            Command::Checkout => {
                client.delete_active_checkins().await?;
                json!({ "checked_out": true })
            }
        };
        Ok(output)
    }
}
