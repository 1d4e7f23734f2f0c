use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Loosely-typed JSON object, used for caller-supplied sync items.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Content category an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchedType {
    Movies,
    Shows,
    Seasons,
    Episodes,
}

impl WatchedType {
    /// Path segment form: `movies`, `shows`, ...
    pub fn as_str(self) -> &'static str {
        match self {
            WatchedType::Movies => "movies",
            WatchedType::Shows => "shows",
            WatchedType::Seasons => "seasons",
            WatchedType::Episodes => "episodes",
        }
    }

    /// Singular form used in the `type` field of list items.
    pub fn item_type(self) -> &'static str {
        match self {
            WatchedType::Movies => "movie",
            WatchedType::Shows => "show",
            WatchedType::Seasons => "season",
            WatchedType::Episodes => "episode",
        }
    }
}

impl fmt::Display for WatchedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response verbosity, sent as the `extended` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Extended {
    #[default]
    Min,
    Full,
}

impl fmt::Display for Extended {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Extended::Min => "min",
            Extended::Full => "full",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ids {
    pub trakt: u64,
    pub slug: Option<String>,
    pub imdb: Option<String>,
    pub tmdb: Option<u64>,
    pub tvdb: Option<u64>,
    pub tvrage: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: Option<i32>,
    pub ids: Ids,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub title: String,
    pub year: Option<i32>,
    pub ids: Ids,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub number: u32,
    pub ids: Ids,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub season: u32,
    pub number: u32,
    pub title: Option<String>,
    pub ids: Ids,
}

/// Person details from GET /people/{id}. Biographical fields need `extended=full`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub ids: Ids,
    pub biography: Option<String>,
    pub birthday: Option<String>,
    pub death: Option<String>,
    pub birthplace: Option<String>,
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub character: String,
    pub person: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub job: String,
    pub person: Person,
}

/// Crew entries grouped by department. The service omits empty departments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CrewDepartments<T> {
    #[serde(default)]
    pub production: Vec<T>,
    #[serde(default)]
    pub art: Vec<T>,
    #[serde(default)]
    pub crew: Vec<T>,
    #[serde(default, rename = "costume & make-up")]
    pub costume_and_make_up: Vec<T>,
    #[serde(default)]
    pub directing: Vec<T>,
    #[serde(default)]
    pub writing: Vec<T>,
    #[serde(default)]
    pub sound: Vec<T>,
    #[serde(default)]
    pub camera: Vec<T>,
}

impl<T> Default for CrewDepartments<T> {
    fn default() -> Self {
        Self {
            production: Vec::new(),
            art: Vec::new(),
            crew: Vec::new(),
            costume_and_make_up: Vec::new(),
            directing: Vec::new(),
            writing: Vec::new(),
            sound: Vec::new(),
            camera: Vec::new(),
        }
    }
}

impl<T> CrewDepartments<T> {
    /// All crew entries across departments.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.production
            .iter()
            .chain(&self.art)
            .chain(&self.crew)
            .chain(&self.costume_and_make_up)
            .chain(&self.directing)
            .chain(&self.writing)
            .chain(&self.sound)
            .chain(&self.camera)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Cast and crew of a movie or show, from GET /{movies|shows}/{id}/people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastAndCrew {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: CrewDepartments<CrewMember>,
}

/// One role a person played. Exactly one of `movie`/`show` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCast {
    pub character: String,
    pub movie: Option<Movie>,
    pub show: Option<Show>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCrew {
    pub job: String,
    pub movie: Option<Movie>,
    pub show: Option<Show>,
}

/// A person's movie or show credits, from GET /people/{id}/{movies|shows}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CreditCast>,
    #[serde(default)]
    pub crew: CrewDepartments<CreditCrew>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingShow {
    pub watchers: u64,
    pub show: Show,
}

/// Per-category timestamps, e.g. `watched_at`, `collected_at`.
pub type ActivityTimestamps = BTreeMap<String, DateTime<Utc>>;

/// Response of GET /sync/last_activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastActivities {
    pub all: DateTime<Utc>,
    #[serde(flatten)]
    pub categories: BTreeMap<String, ActivityTimestamps>,
}

impl LastActivities {
    pub fn category(&self, name: &str) -> Option<&ActivityTimestamps> {
        self.categories.get(name)
    }
}

/// Paused scrobble, from GET /sync/playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackProgress {
    pub id: u64,
    /// Percentage watched, 0 to 100.
    pub progress: f64,
    pub paused_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub item_type: String,
    pub movie: Option<Movie>,
    pub episode: Option<Episode>,
    pub show: Option<Show>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEpisode {
    pub number: u32,
    pub plays: u32,
    pub last_watched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedSeason {
    pub number: u32,
    #[serde(default)]
    pub episodes: Vec<WatchedEpisode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedShow {
    pub plays: u32,
    pub last_watched_at: Option<DateTime<Utc>>,
    pub show: Show,
    #[serde(default)]
    pub seasons: Vec<WatchedSeason>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedMovie {
    pub plays: u32,
    pub last_watched_at: Option<DateTime<Utc>>,
    pub movie: Movie,
}

/// A single watch event. `action` is `scrobble`, `checkin` or `watch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: u64,
    pub watched_at: DateTime<Utc>,
    pub action: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub movie: Option<Movie>,
    pub show: Option<Show>,
    pub episode: Option<Episode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedItem {
    pub rating: u8,
    pub rated_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub item_type: String,
    pub movie: Option<Movie>,
    pub show: Option<Show>,
    pub season: Option<Season>,
    pub episode: Option<Episode>,
}

/// Watchlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub rank: Option<u32>,
    pub listed_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub item_type: String,
    pub movie: Option<Movie>,
    pub show: Option<Show>,
    pub season: Option<Season>,
    pub episode: Option<Episode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedEpisode {
    pub number: u32,
    pub collected_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedSeason {
    pub number: u32,
    #[serde(default)]
    pub episodes: Vec<CollectedEpisode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedItem {
    pub collected_at: Option<DateTime<Utc>>,
    pub last_collected_at: Option<DateTime<Utc>>,
    pub movie: Option<Movie>,
    pub show: Option<Show>,
    #[serde(default)]
    pub seasons: Vec<CollectedSeason>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCounts {
    #[serde(default)]
    pub movies: u32,
    #[serde(default)]
    pub shows: u32,
    #[serde(default)]
    pub seasons: u32,
    #[serde(default)]
    pub episodes: u32,
}

/// Items the service could not match, echoed back as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotFoundItems {
    #[serde(default)]
    pub movies: Vec<JsonObject>,
    #[serde(default)]
    pub shows: Vec<JsonObject>,
    #[serde(default)]
    pub seasons: Vec<JsonObject>,
    #[serde(default)]
    pub episodes: Vec<JsonObject>,
}

/// Response of the bulk add/remove sync endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncResult {
    pub added: Option<SyncCounts>,
    pub deleted: Option<SyncCounts>,
    pub existing: Option<SyncCounts>,
    pub not_found: Option<NotFoundItems>,
}
