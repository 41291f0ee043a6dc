//! Core types used throughout Multiverse Catalog
//!
//! This module contains the character model shared by the client and the
//! UI: the filter enums, list-row and detail representations, and the page
//! metadata that drives pagination.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Type alias for character identifiers (positive integers on the remote API)
pub type CharacterId = u32;

// ============================================================================
// Filter Enums
// ============================================================================

/// Life status of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Alive,
    Dead,
    Unknown,
}

impl Status {
    /// All statuses, in the order the filter control lists them
    pub const ALL: [Status; 3] = [Status::Alive, Status::Dead, Status::Unknown];

    /// Value used in query strings (`alive`, `dead`, `unknown`)
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Status::Alive => "alive",
            Status::Dead => "dead",
            Status::Unknown => "unknown",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
            Status::Unknown => "Unknown",
        }
    }

    /// Parse a query-string value, case-insensitively
    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_query_value().eq_ignore_ascii_case(value.trim()))
    }

    /// Parse the value the remote API sends ("Alive", "Dead", "unknown").
    ///
    /// Anything unrecognised is treated as `Unknown` so one odd record
    /// cannot fail a whole page.
    pub fn from_wire(value: &str) -> Self {
        Self::from_query_value(value).unwrap_or(Status::Unknown)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Gender of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Genderless,
    Unknown,
}

impl Gender {
    /// All genders, in the order the filter control lists them
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Genderless,
        Gender::Unknown,
    ];

    /// Value used in query strings
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Genderless => "genderless",
            Gender::Unknown => "unknown",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Genderless => "Genderless",
            Gender::Unknown => "Unknown",
        }
    }

    /// Parse a query-string value, case-insensitively
    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_query_value().eq_ignore_ascii_case(value.trim()))
    }

    /// Parse the value the remote API sends, defaulting to `Unknown`
    pub fn from_wire(value: &str) -> Self {
        Self::from_query_value(value).unwrap_or(Gender::Unknown)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Species offered by the filter control as `(query value, label)`.
///
/// Species is free text on the wire; these are just the presets.
pub const SPECIES_PRESETS: [(&str, &str); 8] = [
    ("human", "Human"),
    ("alien", "Alien"),
    ("humanoid", "Humanoid"),
    ("poopybutthole", "Poopybutthole"),
    ("mythological", "Mythological"),
    ("animal", "Animal"),
    ("robot", "Robot"),
    ("cronenberg", "Cronenberg"),
];

// ============================================================================
// Characters
// ============================================================================

/// One row of the list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub id: CharacterId,
    pub name: String,
    pub status: Status,
    pub species: String,
    /// Thumbnail image URL
    pub image: String,
    /// Last known location name
    pub location: String,
}

/// Everything the detail view shows about one character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub id: CharacterId,
    pub name: String,
    pub status: Status,
    pub species: String,
    /// Free-text subtype, often empty on the remote side
    pub kind: Option<String>,
    pub gender: Gender,
    /// Origin location name
    pub origin: String,
    /// Last known location name
    pub location: String,
    /// Full-size image URL
    pub image: String,
    /// Episode URLs in air order
    pub episodes: Vec<String>,
}

impl CharacterDetail {
    /// URL of the first episode the character appears in
    pub fn first_episode(&self) -> Option<&str> {
        self.episodes.first().map(String::as_str)
    }

    /// Episode number of the first appearance: the trailing path segment
    /// of the first episode URL (`.../episode/27` -> `27`)
    pub fn first_episode_number(&self) -> Option<&str> {
        self.first_episode()
            .and_then(|url| url.trim_end_matches('/').rsplit('/').next())
            .filter(|segment| !segment.is_empty())
    }

    /// Total number of episode appearances
    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Pagination metadata reported by the list endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total_count: u32,
    pub total_pages: u32,
}

impl PageInfo {
    /// Create page info
    pub fn new(total_count: u32, total_pages: u32) -> Self {
        Self {
            total_count,
            total_pages,
        }
    }

    /// Page info for a query that matched nothing
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One page of list results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub characters: Vec<CharacterSummary>,
    pub info: PageInfo,
}

impl CharacterPage {
    /// A page with no characters and zeroed metadata
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the page has no characters
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
