//! Response bodies of the remote character API

use catalog_core::{CharacterDetail, CharacterPage, CharacterSummary, Gender, PageInfo, Status};
use serde::Deserialize;

/// `{ name, url }` reference to a location
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiLocation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One character as the API sends it
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCharacter {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub origin: ApiLocation,
    #[serde(default)]
    pub location: ApiLocation,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
}

/// Pagination block of a list response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// List response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPage {
    pub info: ApiInfo,
    #[serde(default)]
    pub results: Vec<ApiCharacter>,
}

impl From<ApiCharacter> for CharacterDetail {
    fn from(c: ApiCharacter) -> Self {
        CharacterDetail {
            id: c.id,
            name: c.name,
            status: Status::from_wire(&c.status),
            species: c.species,
            kind: Some(c.kind).filter(|k| !k.trim().is_empty()),
            gender: Gender::from_wire(&c.gender),
            origin: c.origin.name,
            location: c.location.name,
            image: c.image,
            episodes: c.episode,
        }
    }
}

impl From<ApiCharacter> for CharacterSummary {
    fn from(c: ApiCharacter) -> Self {
        CharacterSummary {
            id: c.id,
            name: c.name,
            status: Status::from_wire(&c.status),
            species: c.species,
            image: c.image,
            location: c.location.name,
        }
    }
}

impl From<ApiPage> for CharacterPage {
    fn from(page: ApiPage) -> Self {
        CharacterPage {
            characters: page.results.into_iter().map(CharacterSummary::from).collect(),
            info: PageInfo::new(page.info.count, page.info.pages),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
