/// Search result types
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Which result groups a search should fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFacet {
    Track,
    Artist,
    Album,
}

impl SearchFacet {
    /// All facets, in result order
    pub const ALL: [SearchFacet; 3] = [SearchFacet::Track, SearchFacet::Artist, SearchFacet::Album];
}

/// An artist or album surfaced by search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    /// Slug derived from the name
    pub id: String,
    pub name: String,
}

impl NamedEntity {
    /// Create an entity whose id is the slug of its name
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            name,
        }
    }
}

/// Tri-facet search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub tracks: Vec<Track>,
    pub artists: Vec<NamedEntity>,
    pub albums: Vec<NamedEntity>,
}

impl SearchResults {
    /// Whether every facet is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.artists.is_empty() && self.albums.is_empty()
    }
}

/// Strip all whitespace and lowercase
///
/// `"Nature Sounds"` becomes `"naturesounds"`.
pub fn slugify(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_strips_whitespace_and_lowercases() {
        assert_eq!(slugify("Nature Sounds"), "naturesounds");
        assert_eq!(slugify("  The\tClimbers "), "theclimbers");
        assert_eq!(slugify("Luna"), "luna");
    }

    #[test]
    fn entity_id_is_slug() {
        let entity = NamedEntity::from_name("Weather Patterns");
        assert_eq!(entity.id, "weatherpatterns");
        assert_eq!(entity.name, "Weather Patterns");
    }

    #[test]
    fn default_results_are_empty() {
        assert!(SearchResults::default().is_empty());
    }
}
