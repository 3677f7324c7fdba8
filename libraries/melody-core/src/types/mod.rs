mod playlist;
mod search;
mod source;
mod track;
mod video;

pub use playlist::Playlist;
pub use search::{slugify, NamedEntity, SearchFacet, SearchResults};
pub use source::SourceKind;
pub use track::Track;
pub use video::{VideoMetadata, VIDEO_TRACK_PREFIX};
