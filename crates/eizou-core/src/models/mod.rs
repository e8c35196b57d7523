mod media;

pub use media::{media_id, Library, MediaItem, ROOT_CATALOG};
