pub mod country;
pub mod detect;
pub mod language;
pub mod normalize;

pub use detect::{detect, detect_region, detect_type, Attributes, ContentType, RegionCode};
pub use normalize::clean_title;
