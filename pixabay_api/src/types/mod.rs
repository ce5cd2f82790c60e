mod meta;
pub use self::meta::SearchResponse;

mod image;
pub use self::image::{ImageID, ImageResult};
