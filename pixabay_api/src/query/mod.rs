mod common;
pub use self::common::{Query, QueryCommon};
mod image;
pub use self::image::{ImageQuery, ImageType, Orientation};
