use std::fmt;
use std::str::FromStr;

use url::Url;

use super::common::{Query, QueryCommon};

/// Image orientation filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    All,
    #[default]
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Orientation::All => "all",
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Orientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Orientation::All),
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            _ => Err(()),
        }
    }
}

/// Image type filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageType {
    All,
    #[default]
    Photo,
    Illustration,
    Vector,
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ImageType::All => "all",
            ImageType::Photo => "photo",
            ImageType::Illustration => "illustration",
            ImageType::Vector => "vector",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ImageType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ImageType::All),
            "photo" => Ok(ImageType::Photo),
            "illustration" => Ok(ImageType::Illustration),
            "vector" => Ok(ImageType::Vector),
            _ => Err(()),
        }
    }
}

/// Search request against the `/api/` endpoint.
///
/// Defaults to the widget's fixed filters: horizontal photos with safe
/// search enabled.
#[derive(Clone)]
pub struct ImageQuery {
    pub common: QueryCommon,
    pub search: String,
    pub api_key: String,
    pub orientation: Orientation,
    pub image_type: ImageType,
    pub safe_search: bool,
}

impl Query for ImageQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("q", self.search.as_str())
            .append_pair("orientation", self.orientation.to_string().as_str())
            .append_pair("image_type", self.image_type.to_string().as_str())
            .append_pair("safesearch", if self.safe_search { "true" } else { "false" })
            .append_pair("key", self.api_key.as_str());
        self.common.add_to_url(&url)
    }
}

impl ImageQuery {
    pub fn new(search: &str, api_key: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            search: search.to_string(),
            api_key: api_key.to_string(),
            orientation: Orientation::default(),
            image_type: ImageType::default(),
            safe_search: true,
        }
    }
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
    pub fn with_image_type(mut self, image_type: ImageType) -> Self {
        self.image_type = image_type;
        self
    }
    pub fn with_safe_search(mut self, safe_search: bool) -> Self {
        self.safe_search = safe_search;
        self
    }
}

#[cfg(test)]
mod test {
    use url::Url;

    use super::*;

    #[test]
    fn test_image_query() {
        let url = Url::parse("https://pixabay.com/api/").unwrap();

        insta::assert_snapshot!(
            ImageQuery::new("cats", "KEY").add_to_url(&url).to_string(),
            @"https://pixabay.com/api/?q=cats&orientation=horizontal&image_type=photo&safesearch=true&key=KEY&page=1"
        );

        insta::assert_snapshot!(
            ImageQuery::new("red cats", "KEY")
                .with_per_page(40)
                .with_page(3)
                .add_to_url(&url)
                .to_string(),
            @"https://pixabay.com/api/?q=red+cats&orientation=horizontal&image_type=photo&safesearch=true&key=KEY&per_page=40&page=3"
        );

        insta::assert_snapshot!(
            ImageQuery::new("dogs", "KEY")
                .with_orientation(Orientation::Vertical)
                .with_image_type(ImageType::Vector)
                .with_safe_search(false)
                .add_to_url(&url)
                .to_string(),
            @"https://pixabay.com/api/?q=dogs&orientation=vertical&image_type=vector&safesearch=false&key=KEY&page=1"
        );
    }

    #[test]
    fn test_filters_from_str() {
        assert_eq!("h".parse::<Orientation>(), Ok(Orientation::Horizontal));
        assert_eq!("illustration".parse::<ImageType>(), Ok(ImageType::Illustration));
        assert!("sideways".parse::<Orientation>().is_err());
    }
}
