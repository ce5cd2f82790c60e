//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] paging fields.

use url::Url;

/// Trait implemented by query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page. Pixabay accepts 3 to 200.
    fn with_per_page(mut self, per_page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = Some(per_page);
        self
    }
}

/// Paging fields shared by all queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: u32,
    /// Results per page. `None` uses the API default of 20.
    pub per_page: Option<u32>,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: 1,
            per_page: None,
        }
    }
}

impl QueryCommon {
    /// Appends the paging parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(per_page) = self.per_page {
            url.query_pairs_mut()
                .append_pair("per_page", &per_page.to_string());
        };
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        url
    }
}
