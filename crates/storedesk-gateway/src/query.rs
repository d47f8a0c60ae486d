//! Table query builder for the backend's REST dialect.
//!
//! Filters are encoded as `column=op.value` query parameters, projections as
//! `select=` and ordering as `order=column.direction`.

use url::Url;

/// A read or write against one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<String>,
}

impl TableQuery {
    /// Creates an unfiltered query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns (and embedded relations) to return.
    #[must_use]
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = Some(columns.into());
        self
    }

    /// Keep rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.filters
            .push((column.into(), format!("eq.{}", value.as_ref())));
        self
    }

    /// Order by `column`, newest/largest first.
    #[must_use]
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.desc"));
        self
    }

    /// Append this query to a table URL.
    #[must_use]
    pub fn apply(&self, mut url: Url) -> Url {
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(select) = &self.select {
                pairs.append_pair("select", select);
            }
            for (column, filter) in &self.filters {
                pairs.append_pair(column, filter);
            }
            if let Some(order) = &self.order {
                pairs.append_pair("order", order);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://shop.example.co/rest/v1/inquiries").unwrap()
    }

    #[test]
    fn test_full_query() {
        let url = TableQuery::new()
            .select("id,status")
            .eq("seller_id", "s-1")
            .eq("status", "new")
            .order_desc("created_at")
            .apply(base());

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("select".to_string(), "id,status".to_string()),
                ("seller_id".to_string(), "eq.s-1".to_string()),
                ("status".to_string(), "eq.new".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_query_leaves_url_alone() {
        assert_eq!(
            TableQuery::new().apply(base()).as_str(),
            "https://shop.example.co/rest/v1/inquiries"
        );
    }

    #[test]
    fn test_filter_values_are_encoded() {
        let url = TableQuery::new().eq("user_id", "a&b=c").apply(base());
        assert_eq!(url.query(), Some("user_id=eq.a%26b%3Dc"));
    }
}
