use stockroom_inventory::PageRequest;

// -------------------------
// Query-string DTOs
// -------------------------
//
// Built from the raw `(key, value)` pairs of the query string. Repeated keys
// keep their first value, and numeric parameters stay strings so junk values
// fall back to defaults instead of failing extraction.

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[derive(Debug, Default)]
pub struct ListItemsQuery {
    pub q: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ListItemsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            q: first(pairs, "q").map(str::to_owned),
            page: first(pairs, "page").map(str::to_owned),
            per_page: first(pairs, "per_page").map(str::to_owned),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.per_page.as_deref())
    }
}

#[derive(Debug, Default)]
pub struct LowStockQuery {
    pub threshold: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl LowStockQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            threshold: first(pairs, "threshold").map(str::to_owned),
            page: first(pairs, "page").map(str::to_owned),
            per_page: first(pairs, "per_page").map(str::to_owned),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.per_page.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let query = ListItemsQuery::from_pairs(&pairs(&[
            ("page", "1"),
            ("q", "app"),
            ("page", "2"),
        ]));
        assert_eq!(query.page.as_deref(), Some("1"));
        assert_eq!(query.q.as_deref(), Some("app"));
        assert_eq!(query.per_page, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = LowStockQuery::from_pairs(&pairs(&[("threshold", "3"), ("sort", "name")]));
        assert_eq!(query.threshold.as_deref(), Some("3"));
        assert_eq!(query.page_request(), PageRequest::default());
    }
}
