//! Page-number pagination over an already-filtered sequence.
//!
//! Out-of-range requests are clamped, never rejected:
//! - `per_page` into `[1, MAX_PER_PAGE]`
//! - `page` into `[1, pages]`, where `pages = ceil(total / per_page)` and at least 1

use core::num::IntErrorKind;

use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;
pub const MAX_PER_PAGE: i64 = 100;

/// Requested page window, as supplied by the caller (unclamped).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page }
    }

    /// Build from raw query-string values.
    ///
    /// Missing or non-integer values fall back to the defaults; integers too
    /// large for `i64` saturate so they still clamp to the last page.
    pub fn from_query(page: Option<&str>, per_page: Option<&str>) -> Self {
        Self {
            page: page.and_then(parse_lenient).unwrap_or(DEFAULT_PAGE),
            per_page: per_page.and_then(parse_lenient).unwrap_or(DEFAULT_PER_PAGE),
        }
    }
}

fn parse_lenient(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// One page of results plus the navigation envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Cut the requested window out of `items`.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let per_page = request.per_page.clamp(1, MAX_PER_PAGE) as u64;
    let pages = total.div_ceil(per_page).max(1);
    let page = request.page.clamp(1, pages as i64) as u64;

    let offset = ((page - 1) * per_page) as usize;
    let window: Vec<T> = items
        .into_iter()
        .skip(offset)
        .take(per_page as usize)
        .collect();

    Page {
        items: window,
        page,
        per_page,
        total,
        pages,
        has_next: page < pages,
        has_prev: page > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_give_first_ten() {
        let page = paginate((0..15).collect::<Vec<_>>(), PageRequest::default());
        assert_eq!(page.items, (0..10).collect::<Vec<_>>());
        assert_eq!(page.total, 15);
        assert_eq!(page.pages, 2);
        assert!(page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn second_page_holds_remainder() {
        let page = paginate((0..15).collect::<Vec<_>>(), PageRequest::new(2, 10));
        assert_eq!(page.items, (10..15).collect::<Vec<_>>());
        assert!(!page.has_next);
        assert!(page.has_prev);
    }

    #[test]
    fn empty_input_still_has_one_page() {
        let page = paginate(Vec::<u8>::new(), PageRequest::new(5, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.pages, 1);
        assert_eq!(page.total, 0);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn out_of_range_requests_are_clamped() {
        let items: Vec<u32> = (0..25).collect();

        let page = paginate(items.clone(), PageRequest::new(0, 10));
        assert_eq!(page.page, 1);

        let page = paginate(items.clone(), PageRequest::new(-4, 10));
        assert_eq!(page.page, 1);

        let page = paginate(items.clone(), PageRequest::new(99, 10));
        assert_eq!(page.page, 3);
        assert_eq!(page.items, (20..25).collect::<Vec<_>>());

        let page = paginate(items.clone(), PageRequest::new(1, 0));
        assert_eq!(page.per_page, 1);
        assert_eq!(page.pages, 25);

        let page = paginate(items, PageRequest::new(1, 1000));
        assert_eq!(page.per_page, 100);
        assert_eq!(page.items.len(), 25);
    }

    #[test]
    fn query_values_are_lenient() {
        assert_eq!(PageRequest::from_query(None, None), PageRequest::default());
        assert_eq!(PageRequest::from_query(Some("2"), Some("5")), PageRequest::new(2, 5));
        assert_eq!(PageRequest::from_query(Some("two"), Some("")), PageRequest::default());
        assert_eq!(
            PageRequest::from_query(Some("99999999999999999999999"), None),
            PageRequest::new(i64::MAX, DEFAULT_PER_PAGE)
        );
        assert_eq!(
            PageRequest::from_query(Some("-99999999999999999999999"), None),
            PageRequest::new(i64::MIN, DEFAULT_PER_PAGE)
        );
    }

    #[test]
    fn huge_page_clamps_to_last() {
        let page = paginate((0..15).collect::<Vec<_>>(), PageRequest::new(i64::MAX, 10));
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 5);
    }

    proptest! {
        /// Property: envelope arithmetic holds for any total and request.
        #[test]
        fn envelope_invariants(
            total in 0usize..500,
            page in -10i64..100,
            per_page in -10i64..200,
        ) {
            let items: Vec<usize> = (0..total).collect();
            let result = paginate(items, PageRequest::new(page, per_page));

            let p = per_page.clamp(1, MAX_PER_PAGE) as u64;
            prop_assert_eq!(result.per_page, p);
            prop_assert_eq!(result.total, total as u64);
            prop_assert_eq!(result.pages, (total as u64).div_ceil(p).max(1));
            prop_assert!(result.page >= 1 && result.page <= result.pages);
            prop_assert!(result.items.len() as u64 <= p);
            prop_assert_eq!(result.has_next, result.page < result.pages);
            prop_assert_eq!(result.has_prev, result.page > 1);

            if total > 0 && result.page == result.pages {
                let last = total as u64 - (result.pages - 1) * p;
                prop_assert_eq!(result.items.len() as u64, last);
            }

            let offset = ((result.page - 1) * p) as usize;
            if let Some(first) = result.items.first() {
                prop_assert_eq!(*first, offset);
            }
        }
    }
}
