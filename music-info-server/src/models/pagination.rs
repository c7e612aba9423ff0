//! Pagination types

use serde::Deserialize;

/// Maximum items per page
const MAX_LIMIT: u32 = 100;

/// Default items per page
const DEFAULT_LIMIT: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (max 100)
    pub limit: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Limit is clamped to 1..=100
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for `GET /songs`
///
/// Kept as raw strings so that junk like `page=abc` falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub group: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Build from raw query pairs; the first occurrence of a key wins and
    /// unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "group" => &mut params.group,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Group substring filter, empty when absent.
    pub fn group_filter(&self) -> &str {
        self.group.as_deref().unwrap_or_default()
    }

    pub fn pagination(&self) -> Pagination {
        let page = parse_positive(self.page.as_deref()).unwrap_or(1);
        let limit = parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);
        Pagination::new(page, limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, limit: Option<&str>) -> ListParams {
        ListParams {
            group: None,
            page: page.map(str::to_owned),
            limit: limit.map(str::to_owned),
        }
    }

    #[test]
    fn offset_calculation() {
        let p = Pagination::new(1, 10);
        assert_eq!(p.offset(), 0);

        let p = Pagination::new(2, 10);
        assert_eq!(p.offset(), 10);

        let p = Pagination::new(3, 25);
        assert_eq!(p.offset(), 50);
    }

    #[test]
    fn clamps_page() {
        let p = Pagination::new(0, 10);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn clamps_limit() {
        let p = Pagination::new(1, 0);
        assert_eq!(p.limit, 1);

        let p = Pagination::new(1, 999);
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn offset_does_not_overflow() {
        let p = Pagination::new(u32::MAX, 100);
        assert_eq!(p.offset(), u64::from(u32::MAX - 1) * 100);
    }

    #[test]
    fn params_default_when_missing() {
        assert_eq!(params(None, None).pagination(), Pagination::default());
        assert_eq!(Pagination::default(), Pagination::new(1, 10));
    }

    #[test]
    fn params_fall_back_on_junk() {
        let p = params(Some("abc"), Some("-3")).pagination();
        assert_eq!(p, Pagination::new(1, 10));

        let p = params(Some("0"), Some("0")).pagination();
        assert_eq!(p, Pagination::new(1, 10));
    }

    #[test]
    fn params_parse_values() {
        let p = params(Some("3"), Some(" 5 ")).pagination();
        assert_eq!(p.page, 3);
        assert_eq!(p.limit(), 5);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn from_pairs_keeps_first_value() {
        let pairs = [("page", "1"), ("page", "2"), ("sort", "x"), ("limit", "7")]
            .map(|(k, v)| (k.to_owned(), v.to_owned()));
        let params = ListParams::from_pairs(pairs);
        assert_eq!(params.page.as_deref(), Some("1"));
        assert_eq!(params.limit.as_deref(), Some("7"));
        assert_eq!(params.group, None);
    }

    #[test]
    fn group_filter_defaults_to_empty() {
        assert_eq!(ListParams::default().group_filter(), "");
    }
}
