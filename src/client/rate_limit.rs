use super::{HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};

/// Rate-limit window reported by the `X-RateLimit-*` response headers.
#[derive(Debug, Default, PartialEq)]
pub struct Rate {
    pub limit: u64,
    pub remaining: u64,
    /// Unix epoch seconds at which the window resets.
    pub reset: u64,
}

impl Rate {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let mut rate = Self::default();

        if let Some(limit) = headers
            .get(HEADER_RATE_LIMIT)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse().ok())
        {
            rate.limit = limit;
        };

        if let Some(remaining) = headers
            .get(HEADER_RATE_REMAINING)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse().ok())
        {
            rate.remaining = remaining;
        };

        if let Some(reset) = headers
            .get(HEADER_RATE_RESET)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse().ok())
        {
            rate.reset = reset;
        };

        rate
    }

    /// True when the provider reported a window and it has no calls left.
    pub fn is_exhausted(&self) -> bool {
        self.limit > 0 && self.remaining == 0
    }
}

#[cfg(test)]
mod test {
    use super::{Rate, HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};
    use reqwest::header::HeaderMap;

    #[test]
    fn rate() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_RATE_LIMIT, "60".parse().unwrap());
        headers.insert(HEADER_RATE_REMAINING, "56".parse().unwrap());
        headers.insert(HEADER_RATE_RESET, "1372700873".parse().unwrap());

        let r = Rate::from_headers(&headers);
        assert_eq!(r.limit, 60);
        assert_eq!(r.remaining, 56);
        assert_eq!(r.reset, 1372700873);
        assert!(!r.is_exhausted());
    }

    #[test]
    fn rate_exhausted() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_RATE_LIMIT, "60".parse().unwrap());
        headers.insert(HEADER_RATE_REMAINING, "0".parse().unwrap());

        assert!(Rate::from_headers(&headers).is_exhausted());
    }

    #[test]
    fn rate_missing_headers() {
        let r = Rate::from_headers(&HeaderMap::new());
        assert_eq!(r, Rate::default());
        assert!(!r.is_exhausted());
    }
}
