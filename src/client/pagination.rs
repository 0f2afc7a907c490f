use super::HEADER_LINK;
use serde::Serialize;
use url::Url;

/// Page numbers surrounding the current page, parsed from the `Link`
/// response header.
#[derive(Debug, Default, PartialEq)]
pub struct Pagination {
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub first_page: Option<usize>,
    pub last_page: Option<usize>,

    /// Set instead of `next_page` on endpoints that paginate with an
    /// opaque cursor.
    pub next_page_token: Option<String>,
}

impl Pagination {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let mut pagination = Self::default();

        let links = if let Some(links) = headers.get(HEADER_LINK).and_then(|h| h.to_str().ok()) {
            links
        } else {
            return pagination;
        };

        for link in links.split(',') {
            let segments: Vec<&str> = link.split(';').map(str::trim).collect();

            // Skip if we don't at least have href and rel
            if segments.len() < 2 {
                continue;
            }

            // Check if href segment is well formed and a valid url format
            let url = if segments[0].starts_with('<') && segments[0].ends_with('>') {
                if let Ok(url) = Url::parse(&segments[0][1..segments[0].len() - 1]) {
                    url
                } else {
                    continue;
                }
            } else {
                continue;
            };

            // and then pull out the page number
            let page = if let Some(page) =
                url.query_pairs()
                    .find_map(|(k, v)| if k == "page" { Some(v) } else { None })
            {
                page
            } else {
                continue;
            };

            for rel in &segments[1..] {
                match rel.trim() {
                    "rel=\"next\"" => {
                        if let Ok(n) = page.parse() {
                            pagination.next_page = Some(n);
                        } else {
                            pagination.next_page_token = Some(page.clone().into_owned());
                        }
                    }
                    "rel=\"prev\"" => {
                        pagination.prev_page = page.parse().ok();
                    }
                    "rel=\"first\"" => {
                        pagination.first_page = page.parse().ok();
                    }
                    "rel=\"last\"" => {
                        pagination.last_page = page.parse().ok();
                    }
                    _ => {}
                }
            }
        }

        pagination
    }
}

/// Page selection for list operations, sent as the `page` and `per_page`
/// query parameters.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListOptions {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}
