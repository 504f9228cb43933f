use std::time::Duration;

pub const SEARCH_API_URL: &str = "https://www.infojobs.net/webapp/offers/search";
pub const SITE_BASE_URL: &str = "https://www.infojobs.net";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36";
pub const API_ACCEPT: &str = "application/json, text/plain, */*";
pub const API_BASIC_AUTH: &str = "Basic anVjYW1oYzpzZWNyZXRv";

/// Page size requested from the search API.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;
/// Fixed pause between search API pages.
pub const PAGE_DELAY: Duration = Duration::from_millis(500);
/// Only the first offers of the search result go through detail analysis.
pub const MAX_DETAIL_OFFERS: usize = 50;

pub const KEYWORD_WEIGHT: u32 = 2;
pub const TITLE_BONUS: u32 = 3;
pub const MIN_SCORE_TO_EXPORT: u32 = 2;

pub const OUTPUT_FILE: &str = "filtered_offers.csv";

/// Fallback used when the operator leaves the search term blank; matches everything.
pub const DEFAULT_SEARCH_TERM: &str = "oferta";

pub const NOT_AVAILABLE: &str = "N/A";
pub const NOT_SPECIFIED: &str = "Not specified";
