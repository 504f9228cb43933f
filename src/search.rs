use crate::config::{API_ACCEPT, API_BASIC_AUTH, PAGE_DELAY, SEARCH_API_URL, USER_AGENT};
use crate::filters::build_search_params;
use crate::models::{CandidateOffer, Preferences, SearchResponse};
use crate::Result;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use std::time::Duration;

/// A paged supplier of candidate offers. `collect_all` drives the pagination
/// and never fails: a transport error just ends the run with whatever was
/// accumulated up to that point.
pub trait OfferSource {
    fn fetch_page(&self, page: u32) -> Result<SearchResponse>;

    /// Announces the upcoming collection. The API client dumps its filters here.
    fn narrate(&self) {}

    fn page_delay(&self) {
        std::thread::sleep(PAGE_DELAY);
    }

    fn collect_all(&self) -> Vec<CandidateOffer> {
        self.narrate();

        let mut page = 1;
        let mut collected = Vec::new();

        loop {
            match self.fetch_page(page) {
                Ok(response) => {
                    if response.offers.is_empty() {
                        println!("✅ No more offers returned by the API.");
                        break;
                    }
                    collected.extend(response.offers);

                    let total_pages = response.navigation.total_pages.max(1);
                    if page >= total_pages {
                        println!("✅ Collected all {} pages from the API.", total_pages);
                        break;
                    }

                    println!("     -> Page {}/{} processed...", page, total_pages);
                    page += 1;
                    self.page_delay();
                }
                Err(error) => {
                    eprintln!(
                        "❌ API request failed: {}. Keeping what was collected so far.",
                        error
                    );
                    break;
                }
            }
        }

        println!("\nAPI collection finished. Candidate offers: {}.", collected.len());
        collected
    }
}

/// Search API client. Carries the fixed headers the endpoint expects and the
/// query parameters translated from the operator preferences.
pub struct ApiSearchClient {
    http: Client,
    params: Vec<(String, String)>,
}

impl ApiSearchClient {
    pub fn new(preferences: &Preferences) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(API_ACCEPT));
        headers.insert(AUTHORIZATION, HeaderValue::from_static(API_BASIC_AUTH));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            params: build_search_params(preferences),
        })
    }
}

impl OfferSource for ApiSearchClient {
    fn fetch_page(&self, page: u32) -> Result<SearchResponse> {
        let response = self
            .http
            .get(SEARCH_API_URL)
            .query(&self.params)
            .query(&[("page", page)])
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    fn narrate(&self) {
        println!("\n🚀 [PHASE 1] Searching the API with these filters:");
        for (key, value) in &self.params {
            println!("     -> {}: {}", key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Navigation;

    fn candidate(title: &str) -> CandidateOffer {
        CandidateOffer {
            title: Some(title.to_string()),
            link: Some(format!("/of-{}", title)),
            ..CandidateOffer::default()
        }
    }

    /// Serves a fixed page sequence; anything past the end is an empty page.
    struct PagedSource {
        pages: Vec<Vec<CandidateOffer>>,
        total_pages: u32,
        fail_on_page: Option<u32>,
    }

    impl OfferSource for PagedSource {
        fn fetch_page(&self, page: u32) -> Result<SearchResponse> {
            if self.fail_on_page == Some(page) {
                return Err("connection reset".into());
            }
            let offers = self
                .pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default();
            Ok(SearchResponse {
                offers,
                navigation: Navigation {
                    current_page: page,
                    total_pages: self.total_pages,
                },
            })
        }

        fn page_delay(&self) {}
    }

    #[test]
    fn accumulates_pages_until_an_empty_one() {
        let source = PagedSource {
            pages: vec![
                vec![candidate("a"), candidate("b")],
                vec![candidate("c")],
                vec![candidate("d"), candidate("e")],
            ],
            total_pages: 99,
            fail_on_page: None,
        };

        let titles: Vec<_> = source
            .collect_all()
            .into_iter()
            .map(|offer| offer.title.unwrap())
            .collect();
        assert_eq!(titles, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn stops_after_the_declared_last_page() {
        let source = PagedSource {
            pages: vec![
                vec![candidate("a")],
                vec![candidate("b")],
                vec![candidate("never-fetched")],
            ],
            total_pages: 2,
            fail_on_page: None,
        };

        let collected = source.collect_all();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[1].title.as_deref(), Some("b"));
    }

    #[test]
    fn transport_error_returns_partial_result() {
        let source = PagedSource {
            pages: vec![vec![candidate("a")], vec![candidate("b")]],
            total_pages: 99,
            fail_on_page: Some(2),
        };

        let collected = source.collect_all();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].title.as_deref(), Some("a"));
    }

    #[test]
    fn missing_pagination_metadata_means_single_page() {
        let source = PagedSource {
            pages: vec![vec![candidate("a")], vec![candidate("never-fetched")]],
            total_pages: 0,
            fail_on_page: None,
        };

        assert_eq!(source.collect_all().len(), 1);
    }
}
