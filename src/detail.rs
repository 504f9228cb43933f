use crate::config::{NOT_AVAILABLE, NOT_SPECIFIED, SITE_BASE_URL, USER_AGENT};
use crate::models::{CandidateOffer, Offer};
use crate::{utils, Result};
use dialoguer::Confirm;
use headless_chrome::{Browser, LaunchOptions, Tab};
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;
use std::ffi::OsString;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const INITIAL_PROPS_MARKER: &str = "window.__INITIAL_PROPS__";
const BUILD_DATA_SELECTOR: &str = r#"script[id="__NEXT_DATA__"]"#;

/// One browser-rendered detail page. The seam exists so the enrichment loop
/// can run against a fake in tests; the real implementation drives a Chrome tab.
pub trait DetailPage {
    fn open(&mut self, url: &str) -> Result<()>;
    fn html(&mut self) -> Result<String>;
    /// Blocks until the operator signals that the bot challenge is resolved.
    fn await_operator(&mut self) -> Result<()>;
}

/// A visible Chrome window shared across all detail fetches. Headful on
/// purpose: the operator must be able to solve CAPTCHAs in it.
pub struct BrowserPage {
    tab: Arc<Tab>,
    _browser: Browser,
}

impl BrowserPage {
    pub fn launch() -> Result<Self> {
        let browser = Browser::new(LaunchOptions {
            headless: false,
            // The CAPTCHA wait has no deadline, so the idle kill-switch
            // must be far beyond any human reaction time.
            idle_browser_timeout: Duration::from_secs(86_400),
            args: vec![
                &OsString::from(format!("--user-agent={}", USER_AGENT)),
                &OsString::from("--disable-blink-features=AutomationControlled"),
            ],
            ..Default::default()
        })?;
        let tab = browser.new_tab()?;
        Ok(Self {
            tab,
            _browser: browser,
        })
    }
}

impl DetailPage for BrowserPage {
    fn open(&mut self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_for_element("body")?;
        Ok(())
    }

    fn html(&mut self) -> Result<String> {
        Ok(self.tab.get_content()?)
    }

    fn await_operator(&mut self) -> Result<()> {
        println!("     ✅ Solve the CAPTCHA in the browser window, then confirm here.");
        Confirm::new()
            .with_prompt("     Resume the extraction?")
            .default(true)
            .interact()?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct EnricherConfig {
    pub base_url: String,
    /// Off in tests; the real run sleeps 2 to 5 seconds after every offer.
    pub pause_between_offers: bool,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            base_url: SITE_BASE_URL.to_string(),
            pause_between_offers: true,
        }
    }
}

/// Walks the capped candidate list and produces one canonical offer per
/// linked candidate, from detail-page data when extractable and from the
/// API summary otherwise. A single offer failing never aborts the batch.
pub struct DetailEnricher {
    config: EnricherConfig,
}

impl DetailEnricher {
    pub fn new(config: EnricherConfig) -> Self {
        Self { config }
    }

    pub fn start_enrich(&self, candidates: &[CandidateOffer]) -> Vec<Offer> {
        if candidates.is_empty() {
            return Vec::new();
        }

        println!("\n🔍 Starting the detail analysis to enrich the offers...");
        let offers = match BrowserPage::launch() {
            Ok(mut page) => self.enrich_all(&mut page, candidates),
            Err(error) => {
                eprintln!(
                    "❌ Could not launch the browser ({}). Falling back to API summaries.",
                    error
                );
                self.fallback_all(candidates)
            }
        };
        println!("\n✅ Detail analysis completed.");
        offers
    }

    pub fn enrich_all(
        &self,
        page: &mut dyn DetailPage,
        candidates: &[CandidateOffer],
    ) -> Vec<Offer> {
        let total = candidates.len();
        let mut offers = Vec::new();

        for (index, candidate) in candidates.iter().enumerate() {
            // No link means nothing to visit and nothing to fall back to.
            let Some(link) = candidate.link.as_deref() else {
                continue;
            };
            let url = self.resolve_link(link);
            println!(
                "   -> Inspecting #{}/{}: {}",
                index + 1,
                total,
                candidate.title.as_deref().unwrap_or("UNTITLED")
            );

            let offer = match self.extract_detail(page, &url) {
                Ok(Some(detail)) => offer_from_detail(&detail, &url),
                Ok(None) => {
                    eprintln!("     ❌ Could not extract detail data. Using the API summary.");
                    self.offer_from_summary(candidate)
                }
                Err(error) => {
                    eprintln!(
                        "     ❌ Fatal error on this offer: {}. Using the API summary.",
                        error
                    );
                    self.offer_from_summary(candidate)
                }
            };
            offers.push(offer);

            if self.config.pause_between_offers {
                utils::random_pause();
            }
        }

        offers
    }

    /// Summary-only rendition of the batch, for when the browser is unusable.
    pub fn fallback_all(&self, candidates: &[CandidateOffer]) -> Vec<Offer> {
        candidates
            .iter()
            .filter(|candidate| candidate.link.is_some())
            .map(|candidate| self.offer_from_summary(candidate))
            .collect()
    }

    /// Two extraction attempts per page load. An empty first pass is assumed
    /// to be a bot challenge: the operator gets to resolve it, then both
    /// strategies run once more against the refreshed page.
    fn extract_detail(&self, page: &mut dyn DetailPage, url: &str) -> Result<Option<Value>> {
        page.open(url)?;

        for attempt in 0..2 {
            if attempt == 1 {
                println!("     -> Retrying the extraction after the pause...");
            }

            let html = page.html()?;
            let document = Html::parse_document(&html);

            if let Some(offer) = extract_initial_props(&document) {
                println!("     -> Found via the initial-props payload");
                return Ok(Some(offer));
            }
            if let Some(offer) = extract_build_data(&document) {
                println!("     -> Found via the build-data script");
                return Ok(Some(offer));
            }

            if attempt == 0 {
                println!("     ⚠️ No embedded data found. Possible CAPTCHA.");
                page.await_operator()?;
            }
        }

        Ok(None)
    }

    fn resolve_link(&self, link: &str) -> String {
        Url::parse(&self.config.base_url)
            .and_then(|base| base.join(link))
            .map(|url| url.to_string())
            .unwrap_or_else(|_| format!("{}{}", self.config.base_url, link))
    }

    fn offer_from_summary(&self, candidate: &CandidateOffer) -> Offer {
        Offer {
            title: text_or_na(candidate.title.as_deref()),
            company: text_or_na(
                candidate
                    .profile
                    .as_ref()
                    .and_then(|profile| profile.name.as_deref()),
            ),
            city: text_or_na(candidate.city.as_deref()),
            province: text_or_na(
                candidate
                    .province
                    .as_ref()
                    .and_then(|coded| coded.value.as_deref()),
            ),
            modality: text_or_na(candidate.teleworking.as_deref()),
            experience: text_or_na(
                candidate
                    .experience_min
                    .as_ref()
                    .and_then(|coded| coded.value.as_deref()),
            ),
            salary: candidate
                .salary_description
                .clone()
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            description: candidate.description.clone().unwrap_or_default(),
            link: self.resolve_link(candidate.link.as_deref().unwrap_or_default()),
        }
    }
}

impl Default for DetailEnricher {
    fn default() -> Self {
        Self::new(EnricherConfig::default())
    }
}

/// Strategy A: the page inlines its state as an escaped JSON string passed
/// to `JSON.parse` next to the initial-props window global.
fn extract_initial_props(document: &Html) -> Option<Value> {
    let selector = Selector::parse("script").ok()?;
    let parse_call = Regex::new(r#"JSON\.parse\("(.*)"\)"#).ok()?;

    for script in document.select(&selector) {
        let body = script.text().collect::<String>();
        if !body.contains(INITIAL_PROPS_MARKER) {
            continue;
        }
        let raw = parse_call.captures(&body)?.get(1)?.as_str();
        // The capture is the body of a JS string literal; rewrapping it in
        // quotes lets serde_json do the unescaping.
        let decoded: String = serde_json::from_str(&format!("\"{}\"", raw)).ok()?;
        let data: Value = serde_json::from_str(&decoded).ok()?;
        return present_offer(data.get("offer"));
    }

    None
}

/// Strategy B: the build framework's data script with the well-known id,
/// plain JSON with the offer nested under the page properties.
fn extract_build_data(document: &Html) -> Option<Value> {
    let selector = Selector::parse(BUILD_DATA_SELECTOR).ok()?;
    let script = document.select(&selector).next()?;
    let data: Value = serde_json::from_str(&script.text().collect::<String>()).ok()?;
    present_offer(data.pointer("/props/pageProps/offer"))
}

/// A present but empty offer object counts as no data.
fn present_offer(value: Option<&Value>) -> Option<Value> {
    value
        .filter(|offer| offer.as_object().is_some_and(|fields| !fields.is_empty()))
        .cloned()
}

fn offer_from_detail(detail: &Value, url: &str) -> Offer {
    Offer {
        title: string_at(detail, "/title"),
        company: string_at(detail, "/profile/name"),
        city: string_at(detail, "/city/value"),
        province: string_at(detail, "/province/value"),
        modality: string_at(detail, "/teleworking/value"),
        experience: string_at(detail, "/experienceMin/value"),
        salary: detail
            .pointer("/salaryDescription")
            .and_then(Value::as_str)
            .unwrap_or(NOT_SPECIFIED)
            .to_string(),
        description: detail
            .pointer("/description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        link: url.to_string(),
    }
}

fn string_at(value: &Value, pointer: &str) -> String {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn text_or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}
