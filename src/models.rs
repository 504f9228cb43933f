use crate::config::KEYWORD_WEIGHT;
use serde::Deserialize;
use std::collections::HashMap;

/// Search intent collected from the operator before the run starts.
/// All free-text fields are trimmed and lowercased at collection time.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    pub search_term: String,
    pub keywords: Vec<String>,
    pub provinces: Vec<String>,
    pub modalities: Vec<String>,
    pub contract_types: Vec<String>,
    pub workdays: Vec<String>,
    pub publication_window: String,
    pub experience_min: String,
    /// Kept only when it consists entirely of digits, empty otherwise.
    pub salary_min: String,
}

impl Preferences {
    pub fn keyword_weights(&self) -> HashMap<String, u32> {
        self.keywords
            .iter()
            .map(|keyword| (keyword.clone(), KEYWORD_WEIGHT))
            .collect()
    }
}

/// Raw search-result record as the API returns it. The summary payload is
/// shallower than the detail payload: `city` and `teleworking` are plain
/// strings here but `{value}` objects on the detail page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateOffer {
    pub link: Option<String>,
    pub title: Option<String>,
    pub profile: Option<EmployerProfile>,
    pub city: Option<String>,
    pub province: Option<CodedValue>,
    pub teleworking: Option<String>,
    pub experience_min: Option<CodedValue>,
    pub salary_description: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmployerProfile {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CodedValue {
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    pub offers: Vec<CandidateOffer>,
    pub navigation: Navigation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Navigation {
    pub current_page: u32,
    pub total_pages: u32,
}

/// Canonical per-offer record after detail extraction or summary fallback.
/// Every field is always populated; missing sources map to the sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub title: String,
    pub company: String,
    pub city: String,
    pub province: String,
    pub modality: String,
    pub experience: String,
    pub salary: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone)]
pub struct ScoredOffer {
    pub offer: Offer,
    pub score: u32,
    /// Sorted lexicographically, original casing as supplied by the operator.
    pub matched_keywords: Vec<String>,
}
