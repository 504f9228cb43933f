use crate::detail::DetailEnricher;
use crate::models::{CandidateOffer, Offer, ScoredOffer};
use crate::scoring::score_offer;
use crate::search::OfferSource;
use crate::writer::export_filtered;
use crate::Result;
use std::collections::HashMap;

/// Entry point of the run. Each stage hands the data to the next one and
/// narrates its phase; empty input flows through the remaining stages
/// without side effects, so the run always ends cleanly.
pub struct CrawlPipeline;

impl CrawlPipeline {
    pub fn new() -> Self {
        Self
    }

    pub fn search(self, source: &impl OfferSource) -> PipelineWithCandidates {
        let candidates = source.collect_all();
        if candidates.is_empty() {
            println!("Stopping early: the API search returned no offers.");
        }
        PipelineWithCandidates { candidates }
    }
}

impl Default for CrawlPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use = "pipeline must continue with .enrich() to produce offers"]
pub struct PipelineWithCandidates {
    candidates: Vec<CandidateOffer>,
}

impl PipelineWithCandidates {
    /// Caps the batch before the expensive detail phase.
    pub fn limit(mut self, cap: usize) -> Self {
        if !self.candidates.is_empty() {
            let total = self.candidates.len();
            self.candidates.truncate(cap);
            println!(
                "\n🔍 [PHASE 2] Analyzing the first {} of {} offers...",
                self.candidates.len(),
                total
            );
        }
        self
    }

    pub fn enrich(self, enricher: &DetailEnricher) -> PipelineWithOffers {
        PipelineWithOffers {
            offers: enricher.start_enrich(&self.candidates),
        }
    }
}

#[must_use = "pipeline must continue with .score() to rank the offers"]
pub struct PipelineWithOffers {
    offers: Vec<Offer>,
}

impl PipelineWithOffers {
    pub fn score(
        self,
        keyword_weights: &HashMap<String, u32>,
        title_bonus: u32,
        min_score: u32,
    ) -> PipelineWithScores {
        if !self.offers.is_empty() {
            println!(
                "\n💯 [PHASE 3] Scoring and filtering {} offers...",
                self.offers.len()
            );
        }

        let scored = self
            .offers
            .into_iter()
            .map(|offer| {
                let (score, matched_keywords) = score_offer(&offer, keyword_weights, title_bonus);
                let verdict = if score >= min_score {
                    "ACCEPTED"
                } else {
                    "DISCARDED"
                };
                println!("  -> {} ({} pts): {}", verdict, score, offer.title);
                ScoredOffer {
                    offer,
                    score,
                    matched_keywords,
                }
            })
            .collect();

        PipelineWithScores { scored }
    }
}

#[must_use = "pipeline must end with .export() to write the CSV"]
pub struct PipelineWithScores {
    scored: Vec<ScoredOffer>,
}

impl PipelineWithScores {
    pub fn export(self, min_score: u32, path: &str) -> Result<usize> {
        export_filtered(&self.scored, min_score, path)
    }
}
