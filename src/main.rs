use infojobs_scout::config::{MAX_DETAIL_OFFERS, MIN_SCORE_TO_EXPORT, OUTPUT_FILE, TITLE_BONUS};
use infojobs_scout::{terminal, ApiSearchClient, CrawlPipeline, DetailEnricher, Result};
use std::time::Instant;

fn main() -> Result<()> {
    let started = Instant::now();

    let preferences = terminal::collect_preferences()?;
    let client = ApiSearchClient::new(&preferences)?;
    let keyword_weights = preferences.keyword_weights();

    CrawlPipeline::new()
        .search(&client)
        .limit(MAX_DETAIL_OFFERS)
        .enrich(&DetailEnricher::default())
        .score(&keyword_weights, TITLE_BONUS, MIN_SCORE_TO_EXPORT)
        .export(MIN_SCORE_TO_EXPORT, OUTPUT_FILE)?;

    let minutes = started.elapsed().as_secs_f64() / 60.0;
    println!("\n🎉 --- RUN COMPLETED IN {:.2} MINUTES --- 🎉", minutes);
    Ok(())
}
