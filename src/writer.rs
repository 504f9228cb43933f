use crate::models::ScoredOffer;
use crate::Result;
use std::fs::File;
use std::io::Write;

const COLUMNS: [&str; 9] = [
    "score",
    "title",
    "company",
    "city",
    "modality",
    "salary",
    "experience",
    "keywords",
    "link",
];

/// Writes the offers at or above the score threshold to a CSV, best first.
/// Ties keep their input order. Nothing above the threshold means no file
/// at all; the returned count tells the caller what happened.
pub fn export_filtered(scored: &[ScoredOffer], min_score: u32, path: &str) -> Result<usize> {
    let mut retained: Vec<&ScoredOffer> = scored
        .iter()
        .filter(|entry| entry.score >= min_score)
        .collect();

    if retained.is_empty() {
        println!("\nNo offers meet the criteria to be saved.");
        return Ok(0);
    }

    retained.sort_by(|a, b| b.score.cmp(&a.score));

    println!("\n💾 Saving {} offers to '{}'...", retained.len(), path);

    let mut file = File::create(path)?;
    // Byte-order marker so spreadsheet software detects the encoding.
    file.write_all("\u{feff}".as_bytes())?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(COLUMNS)?;
    for entry in &retained {
        let offer = &entry.offer;
        let score = entry.score.to_string();
        let keywords = entry.matched_keywords.join(", ");
        writer.write_record([
            score.as_str(),
            offer.title.as_str(),
            offer.company.as_str(),
            offer.city.as_str(),
            offer.modality.as_str(),
            offer.salary.as_str(),
            offer.experience.as_str(),
            keywords.as_str(),
            offer.link.as_str(),
        ])?;
    }
    writer.flush()?;

    println!("Done: '{}' written and sorted by relevance.", path);
    Ok(retained.len())
}
