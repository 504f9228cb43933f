use crate::config::DEFAULT_SEARCH_TERM;
use crate::filters::{EXPERIENCE_LEVELS, PUBLICATION_WINDOWS};
use crate::models::Preferences;
use crate::Result;
use console::style;
use dialoguer::{Input, Select};

/// Walks the operator through the search setup. Everything typed is trimmed
/// and lowercased before use; blank answers skip the corresponding filter.
pub fn collect_preferences() -> Result<Preferences> {
    println!("{}", "=".repeat(50));
    println!("🤖 {}", style("InfoJobs Offer Scout").bold());
    println!("{}", "=".repeat(50));

    let term = prompt_text("1. General search term (e.g. programador, administrativo)")?;
    let search_term = if term.is_empty() {
        DEFAULT_SEARCH_TERM.to_string()
    } else {
        term
    };

    let keywords = prompt_list("2. Scoring keywords, comma-separated (e.g. python, sap, aws)")?;

    println!("\n--- Extra filters (leave blank to skip) ---");
    let provinces = prompt_list("3. Provinces, comma-separated (e.g. navarra, murcia, madrid)")?;
    let modalities =
        prompt_list("4. Modality, comma-separated (e.g. remoto, hibrido, presencial)")?;
    let contract_types =
        prompt_list("5. Contract type, comma-separated (e.g. indefinido, formativo)")?;
    let workdays = prompt_list("6. Workday, comma-separated (e.g. completa, parcial)")?;

    let publication_window = prompt_choice("7. Publication window", PUBLICATION_WINDOWS)?;
    let experience_min = prompt_choice("8. Minimum experience", EXPERIENCE_LEVELS)?;

    let salary_min = prompt_text("9. Minimum yearly salary, digits only (e.g. 30000)")?;

    println!("\n👍 All set. Starting the search with your preferences...");

    Ok(Preferences {
        search_term,
        keywords,
        provinces,
        modalities,
        contract_types,
        workdays,
        publication_window,
        experience_min,
        salary_min,
    })
}

fn prompt_text(prompt: &str) -> Result<String> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(fold(&raw))
}

fn prompt_list(prompt: &str) -> Result<Vec<String>> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(split_labels(&raw))
}

fn prompt_choice(prompt: &str, table: &'static [(&'static str, &'static str)]) -> Result<String> {
    let labels: Vec<&str> = table.iter().map(|(label, _)| *label).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(labels[index].to_string())
}

fn fold(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub(crate) fn split_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(fold)
        .filter(|label| !label.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_split_folded_and_cleaned() {
        assert_eq!(
            split_labels(" Navarra, MADRID ,, murcia "),
            vec!["navarra", "madrid", "murcia"]
        );
    }

    #[test]
    fn blank_input_yields_no_labels() {
        assert!(split_labels("").is_empty());
        assert!(split_labels(" , , ").is_empty());
    }
}
