use crate::config::MAX_RESULTS_PER_PAGE;
use crate::models::Preferences;

type CodeTable = [(&'static str, &'static str)];

// Label-to-code tables for the search API. Keys are the site's own filter
// vocabulary, lowercased the same way operator input is folded.

pub const PROVINCES: &CodeTable = &[
    ("a coruña", "28"),
    ("álava/araba", "2"),
    ("alicante/alacant", "4"),
    ("almería", "5"),
    ("asturias", "6"),
    ("barcelona", "9"),
    ("burgos", "10"),
    ("cantabria", "13"),
    ("castellón/castelló", "14"),
    ("ciudad real", "16"),
    ("córdoba", "17"),
    ("girona", "19"),
    ("guipúzcoa/gipuzkoa", "23"),
    ("islas baleares/illes balears", "26"),
    ("jaén", "27"),
    ("la rioja", "29"),
    ("las palmas", "20"),
    ("león", "30"),
    ("lleida", "31"),
    ("madrid", "33"),
    ("málaga", "34"),
    ("murcia", "36"),
    ("navarra", "37"),
    ("pontevedra", "40"),
    ("salamanca", "41"),
    ("santa cruz de tenerife", "46"),
    ("sevilla", "43"),
    ("tarragona", "45"),
    ("toledo", "48"),
    ("valencia/valència", "49"),
    ("valladolid", "50"),
    ("vizcaya/bizkaia", "51"),
    ("zaragoza", "53"),
];

pub const MODALITIES: &CodeTable = &[
    ("hibrido", "3"),
    ("presencial", "1"),
    ("remoto", "2"),
];

pub const CONTRACT_TYPES: &CodeTable = &[
    ("indefinido", "1"),
    ("formativo", "3"),
    ("de duracion determinada", "4"),
    ("fijo discontinuo", "8"),
    ("a tiempo parcial", "9"),
];

pub const WORKDAYS: &CodeTable = &[
    ("completa", "1"),
    ("parcial", "2"),
    ("indiferente", "10"),
];

pub const PUBLICATION_WINDOWS: &CodeTable = &[
    ("cualquier fecha", "ANY"),
    ("ultimas 24h", "_24_HOURS"),
    ("ultima semana", "_7_DAYS"),
    ("ultimos 15 dias", "_15_DAYS"),
];

pub const EXPERIENCE_LEVELS: &CodeTable = &[
    ("sin experiencia", "_0_YEARS"),
    ("1 año", "_1_YEAR"),
    ("2 años", "_2_YEARS"),
    ("3 años", "_3_YEARS"),
    ("5 años", "_5_YEARS"),
    ("10 años", "_10_YEARS"),
];

fn lookup(table: &'static CodeTable, label: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, code)| *code)
}

/// Comma-joined codes for every label with a table entry, in input order.
/// Labels without an entry are dropped without complaint.
fn joined_codes(table: &'static CodeTable, labels: &[String]) -> Option<String> {
    let codes: Vec<&str> = labels.iter().filter_map(|label| lookup(table, label)).collect();
    if codes.is_empty() {
        None
    } else {
        Some(codes.join(","))
    }
}

/// Translates the operator preferences into the query parameters the search
/// API understands. A filter that translates to nothing is omitted entirely.
pub fn build_search_params(preferences: &Preferences) -> Vec<(String, String)> {
    let mut params = vec![
        ("keyword".to_string(), preferences.search_term.clone()),
        ("sortBy".to_string(), "RELEVANCE".to_string()),
        ("maxResults".to_string(), MAX_RESULTS_PER_PAGE.to_string()),
    ];

    if let Some(codes) = joined_codes(PROVINCES, &preferences.provinces) {
        params.push(("provinceIds".to_string(), codes));
    }
    if let Some(codes) = joined_codes(MODALITIES, &preferences.modalities) {
        params.push(("teleworkingIds".to_string(), codes));
    }
    if let Some(codes) = joined_codes(CONTRACT_TYPES, &preferences.contract_types) {
        params.push(("contractTypeIds".to_string(), codes));
    }
    if let Some(codes) = joined_codes(WORKDAYS, &preferences.workdays) {
        params.push(("workdayIds".to_string(), codes));
    }

    let salary = preferences.salary_min.as_str();
    if !salary.is_empty() && salary.chars().all(|c| c.is_ascii_digit()) {
        params.push(("salaryMin".to_string(), salary.to_string()));
    }

    if let Some(code) = lookup(PUBLICATION_WINDOWS, &preferences.publication_window) {
        params.push(("sinceDate".to_string(), code.to_string()));
    }
    if let Some(code) = lookup(EXPERIENCE_LEVELS, &preferences.experience_min) {
        params.push(("experienceMin".to_string(), code.to_string()));
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn base_preferences() -> Preferences {
        Preferences {
            search_term: "programador".to_string(),
            ..Preferences::default()
        }
    }

    #[test]
    fn always_emits_keyword_sort_and_page_size() {
        let params = build_search_params(&base_preferences());
        assert_eq!(param(&params, "keyword"), Some("programador"));
        assert_eq!(param(&params, "sortBy"), Some("RELEVANCE"));
        assert_eq!(param(&params, "maxResults"), Some("50"));
    }

    #[test]
    fn translates_known_labels_in_input_order() {
        let mut preferences = base_preferences();
        preferences.provinces = vec!["navarra".to_string(), "madrid".to_string()];
        preferences.modalities = vec!["remoto".to_string(), "hibrido".to_string()];

        let params = build_search_params(&preferences);
        assert_eq!(param(&params, "provinceIds"), Some("37,33"));
        assert_eq!(param(&params, "teleworkingIds"), Some("2,3"));
    }

    #[test]
    fn drops_unknown_labels_silently() {
        let mut preferences = base_preferences();
        preferences.provinces = vec![
            "atlantis".to_string(),
            "madrid".to_string(),
            "mordor".to_string(),
        ];

        let params = build_search_params(&preferences);
        assert_eq!(param(&params, "provinceIds"), Some("33"));
    }

    #[test]
    fn omits_parameter_when_no_label_matches() {
        let mut preferences = base_preferences();
        preferences.contract_types = vec!["eterno".to_string()];
        preferences.workdays = vec![];

        let params = build_search_params(&preferences);
        assert_eq!(param(&params, "contractTypeIds"), None);
        assert_eq!(param(&params, "workdayIds"), None);
    }

    #[test]
    fn salary_passes_only_when_all_digits() {
        let mut preferences = base_preferences();
        preferences.salary_min = "30000".to_string();
        assert_eq!(
            param(&build_search_params(&preferences), "salaryMin"),
            Some("30000")
        );

        preferences.salary_min = "30k".to_string();
        assert_eq!(param(&build_search_params(&preferences), "salaryMin"), None);

        preferences.salary_min = String::new();
        assert_eq!(param(&build_search_params(&preferences), "salaryMin"), None);
    }

    #[test]
    fn single_label_lookups_translate_or_vanish() {
        let mut preferences = base_preferences();
        preferences.publication_window = "ultimas 24h".to_string();
        preferences.experience_min = "3 años".to_string();

        let params = build_search_params(&preferences);
        assert_eq!(param(&params, "sinceDate"), Some("_24_HOURS"));
        assert_eq!(param(&params, "experienceMin"), Some("_3_YEARS"));

        preferences.publication_window = "hace un rato".to_string();
        preferences.experience_min = String::new();
        let params = build_search_params(&preferences);
        assert_eq!(param(&params, "sinceDate"), None);
        assert_eq!(param(&params, "experienceMin"), None);
    }
}
