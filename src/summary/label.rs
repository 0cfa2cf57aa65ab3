//! Municipality label extraction from announcement titles.

use regex::Regex;

/// Pull the municipality-identifying span out of a free-text title.
///
/// Matches the token `Ayuntamiento` followed by any run of characters up
/// to (not including) the first parenthesis, e.g.
/// `"..., del Ayuntamiento de Gijón (Asturias), por la que..."` →
/// `"Ayuntamiento de Gijón"`. Titles without the token come back
/// unchanged.
pub fn extract_label(title: &str) -> String {
    let re = Regex::new(r"Ayuntamiento[^()]+").expect("label regex is valid");
    match re.find(title) {
        Some(m) => m.as_str().trim().to_string(),
        None => title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_label_stops_at_parenthesis() {
        let title = "Resolución de 3 de marzo de 2024, del Ayuntamiento de Gijón (Asturias), por la que...";
        assert_eq!(extract_label(title), "Ayuntamiento de Gijón");
    }

    #[test]
    fn test_extract_label_runs_to_end_without_parenthesis() {
        let title = "Convocatoria del Ayuntamiento de Oviedo";
        assert_eq!(extract_label(title), "Ayuntamiento de Oviedo");
    }

    #[test]
    fn test_extract_label_fallback_returns_title_unchanged() {
        let title = "Resolución de la Universidad de Oviedo, por la que se convocan plazas";
        assert_eq!(extract_label(title), title);
    }

    #[test]
    fn test_extract_label_trims_whitespace() {
        let title = "Anuncio del Ayuntamiento de Mieres  (Asturias)";
        assert_eq!(extract_label(title), "Ayuntamiento de Mieres");
    }
}
