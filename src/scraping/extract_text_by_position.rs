use std::collections::BTreeMap;

use scraper::ElementRef;

/// Assign the Nth element's text to the Nth key, by position only.
///
/// The source markup carries no per-field labels, so there is nothing to
/// match on semantically; the site is simply trusted to emit these blocks
/// in a fixed order. Surplus elements are ignored, and keys without a
/// matching element are left out of the result entirely. The site renders
/// "_ _" where a field is unset, which maps to an empty string.
pub fn extract_text_by_position(
    elements: &[ElementRef],
    keys: &[&str],
) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();

    for (element, key) in elements.iter().zip(keys) {
        let inner_text = element.text().collect::<Vec<_>>().join("");
        let value = if inner_text == "_ _" {
            String::new()
        } else {
            inner_text
        };
        result.insert((*key).to_string(), value);
    }

    result
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    fn select_divs(document: &Html) -> Vec<ElementRef> {
        let selector = Selector::parse("div").unwrap();
        document.select(&selector).collect()
    }

    #[test]
    fn zips_texts_onto_keys_in_order() {
        let document = Html::parse_document("<div>IIT Delhi</div><div>C++, Python</div>");
        let result =
            extract_text_by_position(&select_divs(&document), &["institution", "languagesUsed"]);

        assert_eq!(result["institution"], "IIT Delhi");
        assert_eq!(result["languagesUsed"], "C++, Python");
    }

    #[test]
    fn placeholder_text_maps_to_empty_string() {
        let document = Html::parse_document("<div>_ _</div>");
        let result = extract_text_by_position(&select_divs(&document), &["institution"]);

        assert_eq!(result["institution"], "");
    }

    #[test]
    fn trailing_keys_are_silently_dropped() {
        // Positional mapping is fragile on purpose: with fewer elements
        // than keys there is no way to tell which field went missing, so
        // the trailing keys simply never appear in the result.
        let document = Html::parse_document("<div>IIT Delhi</div>");
        let result =
            extract_text_by_position(&select_divs(&document), &["institution", "languagesUsed"]);

        assert_eq!(result["institution"], "IIT Delhi");
        assert!(!result.contains_key("languagesUsed"));
    }

    #[test]
    fn surplus_elements_are_ignored() {
        let document = Html::parse_document("<div>IIT Delhi</div><div>C++</div><div>extra</div>");
        let result =
            extract_text_by_position(&select_divs(&document), &["institution", "languagesUsed"]);

        assert_eq!(result.len(), 2);
    }
}
