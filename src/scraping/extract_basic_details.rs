use std::collections::BTreeMap;

use scraper::{Html, Selector};

use crate::scraping::extract_text_by_position::extract_text_by_position;

/// Institution and languages come out of one run of unlabelled divs, in
/// the order the site emits them.
pub fn extract_basic_details(html_content: &str) -> BTreeMap<String, String> {
    let basic_details_by_index = ["institution", "languagesUsed"];

    let document = Html::parse_document(html_content);
    let selector = Selector::parse("div.basic_details_data").unwrap();
    let elements: Vec<_> = document.select(&selector).collect();

    extract_text_by_position(&elements, &basic_details_by_index)
}
