use std::collections::BTreeMap;

use scraper::{Html, Selector};

use crate::scraping::extract_text_by_position::extract_text_by_position;

/// The four score-card values share a single span class; which score is
/// which is determined purely by position.
pub fn extract_coding_scores(html_content: &str) -> BTreeMap<String, String> {
    let coding_scores_by_index = [
        "codingScore",
        "totalProblemsSolved",
        "monthlyCodingScore",
        "articlesPublished",
    ];

    let document = Html::parse_document(html_content);
    let selector = Selector::parse("span.score_card_value").unwrap();
    let elements: Vec<_> = document.select(&selector).collect();

    extract_text_by_position(&elements, &coding_scores_by_index)
}
