use scraper::{Html, Selector};

use crate::models::{DifficultyBucket, Question};

/// Collect every question link under the container for one difficulty.
///
/// The container is matched by id. Any miss inside this step (container
/// absent, an anchor without an href) zeroes out the whole bucket; other
/// difficulties are unaffected.
pub fn extract_questions_by_difficulty(html_content: &str, difficulty: &str) -> DifficultyBucket {
    let document = Html::parse_document(html_content);

    let container_selector = match Selector::parse(&format!("div#{}", difficulty)) {
        Ok(selector) => selector,
        Err(_) => return DifficultyBucket::default(),
    };
    let anchor_selector = Selector::parse("a").unwrap();

    let Some(container) = document.select(&container_selector).next() else {
        return DifficultyBucket::default();
    };

    let mut questions = Vec::new();
    for anchor in container.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            return DifficultyBucket::default();
        };
        questions.push(Question {
            question: anchor.text().collect::<Vec<_>>().join(""),
            question_url: href.to_string(),
        });
    }

    DifficultyBucket {
        count: questions.len(),
        questions,
    }
}
