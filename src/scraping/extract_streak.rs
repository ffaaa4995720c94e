use scraper::{Html, Selector};

/// Split the "current / max" streak counter into its two halves.
///
/// The site renders the counter as a single text node like "45 / 120".
/// Anything that does not split into exactly two parts falls back to "00"
/// for both values.
pub fn extract_streak(html_content: &str) -> (String, String) {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse("div.streakCnt").unwrap();

    if let Some(element) = document.select(&selector).next() {
        let text = element.text().collect::<Vec<_>>().join("").replace(' ', "");
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() == 2 {
            return (parts[0].to_string(), parts[1].to_string());
        }
    }

    ("00".to_string(), "00".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_current_and_max() {
        let html = r#"<div class="streakCnt">45 / 120</div>"#;
        assert_eq!(
            extract_streak(html),
            ("45".to_string(), "120".to_string())
        );
    }

    #[test]
    fn missing_counter_defaults_to_double_zero() {
        assert_eq!(
            extract_streak("<html><body></body></html>"),
            ("00".to_string(), "00".to_string())
        );
    }

    #[test]
    fn unparsable_counter_defaults_to_double_zero() {
        let html = r#"<div class="streakCnt">45</div>"#;
        assert_eq!(
            extract_streak(html),
            ("00".to_string(), "00".to_string())
        );

        let html = r#"<div class="streakCnt"></div>"#;
        assert_eq!(
            extract_streak(html),
            ("00".to_string(), "00".to_string())
        );
    }
}
