use scraper::{Html, Selector};

pub fn extract_institute_rank(html_content: &str) -> String {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse("span.rankNum").unwrap();

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<Vec<_>>().join(""))
        .unwrap_or_default()
}
