use scraper::{Html, Selector};

pub fn extract_profile_picture(html_content: &str) -> String {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse("img.profile_pic").unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("src"))
        .unwrap_or_default()
        .to_string()
}
