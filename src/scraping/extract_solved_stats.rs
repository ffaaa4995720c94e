use crate::models::SolvedStats;
use crate::scraping::extract_questions_by_difficulty::extract_questions_by_difficulty;

/// One bucket per difficulty tier, each extracted independently so a
/// markup change under one tab cannot empty the others.
pub fn extract_solved_stats(html_content: &str) -> SolvedStats {
    SolvedStats {
        school: extract_questions_by_difficulty(html_content, "school"),
        basic: extract_questions_by_difficulty(html_content, "basic"),
        easy: extract_questions_by_difficulty(html_content, "easy"),
        medium: extract_questions_by_difficulty(html_content, "medium"),
        hard: extract_questions_by_difficulty(html_content, "hard"),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::DifficultyBucket;

    use super::*;

    #[test]
    fn tiers_are_isolated_from_each_other() {
        // "medium" is absent; "easy" must still come through populated.
        let html = r#"
            <div id="easy">
                <a href="/two-sum">Two Sum</a>
            </div>
        "#;
        let stats = extract_solved_stats(html);

        assert_eq!(stats.medium, DifficultyBucket::default());
        assert_eq!(stats.easy.count, 1);
        assert_eq!(stats.easy.questions[0].question, "Two Sum");
    }

    #[test]
    fn empty_page_yields_all_zero_buckets() {
        let stats = extract_solved_stats("<html><body></body></html>");
        assert_eq!(stats, SolvedStats::default());
    }
}
