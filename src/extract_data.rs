use crate::models::{GeneralInfo, ProfileResponse};
use crate::scraping::{
    extract_basic_details, extract_coding_scores, extract_institute_rank, extract_profile_picture,
    extract_solved_stats, extract_streak,
};

// Assemble the full profile response from the fetched page
pub fn build_profile(username: &str, html_content: &str) -> ProfileResponse {
    let mut info = GeneralInfo::new();

    info.insert("userName".to_string(), username.to_string());
    info.insert(
        "profilePicture".to_string(),
        extract_profile_picture::extract_profile_picture(html_content),
    );
    info.insert(
        "instituteRank".to_string(),
        extract_institute_rank::extract_institute_rank(html_content),
    );

    let (current_streak, max_streak) = extract_streak::extract_streak(html_content);
    info.insert("currentStreak".to_string(), current_streak);
    info.insert("maxStreak".to_string(), max_streak);

    info.extend(extract_basic_details::extract_basic_details(html_content));
    info.extend(extract_coding_scores::extract_coding_scores(html_content));

    ProfileResponse {
        info,
        solved_stats: extract_solved_stats::extract_solved_stats(html_content),
    }
}
