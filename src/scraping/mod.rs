pub mod extract_basic_details;
pub mod extract_coding_scores;
pub mod extract_institute_rank;
pub mod extract_profile_picture;
pub mod extract_questions_by_difficulty;
pub mod extract_solved_stats;
pub mod extract_streak;
pub mod extract_text_by_position;
