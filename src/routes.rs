use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Client;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::extract_data::build_profile;
use crate::fetch_profile::fetch_profile;
use crate::models::ErrorResponse;

#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub base_url: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/:username", get(get_profile))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Static API documentation served at the root
async fn home() -> Json<Value> {
    Json(json!({
        "name": "GeeksForGeeks Profile Scraper API",
        "version": "1.0",
        "description": "API to fetch user profiles and coding statistics from GeeksForGeeks",
        "endpoints": {
            "GET /": {
                "description": "API documentation and information"
            },
            "GET /<username>": {
                "description": "Fetch profile data for a specific user",
                "parameters": {
                    "username": "GeeksForGeeks username"
                },
                "returns": {
                    "info": {
                        "userName": "User's username",
                        "profilePicture": "URL to profile picture",
                        "instituteRank": "User's institute rank",
                        "currentStreak": "Current coding streak",
                        "maxStreak": "Maximum coding streak",
                        "institution": "User's institution",
                        "languagesUsed": "Programming languages used",
                        "codingScore": "Overall coding score",
                        "totalProblemsSolved": "Total problems solved",
                        "monthlyCodingScore": "Monthly coding score",
                        "articlesPublished": "Number of articles published"
                    },
                    "solvedStats": {
                        "school": {"count": "Number of school level problems", "questions": []},
                        "basic": {"count": "Number of basic level problems", "questions": []},
                        "easy": {"count": "Number of easy level problems", "questions": []},
                        "medium": {"count": "Number of medium level problems", "questions": []},
                        "hard": {"count": "Number of hard level problems", "questions": []}
                    }
                }
            }
        }
    }))
}

async fn get_profile(State(state): State<AppState>, Path(username): Path<String>) -> Response {
    match fetch_profile(&state.client, &state.base_url, &username).await {
        Ok(html_content) => {
            let profile = build_profile(&username, &html_content);
            (StatusCode::OK, Json(profile)).into_response()
        }
        Err(e) => {
            tracing::warn!("Failed to fetch profile for {}: {:#}", username, e);
            let body = ErrorResponse {
                error: "Profile Not Found".to_string(),
                details: format!("{:#}", e),
            };
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[tokio::test]
    async fn home_serves_api_documentation() {
        let Json(docs) = home().await;

        assert_eq!(docs["name"], "GeeksForGeeks Profile Scraper API");
        assert_eq!(docs["version"], "1.0");
        assert!(docs["endpoints"]["GET /<username>"].is_object());
    }

    #[tokio::test]
    async fn failed_fetch_maps_to_profile_not_found() {
        // Nothing listens on this port, so the outbound request fails fast.
        let state = AppState {
            client: Client::new(),
            base_url: "http://127.0.0.1:1".to_string(),
        };

        let response = get_profile(State(state), Path("someuser".to_string()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Profile Not Found");
        assert!(!body["details"].as_str().unwrap().is_empty());
    }
}
