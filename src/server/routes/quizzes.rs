use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{get_all_questions, get_questions_for_category},
        Question,
    },
    server::{
        app::AppState,
        deserializers::FlexibleId,
        error::ApiError,
        extract::ApiJson,
        quiz::{pick_unseen, ALL_CATEGORIES},
    },
    telemetry::{quiz_category_label, QUIZ_QUESTIONS_CNTR},
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizCategory {
    id: FlexibleId,
}

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: Option<QuizCategory>,
    previous_questions: Option<Vec<FlexibleId>>,
}

#[derive(Serialize)]
struct NextQuestion {
    success: bool,
    question: Option<Question>,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<QuizBody>,
) -> ApiResponse<NextQuestion> {
    let category_id = body.quiz_category.ok_or(ApiError::Unprocessable)?.id.0;
    let previous: HashSet<i64> = body
        .previous_questions
        .unwrap_or_default()
        .into_iter()
        .map(|id| id.0)
        .collect();

    let candidates = if category_id == ALL_CATEGORIES {
        get_all_questions(&pool).await?
    } else {
        get_questions_for_category(&pool, category_id).await?
    };

    let question = pick_unseen(&candidates, &previous, &mut rand::thread_rng()).cloned();
    match &question {
        Some(q) => {
            QUIZ_QUESTIONS_CNTR
                .with_label_values(&[quiz_category_label(category_id).as_str()])
                .inc();
            tracing::debug!(id = q.id, category_id, "Quiz question picked");
        }
        None => tracing::debug!(category_id, seen = previous.len(), "Quiz exhausted"),
    }

    Ok(Json(NextQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
