use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::get_all_categories,
            questions::{
                self, count_questions, get_all_questions, get_question_by_id, search_questions,
            },
        },
        NewQuestion, Question,
    },
    server::{
        app::AppState,
        error::ApiError,
        extract::{ApiJson, ApiPath, ApiQuery},
        pagination::{paginate, PageQuery},
    },
};

use super::{categories_by_id, ApiResponse};

// every field is optional so that a missing one ends up as 422 rather than a rejection,
// numbers may arrive as strings since the game's form sends select values
#[derive(Deserialize)]
struct QuestionBody {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<BTreeMap<i64, String>>,
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
    question: Vec<Question>,
    total_questions: i64,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
    total_questions: i64,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<QuestionsPage> {
    let questions = get_all_questions(&pool).await?;
    let page = paginate(&questions, query.page());
    if page.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool).await?;
    Ok(Json(QuestionsPage {
        success: true,
        questions: page.to_vec(),
        total_questions: questions.len(),
        categories: Some(categories_by_id(categories)),
        current_category: None,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<QuestionBody>,
) -> ApiResponse<Created> {
    let (Some(question), Some(answer), Some(category), Some(difficulty)) =
        (body.question, body.answer, body.category, body.difficulty)
    else {
        return Err(ApiError::Unprocessable);
    };

    let id = questions::create_question(
        &pool,
        NewQuestion {
            question: &question,
            answer: &answer,
            category,
            difficulty,
        },
    )
    .await?;
    tracing::info!(id, category, "Question created");

    Ok(Json(Created {
        success: true,
        created: id,
        total_questions: count_questions(&pool).await?,
    }))
}

// deleting an unknown id answers 422 like any other failed store operation
async fn delete_question(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<Deleted> {
    let question = get_question_by_id(&pool, id)
        .await?
        .ok_or(ApiError::Unprocessable)?;
    questions::delete_question(&pool, question.id).await?;
    tracing::info!(id, category = question.category, "Question deleted");

    let remaining = get_all_questions(&pool).await?;
    let page = paginate(&remaining, query.page());
    Ok(Json(Deleted {
        success: true,
        deleted: id,
        question: page.to_vec(),
        total_questions: count_questions(&pool).await?,
    }))
}

// total_questions is the size of the returned page, clients rely on it
async fn search(
    State(pool): State<SqlitePool>,
    ApiQuery(query): ApiQuery<PageQuery>,
    ApiJson(body): ApiJson<SearchBody>,
) -> ApiResponse<QuestionsPage> {
    let term = body.search_term.ok_or(ApiError::Unprocessable)?;
    let found = search_questions(&pool, &term).await?;
    let page = paginate(&found, query.page());
    Ok(Json(QuestionsPage {
        success: true,
        questions: page.to_vec(),
        total_questions: page.len(),
        categories: None,
        current_category: None,
    }))
}

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/search", post(search))
}
