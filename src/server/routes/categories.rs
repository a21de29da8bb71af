use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions::get_questions_for_category},
        Question,
    },
    server::{
        app::AppState,
        error::ApiError,
        extract::{ApiPath, ApiQuery},
        pagination::{paginate, PageQuery},
    },
};

use super::{categories_by_id, ApiResponse};

#[derive(Serialize)]
struct CategoriesList {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesList> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesList {
        success: true,
        categories: categories_by_id(categories),
    }))
}

// an unknown category is an empty list, not a 404
async fn questions_for_category(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<CategoryQuestions> {
    let questions = get_questions_for_category(&pool, id).await?;
    let page = paginate(&questions, query.page());
    Ok(Json(CategoryQuestions {
        success: true,
        questions: page.to_vec(),
        total_questions: questions.len(),
        current_category: id,
    }))
}

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
}
