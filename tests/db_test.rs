mod common;

use common::{create_seeded_pool, create_test_pool, HISTORY, HISTORY_QUESTIONS, TOTAL_QUESTIONS};
use trivia_api::db::queries::categories::{create_category, get_all_categories, import_categories};
use trivia_api::db::queries::questions::{
    count_questions, create_question, delete_question, get_all_questions, get_question_by_id,
    get_questions_for_category, import_questions, search_questions,
};
use trivia_api::db::{Category, NewQuestion, Question};

#[tokio::test]
async fn questions_are_ordered_by_id() {
    let pool = create_seeded_pool().await;

    let ids: Vec<i64> = get_all_questions(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(ids, (1..=TOTAL_QUESTIONS).collect::<Vec<_>>());
    assert_eq!(count_questions(&pool).await.unwrap(), TOTAL_QUESTIONS);
}

#[tokio::test]
async fn category_filter_is_exact() {
    let pool = create_seeded_pool().await;

    let history = get_questions_for_category(&pool, HISTORY).await.unwrap();
    assert_eq!(
        history.iter().map(|q| q.id).collect::<Vec<_>>(),
        HISTORY_QUESTIONS.to_vec()
    );
    assert!(get_questions_for_category(&pool, 0).await.unwrap().is_empty());
}

#[tokio::test]
async fn search_ignores_case() {
    let pool = create_seeded_pool().await;

    let found = search_questions(&pool, "PENICILLIN").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].answer, "Alexander Fleming");
    assert!(search_questions(&pool, "_").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_folds_ascii_letters_only() {
    let pool = create_seeded_pool().await;
    create_question(
        &pool,
        NewQuestion {
            question: "Which école did Monet attend?",
            answer: "Académie Suisse",
            category: 2,
            difficulty: 5,
        },
    )
    .await
    .unwrap();

    assert_eq!(search_questions(&pool, "WHICH ÉCOLE").await.unwrap().len(), 0);
    assert_eq!(search_questions(&pool, "WHICH école").await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_then_delete() {
    let pool = create_seeded_pool().await;

    let id = create_question(
        &pool,
        NewQuestion {
            question: "Who painted the Sistine Chapel ceiling?",
            answer: "Michelangelo",
            category: 2,
            difficulty: 2,
        },
    )
    .await
    .unwrap();
    assert_eq!(id, TOTAL_QUESTIONS + 1);
    let stored = get_question_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.answer, "Michelangelo");

    delete_question(&pool, id).await.unwrap();
    assert!(get_question_by_id(&pool, id).await.unwrap().is_none());
    assert!(matches!(
        delete_question(&pool, id).await,
        Err(sqlx::Error::RowNotFound)
    ));
}

#[tokio::test]
async fn foreign_key_is_enforced() {
    let pool = create_seeded_pool().await;

    let result = create_question(
        &pool,
        NewQuestion {
            question: "Orphan?",
            answer: "Yes",
            category: 42,
            difficulty: 1,
        },
    )
    .await;
    assert!(result.is_err());
    assert_eq!(count_questions(&pool).await.unwrap(), TOTAL_QUESTIONS);
}

#[tokio::test]
async fn import_keeps_ids_and_overwrites() {
    let pool = create_test_pool().await;
    create_category(&pool, "Sience").await.unwrap();

    import_categories(
        &pool,
        vec![
            Category {
                id: 1,
                kind: "Science".to_owned(),
            },
            Category {
                id: 7,
                kind: "Music".to_owned(),
            },
        ],
    )
    .await
    .unwrap();
    import_questions(
        &pool,
        vec![Question {
            id: 30,
            question: "How many strings does a violin have?".to_owned(),
            answer: "Four".to_owned(),
            category: 7,
            difficulty: 1,
        }],
    )
    .await
    .unwrap();

    let categories = get_all_categories(&pool).await.unwrap();
    assert_eq!(
        categories
            .iter()
            .map(|c| (c.id, c.kind.as_str()))
            .collect::<Vec<_>>(),
        vec![(1, "Science"), (7, "Music")]
    );
    let question = get_question_by_id(&pool, 30).await.unwrap().unwrap();
    assert_eq!(question.category, 7);
}
