//! Integration tests for translation records, comment threads, and
//! positional annotations.

use sqlx::PgPool;
use translab_db::models::annotation::CreateAnnotation;
use translab_db::models::comment::CreateComment;
use translab_db::models::session::CreateSession;
use translab_db::models::translation::{CreateTranslation, Translation};
use translab_db::repositories::{
    AnnotationRepo, CommentRepo, SessionRepo, TranslationRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_session(pool: &PgPool) -> i64 {
    SessionRepo::create(
        pool,
        1,
        &CreateSession {
            name: "Review threads".to_string(),
            source_language: "en".to_string(),
            target_language: "fr".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_translation(pool: &PgPool, session_id: i64, source: &str) -> Translation {
    TranslationRepo::create(
        pool,
        session_id,
        1,
        &CreateTranslation {
            source_text: source.to_string(),
            translated_text: format!("{source} (fr)"),
        },
    )
    .await
    .unwrap()
}

fn comment(body: &str) -> CreateComment {
    CreateComment {
        body: body.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: lifecycle status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_set_status_updates_row(pool: PgPool) {
    let session_id = seed_session(&pool).await;
    let translation = seed_translation(&pool, session_id, "Hello").await;
    assert_eq!(translation.status, "draft");

    let updated = TranslationRepo::set_status(&pool, translation.id, "approved")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "approved");
    assert!(updated.updated_at >= translation.updated_at);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_set_status_missing_translation_returns_none(pool: PgPool) {
    let updated = TranslationRepo::set_status(&pool, 999_999, "review")
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_status_can_move_backwards(pool: PgPool) {
    // No transition graph is enforced; approved may return to draft.
    let session_id = seed_session(&pool).await;
    let translation = seed_translation(&pool, session_id, "Hello").await;

    TranslationRepo::set_status(&pool, translation.id, "approved")
        .await
        .unwrap();
    let back = TranslationRepo::set_status(&pool, translation.id, "draft")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(back.status, "draft");
}

// ---------------------------------------------------------------------------
// Test: session listing with comment threads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_session_translations_newest_first(pool: PgPool) {
    let session_id = seed_session(&pool).await;
    let a = seed_translation(&pool, session_id, "One").await;
    let b = seed_translation(&pool, session_id, "Two").await;
    let c = seed_translation(&pool, session_id, "Three").await;

    let listed = TranslationRepo::list_by_session(&pool, session_id)
        .await
        .unwrap();
    let ids: Vec<i64> = listed.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_threads_attach_to_their_translations(pool: PgPool) {
    let session_id = seed_session(&pool).await;
    let commented = seed_translation(&pool, session_id, "Commented").await;
    let silent = seed_translation(&pool, session_id, "Silent").await;

    CommentRepo::create(&pool, commented.id, 2, &comment("First"))
        .await
        .unwrap();
    CommentRepo::create(&pool, commented.id, 3, &comment("Second"))
        .await
        .unwrap();

    let listed = TranslationRepo::list_by_session_with_comments(&pool, session_id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);

    // Newest-first: `silent` leads, with an empty (not missing) thread.
    assert_eq!(listed[0].translation.id, silent.id);
    assert!(listed[0].comments.is_empty());

    assert_eq!(listed[1].translation.id, commented.id);
    let bodies: Vec<&str> = listed[1].comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["Second", "First"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_with_comments(pool: PgPool) {
    let session_id = seed_session(&pool).await;
    let translation = seed_translation(&pool, session_id, "Hello").await;
    CommentRepo::create(&pool, translation.id, 2, &comment("Nice"))
        .await
        .unwrap();

    let found = TranslationRepo::find_with_comments(&pool, translation.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.translation.id, translation.id);
    assert_eq!(found.comments.len(), 1);

    let missing = TranslationRepo::find_with_comments(&pool, 999_999)
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: comment ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_comments_newest_first(pool: PgPool) {
    let session_id = seed_session(&pool).await;
    let translation = seed_translation(&pool, session_id, "Hello").await;

    for body in ["one", "two", "three"] {
        CommentRepo::create(&pool, translation.id, 2, &comment(body))
            .await
            .unwrap();
    }

    let thread = CommentRepo::list_by_translation(&pool, translation.id)
        .await
        .unwrap();
    let bodies: Vec<&str> = thread.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["three", "two", "one"]);
}

// ---------------------------------------------------------------------------
// Test: annotation ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_annotations_oldest_first(pool: PgPool) {
    let session_id = seed_session(&pool).await;
    let translation = seed_translation(&pool, session_id, "Hello").await;

    for (i, body) in ["first", "second", "third"].iter().enumerate() {
        AnnotationRepo::create(
            &pool,
            translation.id,
            2,
            &CreateAnnotation {
                body: body.to_string(),
                position_x: i as f64 * 10.0,
                position_y: 42.5,
            },
        )
        .await
        .unwrap();
    }

    // Opposite convention from comments: creation order, oldest first.
    let annotations = AnnotationRepo::list_by_translation(&pool, translation.id)
        .await
        .unwrap();
    let bodies: Vec<&str> = annotations.iter().map(|a| a.body.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);
    assert_eq!(annotations[1].position_x, 10.0);
    assert_eq!(annotations[1].position_y, 42.5);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_annotations_scoped_to_translation(pool: PgPool) {
    let session_id = seed_session(&pool).await;
    let a = seed_translation(&pool, session_id, "A").await;
    let b = seed_translation(&pool, session_id, "B").await;

    AnnotationRepo::create(
        &pool,
        a.id,
        2,
        &CreateAnnotation {
            body: "only on a".to_string(),
            position_x: 0.0,
            position_y: 0.0,
        },
    )
    .await
    .unwrap();

    assert_eq!(
        AnnotationRepo::list_by_translation(&pool, a.id)
            .await
            .unwrap()
            .len(),
        1
    );
    assert!(AnnotationRepo::list_by_translation(&pool, b.id)
        .await
        .unwrap()
        .is_empty());
}
