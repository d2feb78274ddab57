use serde_json::json;

use kamus_definitions::domain::types::{
    AuthorizationPolicy, DefinitionInput, DefinitionPayload, DefinitionStatus, SearchCriteria,
};
use kamus_definitions::error::DefinitionsServiceError;
use kamus_definitions::usecase::definition::{
    CreateDefinitionUseCase, DeleteDefinitionUseCase, GetDefinitionUseCase,
    ListDefinitionsUseCase, UpdateDefinitionUseCase,
};

use crate::helpers::{ALICE, BOB, MemoryRepo, SLANG, TECH, test_repo};

fn input(term: &str, definition: &str, category_id: i32) -> DefinitionInput {
    DefinitionInput {
        term: term.to_owned(),
        definition: definition.to_owned(),
        category_id,
    }
}

fn create(repo: &MemoryRepo) -> CreateDefinitionUseCase<MemoryRepo, MemoryRepo> {
    CreateDefinitionUseCase {
        repo: repo.clone(),
        categories: repo.clone(),
    }
}

fn update(
    repo: &MemoryRepo,
    policy: AuthorizationPolicy,
) -> UpdateDefinitionUseCase<MemoryRepo, MemoryRepo> {
    UpdateDefinitionUseCase {
        repo: repo.clone(),
        categories: repo.clone(),
        policy,
    }
}

fn delete(repo: &MemoryRepo) -> DeleteDefinitionUseCase<MemoryRepo> {
    DeleteDefinitionUseCase {
        repo: repo.clone(),
        policy: AuthorizationPolicy::OwnerOnly,
        allow_anonymous: false,
    }
}

// ── Create / Get ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_pending_definition_owned_by_caller() {
    let repo = test_repo();
    let id = create(&repo)
        .execute(ALICE, input("foo", "a placeholder name", SLANG))
        .await
        .unwrap();

    let stored = repo.stored(id);
    assert_eq!(stored.user_id, ALICE);
    assert_eq!(stored.status, DefinitionStatus::Pending);
    assert!(stored.deleted_at.is_none());

    let detail = GetDefinitionUseCase { repo: repo.clone() }
        .execute(id)
        .await
        .unwrap();
    assert_eq!(detail.term, "foo");
    assert_eq!(detail.username, "alice");
    assert_eq!(detail.category.id, SLANG);
    assert_eq!(detail.category.category, "slang");
}

#[tokio::test]
async fn should_ignore_client_supplied_status_on_create() {
    let repo = test_repo();
    let payload: DefinitionPayload = serde_json::from_value(json!({
        "term": "foo",
        "definition": "bar",
        "categoryId": "1",
        "statusDefinitionId": 2,
        "userId": BOB,
    }))
    .unwrap();
    let input = DefinitionInput::validate(payload).unwrap();

    let id = create(&repo).execute(ALICE, input).await.unwrap();

    let stored = repo.stored(id);
    assert_eq!(stored.status, DefinitionStatus::Pending);
    assert_eq!(stored.user_id, ALICE);
}

#[tokio::test]
async fn should_not_create_with_unknown_category() {
    let repo = test_repo();
    let result = create(&repo).execute(ALICE, input("foo", "bar", 99)).await;

    assert!(matches!(result, Err(DefinitionsServiceError::InvalidInput(_))));
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn should_hide_deleted_definition_from_get() {
    let repo = test_repo();
    let id = repo.seed(ALICE, "gone", SLANG, DefinitionStatus::Deleted);

    let result = GetDefinitionUseCase { repo }.execute(id).await;
    assert!(matches!(
        result,
        Err(DefinitionsServiceError::DefinitionNotFound)
    ));
}

#[tokio::test]
async fn should_show_pending_definition_by_id() {
    let repo = test_repo();
    let id = repo.seed(ALICE, "draft", SLANG, DefinitionStatus::Pending);

    let detail = GetDefinitionUseCase { repo }.execute(id).await.unwrap();
    assert_eq!(detail.id, id);
}

// ── List ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_only_approved_definitions_in_category() {
    let repo = test_repo();
    let first = repo.seed(ALICE, "foo", SLANG, DefinitionStatus::Approved);
    let second = repo.seed(BOB, "bar", SLANG, DefinitionStatus::Approved);
    repo.seed(ALICE, "pending", SLANG, DefinitionStatus::Pending);
    repo.seed(ALICE, "deleted", SLANG, DefinitionStatus::Deleted);
    repo.seed(ALICE, "other", TECH, DefinitionStatus::Approved);

    let listing = ListDefinitionsUseCase { repo }
        .execute(SearchCriteria::Category(SLANG))
        .await
        .unwrap();

    let ids: Vec<i32> = listing.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert!(listing.iter().all(|d| d.category == "slang"));
    assert_eq!(listing[1].username, "bob");
}

#[tokio::test]
async fn should_search_approved_definitions_by_term_substring() {
    let repo = test_repo();
    repo.seed(ALICE, "foobar", SLANG, DefinitionStatus::Approved);
    repo.seed(ALICE, "food", TECH, DefinitionStatus::Rejected);

    let listing = ListDefinitionsUseCase { repo }
        .execute(SearchCriteria::Term("foo".to_owned()))
        .await
        .unwrap();

    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].term, "foobar");
}

#[tokio::test]
async fn should_report_term_not_found_for_no_matches() {
    let repo = test_repo();
    repo.seed(ALICE, "foo", SLANG, DefinitionStatus::Approved);

    let result = ListDefinitionsUseCase { repo }
        .execute(SearchCriteria::Term("nonexistent".to_owned()))
        .await;
    assert!(matches!(result, Err(DefinitionsServiceError::TermNotFound)));
}

#[tokio::test]
async fn should_not_list_deleted_definition_after_delete() {
    let repo = test_repo();
    let id = repo.seed(ALICE, "foo", SLANG, DefinitionStatus::Approved);
    delete(&repo).execute(Some(ALICE), id).await.unwrap();

    let result = ListDefinitionsUseCase { repo }
        .execute(SearchCriteria::Category(SLANG))
        .await;
    assert!(matches!(result, Err(DefinitionsServiceError::TermNotFound)));
}

// ── Update ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_send_approved_definition_back_to_review_on_update() {
    let repo = test_repo();
    let id = repo.seed(ALICE, "foo", SLANG, DefinitionStatus::Approved);
    let before = repo.stored(id);

    update(&repo, AuthorizationPolicy::OwnerOnly)
        .execute(ALICE, id, input("foo2", "new meaning", TECH))
        .await
        .unwrap();

    let after = repo.stored(id);
    assert_eq!(after.term, "foo2");
    assert_eq!(after.definition, "new meaning");
    assert_eq!(after.category_id, TECH);
    assert_eq!(after.status, DefinitionStatus::Pending);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[tokio::test]
async fn should_forbid_update_by_non_owner() {
    let repo = test_repo();
    let id = repo.seed(ALICE, "foo", SLANG, DefinitionStatus::Approved);

    let result = update(&repo, AuthorizationPolicy::OwnerOnly)
        .execute(BOB, id, input("hijack", "nope", SLANG))
        .await;

    assert!(matches!(result, Err(DefinitionsServiceError::Forbidden)));
    let stored = repo.stored(id);
    assert_eq!(stored.term, "foo");
    assert_eq!(stored.status, DefinitionStatus::Approved);
}

#[tokio::test]
async fn should_transfer_ownership_on_update_when_any_user_may_edit() {
    let repo = test_repo();
    let id = repo.seed(ALICE, "foo", SLANG, DefinitionStatus::Approved);

    update(&repo, AuthorizationPolicy::AnyAuthenticated)
        .execute(BOB, id, input("foo", "edited by bob", SLANG))
        .await
        .unwrap();

    let stored = repo.stored(id);
    assert_eq!(stored.user_id, BOB);
    assert_eq!(stored.status, DefinitionStatus::Pending);
}

#[tokio::test]
async fn should_not_update_missing_or_deleted_definition() {
    let repo = test_repo();
    let deleted = repo.seed(ALICE, "gone", SLANG, DefinitionStatus::Deleted);
    let usecase = update(&repo, AuthorizationPolicy::OwnerOnly);

    let missing = usecase.execute(ALICE, 999, input("x", "y", SLANG)).await;
    assert!(matches!(
        missing,
        Err(DefinitionsServiceError::DefinitionNotFound)
    ));

    let revived = usecase.execute(ALICE, deleted, input("x", "y", SLANG)).await;
    assert!(matches!(
        revived,
        Err(DefinitionsServiceError::DefinitionNotFound)
    ));
    assert_eq!(repo.stored(deleted).status, DefinitionStatus::Deleted);
}

// ── Delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_soft_delete_and_keep_row() {
    let repo = test_repo();
    let id = repo.seed(ALICE, "foo", SLANG, DefinitionStatus::Approved);

    delete(&repo).execute(Some(ALICE), id).await.unwrap();

    let stored = repo.stored(id);
    assert_eq!(stored.status, DefinitionStatus::Deleted);
    assert!(stored.deleted_at.is_some());
    assert_eq!(repo.count(), 1);
}

#[tokio::test]
async fn should_accept_repeated_delete() {
    let repo = test_repo();
    let id = repo.seed(ALICE, "foo", SLANG, DefinitionStatus::Approved);
    let usecase = delete(&repo);

    usecase.execute(Some(ALICE), id).await.unwrap();
    let first = repo.stored(id).deleted_at.unwrap();
    usecase.execute(Some(ALICE), id).await.unwrap();
    let second = repo.stored(id).deleted_at.unwrap();

    assert_eq!(repo.stored(id).status, DefinitionStatus::Deleted);
    assert!(second > first);
}

#[tokio::test]
async fn should_not_delete_missing_definition() {
    let repo = test_repo();
    let result = delete(&repo).execute(Some(ALICE), 42).await;
    assert!(matches!(
        result,
        Err(DefinitionsServiceError::DefinitionNotFound)
    ));
}

#[tokio::test]
async fn should_forbid_delete_by_non_owner() {
    let repo = test_repo();
    let id = repo.seed(ALICE, "foo", SLANG, DefinitionStatus::Approved);

    let result = delete(&repo).execute(Some(BOB), id).await;
    assert!(matches!(result, Err(DefinitionsServiceError::Forbidden)));
    assert_eq!(repo.stored(id).status, DefinitionStatus::Approved);
}

#[tokio::test]
async fn should_allow_anonymous_delete_only_when_enabled() {
    let repo = test_repo();
    let id = repo.seed(ALICE, "foo", SLANG, DefinitionStatus::Approved);

    let rejected = delete(&repo).execute(None, id).await;
    assert!(matches!(rejected, Err(DefinitionsServiceError::Unauthorized)));
    assert_eq!(repo.stored(id).status, DefinitionStatus::Approved);

    let usecase = DeleteDefinitionUseCase {
        repo: repo.clone(),
        policy: AuthorizationPolicy::OwnerOnly,
        allow_anonymous: true,
    };
    usecase.execute(None, id).await.unwrap();
    assert_eq!(repo.stored(id).status, DefinitionStatus::Deleted);
}

#[tokio::test]
async fn should_report_missing_definition_before_unknown_category() {
    let repo = test_repo();
    let deleted = repo.seed(ALICE, "gone", SLANG, DefinitionStatus::Deleted);
    let usecase = update(&repo, AuthorizationPolicy::OwnerOnly);

    let missing = usecase.execute(ALICE, 999, input("x", "y", 99)).await;
    assert!(matches!(
        missing,
        Err(DefinitionsServiceError::DefinitionNotFound)
    ));

    let deleted = usecase.execute(ALICE, deleted, input("x", "y", 99)).await;
    assert!(matches!(
        deleted,
        Err(DefinitionsServiceError::DefinitionNotFound)
    ));
}

#[tokio::test]
async fn should_reject_unknown_category_on_existing_definition() {
    let repo = test_repo();
    let id = repo.seed(ALICE, "foo", SLANG, DefinitionStatus::Approved);

    let result = update(&repo, AuthorizationPolicy::OwnerOnly)
        .execute(ALICE, id, input("foo", "bar", 99))
        .await;

    assert!(matches!(result, Err(DefinitionsServiceError::InvalidInput(_))));
    assert_eq!(repo.stored(id).category_id, SLANG);
}
