use kamus_definitions::domain::types::DefinitionStatus;
use kamus_definitions::error::DefinitionsServiceError;
use kamus_definitions::usecase::dashboard::DashboardSummaryUseCase;

use crate::helpers::{ALICE, BOB, MemoryRepo, SLANG, TECH, test_repo};

fn dashboard(repo: &MemoryRepo) -> DashboardSummaryUseCase<MemoryRepo, MemoryRepo> {
    DashboardSummaryUseCase {
        users: repo.clone(),
        repo: repo.clone(),
    }
}

#[tokio::test]
async fn should_summarize_callers_definitions_by_status() {
    let repo = test_repo();
    repo.seed(ALICE, "a", SLANG, DefinitionStatus::Approved);
    repo.seed(ALICE, "b", TECH, DefinitionStatus::Approved);
    repo.seed(ALICE, "c", SLANG, DefinitionStatus::Pending);
    repo.seed(ALICE, "d", SLANG, DefinitionStatus::Rejected);
    repo.seed(ALICE, "e", SLANG, DefinitionStatus::Deleted);
    repo.seed(BOB, "f", SLANG, DefinitionStatus::Approved);

    let summary = dashboard(&repo).execute(ALICE).await.unwrap();

    assert_eq!(summary.user.username, "alice");
    assert_eq!(summary.user.email, "alice@example.com");
    assert_eq!(summary.total_approved, 2);
    assert_eq!(summary.total_review, 1);
    assert_eq!(summary.total_reject, 1);

    let total = summary.total_approved + summary.total_review + summary.total_reject;
    assert_eq!(usize::try_from(total).unwrap(), summary.definitions.len());
    assert!(
        summary
            .definitions
            .iter()
            .all(|d| d.status_definition != "deleted")
    );
}

#[tokio::test]
async fn should_order_dashboard_by_most_recently_updated() {
    let repo = test_repo();
    let older = repo.seed(ALICE, "older", SLANG, DefinitionStatus::Approved);
    let newer = repo.seed(ALICE, "newer", SLANG, DefinitionStatus::Pending);

    let summary = dashboard(&repo).execute(ALICE).await.unwrap();

    let ids: Vec<i32> = summary.definitions.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![newer, older]);
    assert_eq!(summary.definitions[0].status_definition, "pending");
    assert_eq!(summary.definitions[1].category, "slang");
}

#[tokio::test]
async fn should_return_empty_dashboard_for_new_user() {
    let repo = test_repo();
    repo.seed(ALICE, "a", SLANG, DefinitionStatus::Approved);

    let summary = dashboard(&repo).execute(BOB).await.unwrap();

    assert_eq!(summary.total_approved, 0);
    assert_eq!(summary.total_review, 0);
    assert_eq!(summary.total_reject, 0);
    assert!(summary.definitions.is_empty());
}

#[tokio::test]
async fn should_reject_dashboard_for_unknown_user() {
    let repo = test_repo();
    let result = dashboard(&repo).execute(404).await;
    assert!(matches!(result, Err(DefinitionsServiceError::Unauthorized)));
}
