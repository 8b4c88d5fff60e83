use ferrous_pdns_application::ports::ObservationRepository;
use ferrous_pdns_application::use_cases::GetRrsetHistoryUseCase;
use ferrous_pdns_domain::{DomainError, RrsetQuery};
use std::sync::Arc;

mod helpers;
use helpers::MockObservationRepository;

fn use_case(repository: &MockObservationRepository) -> GetRrsetHistoryUseCase {
    GetRrsetHistoryUseCase::new(Arc::new(repository.clone()) as Arc<dyn ObservationRepository>)
}

#[tokio::test]
async fn test_adjacent_equal_sets_merge() {
    let repository = MockObservationRepository::new();
    repository.add_row("t1", "example.com.", "A", "a").await;
    repository.add_row("t2", "example.com.", "A", "a").await;
    repository.add_row("t3", "example.com.", "A", "b").await;

    let query = RrsetQuery::new("example.com", "A").unwrap();
    let summaries = use_case(&repository).execute(&query).await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].first_seen, "t1");
    assert_eq!(summaries[0].last_seen, "t2");
    assert_eq!(summaries[0].count, 2);
    assert_eq!(summaries[0].rdata.values(), &["a"]);
    assert_eq!(summaries[1].first_seen, "t3");
    assert_eq!(summaries[1].last_seen, "t3");
    assert_eq!(summaries[1].count, 1);
    assert_eq!(summaries[1].rdata.values(), &["b"]);
}

#[tokio::test]
async fn test_lookup_uses_fully_qualified_name_but_reports_input() {
    let repository = MockObservationRepository::new();
    repository.add_row("t1", "example.com.", "A", "1.2.3.4").await;

    let query = RrsetQuery::new("example.com", "A").unwrap();
    let summaries = use_case(&repository).execute(&query).await.unwrap();

    assert_eq!(repository.lookups().await, vec!["example.com."]);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].rrname, "example.com");
    assert_eq!(summaries[0].rrtype, "A");
}

#[tokio::test]
async fn test_values_at_one_timestamp_form_one_set() {
    let repository = MockObservationRepository::new();
    repository.add_row("t1", "example.com.", "A", "5.6.7.8").await;
    repository.add_row("t1", "example.com.", "A", "1.2.3.4").await;
    repository.add_row("t2", "example.com.", "A", "1.2.3.4").await;
    repository.add_row("t2", "example.com.", "A", "5.6.7.8").await;
    repository.add_row("t3", "example.com.", "A", "1.2.3.4").await;

    let query = RrsetQuery::new("example.com.", "A").unwrap();
    let summaries = use_case(&repository).execute(&query).await.unwrap();

    // Shorter sets sort first.
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].rdata.values(), &["1.2.3.4"]);
    assert_eq!(summaries[0].count, 1);
    assert_eq!(summaries[1].rdata.values(), &["1.2.3.4", "5.6.7.8"]);
    assert_eq!(summaries[1].count, 2);
    assert_eq!(summaries[1].first_seen, "t1");
    assert_eq!(summaries[1].last_seen, "t2");
}

#[tokio::test]
async fn test_non_adjacent_recurrence_merges_after_sorting() {
    let repository = MockObservationRepository::new();
    repository.add_row("1400000001", "example.com.", "A", "a").await;
    repository.add_row("1400000002", "example.com.", "A", "b").await;
    repository.add_row("1400000003", "example.com.", "A", "a").await;

    let query = RrsetQuery::new("example.com", "A").unwrap();
    let summaries = use_case(&repository).execute(&query).await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].count, 2);
    assert_eq!(summaries[0].first_seen, "1400000001");
    assert_eq!(summaries[0].last_seen, "1400000003");
    assert_eq!(summaries[1].count, 1);
}

#[tokio::test]
async fn test_other_types_are_filtered_out() {
    let repository = MockObservationRepository::new();
    repository.add_row("t1", "example.com.", "A", "a").await;
    repository.add_row("t1", "example.com.", "NS", "ns1.").await;

    let query = RrsetQuery::new("example.com", "A").unwrap();
    let summaries = use_case(&repository).execute(&query).await.unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].rdata.values(), &["a"]);
}

#[tokio::test]
async fn test_no_rows_no_summaries() {
    let repository = MockObservationRepository::new();

    let query = RrsetQuery::new("missing.example", "A").unwrap();
    let summaries = use_case(&repository).execute(&query).await.unwrap();

    assert!(summaries.is_empty());
}

#[tokio::test]
async fn test_store_failure_is_surfaced() {
    let repository = MockObservationRepository::new();
    repository.add_row("t1", "example.com.", "A", "a").await;
    repository.set_should_fail(true).await;

    let query = RrsetQuery::new("example.com", "A").unwrap();
    let result = use_case(&repository).execute(&query).await;

    assert!(matches!(result, Err(DomainError::DatabaseError(_))));
}

#[tokio::test]
async fn test_summary_serializes_value_set_as_list() {
    let repository = MockObservationRepository::new();
    repository.add_row("1400000000", "example.com.", "A", "1.2.3.4").await;

    let query = RrsetQuery::new("example.com", "A").unwrap();
    let summaries = use_case(&repository).execute(&query).await.unwrap();
    let json = serde_json::to_value(&summaries[0]).unwrap();

    assert_eq!(json["rdata"], serde_json::json!(["1.2.3.4"]));
    assert_eq!(json["count"], 1);
    assert_eq!(json["first_seen"], "1400000000");
}
