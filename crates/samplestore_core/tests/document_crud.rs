use samplestore_core::db::open_store_in_memory;
use samplestore_core::{DocumentRepository, RepoError, Sample, SampleRepository, SampleResult};

fn fresh_repo() -> DocumentRepository {
    DocumentRepository::new(open_store_in_memory().unwrap())
}

#[test]
fn insert_then_list_returns_an_equal_sample() {
    let mut repo = fresh_repo();
    let sample = Sample::new(1.5, "2021-01-10", SampleResult::True);

    assert!(repo.insert_sample(sample.clone()).unwrap());

    let listed = repo.list_samples(SampleResult::True).unwrap();
    assert_eq!(listed, vec![sample]);
}

#[test]
fn duplicate_insert_is_rejected_and_keeps_the_first_record() {
    let mut repo = fresh_repo();
    let original = Sample::with_uid("1", 1.5, "2021-01-10", SampleResult::True);
    let replacement = Sample::with_uid("1", 8.8, "2024-04-04", SampleResult::False);

    assert!(repo.insert_sample(original.clone()).unwrap());
    assert!(!repo.insert_sample(replacement).unwrap());

    assert_eq!(repo.list_all_samples().unwrap(), vec![original]);
}

#[test]
fn insert_rejects_the_wildcard_result() {
    let mut repo = fresh_repo();
    let wildcard = Sample::new(1.0, "2021-01-01", SampleResult::All);

    assert!(!repo.insert_sample(wildcard).unwrap());
    assert!(repo.list_all_samples().unwrap().is_empty());
}

#[test]
fn batch_insert_with_duplicates_reports_failure_but_keeps_progress() {
    let mut repo = fresh_repo();
    let duplicate = Sample::with_uid("dup", 2.2, "2021-02-22", SampleResult::True);

    let inserted_all = repo
        .insert_samples(vec![
            Sample::new(1.2, "2021-02-02", SampleResult::True),
            Sample::new(7.2, "2021-02-02", SampleResult::False),
            duplicate.clone(),
            duplicate,
            Sample::new(0.2, "2021-02-02", SampleResult::Uncertain),
        ])
        .unwrap();

    assert!(!inserted_all);
    assert_eq!(repo.list_all_samples().unwrap().len(), 4);
}

#[test]
fn wildcard_list_returns_every_stored_result() {
    let mut repo = fresh_repo();
    repo.insert_sample(Sample::new(1.0, "2021-01-01", SampleResult::True))
        .unwrap();
    repo.insert_sample(Sample::new(2.0, "2021-01-02", SampleResult::False))
        .unwrap();
    repo.insert_sample(Sample::new(3.0, "2021-01-03", SampleResult::Uncertain))
        .unwrap();

    assert_eq!(repo.list_samples(SampleResult::All).unwrap().len(), 3);
    assert_eq!(repo.list_samples(SampleResult::False).unwrap().len(), 1);
}

#[test]
fn update_on_absent_uid_fails_and_changes_nothing() {
    let mut repo = fresh_repo();
    let present = Sample::with_uid("here", 1.0, "2021-01-01", SampleResult::True);
    repo.insert_sample(present.clone()).unwrap();

    let ghost = Sample::with_uid("missing", 5.0, "2021-05-05", SampleResult::False);
    assert!(!repo.update_sample(&ghost).unwrap());
    assert_eq!(repo.list_all_samples().unwrap(), vec![present]);
}

#[test]
fn update_replaces_value_and_result_but_not_uid_or_date() {
    let mut repo = fresh_repo();
    repo.insert_sample(Sample::with_uid("1", 1.2, "2021-01-01", SampleResult::True))
        .unwrap();

    let updated = Sample::with_uid("1", 3.2, "2029-09-09", SampleResult::False);
    assert!(repo.update_sample(&updated).unwrap());

    let stored = repo.list_all_samples().unwrap().remove(0);
    assert_eq!(stored.uid(), "1");
    assert_eq!(stored.value(), 3.2);
    assert_eq!(stored.result(), SampleResult::False);
    assert_eq!(stored.date(), "2021-01-01");
}

#[test]
fn upsert_inserts_when_absent_and_overwrites_when_present() {
    let mut repo = fresh_repo();
    let first = Sample::with_uid("u", 1.0, "2021-01-01", SampleResult::True);
    let second = Sample::with_uid("u", 2.0, "2022-02-02", SampleResult::False);

    assert!(repo.upsert_sample(first).unwrap());
    assert!(repo.upsert_sample(second.clone()).unwrap());

    assert_eq!(repo.list_all_samples().unwrap(), vec![second]);
}

#[test]
fn delete_requires_the_full_document_to_match() {
    let mut repo = fresh_repo();
    let stored = Sample::with_uid("1", 1.5, "2021-01-10", SampleResult::True);
    repo.insert_sample(stored.clone()).unwrap();

    // Same uid, different value: no document matches, nothing is deleted.
    let near_miss = Sample::with_uid("1", 1.6, "2021-01-10", SampleResult::True);
    assert!(!repo.delete_sample(&near_miss).unwrap());
    assert_eq!(repo.list_all_samples().unwrap().len(), 1);

    assert!(repo.delete_sample(&stored).unwrap());
    assert!(repo.list_all_samples().unwrap().is_empty());
}

#[test]
fn delete_decrements_the_count_by_exactly_one() {
    let mut repo = fresh_repo();
    let first = Sample::new(1.0, "2021-01-01", SampleResult::True);
    let second = Sample::new(2.0, "2021-01-02", SampleResult::True);
    repo.insert_sample(first.clone()).unwrap();
    repo.insert_sample(second).unwrap();

    assert!(repo.delete_sample(&first).unwrap());
    assert_eq!(repo.list_all_samples().unwrap().len(), 1);
}

#[test]
fn retrieve_is_an_explicit_unsupported_error() {
    let repo = fresh_repo();
    let err = repo.retrieve("any").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Unsupported {
            backend: "document-store",
            operation: "retrieve",
        }
    ));
}

#[test]
fn documents_are_read_through_the_expected_wire_fields() {
    let conn = open_store_in_memory().unwrap();
    conn.execute(
        "INSERT INTO samples (doc) VALUES
            ('{\"_id\":\"w\",\"sampleValue\":1.5,\"sampleResult\":\"TRUE\",\"sampleDate\":\"2021-01-10\"}');",
        [],
    )
    .unwrap();

    let repo = DocumentRepository::new(conn);
    let listed = repo.list_all_samples().unwrap();
    assert_eq!(
        listed,
        vec![Sample::with_uid("w", 1.5, "2021-01-10", SampleResult::True)]
    );
}

#[test]
fn float_values_round_trip_through_the_document_projection() {
    let mut repo = fresh_repo();
    let sample = Sample::with_uid("f", 0.1 + 0.2, "2021-01-01", SampleResult::Uncertain);

    repo.insert_sample(sample.clone()).unwrap();

    let stored = repo.list_all_samples().unwrap().remove(0);
    assert_eq!(stored, sample);
}
