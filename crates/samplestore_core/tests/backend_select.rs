use samplestore_core::{
    open_repository, BackendConfig, RepoError, Sample, SampleRepository, SampleResult,
};
use tempfile::TempDir;

#[test]
fn memory_backend_works_through_the_trait_object() {
    let mut repo = open_repository(&BackendConfig::Memory).unwrap();

    let sample = Sample::new(1.0, "2021-01-01", SampleResult::True);
    let uid = sample.uid().to_string();
    assert!(repo.insert_sample(sample).unwrap());
    assert!(repo.retrieve(&uid).unwrap().is_some());
}

#[test]
fn document_backend_works_through_the_trait_object() {
    let dir = TempDir::new().unwrap();
    let config = BackendConfig::DocumentStore {
        db_path: dir.path().join("store.db"),
    };
    let mut repo = open_repository(&config).unwrap();

    assert!(repo
        .insert_sample(Sample::new(2.0, "2021-02-02", SampleResult::False))
        .unwrap());
    assert_eq!(repo.list_samples(SampleResult::False).unwrap().len(), 1);

    let err = repo.retrieve("any").unwrap_err();
    assert!(matches!(err, RepoError::Unsupported { .. }));
}

#[test]
fn json_file_backend_is_created_fresh_and_refuses_reuse() {
    let dir = TempDir::new().unwrap();
    let config = BackendConfig::JsonFile {
        file_path: dir.path().join("samples.json"),
    };

    let mut repo = open_repository(&config).unwrap();
    assert!(repo
        .insert_sample(Sample::new(3.0, "2021-03-03", SampleResult::True))
        .unwrap());

    // The path is now occupied; selecting the same config again must fail
    // instead of truncating the existing repository.
    let err = open_repository(&config).unwrap_err();
    assert!(matches!(err, RepoError::AlreadyExists(_)));
}
