//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `samplestore_core` linkage and
//!   the composition root.
//! - Keep output deterministic for quick local sanity checks.

use samplestore_core::{open_repository, BackendConfig, Sample, SampleRepository, SampleResult};

fn main() {
    println!("samplestore_core ping={}", samplestore_core::ping());
    println!("samplestore_core version={}", samplestore_core::core_version());

    let mut repo = match open_repository(&BackendConfig::Memory) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("samplestore_core backend_select failed: {err}");
            std::process::exit(1);
        }
    };

    let probe = Sample::new(1.0, "1970-01-01", SampleResult::True);
    let inserted = repo.insert_sample(probe).unwrap_or(false);
    let stored = repo.list_all_samples().map(|list| list.len()).unwrap_or(0);
    println!("samplestore_core probe inserted={inserted} stored={stored}");
}
