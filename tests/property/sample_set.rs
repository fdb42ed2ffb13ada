use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;
use samplerun::config::RunnerConfig;
use samplerun::fs::mock::MockFileSystem;
use samplerun::run_batch;
use samplerun_test_utils::fake_runner::RecordingRunner;

// Unique entry names, each flagged file (true) or directory (false), in a
// shuffled listing order.
fn entries_strategy() -> impl Strategy<Value = Vec<(String, bool)>> {
    proptest::collection::btree_map("[a-z][a-z0-9_]{0,7}(\\.lox)?", any::<bool>(), 0..16)
        .prop_map(|m| m.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn every_file_is_run_exactly_once_and_dirs_never(entries in entries_strategy()) {
        let fs = MockFileSystem::new();
        fs.add_dir("samples");
        for (name, is_file) in &entries {
            if *is_file {
                fs.add_file(format!("samples/{name}"));
            } else {
                fs.add_dir(format!("samples/{name}"));
            }
        }

        let runner = RecordingRunner::new();
        let calls = runner.calls();
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let mut out = Vec::<u8>::new();
        rt.block_on(run_batch(
            RunnerConfig::new("samples", "./prog"),
            fs,
            runner,
            &mut out,
            &mut std::io::sink(),
        ))
        .unwrap();

        let called: Vec<PathBuf> = calls.lock().unwrap().iter().map(|(_, s)| s.clone()).collect();
        let expected: Vec<PathBuf> = entries
            .iter()
            .filter(|(_, is_file)| *is_file)
            .map(|(name, _)| PathBuf::from("samples").join(name))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // Sorted, no duplicates, exactly the files.
        prop_assert_eq!(called, expected);

        let banners = String::from_utf8(out).unwrap().matches("---------- ").count();
        prop_assert_eq!(banners, entries.iter().filter(|(_, f)| *f).count());
    }
}
