#![no_main]

use libfuzzer_sys::fuzz_target;
use testdb_dialect::Engine;

fuzz_target!(|data: &[u8]| {
    // Fuzz every engine's batch splitter
    if let Ok(s) = std::str::from_utf8(data) {
        for engine in Engine::ALL {
            if let Ok(batches) = engine.dialect().split_batches(s, "FuzzDb") {
                // Splitting never yields blank batches
                assert!(batches.iter().all(|b| !b.trim().is_empty()));
            }
        }
    }
});
