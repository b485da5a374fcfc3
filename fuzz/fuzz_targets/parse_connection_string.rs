#![no_main]

use libfuzzer_sys::fuzz_target;
use testdb_dialect::ConnectionString;

fuzz_target!(|data: &[u8]| {
    // Fuzz connection string parsing and the database rewrite
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(cs) = s.parse::<ConnectionString>() {
            let rewritten = cs.with_database("FuzzDb");
            assert_eq!(rewritten.database(), Some("FuzzDb"));
            // Rewriting again must not change the serialized form
            assert_eq!(rewritten.with_database("FuzzDb").to_string(), rewritten.to_string());
        }
    }
});
