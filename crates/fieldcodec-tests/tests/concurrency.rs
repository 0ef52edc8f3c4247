//! Concurrency Tests
//!
//! Tests verify:
//! - Concurrent first lookups of the same field agree
//! - Lookups interleaved with register/unregister keep cached assignments
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fieldcodec-tests --test concurrency
//! ```

use fieldcodec_core::{create_rng, names, FormatRegistry, RandomCodecProvider};
use fieldcodec_tests::fixtures::{field_names, stub};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_provider_is_send_sync() {
    assert_send_sync::<RandomCodecProvider>();
}

#[test]
fn test_concurrent_first_lookups_agree() {
    let provider = Arc::new(RandomCodecProvider::new(&mut create_rng(31), false).unwrap());
    let reference = RandomCodecProvider::new(&mut create_rng(31), false).unwrap();
    let fields = field_names(300);

    let results: Vec<BTreeMap<String, String>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let provider = Arc::clone(&provider);
                let fields = &fields;
                scope.spawn(move || {
                    let mut seen = BTreeMap::new();
                    // Each thread walks the fields starting at a different offset.
                    for i in 0..fields.len() {
                        let field = &fields[(i + t * 37) % fields.len()];
                        seen.insert(field.clone(), provider.field_codec(field).unwrap());
                    }
                    seen
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for seen in &results {
        assert_eq!(seen, &results[0]);
    }
    for (field, codec) in &results[0] {
        assert_eq!(&reference.field_codec(field).unwrap(), codec);
    }
    assert_eq!(provider.mappings(), results[0]);
}

#[test]
fn test_mutation_during_lookup_keeps_cache() {
    let provider = Arc::new(RandomCodecProvider::new(&mut create_rng(32), false).unwrap());
    let warm = field_names(100);
    let expected: BTreeMap<String, String> = warm
        .iter()
        .map(|f| (f.clone(), provider.field_codec(f).unwrap()))
        .collect();

    thread::scope(|scope| {
        let mutator = Arc::clone(&provider);
        scope.spawn(move || {
            for i in 0..50 {
                let name: &'static str = if i % 2 == 0 { "ExtraA" } else { "ExtraB" };
                mutator.register(stub(name)).unwrap();
                let handle = mutator.registry().lookup(name).unwrap();
                mutator.unregister(&*handle).unwrap();
            }
            let memory = mutator.registry().lookup(names::MEMORY).unwrap();
            mutator.unregister(&*memory).unwrap();
        });

        for _ in 0..4 {
            let reader = Arc::clone(&provider);
            let warm = &warm;
            let expected = &expected;
            scope.spawn(move || {
                for round in 0..20 {
                    for field in warm {
                        assert_eq!(&reader.field_codec(field).unwrap(), &expected[field]);
                    }
                    reader
                        .field_codec(&format!("cold{}", round))
                        .unwrap();
                }
            });
        }
    });

    let pool = provider.pool_names();
    assert!(!pool.iter().any(|n| n == "Memory" || n.starts_with("Extra")));
    for (field, codec) in &expected {
        assert_eq!(&provider.field_codec(field).unwrap(), codec);
    }
}
