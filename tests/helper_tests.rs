//! # Helper Integration Tests
//!
//! Exercises the helpers the way a host project combines them:
//! - digest over merged configuration
//! - deep-path reads of parsed manifest-ish data
//! - throttle + after + once gates driving side effects
//! - nodify bridging async work into callbacks

use serde_json::json;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sundry::{
    chunked, content_digest, deep_get_or_null, deep_merge, load_manifest, nodify, try_parse,
    After, OnceCall, Throttle,
};

// ============================================================================
// DIGEST + MERGE + DEEP-GET PIPELINE
// ============================================================================

#[test]
fn merged_config_digests_deterministically() {
    let defaults = json!({"server": {"port": 8080, "workers": 4}});
    let overrides = json!({"server": {"port": 9090}, "debug": true});

    let merged = deep_merge(defaults.clone(), overrides.clone());
    assert_eq!(deep_get_or_null(&merged, "server.port"), json!(9090));
    assert_eq!(deep_get_or_null(&merged, "server.workers"), json!(4));
    assert_eq!(deep_get_or_null(&merged, "server.tls"), json!(null));

    // Same inputs, same digest
    let again = deep_merge(defaults, overrides);
    assert_eq!(
        content_digest(&merged).unwrap(),
        content_digest(&again).unwrap()
    );
}

#[test]
fn parsed_text_feeds_deep_get() {
    let parsed = try_parse(r#"{"items": [{"id": 1}, {"id": 2}]}"#);
    assert_eq!(deep_get_or_null(&parsed, "items.1.id"), json!(2));

    // Unparseable text stays text; deep-get on it is absent, not a panic
    let raw = try_parse("definitely: not json");
    assert_eq!(deep_get_or_null(&raw, "items.1.id"), json!(null));
}

#[test]
fn chunked_batches_preserve_digest_content() {
    let ids: Vec<u32> = (0..10).collect();
    let batches = chunked(&ids, 3);

    assert_eq!(batches.len(), 4);
    let rejoined: Vec<u32> = batches.into_iter().flatten().collect();
    assert_eq!(
        content_digest(&rejoined).unwrap(),
        content_digest(&ids).unwrap()
    );
}

// ============================================================================
// CALL GATES
// ============================================================================

#[test]
fn gates_compose_for_batched_completion() {
    let completions = Arc::new(AtomicU32::new(0));

    let after = {
        let completions = Arc::clone(&completions);
        After::new(3, move || {
            completions.fetch_add(1, Ordering::SeqCst);
        })
    };
    let once = OnceCall::new();

    for _ in 0..5 {
        after.tick();
        let _ = once.call(|| ());
    }

    assert_eq!(completions.load(Ordering::SeqCst), 1);
    assert!(once.has_fired());
}

#[test]
fn throttle_limits_burst_side_effects() {
    let throttle = Throttle::new(Duration::from_millis(30));
    let effects = AtomicU32::new(0);

    for _ in 0..10 {
        let _ = throttle.call(|| effects.fetch_add(1, Ordering::SeqCst));
    }
    assert_eq!(effects.load(Ordering::SeqCst), 1);

    std::thread::sleep(Duration::from_millis(50));
    let _ = throttle.call(|| effects.fetch_add(1, Ordering::SeqCst));
    assert_eq!(effects.load(Ordering::SeqCst), 2);
}

// ============================================================================
// MANIFEST DISCOVERY
// ============================================================================

#[test]
fn manifest_discovery_from_nested_project_dir() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("Cargo.toml"),
        "[package]\nname = \"host-project\"\nversion = \"1.2.3\"\n",
    )
    .unwrap();
    let src = tmp.path().join("src");
    std::fs::create_dir(&src).unwrap();

    let manifest = load_manifest(Some(&src)).unwrap().unwrap();
    let package = manifest.package.unwrap();
    assert_eq!(package.name, "host-project");
    assert_eq!(package.version.as_deref(), Some("1.2.3"));
}

// ============================================================================
// ASYNC BRIDGE
// ============================================================================

#[tokio::test]
async fn nodify_bridges_into_callback_and_stays_chainable() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let chained = nodify(
        async { Ok::<_, String>(json!({"status": "done"})) },
        Some(move |settled: Result<serde_json::Value, String>| {
            tx.send(settled).unwrap();
        }),
    )
    .await
    .map(|value| deep_get_or_null(&value, "status"));

    assert_eq!(chained, Ok(json!("done")));
    assert_eq!(rx.recv().await.unwrap(), Ok(json!({"status": "done"})));
}
