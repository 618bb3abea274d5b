mod common;

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use common::MockStore;
use es_seed_products::catalog::{CATEGORIES, COLORS, DESCRIPTIONS, PRICES, SIZES};
use es_seed_products::seeder::{self, SeedPlan};
use es_seed_products::{FixedClock, IndexSchema, IndexStatus, SeedError, ValuePools};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 5, 20, 10, 0, 0).unwrap())
}

#[tokio::test]
async fn test_empty_store_gets_index_and_hundred_documents() {
    let store = MockStore::new();
    let plan = SeedPlan::default();
    let mut rng = StdRng::seed_from_u64(1);

    let outcome = seeder::run(&store, &plan, &clock(), &mut rng).await.unwrap();

    assert_eq!(outcome.index_status, IndexStatus::Created);
    assert_eq!(outcome.report.total, 100);
    assert_eq!(outcome.report.succeeded, 100);
    assert!(!outcome.report.has_failures());

    {
        let calls = store.calls.lock().await;
        assert_eq!(calls.create, 1);
        assert_eq!(calls.bulk, 1);
    }

    let indices = store.indices.lock().await;
    let index = indices.get("products").unwrap();
    assert_eq!(index.body, IndexSchema::products().to_create_body());
    assert_eq!(index.documents.len(), 100);
    drop(indices);

    let ids: HashSet<String> = store.product_ids("products").await.into_iter().collect();
    let expected: HashSet<String> = (1..=100).map(|i| format!("P{:03}", i)).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_documents_respect_value_pools() {
    let store = MockStore::new();
    let mut rng = StdRng::seed_from_u64(99);
    seeder::run(&store, &SeedPlan::default(), &clock(), &mut rng)
        .await
        .unwrap();

    let indices = store.indices.lock().await;
    for doc in &indices["products"].documents {
        assert!(CATEGORIES.contains(&doc["category"].as_str().unwrap()));
        assert!(COLORS.contains(&doc["color"].as_str().unwrap()));
        assert!(SIZES.contains(&doc["size"].as_str().unwrap()));
        assert!(PRICES.contains(&doc["price"].as_f64().unwrap()));
        assert!(DESCRIPTIONS.contains(&doc["description"].as_str().unwrap()));
        assert!(doc["stock"].is_boolean());
        assert_eq!(doc["insert_time"], "2024-05-20T10:00:00Z");
    }
}

#[tokio::test]
async fn test_second_run_skips_creation_and_appends() {
    let store = MockStore::new();
    let plan = SeedPlan::default();
    let mut rng = StdRng::seed_from_u64(2);

    let first = seeder::run(&store, &plan, &clock(), &mut rng).await.unwrap();
    let second = seeder::run(&store, &plan, &clock(), &mut rng).await.unwrap();

    assert_eq!(first.index_status, IndexStatus::Created);
    assert_eq!(second.index_status, IndexStatus::AlreadyExists);
    assert_eq!(store.calls.lock().await.create, 1);

    // Ids repeat across runs; nothing is deduplicated or overwritten.
    assert_eq!(store.document_count("products").await, 200);
    let ids = store.product_ids("products").await;
    assert_eq!(ids.iter().filter(|id| *id == "P001").count(), 2);

    seeder::run(&store, &plan, &clock(), &mut rng).await.unwrap();
    assert_eq!(store.document_count("products").await, 300);
}

#[tokio::test]
async fn test_unreachable_store_aborts_before_any_write() {
    let store = MockStore::unreachable();
    let mut rng = StdRng::seed_from_u64(3);

    let err = seeder::run(&store, &SeedPlan::default(), &clock(), &mut rng)
        .await
        .unwrap_err();

    assert!(matches!(err, SeedError::ConnectionError(_)));
    let calls = store.calls.lock().await;
    assert_eq!(calls.exists, 1);
    assert_eq!(calls.create, 0);
    assert_eq!(calls.bulk, 0);
}

#[tokio::test]
async fn test_item_rejections_are_reported() {
    let store = MockStore::rejecting(&["P002", "P050"]);
    let mut rng = StdRng::seed_from_u64(4);

    let outcome = seeder::run(&store, &SeedPlan::default(), &clock(), &mut rng)
        .await
        .unwrap();

    assert_eq!(outcome.report.failed, 2);
    assert_eq!(outcome.report.succeeded, 98);
    let failed: Vec<&str> = outcome
        .report
        .failures()
        .map(|item| item.product_id.as_str())
        .collect();
    assert_eq!(failed, vec!["P002", "P050"]);
    assert_eq!(store.document_count("products").await, 98);
}

#[tokio::test]
async fn test_strict_mode_fails_on_item_rejections() {
    let store = MockStore::rejecting(&["P010"]);
    let plan = SeedPlan {
        strict: true,
        ..SeedPlan::default()
    };
    let mut rng = StdRng::seed_from_u64(5);

    let err = seeder::run(&store, &plan, &clock(), &mut rng)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SeedError::PartialBulkFailure {
            failed: 1,
            total: 100
        }
    ));
}

#[tokio::test]
async fn test_custom_plan() {
    let store = MockStore::new();
    let plan = SeedPlan {
        index_name: "catalog".to_string(),
        document_count: 7,
        pools: ValuePools::new(&["bag"], &["red"], &["S"], &[16.0], &["cheap"]).unwrap(),
        ..SeedPlan::default()
    };
    let mut rng = StdRng::seed_from_u64(6);

    let outcome = seeder::run(&store, &plan, &clock(), &mut rng).await.unwrap();

    assert_eq!(outcome.report.index, "catalog");
    assert_eq!(outcome.report.total, 7);
    assert_eq!(store.document_count("products").await, 0);
    let indices = store.indices.lock().await;
    for doc in &indices["catalog"].documents {
        assert_eq!(doc["category"], "bag");
        assert_eq!(doc["price"], 16.0);
    }
}

#[tokio::test]
async fn test_zero_count_rejected_before_store_call() {
    let store = MockStore::new();
    let plan = SeedPlan {
        document_count: 0,
        ..SeedPlan::default()
    };
    let mut rng = StdRng::seed_from_u64(7);

    let err = seeder::run(&store, &plan, &clock(), &mut rng)
        .await
        .unwrap_err();

    assert!(matches!(err, SeedError::ValidationError(_)));
    assert_eq!(store.calls.lock().await.exists, 0);
}

#[tokio::test]
async fn test_created_index_is_known_before_bulk_failure() {
    let store = MockStore::failing_bulk();
    let plan = SeedPlan::default();
    let mut rng = StdRng::seed_from_u64(9);

    let status = seeder::provision(&store, &plan).await.unwrap();
    assert_eq!(status, IndexStatus::Created);

    let err = seeder::load(&store, &plan, &clock(), &mut rng)
        .await
        .unwrap_err();
    assert!(matches!(err, SeedError::BulkWriteError(_)));

    // The created index is not rolled back.
    assert!(store.indices.lock().await.contains_key("products"));
    assert_eq!(store.document_count("products").await, 0);
    let calls = store.calls.lock().await;
    assert_eq!((calls.exists, calls.create, calls.bulk), (1, 1, 1));
}

#[tokio::test]
async fn test_lenient_report_passes_strict_check_fails() {
    let store = MockStore::rejecting(&["P003"]);
    let mut rng = StdRng::seed_from_u64(10);
    let plan = SeedPlan {
        document_count: 5,
        ..SeedPlan::default()
    };

    seeder::provision(&store, &plan).await.unwrap();
    let report = seeder::load(&store, &plan, &clock(), &mut rng).await.unwrap();

    assert!(seeder::check_report(&plan, &report).is_ok());
    let strict = SeedPlan {
        strict: true,
        ..plan
    };
    assert!(matches!(
        seeder::check_report(&strict, &report),
        Err(SeedError::PartialBulkFailure {
            failed: 1,
            total: 5
        })
    ));
}
