mod common;

use cactus::domain::collection::Collection;
use cactus::domain::query_options::{
    DeletionFilter, DocumentQuery, FieldFilter, GetOptions, SortDirection, SortField,
};
use cactus::domain::repositories::DocumentStore;
use cactus::infrastructure::persistence::PgDocumentStore;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_set_creates_and_updates(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));

    let created = store
        .set(Collection::TestModels, "doc-1", json!({ "name": "first" }))
        .await
        .unwrap();
    assert_eq!(created.collection, Collection::TestModels);
    assert!(created.deleted_at.is_none());

    let updated = store
        .set(Collection::TestModels, "doc-1", json!({ "name": "second" }))
        .await
        .unwrap();
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let doc = store
        .get(Collection::TestModels, "doc-1", GetOptions::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(doc.data["name"], "second");
}

#[sqlx::test]
async fn test_same_id_in_different_collections(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));

    store
        .set(Collection::TestModels, "shared", json!({ "name": "model" }))
        .await
        .unwrap();

    let other = store
        .get(Collection::DataExports, "shared", GetOptions::default())
        .await
        .unwrap();
    assert!(other.is_none());
}

#[sqlx::test]
async fn test_soft_delete_and_restore(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));
    store
        .set(Collection::DataExports, "e-1", json!({ "memberId": "m1" }))
        .await
        .unwrap();

    assert!(store.soft_delete(Collection::DataExports, "e-1").await.unwrap());
    assert!(!store.soft_delete(Collection::DataExports, "e-1").await.unwrap());

    let hidden = store
        .get(Collection::DataExports, "e-1", GetOptions::default())
        .await
        .unwrap();
    assert!(hidden.is_none());

    let deleted = store
        .get(Collection::DataExports, "e-1", GetOptions::only_deleted())
        .await
        .unwrap()
        .unwrap();
    assert!(deleted.is_deleted());

    assert!(store.restore(Collection::DataExports, "e-1").await.unwrap());
    let restored = store
        .get(Collection::DataExports, "e-1", GetOptions::default())
        .await
        .unwrap();
    assert!(restored.is_some());
}

#[sqlx::test]
async fn test_query_filters_orders_and_limits(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));
    for (id, member, count) in [("a", "m1", 3), ("b", "m1", 10), ("c", "m2", 1), ("d", "m1", 7)] {
        store
            .set(
                Collection::DataExports,
                id,
                json!({ "memberId": member, "downloadCount": count }),
            )
            .await
            .unwrap();
    }
    store.soft_delete(Collection::DataExports, "d").await.unwrap();

    let query = DocumentQuery {
        deletion: DeletionFilter::ExcludeDeleted,
        filters: vec![FieldFilter {
            field: "memberId".to_string(),
            value: json!("m1"),
        }],
        order_by: Some((
            SortField::Data("downloadCount".to_string()),
            SortDirection::Desc,
        )),
        limit: Some(10),
    };
    let docs = store.query(Collection::DataExports, &query).await.unwrap();
    let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);

    let with_deleted = DocumentQuery {
        deletion: DeletionFilter::IncludeDeleted,
        limit: Some(2),
        ..query
    };
    let docs = store
        .query(Collection::DataExports, &with_deleted)
        .await
        .unwrap();
    let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "d"]);
}

#[sqlx::test]
async fn test_query_orders_by_created_at_desc(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));
    for id in ["first", "second", "third"] {
        store
            .set(Collection::DataExports, id, json!({ "memberId": "m1" }))
            .await
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
    }

    let query = DocumentQuery {
        order_by: Some((SortField::CreatedAt, SortDirection::Desc)),
        ..DocumentQuery::default()
    };
    let docs = store.query(Collection::DataExports, &query).await.unwrap();
    let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["third", "second", "first"]);
}

#[sqlx::test]
async fn test_query_missing_sort_field_sorts_as_sql_null(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));
    store
        .set(Collection::TestModels, "missing", json!({ "name": "missing" }))
        .await
        .unwrap();
    store
        .set(Collection::TestModels, "has", json!({ "name": "has", "rank": 1 }))
        .await
        .unwrap();

    let asc = DocumentQuery {
        order_by: Some((SortField::Data("rank".to_string()), SortDirection::Asc)),
        ..DocumentQuery::default()
    };
    let docs = store.query(Collection::TestModels, &asc).await.unwrap();
    let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["has", "missing"]);

    let desc = DocumentQuery {
        order_by: Some((SortField::Data("rank".to_string()), SortDirection::Desc)),
        ..DocumentQuery::default()
    };
    let docs = store.query(Collection::TestModels, &desc).await.unwrap();
    let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["missing", "has"]);
}

#[sqlx::test]
async fn test_hard_delete(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));
    store
        .set(Collection::TestModels, "gone", json!({ "name": "x" }))
        .await
        .unwrap();

    assert!(store.delete(Collection::TestModels, "gone").await.unwrap());
    assert!(!store.delete(Collection::TestModels, "gone").await.unwrap());

    let doc = store
        .get(Collection::TestModels, "gone", GetOptions::include_deleted())
        .await
        .unwrap();
    assert!(doc.is_none());
}

#[sqlx::test]
async fn test_health_check(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));
    assert!(store.health_check().await);
}
