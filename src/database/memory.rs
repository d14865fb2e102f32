//! In-memory `DocumentStore` used by the handler tests.
//!
//! Matches the driver's acknowledgment semantics: generated ObjectIds on
//! insert, zero counts when nothing matches, and upserts that build the new
//! document from the filter's fields plus the `$set` fields.

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::store::DocumentStore;
use crate::models::{bson_to_json, DeleteAck, InsertAck, UpdateAck};
use crate::utils::AppError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<Document>>,
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key).unwrap_or(&Bson::Null) == value)
}

fn with_id(document: Document) -> (Bson, Document) {
    if let Some(id) = document.get("_id") {
        return (id.clone(), document);
    }
    let id = Bson::ObjectId(ObjectId::new());
    let mut stored = Document::new();
    stored.insert("_id", id.clone());
    stored.extend(document);
    (id, stored)
}

fn set_fields(update: &Document) -> Result<&Document, AppError> {
    update
        .get_document("$set")
        .map_err(|e| AppError::InvalidDocument(format!("update without $set: {}", e)))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, AppError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| matches(d, &filter)).cloned())
    }

    async fn insert_one(&self, document: Document) -> Result<InsertAck, AppError> {
        let (id, stored) = with_id(document);
        let mut documents = self.documents.write().await;
        if documents.iter().any(|d| d.get("_id") == Some(&id)) {
            return Err(AppError::DatabaseError("E11000 duplicate key error".to_string()));
        }
        documents.push(stored);
        Ok(InsertAck {
            acknowledged: true,
            inserted_id: bson_to_json(id),
        })
    }

    async fn update_one(
        &self,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> Result<UpdateAck, AppError> {
        let fields = set_fields(&update)?;
        let mut documents = self.documents.write().await;

        if let Some(document) = documents.iter_mut().find(|d| matches(d, &filter)) {
            let modified = fields
                .iter()
                .any(|(key, value)| document.get(key) != Some(value));
            for (key, value) in fields {
                document.insert(key.clone(), value.clone());
            }
            return Ok(UpdateAck {
                acknowledged: true,
                modified_count: u64::from(modified),
                upserted_id: None,
                upserted_count: 0,
                matched_count: 1,
            });
        }

        if !upsert {
            return Ok(UpdateAck {
                acknowledged: true,
                modified_count: 0,
                upserted_id: None,
                upserted_count: 0,
                matched_count: 0,
            });
        }

        let mut seed = filter;
        seed.extend(fields.clone());
        let (id, stored) = with_id(seed);
        documents.push(stored);
        Ok(UpdateAck {
            acknowledged: true,
            modified_count: 0,
            upserted_id: Some(bson_to_json(id)),
            upserted_count: 1,
            matched_count: 0,
        })
    }

    async fn delete_one(&self, filter: Document) -> Result<DeleteAck, AppError> {
        let mut documents = self.documents.write().await;
        let deleted_count = match documents.iter().position(|d| matches(d, &filter)) {
            Some(index) => {
                documents.remove(index);
                1
            }
            None => 0,
        };
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count,
        })
    }
}

/// Every call fails as if the database were unreachable.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    fn unreachable() -> AppError {
        AppError::DatabaseError("server selection timeout: no available servers".to_string())
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Err(Self::unreachable())
    }

    async fn find_one(&self, _filter: Document) -> Result<Option<Document>, AppError> {
        Err(Self::unreachable())
    }

    async fn insert_one(&self, _document: Document) -> Result<InsertAck, AppError> {
        Err(Self::unreachable())
    }

    async fn update_one(
        &self,
        _filter: Document,
        _update: Document,
        _upsert: bool,
    ) -> Result<UpdateAck, AppError> {
        Err(Self::unreachable())
    }

    async fn delete_one(&self, _filter: Document) -> Result<DeleteAck, AppError> {
        Err(Self::unreachable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_update_without_match_reports_zero_counts() {
        let store = MemoryStore::default();
        store
            .insert_one(doc! { "email": "ana@example.com" })
            .await
            .unwrap();

        let ack = store
            .update_one(
                doc! { "email": "bob@example.com" },
                doc! { "$set": { "lastLoginAt": "now" } },
                false,
            )
            .await
            .unwrap();

        assert_eq!(ack.matched_count, 0);
        assert_eq!(ack.modified_count, 0);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_same_value_update_matches_without_modifying() {
        let store = MemoryStore::default();
        store
            .insert_one(doc! { "email": "ana@example.com", "lastLoginAt": "t1" })
            .await
            .unwrap();

        let ack = store
            .update_one(
                doc! { "email": "ana@example.com" },
                doc! { "$set": { "lastLoginAt": "t1" } },
                false,
            )
            .await
            .unwrap();

        assert_eq!(ack.matched_count, 1);
        assert_eq!(ack.modified_count, 0);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let store = MemoryStore::default();
        let oid = ObjectId::new();
        store.insert_one(doc! { "_id": oid }).await.unwrap();

        let err = store.insert_one(doc! { "_id": oid }).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
