use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use crate::models::{DeleteAck, InsertAck, UpdateAck};
use crate::utils::AppError;

/// One document collection. Filters are equality documents, updates are
/// `$set` documents.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    async fn find_all(&self) -> Result<Vec<Document>, AppError>;

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, AppError>;

    async fn insert_one(&self, document: Document) -> Result<InsertAck, AppError>;

    async fn update_one(
        &self,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> Result<UpdateAck, AppError>;

    async fn delete_one(&self, filter: Document) -> Result<DeleteAck, AppError>;
}

pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, AppError> {
        Ok(self.collection.find_one(filter).await?)
    }

    async fn insert_one(&self, document: Document) -> Result<InsertAck, AppError> {
        Ok(self.collection.insert_one(document).await?.into())
    }

    async fn update_one(
        &self,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> Result<UpdateAck, AppError> {
        let result = self
            .collection
            .update_one(filter, update)
            .upsert(upsert)
            .await?;
        Ok(result.into())
    }

    async fn delete_one(&self, filter: Document) -> Result<DeleteAck, AppError> {
        Ok(self.collection.delete_one(filter).await?.into())
    }
}
