use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, NOTEBOOKS_COLLECTION},
    errors::AppResult,
    models::domain::Notebook,
};

#[async_trait]
pub trait NotebookRepository: Send + Sync {
    async fn create(&self, notebook: Notebook) -> AppResult<Notebook>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Notebook>>;
    async fn find_all(&self) -> AppResult<Vec<Notebook>>;
}

pub struct MongoNotebookRepository {
    collection: Collection<Notebook>,
}

impl MongoNotebookRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection(NOTEBOOKS_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for notebooks collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for notebooks collection");
        Ok(())
    }
}

#[async_trait]
impl NotebookRepository for MongoNotebookRepository {
    async fn create(&self, notebook: Notebook) -> AppResult<Notebook> {
        self.collection.insert_one(&notebook).await?;
        Ok(notebook)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Notebook>> {
        let notebook = self.collection.find_one(doc! { "id": id }).await?;
        Ok(notebook)
    }

    async fn find_all(&self) -> AppResult<Vec<Notebook>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": 1 })
            .await?;
        let notebooks: Vec<Notebook> = cursor.try_collect().await?;
        Ok(notebooks)
    }
}
