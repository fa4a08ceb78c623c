use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{Database, NOTES_COLLECTION},
    errors::AppResult,
    models::domain::Note,
};

#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn create(&self, note: Note) -> AppResult<Note>;
    async fn find_by_notebook_id(&self, notebook_id: &str) -> AppResult<Vec<Note>>;
}

pub struct MongoNoteRepository {
    collection: Collection<Note>,
}

impl MongoNoteRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection(NOTES_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for notes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        let notebook_index = IndexModel::builder()
            .keys(doc! { "notebookId": 1 })
            .options(
                IndexOptions::builder()
                    .name("notebook_id".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(notebook_index).await?;

        log::info!("Successfully created indexes for notes collection");
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for MongoNoteRepository {
    async fn create(&self, note: Note) -> AppResult<Note> {
        self.collection.insert_one(&note).await?;
        Ok(note)
    }

    async fn find_by_notebook_id(&self, notebook_id: &str) -> AppResult<Vec<Note>> {
        let cursor = self
            .collection
            .find(doc! { "notebookId": notebook_id })
            .sort(doc! { "createdAt": 1 })
            .await?;
        let notes: Vec<Note> = cursor.try_collect().await?;
        Ok(notes)
    }
}
