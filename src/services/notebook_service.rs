use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Note, Notebook},
        dto::request::{CreateNoteRequest, CreateNotebookRequest},
    },
    repositories::{NoteRepository, NotebookRepository},
};

pub struct NotebookService {
    notebooks: Arc<dyn NotebookRepository>,
    notes: Arc<dyn NoteRepository>,
}

impl NotebookService {
    pub fn new(notebooks: Arc<dyn NotebookRepository>, notes: Arc<dyn NoteRepository>) -> Self {
        Self { notebooks, notes }
    }

    pub async fn list_notebooks(&self) -> AppResult<Vec<Notebook>> {
        self.notebooks.find_all().await
    }

    pub async fn create_notebook(&self, request: CreateNotebookRequest) -> AppResult<Notebook> {
        request.validate()?;
        let notebook = self.notebooks.create(Notebook::from_request(request)).await?;
        log::info!("Created notebook {}", notebook.id);
        Ok(notebook)
    }

    pub async fn get_notebook(&self, id: &str) -> AppResult<Notebook> {
        self.notebooks
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notebook with id '{}' not found", id)))
    }

    pub async fn list_notes(&self, notebook_id: &str) -> AppResult<Vec<Note>> {
        self.get_notebook(notebook_id).await?;
        self.notes.find_by_notebook_id(notebook_id).await
    }

    pub async fn create_note(&self, notebook_id: &str, request: CreateNoteRequest) -> AppResult<Note> {
        request.validate()?;
        self.get_notebook(notebook_id).await?;

        let note = self.notes.create(Note::from_request(notebook_id, request)).await?;
        log::info!("Created note {} in notebook {}", note.id, notebook_id);
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{InMemoryNoteRepository, InMemoryNotebookRepository};

    fn service() -> NotebookService {
        NotebookService::new(
            Arc::new(InMemoryNotebookRepository::default()),
            Arc::new(InMemoryNoteRepository::default()),
        )
    }

    #[actix_web::test]
    async fn test_create_and_get_notebook() {
        let service = service();
        let created = service
            .create_notebook(CreateNotebookRequest {
                title: "Physics".to_string(),
                description: Some("Mechanics".to_string()),
            })
            .await
            .unwrap();

        let fetched = service.get_notebook(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(service.list_notebooks().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_missing_notebook_is_not_found() {
        let result = service().get_notebook("nope").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_note_requires_existing_notebook() {
        let result = service()
            .create_note(
                "nope",
                CreateNoteRequest {
                    title: "Orphan".to_string(),
                    content: None,
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_notes_are_scoped_to_notebook() {
        let service = service();
        let physics = service
            .create_notebook(CreateNotebookRequest {
                title: "Physics".to_string(),
                description: None,
            })
            .await
            .unwrap();
        let math = service
            .create_notebook(CreateNotebookRequest {
                title: "Math".to_string(),
                description: None,
            })
            .await
            .unwrap();

        service
            .create_note(
                &physics.id,
                CreateNoteRequest {
                    title: "Newton".to_string(),
                    content: Some("F = ma".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(service.list_notes(&physics.id).await.unwrap().len(), 1);
        assert!(service.list_notes(&math.id).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_invalid_title_is_rejected() {
        let result = service()
            .create_notebook(CreateNotebookRequest {
                title: String::new(),
                description: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
