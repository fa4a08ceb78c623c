#[cfg(test)]
pub mod fixtures {
    use std::{collections::HashMap, sync::Arc};

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use crate::{
        errors::{AppError, AppResult},
        models::domain::{Note, Notebook},
        repositories::{NoteRepository, NotebookRepository},
    };

    /// Creates a standard test notebook
    pub fn test_notebook() -> Notebook {
        Notebook::new("Biology", Some("Cells, genetics and evolution"))
    }

    /// Creates a study text long enough to be realistic but under every context ceiling
    pub fn study_text() -> String {
        "Photosynthesis converts light energy into chemical energy. ".repeat(20)
    }

    #[derive(Default)]
    pub struct InMemoryNotebookRepository {
        notebooks: Arc<RwLock<HashMap<String, Notebook>>>,
    }

    #[async_trait]
    impl NotebookRepository for InMemoryNotebookRepository {
        async fn create(&self, notebook: Notebook) -> AppResult<Notebook> {
            let mut notebooks = self.notebooks.write().await;
            if notebooks.contains_key(&notebook.id) {
                return Err(AppError::DatabaseError(format!(
                    "Notebook with id '{}' already exists",
                    notebook.id
                )));
            }
            notebooks.insert(notebook.id.clone(), notebook.clone());
            Ok(notebook)
        }

        async fn find_by_id(&self, id: &str) -> AppResult<Option<Notebook>> {
            Ok(self.notebooks.read().await.get(id).cloned())
        }

        async fn find_all(&self) -> AppResult<Vec<Notebook>> {
            let mut items: Vec<_> = self.notebooks.read().await.values().cloned().collect();
            items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            Ok(items)
        }
    }

    #[derive(Default)]
    pub struct InMemoryNoteRepository {
        notes: Arc<RwLock<Vec<Note>>>,
    }

    #[async_trait]
    impl NoteRepository for InMemoryNoteRepository {
        async fn create(&self, note: Note) -> AppResult<Note> {
            self.notes.write().await.push(note.clone());
            Ok(note)
        }

        async fn find_by_notebook_id(&self, notebook_id: &str) -> AppResult<Vec<Note>> {
            Ok(self
                .notes
                .read()
                .await
                .iter()
                .filter(|n| n.notebook_id == notebook_id)
                .cloned()
                .collect())
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::repositories::NotebookRepository;

    #[test]
    fn test_fixtures_test_notebook() {
        let notebook = test_notebook();
        assert_eq!(notebook.title, "Biology");
        assert!(notebook.description.is_some());
    }

    #[test]
    fn test_study_text_fits_under_ceilings() {
        assert!(study_text().chars().count() < crate::services::prompt_context::STORYBOARD_CONTEXT_LIMIT);
    }

    #[actix_web::test]
    async fn test_in_memory_notebook_repository_rejects_duplicates() {
        let repo = InMemoryNotebookRepository::default();
        let notebook = test_notebook();

        repo.create(notebook.clone()).await.unwrap();
        assert!(repo.create(notebook).await.is_err());
    }
}
