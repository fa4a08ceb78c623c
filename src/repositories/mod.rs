pub mod note_repository;
pub mod notebook_repository;

pub use note_repository::{MongoNoteRepository, NoteRepository};
pub use notebook_repository::{MongoNotebookRepository, NotebookRepository};
