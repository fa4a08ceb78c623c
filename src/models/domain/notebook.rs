use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::dto::request::{CreateNoteRequest, CreateNotebookRequest};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notebook {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notebook {
    pub fn new(title: &str, description: Option<&str>) -> Self {
        let now = Utc::now();
        Notebook {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_request(request: CreateNotebookRequest) -> Self {
        Notebook::new(&request.title, request.description.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub notebook_id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(notebook_id: &str, title: &str, content: Option<&str>) -> Self {
        let now = Utc::now();
        Note {
            id: uuid::Uuid::new_v4().to_string(),
            notebook_id: notebook_id.to_string(),
            title: title.to_string(),
            content: content.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_request(notebook_id: &str, request: CreateNoteRequest) -> Self {
        Note::new(notebook_id, &request.title, request.content.as_deref())
    }
}
