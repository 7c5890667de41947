//! Community forum model matching the frontend ForumPost interface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForumCategory {
    Advice,
    ScamAlert,
    #[default]
    General,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: String,
    pub author_name: String,
    pub title: String,
    pub content: String,
    pub category: ForumCategory,
    pub likes: u32,
    pub comments: u32,
    pub date: String,
}

/// Request body for asking the community a question.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ForumPostDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ForumCategory>,
}

impl ForumPostDraft {
    pub fn into_post(self, id: String, date: String) -> ForumPost {
        ForumPost {
            id,
            author_name: self.author_name.unwrap_or_else(|| "You".to_string()),
            title: self.title,
            content: self.content,
            category: self.category.unwrap_or_default(),
            likes: 0,
            comments: 0,
            date,
        }
    }
}
