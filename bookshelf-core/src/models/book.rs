use serde::{Deserialize, Serialize};

use super::validation::{FieldKind, FieldRule, Validate};

pub type BookId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBookInput {
    pub title: String,
    pub author: String,
    pub genre: Vec<String>,
}

/// Partial update. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<Vec<String>>,
}

impl UpdateBookInput {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.genre.is_none()
    }

    /// Overwrites the fields of `book` that this input supplies.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(genre) = &self.genre {
            book.genre = genre.clone();
        }
    }
}

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 30;
pub const AUTHOR_MIN_LEN: usize = 3;
pub const AUTHOR_MAX_LEN: usize = 25;

impl Validate for AddBookInput {
    const SCHEMA: &'static [FieldRule] = &[
        FieldRule::required("title", FieldKind::Text)
            .min_len(TITLE_MIN_LEN)
            .max_len(TITLE_MAX_LEN),
        FieldRule::required("author", FieldKind::Text)
            .min_len(AUTHOR_MIN_LEN)
            .max_len(AUTHOR_MAX_LEN),
        FieldRule::required("genre", FieldKind::TextList).non_empty(),
    ];
}

impl Validate for UpdateBookInput {
    const SCHEMA: &'static [FieldRule] = &[
        FieldRule::optional("title", FieldKind::Text)
            .min_len(TITLE_MIN_LEN)
            .max_len(TITLE_MAX_LEN),
        FieldRule::optional("author", FieldKind::Text)
            .min_len(AUTHOR_MIN_LEN)
            .max_len(AUTHOR_MAX_LEN),
        FieldRule::optional("genre", FieldKind::TextList).non_empty(),
    ];
}
