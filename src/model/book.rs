use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,

    /// IDs of books by this author. Not checked against the catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub books: Vec<i32>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Vec::new(),
        }
    }

    pub fn with_books(mut self, books: Vec<i32>) -> Self {
        self.books = books;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub content: String,
}

impl Description {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,

    #[serde(default)]
    pub author: Author,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<Description>,
}

impl Book {
    /// A book with no author details and no descriptions, which is what
    /// `createBook` and the SQLite backing produce.
    pub fn new(id: i32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: Author::default(),
            descriptions: Vec::new(),
        }
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    pub fn with_description(mut self, content: impl Into<String>) -> Self {
        self.descriptions.push(Description::new(content));
        self
    }
}
