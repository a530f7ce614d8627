use crate::model;
use async_graphql::SimpleObject;

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Description {
    pub content: String,
}

impl From<model::Description> for Description {
    fn from(d: model::Description) -> Self {
        Self { content: d.content }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    /// IDs of books attributed to this author
    pub books: Vec<i32>,
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            name: a.name,
            books: a.books,
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: Author,
    pub descriptions: Vec<Description>,
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author.into(),
            descriptions: b.descriptions.into_iter().map(Into::into).collect(),
        }
    }
}
