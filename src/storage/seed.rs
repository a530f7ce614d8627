use crate::model::{Author, Book};

pub const SEED_AUTHOR: &str = "Alex Edwards";

/// The three books every seeded catalog starts with.
pub fn seed_books() -> Vec<Book> {
    let author = Author::new(SEED_AUTHOR).with_books(vec![1, 2]);
    vec![
        Book::new(1, "Let's Go!")
            .with_author(author.clone())
            .with_description("it's a good book."),
        Book::new(2, "Let's Go Further!")
            .with_author(author.clone())
            .with_description("it's a good book too."),
        Book::new(3, "Let's Go Further2!")
            .with_author(author)
            .with_description("it's a good book too2."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<i32> = seed_books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_seed_shares_author_by_value() {
        let books = seed_books();
        assert!(books.iter().all(|b| b.author.name == SEED_AUTHOR));
        assert!(books.iter().all(|b| b.author.books == vec![1, 2]));
        assert_eq!(books[2].descriptions[0].content, "it's a good book too2.");
    }
}
