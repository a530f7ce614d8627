use std::future::Future;

use anyhow::Result;
use colored::Colorize;

use crate::model::Book;

/// Drive an engine future to completion on a single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

pub fn print_book(book: &Book) {
    println!("{} {}", format!("#{}", book.id).cyan().bold(), book.title.bold());
    if !book.author.name.is_empty() {
        println!("Author:   {}", book.author.name.blue());
    }
    if !book.author.books.is_empty() {
        let ids: Vec<String> = book.author.books.iter().map(|id| id.to_string()).collect();
        println!("Books:    {}", ids.join(", ").cyan());
    }
    for description in &book.descriptions {
        println!("\n{}", description.content);
    }
}

pub fn print_book_list(books: &[Book]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    for book in books {
        let author = if book.author.name.is_empty() {
            "unknown author".dimmed()
        } else {
            book.author.name.as_str().blue()
        };
        println!("{} {} [{}]", format!("#{}", book.id).cyan(), book.title, author);
    }
}
