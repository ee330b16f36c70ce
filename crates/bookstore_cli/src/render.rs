//! Terminal views for books.

use bookstore_core::Book;
use std::fmt::Write;

pub fn render_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books.\n".to_string();
    }

    let title_width = column_width(books.iter().map(|book| book.title.as_str()), "TITLE");
    let author_width = column_width(books.iter().map(|book| book.author.as_str()), "AUTHOR");

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6}  {:<title_width$}  {:<author_width$}  {:>10}",
        "ID", "TITLE", "AUTHOR", "PRICE"
    );
    for book in books {
        let _ = writeln!(
            out,
            "{:>6}  {:<title_width$}  {:<author_width$}  {:>10.2}",
            book.id, book.title, book.author, book.price
        );
    }
    out
}

pub fn render_detail(book: &Book) -> String {
    format!(
        "ID:     {}\nTitle:  {}\nAuthor: {}\nPrice:  {:.2}\n",
        book.id, book.title, book.author, book.price
    )
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|value| value.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{render_detail, render_list};
    use bookstore_core::Book;

    #[test]
    fn empty_list_has_placeholder() {
        assert_eq!(render_list(&[]), "No books.\n");
    }

    #[test]
    fn list_aligns_columns() {
        let output = render_list(&[
            Book::with_id(1, "Dune", "Herbert", 9.99),
            Book::with_id(12, "Emma", "Austen", 4.5),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("TITLE"));
        assert!(lines[1].ends_with("9.99"));
        assert!(lines[2].ends_with("4.50"));
        assert_eq!(lines[1].len(), lines[2].len());
    }

    #[test]
    fn detail_shows_every_field() {
        let output = render_detail(&Book::with_id(3, "Dune", "Herbert", 9.99));
        assert!(output.contains("ID:     3"));
        assert!(output.contains("Author: Herbert"));
        assert!(output.contains("Price:  9.99"));
    }
}
