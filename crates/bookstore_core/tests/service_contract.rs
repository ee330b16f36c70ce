//! Scenarios every `BookService` backend must satisfy.

use bookstore_core::db::open_db_in_memory;
use bookstore_core::{
    Book, BookService, DbBookService, MemoryBookService, SqliteBookRepository,
};

fn backends() -> Vec<(&'static str, Box<dyn BookService>)> {
    vec![
        ("memory", Box::new(MemoryBookService::new())),
        (
            "sqlite",
            Box::new(DbBookService::new(SqliteBookRepository::new(
                open_db_in_memory().unwrap(),
            ))),
        ),
    ]
}

#[tokio::test]
async fn dune_lifecycle() {
    for (name, service) in backends() {
        let stored = service
            .add(Book::new("Dune", "Herbert", 9.99))
            .await
            .unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed, [stored.clone()], "{name}");
        assert!(listed[0].same_fields(&Book::new("Dune", "Herbert", 9.99)), "{name}");

        service
            .update(Book::with_id(stored.id, "Dune: New Edition", "Herbert", 9.99))
            .await
            .unwrap();
        let updated = service.get(stored.id).await.unwrap().unwrap();
        assert_eq!(updated.id, stored.id, "{name}");
        assert_eq!(updated.title, "Dune: New Edition", "{name}");

        service.delete(stored.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty(), "{name}");
    }
}

#[tokio::test]
async fn add_grows_list_by_exactly_one_matching_record() {
    for (name, service) in backends() {
        service.add(Book::new("Emma", "Austen", 4.5)).await.unwrap();
        let before = service.list().await.unwrap();

        let input = Book::new("Ulysses", "Joyce", 12.0);
        let stored = service.add(input.clone()).await.unwrap();

        let after = service.list().await.unwrap();
        assert_eq!(after.len(), before.len() + 1, "{name}");
        let fetched = service.get(stored.id).await.unwrap().unwrap();
        assert!(fetched.same_fields(&input), "{name}");
        assert_eq!(
            after.iter().filter(|book| book.same_fields(&input)).count(),
            1,
            "{name}"
        );
    }
}

#[tokio::test]
async fn update_replaces_every_mutable_field() {
    for (name, service) in backends() {
        let stored = service
            .add(Book::new("Draft", "Someone", 1.0))
            .await
            .unwrap();

        let mut replacement = Book::new("Final", "Someone Else", 2.5);
        replacement.id = stored.id;
        service.update(replacement).await.unwrap();

        let loaded = service.get(stored.id).await.unwrap().unwrap();
        assert_eq!(
            loaded,
            Book::with_id(stored.id, "Final", "Someone Else", 2.5),
            "{name}"
        );
    }
}

#[tokio::test]
async fn get_and_delete_tolerate_missing_ids() {
    for (name, service) in backends() {
        service.add(Book::new("Keep", "Me", 1.0)).await.unwrap();

        assert!(service.get(999).await.unwrap().is_none(), "{name}");
        service.delete(999).await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 1, "{name}");
    }
}

#[tokio::test]
async fn delete_then_get_yields_none() {
    for (name, service) in backends() {
        let stored = service.add(Book::new("Gone", "Soon", 1.0)).await.unwrap();

        service.delete(stored.id).await.unwrap();

        assert!(service.get(stored.id).await.unwrap().is_none(), "{name}");
    }
}
