mod book;

pub use book::{Book, BookRequest, NewBook, UpdateBook};
