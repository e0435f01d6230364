//! # phonebook-core
//!
//! A caller-owned contact directory driven by a small Russian command
//! language. Queries are strings of `;`-terminated sentences such as
//! `Создай контакт Григорий;` or
//! `Покажи имя и телефоны для контактов, где есть ий;`; a book parses
//! the whole query first and only then executes it, so a malformed query
//! never leaves the book half-updated.
//!
//! ## Modules
//!
//! - [`command`]: the query grammar and its parser
//! - [`store`]: the [`PhoneBook`] store and command execution
//! - [`error`]: the error type with command and character positions
//!
//! ## Example
//!
//! ```
//! use phonebook_core::PhoneBook;
//!
//! let mut book = PhoneBook::new();
//! let output = book
//!     .run(
//!         "Создай контакт Григорий;\
//!          Добавь телефон 5556667787 для контакта Григорий;\
//!          Покажи имя и телефоны для контактов, где есть ий;",
//!     )
//!     .unwrap();
//! assert_eq!(output, vec!["Григорий;+7 (555) 666-77-87".to_string()]);
//! ```

pub mod command;
pub mod error;
pub mod store;

pub use command::{parse_query, Command, Field};
pub use error::PhonebookError;
pub use store::{Contact, PhoneBook};
