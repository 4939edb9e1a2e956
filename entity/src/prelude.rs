pub use super::book::Entity as Book;
pub use super::category::Entity as Category;
pub use super::category_book::Entity as CategoryBook;
