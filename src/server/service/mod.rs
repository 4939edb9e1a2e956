//! Business logic layer between controllers and repositories.
//!
//! Services validate input, open transactions where several writes must land together, and
//! classify storage errors into `AppError` variants. They return DTOs ready for serialization.

pub mod book;
pub mod category;

#[cfg(test)]
mod test;
