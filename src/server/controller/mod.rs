//! HTTP request handlers.
//!
//! Controllers decode request bodies, call the service layer and serialize the returned DTOs.
//! Errors are returned as `AppError` and turned into responses by its `IntoResponse` impl.

pub mod book;
pub mod category;

#[cfg(test)]
mod test;
