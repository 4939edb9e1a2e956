pub mod clock;
pub mod json;
pub mod parse;
