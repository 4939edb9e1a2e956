mod book;
mod category;
