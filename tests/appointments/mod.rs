mod book;
mod cancel;
