//! HTML views for the reader.

pub mod handlers;
