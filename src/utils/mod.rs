pub mod data_uri;
pub mod mime;

pub use mime::{MimeCategory, classify};
