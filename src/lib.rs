pub mod artifact;
pub mod index;
pub mod validate;

pub use index::{DocumentIndex, DocumentRecord};
