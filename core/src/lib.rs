pub mod index;
pub mod record;
pub mod store;
pub mod tokenizer;

pub use index::{DocId, Hit, SearchIndex, ValidationError};
pub use record::Record;
