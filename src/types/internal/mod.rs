pub mod item;

pub use item::{StoredItem, ValidatedItem};
