pub mod element;
pub mod entry;

pub use element::Element;
pub use entry::{binary_signature, CompositeEntry, Correspondences, EntryText};
