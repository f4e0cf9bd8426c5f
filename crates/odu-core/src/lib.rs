//! Core corpus for odu.
//!
//! This crate defines the sixteen primitive figures, the byte decoder that
//! splits a byte into its right and left legs, the 256-entry Odu corpus,
//! and the integrity checks that prove the corpus complete.
//!
//! # Example
//!
//! ```
//! use odu_core::Repository;
//!
//! let entry = Repository::global().resolve(240).unwrap();
//! assert_eq!(entry.name, "Ogbe-Oyeku");
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod corpus;
pub mod correspondence;
pub mod decode;
pub mod error;
pub mod figure;
pub mod model;
pub mod repository;
pub mod validate;

pub use decode::{decode, parse_integer, Legs};
pub use error::{Error, Result};
pub use figure::{Figure, Mark, PrimitiveFigure};
pub use model::{CompositeEntry, Correspondences, Element, EntryText};
pub use repository::{resolve, Repository};
pub use validate::IntegrityIssue;
