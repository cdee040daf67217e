//! Core domain entities.
//!
//! The service has a single entity, [`ShortLink`], plus [`NewShortLink`] for
//! creation. Entities are plain data structures; persistence details live in
//! `crate::infrastructure::persistence`.

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
