//! # Domain Layer
//!
//! Value objects, entities, and domain errors for shipping quotes.
//!
//! Nothing in this layer performs I/O. Sandbox entities are plain records;
//! their lifecycle (creation and guaranteed reclamation) is driven by the
//! application layer.

pub mod entities;
pub mod errors;
pub mod value_objects;
