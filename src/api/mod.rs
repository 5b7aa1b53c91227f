//! # API Layer
//!
//! Presentation adapters over the quote engine.

pub mod rest;
