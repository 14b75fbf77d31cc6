//! Core decoding layer for a Komga-compatible comic reader
//!
//! This crate holds the client-side value types and the tolerant decoders
//! that turn server payloads into them. Transport, rendering, and archive
//! handling live elsewhere; everything here is a synchronous, pure
//! transformation of an in-memory buffer.
//!
//! # Modules
//!
//! - `comicinfo`: ComicInfo.xml metadata extraction
//! - `models`: JSON domain models (libraries, series, books, pages)
//! - `translation`: translated speech balloons and overlay geometry

pub mod comicinfo;
pub mod error;
pub mod models;
pub mod translation;

mod lenient;

pub use error::{DecodeError, Result};
