//! ComicInfo.xml metadata support
//!
//! Archives produced by most comic taggers ship a flat ComicInfo.xml
//! document next to the page images. This module extracts the fields the
//! reader surfaces.

mod parser;

pub use parser::*;
