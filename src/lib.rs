//! Link-preview metadata extraction and search filtering.
//!
//! Two pure entry points: [`extract`] pulls six optional fields out of a raw
//! HTML document using tolerant first-match tag patterns (no DOM parser),
//! and [`filter_metadata`] keeps the records whose fields match a free-text
//! query, with multi-word and hyphen expansion. Neither fails on malformed
//! input: bad HTML yields an all-absent [`Metadata`], and any query over an
//! empty slice yields an empty vec.

pub mod extract;
pub mod filter;
pub mod metadata;

pub use extract::extract;
pub use filter::filter_metadata;
pub use metadata::Metadata;
