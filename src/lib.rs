//! Content-quality scoring and internal-link ranking for generated SEO
//! articles.
//!
//! The crate is the analysis core of a content-generation platform: it scores
//! finished articles on a 0..=100 scale with a per-category breakdown,
//! classifies sitemap URLs into page types, and ranks a site's pages as
//! internal-link targets while spreading links evenly across the site.
//! Everything is synchronous, CPU-bound computation over in-memory data; the
//! only side effect (persisting a score) is delegated to a storage
//! collaborator behind a trait.

pub mod entities;
pub mod linking;
pub mod markup;
pub mod matching;
pub mod scoring;
pub mod sitemap;
pub mod storage;
