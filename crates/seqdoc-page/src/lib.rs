//! Single-page HTML generator for Music Sequences tutorials.
//!
//! Reads every example in a tutorial directory and renders them, in filename
//! order, as titled code blocks on one self-contained HTML page.

pub mod assets;
pub mod builder;
pub mod entry;
pub mod templates;

pub use builder::{generate, BuildConfig, BuildError, BuildResult, PageBuilder};
pub use entry::{derive_title, SourceEntry};
