//! Filesystem utilities for quill.
//!
//! Everything quill writes (archives, saved Markdown, the default config)
//! goes through atomic writes so an aborted run never leaves a partial file.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
