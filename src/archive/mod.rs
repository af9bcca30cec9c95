//! Article packaging.
//!
//! A finished article embeds its images as base64 `data:` URLs. Packaging
//! pulls them out into separate files and produces one zip:
//!
//! ```text
//! <title>.zip
//! └── <title>/
//!     ├── <title>.md          (image references rewritten to images/...)
//!     └── images/
//!         ├── img_1_4821.png
//!         └── img_2_4821.jpg
//! ```

mod images;
mod package;
mod title;

pub use images::{EmbeddedImage, extension_for, find_embedded_images};
pub use package::{
    Archive, ImageFile, build_archive, build_archive_with_suffix, extract_images, save_archive,
};
pub use title::{FALLBACK_TITLE, first_heading, resolve_title, sanitize_title};

#[cfg(test)]
mod tests;
