//! Zip assembly and saving.

use super::images::find_embedded_images;
use super::title::{resolve_title, sanitize_title};
use crate::error::{QuillError, Result};
use crate::fs::atomic_write;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A built archive held in memory.
#[derive(Debug, Clone)]
pub struct Archive {
    /// Sanitised title; names the top-level folder, the Markdown file and the zip.
    pub folder: String,
    /// Markdown with images rewritten to relative paths.
    pub markdown: String,
    pub image_count: usize,
    pub bytes: Vec<u8>,
}

impl Archive {
    pub fn file_name(&self) -> String {
        format!("{}.zip", self.folder)
    }
}

/// Extracted image file ready to be written under `images/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Four digits derived from the current time, fixed for one archive.
fn time_suffix() -> String {
    format!("{:04}", Utc::now().timestamp_millis().rem_euclid(10_000))
}

/// Rewrite every embedded image to `images/<file>` and decode its payload.
pub fn extract_images(markdown: &str, suffix: &str) -> Result<(String, Vec<ImageFile>)> {
    let images = find_embedded_images(markdown);
    if images.is_empty() {
        return Ok((markdown.to_string(), Vec::new()));
    }

    let mut rewritten = String::with_capacity(markdown.len());
    let mut files = Vec::with_capacity(images.len());
    let mut cursor = 0;

    for image in &images {
        let file_name = format!("img_{}_{}.{}", image.index, suffix, image.extension());
        let bytes = BASE64.decode(image.data_base64.trim()).map_err(|e| {
            QuillError::ArchiveError(format!(
                "image {} has invalid base64 data: {}",
                image.index, e
            ))
        })?;

        rewritten.push_str(&markdown[cursor..image.span.start]);
        rewritten.push_str(&format!("![{}](images/{})", image.display_alt(), file_name));
        cursor = image.span.end;

        files.push(ImageFile { file_name, bytes });
    }
    rewritten.push_str(&markdown[cursor..]);

    Ok((rewritten, files))
}

/// Package a finished document into a zip archive.
pub fn build_archive(markdown: &str, suggested_title: Option<&str>) -> Result<Archive> {
    build_archive_with_suffix(markdown, suggested_title, &time_suffix())
}

pub fn build_archive_with_suffix(
    markdown: &str,
    suggested_title: Option<&str>,
    suffix: &str,
) -> Result<Archive> {
    let folder = sanitize_title(&resolve_title(markdown, suggested_title));
    let (rewritten, images) = extract_images(markdown, suffix)?;

    let zip_err = |e: zip::result::ZipError| QuillError::ArchiveError(e.to_string());
    let io_err = |e: std::io::Error| QuillError::ArchiveError(e.to_string());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let md_path = format!("{}/{}.md", folder, folder);
    tracing::debug!(entry = %md_path, "adding markdown");
    zip.start_file(md_path, options).map_err(zip_err)?;
    zip.write_all(rewritten.as_bytes()).map_err(io_err)?;

    for image in &images {
        let path = format!("{}/images/{}", folder, image.file_name);
        tracing::debug!(entry = %path, size = image.bytes.len(), "adding image");
        zip.start_file(path, options).map_err(zip_err)?;
        zip.write_all(&image.bytes).map_err(io_err)?;
    }

    let bytes = zip.finish().map_err(zip_err)?.into_inner();

    Ok(Archive {
        folder,
        markdown: rewritten,
        image_count: images.len(),
        bytes,
    })
}

/// Write the archive into `dir` as `<folder>.zip`, atomically.
pub fn save_archive(archive: &Archive, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| {
        QuillError::ArchiveError(format!(
            "failed to create output directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let path = dir.join(archive.file_name());
    atomic_write(&path, &archive.bytes).map_err(|e| {
        QuillError::ArchiveError(format!("failed to write '{}': {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), images = archive.image_count, "archive saved");
    Ok(path)
}
