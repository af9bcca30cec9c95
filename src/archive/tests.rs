use super::*;
use crate::error::QuillError;
use crate::test_support::PNG_B64;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::io::{Cursor, Read};
use tempfile::TempDir;
use zip::ZipArchive;

fn entries(archive: &Archive) -> Vec<String> {
    let zip = ZipArchive::new(Cursor::new(archive.bytes.clone())).unwrap();
    let mut names: Vec<String> = zip.file_names().map(str::to_string).collect();
    names.sort();
    names
}

fn read_entry(archive: &Archive, name: &str) -> Vec<u8> {
    let mut zip = ZipArchive::new(Cursor::new(archive.bytes.clone())).unwrap();
    let mut file = zip.by_name(name).unwrap();
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).unwrap();
    buf
}

#[test]
fn document_without_images_is_stored_verbatim() {
    let md = "# 冬季養生\n\n多喝溫水。\n";
    let archive = build_archive_with_suffix(md, None, "1234").unwrap();

    assert_eq!(archive.folder, "冬季養生");
    assert_eq!(archive.file_name(), "冬季養生.zip");
    assert_eq!(archive.image_count, 0);
    assert_eq!(entries(&archive), vec!["冬季養生/冬季養生.md"]);
    assert_eq!(read_entry(&archive, "冬季養生/冬季養生.md"), md.as_bytes());
}

#[test]
fn embedded_images_become_files_and_relative_links() {
    let md = format!(
        "# Tea\n\n![一杯茶](data:image/png;base64,{png})\n\n*圖：一杯茶*\n\n![](data:image/jpeg;base64,{png})\n",
        png = PNG_B64
    );
    let archive = build_archive_with_suffix(&md, Some("Tea Time"), "0042").unwrap();

    assert_eq!(archive.folder, "Tea Time");
    assert_eq!(archive.image_count, 2);
    assert_eq!(
        entries(&archive),
        vec![
            "Tea Time/Tea Time.md",
            "Tea Time/images/img_1_0042.png",
            "Tea Time/images/img_2_0042.jpg",
        ]
    );

    let written = String::from_utf8(read_entry(&archive, "Tea Time/Tea Time.md")).unwrap();
    assert_eq!(
        written,
        "# Tea\n\n![一杯茶](images/img_1_0042.png)\n\n*圖：一杯茶*\n\n![image_2](images/img_2_0042.jpg)\n"
    );
    assert!(!written.contains("base64"));

    let decoded = BASE64.decode(PNG_B64).unwrap();
    assert_eq!(read_entry(&archive, "Tea Time/images/img_1_0042.png"), decoded);
}

#[test]
fn invalid_base64_is_an_archive_error() {
    let md = "![x](data:image/png;base64,@@not-base64@@)";
    let err = build_archive_with_suffix(md, None, "0000").unwrap_err();
    assert!(matches!(err, QuillError::ArchiveError(_)));
}

#[test]
fn title_is_sanitised_for_folder_name() {
    let archive = build_archive_with_suffix("# A/B: \"C\"?\n", None, "0000").unwrap();
    assert_eq!(archive.folder, "AB C");
}

#[test]
fn dot_titles_cannot_escape_the_archive_root() {
    let archive = build_archive_with_suffix("# ..\n", None, "0000").unwrap();

    assert_eq!(archive.folder, "article");
    assert_eq!(archive.file_name(), "article.zip");
    assert_eq!(entries(&archive), vec!["article/article.md"]);
}

#[test]
fn time_suffix_is_shared_by_all_images() {
    let md = format!(
        "![a](data:image/png;base64,{p})![b](data:image/png;base64,{p})",
        p = PNG_B64
    );
    let archive = build_archive(&md, None).unwrap();
    let names = entries(&archive);
    let suffixes: Vec<&str> = names
        .iter()
        .filter_map(|n| n.strip_prefix("article/images/img_"))
        .map(|rest| &rest[2..6])
        .collect();
    assert_eq!(suffixes.len(), 2);
    assert_eq!(suffixes[0], suffixes[1]);
    assert!(suffixes[0].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn save_archive_writes_zip_into_directory() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("out");
    let archive = build_archive_with_suffix("# Saved\n", None, "0000").unwrap();

    let path = save_archive(&archive, &out_dir).unwrap();

    assert_eq!(path, out_dir.join("Saved.zip"));
    assert_eq!(std::fs::read(&path).unwrap(), archive.bytes);
}

#[test]
fn save_archive_reports_unwritable_destination() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("file");
    std::fs::write(&blocker, "x").unwrap();
    let archive = build_archive_with_suffix("# X\n", None, "0000").unwrap();

    let err = save_archive(&archive, &blocker.join("nested")).unwrap_err();
    assert!(matches!(err, QuillError::ArchiveError(_)));
}
