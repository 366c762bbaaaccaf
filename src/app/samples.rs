// SPDX-License-Identifier: MPL-2.0
//! Collects the sample images the gallery starts with.
//!
//! Order is the display order: entries from `settings.toml` first, then the
//! paths given on the command line, then the images found in the samples
//! directory sorted by file name.

use crate::config::{GalleryConfig, SampleEntry};
use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};

/// Builds the sample manifest. An unreadable samples directory is logged and skipped.
pub fn scan(
    config: &GalleryConfig,
    cli_paths: &[PathBuf],
    samples_dir: Option<&Path>,
) -> Vec<SampleEntry> {
    let mut entries = config.samples.clone();

    entries.extend(cli_paths.iter().filter_map(|path| {
        if media::is_image_file(path) {
            Some(SampleEntry {
                source: path.clone(),
                label: None,
            })
        } else {
            log::warn!("Ignoring non-image sample {}", path.display());
            None
        }
    }));

    if let Some(dir) = samples_dir {
        match scan_directory(dir) {
            Ok(found) => entries.extend(found.into_iter().map(|source| SampleEntry {
                source,
                label: None,
            })),
            Err(err) => log::warn!("Cannot read samples directory {}: {err}", dir.display()),
        }
    }

    entries
}

/// Image files directly inside `directory`, sorted by file name.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && media::is_image_file(&path) {
            images.push(path);
        }
    }

    images.sort_by_key(|path| path.file_name().map(|name| name.to_ascii_lowercase()));
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").expect("write fixture");
        path
    }

    #[test]
    fn directory_scan_keeps_images_sorted_by_name() {
        let dir = tempdir().expect("temp dir");
        touch(dir.path(), "b.png");
        touch(dir.path(), "A.jpg");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("nested.png")).expect("nested dir");

        let found = scan_directory(dir.path()).expect("scan");
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["A.jpg", "b.png"]);
    }

    #[test]
    fn manifest_then_cli_then_directory() {
        let dir = tempdir().expect("temp dir");
        let scanned = touch(dir.path(), "z.webp");

        let config = GalleryConfig {
            samples: vec![SampleEntry {
                source: PathBuf::from("/photos/first.jpg"),
                label: Some("First".into()),
            }],
            ..GalleryConfig::default()
        };
        let cli = vec![PathBuf::from("second.png"), PathBuf::from("readme.md")];

        let entries = scan(&config, &cli, Some(dir.path()));
        let sources: Vec<_> = entries.iter().map(|e| e.source.clone()).collect();
        assert_eq!(
            sources,
            vec![
                PathBuf::from("/photos/first.jpg"),
                PathBuf::from("second.png"),
                scanned,
            ]
        );
        assert_eq!(entries[0].label.as_deref(), Some("First"));
        assert!(entries[1].label.is_none());
    }

    #[test]
    fn missing_directory_is_skipped() {
        let dir = tempdir().expect("temp dir");
        let entries = scan(
            &GalleryConfig::default(),
            &[],
            Some(&dir.path().join("does-not-exist")),
        );
        assert!(entries.is_empty());
    }
}
