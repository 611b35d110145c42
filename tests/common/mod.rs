//! Shared fixtures for integration tests.
//!
//! Provides [`Workspace`], a temporary directory holding a synthetic template
//! container plus helpers to drop JPEGs and junk files into an input folder.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use tempfile::TempDir;

pub const TEMPLATE_HEADER: &[u8] = b"INSP\x00\x00\x00\x02 v1.5.3 \x00\x10\x20\x30";
pub const TEMPLATE_FOOTER: &[u8] = b"\x00\x00INSP-TRAILER\x01\x02\x03\x04";

/// Encode a solid-colour JPEG of the given size.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, image::Rgb([90, 120, 200]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Jpeg)
        .expect("failed to encode test JPEG");
    buf.into_inner()
}

/// Header + JPEG + footer.
pub fn template_bytes(payload: &[u8]) -> Vec<u8> {
    [TEMPLATE_HEADER, payload, TEMPLATE_FOOTER].concat()
}

/// Temporary layout: `input/`, `output/` and `template.insp`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::create_dir(dir.path().join("input")).unwrap();
        std::fs::write(
            dir.path().join("template.insp"),
            template_bytes(&jpeg_bytes(32, 16)),
        )
        .unwrap();
        Self { dir }
    }

    pub fn input_dir(&self) -> PathBuf {
        self.dir.path().join("input")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    pub fn template_path(&self) -> PathBuf {
        self.dir.path().join("template.insp")
    }

    /// Write a JPEG into `input/` and return its path.
    pub fn add_jpeg(&self, name: &str, width: u32, height: u32) -> PathBuf {
        self.add_file(name, &jpeg_bytes(width, height))
    }

    pub fn add_file(&self, name: &str, data: &[u8]) -> PathBuf {
        let path = self.input_dir().join(name);
        std::fs::write(&path, data).unwrap();
        path
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.output_dir().join(name)
    }
}

pub fn read(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}
