//! Template analysis: locate the embedded JPEG payload and derive region sizes

use std::fmt;
use std::fs;
use std::ops::Range;
use std::path::Path;

use tracing::debug;

use crate::error::ContainerError;
use crate::marker::{self, END_OF_IMAGE, START_OF_IMAGE};

/// Version tags known to appear in INSP headers
const KNOWN_VERSION_TAGS: &[&[u8]] = &[b"v1.5.3"];

/// Sizes of the three regions of a container
///
/// The regions are contiguous and appear in the order header, payload, footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Bytes before the JPEG start marker
    pub header_size: usize,
    /// The JPEG stream, start marker through end marker inclusive
    pub payload_size: usize,
    /// Bytes after the JPEG end marker
    pub footer_size: usize,
    /// Size of the whole container
    pub total_size: usize,
}

impl BoundaryInfo {
    /// Byte range of the header region
    pub fn header_range(&self) -> Range<usize> {
        0..self.header_size
    }

    /// Byte range of the JPEG payload
    pub fn payload_range(&self) -> Range<usize> {
        self.header_size..self.payload_end()
    }

    /// Byte range of the footer region
    pub fn footer_range(&self) -> Range<usize> {
        self.payload_end()..self.payload_end() + self.footer_size
    }

    fn payload_end(&self) -> usize {
        self.header_size + self.payload_size
    }
}

impl fmt::Display for BoundaryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "header {} bytes, payload {} bytes, footer {} bytes, total {} bytes",
            self.header_size, self.payload_size, self.footer_size, self.total_size
        )
    }
}

/// Locate the JPEG payload inside `data`
///
/// The payload starts at the first start marker and ends after the *last* end
/// marker, so marker-like bytes inside the compressed stream are tolerated.
pub fn analyze(data: &[u8]) -> Result<BoundaryInfo, ContainerError> {
    let start = marker::find_first(data, START_OF_IMAGE)
        .ok_or(ContainerError::MissingStartMarker)?;
    let end_marker = marker::find_last(data, END_OF_IMAGE)
        .ok_or(ContainerError::MissingEndMarker)?;

    if end_marker < start {
        return Err(ContainerError::InvalidBoundaries {
            start,
            end: end_marker,
        });
    }

    let end = end_marker + END_OF_IMAGE.len();
    Ok(BoundaryInfo {
        header_size: start,
        payload_size: end - start,
        footer_size: data.len() - end,
        total_size: data.len(),
    })
}

/// Best-effort search of a header region for a known version tag
///
/// Diagnostic only; absence is not an error.
pub fn detect_version(header: &[u8]) -> Option<String> {
    KNOWN_VERSION_TAGS
        .iter()
        .find(|tag| header.windows(tag.len()).any(|w| w == **tag))
        .map(|tag| String::from_utf8_lossy(tag).into_owned())
}

/// An analysed template container
///
/// Holds the template's bytes alongside its boundaries so that the pair can
/// never drift apart between analysis and splicing.
#[derive(Debug, Clone)]
pub struct Template {
    data: Vec<u8>,
    boundaries: BoundaryInfo,
    version: Option<String>,
}

impl Template {
    /// Read and analyse a template container from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContainerError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ContainerError::FileNotFound(path.to_path_buf())
            } else {
                ContainerError::Io(e)
            }
        })?;

        debug!("Analyzing template {:?}", path);
        Self::from_bytes(data)
    }

    /// Analyse a template container already in memory
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ContainerError> {
        let boundaries = analyze(&data)?;
        let version = detect_version(&data[boundaries.header_range()]);

        debug!("Template layout: {}", boundaries);
        match &version {
            Some(v) => debug!("Template version detected: {}", v),
            None => debug!("Template version: unknown"),
        }

        Ok(Self {
            data,
            boundaries,
            version,
        })
    }

    pub fn boundaries(&self) -> &BoundaryInfo {
        &self.boundaries
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn header(&self) -> &[u8] {
        &self.data[self.boundaries.header_range()]
    }

    /// The JPEG stream embedded in the template
    pub fn payload(&self) -> &[u8] {
        &self.data[self.boundaries.payload_range()]
    }

    pub fn footer(&self) -> &[u8] {
        &self.data[self.boundaries.footer_range()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(header: &[u8], payload: &[u8], footer: &[u8]) -> Vec<u8> {
        [header, payload, footer].concat()
    }

    #[test]
    fn test_analyze_regions() {
        let data = container(b"HDR!", &[0xFF, 0xD8, 1, 2, 3, 0xFF, 0xD9], b"FOOT");
        let info = analyze(&data).unwrap();

        assert_eq!(info.header_size, 4);
        assert_eq!(info.payload_size, 7);
        assert_eq!(info.footer_size, 4);
        assert_eq!(info.total_size, 15);
        assert_eq!(
            info.header_size + info.payload_size + info.footer_size,
            info.total_size
        );
    }

    #[test]
    fn test_analyze_picks_last_end_marker() {
        // EOI-like pair inside the payload at offset 5, true terminator at 9
        let data = container(b"HH", &[0xFF, 0xD8, 7, 0xFF, 0xD9, 8, 9, 0xFF, 0xD9], b"F");
        let info = analyze(&data).unwrap();

        assert_eq!(info.header_size, 2);
        assert_eq!(info.payload_size, 9);
        assert_eq!(info.footer_size, 1);
    }

    #[test]
    fn test_analyze_no_header_no_footer() {
        let data = [0xFF, 0xD8, 0xFF, 0xD9];
        let info = analyze(&data).unwrap();

        assert_eq!(info.header_size, 0);
        assert_eq!(info.payload_size, 4);
        assert_eq!(info.footer_size, 0);
    }

    #[test]
    fn test_missing_start_marker() {
        let data = [0x00, 0x01, 0xFF, 0xD9];
        assert!(matches!(
            analyze(&data),
            Err(ContainerError::MissingStartMarker)
        ));
    }

    #[test]
    fn test_missing_end_marker() {
        let data = [0x00, 0xFF, 0xD8, 0x01];
        assert!(matches!(
            analyze(&data),
            Err(ContainerError::MissingEndMarker)
        ));
    }

    #[test]
    fn test_end_before_start_is_invalid() {
        let data = [0xFF, 0xD9, 0x00, 0xFF, 0xD8, 0x00];
        assert!(matches!(
            analyze(&data),
            Err(ContainerError::InvalidBoundaries { start: 3, end: 0 })
        ));
    }

    #[test]
    fn test_detect_version() {
        assert_eq!(
            detect_version(b"INSP....v1.5.3...."),
            Some("v1.5.3".to_string())
        );
        assert_eq!(detect_version(b"INSP v2"), None);
        assert_eq!(detect_version(b""), None);
    }

    #[test]
    fn test_template_version_only_in_header() {
        let data = container(b"hdr", &[0xFF, 0xD8, 0xFF, 0xD9], b"v1.5.3");
        let template = Template::from_bytes(data).unwrap();
        assert_eq!(template.version(), None);
        assert_eq!(template.footer(), b"v1.5.3");
    }

    #[test]
    fn test_template_load_not_found() {
        let result = Template::load("/nonexistent/template.insp");
        assert!(matches!(result, Err(ContainerError::FileNotFound(_))));
    }

    #[test]
    fn test_template_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.insp");
        let data = container(b"INSP v1.5.3 ", &[0xFF, 0xD8, 0x42, 0xFF, 0xD9], b"tail");
        std::fs::write(&path, &data).unwrap();

        let template = Template::load(&path).unwrap();
        assert_eq!(template.version(), Some("v1.5.3"));
        assert_eq!(template.header(), b"INSP v1.5.3 ");
        assert_eq!(template.payload(), &[0xFF_u8, 0xD8, 0x42, 0xFF, 0xD9]);
        assert_eq!(template.footer(), b"tail");
        assert_eq!(template.bytes(), data.as_slice());
    }
}
