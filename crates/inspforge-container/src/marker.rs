//! JPEG stream markers and raw byte search.
//!
//! Markers are matched by a plain two-byte scan. No JPEG segment structure is
//! parsed, so a marker-like pair inside entropy-coded data matches as well.

/// SOI (Start Of Image), defined in ITU T.81/IEC 10918-1
pub const START_OF_IMAGE: [u8; 2] = [0xFF, 0xD8];

/// EOI (End Of Image), defined in ITU T.81/IEC 10918-1
pub const END_OF_IMAGE: [u8; 2] = [0xFF, 0xD9];

/// Offset of the first occurrence of `marker` in `data`.
pub fn find_first(data: &[u8], marker: [u8; 2]) -> Option<usize> {
    data.windows(2).position(|w| w == marker)
}

/// Offset of the last occurrence of `marker` in `data`, searching from the end.
pub fn find_last(data: &[u8], marker: [u8; 2]) -> Option<usize> {
    data.windows(2).rposition(|w| w == marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first() {
        let data = [0x00, 0xFF, 0xD8, 0xFF, 0xD8];
        assert_eq!(find_first(&data, START_OF_IMAGE), Some(1));
    }

    #[test]
    fn test_find_last() {
        let data = [0xFF, 0xD9, 0x00, 0xFF, 0xD9, 0x00];
        assert_eq!(find_last(&data, END_OF_IMAGE), Some(3));
    }

    #[test]
    fn test_marker_split_across_nothing() {
        assert_eq!(find_first(&[], START_OF_IMAGE), None);
        assert_eq!(find_first(&[0xFF], START_OF_IMAGE), None);
        assert_eq!(find_last(&[0xD9, 0xFF], END_OF_IMAGE), None);
    }
}
