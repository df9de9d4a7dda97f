//! Raw dump of the final coloring.
//!
//! One byte per node: the low 8 bits of its color. After the usual 4 rounds
//! every color is below 6, so nothing is lost.

use crate::error::CvError;
use crate::ring::Color;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const BLOCK: usize = 64 * 1024;

/// Write `colors` to `path`, replacing any existing file.
pub fn write_colors(colors: &[Color], path: &Path) -> Result<(), CvError> {
    write_all(colors, path).map_err(|source| CvError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_all(colors: &[Color], path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    let mut bytes = Vec::with_capacity(BLOCK.min(colors.len()));
    for block in colors.chunks(BLOCK) {
        bytes.clear();
        bytes.extend(block.iter().map(|&c| c as u8));
        out.write_all(&bytes)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("cv-writer-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_writes_low_bytes() {
        let path = temp_path("low-bytes");
        write_colors(&[0, 5, 0x1_02, u64::MAX], &path).unwrap();
        let data = fs::read(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(data, vec![0, 5, 2, 0xFF]);
    }

    #[test]
    fn test_length_matches_ring() {
        let path = temp_path("length");
        let colors: Vec<Color> = (0..(BLOCK as u64 + 17)).map(|i| i % 6).collect();
        write_colors(&colors, &path).unwrap();
        let data = fs::read(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(data.len(), colors.len());
        assert_eq!(data[BLOCK + 16], ((BLOCK + 16) % 6) as u8);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let path = temp_path("overwrite");
        fs::write(&path, vec![9u8; 100]).unwrap();
        write_colors(&[1, 2], &path).unwrap();
        let data = fs::read(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_bad_path_is_write_error() {
        let path = temp_path("missing-dir").join("out.dat");
        let err = write_colors(&[1, 2], &path).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("out.dat"));
    }
}
