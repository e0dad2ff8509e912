//! Bitmap-to-vector collaborator for the digit-recognition scenario.
//!
//! Decodes fixed-size 4×6 digit images into 24-element decimal vectors: each
//! pixel is thresholded on luminance and mapped to one of exactly two levels,
//! the same `low_marker`/`high_marker` constants the metrics classify with.

use crate::dataset::sample::Sample;
use crate::math::decimal::Dec;
use crate::metric::metric_type::{high_marker, low_marker};
use std::io;
use std::path::Path;

/// Digit images are 4 pixels wide by 6 tall.
pub const DIGIT_WIDTH: u32 = 4;
pub const DIGIT_HEIGHT: u32 = 6;

/// Luminance at or above this reads as a light pixel.
const LUMA_THRESHOLD: u8 = 128;

/// Decodes one digit image into its 24-element input vector (row-major,
/// top row first). Dark pixels map to `low_marker`, light to `high_marker`.
pub fn decode_digit(path: &Path) -> io::Result<Vec<Dec>> {
    let img = image::open(path)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
        .to_luma8();

    if img.dimensions() != (DIGIT_WIDTH, DIGIT_HEIGHT) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{}: expected {}x{} pixels, got {}x{}",
                path.display(),
                DIGIT_WIDTH,
                DIGIT_HEIGHT,
                img.width(),
                img.height()
            ),
        ));
    }

    let low = low_marker();
    let high = high_marker();
    let mut pixels = Vec::with_capacity((DIGIT_WIDTH * DIGIT_HEIGHT) as usize);
    for y in 0..DIGIT_HEIGHT {
        for x in 0..DIGIT_WIDTH {
            let luma = img.get_pixel(x, y).0[0];
            pixels.push(if luma < LUMA_THRESHOLD { low.clone() } else { high.clone() });
        }
    }
    Ok(pixels)
}

/// Loads every `<digit>*.bmp`/`<digit>*.png` file under `dir` (sorted by
/// file name for a deterministic sample order). The leading digit of the
/// file name is the class label, stored as the single-element target.
pub fn load_digit_set(dir: &Path) -> io::Result<Vec<Sample>> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("bmp") | Some("png")
            )
        })
        .collect();
    paths.sort();

    let mut samples = Vec::with_capacity(paths.len());
    for path in paths {
        let label = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.chars().next())
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("{}: file name must start with the digit label", path.display()),
                )
            })?;
        let input = decode_digit(&path)?;
        samples.push(Sample::new(input, vec![Dec::from_usize(label as usize)]));
    }
    Ok(samples)
}

/// Renders a decoded digit vector as a `#`/`.` grid for console reporting.
pub fn render_digit(pixels: &[Dec]) -> String {
    assert_eq!(
        pixels.len(),
        (DIGIT_WIDTH * DIGIT_HEIGHT) as usize,
        "expected a {}-pixel digit vector",
        DIGIT_WIDTH * DIGIT_HEIGHT
    );

    let mid = crate::math::decimal::dec("0.5");
    let mut grid = String::new();
    for y in 0..DIGIT_HEIGHT as usize {
        for x in 0..DIGIT_WIDTH as usize {
            grid.push(if pixels[y * DIGIT_WIDTH as usize + x] > mid { '#' } else { '.' });
        }
        grid.push('\n');
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::decimal::dec;

    #[test]
    fn render_marks_high_pixels() {
        let low = low_marker();
        let high = high_marker();
        // Top row light, everything else dark.
        let mut pixels = vec![high; DIGIT_WIDTH as usize];
        pixels.extend(vec![low; (DIGIT_WIDTH * (DIGIT_HEIGHT - 1)) as usize]);

        let grid = render_digit(&pixels);
        assert_eq!(grid.lines().count(), DIGIT_HEIGHT as usize);
        assert_eq!(grid.lines().next(), Some("####"));
        assert!(grid.lines().skip(1).all(|line| line == "...."));
    }

    #[test]
    #[should_panic(expected = "24-pixel digit vector")]
    fn render_rejects_wrong_length() {
        render_digit(&[dec("0.2")]);
    }

    #[test]
    fn decode_thresholds_and_labels_a_generated_bitmap() {
        // Write a 4x6 gray image: left half dark, right half light.
        let dir = std::env::temp_dir().join("decimal_nn_bitmap_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("3_sample.png");
        let img = image::GrayImage::from_fn(DIGIT_WIDTH, DIGIT_HEIGHT, |x, _| {
            image::Luma([if x < DIGIT_WIDTH / 2 { 0u8 } else { 255u8 }])
        });
        img.save(&path).unwrap();

        let pixels = decode_digit(&path).unwrap();
        assert_eq!(pixels.len(), 24);
        for y in 0..DIGIT_HEIGHT as usize {
            let row = &pixels[y * 4..y * 4 + 4];
            assert_eq!(row[0], low_marker());
            assert_eq!(row[1], low_marker());
            assert_eq!(row[2], high_marker());
            assert_eq!(row[3], high_marker());
        }

        let samples = load_digit_set(&dir).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].target, vec![dec("3")]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
