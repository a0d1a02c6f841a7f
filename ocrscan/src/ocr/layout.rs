use image::GrayImage;
use serde::Serialize;

/// Luma below this value counts as ink.
pub const INK_THRESHOLD: u8 = 128;

/// Horizontal band of rows `[top, bottom)` that contains ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineBand {
    pub top: u32,
    pub bottom: u32,
}

impl LineBand {
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

fn row_has_ink(gray: &GrayImage, y: u32) -> bool {
    (0..gray.width()).any(|x| gray.get_pixel(x, y)[0] < INK_THRESHOLD)
}

/// Split a grayscale raster into text line bands using a horizontal
/// projection: consecutive rows with at least one ink pixel form a band.
///
/// Bands shorter than `min_line_height` rows are discarded as noise. A band
/// that reaches the bottom edge is closed at the image height.
pub fn segment_lines(gray: &GrayImage, min_line_height: u32) -> Vec<LineBand> {
    let mut bands = Vec::new();
    let mut start: Option<u32> = None;

    for y in 0..gray.height() {
        match (row_has_ink(gray, y), start) {
            (true, None) => start = Some(y),
            (false, Some(top)) => {
                if y - top >= min_line_height {
                    bands.push(LineBand { top, bottom: y });
                }
                start = None;
            }
            _ => {}
        }
    }

    if let Some(top) = start {
        let bottom = gray.height();
        if bottom - top >= min_line_height {
            bands.push(LineBand { top, bottom });
        }
    }

    bands
}
