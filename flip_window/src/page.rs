//! Page content elements.
//!
//! Each page is a tinted sheet with its number printed on it.  The book
//! resizes the sheet through [`PageSink`] so its right part is hidden behind
//! the curling paper while the page turns.

use page_flip::PageSink;

/// A page's content as the window draws it.
#[derive(Clone, Debug, PartialEq)]
pub struct PageElement {
    /// 1-based page number printed on the sheet.
    pub number: usize,
    pub color:  u32,
    /// Visible width in pixels, measured from the spine.
    pub width:  f32,
}

impl PageElement {
    pub fn new(number: usize, full_width: f32) -> Self {
        PageElement {
            number,
            color: page_color(number.saturating_sub(1)),
            width: full_width,
        }
    }

    /// Build the elements for a whole book.
    pub fn book(page_count: usize, full_width: f32) -> Vec<PageElement> {
        (1..=page_count)
            .map(|n| PageElement::new(n, full_width))
            .collect()
    }

    /// Visible width rounded to whole pixels, never negative.
    pub fn pixel_width(&self) -> usize {
        self.width.max(0.0).round() as usize
    }
}

impl PageSink for PageElement {
    fn set_width(&mut self, pixels: f32) {
        self.width = pixels.max(0.0);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Palette: page index → paper tint
// ════════════════════════════════════════════════════════════════════════════

/// Light paper tints, pale enough for the fold's greys to read on top.
const TINTS: [u32; 6] = [
    0xFFFBF3DF, // cream
    0xFFE6F2EA, // mint
    0xFFE3ECF8, // sky
    0xFFF6E4EC, // rose
    0xFFEFE9F7, // lilac
    0xFFF8EEDD, // sand
];

/// Tint of page `index`.  Books longer than the palette cycle through it,
/// dimming each lap slightly so neighbouring laps stay distinguishable.
pub fn page_color(index: usize) -> u32 {
    let tint = TINTS[index % TINTS.len()];
    let lap = (index / TINTS.len()) as u32;
    let dim = (lap % 4) * 8;
    let chan = |shift: u32| (((tint >> shift) & 0xFF).saturating_sub(dim)) << shift;
    0xFF000000 | chan(16) | chan(8) | chan(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_numbered_from_one() {
        let pages = PageElement::book(4, 400.0);
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[3].number, 4);
        assert!(pages.iter().all(|p| p.width == 400.0));
    }

    #[test]
    fn neighbouring_pages_differ() {
        let colors: Vec<u32> = (0..30).map(page_color).collect();
        assert!(colors.windows(2).all(|w| w[0] != w[1]));
        assert!(colors.iter().all(|c| c >> 24 == 0xFF));
        // second lap is a shade darker than the first
        assert_eq!(page_color(6), 0xFFF3EBD7);
    }

    #[test]
    fn width_never_negative() {
        let mut p = PageElement::new(1, 400.0);
        p.set_width(-12.0);
        assert_eq!(p.width, 0.0);
        p.set_width(150.4);
        assert_eq!(p.pixel_width(), 150);
    }
}
