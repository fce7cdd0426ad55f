//! Static font-metric tables for the overlay typefaces.
//!
//! Character widths are in em units (relative to font size). The tables are an
//! approximation of the real glyph advances; the label boxes carry padding, and
//! the rasterizer centers text inside its box, so small errors only shift the
//! visible margin. All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Technology labels and the watermark.
    OpenSans,
    /// The constellation title.
    MontserratBold,
}

impl FontFamily {
    /// `font-family` list emitted into the SVG overlay. The generic fallback
    /// keeps rendering working on hosts without the named face installed.
    pub fn svg_family(&self) -> &'static str {
        match self {
            FontFamily::OpenSans => "'Open Sans', 'DejaVu Sans', sans-serif",
            FontFamily::MontserratBold => "'Montserrat', 'DejaVu Sans', sans-serif",
        }
    }

    pub fn svg_weight(&self) -> u16 {
        match self {
            FontFamily::OpenSans => 400,
            FontFamily::MontserratBold => 700,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    /// Distance from the baseline to the top of the tallest glyphs, in em.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of descenders, in em.
    pub descent: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Height of one line of text in em units.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Returns the static metric table for the given font family.
pub fn get_metrics(font: &FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::OpenSans => &OPEN_SANS_TABLE,
        FontFamily::MontserratBold => &MONTSERRAT_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text styles
// ────────────────────────────────────────────────────────────────────────────

/// A font family at a concrete pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub family: FontFamily,
    pub size_px: f64,
}

impl TextStyle {
    pub const fn new(family: FontFamily, size_px: f64) -> Self {
        Self { family, size_px }
    }

    /// `(width, height)` of a single line of `text`, in pixels.
    pub fn measure(&self, text: &str) -> (f64, f64) {
        let metrics = get_metrics(&self.family);
        (
            f64::from(metrics.measure_str(text)) * self.size_px,
            f64::from(metrics.line_height()) * self.size_px,
        )
    }

    pub fn with_size(&self, size_px: f64) -> Self {
        Self::new(self.family, size_px)
    }

    /// Distance from the top of a line box to its baseline, in pixels.
    pub fn ascent_px(&self) -> f64 {
        f64::from(get_metrics(&self.family).ascent) * self.size_px
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static tables
// ────────────────────────────────────────────────────────────────────────────

/// Open Sans Regular: humanist sans-serif used for labels.
static OPEN_SANS_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.26, 0.27, 0.40, 0.65, 0.57, 0.83, 0.73, 0.22, 0.30, 0.30, 0.55, 0.57, 0.25, 0.32, 0.27, 0.37,
        // 0     1     2     3     4     5     6     7     8     9
        0.57, 0.57, 0.57, 0.57, 0.57, 0.57, 0.57, 0.57, 0.57, 0.57,
        // :     ;     <     =     >     ?     @
        0.27, 0.27, 0.57, 0.57, 0.57, 0.43, 0.90,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.63, 0.65, 0.63, 0.73, 0.56, 0.52, 0.73, 0.75, 0.29, 0.27, 0.61, 0.52, 0.91,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.77, 0.79, 0.60, 0.79, 0.62, 0.55, 0.56, 0.75, 0.59, 0.93, 0.58, 0.56, 0.57,
        // [     \     ]     ^     _     `
        0.33, 0.37, 0.33, 0.54, 0.44, 0.56,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.61, 0.48, 0.61, 0.56, 0.34, 0.54, 0.61, 0.26, 0.26, 0.52, 0.26, 0.93,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.61, 0.60, 0.61, 0.61, 0.41, 0.47, 0.35, 0.61, 0.50, 0.78, 0.52, 0.50, 0.46,
        // {     |     }     ~
        0.37, 0.55, 0.37, 0.57,
    ],
    average_char_width: 0.56,
    ascent: 1.07,
    descent: 0.29,
};

/// Montserrat Bold: geometric display sans-serif used for the title.
static MONTSERRAT_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.28, 0.31, 0.50, 0.76, 0.67, 0.86, 0.74, 0.27, 0.38, 0.38, 0.46, 0.62, 0.28, 0.42, 0.28, 0.42,
        // 0     1     2     3     4     5     6     7     8     9
        0.70, 0.42, 0.65, 0.65, 0.68, 0.65, 0.67, 0.62, 0.68, 0.67,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.62, 0.62, 0.62, 0.60, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.76, 0.78, 0.73, 0.83, 0.69, 0.66, 0.79, 0.83, 0.34, 0.54, 0.76, 0.62, 0.97,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.83, 0.85, 0.74, 0.85, 0.75, 0.67, 0.64, 0.81, 0.75, 1.17, 0.73, 0.69, 0.69,
        // [     \     ]     ^     _     `
        0.38, 0.42, 0.38, 0.62, 0.60, 0.60,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.64, 0.70, 0.60, 0.70, 0.65, 0.40, 0.71, 0.70, 0.31, 0.32, 0.66, 0.31, 1.07,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.70, 0.68, 0.70, 0.70, 0.44, 0.55, 0.45, 0.70, 0.63, 0.95, 0.62, 0.63, 0.55,
        // {     |     }     ~
        0.39, 0.32, 0.39, 0.62,
    ],
    average_char_width: 0.66,
    ascent: 0.97,
    descent: 0.25,
};
