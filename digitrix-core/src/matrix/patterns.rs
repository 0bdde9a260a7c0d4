//! Digit glyph table
//!
//! Cell indices refer to positions in the physical 5x5 chain, index 0 being
//! the first LED the data line reaches. The table is fixed at build time.

/// Number of cells in the matrix
pub const CELL_COUNT: usize = 25;

/// Position of one LED in the chain (0-24)
pub type CellIndex = u8;

/// A decimal digit (0-9)
///
/// Construction is checked, so a pattern lookup can never go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value
    ///
    /// Returns `None` for values above 9.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a digit from an ASCII character ('0'-'9')
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_digit() {
            Some(Self(byte - b'0'))
        } else {
            None
        }
    }

    /// Numeric value (0-9)
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over all ten digits in order
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }
}

static DIGIT_0: [CellIndex; 12] = [1, 2, 3, 6, 8, 11, 13, 16, 18, 21, 22, 23];
static DIGIT_1: [CellIndex; 6] = [2, 7, 12, 16, 17, 22];
static DIGIT_2: [CellIndex; 11] = [1, 2, 3, 6, 11, 12, 13, 18, 21, 22, 23];
static DIGIT_3: [CellIndex; 11] = [1, 2, 3, 8, 11, 12, 13, 18, 21, 22, 23];
static DIGIT_4: [CellIndex; 9] = [1, 8, 11, 12, 13, 16, 18, 21, 23];
static DIGIT_5: [CellIndex; 11] = [1, 2, 3, 8, 11, 12, 13, 16, 21, 22, 23];
static DIGIT_6: [CellIndex; 12] = [1, 2, 3, 6, 8, 11, 12, 13, 16, 21, 22, 23];
static DIGIT_7: [CellIndex; 7] = [2, 7, 12, 18, 21, 22, 23];
static DIGIT_8: [CellIndex; 13] = [1, 2, 3, 6, 8, 11, 12, 13, 16, 18, 21, 22, 23];
static DIGIT_9: [CellIndex; 12] = [1, 2, 3, 8, 11, 12, 13, 16, 18, 21, 22, 23];

static DIGIT_PATTERNS: [&[CellIndex]; 10] = [
    &DIGIT_0, &DIGIT_1, &DIGIT_2, &DIGIT_3, &DIGIT_4, &DIGIT_5, &DIGIT_6, &DIGIT_7, &DIGIT_8,
    &DIGIT_9,
];

/// Get the lit cells for a digit, in ascending cell order
pub fn pattern_for(digit: Digit) -> &'static [CellIndex] {
    DIGIT_PATTERNS[digit.0 as usize]
}
