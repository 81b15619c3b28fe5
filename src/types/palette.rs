//! The fixed avatar palette and seed-based colour picking.
//!
//! The hash routine, the palette order and the palette size together decide
//! which colour a seed maps to. Changing any of them changes the colour of
//! every existing avatar, so treat all three as frozen.

use std::fmt;

use super::Colour;

/// One of the seven named palette colours, in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColour {
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Teal,
    Pink,
}

impl PaletteColour {
    /// All palette entries, in index order.
    pub const ALL: [PaletteColour; 7] = [
        PaletteColour::Blue,
        PaletteColour::Red,
        PaletteColour::Green,
        PaletteColour::Yellow,
        PaletteColour::Purple,
        PaletteColour::Teal,
        PaletteColour::Pink,
    ];

    /// Number of palette entries.
    pub const COUNT: usize = Self::ALL.len();

    /// The RGB value of this entry.
    pub const fn colour(self) -> Colour {
        match self {
            PaletteColour::Blue => Colour::rgb(52, 152, 219),
            PaletteColour::Red => Colour::rgb(231, 76, 60),
            PaletteColour::Green => Colour::rgb(46, 204, 113),
            PaletteColour::Yellow => Colour::rgb(241, 196, 15),
            PaletteColour::Purple => Colour::rgb(155, 89, 182),
            PaletteColour::Teal => Colour::rgb(26, 188, 156),
            PaletteColour::Pink => Colour::rgb(233, 30, 99),
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            PaletteColour::Blue => "blue",
            PaletteColour::Red => "red",
            PaletteColour::Green => "green",
            PaletteColour::Yellow => "yellow",
            PaletteColour::Purple => "purple",
            PaletteColour::Teal => "teal",
            PaletteColour::Pink => "pink",
        }
    }

    /// Position in the palette.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PaletteColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable 32-bit string hash.
///
/// Starts from 23 and folds each UTF-16 code unit in as `acc * 31 + unit`.
/// Overflow wraps (two's complement `i32`), so the result is identical on
/// every platform and build profile.
pub fn stable_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(23i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Palette index selected by `seed`.
///
/// A missing or empty seed uses hash 0 and therefore index 0.
pub fn pick_index(seed: Option<&str>) -> usize {
    let hash = match seed {
        Some(s) if !s.is_empty() => stable_hash(s),
        _ => 0,
    };

    // |hash % n| == |hash| mod n, and stays defined for i32::MIN.
    (hash % PaletteColour::COUNT as i32).unsigned_abs() as usize
}

/// Palette entry selected by `seed`.
pub fn pick_entry(seed: Option<&str>) -> PaletteColour {
    PaletteColour::ALL[pick_index(seed)]
}

/// Background colour selected by `seed`.
pub fn pick(seed: Option<&str>) -> Colour {
    pick_entry(seed).colour()
}
