//! Keyboard geometry: characters mapped to 3-D positions.
//!
//! A layout is built from one or more *planes* of text, one plane per
//! modifier state (shifted, unshifted). Each plane is a block of lines where
//! cells are delimited by `|`; everything before the first `|` is row
//! indentation, a space cell is an absent key, and any other byte places that
//! character at `(plane, row, column)` with `column` the byte offset of the
//! cell within its line. The offsets deliberately encode the physical row
//! stagger of a keyboard.
//!
//! Distance between two keys is Manhattan distance over the three axes, so a
//! shifted and an unshifted rendering of the same key sit one plane apart and
//! neighbouring keys on the same row sit two columns apart.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Plane id of the unshifted QWERTY plane.
pub const BASE_PLANE: u32 = 1;

/// Plane id of the shifted QWERTY plane.
///
/// Shift gets the lower id so that crossing the shift boundary is
/// numerically closer than any hypothetical further modifier plane.
pub const SHIFT_PLANE: u32 = 0;

/// The unshifted U.S. QWERTY plane.
pub const QWERTY_BASE: &str = "\
|1|2|3|4|5|6|7|8|9|0|-|=|
 |q|w|e|r|t|y|u|i|o|p|[|
  |a|s|d|f|g|h|j|k|l|;|'|
   |z|x|c|v|b|n|m|,|.|/|";

/// The shifted U.S. QWERTY plane.
pub const QWERTY_SHIFT: &str = "\
|!|@|#|$|%|^|&|*|(|)|_|+|
 |Q|W|E|R|T|Y|U|I|O|P|{|
  |A|S|D|F|G|H|J|K|L|:|\"|
   |Z|X|C|V|B|N|M|<|>|?|";

/// Errors raised while parsing a layout plane.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A character was assigned a position twice, in any plane.
    #[error("character '{0}' is defined in more than one layout cell")]
    DuplicateKey(char),

    /// A cell was not closed by a `|` before the end of its line.
    #[error("unterminated layout cell at row {row}, byte {column}")]
    UnterminatedCell {
        /// 0-based line index within the plane text.
        row: usize,
        /// Byte offset of the offending cell.
        column: usize,
    },
}

/// Where a character sits: modifier plane, keyboard row, byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPosition {
    /// Modifier plane id.
    pub plane: u32,
    /// 0-based row within the plane description.
    pub row: u32,
    /// Byte offset of the cell within its line.
    pub column: u32,
}

impl KeyPosition {
    /// Manhattan distance over `(plane, row, column)`.
    pub fn distance(&self, other: &KeyPosition) -> u32 {
        self.plane.abs_diff(other.plane)
            + self.row.abs_diff(other.row)
            + self.column.abs_diff(other.column)
    }
}

/// A character-to-position map built from one or more planes.
///
/// The engine is layout-agnostic: any planes conforming to the text format
/// are accepted, and every character may appear at most once across all of
/// them.
#[derive(Debug, Clone, Default)]
pub struct KeyboardLayout {
    keys: FxHashMap<u8, KeyPosition>,
}

impl KeyboardLayout {
    /// Create an empty layout with no planes loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The two canonical QWERTY planes (shift below base, see [`SHIFT_PLANE`]).
    pub fn qwerty() -> Self {
        let mut layout = Self::new();
        layout
            .add_plane(BASE_PLANE, QWERTY_BASE)
            .expect("built-in base plane is well-formed");
        layout
            .add_plane(SHIFT_PLANE, QWERTY_SHIFT)
            .expect("built-in shift plane is well-formed");
        layout
    }

    /// Parse one plane of layout text and add its keys.
    ///
    /// `plane` becomes the first coordinate of every key defined by `text`.
    /// Lines without any `|` define no keys but still occupy a row.
    pub fn add_plane(&mut self, plane: u32, text: &str) -> Result<(), LayoutError> {
        for (row, line) in text.lines().enumerate() {
            let bytes = line.as_bytes();

            // Indentation runs up to and including the first delimiter.
            let mut i = 0;
            while i < bytes.len() && bytes[i] != b'|' {
                i += 1;
            }
            if i < bytes.len() {
                i += 1;
            }

            while i < bytes.len() {
                let cell = bytes[i];
                let column = i;
                i += 1;

                if cell != b' ' {
                    let position = KeyPosition {
                        plane,
                        row: row as u32,
                        column: column as u32,
                    };
                    if self.keys.insert(cell, position).is_some() {
                        return Err(LayoutError::DuplicateKey(cell as char));
                    }
                }

                if i >= bytes.len() || bytes[i] != b'|' {
                    return Err(LayoutError::UnterminatedCell { row, column });
                }
                i += 1;
            }
        }

        Ok(())
    }

    /// Look up the position of a character, if it is on any loaded plane.
    pub fn position(&self, c: u8) -> Option<KeyPosition> {
        self.keys.get(&c).copied()
    }

    /// Whether the character appears on any loaded plane.
    pub fn contains(&self, c: u8) -> bool {
        self.keys.contains_key(&c)
    }

    /// Number of keys across all loaded planes.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no keys have been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Manhattan distance between two characters, `None` if either is
    /// unknown.
    ///
    /// Symmetric, and zero only for the same character: the shifted and
    /// unshifted renderings of one physical key differ in the plane axis.
    pub fn distance(&self, a: u8, b: u8) -> Option<u32> {
        let pa = self.position(a)?;
        let pb = self.position(b)?;
        Some(pa.distance(&pb))
    }
}
