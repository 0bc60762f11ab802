//! Cell: the atomic unit of the drawing surface.
//!
//! Each cell stores its grapheme inline (up to 4 UTF-8 bytes), its colors,
//! and its text styles, and is exactly 16 bytes so four cells share a cache
//! line. This crate draws plot furniture rather than arbitrary rich text, so
//! graphemes that exceed the inline storage (emoji ZWJ sequences) are
//! replaced with `?` instead of spilling to side storage.

use bitflags::bitflags;

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use easel::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::UNDERLINE;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b0010_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single surface cell.
///
/// # Memory Layout
///
/// The struct is laid out to be exactly 16 bytes:
/// - 4 bytes of inline grapheme storage
/// - 2 bytes of grapheme metadata (length + display width)
/// - 6 bytes for colors (3 bytes fg + 3 bytes bg)
/// - 1 byte for modifiers
/// - 3 bytes padding (power-of-2 alignment)
///
/// A display width of 0 marks the continuation cell placed after a wide
/// (CJK) character.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Inline grapheme storage (UTF-8 bytes).
    glyph: [u8; 4],
    /// Byte length of the grapheme (0 for a continuation cell).
    glyph_len: u8,
    /// Display width (0=continuation, 1=normal, 2=wide CJK).
    display_width: u8,
    /// Foreground color.
    fg: Rgb,
    /// Background color.
    bg: Rgb,
    /// Text modifiers (bold, underline, etc.).
    modifiers: Modifiers,
    /// Padding to reach 16 bytes (power of 2, cache-friendly).
    _padding: [u8; 3],
}

// Compile-time assertion: Cell must be exactly 16 bytes
const _: () = assert!(
    std::mem::size_of::<Cell>() == 16,
    "Cell must be exactly 16 bytes for cache efficiency"
);

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space character with default colors).
    pub const EMPTY: Self = Self {
        glyph: [b' ', 0, 0, 0],
        glyph_len: 1,
        display_width: 1,
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        modifiers: Modifiers::empty(),
        _padding: [0, 0, 0],
    };

    /// Create a cell from any character.
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn new(c: char) -> Self {
        let mut glyph = [0u8; 4];
        let s = c.encode_utf8(&mut glyph);
        let len = u8::try_from(s.len()).unwrap_or(1);
        let width = u8::try_from(unicode_width::UnicodeWidthChar::width(c).unwrap_or(1))
            .unwrap_or(1);

        Self {
            glyph,
            glyph_len: len,
            display_width: width,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
            _padding: [0, 0, 0],
        }
    }

    /// Create a cell from a grapheme cluster.
    ///
    /// Graphemes longer than the 4-byte inline storage are replaced with
    /// `?`, preserving the original display width so column accounting
    /// stays correct.
    #[inline]
    pub fn from_grapheme(s: &str) -> Self {
        let width = u8::try_from(unicode_width::UnicodeWidthStr::width(s)).unwrap_or(1);
        let bytes = s.as_bytes();
        if bytes.len() > 4 {
            let mut cell = Self::new('?');
            cell.display_width = width.max(1);
            return cell;
        }

        let mut glyph = [0u8; 4];
        glyph[..bytes.len()].copy_from_slice(bytes);
        Self {
            glyph,
            glyph_len: u8::try_from(bytes.len()).unwrap_or(0),
            display_width: width,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
            _padding: [0, 0, 0],
        }
    }

    /// Create a wide-character continuation cell.
    ///
    /// This is placed after a wide CJK character that takes 2 columns.
    #[inline]
    pub const fn wide_continuation() -> Self {
        Self {
            glyph: [0, 0, 0, 0],
            glyph_len: 0,
            display_width: 0,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
            _padding: [0, 0, 0],
        }
    }

    /// Get the grapheme as a string slice.
    ///
    /// Returns `None` for a continuation cell.
    #[inline]
    #[allow(unsafe_code)]
    pub fn grapheme(&self) -> Option<&str> {
        if self.glyph_len == 0 {
            return None;
        }
        // SAFETY: We only store valid UTF-8 in the glyph bytes
        Some(unsafe { std::str::from_utf8_unchecked(&self.glyph[..self.glyph_len as usize]) })
    }

    /// Check if this is a wide-character continuation.
    #[inline]
    pub const fn is_wide_continuation(&self) -> bool {
        self.display_width == 0 && self.glyph_len == 0
    }

    /// Get the display width (0, 1, or 2).
    #[inline]
    pub const fn display_width(&self) -> u8 {
        self.display_width
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Get the modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Set the foreground color.
    #[inline]
    pub fn set_fg(&mut self, fg: Rgb) -> &mut Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    pub fn set_bg(&mut self, bg: Rgb) -> &mut Self {
        self.bg = bg;
        self
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Reset the cell to empty (space with default colors).
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }
}

impl From<char> for Cell {
    #[inline]
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.grapheme() {
            Some(g) => write!(f, "Cell({g:?} fg={:?} bg={:?})", self.fg, self.bg),
            None => write!(f, "Cell(<cont>)"),
        }
    }
}
