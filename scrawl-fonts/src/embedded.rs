//! Bundled font data and name alias table.
//!
//! Embeds the DejaVu fonts via `include_bytes!` and maps the short names
//! accepted on the command line (`sans`, `bold`, `mono`) to the
//! appropriate embedded font. The table is immutable static
//! configuration; lookup normalizes to lowercase.

use crate::data::FontData;
use crate::error::FontError;

static DEJAVU_SANS: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");
static DEJAVU_BOLD: &[u8] = include_bytes!("../fonts/DejaVuSans-Bold.ttf");
static DEJAVU_MONO: &[u8] = include_bytes!("../fonts/DejaVuSansMono.ttf");

/// One bundled font: a short alias plus the embedded bytes.
pub struct BundledFont {
    /// The short name accepted on the command line (e.g. `"sans"`).
    pub name: &'static str,
    /// The original file name, used in output headers.
    pub file_name: &'static str,
    /// The embedded font bytes.
    bytes: &'static [u8],
}

impl BundledFont {
    /// Parse the embedded bytes into [`FontData`].
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the bundled bytes fail to parse
    /// (should not happen unless the embedded files are corrupt).
    pub fn load(&self) -> Result<FontData, FontError> {
        FontData::from_static(self.bytes)
    }
}

/// Bundled font table.
///
/// - `sans`: DejaVu Sans (clean, general-purpose)
/// - `bold`: DejaVu Sans Bold (thick, for titles)
/// - `mono`: DejaVu Sans Mono (monospace, typewriter style)
static BUNDLED: &[BundledFont] = &[
    BundledFont {
        name: "sans",
        file_name: "DejaVuSans.ttf",
        bytes: DEJAVU_SANS,
    },
    BundledFont {
        name: "bold",
        file_name: "DejaVuSans-Bold.ttf",
        bytes: DEJAVU_BOLD,
    },
    BundledFont {
        name: "mono",
        file_name: "DejaVuSansMono.ttf",
        bytes: DEJAVU_MONO,
    },
];

/// Look up a bundled font by name (case-insensitive).
#[must_use]
pub fn find(name: &str) -> Option<&'static BundledFont> {
    let lower = name.to_lowercase();
    BUNDLED.iter().find(|b| b.name == lower)
}

/// The short names of all bundled fonts, in table order.
#[must_use]
pub fn bundled_names() -> Vec<&'static str> {
    BUNDLED.iter().map(|b| b.name).collect()
}
