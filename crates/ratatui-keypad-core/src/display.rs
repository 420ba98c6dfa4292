//! Projection of a raw value into renderable tokens for a display mode.

/// Glyph used to obscure characters when no explicit one is configured.
pub const DEFAULT_MASK_GLYPH: char = '\u{2022}';

/// How the input surface presents the stored value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Verbatim characters.
    #[default]
    Text,
    /// Verbatim characters, but the whole value must parse as a number;
    /// anything else projects to empty.
    Numeric,
    /// Each character replaced by a fixed mask glyph.
    Masked,
}

/// One renderable unit of the value, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayToken {
    Char(char),
    Mask(char),
}

impl DisplayToken {
    pub fn glyph(&self) -> char {
        match self {
            DisplayToken::Char(c) | DisplayToken::Mask(c) => *c,
        }
    }
}

/// The token sequence to render plus the canonical value behind it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Projection {
    pub tokens: Vec<DisplayToken>,
    pub canonical: String,
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Projects `raw` for the given mode. Grouping is not applied here; callers
/// group before projecting when they want separators on screen.
pub fn project(raw: &str, mode: DisplayMode, mask_glyph: char) -> Projection {
    if raw.is_empty() {
        return Projection::default();
    }
    match mode {
        DisplayMode::Text => Projection {
            tokens: raw.chars().map(DisplayToken::Char).collect(),
            canonical: raw.to_string(),
        },
        DisplayMode::Numeric => {
            if raw.parse::<f64>().is_err() {
                return Projection::default();
            }
            Projection {
                tokens: raw.chars().map(DisplayToken::Char).collect(),
                canonical: raw.to_string(),
            }
        }
        DisplayMode::Masked => Projection {
            tokens: raw.chars().map(|_| DisplayToken::Mask(mask_glyph)).collect(),
            canonical: raw.to_string(),
        },
    }
}
