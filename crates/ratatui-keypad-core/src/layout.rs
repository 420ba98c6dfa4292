//! Static key layout registry: one immutable key set + grid shape per
//! keyboard variant, built at compile time.

use ratatui::layout::Position;
use ratatui::layout::Rect;

/// What pressing a key does to the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Append this character.
    Literal(char),
    /// Remove the last character.
    Delete,
}

/// One key on the pad. Layout data is `'static`; keys never change at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key {
    pub label: &'static str,
    pub action: KeyAction,
    pub sub_label: Option<&'static str>,
}

impl Key {
    const fn literal(label: &'static str, ch: char, sub_label: Option<&'static str>) -> Self {
        Self {
            label,
            action: KeyAction::Literal(ch),
            sub_label,
        }
    }

    const fn delete(label: &'static str) -> Self {
        Self {
            label,
            action: KeyAction::Delete,
            sub_label: None,
        }
    }
}

/// A key set laid out row-major into a `rows` x `columns` grid.
/// Invariant: `rows * columns >= keys.len()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub rows: u16,
    pub columns: u16,
    pub keys: &'static [Key],
}

impl Layout {
    /// Grid cell of the key at `index`, dividing `area` evenly. Cell
    /// boundaries are computed proportionally so they agree with
    /// [`Layout::key_index_at`] for every position.
    pub fn cell_rect(&self, index: usize, area: Rect) -> Rect {
        let cols = self.columns.max(1) as u32;
        let rows = self.rows.max(1) as u32;
        let col = (index % self.columns.max(1) as usize) as u32;
        let row = (index / self.columns.max(1) as usize) as u32;
        let x0 = area.x as u32 + col * area.width as u32 / cols;
        let x1 = area.x as u32 + (col + 1) * area.width as u32 / cols;
        let y0 = area.y as u32 + row * area.height as u32 / rows;
        let y1 = area.y as u32 + (row + 1) * area.height as u32 / rows;
        Rect::new(x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16)
    }

    /// Index of the key under `pos` when the grid is rendered into `area`.
    pub fn key_index_at(&self, pos: Position, area: Rect) -> Option<usize> {
        if !area.contains(pos) || area.width == 0 || area.height == 0 {
            return None;
        }
        let col = (pos.x - area.x) as u32 * self.columns as u32 / area.width as u32;
        let row = (pos.y - area.y) as u32 * self.rows as u32 / area.height as u32;
        let index = row as usize * self.columns as usize + col as usize;
        (index < self.keys.len()).then_some(index)
    }

    /// Key under `pos`, or `None` for a gap cell.
    pub fn key_at(&self, pos: Position, area: Rect) -> Option<Key> {
        self.key_index_at(pos, area).map(|i| self.keys[i])
    }

    /// Key that appends `ch`, used for physical-keyboard passthrough.
    pub fn key_for_char(&self, ch: char) -> Option<Key> {
        self.keys
            .iter()
            .copied()
            .find(|k| k.action == KeyAction::Literal(ch))
    }

    /// The delete key of this layout, if it has one.
    pub fn delete_key(&self) -> Option<Key> {
        self.keys
            .iter()
            .copied()
            .find(|k| k.action == KeyAction::Delete)
    }
}

/// Named keyboard variants. Variants without an explicit layout fall back
/// to the decimal pad.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Decimal,
    Numeric,
    Text,
}

/// Phone-style decimal pad: `1`..`9` with letter sub-labels, then `.`, `0`
/// and delete on the bottom row.
pub const DECIMAL: Layout = Layout {
    rows: 4,
    columns: 3,
    keys: &[
        Key::literal("1", '1', None),
        Key::literal("2", '2', Some("ABC")),
        Key::literal("3", '3', Some("DEF")),
        Key::literal("4", '4', Some("GHI")),
        Key::literal("5", '5', Some("JKL")),
        Key::literal("6", '6', Some("MNO")),
        Key::literal("7", '7', Some("PQRS")),
        Key::literal("8", '8', Some("TUV")),
        Key::literal("9", '9', Some("WXYZ")),
        Key::literal(".", '.', None),
        Key::literal("0", '0', None),
        Key::delete("\u{232b}"),
    ],
};

/// Layout for a variant, falling back to [`DECIMAL`] when the variant has
/// no dedicated key set.
pub fn layout_for(variant: Variant) -> &'static Layout {
    match variant {
        Variant::Decimal | Variant::Numeric | Variant::Text => &DECIMAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_fits_its_grid() {
        for variant in [Variant::Decimal, Variant::Numeric, Variant::Text] {
            let layout = layout_for(variant);
            assert!(layout.rows as usize * layout.columns as usize >= layout.keys.len());
        }
    }

    #[test]
    fn unknown_variants_fall_back_to_decimal() {
        assert_eq!(layout_for(Variant::Text), &DECIMAL);
        assert_eq!(layout_for(Variant::default()), &DECIMAL);
    }

    #[test]
    fn hit_test_agrees_with_cell_rects() {
        let area = Rect::new(2, 3, 31, 13);
        for index in 0..DECIMAL.keys.len() {
            let cell = DECIMAL.cell_rect(index, area);
            for x in cell.x..cell.x + cell.width {
                for y in cell.y..cell.y + cell.height {
                    assert_eq!(
                        DECIMAL.key_index_at(Position::new(x, y), area),
                        Some(index)
                    );
                }
            }
        }
    }

    #[test]
    fn hit_test_outside_area_misses() {
        let area = Rect::new(0, 0, 30, 12);
        assert_eq!(DECIMAL.key_at(Position::new(30, 0), area), None);
        assert_eq!(DECIMAL.key_at(Position::new(0, 12), area), None);
    }

    #[test]
    fn passthrough_lookup_finds_literals_only() {
        assert_eq!(
            DECIMAL.key_for_char('5').map(|k| k.action),
            Some(KeyAction::Literal('5'))
        );
        assert_eq!(DECIMAL.key_for_char('x'), None);
        assert_eq!(DECIMAL.delete_key().map(|k| k.action), Some(KeyAction::Delete));
    }
}
