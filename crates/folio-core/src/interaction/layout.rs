// Responsive grid sizing for paged lists. Breakpoints are viewport widths
// in CSS pixels.

/// Grid geometry for one viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub item_height: u32,
    pub gap: u32,
}

impl GridLayout {
    pub fn for_width(width: u32) -> Self {
        let columns = match width {
            1280.. => 6,
            1024.. => 5,
            768.. => 4,
            640.. => 3,
            _ => 2,
        };
        let rows = if width < 768 { 3 } else { 2 };
        let item_height = match width {
            1024.. => 112,
            768.. => 96,
            640.. => 80,
            _ => 64,
        };
        let gap = match width {
            1280.. => 24,
            1024.. => 20,
            768.. => 16,
            640.. => 12,
            _ => 8,
        };
        Self {
            columns,
            rows,
            item_height,
            gap,
        }
    }

    pub fn per_page(&self) -> usize {
        self.columns * self.rows
    }

    /// Height reserved for a full page so the grid does not jump when the
    /// last page is short.
    pub fn min_height(&self) -> u32 {
        let rows = u32::try_from(self.rows).unwrap_or(u32::MAX);
        rows.saturating_mul(self.item_height)
            .saturating_add(rows.saturating_sub(1).saturating_mul(self.gap))
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::for_width(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        let cases = [
            (320, 2, 3, 64, 8),
            (640, 3, 3, 80, 12),
            (767, 3, 3, 80, 12),
            (768, 4, 2, 96, 16),
            (1024, 5, 2, 112, 20),
            (1440, 6, 2, 112, 24),
        ];
        for (width, columns, rows, item_height, gap) in cases {
            assert_eq!(
                GridLayout::for_width(width),
                GridLayout {
                    columns,
                    rows,
                    item_height,
                    gap
                },
                "width {width}"
            );
        }
    }

    #[test]
    fn per_page_and_min_height() {
        let mobile = GridLayout::for_width(375);
        assert_eq!(mobile.per_page(), 6);
        assert_eq!(mobile.min_height(), 3 * 64 + 2 * 8);

        let desktop = GridLayout::for_width(1280);
        assert_eq!(desktop.per_page(), 12);
        assert_eq!(desktop.min_height(), 2 * 112 + 24);
    }
}
