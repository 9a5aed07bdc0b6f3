// src/decode/workbook.rs

use anyhow::{anyhow, Context, Result};
use calamine::{Data, Range, Reader, Xlsx};
use std::io::Cursor;

/// The first sheet of a decoded workbook, addressed the way the published
/// file is laid out: letter columns and 1-based rows.
pub struct Sheet {
    range: Range<Data>,
}

/// Decode an xlsx byte buffer and expose its first sheet by declared order.
/// No format validation happens up front; malformed bytes surface here.
pub fn first_sheet(bytes: &[u8]) -> Result<Sheet> {
    let mut workbook =
        Xlsx::new(Cursor::new(bytes)).context("opening byte buffer as xlsx workbook")?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("workbook contains no sheets"))?
        .context("reading first sheet")?;
    Ok(Sheet { range })
}

impl Sheet {
    /// Formatted display string at a cell address like `("A", 2)`.
    /// `None` for cells that are absent or empty.
    pub fn value(&self, column: &str, row: u32) -> Option<String> {
        if row == 0 {
            return None;
        }
        let col = column_index(column)?;
        match self.range.get_value((row - 1, col)) {
            None | Some(Data::Empty) => None,
            Some(v) => Some(v.to_string()),
        }
    }

    /// Authoritative 1-based index of the last populated row. Bounds any
    /// scan over the sheet so a malformed file cannot loop unbounded.
    pub fn last_row(&self) -> u32 {
        self.range.end().map(|(row, _)| row + 1).unwrap_or(0)
    }
}

/// `A` → 0, `Z` → 25, `AA` → 26. `None` for anything but ASCII letters.
fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut index: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }
    Some(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn two_sheet_fixture() -> Vec<u8> {
        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet();
        first.write_string(0, 0, "Rank").unwrap();
        first.write_number(1, 0, 1.0).unwrap();
        first.write_string(1, 1, "alice").unwrap();
        let second = workbook.add_worksheet();
        second.write_string(0, 0, "should not be read").unwrap();
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn column_letters_map_to_indices() {
        assert_eq!(column_index("A"), Some(0));
        assert_eq!(column_index("N"), Some(13));
        assert_eq!(column_index("Z"), Some(25));
        assert_eq!(column_index("AA"), Some(26));
        assert_eq!(column_index(""), None);
        assert_eq!(column_index("A1"), None);
    }

    #[test]
    fn decodes_only_the_first_sheet() {
        let sheet = first_sheet(&two_sheet_fixture()).unwrap();
        assert_eq!(sheet.value("A", 1).as_deref(), Some("Rank"));
        assert_eq!(sheet.value("B", 2).as_deref(), Some("alice"));
    }

    #[test]
    fn numbers_come_back_as_display_strings() {
        let sheet = first_sheet(&two_sheet_fixture()).unwrap();
        assert_eq!(sheet.value("A", 2).as_deref(), Some("1"));
    }

    #[test]
    fn absent_cells_are_none() {
        let sheet = first_sheet(&two_sheet_fixture()).unwrap();
        assert_eq!(sheet.value("C", 1), None);
        assert_eq!(sheet.value("A", 50), None);
        assert_eq!(sheet.value("A", 0), None);
    }

    #[test]
    fn last_row_tracks_populated_extent() {
        let sheet = first_sheet(&two_sheet_fixture()).unwrap();
        assert_eq!(sheet.last_row(), 2);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(first_sheet(b"not a workbook").is_err());
    }
}
