// 🏗️ Menu CSV Parser
// Published-sheet export → MenuItem records
//
// Expected column order: Categoria, Nom, Preu, Descripcio.
// The header row is skipped by position, its content is never checked.

use crate::menu::{MenuItem, DEFAULT_CATEGORY};

/// Rows with fewer cells than this are dropped
pub const MIN_CELLS: usize = 3;

// ============================================================================
// ROW SCANNER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Unquoted,
    Quoted,
}

impl ScanState {
    fn toggle(self) -> Self {
        match self {
            ScanState::Unquoted => ScanState::Quoted,
            ScanState::Quoted => ScanState::Unquoted,
        }
    }
}

/// Split one row into trimmed cells.
///
/// Two states only: a `"` flips between quoted and unquoted and is dropped,
/// a `,` ends the cell only while unquoted. A doubled `""` is not an escape:
/// it flips twice and contributes nothing to the cell.
pub fn parse_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut state = ScanState::Unquoted;

    for ch in line.chars() {
        match (ch, state) {
            ('"', _) => state = state.toggle(),
            (',', ScanState::Unquoted) => {
                cells.push(cell.trim().to_string());
                cell.clear();
            }
            _ => cell.push(ch),
        }
    }
    cells.push(cell.trim().to_string());

    cells
}

// ============================================================================
// DOCUMENT PARSER
// ============================================================================

/// Parse a whole CSV export into menu items.
///
/// Line 0 is the header. Blank lines and rows with fewer than three cells
/// are skipped without logging. `id` is the line index, so ids keep the
/// gaps left by skipped rows.
pub fn parse_menu_csv(text: &str) -> Vec<MenuItem> {
    text.split('\n')
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(id, line)| row_to_item(id, parse_row(line)))
        .collect()
}

fn row_to_item(id: usize, cells: Vec<String>) -> Option<MenuItem> {
    if cells.len() < MIN_CELLS {
        return None;
    }

    let mut cells = cells.into_iter();
    let category = cells
        .next()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    let name = cells.next().unwrap_or_default();
    let price = cells.next().unwrap_or_default();
    let description = cells.next().unwrap_or_default();

    Some(MenuItem {
        id,
        category,
        name,
        price,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Categoria,Nom,Preu,Descripcio";

    #[test]
    fn test_parse_row_basic() {
        assert_eq!(
            parse_row("Tapes, Patates braves , 4,70 €"),
            vec!["Tapes", "Patates braves", "4", "70 €"]
        );
    }

    #[test]
    fn test_quoted_comma_is_not_a_delimiter() {
        let cells = parse_row(r#""A, B",Item,1,00 €,desc"#);

        assert_eq!(cells[0], "A, B");
        assert_eq!(cells[1], "Item");
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn test_quoted_price_keeps_decimal_comma() {
        let cells = parse_row(r#"Tapes,Braves,"4,70 €","Amb allioli, picant""#);

        assert_eq!(cells, vec!["Tapes", "Braves", "4,70 €", "Amb allioli, picant"]);
    }

    #[test]
    fn test_doubled_quote_is_not_an_escape() {
        // `""` toggles twice: no literal quote survives
        let cells = parse_row(r#"Tapes,"Tapa ""casolana""",3"#);

        assert_eq!(cells, vec!["Tapes", "Tapa casolana", "3"]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest_of_row() {
        let cells = parse_row(r#"Tapes,"Braves,4,70 €"#);

        assert_eq!(cells, vec!["Tapes", "Braves,4,70 €"]);
    }

    #[test]
    fn test_header_is_skipped_without_validation() {
        let text = "whatever,is,here\nTapes,Braves,4 €";
        let items = parse_menu_csv(text);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Braves");
    }

    #[test]
    fn test_two_cell_row_is_dropped() {
        let text = format!("{HEADER}\nTapes,Braves\nTapes,Calamars,8 €");
        let items = parse_menu_csv(&text);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Calamars");
    }

    #[test]
    fn test_count_is_rows_minus_malformed() {
        let text = format!(
            "{HEADER}\n\
             Tapes,Braves,4 €\n\
             \n\
             Tapes,Malformed\n\
             Vins,\"Marieta (albariño)\",\"3,50 € / 16,00 €\",Copa / Ampolla\n\
             \x20\x20\x20\n\
             onlyone\n\
             Postres,Coulant,\"4,60 €\"\n"
        );
        let items = parse_menu_csv(&text);

        // 5 non-blank data rows, 2 malformed
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_ids_are_line_indices_with_gaps() {
        let text = format!("{HEADER}\nTapes,Braves,4 €\n\nbad,row\nVins,Gran foc,3 €");
        let ids: Vec<usize> = parse_menu_csv(&text).iter().map(|i| i.id).collect();

        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_defaults_for_empty_category_and_missing_description() {
        let text = format!("{HEADER}\n,Cafè,\"1,35 €\"");
        let items = parse_menu_csv(&text);

        assert_eq!(items[0].category, "Altres");
        assert_eq!(items[0].price, "1,35 €");
        assert_eq!(items[0].description, "");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "Categoria,Nom,Preu,Descripcio\r\nTapes,Braves,4 €,Picants\r\n\r\n";
        let items = parse_menu_csv(text);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Picants");
    }

    #[test]
    fn test_extra_cells_are_ignored() {
        let text = format!("{HEADER}\nTapes,Braves,4 €,Picants,extra,more");
        let items = parse_menu_csv(&text);

        assert_eq!(items[0].description, "Picants");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = format!("{HEADER}\nTapes,Braves,4 €\nVins,Marieta,\"3,50 €\",Copa");

        assert_eq!(parse_menu_csv(&text), parse_menu_csv(&text));
    }

    #[test]
    fn test_header_only_and_empty_text() {
        assert!(parse_menu_csv("").is_empty());
        assert!(parse_menu_csv(HEADER).is_empty());
    }
}
