//! Symbol table documents.

use itertools::Itertools;

use plcsnap_core::SymbolTable;

use crate::xml::Element;

pub(crate) const SYMBOL_TABLE_TYPE: &str = "S7SymbolTable";

/// One `symbol` element per entry, ordered by symbol name byte-wise.
///
/// The sort is stable, so equal names keep the loader's order.
pub fn symbol_table_document(name: &str, table: &SymbolTable) -> Element {
    let mut root = Element::new(SYMBOL_TABLE_TYPE)
        .attr("Name", name)
        .attr("Type", SYMBOL_TABLE_TYPE);

    for entry in table
        .entries
        .iter()
        .sorted_by(|a, b| a.symbol.as_bytes().cmp(b.symbol.as_bytes()))
    {
        root.push(
            Element::new("symbol")
                .attr("Symbol", entry.symbol.as_str())
                .attr("Comment", entry.comment.as_str())
                .attr("Type", entry.data_type.as_str())
                .attr("Address", entry.operand_iec.as_str()),
        );
    }

    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use plcsnap_core::SymbolEntry;

    fn entry(symbol: &str, comment: &str) -> SymbolEntry {
        SymbolEntry {
            symbol: symbol.into(),
            comment: comment.into(),
            data_type: "BOOL".into(),
            operand_iec: "%I0.0".into(),
        }
    }

    fn order(element: &Element) -> Vec<(String, String)> {
        element
            .elements()
            .map(|e| {
                (
                    e.attribute("Symbol").unwrap().to_string(),
                    e.attribute("Comment").unwrap().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_sorted_bytewise() {
        let table = SymbolTable {
            entries: vec![entry("b", ""), entry("B", ""), entry("a", ""), entry("Ä", ""), entry("_x", "")],
        };
        let element = symbol_table_document("Symbols", &table);
        let symbols: Vec<_> = order(&element).into_iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, ["B", "_x", "a", "b", "Ä"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let table = SymbolTable {
            entries: vec![entry("Motor", "second"), entry("Alarm", ""), entry("Motor", "first")],
        };
        let element = symbol_table_document("Symbols", &table);
        assert_eq!(
            order(&element),
            [
                ("Alarm".to_string(), String::new()),
                ("Motor".to_string(), "second".to_string()),
                ("Motor".to_string(), "first".to_string()),
            ]
        );
    }

    #[test]
    fn test_symbol_attributes() {
        let table = SymbolTable {
            entries: vec![SymbolEntry {
                symbol: "Start".into(),
                comment: "Start button".into(),
                data_type: "BOOL".into(),
                operand_iec: "%I0.1".into(),
            }],
        };
        let element = symbol_table_document("Symbols", &table);
        assert_eq!(element.attribute("Type"), Some("S7SymbolTable"));
        let symbol = element.elements().next().unwrap();
        assert_eq!(symbol.attribute("Type"), Some("BOOL"));
        assert_eq!(symbol.attribute("Address"), Some("%I0.1"));
    }
}
