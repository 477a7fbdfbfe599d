//! Tree table documents (`SdaTreeTable`).

use crate::xml::Element;

/// A titled table of string cells keyed by its first column.
#[derive(Debug, Clone, Default)]
pub struct TreeTable {
    title: Option<String>,
    columns: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl TreeTable {
    pub fn new(columns: &[&'static str]) -> Self {
        Self {
            title: None,
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a row; cells beyond the column count are ignored.
    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn to_element(&self) -> Element {
        let mut root = Element::new("SdaTreeTable");

        if let Some(title) = &self.title {
            root.push(Element::with_text("Title", title.as_str()));
        }

        let mut columns =
            Element::new("ColumnsConfig").attr("KeyColumn", self.columns.first().copied().unwrap_or(""));
        for column in &self.columns {
            columns.push(Element::new("Column").attr("Col", *column).attr("Label", *column));
        }
        root.push(columns);

        let mut rows = Element::new("Rows");
        for cells in &self.rows {
            let mut row = Element::new("Row");
            for (column, cell) in self.columns.iter().zip(cells) {
                row.push(Element::with_text("Cell", cell.as_str()).attr("Col", *column));
            }
            rows.push(row);
        }
        root.push(rows);

        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let mut table = TreeTable::new(&["Name", "Type", "Address"]).title("Network Interfaces");
        table.row(vec!["PN-IO".into(), "Ethernet".into(), "10.0.0.1 (00:00:00:00:00:01)".into()]);
        let element = table.to_element();

        let children: Vec<_> = element.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(children, ["Title", "ColumnsConfig", "Rows"]);

        let columns = element.elements().nth(1).unwrap();
        assert_eq!(columns.attribute("KeyColumn"), Some("Name"));
        assert_eq!(columns.elements().count(), 3);

        let rows = element.elements().nth(2).unwrap();
        let row = rows.elements().next().unwrap();
        let cols: Vec<_> = row.elements().filter_map(|c| c.attribute("Col")).collect();
        assert_eq!(cols, ["Name", "Type", "Address"]);
    }

    #[test]
    fn test_untitled_empty_table() {
        let element = TreeTable::new(&["Type", "Module"]).to_element();
        let children: Vec<_> = element.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(children, ["ColumnsConfig", "Rows"]);
    }
}
