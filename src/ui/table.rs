//! Plain-text table rendering with box-drawing borders.
//!
//! Column widths are measured in terminal cells, so accented player names
//! and wide characters line up.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    title: Option<String>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_columns(mut self, headers: &[&str]) -> Self {
        self.headers = headers.iter().map(|h| h.to_string()).collect();
        self
    }

    /// Appends a row. Short rows are padded with empty cells; extra cells
    /// beyond the header count are dropped.
    pub fn add_row(&mut self, cells: Vec<String>) {
        let mut cells = cells;
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn border(widths: &[usize], left: char, fill: char, joint: char, right: char) -> String {
        let inner: Vec<String> = widths
            .iter()
            .map(|w| fill.to_string().repeat(w + 2))
            .collect();
        format!("{left}{}{right}", inner.join(&joint.to_string()))
    }

    fn line(cells: &[String], widths: &[usize], sep: char) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!(" {cell}{} ", " ".repeat(w - cell.width())))
            .collect();
        format!("{sep}{}{sep}", padded.join(&sep.to_string()))
    }

    /// Renders the table, title centered above it.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = Vec::with_capacity(self.rows.len() + 5);

        let total_width = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
        if let Some(title) = &self.title {
            let pad = total_width.saturating_sub(title.width()) / 2;
            out.push(format!("{}{title}", " ".repeat(pad)));
        }

        out.push(Self::border(&widths, '┏', '━', '┳', '┓'));
        out.push(Self::line(&self.headers, &widths, '┃'));
        out.push(Self::border(&widths, '┡', '━', '╇', '┩'));
        for row in &self.rows {
            out.push(Self::line(row, &widths, '│'));
        }
        out.push(Self::border(&widths, '└', '─', '┴', '┘'));

        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let mut table = Table::new("Teams").with_columns(&["Abbr", "Name"]);
        table.add_row(vec!["BOS".to_string(), "Boston Celtics".to_string()]);
        table.add_row(vec!["LAL".to_string(), "Lakers".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0].trim(), "Teams");
        assert_eq!(lines[1], "┏━━━━━━┳━━━━━━━━━━━━━━━━┓");
        assert_eq!(lines[2], "┃ Abbr ┃ Name           ┃");
        assert_eq!(lines[3], "┡━━━━━━╇━━━━━━━━━━━━━━━━┩");
        assert_eq!(lines[4], "│ BOS  │ Boston Celtics │");
        assert_eq!(lines[5], "│ LAL  │ Lakers         │");
        assert_eq!(lines[6], "└──────┴────────────────┘");
    }

    #[test]
    fn test_rows_are_padded_to_header_count() {
        let mut table = Table::new("t").with_columns(&["A", "B", "C"]);
        table.add_row(vec!["1".to_string()]);
        table.add_row(vec!["1".into(), "2".into(), "3".into(), "4".into()]);
        assert_eq!(table.rows()[0], vec!["1", "", ""]);
        assert_eq!(table.rows()[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_unicode_names_align() {
        let mut table = Table::new("Players").with_columns(&["Name"]);
        table.add_row(vec!["Nikola Jokić".to_string()]);
        table.add_row(vec!["Luka Doncic".to_string()]);

        let rendered = table.render();
        let widths: Vec<usize> = rendered
            .lines()
            .skip(1)
            .map(UnicodeWidthStr::width)
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_empty_table_renders_headers_only() {
        let table = Table::new("Nothing").with_columns(&["Col"]);
        assert!(table.is_empty());
        assert_eq!(table.render().lines().count(), 5);
    }
}
