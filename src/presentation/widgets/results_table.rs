//! Calculation result panel.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap},
};

use crate::domain::{CalculationResult, format_quantity};

/// Table of packs needed for the last calculation.
pub struct ResultsTable<'a> {
    result: Option<&'a CalculationResult>,
}

impl<'a> ResultsTable<'a> {
    /// Panel for `result`, or the placeholder when there is none.
    #[must_use]
    pub const fn new(result: Option<&'a CalculationResult>) -> Self {
        Self { result }
    }

    fn totals_line(result: &CalculationResult) -> Line<'static> {
        let label = Style::default().fg(Color::Gray);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        Line::from(vec![
            Span::styled("Requested: ", label),
            Span::styled(format_quantity(result.amount()), value),
            Span::raw("   "),
            Span::styled("Packed: ", label),
            Span::styled(format_quantity(result.packed_total()), value),
        ])
    }
}

impl Widget for ResultsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .title(" Packs needed ");

        let inner = block.inner(area);
        block.render(area, buf);

        // A result without packs shows the same placeholder as no result.
        let Some(result) = self.result.filter(|result| !result.is_empty()) else {
            Paragraph::new("Enter an order amount and press Enter to calculate.")
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        };

        let [table_area, _, totals_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let header = Row::new(vec![Cell::from("Pack size"), Cell::from("Quantity")]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = result
            .packs()
            .iter()
            .map(|pack| {
                Row::new(vec![
                    Cell::from(format!("{} items", format_quantity(pack.size()))),
                    Cell::from(format_quantity(pack.count())),
                ])
            })
            .collect();

        let table = Table::new(rows, [Constraint::Fill(2), Constraint::Fill(1)])
            .header(header)
            .column_spacing(2);

        Widget::render(table, table_area, buf);

        Paragraph::new(Self::totals_line(result)).render(totals_area, buf);
    }
}
