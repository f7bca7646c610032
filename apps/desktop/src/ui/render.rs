//! Rendering - draws an [`InventoryView`] into a frame
//!
//! Pure functions of the view state; no I/O.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::state::{EditDialog, ExportPrompt, Focus, InventoryView, Notice, NoticeLevel};

const ACCENT: Color = Color::Cyan;
const MARKED: Color = Color::Yellow;
const DIM: Color = Color::DarkGray;

const KEY_HINTS: &str = "Tab focus · Enter add/search/edit · Space mark · Del delete · \
                         Ctrl-R show all · Ctrl-E export · Ctrl-Q quit";

/// Render the whole screen
pub fn render(frame: &mut Frame, view: &InventoryView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Add form
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Total
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view);
    render_form(frame, chunks[1], view);
    render_input(
        frame,
        chunks[2],
        "Search",
        &view.query,
        view.focus == Focus::Search,
    );
    render_table(frame, chunks[3], view);
    render_total(frame, chunks[4], view);
    render_footer(frame, chunks[5], view);

    // Modals, lowest precedence first so the notice ends up on top
    if let Some(prompt) = &view.export {
        render_export(frame, prompt);
    }
    if let Some(edit) = &view.edit {
        render_edit(frame, edit);
    }
    if let Some(notice) = &view.notice {
        render_notice(frame, notice);
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &InventoryView) {
    let title = Paragraph::new(Line::from(Span::styled(
        view.config.store_name.as_str(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_form(frame: &mut Frame, area: Rect, view: &InventoryView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let fields = [
        ("Name", &view.form.name, Focus::Name),
        ("Quantity", &view.form.quantity, Focus::Quantity),
        ("Price", &view.form.price, Focus::Price),
    ];
    for (column, (label, text, focus)) in columns.iter().zip(fields) {
        render_input(frame, *column, label, text, view.focus == focus);
    }
}

/// Single-line text box; the focused one gets a caret and accent border
fn render_input(frame: &mut Frame, area: Rect, label: &str, text: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(DIM)
    };
    let content = if focused {
        format!("{}▏", text)
    } else {
        text.to_string()
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(label.to_string()),
    );
    frame.render_widget(input, area);
}

fn render_table(frame: &mut Frame, area: Rect, view: &InventoryView) {
    let header = Row::new(["", "ID", "Name", "Quantity", "Price"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view.rows.iter().map(|m| {
        let marked = view.is_marked(m.id);
        let style = if marked {
            Style::default().fg(MARKED)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(if marked { "✓" } else { " " }),
            Cell::from(m.id.to_string()),
            Cell::from(m.name.clone()),
            Cell::from(m.quantity.to_string()),
            Cell::from(format!("{:.2}", m.price)),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(2),
        Constraint::Length(6),
        Constraint::Min(20),
        Constraint::Length(10),
        Constraint::Length(12),
    ];

    let border = if view.focus == Focus::Table {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(DIM)
    };
    let title = format!("Medicines ({})", view.rows.len());

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if !view.rows.is_empty() {
        state.select(Some(view.cursor));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_total(frame: &mut Frame, area: Rect, view: &InventoryView) {
    let line = Line::from(vec![
        Span::raw(" Total Stock Value: "),
        Span::styled(
            view.total_display(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &InventoryView) {
    let text = if view.status.is_empty() {
        KEY_HINTS.to_string()
    } else {
        format!("{}  |  {}", view.status, KEY_HINTS)
    };
    let footer = Paragraph::new(Span::styled(text, Style::default().fg(DIM)));
    frame.render_widget(footer, area);
}

fn render_edit(frame: &mut Frame, edit: &EditDialog) {
    let area = centered_rect(60, 13, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(format!("Edit Medicine #{}", edit.id));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    let fields = [
        ("Name", &edit.form.name),
        ("Quantity", &edit.form.quantity),
        ("Price", &edit.form.price),
    ];
    for (index, (label, text)) in fields.into_iter().enumerate() {
        render_input(frame, rows[index], label, text, edit.field == index);
    }

    let hint = Paragraph::new(Span::styled(
        "Enter save · Tab next field · Esc cancel",
        Style::default().fg(DIM),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hint, rows[3]);
}

fn render_export(frame: &mut Frame, prompt: &ExportPrompt) {
    let area = centered_rect(60, 6, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title("Export to CSV");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    render_input(frame, rows[0], "File", &prompt.input, true);
    let hint = Paragraph::new(Span::styled(
        "Enter export · empty path or Esc cancels",
        Style::default().fg(DIM),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hint, rows[1]);
}

fn render_notice(frame: &mut Frame, notice: &Notice) {
    let color = match notice.level {
        NoticeLevel::Info => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    };

    let area = centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let body = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(DIM))),
    ];
    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(notice.title.as_str()),
        );
    frame.render_widget(paragraph, area);
}

/// Rect of `percent_x` width and `height` rows, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;
    use pharmacy_core::Medicine;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(view: &InventoryView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn sample_view() -> InventoryView {
        let mut view = InventoryView::new(ConfigState::default());
        view.rows = vec![Medicine {
            id: 1,
            name: "Paracetamol".to_string(),
            quantity: 100,
            price: 2.5,
        }];
        view.total_value = 250.0;
        view
    }

    #[test]
    fn test_renders_rows_and_total() {
        let text = screen_text(&sample_view());
        assert!(text.contains("Pharmacy Management System"));
        assert!(text.contains("Paracetamol"));
        assert!(text.contains("2.50"));
        assert!(text.contains("₹250.00"));
    }

    #[test]
    fn test_renders_notice_on_top() {
        let mut view = sample_view();
        view.notice = Some(Notice::warning("Select an item to delete."));
        let text = screen_text(&view);
        assert!(text.contains("Warning"));
        assert!(text.contains("Select an item to delete."));
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = centered_rect(60, 7, area);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.width, 60);
        assert!(rect.x >= 19 && rect.y >= 11);
    }
}
