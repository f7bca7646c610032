//! # Inventory View State
//!
//! Everything the inventory screen shows, plus the dispatcher that turns a
//! [`Command`] into one store call followed by one refresh.
//!
//! ## Screen Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InventoryView                                                          │
//! │                                                                         │
//! │  form ─────────── Name / Quantity / Price inputs                        │
//! │  query ────────── search bar text                                       │
//! │  rows ─────────── medicines currently listed                            │
//! │  cursor, marked ─ table position and rows marked for deletion           │
//! │  total_value ──── sum over the whole store                              │
//! │                                                                         │
//! │  Modals (at most one handles keys, in this order):                      │
//! │    notice  >  edit  >  export                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Marked rows are tracked by id. They are translated to an id list only
//! when `DeleteSelected` reaches the store, and pruned after every refresh
//! so a mark never outlives its row.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::commands::export::{default_export_path, export_csv, normalize_export_path};
use crate::commands::medicine::{
    add_medicine, delete_medicines, get_medicine, get_total_value, list_medicines,
    search_medicines, update_medicine,
};
use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use pharmacy_core::Medicine;

// =============================================================================
// Commands
// =============================================================================

/// A user action that reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert the medicine described by the form
    Add,
    /// Remove every marked row
    DeleteSelected,
    /// Filter the table by the search bar text
    Search,
    /// Clear the search and list everything
    ShowAll,
    /// Open the edit dialog for a medicine
    OpenEdit(i64),
    /// Save the open edit dialog
    SaveEdit,
    /// Write the CSV file named in the export prompt
    Export,
}

// =============================================================================
// Input State
// =============================================================================

/// Which part of the main screen receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Quantity,
    Price,
    Search,
    Table,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Name,
        Focus::Quantity,
        Focus::Price,
        Focus::Search,
        Focus::Table,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next section (Tab).
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Previous section (Shift-Tab).
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_form(self) -> bool {
        matches!(self, Focus::Name | Focus::Quantity | Focus::Price)
    }
}

/// The three medicine fields as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicineForm {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl MedicineForm {
    /// Pre-fills the form from a stored medicine.
    pub fn from_medicine(medicine: &Medicine) -> Self {
        MedicineForm {
            name: medicine.name.clone(),
            quantity: medicine.quantity.to_string(),
            price: medicine.price.to_string(),
        }
    }

    /// True when any field is blank.
    pub fn is_incomplete(&self) -> bool {
        [&self.name, &self.quantity, &self.price]
            .iter()
            .any(|field| field.trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = MedicineForm::default();
    }

    /// Field text by position (0 = name, 1 = quantity, 2 = price).
    pub fn field_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.name,
            1 => &mut self.quantity,
            _ => &mut self.price,
        }
    }
}

/// Modal for changing an existing medicine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialog {
    pub id: i64,
    pub form: MedicineForm,
    /// Active field (0 = name, 1 = quantity, 2 = price)
    pub field: usize,
}

impl EditDialog {
    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % 3;
    }

    pub fn prev_field(&mut self) {
        self.field = (self.field + 2) % 3;
    }

    pub fn active_text(&mut self) -> &mut String {
        self.form.field_mut(self.field)
    }
}

/// Modal asking where to write the CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPrompt {
    pub input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Blocking message box, dismissed with Enter or Esc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Warning,
            title: "Warning".to_string(),
            message: message.into(),
        }
    }

    pub fn error(err: &ApiError) -> Self {
        Notice {
            level: NoticeLevel::Error,
            title: err.code.title().to_string(),
            message: err.message.clone(),
        }
    }
}

// =============================================================================
// Inventory View
// =============================================================================

/// State of the inventory screen.
#[derive(Debug, Clone)]
pub struct InventoryView {
    pub config: ConfigState,
    pub rows: Vec<Medicine>,
    pub total_value: f64,
    pub form: MedicineForm,
    pub query: String,
    pub cursor: usize,
    pub marked: BTreeSet<i64>,
    pub focus: Focus,
    pub edit: Option<EditDialog>,
    pub export: Option<ExportPrompt>,
    pub notice: Option<Notice>,
    /// One-line message in the footer
    pub status: String,
}

impl InventoryView {
    pub fn new(config: ConfigState) -> Self {
        InventoryView {
            config,
            rows: Vec::new(),
            total_value: 0.0,
            form: MedicineForm::default(),
            query: String::new(),
            cursor: 0,
            marked: BTreeSet::new(),
            focus: Focus::default(),
            edit: None,
            export: None,
            notice: None,
            status: String::new(),
        }
    }

    /// Total stock value with the currency symbol.
    pub fn total_display(&self) -> String {
        self.config.format_currency(self.total_value)
    }

    /// Medicine under the table cursor.
    pub fn current(&self) -> Option<&Medicine> {
        self.rows.get(self.cursor)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.cursor = 0;
            return;
        }
        let last = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Marks or unmarks the row under the cursor.
    pub fn toggle_mark(&mut self) {
        if let Some(id) = self.current().map(|m| m.id) {
            if !self.marked.remove(&id) {
                self.marked.insert(id);
            }
        }
    }

    pub fn is_marked(&self, id: i64) -> bool {
        self.marked.contains(&id)
    }

    /// Opens the export prompt pre-filled with a dated file name.
    pub fn open_export(&mut self, today: NaiveDate) {
        self.export = Some(ExportPrompt {
            input: default_export_path(today),
        });
    }

    /// Reloads every medicine and the total.
    pub async fn refresh(&mut self, db: &DbState) {
        match list_medicines(db).await {
            Ok(rows) => self.set_rows(rows),
            Err(err) => self.fail(err),
        }
        self.reload_total(db).await;
    }

    /// Runs one command against the store and updates the screen.
    ///
    /// Failures never escape: they become a notice.
    pub async fn dispatch(&mut self, db: &DbState, command: Command) {
        debug!(command = ?command, "dispatch");

        match command {
            Command::Add => self.add(db).await,
            Command::DeleteSelected => self.delete_selected(db).await,
            Command::Search => self.search(db).await,
            Command::ShowAll => {
                self.query.clear();
                self.status = "Showing all medicines".to_string();
                self.refresh(db).await;
            }
            Command::OpenEdit(id) => self.open_edit(db, id).await,
            Command::SaveEdit => self.save_edit(db).await,
            Command::Export => self.export(db).await,
        }
    }

    async fn add(&mut self, db: &DbState) {
        if self.form.is_incomplete() {
            self.notice = Some(Notice::warning("All fields are required!"));
            return;
        }

        let result = add_medicine(db, &self.form.name, &self.form.quantity, &self.form.price).await;
        match result {
            Ok(medicine) => {
                self.status = format!("Added {}", medicine.name);
                self.form.clear();
                self.focus = Focus::Name;
                self.refresh(db).await;
            }
            Err(err) => self.fail(err),
        }
    }

    async fn delete_selected(&mut self, db: &DbState) {
        if self.marked.is_empty() {
            self.notice = Some(Notice::warning("Select an item to delete."));
            return;
        }

        let ids: Vec<i64> = self.marked.iter().copied().collect();
        match delete_medicines(db, &ids).await {
            Ok(removed) => {
                self.status = format!("Deleted {} medicine(s)", removed);
                self.marked.clear();
                self.refresh(db).await;
            }
            Err(err) => self.fail(err),
        }
    }

    async fn search(&mut self, db: &DbState) {
        match search_medicines(db, &self.query).await {
            Ok(rows) => {
                self.status = format!("{} result(s) for '{}'", rows.len(), self.query.trim());
                self.set_rows(rows);
            }
            Err(err) => self.fail(err),
        }
        self.reload_total(db).await;
    }

    async fn open_edit(&mut self, db: &DbState, id: i64) {
        match get_medicine(db, id).await {
            Ok(medicine) => {
                self.edit = Some(EditDialog {
                    id,
                    form: MedicineForm::from_medicine(&medicine),
                    field: 0,
                });
            }
            Err(err) => {
                self.fail(err);
                self.refresh(db).await;
            }
        }
    }

    async fn save_edit(&mut self, db: &DbState) {
        let Some(edit) = self.edit.as_ref() else {
            return;
        };

        let result =
            update_medicine(db, edit.id, &edit.form.name, &edit.form.quantity, &edit.form.price)
                .await;
        match result {
            Ok(medicine) => {
                self.edit = None;
                self.status = format!("Updated {}", medicine.name);
                self.refresh(db).await;
            }
            Err(err) if err.is_not_found() => {
                self.edit = None;
                self.fail(err);
                self.refresh(db).await;
            }
            // Validation failure keeps the dialog open for correction
            Err(err) => self.fail(err),
        }
    }

    async fn export(&mut self, db: &DbState) {
        let Some(prompt) = self.export.as_ref() else {
            return;
        };

        let Some(path) = normalize_export_path(&prompt.input) else {
            self.export = None;
            self.status = "Export cancelled".to_string();
            return;
        };

        match export_csv(db, &path).await {
            Ok(summary) => {
                self.export = None;
                self.status = format!("Exported {} row(s) to {}", summary.rows, summary.path.display());
                self.notice = Some(Notice::info("Data exported successfully!"));
            }
            Err(err) => self.fail(err),
        }
    }

    async fn reload_total(&mut self, db: &DbState) {
        match get_total_value(db).await {
            Ok(total) => self.total_value = total,
            Err(err) => self.fail(err),
        }
    }

    fn set_rows(&mut self, rows: Vec<Medicine>) {
        self.rows = rows;
        let rows = &self.rows;
        self.marked.retain(|id| rows.iter().any(|m| m.id == *id));
        self.move_cursor(0);
    }

    fn fail(&mut self, err: ApiError) {
        warn!(error = %err, "command failed");
        self.notice = Some(Notice::error(&err));
    }
}
