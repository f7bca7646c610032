//! # Repository Module
//!
//! Database repository implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Command                                                               │
//! │       │                                                                 │
//! │       │  db.medicines().search("para")                                 │
//! │       ▼                                                                 │
//! │  MedicineRepository                                                    │
//! │  ├── create(&self, draft)                                              │
//! │  ├── list_all(&self) / search(&self, query)                            │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── update(&self, id, draft)                                          │
//! │  ├── delete(&self, ids)                                                │
//! │  └── total_value(&self)                                                │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod medicine;
