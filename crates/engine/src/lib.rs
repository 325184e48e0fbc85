//! Tomeforge engine library.
//!
//! ## Structure
//!
//! - `forms/` - Field and form state tracking with debounced validation
//! - `use_cases/` - User story orchestration (content CRUD, stat rolls)
//! - `infrastructure/` - Ports, free-mode adapters, settings and logging
//! - `app` - Application composition and backend lifecycle
//! - `cli` - Commands behind the `tomeforge` binary

pub mod app;
pub mod cli;
pub mod forms;
pub mod infrastructure;
pub mod use_cases;

pub use app::{App, Backend, Mode};
