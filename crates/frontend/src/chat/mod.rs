//! Assistant chat widget (MVVM Standard)
//!
//! Structure:
//! - history.rs: persisted message log and its transitions
//! - model.rs: webhook call and response interpretation
//! - view_model.rs: ChatVm with RwSignals
//! - view.rs: Main component ChatWidget

pub mod history;
pub mod model;
mod view;
mod view_model;

pub use view::ChatWidget;
pub use view_model::ChatVm;
