//! Knowledge base upload form (MVVM Standard)
//!
//! Structure:
//! - model.rs: validation and webhook call
//! - view_model.rs: UploadFormVm with RwSignals
//! - view.rs: Main component UploadForm

pub mod model;
mod view;
mod view_model;

pub use view::UploadForm;
pub use view_model::UploadFormVm;
