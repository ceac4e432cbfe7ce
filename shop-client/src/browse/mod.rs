//! Product browsing
//!
//! [`BrowseController`] owns the page / filter / sort state of the product
//! list and reconciles asynchronous list responses into it. Presentation
//! code only reads [`BrowseController::result`] and dispatches operations.

mod controller;
mod state;

pub use controller::{BrowseController, FetchOutcome};
pub use state::{BrowseSnapshot, BrowseStatus, ErrorInfo};
