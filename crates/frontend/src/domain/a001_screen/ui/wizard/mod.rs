//! Add Screen wizard.
//!
//! Pure parts (`model`, `validation`, `state`, `submit`) carry the logic and
//! the tests; `view_model`, `page` and `steps` bind them to Leptos.

pub mod gateway;
pub mod model;
pub mod page;
pub mod state;
pub mod steps;
pub mod submit;
pub mod validation;
pub mod view_model;

pub use page::AddScreenWizard;
