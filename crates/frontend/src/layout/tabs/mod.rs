//! Tab management module
//!
//! - `page` wraps one tab's content and toggles its visibility
//! - `registry` maps tab.key to a view
//! - `tab_labels` holds tab keys and their titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
