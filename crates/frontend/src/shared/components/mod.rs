pub mod data_list;
pub mod multi_search_bar;
pub mod pagination_controls;
pub mod ui;

pub use data_list::DataList;
pub use multi_search_bar::MultiSearchBar;
pub use pagination_controls::PaginationControls;
