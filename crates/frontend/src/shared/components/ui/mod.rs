pub mod checkbox;
pub mod custom_select;
pub mod input;
pub mod multi_file_input;
pub mod select;

pub use checkbox::CustomCheckbox;
pub use custom_select::CustomSelect;
pub use input::Input;
pub use multi_file_input::MultiFileInput;
pub use select::DropdownInput;
