pub mod create;
pub mod form_fields;
