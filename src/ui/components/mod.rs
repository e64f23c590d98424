pub mod form;
pub mod picker;
pub mod professional_fields;
