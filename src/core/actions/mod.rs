pub mod compute_field;
pub mod extract_field;
