pub mod delete_entry;
pub mod get_day;
pub mod log_entry;
pub mod log_estimate;
