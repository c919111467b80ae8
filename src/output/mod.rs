//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_board, print_commit, print_error, print_rack, print_status};
