//! Output module for console reporting.

pub mod console;

pub use console::{
    print_banner, print_config_summary, print_download_summary, print_error,
    print_extraction_summary, print_info, print_success, print_warning,
};
