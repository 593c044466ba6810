//! Console output utilities.

use std::path::Path;

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Facebook Page Archiver                            ║
║     Posts and media extraction via the Graph API      ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(mode: &str, page_id: Option<&str>, destination: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Mode: {}", mode);
    if let Some(page_id) = page_id {
        println!("  Page: {}", page_id);
    }
    println!("  Destination: {}", destination);
    println!();
}

/// Final summary for an extraction run.
pub fn print_extraction_summary(kind: &str, count: usize, output: &Path) {
    println!();
    println!(
        "Process finished (number of {} extracted: {}). Check out your file at {}!",
        kind,
        style(count).green(),
        output.display()
    );
}

/// Final summary for a download run.
pub fn print_download_summary(count: u64, directory: &Path) {
    println!();
    println!(
        "Process finished (number of media files downloaded: {}). Check out your files at {}!",
        style(count).green(),
        directory.display()
    );
}
