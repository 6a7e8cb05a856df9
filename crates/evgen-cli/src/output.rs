//! Styled terminal output for evgen.
//!
//! Status lines carry a colored tag (`[OK]`, `[WARN]`, `[ERROR]`, `[INFO]`);
//! errors go to stderr. `--dry-run` dumps each rendered file under its path
//! with [`print_file`].

use console::style;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a warning message prefixed with yellow `[WARN]`.
pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

/// Print an error message prefixed with red `[ERROR]`.
pub fn print_error(text: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), text);
}

/// Print an informational line prefixed with dimmed `[INFO]`.
pub fn print_info(text: &str) {
    println!("{} {}", style("[INFO]").dim(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print a generated file's path and contents between separator rules.
pub fn print_file(path: &str, contents: &str) {
    println!("\n{}", style(path).bold());
    println!("{}", style("-".repeat(path.len())).dim());
    print!("{contents}");
    if !contents.ends_with('\n') {
        println!();
    }
}
