//! Binary entry point for `cover-rename`.

use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = cover_rename::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
