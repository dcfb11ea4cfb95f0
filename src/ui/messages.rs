//! Status lines printed by the CLI and the store.
//! Errors go to stderr, everything else to stdout.

use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{CYAN}{BOLD}ℹ️{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}✅{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}⚠️{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}❌{RESET} {msg}");
}

/// Section title above a listing.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{CYAN}{BOLD}== {msg} =={RESET}");
}
