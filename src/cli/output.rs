use colored::Colorize;
use serde::Serialize;

/// Print a transformed text exactly, for piping.
pub fn result(text: &str) {
    println!("{text}");
}

/// Print any serializable value as a single JSON line.
pub fn json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{line}"),
        Err(e) => error(&format!("Error: failed to serialize output: {e}")),
    }
}

/// Print a warning message. Goes to stderr so stdout stays clean.
pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    println!("\n{}", msg.bold());
}
