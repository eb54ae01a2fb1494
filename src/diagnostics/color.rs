pub fn red(s: &str) -> String { format!("\x1b[31m{}\x1b[0m", s) }
pub fn blue(s: &str) -> String { format!("\x1b[34m{}\x1b[0m", s) }
pub fn bold(s: &str) -> String { format!("\x1b[1m{}\x1b[0m", s) }

pub const FAIL_MARKER: &str = "--->";
pub const BLANK_MARKER: &str = "    ";

pub fn marker(failing: bool, colored: bool) -> String {
    match (failing, colored) {
        (true, true) => bold(&red(FAIL_MARKER)),
        (true, false) => FAIL_MARKER.to_string(),
        (false, _) => BLANK_MARKER.to_string(),
    }
}

pub fn location(path: &str, line: usize, function: &str, colored: bool) -> String {
    let text = format!("in {}:{} in {}()", path, line, function);
    if colored { blue(&text) } else { text }
}
