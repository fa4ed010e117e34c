pub mod console;

use crate::core::library::LibraryResult;
use crate::input::console::Console;

pub fn is_int(text: &str) -> bool {
    parse_int(text).is_some()
}

pub fn is_float(text: &str) -> bool {
    parse_float(text).is_some()
}

fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

// Re-prompts until parse accepts the line. Only console failures are errors.
fn read_valid<C, T, F>(console: &mut C, prompt: &str, hint: &str, parse: F) -> LibraryResult<T>
    where C: Console + ?Sized, F: Fn(&str) -> Option<T> {
    loop {
        let line = console.read_line(prompt)?;
        match parse(line.as_str()) {
            Some(value) => return Ok(value),
            None => console.write_line(hint),
        }
    }
}

pub fn read_string<C: Console + ?Sized>(console: &mut C, prompt: &str) -> LibraryResult<String> {
    Ok(console.read_line(prompt)?.trim().to_string())
}

pub fn read_integer<C: Console + ?Sized>(console: &mut C, prompt: &str) -> LibraryResult<i64> {
    read_valid(console, prompt, "Please enter a whole number.", parse_int)
}

pub fn read_float<C: Console + ?Sized>(console: &mut C, prompt: &str) -> LibraryResult<f64> {
    read_valid(console, prompt, "Please enter a number.", parse_float)
}

pub fn read_integer_range<C: Console + ?Sized>(console: &mut C, prompt: &str,
                                                lo: i64, hi: i64) -> LibraryResult<i64> {
    let hint = if hi == i64::MAX {
        format!("Please enter a whole number of at least {}.", lo)
    } else {
        format!("Please enter a whole number between {} and {}.", lo, hi)
    };
    read_valid(console, prompt, hint.as_str(),
               |text| parse_int(text).filter(|n| (lo..=hi).contains(n)))
}

pub fn read_float_range<C: Console + ?Sized>(console: &mut C, prompt: &str,
                                              lo: f64, hi: f64) -> LibraryResult<f64> {
    let hint = format!("Please enter a number between {} and {}.", lo, hi);
    read_valid(console, prompt, hint.as_str(),
               |text| parse_float(text).filter(|n| *n >= lo && *n <= hi))
}

// y or n in either case; true means yes
pub fn read_bool<C: Console + ?Sized>(console: &mut C, prompt: &str) -> LibraryResult<bool> {
    read_valid(console, prompt, "Please enter y or n.", parse_bool)
}
