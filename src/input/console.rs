use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use crate::core::library::{LibraryError, LibraryResult};

// Console is the only place the desk touches the terminal.
pub trait Console {
    // shows the prompt and blocks until one line of text arrives
    fn read_line(&mut self, prompt: &str) -> LibraryResult<String>;

    fn write_line(&mut self, text: &str);
}

#[derive(Debug, Default)]
pub struct StdConsole {}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> LibraryResult<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(LibraryError::runtime("input stream closed", Some("eof".to_string())));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, text: &str) {
        println!("{}", text);
    }
}

// ScriptedConsole answers prompts from a fixed list of lines and keeps what the
// desk printed, for driving screens without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Self {
        Self {
            lines: lines.into_iter().map(str::to_string).collect(),
            prompts: vec![],
            output: vec![],
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.lines.push_back(line.to_string());
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> LibraryResult<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or_else(|| LibraryError::runtime(
            format!("no scripted input left for prompt {:?}", prompt).as_str(), Some("eof".to_string())))
    }

    fn write_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
