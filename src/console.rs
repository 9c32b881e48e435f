//! Terminal implementation of [`Prompt`].

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use freshcrawl_core::{CrawlError, Prompt};

/// Prompt backed by stdout and stdin.
#[derive(Debug, Default)]
pub struct Console;

impl Prompt for Console {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn ask(&mut self, question: &str) -> Result<String, CrawlError> {
        print_question(question)?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| CrawlError::io("<stdin>", e))?;
        if read == 0 {
            return Err(CrawlError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask_secret(&mut self, question: &str) -> Result<String, CrawlError> {
        // Piped input cannot be switched to raw mode.
        if !io::stdin().is_terminal() {
            return self.ask(question);
        }

        print_question(question)?;
        terminal::enable_raw_mode().map_err(|e| CrawlError::io("<terminal>", e))?;
        let secret = read_hidden();
        let restored = terminal::disable_raw_mode();
        println!();

        restored.map_err(|e| CrawlError::io("<terminal>", e))?;
        secret
    }
}

fn print_question(question: &str) -> Result<(), CrawlError> {
    let mut stdout = io::stdout();
    write!(stdout, "{question}")
        .and_then(|()| stdout.flush())
        .map_err(|e| CrawlError::io("<stdout>", e))
}

/// Collect key presses until Enter without echoing them.
fn read_hidden() -> Result<String, CrawlError> {
    let mut secret = String::new();

    loop {
        let Event::Key(key) = event::read().map_err(|e| CrawlError::io("<terminal>", e))? else {
            continue;
        };
        if !matches!(key.kind, KeyEventKind::Press) {
            continue;
        }

        match key.code {
            KeyCode::Enter => return Ok(secret),
            KeyCode::Esc => return Err(CrawlError::InputClosed),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(CrawlError::InputClosed);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                secret.clear();
            }
            KeyCode::Backspace => {
                secret.pop();
            }
            KeyCode::Char(c) => secret.push(c),
            _ => {}
        }
    }
}
