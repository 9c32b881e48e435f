//! Interactive input capability.

use std::collections::VecDeque;

use crate::error::CrawlError;

/// Line-oriented user interaction.
///
/// The terminal implementation blocks on stdin; [`ScriptedPrompt`] replays a
/// fixed sequence of answers.
pub trait Prompt {
    /// Show a line of output to the user.
    fn say(&mut self, line: &str);

    /// Ask a question and wait for one line of input, without the newline.
    fn ask(&mut self, question: &str) -> Result<String, CrawlError>;

    /// Ask for a secret. Implementations should not echo the input.
    fn ask_secret(&mut self, question: &str) -> Result<String, CrawlError> {
        self.ask(question)
    }
}

/// A prompt that answers from a queue and records everything it was shown.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompt {
    /// Create a prompt that will answer with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Lines and questions shown so far.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Check whether any transcript line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Prompt for ScriptedPrompt {
    fn say(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn ask(&mut self, question: &str) -> Result<String, CrawlError> {
        self.transcript.push(question.to_string());
        self.answers.pop_front().ok_or(CrawlError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_replays_answers() {
        let mut prompt = ScriptedPrompt::new(["1", ""]);
        prompt.say("[0] a");
        assert_eq!(prompt.ask("pick").unwrap(), "1");
        assert_eq!(prompt.ask_secret("password").unwrap(), "");
        assert!(matches!(prompt.ask("again"), Err(CrawlError::InputClosed)));
        assert!(prompt.saw("[0] a"));
        assert_eq!(prompt.transcript().len(), 4);
        assert_eq!(prompt.remaining(), 0);
    }
}
