//! Prompter that replays canned answers and records what was asked.

use std::collections::VecDeque;

use super::{PromptError, Prompter};

#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompter {
    inputs: VecDeque<String>,
    confirms: VecDeque<bool>,
    pub asked: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedPrompter {
    pub(crate) fn new(inputs: &[&str], confirms: &[bool]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| (*s).to_string()).collect(),
            confirms: confirms.iter().copied().collect(),
            asked: Vec::new(),
            notices: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.asked.push(prompt.to_string());
        self.inputs.pop_front().ok_or(PromptError::InputClosed)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        self.asked.push(prompt.to_string());
        self.confirms.pop_front().ok_or(PromptError::InputClosed)
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
