//! Operator interaction
//!
//! Everything the session shows or asks goes through [`Prompter`], so the
//! batch runner and command loop can be driven by a script in tests.

use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

use crate::error::Result;

/// Interaction channel with the operator
pub trait Prompter {
    /// Print one status line
    fn say(&mut self, line: &str);

    /// Free-text prompt with echo
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Masked prompt for passwords and tokens
    fn ask_secret(&mut self, prompt: &str) -> Result<String>;

    /// Single-choice menu; returns the index of the chosen item
    fn choose(&mut self, header: &str, prompt: &str, items: &[String]) -> Result<usize>;

    fn newline(&mut self) {
        self.say("");
    }

    /// Free-text prompt repeated until a non-blank answer is given
    fn ask_required(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
        }
    }

    /// Yes/no question, repeated until the answer starts with `y` or `n`
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let prompt = format!("{} [y/n]?", question.trim_end());
        loop {
            if let Some(answer) = parse_yes_no(&self.ask(&prompt)?) {
                return Ok(answer);
            }
        }
    }
}

/// Interpret a yes/no answer by its first character, case-insensitively
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim_start().chars().next() {
        Some('y' | 'Y') => Some(true),
        Some('n' | 'N') => Some(false),
        _ => None,
    }
}

/// Prompter backed by the real terminal
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String> {
        let secret = Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact()?;
        Ok(secret)
    }

    fn choose(&mut self, header: &str, prompt: &str, items: &[String]) -> Result<usize> {
        println!("{}", header);
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(selection)
    }
}

/// Prompter that replays queued answers and records everything shown.
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    choices: std::collections::VecDeque<usize>,
    /// Lines passed to `say`, in order
    pub output: Vec<String>,
    /// Prompts passed to `ask`/`ask_secret`, in order
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        colored::control::set_override(false);
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            choices: Default::default(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Queue menu selections returned by `choose`
    pub fn with_choices(mut self, choices: &[usize]) -> Self {
        self.choices.extend(choices.iter().copied());
        self
    }

    /// Whether any printed line contains `needle`
    pub fn printed(&self, needle: &str) -> bool {
        self.position(needle).is_some()
    }

    /// Index of the first printed line containing `needle`
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.output.iter().position(|line| line.contains(needle))
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            crate::error::Error::Prompt(format!("no scripted answer for '{}'", prompt))
        })
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.next_answer(prompt)
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String> {
        self.next_answer(prompt)
    }

    fn choose(&mut self, header: &str, _prompt: &str, items: &[String]) -> Result<usize> {
        self.output.push(header.to_string());
        let choice = self
            .choices
            .pop_front()
            .ok_or_else(|| crate::error::Error::Prompt("no scripted menu choice".to_string()))?;
        if choice >= items.len() {
            return Err(crate::error::Error::Prompt(format!(
                "menu choice {} out of range",
                choice
            )));
        }
        Ok(choice)
    }
}
