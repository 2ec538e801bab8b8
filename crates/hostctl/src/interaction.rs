//! Terminal prompts and progress output for the deletion workflow.

use std::time::Duration;

use console::{Term, style};
use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use hostctl_core::{Interaction, InteractionError};

/// [`Interaction`] on the attached terminal.
pub struct TerminalInteraction {
    term: Term,
    theme: ColorfulTheme,
    spinner: Option<ProgressBar>,
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
            spinner: None,
        }
    }

    /// Stop a running spinner without marking it done.
    pub fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon();
        }
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_failed(e: dialoguer::Error) -> InteractionError {
    InteractionError::PromptFailed {
        message: e.to_string(),
    }
}

impl Interaction for TerminalInteraction {
    fn confirm(&mut self, prompt: &str, default: &str) -> Result<String, InteractionError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .show_default(false)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_failed)
    }

    fn select_many(
        &mut self,
        prompt: &str,
        items: &[String],
        page_size: usize,
    ) -> Result<Vec<usize>, InteractionError> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .max_length(page_size.max(1))
            .interact()
            .map_err(prompt_failed)
    }

    fn terminal_rows(&self) -> Option<usize> {
        let (rows, _cols) = self.term.size_checked()?;
        debug!(event = "cli.terminal.size_detected", rows = rows);
        Some(usize::from(rows))
    }

    fn report_start(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(spinner_style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn report_done(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            let message = spinner.message();
            spinner.finish_with_message(format!("{}... {}", message, style("done").green()));
        }
    }

    fn log(&mut self, message: &str) {
        println!("{}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}", style(message).red());
    }

    fn terminate(&mut self, code: i32) {
        self.abandon();
        std::process::exit(code);
    }
}
