//! Interactive prompts: the filter collector and y/n confirmations.
//!
//! All prompts block on stdin and loop until a valid answer arrives; no
//! input here is ever fatal. Parsing is delegated to the vocabulary types so
//! the validation rules stay testable without a terminal.

use anyhow::Result;
use colored::Colorize;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input};

use crate::formatting::FormattingConfig;
use crate::vocab::{City, Day, FilterMode, FilterSelection, Month};

pub struct Prompter {
    theme: Box<dyn Theme>,
}

impl Prompter {
    pub fn new(formatting: FormattingConfig) -> Self {
        let theme: Box<dyn Theme> = if formatting.color.should_use_color() {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }

    /// Collect a validated (city, month, day) triple. `None` month/day means
    /// the user chose not to filter that dimension.
    pub fn collect_filters(&self) -> Result<FilterSelection> {
        let city = self.ask(
            "Which city would you like to explore: New York, Chicago or Washington?",
            "You only have 3 choices: New York, Chicago or Washington",
            City::parse,
        )?;

        let mode = self.ask(
            "Filter the data by month, day, both, or none?",
            "Maybe you made a typo. Please enter month, day, both or none",
            FilterMode::parse,
        )?;

        let month = if mode.wants_month() {
            Some(self.ask(
                "Which month would you like to filter by: January - June?",
                "Please enter a month between January and June",
                Month::parse,
            )?)
        } else {
            None
        };

        let day = if mode.wants_day() {
            Some(self.ask(
                "Which day of the week do you want to filter by: Sunday - Saturday?",
                "Sorry, I didn't get that. Please enter a full day name",
                Day::parse,
            )?)
        } else {
            None
        };

        Ok(FilterSelection { city, month, day })
    }

    /// A yes/no question. Invalid input re-prompts without side effects.
    pub fn confirm(&self, question: &str) -> Result<bool> {
        let answer = Confirm::with_theme(self.theme.as_ref())
            .with_prompt(question)
            .interact()?;
        Ok(answer)
    }

    /// Loop-prompt until `parse` accepts the input, printing the corrective
    /// message on each miss.
    fn ask<T>(
        &self,
        question: &str,
        corrective: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            let raw: String = Input::with_theme(self.theme.as_ref())
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()?;
            match parse(&raw) {
                Some(value) => return Ok(value),
                None => println!("{}", corrective.yellow()),
            }
        }
    }
}
