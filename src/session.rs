//! The interactive session loop.
//!
//! One iteration: collect filters, load the city file, offer raw previews
//! around filtering, print the four reports in fixed order, then offer a
//! restart. Nothing survives between iterations; every restart reloads from
//! disk.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;

use crate::data::{load_city, Dataset};
use crate::formatting::FormattingConfig;
use crate::pager::{render_page, Pager};
use crate::prompt::Prompter;
use crate::reports::{
    station_report, time_of_travel_report, trip_duration_report, user_report,
};
use crate::vocab::FilterSelection;

const SEPARATOR_WIDTH: usize = 40;

pub struct Session {
    data_dir: PathBuf,
    prompter: Prompter,
}

impl Session {
    pub fn new(data_dir: PathBuf, formatting: FormattingConfig) -> Self {
        Self {
            data_dir,
            prompter: Prompter::new(formatting),
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("Hello! Let's explore some US bikeshare data!");
        loop {
            self.run_once()?;
            if !self.prompter.confirm("Would you like to restart?")? {
                break;
            }
        }
        Ok(())
    }

    fn run_once(&self) -> Result<()> {
        let filters = self.prompter.collect_filters()?;
        separator();

        let (dataset, summary) = load_city(&self.data_dir, filters.city)?;
        if summary.rows_skipped > 0 {
            println!(
                "Note: {} of {} rows could not be parsed and were skipped.",
                summary.rows_skipped, summary.rows_read
            );
        }

        let preview_question = if filters.is_filtered() {
            "Would you like to see some raw data before we apply any filters?"
        } else {
            "Would you like to see some raw data?"
        };
        if self.prompter.confirm(preview_question)? {
            self.page_raw(&dataset)?;
        }

        let filtered = dataset.filter(filters.month, filters.day);

        if filters.is_filtered()
            && self.prompter.confirm(
                "Filters have been applied - would you like to see some of the filtered raw data?",
            )?
        {
            self.page_raw(&filtered)?;
        }

        self.print_report("Calculating The Most Frequent Times of Travel...", || {
            time_of_travel_report(&filtered, &filters)
        });
        self.print_report("Calculating The Most Popular Stations and Trip...", || {
            station_report(&filtered)
        });
        self.print_report("Calculating Trip Duration...", || {
            trip_duration_report(&filtered)
        });
        self.print_report("Calculating User Stats...", || user_report(&filtered));

        Ok(())
    }

    /// Show five rows at a time, asking between batches. Stops on 'n' or at
    /// the end of the data.
    fn page_raw(&self, dataset: &Dataset) -> Result<()> {
        let mut pager = Pager::new(dataset);
        let mut shown_any = false;

        while let Some(page) = pager.next_page() {
            shown_any = true;
            println!(
                "{}",
                render_page(page, dataset.has_gender, dataset.has_birth_year)
            );
            if !pager.has_more() {
                println!("That's all the data there is.");
                break;
            }
            if !self.prompter.confirm("Another five?")? {
                break;
            }
        }

        if !shown_any {
            println!("There is not enough data to preview.");
        }
        Ok(())
    }

    fn print_report(&self, title: &str, build: impl FnOnce() -> String) {
        let started = Instant::now();
        println!("\n{}\n", title.bold());
        let body = build();
        println!("{body}");
        println!(
            "\nThis took {:.4} seconds.",
            started.elapsed().as_secs_f64()
        );
        separator();
    }
}

fn separator() {
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}
