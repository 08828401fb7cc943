//! Raw-data preview: five rows at a time as a table.
//!
//! The first row (index 0) is skipped; paging starts at index 1, matching
//! the behavior this tool inherits. Offsets are bounds-checked so the pager
//! ends instead of serving empty pages.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use crate::data::{Dataset, Trip};

pub const PAGE_SIZE: usize = 5;
/// Inherited starting offset: the first data row is never shown.
pub const START_OFFSET: usize = 1;

/// Cursor over a dataset's rows in page-sized steps.
pub struct Pager<'a> {
    trips: &'a [Trip],
    offset: usize,
}

impl<'a> Pager<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            trips: &dataset.trips,
            offset: START_OFFSET,
        }
    }

    /// The next batch of up to `PAGE_SIZE` rows, advancing the cursor.
    /// `None` once the data is exhausted.
    pub fn next_page(&mut self) -> Option<&'a [Trip]> {
        if self.offset >= self.trips.len() {
            return None;
        }
        let end = usize::min(self.offset + PAGE_SIZE, self.trips.len());
        let page = &self.trips[self.offset..end];
        self.offset = end;
        Some(page)
    }

    pub fn has_more(&self) -> bool {
        self.offset < self.trips.len()
    }
}

/// Render one batch for display. Gender/Birth Year columns appear only when
/// the source file carried them.
pub fn render_page(page: &[Trip], has_gender: bool, has_birth_year: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        "Start Time",
        "End Time",
        "Duration (s)",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if has_gender {
        header.push("Gender");
    }
    if has_birth_year {
        header.push("Birth Year");
    }
    table.set_header(header);

    for trip in page {
        let mut row = vec![
            trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            trip.end_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            trip.duration_seconds.to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone(),
        ];
        if has_gender {
            row.push(trip.gender.clone().unwrap_or_default());
        }
        if has_birth_year {
            row.push(
                trip.birth_year
                    .map(|year| year.to_string())
                    .unwrap_or_default(),
            );
        }
        table.add_row(row);
    }

    table.to_string()
}
