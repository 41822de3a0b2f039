//! Availability calendar and date-range selection.
//!
//! Availability is derived from booking records: a date is blocked
//! when it lies in the past or inside an active or upcoming rental of
//! the item. Past rentals do not block their dates.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::{Rental, RentalStatus};

/// Per-item availability snapshot, built from existing bookings.
#[derive(Clone, Debug)]
pub struct AvailabilityCalendar {
    today: NaiveDate,
    booked: BTreeSet<NaiveDate>,
}

impl AvailabilityCalendar {
    pub fn new(today: NaiveDate, rentals: &[Rental]) -> Self {
        let mut booked = BTreeSet::new();
        for rental in rentals {
            if rental.status == RentalStatus::Past {
                continue;
            }
            let mut day = rental.start_date;
            while day <= rental.end_date {
                booked.insert(day);
                day = day + Duration::days(1);
            }
        }
        Self { today, booked }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// A blocked date can be neither a range endpoint nor part of a
    /// confirmed booking.
    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        date < self.today || self.booked.contains(&date)
    }

    /// True when every day of the closed range is selectable.
    pub fn range_is_free(&self, start: NaiveDate, end: NaiveDate) -> bool {
        if start > end || start < self.today {
            return false;
        }
        self.booked.range(start..=end).next().is_none()
    }
}

/// One day of a calendar month view.
#[derive(Clone, Debug, Serialize)]
pub struct DaySlot {
    pub date: NaiveDate,
    pub available: bool,
}

/// Days of one calendar month with availability flags. Returns `None`
/// for an invalid year/month combination.
pub fn month_grid(
    calendar: &AvailabilityCalendar,
    year: i32,
    month: u32,
) -> Option<Vec<DaySlot>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let mut days = Vec::with_capacity(31);
    let mut day = first;
    while day.month() == month {
        days.push(DaySlot {
            date: day,
            available: !calendar.is_blocked(day),
        });
        day = day.succ_opt()?;
    }
    Some(days)
}

/// Click-driven start/end selection for the booking calendar.
///
/// The first valid click opens a range, the second closes it (swapping
/// endpoints when the second click lands before the first, so the
/// range is never inverted), and any further click starts over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRangeSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    hover: Option<NaiveDate>,
}

impl DateRangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// The selected range, once both endpoints are set.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Whole days between the endpoints; 0 while the range is open.
    pub fn duration_days(&self) -> i64 {
        self.range().map(|(s, e)| (e - s).num_days()).unwrap_or(0)
    }

    /// Apply a click. Clicks on blocked dates are ignored.
    pub fn select(&mut self, date: NaiveDate, calendar: &AvailabilityCalendar) {
        if calendar.is_blocked(date) {
            return;
        }
        self.hover = None;

        match (self.start, self.end) {
            (Some(start), None) if date > start => self.end = Some(date),
            (Some(start), None) if date < start => {
                // Clicked before the open start: the click becomes the
                // new start and the former start closes the range.
                self.start = Some(date);
                self.end = Some(start);
            }
            // Re-clicking the lone start, or clicking anywhere with a
            // complete range: restart from the clicked date.
            _ => {
                self.start = Some(date);
                self.end = None;
            }
        }
    }

    /// Record a hover while only the start is set. Display concern
    /// only; never affects the committed range.
    pub fn hover(&mut self, date: NaiveDate) {
        if self.start.is_some() && self.end.is_none() {
            self.hover = Some(date);
        }
    }

    /// Range the view should highlight, including the hover preview.
    pub fn preview(&self) -> Option<(NaiveDate, NaiveDate)> {
        if let Some(range) = self.range() {
            return Some(range);
        }
        match (self.start, self.hover) {
            (Some(start), Some(hover)) if hover >= start => Some((start, hover)),
            (Some(start), Some(hover)) => Some((hover, start)),
            (Some(start), None) => Some((start, start)),
            _ => None,
        }
    }
}
