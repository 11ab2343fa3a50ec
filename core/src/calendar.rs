// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Month grid of per-day occupancy for one apartment.
//!
//! [`build_calendar`] lays a month out as a sequence of cells the way a wall
//! calendar does: a few empty cells so that the 1st lands under its weekday
//! column, then one cell per day. Each day cell tells which guest, if any,
//! occupies the selected apartment and whether the day is the guest's
//! check-in, check-out or a day in between.

use jiff::ToSpan;
use jiff::civil::{Date, Weekday};
use uuid::Uuid;

use crate::{Apartment, Guest};

/// Returns the first day of the month containing `date`.
pub fn first_of_month(date: Date) -> Date {
    date.first_of_month()
}

/// Moves `date` by whole months and returns the first day of that month.
pub fn shift_month(date: Date, months: i32) -> Date {
    date.first_of_month().saturating_add(months.months())
}

/// Number of padding cells before the 1st of the month, in `0..=6`.
pub fn weekday_offset(month: Date, week_start: Weekday) -> usize {
    let first = month.first_of_month().weekday().to_sunday_zero_offset();
    let start = week_start.to_sunday_zero_offset();
    (first - start).rem_euclid(7) as usize
}

/// The seven weekdays in column order for the given week start.
pub fn weekdays_from(week_start: Weekday) -> [Weekday; 7] {
    let mut days = [week_start; 7];
    for i in 1..7 {
        days[i] = days[i - 1].next();
    }
    days
}

/// Builds the cells of the month containing `month`.
///
/// Without a selected apartment every day is unoccupied. When several guests
/// overlap a day on the selected apartment, the first one in `guests` order is
/// reported and [`DayCell::overlapping`] counts all of them.
pub fn build_calendar<'a>(
    month: Date,
    guests: &'a [Guest],
    selected: Option<&Apartment>,
    week_start: Weekday,
) -> CalendarDays<'a> {
    let first = month.first_of_month();
    CalendarDays {
        first,
        guests,
        apartment_id: selected.map(|a| a.id),
        week_start,
        padding: weekday_offset(first, week_start),
        day: 1,
        days_in_month: first.days_in_month(),
    }
}

/// Lazy iterator over the cells of one month, see [`build_calendar`].
#[derive(Debug, Clone)]
pub struct CalendarDays<'a> {
    first: Date,
    guests: &'a [Guest],
    apartment_id: Option<Uuid>,
    week_start: Weekday,
    padding: usize,
    day: i8,
    days_in_month: i8,
}

impl<'a> CalendarDays<'a> {
    /// The weekday of the first grid column.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Column labels in grid order, matching the padding of the cells.
    pub fn weekdays(&self) -> [Weekday; 7] {
        weekdays_from(self.week_start)
    }

    fn cell(&self, date: Date) -> DayCell<'a> {
        let Some(apartment_id) = self.apartment_id else {
            return DayCell::empty(date);
        };

        let mut candidates = self
            .guests
            .iter()
            .filter(|g| g.is_booked_at(apartment_id) && g.covers(date));

        let Some(guest) = candidates.next() else {
            return DayCell::empty(date);
        };

        let (check_in, check_out) = guest.stay_dates();
        DayCell {
            date,
            guest: Some(guest),
            is_check_in: date == check_in,
            is_check_out: date == check_out,
            is_stay: check_in < date && date < check_out,
            overlapping: 1 + candidates.count(),
        }
    }
}

impl<'a> Iterator for CalendarDays<'a> {
    type Item = CalendarDay<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.padding > 0 {
            self.padding -= 1;
            return Some(CalendarDay::Padding);
        }

        if self.day > self.days_in_month {
            return None;
        }

        let date = jiff::civil::date(self.first.year(), self.first.month(), self.day);
        self.day += 1;
        Some(CalendarDay::Day(self.cell(date)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let days = (self.days_in_month - self.day + 1).max(0) as usize;
        let len = self.padding + days;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CalendarDays<'_> {}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarDay<'a> {
    /// Empty cell before the 1st of the month.
    Padding,

    /// A day of the month.
    Day(DayCell<'a>),
}

impl<'a> CalendarDay<'a> {
    /// The day cell, or `None` for padding.
    pub fn as_day(&self) -> Option<&DayCell<'a>> {
        match self {
            CalendarDay::Padding => None,
            CalendarDay::Day(cell) => Some(cell),
        }
    }
}

/// Occupancy of one day for the selected apartment.
///
/// At most one of `is_check_in`, `is_stay` and `is_check_out` is set, except
/// for a single-day stay which is both check-in and check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub date: Date,

    /// The occupying guest, if any.
    pub guest: Option<&'a Guest>,

    pub is_check_in: bool,
    pub is_check_out: bool,

    /// Strictly between check-in and check-out.
    pub is_stay: bool,

    /// How many bookings cover this day, `0` when unoccupied.
    pub overlapping: usize,
}

impl DayCell<'_> {
    fn empty(date: Date) -> Self {
        Self {
            date,
            guest: None,
            is_check_in: false,
            is_check_out: false,
            is_stay: false,
            overlapping: 0,
        }
    }

    /// Whether any guest occupies the day.
    pub fn is_occupied(&self) -> bool {
        self.guest.is_some()
    }

    /// Whether more than one booking covers the day.
    pub fn is_double_booked(&self) -> bool {
        self.overlapping > 1
    }
}

/// Two bookings of the same apartment whose stays share at least one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleBooking<'a> {
    pub first: &'a Guest,
    pub second: &'a Guest,

    /// First shared day.
    pub from: Date,

    /// Last shared day.
    pub until: Date,
}

/// Lists every pair of overlapping bookings for the apartment.
///
/// Pairs keep the order of `guests`: `first` always precedes `second`.
pub fn double_bookings(guests: &[Guest], apartment_id: Uuid) -> Vec<DoubleBooking<'_>> {
    let booked: Vec<&Guest> = guests
        .iter()
        .filter(|g| g.is_booked_at(apartment_id))
        .collect();

    let mut conflicts = Vec::new();
    for (i, first) in booked.iter().enumerate() {
        let (a_in, a_out) = first.stay_dates();
        for second in &booked[i + 1..] {
            let (b_in, b_out) = second.stay_dates();
            let from = a_in.max(b_in);
            let until = a_out.min(b_out);
            if from <= until {
                conflicts.push(DoubleBooking {
                    first,
                    second,
                    from,
                    until,
                });
            }
        }
    }
    conflicts
}
