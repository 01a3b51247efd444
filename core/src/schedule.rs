//! Business-hour timestamp sequencing for one member's work day.
//!
//! RULE: one sequencer is scoped to exactly one team member's one day.
//! It is never shared or reused across days or members.
//!
//! The first call lands on 08:00:00 exactly. Each later call advances
//! by a random 15–45 minute increment, then applies, in order:
//!   1. A time landing in the 12:00–13:00 lunch hour is pushed past it,
//!      preserving the overshoot into the hour.
//!   2. A forced after-hours request while still before 18:00 jumps to
//!      18:00 plus a random 15–60 minute offset.
//!   3. Without the after-hours flag, times past 18:00 clamp to 18:00.
//!   4. With the flag, times past 22:00 clamp to 22:00.

use crate::rng::SimRng;
use crate::types::Day;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

pub struct TimestampSequencer {
    current: NaiveDateTime,
    lunch_start: NaiveDateTime,
    lunch_end: NaiveDateTime,
    end_of_day: NaiveDateTime,
    after_end: NaiveDateTime,
    after_hours: bool,
    first: bool,
}

impl TimestampSequencer {
    /// Sequencer for `day` (1-based), anchored to today plus the day
    /// offset.
    pub fn new(day: Day, after_hours: bool) -> Self {
        let base = Local::now().date_naive() + Duration::days(day as i64 - 1);
        Self::anchored(base, after_hours)
    }

    /// Sequencer anchored to an explicit date.
    pub fn anchored(date: NaiveDate, after_hours: bool) -> Self {
        let at = |h, m| date.and_time(NaiveTime::from_hms_opt(h, m, 0).expect("valid time"));
        Self {
            current: at(8, 0),
            lunch_start: at(12, 0),
            lunch_end: at(13, 0),
            end_of_day: at(18, 0),
            after_end: at(22, 0),
            after_hours,
            first: true,
        }
    }

    /// Next timestamp, rendered as `YYYY-MM-DD HH:MM:SS`.
    pub fn next(&mut self, rng: &mut SimRng) -> String {
        self.step(rng, false)
    }

    /// Next timestamp, forced past end of business if still inside it.
    pub fn next_after_hours(&mut self, rng: &mut SimRng) -> String {
        self.step(rng, true)
    }

    /// Current internal time, for callers deciding whether an extra
    /// after-hours entry is needed.
    pub fn current(&self) -> NaiveDateTime {
        self.current
    }

    /// Whether the sequencer has not yet moved past end of business.
    pub fn within_business_hours(&self) -> bool {
        self.current <= self.end_of_day
    }

    fn step(&mut self, rng: &mut SimRng, force_after_hours: bool) -> String {
        if self.first {
            self.first = false;
            return self.render();
        }

        self.current += Duration::minutes(rng.range_inclusive(15, 45) as i64);

        // Lunch hour is skipped, preserving the overshoot past noon.
        if self.current >= self.lunch_start && self.current < self.lunch_end {
            self.current = self.lunch_end + (self.current - self.lunch_start);
        }

        if force_after_hours && self.current < self.end_of_day {
            self.current = self.end_of_day + Duration::minutes(rng.range_inclusive(15, 60) as i64);
        }
        if !self.after_hours && self.current > self.end_of_day {
            self.current = self.end_of_day;
        }
        if self.after_hours && self.current > self.after_end {
            self.current = self.after_end;
        }

        self.render()
    }

    fn render(&self) -> String {
        self.current.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date")
    }

    #[test]
    fn first_call_is_start_of_day() {
        let mut seq = TimestampSequencer::anchored(anchor(), false);
        let mut rng = SimRng::new(7, 0);
        assert_eq!(seq.next(&mut rng), "2025-03-03 08:00:00");
    }

    #[test]
    fn timestamps_are_monotonic_and_skip_lunch() {
        let mut seq = TimestampSequencer::anchored(anchor(), false);
        let mut rng = SimRng::new(99, 0);
        let lunch_start = NaiveTime::from_hms_opt(12, 0, 0).expect("valid time");
        let lunch_end = NaiveTime::from_hms_opt(13, 0, 0).expect("valid time");

        let mut previous = seq.current();
        for _ in 0..200 {
            seq.next(&mut rng);
            let now = seq.current();
            assert!(now >= previous, "time went backwards: {previous} -> {now}");
            let t = now.time();
            assert!(
                !(t >= lunch_start && t < lunch_end),
                "timestamp landed in lunch hour: {now}"
            );
            previous = now;
        }
    }

    #[test]
    fn business_day_clamps_at_six_pm() {
        let mut seq = TimestampSequencer::anchored(anchor(), false);
        let mut rng = SimRng::new(3, 0);
        for _ in 0..50 {
            seq.next(&mut rng);
        }
        assert_eq!(seq.current().time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn after_hours_day_clamps_at_ten_pm() {
        let mut seq = TimestampSequencer::anchored(anchor(), true);
        let mut rng = SimRng::new(3, 0);
        for _ in 0..80 {
            seq.next(&mut rng);
        }
        assert_eq!(seq.current().time(), NaiveTime::from_hms_opt(22, 0, 0).unwrap());
    }

    #[test]
    fn forced_entry_jumps_past_end_of_business() {
        let mut seq = TimestampSequencer::anchored(anchor(), true);
        let mut rng = SimRng::new(11, 0);
        seq.next(&mut rng); // 08:00
        seq.next_after_hours(&mut rng);
        let t = seq.current().time();
        assert!(
            t > NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            "forced entry stayed inside business hours: {t}"
        );
    }
}
