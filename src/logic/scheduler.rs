//! Time and field assignment for generated matches.
//!
//! Matches run on one serial timeline starting at `start_time` on the start
//! date. Fields are rotated onto that timeline as labels; two matches on
//! different fields never run at the same time. If the timeline runs past the
//! last representable date, the remaining matches are returned unscheduled.

use crate::models::{DayRollover, GameMatch, TournamentSettings};
use chrono::{Duration, NaiveDate};
use log::{debug, warn};

/// Stamp `scheduled_time` and `field` onto every match and return them in schedule order.
///
/// 1. Stable sort by `round` (unrounded matches keep their order and come first).
/// 2. When the cursor reaches the end of the daily window, roll over per
///    `settings.day_rollover`.
/// 3. Field is `fields[k % fields.len()]` for the k-th scheduled match.
/// 4. The cursor advances by match duration plus break time.
pub fn schedule_matches(
    mut matches: Vec<GameMatch>,
    settings: &TournamentSettings,
    start_date: NaiveDate,
) -> Vec<GameMatch> {
    matches.sort_by_key(|m| m.round);

    if settings.fields.is_empty() && !matches.is_empty() {
        warn!("No fields configured; scheduling {} matches without a field", matches.len());
    }

    let slot = Duration::minutes(settings.slot_minutes());
    let mut day = start_date;
    let mut cursor = Some(day.and_time(settings.start_time));
    let mut window_end = day.and_time(settings.end_time);
    let mut scheduled = 0;

    for (counter, m) in matches.iter_mut().enumerate() {
        let Some(mut now) = cursor else {
            break;
        };
        if now >= window_end {
            match settings.day_rollover {
                DayRollover::NextDayStart => {
                    day = day.succ_opt().unwrap_or(day);
                    now = day.and_time(settings.start_time);
                    window_end = day.and_time(settings.end_time);
                }
                DayRollover::Flat24Hours => match now.checked_add_signed(Duration::hours(24)) {
                    Some(next) => now = next,
                    None => {
                        cursor = None;
                        break;
                    }
                },
            }
            debug!("Window closed, rolling over to {}", now);
        }

        m.scheduled_time = Some(now);
        m.field = if settings.fields.is_empty() {
            None
        } else {
            Some(settings.fields[counter % settings.fields.len()].clone())
        };
        scheduled += 1;

        cursor = now.checked_add_signed(slot);
    }

    if scheduled < matches.len() {
        warn!(
            "Schedule runs past the last representable date; {} of {} matches left unscheduled",
            matches.len() - scheduled,
            matches.len()
        );
    }
    debug!(
        "Scheduled {} matches from {} (next free slot {:?})",
        scheduled,
        start_date,
        cursor
    );
    matches
}
