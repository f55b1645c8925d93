//! Local-calendar windows over completion timestamps.

use crate::model::task::Task;
use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Granularity used to walk past a DST gap; real gaps are multiples of 30 minutes.
const GAP_STEP_MINUTES: i64 = 30;
/// Upper bound on the walk; no zone skips more than a few hours.
const MAX_GAP_STEPS: i64 = 8;

/// Tasks whose `completed_at` falls on the same local calendar day as `now`.
pub fn completed_today<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> usize {
    let today = now.date_naive();
    let tz = now.timezone();
    tasks
        .iter()
        .filter_map(|task| task.completed_at)
        .filter_map(|millis| tz.timestamp_millis_opt(millis).single())
        .filter(|completed_at| completed_at.date_naive() == today)
        .count()
}

/// Tasks completed at or after local midnight of the most recent Sunday.
pub fn completed_this_week<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> usize {
    let week_start = start_of_week_millis(now);
    tasks
        .iter()
        .filter_map(|task| task.completed_at)
        .filter(|millis| *millis >= week_start)
        .count()
}

/// Epoch millis of local midnight on the Sunday starting `now`'s week.
pub fn start_of_week_millis<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    let today = now.date_naive();
    let days_since_sunday = u64::from(today.weekday().num_days_from_sunday());
    let sunday = today
        .checked_sub_days(Days::new(days_since_sunday))
        .unwrap_or(today);
    local_midnight_millis(now, sunday)
}

fn local_midnight_millis<Tz: TimeZone>(now: &DateTime<Tz>, date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    let tz = now.timezone();
    first_valid_local_millis(midnight, |local| {
        tz.from_local_datetime(&local)
            .earliest()
            .map(|resolved| resolved.timestamp_millis())
    })
    // Unreachable for real zones; treat the wall time as UTC.
    .unwrap_or_else(|| midnight.and_utc().timestamp_millis())
}

/// Resolves `local` or, when a DST jump skipped it, the first valid wall time
/// after the gap.
fn first_valid_local_millis(
    local: NaiveDateTime,
    resolve: impl Fn(NaiveDateTime) -> Option<i64>,
) -> Option<i64> {
    (0..=MAX_GAP_STEPS)
        .map(|step| local + Duration::minutes(step * GAP_STEP_MINUTES))
        .find_map(resolve)
}

#[cfg(test)]
mod tests {
    use super::{
        completed_this_week, completed_today, first_valid_local_millis, start_of_week_millis,
    };
    use crate::store::seed::seed_tasks;
    use chrono::{FixedOffset, TimeZone};

    fn at(tz: &FixedOffset, y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::DateTime<FixedOffset> {
        tz.with_ymd_and_hms(y, m, d, h, min, 0).single().unwrap()
    }

    #[test]
    fn day_boundary_follows_now_time_zone() {
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        // Wednesday 2024-05-15 08:00 local.
        let now = at(&brt, 2024, 5, 15, 8, 0);

        let mut tasks = seed_tasks(0);
        // 00:30 local today, which is 03:30 UTC.
        tasks[0].toggle_completed(at(&brt, 2024, 5, 15, 0, 30).timestamp_millis());
        // 23:30 local yesterday, which is already "today" in UTC.
        tasks[1].toggle_completed(at(&brt, 2024, 5, 14, 23, 30).timestamp_millis());

        assert_eq!(completed_today(&tasks, &now), 1);
    }

    #[test]
    fn week_starts_on_sunday_midnight() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let now = at(&utc, 2024, 5, 15, 12, 0);
        let sunday = at(&utc, 2024, 5, 12, 0, 0);
        assert_eq!(start_of_week_millis(&now), sunday.timestamp_millis());

        let mut tasks = seed_tasks(0);
        tasks[0].toggle_completed(sunday.timestamp_millis());
        tasks[1].toggle_completed(sunday.timestamp_millis() - 1);
        tasks[2].toggle_completed(now.timestamp_millis());

        assert_eq!(completed_this_week(&tasks, &now), 2);
    }

    #[test]
    fn sunday_itself_starts_a_new_week() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let now = at(&utc, 2024, 5, 19, 9, 0);
        assert_eq!(
            start_of_week_millis(&now),
            at(&utc, 2024, 5, 19, 0, 0).timestamp_millis()
        );
    }

    #[test]
    fn skipped_midnight_resolves_to_first_wall_time_after_gap() {
        let midnight = chrono::NaiveDate::from_ymd_opt(2018, 11, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let gap_end = midnight + chrono::Duration::hours(1);
        // Wall times in [00:00, 01:00) do not exist; 01:00 maps to 1_000.
        let resolved = first_valid_local_millis(midnight, |local| {
            (local >= gap_end).then(|| 1_000 + (local - gap_end).num_milliseconds())
        });
        assert_eq!(resolved, Some(1_000));

        let plain = first_valid_local_millis(midnight, |_| Some(7));
        assert_eq!(plain, Some(7));
    }
}
