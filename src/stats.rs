use crate::models::{DailyStats, Totals};

/// Sums each metric across `records`. An empty slice yields all zeros.
pub fn aggregate(records: &[DailyStats]) -> Totals {
    records.iter().fold(Totals::default(), |mut totals, day| {
        totals.key_presses = totals.key_presses.saturating_add(day.key_presses);
        totals.left_clicks = totals.left_clicks.saturating_add(day.left_clicks);
        totals.right_clicks = totals.right_clicks.saturating_add(day.right_clicks);
        totals
    })
}
