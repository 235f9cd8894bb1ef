use crate::error::{CetlError, Result};
use crate::table::{Schema, Table};
use std::collections::BTreeMap;

/// Count click rows per distinct `date` value.
///
/// Produces a `date,count` table with one row per date, sorted ascending by
/// the date string. Grouping compares raw cell values; nothing is parsed,
/// trimmed, or normalized, so `2020-1-1` and `2020-01-01` are distinct
/// groups. A zero-column input (an empty corpus) yields the empty report
/// rather than a missing-column error.
pub fn aggregate_by_date(clicks: &Table) -> Result<Table> {
    let schema = Schema::from_distinct(vec!["date".into(), "count".into()]);
    if clicks.schema().is_empty() {
        return Ok(Table::new(schema, Vec::new()));
    }
    let date = clicks
        .schema()
        .position("date")
        .ok_or_else(|| CetlError::missing_column("date", "clicks"))?;

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for row in clicks.rows() {
        match counts.get_mut(row[date].as_str()) {
            Some(n) => *n += 1,
            None => {
                counts.insert(row[date].clone(), 1);
            }
        }
    }

    let rows = counts
        .into_iter()
        .map(|(date, count)| vec![date, count.to_string()])
        .collect();
    Ok(Table::new(schema, rows))
}
