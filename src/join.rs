use crate::error::{CetlError, Result};
use crate::table::{Schema, Table};
use ahash::AHashMap;

/// Inner-join clicks to users on `user_id == id`, keep the rows whose user
/// `country` equals `country` case-insensitively, and drop the `id` column
/// from the user side of the output.
///
/// Key comparison is exact, byte for byte; only the country comparison
/// folds case (Unicode uppercase on both sides). Country cells are emitted
/// as stored, not as the folded form. Output rows keep click order, and a
/// click matching several user rows fans out into one output row per match
/// in users-table order. `country` must already be the effective filter
/// value; defaulting happens upstream.
pub fn join_and_filter(clicks: &Table, users: &Table, country: &str) -> Result<Table> {
    if clicks.schema().is_empty() || users.schema().is_empty() {
        return Ok(Table::empty());
    }
    let user_id = clicks
        .schema()
        .position("user_id")
        .ok_or_else(|| CetlError::missing_column("user_id", "clicks"))?;
    let id = users
        .schema()
        .position("id")
        .ok_or_else(|| CetlError::missing_column("id", "users"))?;
    let country_col = users
        .schema()
        .position("country")
        .ok_or_else(|| CetlError::missing_column("country", "users"))?;

    // User columns carried into the output: everything except the join key.
    let kept: Vec<usize> = (0..users.schema().len()).filter(|&i| i != id).collect();

    let mut columns: Vec<String> = clicks.schema().columns().to_vec();
    columns.extend(kept.iter().map(|&i| users.schema().columns()[i].clone()));
    let schema = Schema::new(columns).map_err(|dup| {
        CetlError::SchemaMismatch(format!(
            "user column `{}` collides with a clicks column",
            dup.0
        ))
    })?;

    let mut by_id: AHashMap<&str, Vec<&[String]>> = AHashMap::new();
    for row in users.rows() {
        by_id.entry(row[id].as_str()).or_default().push(row);
    }

    let wanted = country.to_uppercase();
    let mut rows = Vec::new();
    for click in clicks.rows() {
        if let Some(matches) = by_id.get(click[user_id].as_str()) {
            for user in matches {
                if user[country_col].to_uppercase() != wanted {
                    continue;
                }
                let mut row = Vec::with_capacity(schema.len());
                row.extend(click.iter().cloned());
                row.extend(kept.iter().map(|&i| user[i].clone()));
                rows.push(row);
            }
        }
    }
    Ok(Table::new(schema, rows))
}
