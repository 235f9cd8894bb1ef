use crate::error::{CetlError, Result};
use ahash::AHashMap;

/// Duplicate column name rejected while building a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateColumn(pub String);

/// Ordered, duplicate-free column list with O(1) name lookup.
///
/// Column order is load-bearing: it fixes the layout of every row in the
/// owning [`Table`] and the order cells are written on export.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Schema {
    /// Builds a schema, rejecting duplicate column names.
    pub fn new(columns: Vec<String>) -> std::result::Result<Self, DuplicateColumn> {
        let mut index = AHashMap::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            if index.insert(column.clone(), i).is_some() {
                return Err(DuplicateColumn(column.clone()));
            }
        }
        Ok(Self { columns, index })
    }

    /// Schema for a column list known to be distinct (static report headers).
    pub(crate) fn from_distinct(columns: Vec<String>) -> Self {
        let index: AHashMap<String, usize> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        debug_assert_eq!(index.len(), columns.len());
        Self { columns, index }
    }

    /// Position of `column`, or `None` if the schema does not have it.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Two schemas are equal when their column names appear in the same order;
/// the lookup index is derived state.
impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl Eq for Schema {}

/// In-memory table: a schema plus rows of string cells, one cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    schema: Schema,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// The zero-column, zero-row table. Concatenating nothing and loading an
    /// empty file set both land here.
    pub fn empty() -> Self {
        Self {
            schema: Schema::from_distinct(Vec::new()),
            rows: Vec::new(),
        }
    }

    /// Builds a table from parts. Every row must have exactly one cell per
    /// schema column; loaders enforce this before calling.
    pub fn new(schema: Schema, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == schema.len()));
        Self { schema, rows }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of data rows (the header is not a row).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Stacks tables into one, preserving input order: all rows of the first
    /// table, then all rows of the second, and so on.
    ///
    /// The first table fixes the unified column order. Later tables must
    /// carry the same column set; a table whose columns merely appear in a
    /// different order is re-projected onto the unified order cell by cell.
    /// Rows are never deduplicated.
    pub fn concat<I>(tables: I) -> Result<Table>
    where
        I: IntoIterator<Item = Table>,
    {
        let mut iter = tables.into_iter();
        let first = match iter.next() {
            Some(table) => table,
            None => return Ok(Table::empty()),
        };
        let schema = first.schema;
        let mut rows = first.rows;

        for table in iter {
            if table.schema == schema {
                rows.extend(table.rows);
                continue;
            }
            let mapping = reorder_mapping(&schema, &table.schema)?;
            for row in table.rows {
                rows.push(mapping.iter().map(|&i| row[i].clone()).collect());
            }
        }
        Ok(Table { schema, rows })
    }
}

/// For each unified column, the position of that column in `other`. Fails
/// when the two column sets differ.
fn reorder_mapping(unified: &Schema, other: &Schema) -> Result<Vec<usize>> {
    if unified.len() != other.len() {
        return Err(mismatch(unified, other));
    }
    unified
        .columns()
        .iter()
        .map(|column| other.position(column).ok_or_else(|| mismatch(unified, other)))
        .collect()
}

fn mismatch(expected: &Schema, found: &Schema) -> CetlError {
    CetlError::SchemaMismatch(format!(
        "expected columns [{}], found [{}]",
        expected.columns().join(", "),
        found.columns().join(", ")
    ))
}
