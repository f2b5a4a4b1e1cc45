//! Builds parameterized SELECT, INSERT, DELETE and TRUNCATE from a static table description.

use crate::sql::SqlParam;

/// Table layout known at compile time. Identifiers only ever come from here.
#[derive(Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub primary_key: &'static str,
    /// Every column, in the order rows are selected and returned.
    pub columns: &'static [&'static str],
    /// Columns a client value may be written to. The rest are filled by the database.
    pub insertable: &'static [&'static str],
}

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(table: &TableDef) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlParam) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// SELECT every row, ordered by primary key.
pub fn select_all(table: &TableDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(table),
        quoted(table.name),
        quoted(table.primary_key)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(table: &TableDef, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlParam::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        column_list(table),
        quoted(table.name),
        quoted(table.primary_key),
        n
    );
    q
}

/// INSERT the supplied values and return the full row.
/// Only insertable columns are written, in table order; anything not supplied takes
/// the column default.
pub fn insert(table: &TableDef, values: &[(&str, SqlParam)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for col in table.insertable {
        let Some((_, v)) = values.iter().find(|(name, _)| name == col) else {
            continue;
        };
        let n = q.push_param(v.clone());
        cols.push(quoted(col));
        placeholders.push(format!("${}", n));
    }
    let target = if cols.is_empty() {
        format!("{} DEFAULT VALUES", quoted(table.name))
    } else {
        format!(
            "{} ({}) VALUES ({})",
            quoted(table.name),
            cols.join(", "),
            placeholders.join(", ")
        )
    };
    q.sql = format!("INSERT INTO {} RETURNING {}", target, column_list(table));
    q
}

/// DELETE by primary key, returning the key of the removed row (if any).
pub fn delete_by_id(table: &TableDef, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlParam::Int(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${} RETURNING {}",
        quoted(table.name),
        quoted(table.primary_key),
        n,
        quoted(table.primary_key)
    );
    q
}

/// Empty the table and reset its identity sequence.
pub fn truncate(table: &TableDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("TRUNCATE {} RESTART IDENTITY CASCADE", quoted(table.name));
    q
}
