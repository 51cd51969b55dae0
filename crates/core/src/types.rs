/// Recipe primary keys are SQLite `INTEGER PRIMARY KEY` values.
pub type DbId = i64;
