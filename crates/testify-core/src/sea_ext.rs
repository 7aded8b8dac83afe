use sea_orm::{DbErr, RuntimeErr, SqlErr, sqlx};

/// SQLite extended result codes for a failed foreign-key check. `787` is
/// `SQLITE_CONSTRAINT_FOREIGNKEY`; `1811` is `SQLITE_CONSTRAINT_TRIGGER`, which
/// SQLite raises for `ON DELETE RESTRICT`.
const SQLITE_FOREIGN_KEY_CODES: &[&str] = &["787", "1811"];

/// Storage constraint that rejected a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique(String),
    ForeignKey(String),
}

/// Classify a sea-orm error raised by a write. Returns `None` for anything
/// that is not a unique or foreign-key violation.
pub fn constraint_violation(err: &DbErr) -> Option<ConstraintViolation> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => Some(ConstraintViolation::Unique(detail)),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            Some(ConstraintViolation::ForeignKey(detail))
        }
        _ => sqlite_foreign_key(err),
    }
}

// `sql_err` only knows code 787, so RESTRICT failures need a second look.
fn sqlite_foreign_key(err: &DbErr) -> Option<ConstraintViolation> {
    let (DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db)))
    | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db)))) = err
    else {
        return None;
    };
    let code = db.code()?;
    SQLITE_FOREIGN_KEY_CODES
        .contains(&code.as_ref())
        .then(|| ConstraintViolation::ForeignKey(db.message().to_owned()))
}
