//! Classification of driver errors.

/// Returns true if `e` is a unique constraint violation.
///
/// The only unique column of the `url` table besides the generated primary
/// key is `alias`, so a violation on insert means the alias is taken.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
