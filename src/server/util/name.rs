/// Stand-in for a name half that is absent from the upstream record.
///
/// Existing clients match on this literal.
pub const MISSING_NAME_PART: &str = "undefined";

/// Joins two name halves with a single space, substituting [`MISSING_NAME_PART`] for a
/// missing half.
pub fn join_name(first: Option<&str>, second: Option<&str>) -> String {
    format!(
        "{} {}",
        first.unwrap_or(MISSING_NAME_PART),
        second.unwrap_or(MISSING_NAME_PART)
    )
}
