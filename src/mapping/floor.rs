//! Floor-code parsing.

/// Parse a raw floor string into a floor number.
///
/// Letter codes cover the non-numbered floors: `G`/`GF`/`GROUND` are the ground
/// floor, `V` marks villa/variable (-1), `P` penthouse (-2), `R` roof (-3).
/// Anything else is attempted as an integer; unparseable input degrades to
/// `None` rather than an error, since an unknown floor is stored as NULL.
pub fn parse_floor(raw: &str) -> Option<i64> {
    let code = raw.trim().to_uppercase();

    match code.as_str() {
        "G" | "GF" | "GROUND" => Some(0),
        "V" => Some(-1),
        "P" => Some(-2),
        "R" => Some(-3),
        _ => code.parse().ok(),
    }
}
