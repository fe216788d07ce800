//! Helpers shared by the integration tests

/// Split a rendered line into its name, delta and cumulative cells
pub fn cells(line: &str) -> (String, String, String) {
    let parts: Vec<&str> = line.split(" | ").collect();
    assert_eq!(parts.len(), 3, "line {:?} should have three cells", line);
    (
        parts[0].to_string(),
        parts[1].trim_end().to_string(),
        parts[2].trim_end().to_string(),
    )
}

/// Parse a numeric cell
pub fn millis(cell: &str) -> i64 {
    cell.parse()
        .unwrap_or_else(|_| panic!("cell {:?} is not an integer", cell))
}

/// Assert `actual` is within `tolerance` of `expected`
pub fn assert_close(actual: i64, expected: i64, tolerance: i64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: got {}, expected {} ± {}",
        what,
        actual,
        expected,
        tolerance
    );
}
