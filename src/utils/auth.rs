/// Compare two strings without short-circuiting on the first differing byte.
///
/// Used for credential checks and the monitoring API key so that response
/// timing does not reveal how much of a guess was correct.
pub fn constant_time_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();

    if provided.len() != expected.len() {
        return false;
    }

    provided
        .iter()
        .zip(expected.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
