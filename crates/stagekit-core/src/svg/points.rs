use super::error::SvgError;
use crate::geometry::Point;

/// Parse a `points` attribute into vertices.
///
/// Numeric tokens are runs of digits and dots with an optional leading
/// sign; everything else (commas, whitespace, exponent markers) separates
/// tokens. Consecutive tokens pair up as `(x, y)` and a trailing odd token
/// is dropped.
pub fn parse_points(points: &str) -> Result<Vec<Point>, SvgError> {
    let coords = numeric_tokens(points)
        .map(|token| {
            token.parse::<f64>().map_err(|_| SvgError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}

fn numeric_tokens(input: &str) -> impl Iterator<Item = &str> {
    let bytes = input.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        while pos < bytes.len() {
            let start = pos;
            let body = match bytes[pos] {
                b'+' | b'-' if bytes.get(pos + 1).is_some_and(|&b| is_numeric_byte(b)) => pos + 1,
                b if is_numeric_byte(b) => pos,
                _ => {
                    pos += 1;
                    continue;
                }
            };
            let end = body
                + bytes[body..]
                    .iter()
                    .take_while(|&&b| is_numeric_byte(b))
                    .count();
            pos = end;
            return Some(&input[start..end]);
        }
        None
    })
}

fn is_numeric_byte(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.'
}
