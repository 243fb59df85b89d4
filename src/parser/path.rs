//! Path mini-language parsing and curve flattening.
//!
//! Payloads use the SVG `d` syntax restricted to absolute `M`, `L`, `C` and
//! `Z`. Coordinates are signed decimals with an optional exponent. Unknown
//! command letters are skipped together with their trailing numbers, which
//! keeps legacy exports with extra directives parseable; malformed numbers
//! are hard errors.

use crate::error::{PinwheelError, Result};
use crate::types::{Point, Polygon};

/// Command the scanner is currently feeding coordinates to.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Active {
    Move,
    Line,
    Curve,
    /// Inside an unrecognized command: numbers are consumed and dropped.
    Skip,
}

/// Parse one `d` payload into drawable polygons.
///
/// `curve_steps` controls cubic flattening: each `C` segment appends that
/// many line-approximated points. Candidates with fewer than three points
/// are dropped silently, so the result may be empty; [`parse_svg`] treats
/// an empty combined result as fatal.
///
/// [`parse_svg`]: super::parse_svg
pub fn parse_path_data(data: &str, curve_steps: u32) -> Result<Vec<Polygon>> {
    let mut scanner = Scanner::new(data);
    let mut polygons: Vec<Polygon> = Vec::new();
    let mut points: Vec<Point> = Vec::new();
    let mut cur = Point::new(0.0, 0.0);
    let mut subpath_start = cur;
    let mut active = Active::Skip;

    loop {
        scanner.skip_separators();
        let Some(c) = scanner.peek() else { break };

        if c.is_ascii_alphabetic() {
            scanner.bump();
            match c {
                'M' => active = Active::Move,
                'L' => active = Active::Line,
                'C' => active = Active::Curve,
                // Z carries no coordinates; both cases close the polygon
                'Z' | 'z' => {
                    finish_polygon(&mut polygons, &mut points);
                    cur = subpath_start;
                    active = Active::Skip;
                }
                _ => active = Active::Skip,
            }
            continue;
        }

        match active {
            Active::Skip => {
                scanner.number()?;
            }
            Active::Move => {
                let p = coordinate_pair(&mut scanner, 'M')?;
                finish_polygon(&mut polygons, &mut points);
                points.push(p);
                cur = p;
                subpath_start = p;
                // Further pairs after M are implicit LineTo
                active = Active::Line;
            }
            Active::Line => {
                let p = coordinate_pair(&mut scanner, 'L')?;
                points.push(p);
                cur = p;
            }
            Active::Curve => {
                let p1 = coordinate_pair(&mut scanner, 'C')?;
                let p2 = coordinate_pair(&mut scanner, 'C')?;
                let p3 = coordinate_pair(&mut scanner, 'C')?;
                for s in 1..=curve_steps {
                    let t = f64::from(s) / f64::from(curve_steps);
                    points.push(cubic_point(cur, p1, p2, p3, t));
                }
                cur = p3;
            }
        }
    }

    finish_polygon(&mut polygons, &mut points);
    Ok(polygons)
}

/// Evaluate the cubic Bezier blend at parameter t.
fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    Point::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
}

/// Move the accumulated points into the polygon list when drawable.
/// Undersized candidates are dropped without error.
fn finish_polygon(polygons: &mut Vec<Polygon>, points: &mut Vec<Point>) {
    if points.len() >= 3 {
        polygons.push(Polygon::new(std::mem::take(points)));
    } else {
        points.clear();
    }
}

/// Read one x,y pair for `cmd`, erroring when the payload runs short.
fn coordinate_pair(scanner: &mut Scanner, cmd: char) -> Result<Point> {
    let x = required_number(scanner, cmd)?;
    let y = required_number(scanner, cmd)?;
    Ok(Point::new(x, y))
}

fn required_number(scanner: &mut Scanner, cmd: char) -> Result<f64> {
    match scanner.number()? {
        Some(value) => Ok(value),
        None => Err(PinwheelError::Parse {
            message: format!(
                "Path command '{}' is missing coordinates at offset {}",
                cmd,
                scanner.offset()
            ),
            help: Some("M and L take one x,y pair; C takes three".to_string()),
        }),
    }
}

/// Character scanner over a `d` payload.
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn offset(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Skip whitespace and commas between tokens.
    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace() || c == ',') {
            self.bump();
        }
    }

    /// Consume a run of ASCII digits, returning how many were seen.
    fn digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
            count += 1;
        }
        count
    }

    /// Scan the next numeric token.
    ///
    /// Returns `Ok(None)` at end of input or when a command letter is next.
    /// Anything else that fails to scan as a number is a hard error rather
    /// than silently skipped tokenizer residue.
    fn number(&mut self) -> Result<Option<f64>> {
        self.skip_separators();
        let start = self.pos;

        match self.peek() {
            None => return Ok(None),
            Some(c) if c.is_ascii_alphabetic() => return Ok(None),
            Some(c) if c == '+' || c == '-' || c == '.' || c.is_ascii_digit() => {}
            Some(c) => {
                return Err(PinwheelError::Parse {
                    message: format!(
                        "Unexpected character '{}' at offset {} in path data",
                        c, self.pos
                    ),
                    help: None,
                });
            }
        }

        if matches!(self.peek(), Some('+') | Some('-')) {
            self.bump();
        }
        let int_digits = self.digits();
        let mut frac_digits = 0;
        if self.peek() == Some('.') {
            self.bump();
            frac_digits = self.digits();
        }
        if int_digits == 0 && frac_digits == 0 {
            return Err(PinwheelError::Parse {
                message: format!("Malformed number at offset {} in path data", start),
                help: Some("Expected digits after a sign or decimal point".to_string()),
            });
        }

        // Only take an exponent when digits follow; a bare trailing 'e' is
        // the next command letter, not part of this number
        if matches!(self.peek(), Some('e') | Some('E')) {
            let mark = self.pos;
            self.bump();
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.bump();
            }
            if self.digits() == 0 {
                self.pos = mark;
            }
        }

        let text = &self.src[start..self.pos];
        let value = text.parse::<f64>().map_err(|_| PinwheelError::Parse {
            message: format!("Malformed number '{}' at offset {} in path data", text, start),
            help: None,
        })?;
        Ok(Some(value))
    }
}
