//! Parser for SVG path data.
//!
//! This walks the path data once, left to right, and reports each command to a
//! [`PathSink`] as soon as its arguments have been read.  There is no separate token
//! stream and no intermediate list of commands.
//!
//! Some peculiarities of the path data grammar:
//!
//! - Commas between arguments are optional, and so is whitespace.  These are
//!   equivalent:
//!
//!   ```text
//!   M 10 20 30 40
//!   M 10, 20, 30, 40
//!   M10,20,30,40
//!   ```
//!
//! - A sign or a second decimal point ends the previous number.  These are equivalent:
//!
//!   ```text
//!   M-10,20-30-40
//!   M -10 20 -30 -40
//!
//!   M.1-2,3E2-4
//!   M 0.1 -2 300 -4
//!   ```
//!
//! - If more numbers follow a complete set of arguments, the same command is repeated.
//!   `M6,12,4,4` is two moveto commands.
//!
//! - The large-arc and sweep flags of an elliptical arc are single characters, so
//!   `a2 2 0 1 1-2 2` and `a2 2 0 11-2 2` are the same arc.

use crate::error::{ErrorKind, ParseError};
use crate::path_builder::{LargeArc, Sweep};
use crate::sink::PathSink;
use crate::svgpath_log;

/// Byte-level cursor over the path data.
///
/// The position only ever moves forward.  The `match_*` methods either consume what
/// they were asked for, plus any separator after it, or return an error without
/// moving.
struct Scanner<'i> {
    input: &'i str,
    pos: usize,
}

impl<'i> Scanner<'i> {
    fn new(input: &'i str) -> Scanner<'i> {
        Scanner { input, pos: 0 }
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.input.as_bytes().get(pos).copied()
    }

    fn current(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    fn next_byte(&mut self) -> Option<u8> {
        let c = self.current()?;
        self.pos += 1;
        Some(c)
    }

    fn advance_over_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.current() {
            self.pos += 1;
        }
    }

    // Whitespace, at most one comma, whitespace.
    fn advance_over_separator(&mut self) {
        self.advance_over_whitespace();
        if self.current() == Some(b',') {
            self.pos += 1;
        }
        self.advance_over_whitespace();
    }

    fn end_of_digits(&self, from: usize) -> usize {
        let mut end = from;
        while self.byte_at(end).map_or(false, |c| c.is_ascii_digit()) {
            end += 1;
        }
        end
    }

    fn end_of_optional_sign(&self, from: usize) -> usize {
        match self.byte_at(from) {
            Some(b'+' | b'-') => from + 1,
            _ => from,
        }
    }

    /// Whether the current byte can start another set of arguments for the command
    /// that was just read.
    fn at_number_start(&self) -> bool {
        matches!(self.current(), Some(b'0'..=b'9' | b'.' | b'-' | b'+'))
    }

    /// Reads the longest number at the cursor:
    ///
    /// ```text
    /// number := sign? (digits ('.' digits?)? | '.' digits) (('e' | 'E') sign? digits)?
    /// ```
    ///
    /// An exponent marker that is not followed by digits is not part of the number.
    fn match_number(&mut self) -> Result<f64, ErrorKind> {
        let start = self.pos;

        let integral_start = self.end_of_optional_sign(start);
        let integral_end = self.end_of_digits(integral_start);
        let mut num_digits = integral_end - integral_start;
        let mut end = integral_end;

        if self.byte_at(end) == Some(b'.') {
            let fraction_end = self.end_of_digits(end + 1);
            let fraction_digits = fraction_end - (end + 1);

            if num_digits > 0 || fraction_digits > 0 {
                num_digits += fraction_digits;
                end = fraction_end;
            }
        }

        if num_digits == 0 {
            return Err(ErrorKind::NumberParsing);
        }

        if let Some(b'e' | b'E') = self.byte_at(end) {
            let exponent_start = self.end_of_optional_sign(end + 1);
            let exponent_end = self.end_of_digits(exponent_start);

            if exponent_end > exponent_start {
                end = exponent_end;
            }
        }

        // The range only contains ASCII bytes that we checked above, so it is a valid
        // float for std's parser; overflow comes back as an infinity.
        let value = self.input[start..end]
            .parse::<f64>()
            .map_err(|_| ErrorKind::NumberParsing)?;

        if value.is_infinite() {
            return Err(ErrorKind::NumberParsing);
        }

        self.pos = end;
        self.advance_over_separator();
        Ok(value)
    }

    fn match_flag(&mut self) -> Result<bool, ErrorKind> {
        let flag = match self.current() {
            Some(b'0') => false,
            Some(b'1') => true,
            _ => return Err(ErrorKind::FlagParsing),
        };

        self.pos += 1;
        self.advance_over_separator();
        Ok(flag)
    }

    fn match_coordinate_pair(&mut self) -> Result<(f64, f64), ErrorKind> {
        Ok((self.match_number()?, self.match_number()?))
    }
}

/// Streaming parser for the `d` attribute of an SVG `<path>` element.
///
/// The parser is bound to a [`PathSink`] for its whole lifetime.  Each call to
/// [`PathParser::parse`] resets the error state, reports commands to the sink as they
/// are decoded, and stops at the first error.  Commands reported before an error are
/// not taken back.
///
/// ```
/// use svgpath::{ErrorKind, PathBuilder, PathParser};
///
/// let mut builder = PathBuilder::default();
/// let mut parser = PathParser::new(&mut builder);
///
/// assert!(parser.parse("M6,12,4,4a2 2 0 1 1-2 2A2 2 0 0 1 6 12Z"));
/// assert_eq!(parser.sink().len(), 5);
///
/// assert!(!parser.parse("M"));
/// assert_eq!(parser.error_kind(), ErrorKind::NumberParsing);
/// assert_eq!(parser.error_offset(), 1);
/// ```
pub struct PathParser<'s, S: PathSink + ?Sized> {
    sink: &'s mut S,
    offset: usize,
    error: ErrorKind,
}

impl<'s, S: PathSink + ?Sized> PathParser<'s, S> {
    pub fn new(sink: &'s mut S) -> PathParser<'s, S> {
        PathParser {
            sink,
            offset: 0,
            error: ErrorKind::None,
        }
    }

    /// Parses a complete path data string.
    ///
    /// Returns true if the whole string was consumed without error.  An empty string,
    /// or one with only whitespace, is valid and produces no commands.
    pub fn parse(&mut self, path_str: &str) -> bool {
        self.offset = 0;
        self.error = ErrorKind::None;

        let mut scanner = Scanner::new(path_str);
        let result = self.commands(&mut scanner);
        self.offset = scanner.pos;

        match result {
            Ok(()) => true,

            Err(kind) => {
                self.error = kind;
                svgpath_log!(
                    "(invalid path data at byte {}: {} in {:?})",
                    self.offset,
                    kind,
                    path_str
                );
                false
            }
        }
    }

    pub fn has_error(&self) -> bool {
        self.error != ErrorKind::None
    }

    /// The kind of error from the last call to `parse`, or `ErrorKind::None`.
    pub fn error_kind(&self) -> ErrorKind {
        self.error
    }

    /// Byte offset where the last call to `parse` stopped.
    ///
    /// After a failure this is where the error was found; after a success it is the
    /// length of the input.
    pub fn error_offset(&self) -> usize {
        self.offset
    }

    /// The error from the last call to `parse`, if there was one.
    pub fn error(&self) -> Option<ParseError> {
        if self.has_error() {
            Some(ParseError::new(self.offset, self.error))
        } else {
            None
        }
    }

    pub fn sink(&self) -> &S {
        &*self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut *self.sink
    }

    fn commands(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ErrorKind> {
        scanner.advance_over_whitespace();

        while let Some(command) = scanner.next_byte() {
            let relative = command.is_ascii_lowercase();
            scanner.advance_over_whitespace();

            // closepath takes no arguments, so it never repeats
            if command == b'Z' || command == b'z' {
                self.sink.close_path();
                continue;
            }

            loop {
                self.argument_group(scanner, command, relative)?;

                if !scanner.at_number_start() {
                    break;
                }
            }
        }

        Ok(())
    }

    fn argument_group(
        &mut self,
        scanner: &mut Scanner<'_>,
        command: u8,
        relative: bool,
    ) -> Result<(), ErrorKind> {
        match command {
            b'M' | b'm' => {
                let (x, y) = scanner.match_coordinate_pair()?;
                self.sink.move_to(x, y, relative);
            }

            b'L' | b'l' => {
                let (x, y) = scanner.match_coordinate_pair()?;
                self.sink.line_to(x, y, relative);
            }

            b'H' | b'h' => {
                let x = scanner.match_number()?;
                self.sink.horizontal_line_to(x, relative);
            }

            b'V' | b'v' => {
                let y = scanner.match_number()?;
                self.sink.vertical_line_to(y, relative);
            }

            b'C' | b'c' => {
                let (x1, y1) = scanner.match_coordinate_pair()?;
                let (x2, y2) = scanner.match_coordinate_pair()?;
                let (x, y) = scanner.match_coordinate_pair()?;
                self.sink.curve_to(x1, y1, x2, y2, x, y, relative);
            }

            b'S' | b's' => {
                let (x2, y2) = scanner.match_coordinate_pair()?;
                let (x, y) = scanner.match_coordinate_pair()?;
                self.sink.smooth_curve_to(x2, y2, x, y, relative);
            }

            b'Q' | b'q' => {
                let (x1, y1) = scanner.match_coordinate_pair()?;
                let (x, y) = scanner.match_coordinate_pair()?;
                self.sink.quadratic_curve_to(x1, y1, x, y, relative);
            }

            b'T' | b't' => {
                let (x, y) = scanner.match_coordinate_pair()?;
                self.sink.smooth_quadratic_curve_to(x, y, relative);
            }

            b'A' | b'a' => {
                let (rx, ry) = scanner.match_coordinate_pair()?;
                let x_axis_rotation = scanner.match_number()?;
                let large_arc = LargeArc(scanner.match_flag()?);
                let sweep = Sweep::from(scanner.match_flag()?);
                let (x, y) = scanner.match_coordinate_pair()?;
                self.sink
                    .arc(rx, ry, x_axis_rotation, large_arc, sweep, x, y, relative);
            }

            _ => return Err(ErrorKind::CommandParsing),
        }

        Ok(())
    }
}
