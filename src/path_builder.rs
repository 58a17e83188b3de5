//! Storage for decoded path commands.
//!
//! The parser itself keeps no history; it pushes every command into a [`PathSink`].
//! [`PathBuilder`] is the sink to use when you just want the commands back as values.
//!
//! The builder uses a [`TinyVec`] with space for 32 commands on the stack; most paths in
//! SVGs in the wild have fewer than 32 commands, and larger ones will spill to the heap.

use std::fmt;

use tinyvec::TinyVec;

use crate::error::ParseError;
use crate::path_parser::PathParser;
use crate::sink::PathSink;

/// Whether an arc's sweep should be >= 180 degrees, or smaller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LargeArc(pub bool);

/// Angular direction in which an arc is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sweep {
    Negative,
    Positive,
}

impl From<bool> for Sweep {
    fn from(flag: bool) -> Sweep {
        if flag {
            Sweep::Positive
        } else {
            Sweep::Negative
        }
    }
}

/// One drawing command from path data, exactly as written.
///
/// Coordinates are not resolved against the current point; `relative` records whether
/// the command letter was lowercase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    MoveTo {
        x: f64,
        y: f64,
        relative: bool,
    },
    ClosePath,
    LineTo {
        x: f64,
        y: f64,
        relative: bool,
    },
    HorizontalLineTo {
        x: f64,
        relative: bool,
    },
    VerticalLineTo {
        y: f64,
        relative: bool,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    SmoothCurveTo {
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    QuadraticCurveTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    SmoothQuadraticCurveTo {
        x: f64,
        y: f64,
        relative: bool,
    },
    Arc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: LargeArc,
        sweep: Sweep,
        x: f64,
        y: f64,
        relative: bool,
    },
}

// This is just so we can use TinyVec, whose type parameter requires T: Default.
// There is no actual default for path commands in the SVG spec; this is just our
// implementation detail.
impl Default for Command {
    fn default() -> Self {
        Command::ClosePath
    }
}

impl Command {
    /// Reports this command to `sink`, as the parser would have.
    pub fn emit<S: PathSink + ?Sized>(&self, sink: &mut S) {
        match *self {
            Command::MoveTo { x, y, relative } => sink.move_to(x, y, relative),
            Command::ClosePath => sink.close_path(),
            Command::LineTo { x, y, relative } => sink.line_to(x, y, relative),
            Command::HorizontalLineTo { x, relative } => sink.horizontal_line_to(x, relative),
            Command::VerticalLineTo { y, relative } => sink.vertical_line_to(y, relative),
            Command::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
                relative,
            } => sink.curve_to(x1, y1, x2, y2, x, y, relative),
            Command::SmoothCurveTo {
                x2,
                y2,
                x,
                y,
                relative,
            } => sink.smooth_curve_to(x2, y2, x, y, relative),
            Command::QuadraticCurveTo {
                x1,
                y1,
                x,
                y,
                relative,
            } => sink.quadratic_curve_to(x1, y1, x, y, relative),
            Command::SmoothQuadraticCurveTo { x, y, relative } => {
                sink.smooth_quadratic_curve_to(x, y, relative)
            }
            Command::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
                relative,
            } => sink.arc(rx, ry, x_axis_rotation, large_arc, sweep, x, y, relative),
        }
    }

    /// Whether the command letter was lowercase.  Always false for `ClosePath`.
    pub fn is_relative(&self) -> bool {
        match *self {
            Command::ClosePath => false,
            Command::MoveTo { relative, .. }
            | Command::LineTo { relative, .. }
            | Command::HorizontalLineTo { relative, .. }
            | Command::VerticalLineTo { relative, .. }
            | Command::CurveTo { relative, .. }
            | Command::SmoothCurveTo { relative, .. }
            | Command::QuadraticCurveTo { relative, .. }
            | Command::SmoothQuadraticCurveTo { relative, .. }
            | Command::Arc { relative, .. } => relative,
        }
    }
}

fn positioning(relative: bool) -> &'static str {
    if relative {
        "relative"
    } else {
        "absolute"
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Command::MoveTo { x, y, relative } => {
                write!(f, "MoveTo x={x} y={y} {}", positioning(relative))
            }

            Command::ClosePath => write!(f, "ClosePath"),

            Command::LineTo { x, y, relative } => {
                write!(f, "LineTo x={x} y={y} {}", positioning(relative))
            }

            Command::HorizontalLineTo { x, relative } => {
                write!(f, "HorizontalLineTo x={x} {}", positioning(relative))
            }

            Command::VerticalLineTo { y, relative } => {
                write!(f, "VerticalLineTo y={y} {}", positioning(relative))
            }

            Command::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
                relative,
            } => write!(
                f,
                "CurveTo x1={x1} y1={y1} x2={x2} y2={y2} x={x} y={y} {}",
                positioning(relative)
            ),

            Command::SmoothCurveTo {
                x2,
                y2,
                x,
                y,
                relative,
            } => write!(
                f,
                "SmoothCurveTo x2={x2} y2={y2} x={x} y={y} {}",
                positioning(relative)
            ),

            Command::QuadraticCurveTo {
                x1,
                y1,
                x,
                y,
                relative,
            } => write!(
                f,
                "QuadraticCurveTo x1={x1} y1={y1} x={x} y={y} {}",
                positioning(relative)
            ),

            Command::SmoothQuadraticCurveTo { x, y, relative } => write!(
                f,
                "SmoothQuadraticCurveTo x={x} y={y} {}",
                positioning(relative)
            ),

            Command::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
                relative,
            } => write!(
                f,
                "Arc rx={rx} ry={ry} x-axis-rotation={x_axis_rotation} large-arc={} sweep={} x={x} y={y} {}",
                u8::from(large_arc.0),
                u8::from(sweep == Sweep::Positive),
                positioning(relative)
            ),
        }
    }
}

/// A [`PathSink`] that stores every command it receives.
///
/// Create this with `PathBuilder::default`; you can then call [`PathBuilder::parse`] or
/// hand it to a [`PathParser`] yourself.
#[derive(Debug, Default, Clone)]
pub struct PathBuilder {
    commands: TinyVec<[Command; 32]>,
}

impl PathBuilder {
    /// Parses `path_str` and appends its commands to the builder.
    ///
    /// On error, the commands that were decoded before the error stay in the builder.
    pub fn parse(&mut self, path_str: &str) -> Result<(), ParseError> {
        let mut parser = PathParser::new(self);
        parser.parse(path_str);

        match parser.error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> + '_ {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands.to_vec()
    }
}

impl PathSink for PathBuilder {
    fn move_to(&mut self, x: f64, y: f64, relative: bool) {
        self.commands.push(Command::MoveTo { x, y, relative });
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn line_to(&mut self, x: f64, y: f64, relative: bool) {
        self.commands.push(Command::LineTo { x, y, relative });
    }

    fn horizontal_line_to(&mut self, x: f64, relative: bool) {
        self.commands
            .push(Command::HorizontalLineTo { x, relative });
    }

    fn vertical_line_to(&mut self, y: f64, relative: bool) {
        self.commands.push(Command::VerticalLineTo { y, relative });
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64, relative: bool) {
        self.commands.push(Command::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            relative,
        });
    }

    fn smooth_curve_to(&mut self, x2: f64, y2: f64, x: f64, y: f64, relative: bool) {
        self.commands.push(Command::SmoothCurveTo {
            x2,
            y2,
            x,
            y,
            relative,
        });
    }

    fn quadratic_curve_to(&mut self, x1: f64, y1: f64, x: f64, y: f64, relative: bool) {
        self.commands.push(Command::QuadraticCurveTo {
            x1,
            y1,
            x,
            y,
            relative,
        });
    }

    fn smooth_quadratic_curve_to(&mut self, x: f64, y: f64, relative: bool) {
        self.commands
            .push(Command::SmoothQuadraticCurveTo { x, y, relative });
    }

    fn arc(
        &mut self,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: LargeArc,
        sweep: Sweep,
        x: f64,
        y: f64,
        relative: bool,
    ) {
        self.commands.push(Command::Arc {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
            relative,
        });
    }
}
