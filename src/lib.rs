//! Streaming parser for SVG path data.
//!
//! This crate parses the mini-language used in the `d` attribute of an SVG `<path>`
//! element, for example `M6,12,4,4a2 2 0 1 1-2 2A2 2 0 0 1 6 12Z`.  It does not turn
//! the commands into geometry; it decodes them and hands them over one by one.
//!
//! # Basic usage
//!
//! * Implement [`PathSink`] for your own type, or use [`PathBuilder`] to collect the
//!   commands as [`Command`] values.
//! * Create a [`PathParser`] bound to the sink and call [`PathParser::parse`].
//! * If parsing fails, ask the parser for [`PathParser::error_kind`] and
//!   [`PathParser::error_offset`].
//!
//! # Example
//!
//! ```
//! use svgpath::{Command, PathBuilder};
//!
//! let mut builder = PathBuilder::default();
//! builder.parse("M10 20 h5 z").unwrap();
//!
//! assert_eq!(
//!     builder.commands(),
//!     &[
//!         Command::MoveTo { x: 10.0, y: 20.0, relative: false },
//!         Command::HorizontalLineTo { x: 5.0, relative: true },
//!         Command::ClosePath,
//!     ]
//! );
//! ```
//!
//! # Logging
//!
//! Set the `SVGPATH_LOG` environment variable to get a message on stdout for every
//! path that fails to parse.

#![warn(unused)]

pub use crate::error::{ErrorKind, ParseError};
pub use crate::path_builder::{Command, LargeArc, PathBuilder, Sweep};
pub use crate::path_parser::PathParser;
pub use crate::sink::PathSink;

mod error;
#[doc(hidden)]
pub mod log;
mod path_builder;
mod path_parser;
mod sink;
