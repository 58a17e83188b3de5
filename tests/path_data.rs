use float_cmp::approx_eq;
use proptest::prelude::*;

use svgpath::{Command, ErrorKind, LargeArc, PathBuilder, PathParser, PathSink, Sweep};

/// Counts sink invocations without storing anything.
#[derive(Default)]
struct CountingSink {
    calls: usize,
}

impl PathSink for CountingSink {
    fn move_to(&mut self, _x: f64, _y: f64, _relative: bool) {
        self.calls += 1;
    }

    fn close_path(&mut self) {
        self.calls += 1;
    }

    fn line_to(&mut self, _x: f64, _y: f64, _relative: bool) {
        self.calls += 1;
    }

    fn horizontal_line_to(&mut self, _x: f64, _relative: bool) {
        self.calls += 1;
    }

    fn vertical_line_to(&mut self, _y: f64, _relative: bool) {
        self.calls += 1;
    }

    fn curve_to(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64, _relative: bool) {
        self.calls += 1;
    }

    fn smooth_curve_to(&mut self, _x2: f64, _y2: f64, _x: f64, _y: f64, _relative: bool) {
        self.calls += 1;
    }

    fn quadratic_curve_to(&mut self, _x1: f64, _y1: f64, _x: f64, _y: f64, _relative: bool) {
        self.calls += 1;
    }

    fn smooth_quadratic_curve_to(&mut self, _x: f64, _y: f64, _relative: bool) {
        self.calls += 1;
    }

    fn arc(
        &mut self,
        _rx: f64,
        _ry: f64,
        _x_axis_rotation: f64,
        _large_arc: LargeArc,
        _sweep: Sweep,
        _x: f64,
        _y: f64,
        _relative: bool,
    ) {
        self.calls += 1;
    }
}

fn parse(path_str: &str) -> (bool, Vec<Command>) {
    let mut builder = PathBuilder::default();
    let success = PathParser::new(&mut builder).parse(path_str);
    (success, builder.into_commands())
}

#[test]
fn empty_input_reports_nothing() {
    let mut sink = CountingSink::default();
    let mut parser = PathParser::new(&mut sink);

    assert!(parser.parse(""));
    assert!(!parser.has_error());
    assert_eq!(parser.sink().calls, 0);
}

#[test]
fn single_moveto_reports_once() {
    let mut sink = CountingSink::default();
    assert!(PathParser::new(&mut sink).parse("M0,0"));
    assert_eq!(sink.calls, 1);

    assert_eq!(
        parse("M0,0"),
        (
            true,
            vec![Command::MoveTo {
                x: 0.0,
                y: 0.0,
                relative: false
            }]
        )
    );
}

#[test]
fn moveto_without_arguments() {
    let mut builder = PathBuilder::default();
    let mut parser = PathParser::new(&mut builder);

    assert!(!parser.parse("M"));
    assert!(parser.has_error());
    assert_eq!(parser.error_kind(), ErrorKind::NumberParsing);
    assert_eq!(parser.error_offset(), 1);
}

#[test]
fn implicit_moveto_repetition() {
    assert_eq!(
        parse("M6,12,4,4"),
        (
            true,
            vec![
                Command::MoveTo {
                    x: 6.0,
                    y: 12.0,
                    relative: false
                },
                Command::MoveTo {
                    x: 4.0,
                    y: 4.0,
                    relative: false
                },
            ]
        )
    );
}

#[test]
fn adjacent_arc_flags() {
    assert_eq!(
        parse("a2 2 0 1 1-2 2"),
        (
            true,
            vec![Command::Arc {
                rx: 2.0,
                ry: 2.0,
                x_axis_rotation: 0.0,
                large_arc: LargeArc(true),
                sweep: Sweep::Positive,
                x: -2.0,
                y: 2.0,
                relative: true,
            }]
        )
    );
}

#[test]
fn decodes_fractions_and_exponents() {
    let (success, commands) = parse("M0.1,1e-3 l-.7E2 3.14159");
    assert!(success);

    match commands.as_slice() {
        [Command::MoveTo { x: x0, y: y0, .. }, Command::LineTo { x: x1, y: y1, .. }] => {
            assert!(approx_eq!(f64, *x0, 0.1, ulps = 2));
            assert!(approx_eq!(f64, *y0, 0.001, ulps = 2));
            assert!(approx_eq!(f64, *x1, -70.0, ulps = 2));
            assert!(approx_eq!(f64, *y1, 3.14159, ulps = 2));
        }
        other => panic!("unexpected commands: {other:?}"),
    }
}

#[test]
fn parse_result_and_error_value() {
    let mut builder = PathBuilder::default();
    let err = builder.parse("M1 2 A1 1 0 2 0 3 3").unwrap_err();

    assert_eq!(err.kind, ErrorKind::FlagParsing);
    assert_eq!(err.position, 12);
    assert_eq!(err.to_string(), "error at position 12: invalid arc flag");
    assert_eq!(builder.len(), 1);
}

fn coord() -> impl Strategy<Value = f64> {
    // quarters are exact in binary and print without an exponent
    (-40000i32..40000).prop_map(|n| f64::from(n) / 4.0)
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (coord(), coord(), any::<bool>())
            .prop_map(|(x, y, relative)| Command::MoveTo { x, y, relative }),
        Just(Command::ClosePath),
        (coord(), coord(), any::<bool>())
            .prop_map(|(x, y, relative)| Command::LineTo { x, y, relative }),
        (coord(), any::<bool>())
            .prop_map(|(x, relative)| Command::HorizontalLineTo { x, relative }),
        (coord(), any::<bool>()).prop_map(|(y, relative)| Command::VerticalLineTo { y, relative }),
        (coord(), coord(), coord(), coord(), coord(), coord(), any::<bool>()).prop_map(
            |(x1, y1, x2, y2, x, y, relative)| Command::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
                relative
            }
        ),
        (coord(), coord(), coord(), coord(), any::<bool>()).prop_map(
            |(x2, y2, x, y, relative)| Command::SmoothCurveTo {
                x2,
                y2,
                x,
                y,
                relative
            }
        ),
        (coord(), coord(), coord(), coord(), any::<bool>()).prop_map(
            |(x1, y1, x, y, relative)| Command::QuadraticCurveTo {
                x1,
                y1,
                x,
                y,
                relative
            }
        ),
        (coord(), coord(), any::<bool>())
            .prop_map(|(x, y, relative)| Command::SmoothQuadraticCurveTo { x, y, relative }),
        (
            coord(),
            coord(),
            coord(),
            any::<bool>(),
            any::<bool>(),
            coord(),
            coord(),
            any::<bool>()
        )
            .prop_map(
                |(rx, ry, x_axis_rotation, large_arc, sweep, x, y, relative)| Command::Arc {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc: LargeArc(large_arc),
                    sweep: Sweep::from(sweep),
                    x,
                    y,
                    relative,
                }
            ),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", ",", ", ", " ,", "\t", "\r\n", " , "])
}

fn letter(cmd: &Command) -> char {
    let upper = match *cmd {
        Command::MoveTo { .. } => 'M',
        Command::ClosePath => 'Z',
        Command::LineTo { .. } => 'L',
        Command::HorizontalLineTo { .. } => 'H',
        Command::VerticalLineTo { .. } => 'V',
        Command::CurveTo { .. } => 'C',
        Command::SmoothCurveTo { .. } => 'S',
        Command::QuadraticCurveTo { .. } => 'Q',
        Command::SmoothQuadraticCurveTo { .. } => 'T',
        Command::Arc { .. } => 'A',
    };

    if cmd.is_relative() {
        upper.to_ascii_lowercase()
    } else {
        upper
    }
}

fn arguments(cmd: &Command) -> Vec<String> {
    let numbers = |values: &[f64]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
    let flag = |f: bool| String::from(if f { "1" } else { "0" });

    match *cmd {
        Command::MoveTo { x, y, .. } => numbers(&[x, y]),
        Command::ClosePath => Vec::new(),
        Command::LineTo { x, y, .. } => numbers(&[x, y]),
        Command::HorizontalLineTo { x, .. } => numbers(&[x]),
        Command::VerticalLineTo { y, .. } => numbers(&[y]),
        Command::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            ..
        } => numbers(&[x1, y1, x2, y2, x, y]),
        Command::SmoothCurveTo { x2, y2, x, y, .. } => numbers(&[x2, y2, x, y]),
        Command::QuadraticCurveTo { x1, y1, x, y, .. } => numbers(&[x1, y1, x, y]),
        Command::SmoothQuadraticCurveTo { x, y, .. } => numbers(&[x, y]),
        Command::Arc {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
            ..
        } => {
            let mut args = numbers(&[rx, ry, x_axis_rotation]);
            args.push(flag(large_arc.0));
            args.push(flag(sweep == Sweep::Positive));
            args.extend(numbers(&[x, y]));
            args
        }
    }
}

/// Writes `commands` as path data.  With `compact`, a command letter is left out when
/// it is the same as the previous one, so that the parser has to repeat it.
fn write_path(commands: &[Command], sep: &str, compact: bool) -> String {
    let mut out = String::new();
    let mut previous = None;

    for cmd in commands {
        let c = letter(cmd);
        let args = arguments(cmd);

        if compact && previous == Some(c) && !args.is_empty() {
            out.push_str(sep);
        } else {
            out.push(c);
        }
        out.push_str(&args.join(sep));
        previous = Some(c);
    }

    out
}

prop_compose! {
    fn repeated_command()(cmd in command(), count in 1usize..5) -> Vec<Command> {
        vec![cmd; count]
    }
}

proptest! {
    #[test]
    fn valid_paths_parse(commands in prop::collection::vec(command(), 0..20), sep in separator()) {
        let path_str = write_path(&commands, sep, false);

        let mut builder = PathBuilder::default();
        let mut parser = PathParser::new(&mut builder);
        prop_assert!(parser.parse(&path_str));
        prop_assert!(!parser.has_error());
        prop_assert_eq!(parser.error_offset(), path_str.len());
        prop_assert_eq!(builder.commands(), commands.as_slice());
    }

    #[test]
    fn compact_paths_parse(commands in prop::collection::vec(command(), 0..20), sep in separator()) {
        let path_str = write_path(&commands, sep, true);

        let (success, parsed) = parse(&path_str);
        prop_assert!(success);
        prop_assert_eq!(parsed, commands);
    }

    #[test]
    fn repetition_keeps_relative_flag(commands in repeated_command(), sep in separator()) {
        let path_str = write_path(&commands, sep, true);
        let relative = commands[0].is_relative();

        let (success, parsed) = parse(&path_str);
        prop_assert!(success);
        prop_assert_eq!(parsed.len(), commands.len());
        prop_assert!(parsed.iter().all(|cmd| cmd.is_relative() == relative));
    }

    #[test]
    fn truncated_after_command_letter(
        commands in prop::collection::vec(command(), 0..10),
        sep in separator(),
        truncated in prop::sample::select(b"MmLlHhVvCcSsQqTtAa".to_vec()),
    ) {
        let mut path_str = write_path(&commands, sep, false);
        path_str.push(char::from(truncated));

        let mut builder = PathBuilder::default();
        let mut parser = PathParser::new(&mut builder);
        prop_assert!(!parser.parse(&path_str));
        prop_assert_eq!(parser.error_kind(), ErrorKind::NumberParsing);
        prop_assert_eq!(parser.error_offset(), path_str.len());
        prop_assert_eq!(builder.commands(), commands.as_slice());
    }

    #[test]
    fn error_state_is_idempotent(path_str in "[MmLlZzAaHh0-9 ,.eE+-]{0,40}") {
        let mut sink = CountingSink::default();
        let mut parser = PathParser::new(&mut sink);
        let success = parser.parse(&path_str);

        let kind = parser.error_kind();
        let offset = parser.error_offset();
        prop_assert_eq!(success, kind == ErrorKind::None);
        prop_assert!(offset <= path_str.len());

        prop_assert_eq!(parser.error_kind(), kind);
        prop_assert_eq!(parser.error_offset(), offset);
        prop_assert_eq!(parser.has_error(), !success);
        prop_assert_eq!(parser.error().map(|e| (e.position, e.kind)), if success { None } else { Some((offset, kind)) });
    }

    #[test]
    fn never_panics_on_arbitrary_input(path_str in ".*") {
        let mut builder = PathBuilder::default();
        let mut parser = PathParser::new(&mut builder);
        if parser.parse(&path_str) {
            prop_assert_eq!(parser.error_offset(), path_str.len());
        }
    }
}
