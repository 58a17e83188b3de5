//! The interface through which the parser reports drawing commands.

use crate::path_builder::{LargeArc, Sweep};

/// Receiver for decoded path commands.
///
/// [`crate::PathParser`] calls exactly one of these methods per command, in document
/// order, as soon as the command's arguments have been validated.  Coordinates are
/// passed through as written; `relative` is true when the command letter was lowercase.
pub trait PathSink {
    /// `M` / `m`
    fn move_to(&mut self, x: f64, y: f64, relative: bool);

    /// `Z` / `z`
    fn close_path(&mut self);

    /// `L` / `l`
    fn line_to(&mut self, x: f64, y: f64, relative: bool);

    /// `H` / `h`
    fn horizontal_line_to(&mut self, x: f64, relative: bool);

    /// `V` / `v`
    fn vertical_line_to(&mut self, y: f64, relative: bool);

    /// `C` / `c`
    #[allow(clippy::too_many_arguments)]
    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64, relative: bool);

    /// `S` / `s`
    fn smooth_curve_to(&mut self, x2: f64, y2: f64, x: f64, y: f64, relative: bool);

    /// `Q` / `q`
    fn quadratic_curve_to(&mut self, x1: f64, y1: f64, x: f64, y: f64, relative: bool);

    /// `T` / `t`
    fn smooth_quadratic_curve_to(&mut self, x: f64, y: f64, relative: bool);

    /// `A` / `a`
    #[allow(clippy::too_many_arguments)]
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
    );
}
