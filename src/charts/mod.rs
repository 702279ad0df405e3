//! Charts module - live count charts, figure lookup, static rendering

mod figures;
mod plotter;
mod renderer;

pub use figures::{decode_figure, FigureResolver, FigureTextures, ResolvedFigure};
pub use plotter::{ChartPlotter, BAR_COLOR, PALETTE};
pub use renderer::{FigureJob, StaticChartRenderer};
