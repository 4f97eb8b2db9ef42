//! Bar-chart rendering for ranked character frequencies.
//!
//! Charts are written as PNG via the plotters bitmap backend, 1200x800 by
//! default. Without an output path the chart is rendered as a textual bar
//! chart on the console instead.

use std::io::Write;
use std::path::Path;

use plotters::prelude::*;

use crate::ChastotaError;

/// Chart dimensions in pixels.
#[derive(Debug, Clone, Copy)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

fn plot_err(e: impl std::fmt::Display) -> ChastotaError {
    ChastotaError::Plot(e.to_string())
}

/// Render ranked (character, count) pairs as a PNG bar chart.
///
/// Bars appear in the given order at x positions 0..N-1 with the characters
/// as x tick labels; the y axis is the occurrence count and the caption is
/// `title`. An empty ranking produces an empty chart, not an error.
///
/// Backend errors are stringified into [`ChastotaError::Plot`]; the only
/// structured failure is file I/O underneath the bitmap encoder.
pub fn render_png(
    pairs: &[(char, u64)],
    title: &str,
    path: &Path,
    options: PlotOptions,
) -> Result<(), ChastotaError> {
    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let x_max = pairs.len().max(1);
    let y_max = pairs.iter().map(|&(_, n)| n).max().unwrap_or(0) + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0..x_max).into_segmented(), 0u64..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(x_max)
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) => pairs
                .get(*i)
                .map(|&(c, _)| c.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_desc("count")
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.filled())
                .margin(3)
                .data(pairs.iter().enumerate().map(|(i, &(_, n))| (i, n))),
        )
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Column span of the longest console bar.
const BAR_WIDTH: u64 = 60;

/// Print ranked pairs as a textual bar chart.
///
/// Bars are scaled so the most frequent character spans 60 columns. An
/// empty ranking prints the title alone.
pub fn render_console<W: Write>(
    pairs: &[(char, u64)],
    title: &str,
    out: &mut W,
) -> Result<(), ChastotaError> {
    writeln!(out, "{title}")?;
    let top = pairs.iter().map(|&(_, n)| n).max().unwrap_or(0);
    for &(c, n) in pairs {
        let len = if top == 0 { 0 } else { n * BAR_WIDTH / top };
        writeln!(out, "{c} {n:>6} {}", "#".repeat(len as usize))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_chart_scales_bars_to_the_maximum() {
        let pairs = vec![('а', 6), ('б', 3), ('в', 1)];
        let mut out = Vec::new();
        render_console(&pairs, "test", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "test");
        assert!(lines[1].ends_with(&"#".repeat(60)));
        assert!(lines[2].ends_with(&"#".repeat(30)));
        assert!(lines[3].ends_with(&"#".repeat(10)));
    }

    #[test]
    fn console_chart_of_nothing_is_just_the_title() {
        let mut out = Vec::new();
        render_console(&[], "empty", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "empty\n");
    }
}
