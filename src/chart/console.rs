//! Terminal bar-chart renderer

use crate::chart::{ChartConfig, ChartHandle, ChartRenderer};
use colored::Colorize;

/// Draws a horizontal bar chart on stdout, one bar per label, scaled to the
/// configured width. Disposal only invalidates the handle; the terminal
/// output itself is not retracted.
pub struct ConsoleChartRenderer {
    next_id: u64,
    use_colors: bool,
}

impl ConsoleChartRenderer {
    pub fn new(use_colors: bool) -> Self {
        Self {
            next_id: 0,
            use_colors,
        }
    }
}

impl ChartRenderer for ConsoleChartRenderer {
    fn create(&mut self, labels: &[String], values: &[usize], config: &ChartConfig) -> ChartHandle {
        let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let max_value = values.iter().copied().max().unwrap_or(0).max(1);

        println!("\n📊 {}", config.title);
        for (label, value) in labels.iter().zip(values) {
            let bar_len = (value * config.max_width).div_ceil(max_value);
            let bar = "█".repeat(bar_len);
            let bar = if self.use_colors {
                bar.blue().to_string()
            } else {
                bar
            };
            println!("  {:<width$}  {} {}", label, bar, value, width = label_width);
        }

        let id = self.next_id;
        self.next_id += 1;
        ChartHandle::new(id)
    }

    fn dispose(&mut self, _handle: ChartHandle) {
        // Nothing to reclaim for a terminal chart
    }
}
