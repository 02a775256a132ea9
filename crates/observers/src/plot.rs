//! Interactive plot of recorded traces.
//!
//! See [`TracePlot`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Display options for [`TracePlot::show`].
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Lotka-Volterra").legend().log_y())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a config with no title, no legend and a linear y-axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Labels the x-axis.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Shows a legend naming each trace.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots log₁₀ of every y value.
    ///
    /// Non-positive values (an extinct population, for instance) cannot be
    /// shown on a log axis and are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

/// `N` named traces of `(x, y)` points shown in a blocking egui window.
///
/// Points are added with [`record`](TracePlot::record), either from inside a
/// solver observer closure or after a run from its stored history.
///
/// ```ignore
/// let mut plot = TracePlot::<2>::new(["Prey", "Predator"]);
/// for (i, (x, y)) in trajectory.iter().enumerate() {
///     plot.record(i as f64 * dt, [Some(x), Some(y)]);
/// }
/// plot.show(ShowConfig::new().legend())?;
/// ```
#[derive(Debug, Clone)]
pub struct TracePlot<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> TracePlot<N> {
    /// Creates an empty plot with one trace per name.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records one point per trace at `x`.
    ///
    /// A `None` slot leaves its trace untouched.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Number of points recorded on trace `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn len(&self, index: usize) -> usize {
        self.data[index].len()
    }

    /// Opens a window with all traces and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    x_label: config.x_label,
                    legend: config.legend,
                    log_y: config.log_y,
                }))
            }),
        )
    }
}

/// The egui [`eframe::App`] that renders the recorded traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    x_label: Option<String>,
    legend: bool,
    log_y: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("trace_plot");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if self.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = if log_y {
                        points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        points.iter().copied().collect()
                    };
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
