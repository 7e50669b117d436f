//! Maps price samples onto a pixel box as line-drawing commands.

/// A single drawing instruction in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
}

impl PathCommand {
    pub const fn point(&self) -> (f64, f64) {
        match *self {
            Self::MoveTo(x, y) | Self::LineTo(x, y) => (x, y),
        }
    }
}

/// Target pixel box. Points are drawn inside the box inset by `padding`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// X position of sample `index` out of `len`, spread evenly.
    /// A lone sample sits in the middle.
    pub fn x(&self, index: usize, len: usize) -> f64 {
        if len <= 1 {
            return self.padding + self.inner_width() / 2.0;
        }
        self.padding + (index as f64 / (len - 1) as f64) * self.inner_width()
    }

    /// Y position of `value`; larger values sit higher.
    pub fn y(&self, value: f64, scale: Scale) -> f64 {
        let h = self.inner_height();
        self.padding + h - scale.normalize(value) * h
    }
}

/// Value range shared by every series drawn on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    /// Range over the present values, `None` if there are none.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| match acc {
                None => Some(Self { min: v, max: v }),
                Some(s) => Some(Self {
                    min: s.min.min(v),
                    max: s.max.max(v),
                }),
            })
    }

    /// `max - min`, or 1 for a flat series so nothing divides by zero.
    pub fn range(&self) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 { 1.0 } else { range }
    }

    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.range()
    }
}

/// Builds the commands for one series against an existing scale.
///
/// Missing samples break the line: the next present sample starts a new
/// segment with a move-to.
pub fn series_path(values: &[Option<f64>], scale: Scale, area: PlotArea) -> Vec<PathCommand> {
    let len = values.len();
    let mut commands = Vec::with_capacity(len);
    let mut pen_down = false;

    for (i, value) in values.iter().enumerate() {
        match value.filter(|v| v.is_finite()) {
            Some(v) => {
                let (x, y) = (area.x(i, len), area.y(v, scale));
                commands.push(if pen_down {
                    PathCommand::LineTo(x, y)
                } else {
                    PathCommand::MoveTo(x, y)
                });
                pen_down = true;
            }
            None => pen_down = false,
        }
    }

    commands
}

/// Path for a single series scaled to its own min and max.
pub fn single_series(values: &[f64], area: PlotArea) -> Vec<PathCommand> {
    let Some(scale) = Scale::from_values(values.iter().copied()) else {
        return Vec::new();
    };
    let samples: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    series_path(&samples, scale, area)
}

/// Paths for two parallel series on one shared scale, so both lines can be
/// read against the same axis.
pub fn dual_series(
    first: &[Option<f64>],
    second: &[Option<f64>],
    area: PlotArea,
) -> (Vec<PathCommand>, Vec<PathCommand>) {
    let present = first.iter().chain(second).filter_map(|v| *v);
    let Some(scale) = Scale::from_values(present) else {
        return (Vec::new(), Vec::new());
    };

    (
        series_path(first, scale, area),
        series_path(second, scale, area),
    )
}

/// Renders commands as SVG path data, e.g. `M 0.00,10.00 L 5.00,2.50`.
pub fn to_svg_path(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|c| match c {
            PathCommand::MoveTo(x, y) => format!("M {x:.2},{y:.2}"),
            PathCommand::LineTo(x, y) => format!("L {x:.2},{y:.2}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Positions of every drawn sample, for point markers.
pub fn markers(commands: &[PathCommand]) -> Vec<(f64, f64)> {
    commands.iter().map(PathCommand::point).collect()
}

/// Number of line segments (pairs of connected points) in a path.
pub fn segment_count(commands: &[PathCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, PathCommand::LineTo(..)))
        .count()
}
