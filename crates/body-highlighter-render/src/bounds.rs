use serde::{Deserialize, Serialize};
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }

    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Control-point hull of one path's data. Curve control points are included, so the result
/// may be slightly larger than the drawn shape.
///
/// Parsing stops at the first malformed segment; the segments before it still count.
pub fn path_bounds(d: &str) -> Option<Bounds> {
    let mut points: Vec<(f64, f64)> = Vec::new();
    for seg in SimplifyingPathParser::from(d) {
        let seg = match seg {
            Ok(seg) => seg,
            Err(err) => {
                tracing::warn!(%err, path = d, "malformed path data");
                break;
            }
        };
        match seg {
            SimplePathSegment::MoveTo { x, y } | SimplePathSegment::LineTo { x, y } => {
                points.push((x, y));
            }
            SimplePathSegment::Quadratic { x1, y1, x, y } => {
                points.push((x1, y1));
                points.push((x, y));
            }
            SimplePathSegment::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                points.push((x1, y1));
                points.push((x2, y2));
                points.push((x, y));
            }
            SimplePathSegment::ClosePath => {}
        }
    }
    Bounds::from_points(points)
}

/// Union of [`path_bounds`] over every path.
pub fn paths_bounds<'a>(paths: impl IntoIterator<Item = &'a str>) -> Option<Bounds> {
    paths
        .into_iter()
        .filter_map(path_bounds)
        .reduce(Bounds::union)
}
