//! Toroidal screen wrap
//!
//! Sprites leave one edge and come back on the opposite one, but only after
//! they have cleared a margin past the visible screen.

use glam::DVec2;

/// Wrap policy for one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenWrap {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl ScreenWrap {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Wrap a candidate position, each axis independently
    pub fn apply(&self, candidate: DVec2) -> DVec2 {
        DVec2::new(
            wrap_axis(candidate.x, self.width, self.margin),
            wrap_axis(candidate.y, self.height, self.margin),
        )
    }

    /// Whether `pos` lies inside the wrap band on both axes
    pub fn contains(&self, pos: DVec2) -> bool {
        let m = self.margin;
        (-m..=self.width + m).contains(&pos.x) && (-m..=self.height + m).contains(&pos.y)
    }
}

#[inline]
fn wrap_axis(mut v: f64, extent: f64, margin: f64) -> f64 {
    let span = extent + margin * 2.0;
    if v < -margin {
        v += span;
    }
    if v > extent + margin {
        v -= span;
    }
    v
}
