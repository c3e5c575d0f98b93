//! Lifting-surface planforms: cranked transport wings and straight-tapered
//! stabilizers, with the derived quantities the mass regressions and the aero
//! buildup consume.

/// One lifting-surface cross-section: leading-edge position and local chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingXSec {
    pub x_le_m: f64,
    pub y_le_m: f64,
    pub z_le_m: f64,
    pub chord_m: f64,
}

/// A lifting surface as an ordered root-to-tip section list.
///
/// `symmetric` surfaces are mirrored across y = 0 (wing, h-stab); `vertical`
/// surfaces span in z instead of y (v-stab). Areas and spans of symmetric
/// surfaces count both halves.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub xsecs: Vec<WingXSec>,
    pub symmetric: bool,
    pub vertical: bool,
}

/// Parameters of a cranked transport wing: root, yehudi break, tip.
#[derive(Debug, Clone, Copy)]
pub struct CrankedWingParams {
    pub span_m: f64,
    pub root_chord_m: f64,
    pub le_sweep_deg: f64,
    pub dihedral_deg: f64,
    /// Spanwise fraction of the semispan at the yehudi break.
    pub yehudi_span_fraction: f64,
    /// Tip chord as a fraction of the root chord.
    pub tip_chord_fraction: f64,
    pub x_le_m: f64,
    pub z_le_m: f64,
}

/// Parameters of a straight-tapered stabilizer.
#[derive(Debug, Clone, Copy)]
pub struct TaperedSurfaceParams {
    /// Full span for symmetric surfaces, root-to-tip extent for vertical ones.
    pub span_m: f64,
    pub root_chord_m: f64,
    pub le_sweep_deg: f64,
    pub taper_ratio: f64,
    pub x_le_m: f64,
    pub z_le_m: f64,
    pub vertical: bool,
}

impl Surface {
    /// Build a mirrored cranked wing. The yehudi chord shrinks by the
    /// leading-edge sweep offset so the inboard trailing edge stays unswept.
    pub fn cranked_wing(p: &CrankedWingParams) -> Self {
        let half_span = p.span_m / 2.0;
        let yehudi_y = p.yehudi_span_fraction * half_span;
        let tip_y = half_span;
        let sweep_tan = p.le_sweep_deg.to_radians().tan();
        let dihedral_tan = p.dihedral_deg.to_radians().tan();

        let yehudi_x = yehudi_y * sweep_tan;
        let tip_x = tip_y * sweep_tan;

        Self {
            xsecs: vec![
                WingXSec {
                    x_le_m: p.x_le_m,
                    y_le_m: 0.0,
                    z_le_m: p.z_le_m,
                    chord_m: p.root_chord_m,
                },
                WingXSec {
                    x_le_m: p.x_le_m + yehudi_x,
                    y_le_m: yehudi_y,
                    z_le_m: p.z_le_m + yehudi_y * dihedral_tan,
                    chord_m: p.root_chord_m - yehudi_x,
                },
                WingXSec {
                    x_le_m: p.x_le_m + tip_x,
                    y_le_m: tip_y,
                    z_le_m: p.z_le_m + tip_y * dihedral_tan,
                    chord_m: p.tip_chord_fraction * p.root_chord_m,
                },
            ],
            symmetric: true,
            vertical: false,
        }
    }

    /// Build a straight-tapered stabilizer, horizontal (mirrored) or vertical.
    pub fn tapered(p: &TaperedSurfaceParams) -> Self {
        let tip_extent = if p.vertical { p.span_m } else { p.span_m / 2.0 };
        let sweep_tan = p.le_sweep_deg.to_radians().tan();
        let tip = if p.vertical {
            WingXSec {
                x_le_m: p.x_le_m + p.span_m * sweep_tan,
                y_le_m: 0.0,
                z_le_m: p.z_le_m + tip_extent,
                chord_m: p.taper_ratio * p.root_chord_m,
            }
        } else {
            WingXSec {
                x_le_m: p.x_le_m + tip_extent * sweep_tan,
                y_le_m: tip_extent,
                z_le_m: p.z_le_m,
                chord_m: p.taper_ratio * p.root_chord_m,
            }
        };
        Self {
            xsecs: vec![
                WingXSec {
                    x_le_m: p.x_le_m,
                    y_le_m: 0.0,
                    z_le_m: p.z_le_m,
                    chord_m: p.root_chord_m,
                },
                tip,
            ],
            symmetric: !p.vertical,
            vertical: p.vertical,
        }
    }

    fn spanwise(&self, xsec: &WingXSec) -> f64 {
        if self.vertical { xsec.z_le_m } else { xsec.y_le_m }
    }

    fn side_count(&self) -> f64 {
        if self.symmetric { 2.0 } else { 1.0 }
    }

    /// Planform span: tip-to-tip for symmetric surfaces (m).
    pub fn span_m(&self) -> f64 {
        match (self.xsecs.first(), self.xsecs.last()) {
            (Some(root), Some(tip)) => {
                self.side_count() * (self.spanwise(tip) - self.spanwise(root))
            }
            _ => 0.0,
        }
    }

    /// Planform reference area, both halves for symmetric surfaces (m²).
    pub fn area_m2(&self) -> f64 {
        self.side_count()
            * self
                .xsecs
                .windows(2)
                .map(|pair| {
                    let width = self.spanwise(&pair[1]) - self.spanwise(&pair[0]);
                    0.5 * (pair[0].chord_m + pair[1].chord_m) * width
                })
                .sum::<f64>()
    }

    /// Aspect ratio span²/area.
    pub fn aspect_ratio(&self) -> f64 {
        self.span_m().powi(2) / self.area_m2()
    }

    /// Tip chord / root chord.
    pub fn taper_ratio(&self) -> f64 {
        match (self.xsecs.first(), self.xsecs.last()) {
            (Some(root), Some(tip)) => tip.chord_m / root.chord_m,
            _ => 1.0,
        }
    }

    /// Area-weighted mean aerodynamic chord (m).
    pub fn mean_aerodynamic_chord_m(&self) -> f64 {
        let mut weighted = 0.0;
        let mut area = 0.0;
        for pair in self.xsecs.windows(2) {
            let (c1, c2) = (pair[0].chord_m, pair[1].chord_m);
            let width = self.spanwise(&pair[1]) - self.spanwise(&pair[0]);
            let panel_area = 0.5 * (c1 + c2) * width;
            let panel_mac = (2.0 / 3.0) * (c1 + c2 - c1 * c2 / (c1 + c2));
            weighted += panel_mac * panel_area;
            area += panel_area;
        }
        weighted / area
    }

    /// Leading-edge sweep from root to tip (degrees).
    pub fn le_sweep_deg(&self) -> f64 {
        let root = &self.xsecs[0];
        let tip = &self.xsecs[self.xsecs.len() - 1];
        let dx = tip.x_le_m - root.x_le_m;
        let ds = self.spanwise(tip) - self.spanwise(root);
        dx.atan2(ds).to_degrees()
    }

    /// Mean sweep angle measured from root quarter-chord to tip quarter-chord
    /// (degrees).
    pub fn mean_sweep_deg(&self) -> f64 {
        let root = &self.xsecs[0];
        let tip = &self.xsecs[self.xsecs.len() - 1];
        let dx = (tip.x_le_m + 0.25 * tip.chord_m) - (root.x_le_m + 0.25 * root.chord_m);
        let ds = self.spanwise(tip) - self.spanwise(root);
        dx.atan2(ds).to_degrees()
    }

    /// Area-weighted aerodynamic-center x-position, taken at the quarter
    /// chord of each panel's mean aerodynamic chord (m).
    pub fn aerodynamic_center_x_m(&self) -> f64 {
        let mut weighted = 0.0;
        let mut area = 0.0;
        for pair in self.xsecs.windows(2) {
            let (c1, c2) = (pair[0].chord_m, pair[1].chord_m);
            let width = self.spanwise(&pair[1]) - self.spanwise(&pair[0]);
            let panel_area = 0.5 * (c1 + c2) * width;
            let panel_mac = (2.0 / 3.0) * (c1 + c2 - c1 * c2 / (c1 + c2));
            // Spanwise station where the panel chord equals its MAC.
            let s_frac = (c1 + 2.0 * c2) / (3.0 * (c1 + c2));
            let x_le = pair[0].x_le_m + s_frac * (pair[1].x_le_m - pair[0].x_le_m);
            weighted += (x_le + 0.25 * panel_mac) * panel_area;
            area += panel_area;
        }
        weighted / area
    }

    /// Leading-edge x of the root section (m).
    pub fn root_le_x_m(&self) -> f64 {
        self.xsecs[0].x_le_m
    }

    /// Root chord (m).
    pub fn root_chord_m(&self) -> f64 {
        self.xsecs[0].chord_m
    }
}
