//! Color laws for flat-shaded faces: quadrant palette, elevation blends,
//! the radial distance law, and a terrain colormap.

pub type Rgba = [f32; 4];

/// Guard against zero-range scalar fields when normalizing.
pub const NORM_EPS: f32 = 1e-8;

pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: Rgba = [0.0, 0.5, 0.0, 1.0];
pub const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];
pub const YELLOW: Rgba = [1.0, 1.0, 0.0, 1.0];
pub const MAGENTA: Rgba = [1.0, 0.0, 1.0, 1.0];
pub const CYAN: Rgba = [0.0, 1.0, 1.0, 1.0];

/// Normalize a scalar into [0, 1) over its observed range.
pub fn normalized(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min + NORM_EPS)
}

/// Fixed palette over the four sign combinations of (x, y).
pub fn quadrant_color(x: f32, y: f32) -> Rgba {
    if x >= 0.0 && y >= 0.0 {
        RED
    } else if x < 0.0 && y >= 0.0 {
        GREEN
    } else if x < 0.0 && y < 0.0 {
        BLUE
    } else {
        YELLOW
    }
}

/// Low elevation blue, high elevation red: [t, 0, 1-t].
pub fn elevation_blend(t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    [t, 0.0, 1.0 - t, 1.0]
}

/// Radial color law over normalized center distance d in [0, 1]:
/// red fades quadratically, green decays exponentially, blue grows linearly.
pub fn radial_law(d: f32) -> Rgba {
    let d = d.clamp(0.0, 1.0);
    [1.0 - d * d, (-3.0 * d).exp(), d, 1.0]
}

const TERRAIN_STOPS: &[(f32, [f32; 3])] = &[
    (0.00, [0.2, 0.2, 0.6]),
    (0.15, [0.0, 0.6, 1.0]),
    (0.25, [0.0, 0.8, 0.4]),
    (0.50, [1.0, 1.0, 0.6]),
    (0.75, [0.5, 0.36, 0.33]),
    (1.00, [1.0, 1.0, 1.0]),
];

/// Piecewise-linear terrain palette: deep water through shoreline and
/// lowland to snow. Input clamps to [0, 1].
pub fn terrain_colormap(t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);

    for pair in TERRAIN_STOPS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let s = (t - t0) / (t1 - t0);
            return [
                c0[0] + (c1[0] - c0[0]) * s,
                c0[1] + (c1[1] - c0[1]) * s,
                c0[2] + (c1[2] - c0[2]) * s,
                1.0,
            ];
        }
    }

    let last = TERRAIN_STOPS[TERRAIN_STOPS.len() - 1].1;
    [last[0], last[1], last[2], 1.0]
}

/// Flat-shading rule: a face takes the mean of its three vertex colors.
pub fn face_mean(a: Rgba, b: Rgba, c: Rgba) -> Rgba {
    [
        (a[0] + b[0] + c[0]) / 3.0,
        (a[1] + b[1] + c[1]) / 3.0,
        (a[2] + b[2] + c[2]) / 3.0,
        (a[3] + b[3] + c[3]) / 3.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_unit(color: Rgba) -> bool {
        color.iter().all(|&c| (0.0..=1.0).contains(&c))
    }

    #[test]
    fn channels_stay_in_unit_interval() {
        for k in 0..=100 {
            let t = k as f32 / 100.0;
            assert!(in_unit(elevation_blend(t)));
            assert!(in_unit(radial_law(t)));
            assert!(in_unit(terrain_colormap(t)));
        }
        // out-of-range inputs clamp rather than overflow
        assert!(in_unit(elevation_blend(3.0)));
        assert!(in_unit(terrain_colormap(-1.0)));
        assert!(in_unit(radial_law(10.0)));
    }

    #[test]
    fn quadrants_are_constant_per_sign_combination() {
        for (x, y) in [(0.3, 0.7), (0.0, 0.0), (2.0, 0.0)] {
            assert_eq!(quadrant_color(x, y), RED);
        }
        for (x, y) in [(-0.3, 0.7), (-2.0, 0.0)] {
            assert_eq!(quadrant_color(x, y), GREEN);
        }
        for (x, y) in [(-0.3, -0.7), (-1.0, -1.0)] {
            assert_eq!(quadrant_color(x, y), BLUE);
        }
        for (x, y) in [(0.3, -0.7), (1.0, -0.001)] {
            assert_eq!(quadrant_color(x, y), YELLOW);
        }
    }

    #[test]
    fn normalization_survives_zero_range() {
        let t = normalized(0.0, 0.0, 0.0);
        assert!(t.is_finite());
        assert_eq!(t, 0.0);
    }

    #[test]
    fn terrain_colormap_clamps_at_ends() {
        assert_eq!(terrain_colormap(0.0), [0.2, 0.2, 0.6, 1.0]);
        assert_eq!(terrain_colormap(1.0), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(terrain_colormap(5.0), terrain_colormap(1.0));
    }

    #[test]
    fn face_mean_averages_channels() {
        let mean = face_mean(RED, GREEN, BLUE);
        assert!((mean[0] - 1.0 / 3.0).abs() < 1e-6);
        assert!((mean[1] - 0.5 / 3.0).abs() < 1e-6);
        assert!((mean[2] - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(mean[3], 1.0);
    }
}
