// Constellation layout.
// Places selected projects on a jittered grid in percentage space and links nearby ones.

use rand::Rng;
use serde::Serialize;

const MAX_COLUMNS: usize = 4;

const BASE_X: f64 = 15.0;
const SPAN_X: f64 = 70.0;
const BASE_Y: f64 = 12.0;
const SPAN_Y: f64 = 72.0;

/// Full jitter width; offsets fall in ±half of this.
const JITTER_X: f64 = 16.0;
const JITTER_Y: f64 = 14.0;

const MIN_X: f64 = 8.0;
const MAX_X: f64 = 92.0;
const MIN_Y: f64 = 8.0;
const MAX_Y: f64 = 88.0;

/// Each node links to at most this many following nodes.
const MAX_LINKS_AHEAD: usize = 2;
const LINK_PROBABILITY: f64 = 0.7;

/// A position in percentage coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Constellation {
    pub positions: Vec<Point>,
    /// Index pairs `(i, j)` with `i < j`.
    pub connectors: Vec<(usize, usize)>,
}

/// Lay out `count` nodes. Output varies with `rng`; pass a seeded one for repeatable results.
pub fn constellation<R: Rng>(count: usize, rng: &mut R) -> Constellation {
    let positions = star_positions(count, rng);
    let connectors = if count > 1 {
        connectors(count, rng)
    } else {
        Vec::new()
    };
    Constellation {
        positions,
        connectors,
    }
}

pub fn star_positions<R: Rng>(count: usize, rng: &mut R) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let cols = count.min(MAX_COLUMNS);
    let rows = count.div_ceil(cols);
    let col_steps = (cols.max(2) - 1) as f64;
    let row_steps = (rows.max(2) - 1) as f64;

    (0..count)
        .map(|i| {
            let col = (i % cols) as f64;
            let row = (i / cols) as f64;

            let base_x = BASE_X + col / col_steps * SPAN_X;
            let base_y = BASE_Y + row / row_steps * SPAN_Y;

            let offset_x = rng.gen_range(-0.5_f64..0.5) * JITTER_X;
            let offset_y = rng.gen_range(-0.5_f64..0.5) * JITTER_Y;

            Point {
                x: (base_x + offset_x).clamp(MIN_X, MAX_X),
                y: (base_y + offset_y).clamp(MIN_Y, MAX_Y),
            }
        })
        .collect()
}

fn connectors<R: Rng>(count: usize, rng: &mut R) -> Vec<(usize, usize)> {
    let mut links = Vec::new();
    for i in 0..count.saturating_sub(1) {
        let ahead = MAX_LINKS_AHEAD.min(count - i - 1);
        for j in 1..=ahead {
            if rng.gen_bool(LINK_PROBABILITY) {
                links.push((i, i + j));
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(constellation(0, &mut rng), Constellation::default());

        let single = constellation(1, &mut rng);
        assert_eq!(single.positions.len(), 1);
        assert!(single.connectors.is_empty());
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for count in 1..=12 {
                let positions = star_positions(count, &mut rng);
                assert_eq!(positions.len(), count);
                for p in positions {
                    assert!((MIN_X..=MAX_X).contains(&p.x), "x out of bounds: {}", p.x);
                    assert!((MIN_Y..=MAX_Y).contains(&p.y), "y out of bounds: {}", p.y);
                }
            }
        }
    }

    #[test]
    fn test_jitter_is_bounded_around_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        // 8 nodes: 4 columns by 2 rows, corners at (15,12) and (85,84)
        let positions = star_positions(8, &mut rng);

        assert!((positions[0].x - 15.0).abs() <= 8.0);
        assert!((positions[0].y - 12.0).abs() <= 7.0);
        assert!((positions[7].x - 85.0).abs() <= 8.0);
        assert!((positions[7].y - 84.0).abs() <= 7.0);
    }

    #[test]
    fn test_seeded_layout_is_repeatable() {
        let a = constellation(10, &mut StdRng::seed_from_u64(42));
        let b = constellation(10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_connectors_only_reach_two_ahead() {
        for seed in 0..20 {
            let layout = constellation(12, &mut StdRng::seed_from_u64(seed));
            for &(i, j) in &layout.connectors {
                assert!(i < j);
                assert!(j - i <= MAX_LINKS_AHEAD);
                assert!(j < 12);
            }
            // 11 + 10 candidate links at most
            assert!(layout.connectors.len() <= 21);
        }
    }

    #[test]
    fn test_connector_density_is_roughly_seventy_percent() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut total = 0;
        let trials = 200;
        for _ in 0..trials {
            total += connectors(12, &mut rng).len();
        }
        let ratio = total as f64 / (21 * trials) as f64;
        assert!((0.6..0.8).contains(&ratio), "ratio {}", ratio);
    }
}
