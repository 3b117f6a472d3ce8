//! Quadrant anchor search.
//!
//! For a query coordinate `(x, y)` each quadrant picks one sample:
//!
//! | Anchor | Region             | Preference                  |
//! |--------|--------------------|-----------------------------|
//! | `q11`  | `s.x ≤ x, s.y ≤ y` | largest x, then largest y   |
//! | `q21`  | `s.x ≥ x, s.y ≤ y` | smallest x, then largest y  |
//! | `q12`  | `s.x ≤ x, s.y ≥ y` | largest x, then smallest y  |
//! | `q22`  | `s.x ≥ x, s.y ≥ y` | smallest x, then smallest y |
//!
//! This is a lexicographic closeness, not a Euclidean nearest-neighbour
//! search. Exact `(x, y)` duplicates resolve to the earliest sample in
//! point-set order. An empty quadrant yields a sentinel anchor built from
//! the extreme finite doubles.

use std::cmp::Ordering;
use std::fmt::Debug;

use field_common::Sample;

use crate::PointSet;

/// Stand-in for negative infinity on sentinel anchors.
pub const SENTINEL_LOW: f64 = f64::MIN;

/// Stand-in for positive infinity on sentinel anchors.
pub const SENTINEL_HIGH: f64 = f64::MAX;

/// One of the four directional quadrants around a query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `q11`: west and south of the query.
    SouthWest,
    /// `q21`: east and south of the query.
    SouthEast,
    /// `q12`: west and north of the query.
    NorthWest,
    /// `q22`: east and north of the query.
    NorthEast,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::SouthWest,
        Quadrant::SouthEast,
        Quadrant::NorthWest,
        Quadrant::NorthEast,
    ];

    #[inline]
    fn is_west(self) -> bool {
        matches!(self, Quadrant::SouthWest | Quadrant::NorthWest)
    }

    #[inline]
    fn is_south(self) -> bool {
        matches!(self, Quadrant::SouthWest | Quadrant::SouthEast)
    }

    /// Anchor used when no sample falls in this quadrant.
    pub fn sentinel(self) -> Sample {
        let x = if self.is_west() { SENTINEL_LOW } else { SENTINEL_HIGH };
        let y = if self.is_south() { SENTINEL_LOW } else { SENTINEL_HIGH };
        Sample::new(x, y, SENTINEL_LOW)
    }

    /// Whether `s` lies in this quadrant of `(x, y)`. Boundaries are shared.
    #[inline]
    pub fn contains(self, s: &Sample, x: f64, y: f64) -> bool {
        let in_x = if self.is_west() { s.x <= x } else { s.x >= x };
        let in_y = if self.is_south() { s.y <= y } else { s.y >= y };
        in_x && in_y
    }

    /// Whether `candidate` is strictly closer than `current` in this
    /// quadrant's x-then-y order. Ties keep `current`.
    #[inline]
    pub fn prefers(self, candidate: &Sample, current: &Sample) -> bool {
        let x_closer = if self.is_west() {
            candidate.x > current.x
        } else {
            candidate.x < current.x
        };
        let y_closer = if self.is_south() {
            candidate.y > current.y
        } else {
            candidate.y < current.y
        };
        x_closer || (candidate.x == current.x && y_closer)
    }
}

/// The four anchors for one query coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub q11: Sample,
    pub q21: Sample,
    pub q12: Sample,
    pub q22: Sample,
}

impl Anchors {
    /// All four quadrants empty.
    pub fn sentinels() -> Self {
        Self {
            q11: Quadrant::SouthWest.sentinel(),
            q21: Quadrant::SouthEast.sentinel(),
            q12: Quadrant::NorthWest.sentinel(),
            q22: Quadrant::NorthEast.sentinel(),
        }
    }

    pub fn get(&self, quadrant: Quadrant) -> &Sample {
        match quadrant {
            Quadrant::SouthWest => &self.q11,
            Quadrant::SouthEast => &self.q21,
            Quadrant::NorthWest => &self.q12,
            Quadrant::NorthEast => &self.q22,
        }
    }

    fn slot(&mut self, quadrant: Quadrant) -> &mut Sample {
        match quadrant {
            Quadrant::SouthWest => &mut self.q11,
            Quadrant::SouthEast => &mut self.q21,
            Quadrant::NorthWest => &mut self.q12,
            Quadrant::NorthEast => &mut self.q22,
        }
    }

    /// `(q21.x - q11.x) * (q12.y - q11.y)`
    #[inline]
    pub fn denominator(&self) -> f64 {
        (self.q21.x - self.q11.x) * (self.q12.y - self.q11.y)
    }

    /// Bilinear blend of the anchor values at `(x, y)`.
    ///
    /// A zero denominator falls back to `q11.value`. Sentinel anchors take
    /// part in the blend like any other anchor.
    #[inline]
    pub fn blend(&self, x: f64, y: f64) -> f64 {
        let denom = self.denominator();
        if denom == 0.0 {
            return self.q11.value;
        }

        let (q11, q21, q12, q22) = (&self.q11, &self.q21, &self.q12, &self.q22);
        ((q21.x - x) * (q12.y - y) * q11.value
            + (x - q11.x) * (q12.y - y) * q21.value
            + (q21.x - x) * (y - q11.y) * q12.value
            + (x - q11.x) * (y - q11.y) * q22.value)
            / denom
    }
}

/// Finds the quadrant anchors of a query coordinate.
///
/// Implementations must agree exactly, including tie-breaks and sentinels.
pub trait QuadrantSearch: Send + Sync + Debug {
    fn anchors(&self, x: f64, y: f64) -> Anchors;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Reference search: scans every sample for every query.
#[derive(Debug, Clone)]
pub struct LinearScan {
    samples: Vec<Sample>,
}

impl LinearScan {
    pub fn new(points: &PointSet) -> Self {
        Self {
            samples: points.samples().to_vec(),
        }
    }
}

impl QuadrantSearch for LinearScan {
    fn anchors(&self, x: f64, y: f64) -> Anchors {
        let mut best: [Option<Sample>; 4] = [None; 4];

        for s in &self.samples {
            for (slot, quadrant) in best.iter_mut().zip(Quadrant::ALL) {
                if !quadrant.contains(s, x, y) {
                    continue;
                }
                let replace = match slot {
                    Some(current) => quadrant.prefers(s, current),
                    None => true,
                };
                if replace {
                    *slot = Some(*s);
                }
            }
        }

        let mut anchors = Anchors::sentinels();
        for (found, quadrant) in best.into_iter().zip(Quadrant::ALL) {
            if let Some(sample) = found {
                *anchors.slot(quadrant) = sample;
            }
        }
        anchors
    }

    fn name(&self) -> &'static str {
        "linear_scan"
    }
}

/// A sample keyed for ordering. `-0.0` keys are folded into `0.0` so that
/// grouping agrees with `==`.
#[derive(Debug, Clone, Copy)]
struct Entry {
    x: f64,
    y: f64,
    sample: Sample,
}

/// Samples sorted by `(x, y)`, stable in point-set order.
///
/// Queries walk groups of equal x outward from the query column and stop at
/// the first group holding a sample on the right side in y, so dense
/// lattices resolve in a handful of binary searches.
#[derive(Debug, Clone)]
pub struct SortedIndex {
    entries: Vec<Entry>,
}

impl SortedIndex {
    pub fn new(points: &PointSet) -> Self {
        // NaN coordinates never satisfy a quadrant predicate.
        let mut entries: Vec<Entry> = points
            .iter()
            .filter(|s| s.has_ordered_coords())
            .map(|s| Entry {
                x: s.x + 0.0,
                y: s.y + 0.0,
                sample: *s,
            })
            .collect();

        entries.sort_by(|a, b| match a.x.total_cmp(&b.x) {
            Ordering::Equal => a.y.total_cmp(&b.y),
            other => other,
        });

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk x-groups with `e.x <= x` from the largest x downward.
    fn search_west(&self, x: f64, y: f64, south: bool) -> Option<Sample> {
        let mut end = self.entries.partition_point(|e| e.x <= x);
        while end > 0 {
            let gx = self.entries[end - 1].x;
            let start = self.entries[..end].partition_point(|e| e.x < gx);
            if let Some(s) = pick_in_group(&self.entries[start..end], y, south) {
                return Some(s);
            }
            end = start;
        }
        None
    }

    /// Walk x-groups with `e.x >= x` from the smallest x upward.
    fn search_east(&self, x: f64, y: f64, south: bool) -> Option<Sample> {
        let len = self.entries.len();
        let mut start = self.entries.partition_point(|e| e.x < x);
        while start < len {
            let gx = self.entries[start].x;
            let end = start + self.entries[start..].partition_point(|e| e.x <= gx);
            if let Some(s) = pick_in_group(&self.entries[start..end], y, south) {
                return Some(s);
            }
            start = end;
        }
        None
    }
}

/// Within one x-group (sorted by y, then point-set order) pick the largest
/// `y <= qy` when `south`, otherwise the smallest `y >= qy`. Among equal y
/// the earliest sample wins.
fn pick_in_group(group: &[Entry], qy: f64, south: bool) -> Option<Sample> {
    if south {
        let k = group.partition_point(|e| e.y <= qy);
        if k == 0 {
            return None;
        }
        let gy = group[k - 1].y;
        let first = group[..k].partition_point(|e| e.y < gy);
        Some(group[first].sample)
    } else {
        let k = group.partition_point(|e| e.y < qy);
        group.get(k).map(|e| e.sample)
    }
}

impl QuadrantSearch for SortedIndex {
    fn anchors(&self, x: f64, y: f64) -> Anchors {
        if x.is_nan() || y.is_nan() {
            return Anchors::sentinels();
        }

        let mut anchors = Anchors::sentinels();
        for quadrant in Quadrant::ALL {
            let found = if quadrant.is_west() {
                self.search_west(x, y, quadrant.is_south())
            } else {
                self.search_east(x, y, quadrant.is_south())
            };
            if let Some(sample) = found {
                *anchors.slot(quadrant) = sample;
            }
        }
        anchors
    }

    fn name(&self) -> &'static str {
        "sorted_index"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> PointSet {
        PointSet::new(vec![
            Sample::new(0.0, 0.0, 1.0),
            Sample::new(1.0, 0.0, 2.0),
            Sample::new(0.0, 1.0, 3.0),
            Sample::new(1.0, 1.0, 4.0),
        ])
    }

    fn both(points: &PointSet) -> [Box<dyn QuadrantSearch>; 2] {
        [
            Box::new(LinearScan::new(points)),
            Box::new(SortedIndex::new(points)),
        ]
    }

    #[test]
    fn test_interior_anchors() {
        let points = unit_square();
        for search in both(&points) {
            let a = search.anchors(0.25, 0.75);
            assert_eq!(a.q11.value, 1.0, "{}", search.name());
            assert_eq!(a.q21.value, 2.0, "{}", search.name());
            assert_eq!(a.q12.value, 3.0, "{}", search.name());
            assert_eq!(a.q22.value, 4.0, "{}", search.name());
        }
    }

    #[test]
    fn test_empty_quadrants_use_sentinels() {
        let points = unit_square();
        for search in both(&points) {
            let a = search.anchors(2.0, 2.0);
            assert_eq!(a.q11.value, 4.0);
            assert_eq!(a.q21, Quadrant::SouthEast.sentinel());
            assert_eq!(a.q12, Quadrant::NorthWest.sentinel());
            assert_eq!(a.q22, Quadrant::NorthEast.sentinel());
        }
    }

    #[test]
    fn test_sentinel_layout() {
        let s = Quadrant::SouthWest.sentinel();
        assert_eq!((s.x, s.y, s.value), (f64::MIN, f64::MIN, f64::MIN));
        let s = Quadrant::SouthEast.sentinel();
        assert_eq!((s.x, s.y, s.value), (f64::MAX, f64::MIN, f64::MIN));
        let s = Quadrant::NorthWest.sentinel();
        assert_eq!((s.x, s.y, s.value), (f64::MIN, f64::MAX, f64::MIN));
        let s = Quadrant::NorthEast.sentinel();
        assert_eq!((s.x, s.y, s.value), (f64::MAX, f64::MAX, f64::MIN));
    }

    #[test]
    fn test_x_before_y_preference() {
        // (0.9, 0.0) beats (0.5, 0.4) for q11 at (1, 0.5): larger x wins
        // even though the other sample is closer in y.
        let points = PointSet::new(vec![
            Sample::new(0.5, 0.4, 10.0),
            Sample::new(0.9, 0.0, 20.0),
            Sample::new(0.9, -1.0, 30.0),
        ]);
        for search in both(&points) {
            assert_eq!(search.anchors(1.0, 0.5).q11.value, 20.0);
        }
    }

    #[test]
    fn test_exact_duplicates_keep_first() {
        let points = PointSet::new(vec![
            Sample::new(1.0, 1.0, 7.0),
            Sample::new(1.0, 1.0, 8.0),
            Sample::new(1.0, 1.0, 9.0),
        ]);
        for search in both(&points) {
            let a = search.anchors(1.0, 1.0);
            for quadrant in Quadrant::ALL {
                assert_eq!(a.get(quadrant).value, 7.0, "{}", search.name());
            }
        }
    }

    #[test]
    fn test_signed_zero_groups_together() {
        let points = PointSet::new(vec![
            Sample::new(0.0, 0.0, 1.0),
            Sample::new(-0.0, 0.0, 2.0),
        ]);
        for search in both(&points) {
            assert_eq!(search.anchors(0.0, 0.0).q11.value, 1.0);
        }
    }

    #[test]
    fn test_nan_coordinates_never_anchor() {
        let points = PointSet::new(vec![
            Sample::new(f64::NAN, 0.0, 100.0),
            Sample::new(0.0, 0.0, 1.0),
        ]);
        for search in both(&points) {
            let a = search.anchors(0.0, 0.0);
            assert_eq!(a.q11.value, 1.0);
            assert_eq!(a.q22.value, 1.0);
        }
    }

    #[test]
    fn test_nan_query_yields_sentinels() {
        let points = unit_square();
        for search in both(&points) {
            assert_eq!(search.anchors(f64::NAN, 0.5), Anchors::sentinels());
        }
    }

    #[test]
    fn test_blend_degenerate_denominator() {
        let s = Sample::new(2.0, 3.0, 42.0);
        let anchors = Anchors {
            q11: s,
            q21: s,
            q12: s,
            q22: s,
        };
        assert_eq!(anchors.denominator(), 0.0);
        assert_eq!(anchors.blend(2.0, 3.0), 42.0);
    }

    #[test]
    fn test_blend_center() {
        let points = unit_square();
        let a = LinearScan::new(&points).anchors(0.5, 0.5);
        assert_eq!(a.denominator(), 1.0);
        assert_eq!(a.blend(0.5, 0.5), 2.5);
    }
}
