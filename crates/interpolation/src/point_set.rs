//! Immutable collections of scattered samples.

use field_common::{BoundingBox, FieldError, Result, Sample};

/// An ordered, read-only collection of scattered samples.
///
/// The bounding box is derived once at construction. Sample order never
/// changes the interpolated values except for exact `(x, y)` duplicates,
/// where the earliest sample is the one chosen as an anchor.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    samples: Vec<Sample>,
    bbox: Option<BoundingBox>,
}

impl PointSet {
    /// Build a point set. An empty vector is accepted; the error is deferred
    /// to [`PointSet::bounding_box`].
    pub fn new(samples: Vec<Sample>) -> Self {
        let bbox = BoundingBox::from_samples(&samples);
        Self { samples, bbox }
    }

    /// Build a point set from a sequence that may be absent.
    ///
    /// `None` fails with `InvalidArgument`; `Some(vec![])` is legal.
    pub fn from_optional(samples: Option<Vec<Sample>>) -> Result<Self> {
        samples
            .map(Self::new)
            .ok_or_else(|| FieldError::invalid_argument("sample sequence is absent"))
    }

    /// Componentwise min/max over all samples.
    pub fn bounding_box(&self) -> Result<BoundingBox> {
        self.bbox
            .ok_or_else(|| FieldError::empty_input("bounding box of an empty point set"))
    }

    /// Minimum and maximum sample value, ignoring NaN values.
    ///
    /// Fails with `EmptyInput` when the set is empty or every value is NaN.
    pub fn value_range(&self) -> Result<(f64, f64)> {
        self.samples
            .iter()
            .map(|s| s.value)
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
            .ok_or_else(|| FieldError::empty_input("value range of a point set without values"))
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FromIterator<Sample> for PointSet {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_cached() {
        let points: PointSet = vec![
            Sample::new(1.0, 10.0, 0.0),
            Sample::new(-4.0, 2.0, 5.0),
            Sample::new(3.0, 7.0, -1.0),
        ]
        .into_iter()
        .collect();

        let bbox = points.bounding_box().unwrap();
        assert_eq!(bbox.extents(), (-4.0, 3.0, 2.0, 10.0));
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_empty_set_is_legal_until_bbox() {
        let points = PointSet::new(vec![]);
        assert!(points.is_empty());

        let err = points.bounding_box().unwrap_err();
        assert!(matches!(err, FieldError::EmptyInput(_)));

        let err = points.value_range().unwrap_err();
        assert!(matches!(err, FieldError::EmptyInput(_)));
    }

    #[test]
    fn test_absent_sequence_rejected() {
        let err = PointSet::from_optional(None).unwrap_err();
        assert!(matches!(err, FieldError::InvalidArgument(_)));

        let points = PointSet::from_optional(Some(vec![])).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_value_range_skips_nan() {
        let points = PointSet::new(vec![
            Sample::new(0.0, 0.0, f64::NAN),
            Sample::new(1.0, 0.0, 2.0),
            Sample::new(2.0, 0.0, -3.0),
        ]);
        assert_eq!(points.value_range().unwrap(), (-3.0, 2.0));
    }

    #[test]
    fn test_value_range_all_nan_is_empty_input() {
        let points = PointSet::new(vec![
            Sample::new(0.0, 0.0, f64::NAN),
            Sample::new(1.0, 1.0, f64::NAN),
        ]);
        let err = points.value_range().unwrap_err();
        assert!(matches!(err, FieldError::EmptyInput(_)));

        let points = PointSet::new(vec![Sample::new(0.0, 0.0, f64::NEG_INFINITY)]);
        assert_eq!(
            points.value_range().unwrap(),
            (f64::NEG_INFINITY, f64::NEG_INFINITY)
        );
    }
}
