use crate::error::{PathError, QueryError, Result};
use crate::math::{DistanceMetric, Point2};

/// Construction-time configuration for a [`PathSampler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SamplerOptions {
    /// Treat points as `(longitude, latitude)` and measure segments with
    /// [`DistanceMetric::LonLat`].
    pub geographic: bool,
    /// Treat the path as a cycle: out-of-range queries are reduced modulo the
    /// total length instead of rejected.
    pub wrap: bool,
}

impl SamplerOptions {
    /// Creates options with both flags off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the geographic flag.
    #[must_use]
    pub fn with_geographic(mut self, geographic: bool) -> Self {
        self.geographic = geographic;
        self
    }

    /// Sets the wrap flag.
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

/// Arc-length parameterization of an open or wrapping polyline.
///
/// Owns the point sequence and a cumulative distance table where entry `i`
/// is the path length from point 0 to point `i`. Both are computed once in
/// [`PathSampler::new`] and never change, so queries take `&self` and the
/// sampler can be shared freely across threads.
///
/// # Example
///
/// ```
/// use polysample::geometry::{PathSampler, SamplerOptions};
/// use polysample::math::Point2;
///
/// let path = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(3.0, 0.0),
///     Point2::new(3.0, 4.0),
/// ];
/// let sampler = PathSampler::new(path, SamplerOptions::default())?;
/// assert_eq!(sampler.total_length(), 7.0);
/// assert_eq!(sampler.point_at_distance(5.0)?, Point2::new(3.0, 2.0));
/// # Ok::<(), polysample::PolysampleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PathSampler {
    points: Vec<Point2>,
    cumulative: Vec<f64>,
    total_length: f64,
    metric: DistanceMetric,
    options: SamplerOptions,
}

impl PathSampler {
    /// Builds a sampler over `points`. O(n).
    ///
    /// # Errors
    ///
    /// Returns `PathError::TooFewPoints` if fewer than 2 points are supplied.
    pub fn new(points: Vec<Point2>, options: SamplerOptions) -> Result<Self> {
        if points.len() < 2 {
            return Err(PathError::TooFewPoints {
                count: points.len(),
            }
            .into());
        }

        let metric = DistanceMetric::from_geographic(options.geographic);

        let mut cumulative = Vec::with_capacity(points.len());
        let mut total_length = 0.0;
        cumulative.push(total_length);
        for pair in points.windows(2) {
            total_length += metric.segment_length(&pair[0], &pair[1]);
            cumulative.push(total_length);
        }

        tracing::debug!(
            points = points.len(),
            total_length,
            geographic = options.geographic,
            wrap = options.wrap,
            "built path sampler"
        );

        Ok(Self {
            points,
            cumulative,
            total_length,
            metric,
            options,
        })
    }

    /// Builds a sampler from raw `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `PathError::TooFewPoints` if fewer than 2 pairs are supplied.
    pub fn from_xy<I>(coords: I, options: SamplerOptions) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let points = coords
            .into_iter()
            .map(|(x, y)| Point2::new(x, y))
            .collect();
        Self::new(points, options)
    }

    /// The path's points, in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of points in the path (always ≥ 2).
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Cumulative distance table: same length as [`Self::points`], starts at 0,
    /// non-decreasing.
    #[must_use]
    pub fn cumulative_lengths(&self) -> &[f64] {
        &self.cumulative
    }

    /// Total path length (last entry of the cumulative table).
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// The options this sampler was built with.
    #[must_use]
    pub fn options(&self) -> SamplerOptions {
        self.options
    }

    /// The metric used to measure segments.
    #[must_use]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Length between two points under this sampler's metric.
    #[must_use]
    pub fn segment_length(&self, a: &Point2, b: &Point2) -> f64 {
        self.metric.segment_length(a, b)
    }

    /// Maps a proportion of the total length into `[0, 1]`.
    ///
    /// With wrapping, `p` is reduced modulo 1 into `[0, 1)`, so negative values
    /// and values above 1 are accepted.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::ParameterOutOfRange` if `p` is not finite, or if
    /// wrapping is off and `p` is outside `[0, 1]`.
    pub fn normalize_proportion(&self, p: f64) -> Result<f64> {
        if !p.is_finite() || (!self.options.wrap && !(0.0..=1.0).contains(&p)) {
            return Err(out_of_range("proportion", p, 1.0));
        }
        if self.options.wrap {
            Ok(wrap_into(p, 1.0))
        } else {
            Ok(p)
        }
    }

    /// Maps an absolute distance into `[0, total_length]`.
    ///
    /// With wrapping, `d` is reduced modulo the total length.
    ///
    /// # Errors
    ///
    /// - `QueryError::DegenerateTotalLength` if every point coincides
    /// - `QueryError::ParameterOutOfRange` if `d` is not finite, or if wrapping
    ///   is off and `d` is outside `[0, total_length]`
    pub fn normalize_length(&self, d: f64) -> Result<f64> {
        let total = self.require_length()?;
        if !d.is_finite() || (!self.options.wrap && !(0.0..=total).contains(&d)) {
            return Err(out_of_range("distance", d, total));
        }
        if self.options.wrap {
            Ok(wrap_into(d, total))
        } else {
            Ok(d)
        }
    }

    /// Returns the index `i` of the segment `[i, i + 1]` containing distance `d`.
    ///
    /// `d` is normalized first. The result is the greatest `i` with
    /// `cumulative[i] <= d`, clamped to `len() - 2`. A distance landing exactly
    /// on a table entry selects the segment that starts there.
    ///
    /// # Errors
    ///
    /// Same as [`Self::normalize_length`].
    pub fn index_before_length(&self, d: f64) -> Result<usize> {
        let d = self.normalize_length(d)?;
        Ok(self.segment_index(d))
    }

    /// Returns the point at distance `d` along the path.
    ///
    /// # Errors
    ///
    /// - Any error from [`Self::normalize_length`]
    /// - `QueryError::DegenerateSegment` if `d` lands in a zero-length segment
    pub fn point_at_distance(&self, d: f64) -> Result<Point2> {
        let d = self.normalize_length(d)?;
        let index = self.segment_index(d);

        let start = self.points[index];
        let end = self.points[index + 1];
        let segment = self.metric.segment_length(&start, &end);
        if segment <= 0.0 {
            tracing::trace!(index, distance = d, "query landed in zero-length segment");
            return Err(QueryError::DegenerateSegment { index }.into());
        }

        let t = (d - self.cumulative[index]) / segment;
        Ok(start + (end - start) * t)
    }

    /// Returns the point at proportion `p` of the total length.
    ///
    /// # Errors
    ///
    /// - `QueryError::DegenerateTotalLength` if every point coincides
    /// - Any error from [`Self::normalize_proportion`] or [`Self::point_at_distance`]
    pub fn point_at_proportion(&self, p: f64) -> Result<Point2> {
        let total = self.require_length()?;
        let p = self.normalize_proportion(p)?;
        self.point_at_distance(p * total)
    }

    /// Binary search over the cumulative table for an already-normalized `d`.
    fn segment_index(&self, d: f64) -> usize {
        let after = self.cumulative.partition_point(|&c| c <= d);
        after.saturating_sub(1).min(self.points.len() - 2)
    }

    fn require_length(&self) -> Result<f64> {
        if self.total_length > 0.0 {
            Ok(self.total_length)
        } else {
            Err(QueryError::DegenerateTotalLength.into())
        }
    }
}

/// Reduces `value` into `[0, period)`.
fn wrap_into(value: f64, period: f64) -> f64 {
    let r = value.rem_euclid(period);
    // rem_euclid rounds tiny negative inputs up to `period` itself.
    if r >= period {
        0.0
    } else {
        r
    }
}

fn out_of_range(parameter: &'static str, value: f64, max: f64) -> crate::PolysampleError {
    QueryError::ParameterOutOfRange {
        parameter,
        value,
        min: 0.0,
        max,
    }
    .into()
}
