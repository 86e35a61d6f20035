// File: crates/trends-series/src/builder.rs
// Summary: Series builder: normalize raw rows, find the projected cutoff, split into four segments.

use chrono::NaiveDate;

use crate::domain::Domain;
use crate::error::{Result, SeriesError};
use crate::month::{offset_months, parse_label, short_label, MonthFormatter};
use crate::point::{Point, Segment};
use crate::row::RawRow;
use crate::scale::ScaleUnit;
use crate::schema::{Schema, GROUP, MONTH, VOLUME};

/// Trailing months after the cutoff that are plotted as projected.
pub const PROJECTED_MONTHS: u32 = 5;

/// Exact indicator text for seasonally adjusted rows.
pub const SEASONALLY_ADJUSTED: &str = "Seasonally Adjusted";

#[derive(Clone, Debug, PartialEq)]
pub struct BuildOptions {
    pub schema: Schema,
    /// Keep only rows whose raw `group` equals this value.
    pub group_filter: Option<String>,
    pub scale: ScaleUnit,
}

impl BuildOptions {
    pub fn new(schema: Schema, scale: ScaleUnit) -> Self {
        Self { schema, group_filter: None, scale }
    }

    /// Options for a chart source, deriving the scale from its file name.
    pub fn for_source(schema: Schema, source: &str) -> Self {
        Self::new(schema, ScaleUnit::for_source(source))
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group_filter = Some(group.into());
        self
    }
}

/// The four plotted segments of one chart plus the values they were cut by.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSet {
    pub historical_unadjusted: Vec<Point>,
    pub projected_unadjusted: Vec<Point>,
    pub historical_adjusted: Vec<Point>,
    pub projected_adjusted: Vec<Point>,
    /// Last historical month; also the first projected month.
    pub cutoff: NaiveDate,
    /// Extents over every plotted point.
    pub domain: Domain,
    pub scale: ScaleUnit,
}

impl SeriesSet {
    pub fn segment(&self, segment: Segment) -> &[Point] {
        match (segment.adjusted, segment.projected) {
            (false, false) => &self.historical_unadjusted,
            (false, true) => &self.projected_unadjusted,
            (true, false) => &self.historical_adjusted,
            (true, true) => &self.projected_adjusted,
        }
    }

    /// Segments in draw order.
    pub fn segments(&self) -> impl Iterator<Item = (Segment, &[Point])> + '_ {
        Segment::ALL.into_iter().map(move |s| (s, self.segment(s)))
    }

    /// Two caption lines drawn at the projected marker.
    pub fn projection_caption(&self) -> (String, String) {
        let last_final = offset_months(self.cutoff, -1).unwrap_or(self.cutoff);
        (format!("Values after {}", short_label(last_final)), "are projected".to_string())
    }
}

/// Normalize one raw row. `index` is only used for error reporting.
pub fn normalize_row(
    index: usize,
    row: &RawRow,
    options: &BuildOptions,
    formatter: &dyn MonthFormatter,
) -> Result<Point> {
    let missing = |column| SeriesError::MissingColumn { row: index, column };

    let raw_month = row.get(MONTH).ok_or_else(|| missing(MONTH))?;
    let month_index: i64 = raw_month
        .trim()
        .parse()
        .map_err(|_| SeriesError::data_format(index, MONTH, raw_month))?;
    let month = formatter
        .label(month_index)
        .as_deref()
        .and_then(parse_label)
        .ok_or_else(|| SeriesError::data_format(index, MONTH, raw_month))?;

    let raw_value = row.value().ok_or_else(|| missing(VOLUME))?;
    let volume = raw_value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SeriesError::data_format(index, VOLUME, raw_value))?;

    let seasonal_column = options.schema.seasonal_column();
    let indicator = row.get(seasonal_column).ok_or_else(|| missing(seasonal_column))?;

    let group = row.get(GROUP).map(str::to_string);
    if options.group_filter.is_some() && group.is_none() {
        return Err(missing(GROUP));
    }

    Ok(Point {
        month,
        volume: options.scale.apply(volume),
        seasonal: indicator == SEASONALLY_ADJUSTED,
        group,
    })
}

/// `max(month) - PROJECTED_MONTHS` over `points`.
pub fn projected_cutoff(points: &[Point]) -> Result<NaiveDate> {
    let (row, last) = points
        .iter()
        .enumerate()
        .max_by_key(|(_, p)| p.month)
        .ok_or(SeriesError::EmptyDataset)?;
    offset_months(last.month, -(PROJECTED_MONTHS as i32))
        .ok_or_else(|| SeriesError::data_format(row, MONTH, &last.month.to_string()))
}

/// Build the four plotted segments from raw rows.
///
/// The cutoff is taken over every row of the file; the group filter is applied
/// afterwards on the raw `group` value. Any malformed row fails the whole build.
pub fn build_series(
    rows: &[RawRow],
    options: &BuildOptions,
    formatter: &dyn MonthFormatter,
) -> Result<SeriesSet> {
    let mut points = rows
        .iter()
        .enumerate()
        .map(|(i, row)| normalize_row(i, row, options, formatter))
        .collect::<Result<Vec<_>>>()?;

    let cutoff = projected_cutoff(&points)?;

    if let Some(group) = options.group_filter.as_deref() {
        points.retain(|p| p.group.as_deref() == Some(group));
    }
    let domain = Domain::from_points(&points)?;

    // stable: rows sharing a month keep file order
    points.sort_by_key(|p| p.month);

    let pick = |adjusted: bool, keep: fn(NaiveDate, NaiveDate) -> bool| -> Vec<Point> {
        points
            .iter()
            .filter(|p| p.seasonal == adjusted && keep(p.month, cutoff))
            .cloned()
            .collect()
    };
    let historical = |m: NaiveDate, c: NaiveDate| m <= c;
    let projected = |m: NaiveDate, c: NaiveDate| m >= c;

    Ok(SeriesSet {
        historical_unadjusted: pick(false, historical),
        projected_unadjusted: pick(false, projected),
        historical_adjusted: pick(true, historical),
        projected_adjusted: pick(true, projected),
        cutoff,
        domain,
        scale: options.scale,
    })
}
