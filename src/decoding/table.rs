//! Contains the `Table` structure holding one decoded series granularity.

use crate::decoding::error::DecodeError;
use crate::decoding::time_index::TimeIndex;
use crate::types::granularity::Granularity;
use crate::types::variable::{ColumnValues, VariableColumn};
use crate::types::weather_code::WeatherCode;
use chrono::{DateTime, Utc};
use log::warn;
use polars::prelude::*;
use std::collections::HashSet;

/// Name of the timestamp column, always the first column of a table.
pub const DATE_COLUMN: &str = "date";

/// A decoded series: a time index plus one equal-length column per requested variable.
///
/// Columns keep the order the variables were requested in. Every column has
/// exactly [`Table::height`] values.
///
/// # Examples
///
/// ```
/// use openmeteo_frames::{ColumnValues, Granularity, Table, TimeIndex, VariableColumn};
///
/// let index = TimeIndex::build(0, 7200, 3600, 0).unwrap();
/// let table = Table::assemble(
///     Granularity::Hourly,
///     index,
///     vec![VariableColumn::new("precipitation", ColumnValues::Float(vec![0.0, 0.4]))],
/// )
/// .unwrap();
///
/// assert_eq!(table.column_names(), vec!["date", "precipitation"]);
/// assert_eq!(table.height(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    granularity: Granularity,
    index: TimeIndex,
    columns: Vec<VariableColumn>,
}

impl Table {
    /// Zips a time index with its columns.
    ///
    /// No reordering, filtering or resampling happens: columns are kept exactly
    /// as given.
    ///
    /// # Errors
    ///
    /// * [`DecodeError::LengthMismatch`] if a column's length differs from the index length.
    /// * [`DecodeError::DuplicateColumn`] if two columns share a name, or one is named `date`.
    pub fn assemble(
        granularity: Granularity,
        index: TimeIndex,
        columns: Vec<VariableColumn>,
    ) -> Result<Self, DecodeError> {
        let mut seen = HashSet::with_capacity(columns.len() + 1);
        seen.insert(DATE_COLUMN);

        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DecodeError::DuplicateColumn {
                    granularity,
                    column: column.name.clone(),
                });
            }
            if column.len() != index.len() {
                warn!(
                    "{} column '{}' has {} values for {} timestamps",
                    granularity,
                    column.name,
                    column.len(),
                    index.len()
                );
                return Err(DecodeError::LengthMismatch {
                    granularity,
                    column: column.name.clone(),
                    expected: index.len(),
                    found: column.len(),
                });
            }
        }

        Ok(Self {
            granularity,
            index,
            columns,
        })
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn time_index(&self) -> &TimeIndex {
        &self.index
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.index.len()
    }

    /// Number of columns, including `date`.
    pub fn width(&self) -> usize {
        self.columns.len() + 1
    }

    /// `"date"` followed by the variable names in request order.
    pub fn column_names(&self) -> Vec<&str> {
        std::iter::once(DATE_COLUMN)
            .chain(self.columns.iter().map(|c| c.name.as_str()))
            .collect()
    }

    /// Offset-shifted epoch seconds of every row.
    pub fn dates(&self) -> impl Iterator<Item = i64> + '_ {
        self.index.iter()
    }

    /// Row timestamps as `DateTime<Utc>` values carrying the local wall-clock time.
    pub fn datetimes(&self) -> Option<Vec<DateTime<Utc>>> {
        self.index.datetimes()
    }

    /// Variable columns in request order, without `date`.
    pub fn columns(&self) -> &[VariableColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&VariableColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn f32_values(&self, name: &str) -> Option<&[f32]> {
        self.column(name).and_then(VariableColumn::as_f32)
    }

    pub fn i64_values(&self, name: &str) -> Option<&[i64]> {
        self.column(name).and_then(VariableColumn::as_i64)
    }

    /// Decoded `weather_code` column. Unknown codes are `None`.
    pub fn weather_codes(&self) -> Option<Vec<Option<WeatherCode>>> {
        let codes: Vec<Option<WeatherCode>> = match &self.column("weather_code")?.values {
            ColumnValues::Float(values) => values.iter().map(|v| WeatherCode::from_f32(*v)).collect(),
            ColumnValues::Int64(values) => values.iter().map(|v| WeatherCode::from_i64(*v)).collect(),
        };
        Some(codes)
    }

    /// Converts the table into a Polars `DataFrame`.
    ///
    /// The `date` column has type `Datetime(Milliseconds, None)` and holds the
    /// offset-shifted timestamps. Variable columns follow in request order as
    /// `Float32` or `Int64`.
    ///
    /// # Errors
    ///
    /// Returns a [`PolarsError`] if a timestamp cannot be expressed in
    /// milliseconds or the frame cannot be built.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let millis = self
            .dates()
            .map(|secs| secs.checked_mul(1_000))
            .collect::<Option<Vec<i64>>>()
            .ok_or_else(|| {
                PolarsError::ComputeError(
                    format!("{} timestamps exceed the millisecond range", self.granularity).into(),
                )
            })?;

        let date = Series::new(DATE_COLUMN.into(), millis)
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

        let mut frame_columns = Vec::with_capacity(self.width());
        frame_columns.push(Column::from(date));
        for column in &self.columns {
            let series = match &column.values {
                ColumnValues::Float(values) => Series::new(column.name.as_str().into(), values),
                ColumnValues::Int64(values) => Series::new(column.name.as_str().into(), values),
            };
            frame_columns.push(Column::from(series));
        }

        DataFrame::new(frame_columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutely_columns() -> Vec<VariableColumn> {
        vec![
            VariableColumn::new("is_day", ColumnValues::Float(vec![0.0, 0.0, 1.0, 1.0])),
            VariableColumn::new(
                "apparent_temperature",
                ColumnValues::Float(vec![8.1, 8.0, 8.4, 9.2]),
            ),
            VariableColumn::new("temperature_2m", ColumnValues::Float(vec![10.0, 9.9, 10.3, 11.0])),
            VariableColumn::new("precipitation", ColumnValues::Float(vec![0.0, 0.1, 0.0, 0.0])),
        ]
    }

    #[test]
    fn column_order_is_date_then_request_order() -> Result<(), DecodeError> {
        let index = TimeIndex::build(0, 3600, 900, 3600)?;
        let table = Table::assemble(Granularity::Minutely15, index, minutely_columns())?;
        assert_eq!(
            table.column_names(),
            vec!["date", "is_day", "apparent_temperature", "temperature_2m", "precipitation"]
        );
        assert_eq!(table.dates().collect::<Vec<_>>(), vec![3600, 4500, 5400, 6300]);
        assert!(table.columns().iter().all(|c| c.len() == table.height()));
        Ok(())
    }

    #[test]
    fn length_mismatch_is_rejected() -> Result<(), DecodeError> {
        let index = TimeIndex::build(0, 3600, 900, 0)?;
        let mut columns = minutely_columns();
        columns[2] = VariableColumn::new("temperature_2m", ColumnValues::Float(vec![1.0; 3]));

        let result = Table::assemble(Granularity::Minutely15, index, columns);
        assert_eq!(
            result,
            Err(DecodeError::LengthMismatch {
                granularity: Granularity::Minutely15,
                column: "temperature_2m".to_string(),
                expected: 4,
                found: 3,
            })
        );
        Ok(())
    }

    #[test]
    fn duplicate_and_reserved_names_are_rejected() -> Result<(), DecodeError> {
        let index = TimeIndex::build(0, 900, 900, 0)?;
        let dup = vec![
            VariableColumn::new("precipitation", ColumnValues::Float(vec![0.0])),
            VariableColumn::new("precipitation", ColumnValues::Float(vec![0.1])),
        ];
        assert!(matches!(
            Table::assemble(Granularity::Hourly, index, dup),
            Err(DecodeError::DuplicateColumn { .. })
        ));

        let reserved = vec![VariableColumn::new("date", ColumnValues::Int64(vec![0]))];
        assert!(matches!(
            Table::assemble(Granularity::Hourly, index, reserved),
            Err(DecodeError::DuplicateColumn { ref column, .. }) if column == "date"
        ));
        Ok(())
    }

    #[test]
    fn empty_index_accepts_empty_columns() -> Result<(), DecodeError> {
        let index = TimeIndex::build(100, 100, 3600, 0)?;
        let columns = vec![VariableColumn::new("temperature_2m", ColumnValues::Float(vec![]))];
        let table = Table::assemble(Granularity::Hourly, index, columns)?;
        assert_eq!(table.height(), 0);
        assert_eq!(table.width(), 2);
        Ok(())
    }

    #[test]
    fn weather_codes_are_decoded_from_floats() -> Result<(), DecodeError> {
        let index = TimeIndex::build(0, 7200, 3600, 0)?;
        let columns = vec![VariableColumn::new(
            "weather_code",
            ColumnValues::Float(vec![3.0, 42.0]),
        )];
        let table = Table::assemble(Granularity::Hourly, index, columns)?;
        assert_eq!(
            table.weather_codes(),
            Some(vec![Some(WeatherCode::Overcast), None])
        );
        Ok(())
    }

    #[test]
    fn dataframe_keeps_schema_and_values() -> Result<(), Box<dyn std::error::Error>> {
        let index = TimeIndex::build(1_700_000_000, 1_700_172_800, 86_400, -25_200)?;
        let columns = vec![
            VariableColumn::new("temperature_2m_max", ColumnValues::Float(vec![12.5, 13.0])),
            VariableColumn::new(
                "sunrise",
                ColumnValues::Int64(vec![1_700_026_000, 1_700_112_500]),
            ),
        ];
        let table = Table::assemble(Granularity::Daily, index, columns)?;
        let df = table.to_dataframe()?;

        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["date", "temperature_2m_max", "sunrise"]);
        assert_eq!(df.height(), 2);
        assert!(matches!(
            df.column("date")?.dtype(),
            DataType::Datetime(TimeUnit::Milliseconds, None)
        ));
        assert_eq!(df.column("temperature_2m_max")?.dtype(), &DataType::Float32);

        let dates = df.column("date")?.datetime()?;
        assert_eq!(dates.get(0), Some((1_700_000_000 - 25_200) * 1_000));
        let sunrise = df.column("sunrise")?.i64()?;
        assert_eq!(sunrise.get(1), Some(1_700_112_500));
        Ok(())
    }
}
