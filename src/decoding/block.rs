//! Positional decoding of series blocks.

use crate::decoding::error::DecodeError;
use crate::decoding::table::Table;
use crate::decoding::time_index::TimeIndex;
use crate::envelope::{RawSeriesBlock, RawVariable};
use crate::types::granularity::Granularity;
use crate::types::variable::{ColumnValues, DType, VariableColumn, VariableSpec};
use log::{debug, warn};

/// Fails unless a block holds exactly one slot per requested variable.
pub(crate) fn check_slot_count(
    granularity: Granularity,
    slots: usize,
    specs: &[VariableSpec],
) -> Result<(), DecodeError> {
    if slots != specs.len() {
        warn!(
            "{} block has {} variable slots, expected {}",
            granularity,
            slots,
            specs.len()
        );
        return Err(DecodeError::VariableCountMismatch {
            granularity,
            expected: specs.len(),
            found: slots,
        });
    }
    Ok(())
}

fn decode_slot(slot: &RawVariable, spec: &VariableSpec) -> Result<ColumnValues, DecodeError> {
    let values = match spec.dtype {
        DType::Float => slot.values.clone().map(ColumnValues::Float),
        DType::Int64 => slot.values_int64.clone().map(ColumnValues::Int64),
    };
    values.ok_or_else(|| DecodeError::UnknownDType {
        dtype: spec.dtype.to_string(),
        variable: Some(spec.name.clone()),
    })
}

/// Decodes the variable slots of a series block into one column per spec, in spec order.
///
/// Slot `i` is read as `specs[i].dtype`. Column lengths are not checked here;
/// that happens when the columns are assembled against the block's time index.
///
/// # Errors
///
/// * [`DecodeError::VariableCountMismatch`] if the block does not hold exactly
///   `specs.len()` slots.
/// * [`DecodeError::UnknownDType`] if a slot carries no values of the requested type.
pub fn decode_series_block(
    granularity: Granularity,
    block: &RawSeriesBlock,
    specs: &[VariableSpec],
) -> Result<Vec<VariableColumn>, DecodeError> {
    check_slot_count(granularity, block.variables.len(), specs)?;

    block
        .variables
        .iter()
        .zip(specs)
        .map(|(slot, spec)| {
            decode_slot(slot, spec).map(|values| VariableColumn::new(spec.name.clone(), values))
        })
        .collect()
}

/// Decodes a series block into a [`Table`]: columns first, then the time index
/// from the block header shifted by `utc_offset`, then assembly.
pub fn decode_series(
    granularity: Granularity,
    block: &RawSeriesBlock,
    specs: &[VariableSpec],
    utc_offset: i64,
) -> Result<Table, DecodeError> {
    let columns = decode_series_block(granularity, block, specs)?;
    let index = TimeIndex::build(block.time, block.time_end, block.interval, utc_offset)?;
    let table = Table::assemble(granularity, index, columns)?;
    debug!(
        "Decoded {} table with {} rows and {} variables",
        granularity,
        table.height(),
        specs.len()
    );
    Ok(table)
}
