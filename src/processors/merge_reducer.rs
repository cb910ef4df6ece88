use crate::error::Result;
use crate::processors::AggregateTable;
use tracing::debug;

/// Folds per-worker tables into one.
///
/// Every table comes from the same buffer and slot count, so a station sits
/// at the same slot index in each table unless probing displaced it there;
/// `merge_slot` finds it either way.
pub struct MergeReducer<'a> {
    buffer: &'a [u8],
    table_capacity: usize,
}

impl<'a> MergeReducer<'a> {
    pub fn new(buffer: &'a [u8], table_capacity: usize) -> Self {
        Self {
            buffer,
            table_capacity,
        }
    }

    /// Consume all tables. The result does not depend on their order.
    pub fn reduce(&self, tables: Vec<AggregateTable<'a>>) -> Result<AggregateTable<'a>> {
        let mut tables = tables.into_iter();
        let Some(mut merged) = tables.next() else {
            return Ok(AggregateTable::new(self.buffer, self.table_capacity));
        };

        for (index, table) in tables.enumerate() {
            Self::merge_into(&mut merged, table)?;
            debug!(merged_tables = index + 2, stations = merged.len(), "merged worker table");
        }

        Ok(merged)
    }

    pub fn merge_into(destination: &mut AggregateTable<'a>, source: AggregateTable<'a>) -> Result<()> {
        debug_assert!(std::ptr::eq(destination.buffer(), source.buffer()));
        for slot in source.slots() {
            destination.merge_slot(slot)?;
        }
        Ok(())
    }
}
