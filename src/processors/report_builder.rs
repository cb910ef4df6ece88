use crate::error::Result;
use crate::models::ScaledTemperature;
use crate::processors::{AggregateTable, Slot};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry<'a> {
    pub name: &'a [u8],
    pub min: ScaledTemperature,
    pub mean: ScaledTemperature,
    pub max: ScaledTemperature,
}

/// Final per-station lines in ascending byte order of station name.
#[derive(Debug, Clone, Default)]
pub struct Report<'a> {
    entries: Vec<ReportEntry<'a>>,
}

impl<'a> Report<'a> {
    pub fn entries(&self) -> &[ReportEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write `name;min;mean;max\n` per station.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for entry in &self.entries {
            writer.write_all(entry.name)?;
            writeln!(writer, ";{};{};{}", entry.min, entry.mean, entry.max)?;
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.entries.len() * 32);
        self.write_to(&mut out)?;
        Ok(out)
    }
}

pub struct ReportBuilder;

impl ReportBuilder {
    /// Sort occupied slots by name bytes and resolve them into report lines.
    ///
    /// The mean is the truncating integer mean of the scaled values, so it is
    /// cut toward zero at the tenths digit rather than rounded.
    pub fn build<'a>(table: &AggregateTable<'a>) -> Report<'a> {
        let buffer = table.buffer();

        let mut slots: Vec<&Slot> = table.slots().collect();
        slots.sort_unstable_by(|a, b| a.key.cmp_bytes(buffer, &b.key, buffer));

        let entries = slots
            .into_iter()
            .map(|slot| ReportEntry {
                name: slot.key.resolve(buffer),
                min: slot.stats.min,
                mean: slot.stats.mean(),
                max: slot.stats.max,
            })
            .collect();

        Report { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::Worker;
    use pretty_assertions::assert_eq;

    fn report_text(input: &'static [u8]) -> String {
        let table = Worker::new(0, input, 0..input.len(), 64).run().unwrap();
        let bytes = ReportBuilder::build(&table).to_bytes().unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_report_example() {
        assert_eq!(
            report_text(b"Hamburg;12.3\nHamburg;10.0\nBerlin;-2.5\n"),
            "Berlin;-2.5;-2.5;-2.5\nHamburg;10.0;11.1;12.3\n"
        );
    }

    #[test]
    fn test_report_negative_mean() {
        assert_eq!(report_text(b"X;-1.0\nX;-2.0\n"), "X;-2.0;-1.5;-1.0\n");
    }

    #[test]
    fn test_report_prefix_orders_first() {
        assert_eq!(
            report_text(b"AB;1.0\nA;2.0\nB;0.0\n"),
            "A;2.0;2.0;2.0\nAB;1.0;1.0;1.0\nB;0.0;0.0;0.0\n"
        );
    }

    #[test]
    fn test_report_orders_by_bytes_not_locale() {
        let text = report_text("b;1.0\nZ;1.0\nÅ;1.0\na;1.0\n".as_bytes());
        let names: Vec<&str> = text
            .lines()
            .map(|line| line.split(';').next().unwrap())
            .collect();
        assert_eq!(names, vec!["Z", "a", "b", "Å"]);
    }

    #[test]
    fn test_report_mean_between_bounds() {
        let input = b"S;-0.3\nS;0.4\nS;-0.2\n";
        let table = Worker::new(0, input, 0..input.len(), 8).run().unwrap();
        let report = ReportBuilder::build(&table);
        let entry = &report.entries()[0];

        assert!(entry.min <= entry.mean && entry.mean <= entry.max);
        assert_eq!(entry.mean, ScaledTemperature::new(0));
    }

    #[test]
    fn test_empty_report() {
        let table = AggregateTable::new(b"", 4);
        let report = ReportBuilder::build(&table);
        assert!(report.is_empty());
        assert!(report.to_bytes().unwrap().is_empty());
    }
}
