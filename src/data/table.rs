use crate::error::{Error, Result};
use csv::{ReaderBuilder, Trim};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::io::Read;
use std::path::Path;

/// One row of a raw table: the natural key, the attribute values and the label text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub values: Vec<String>,
    pub label: String,
}

impl Record {
    pub fn new<S: Into<String>>(id: S, values: Vec<S>, label: S) -> Self {
        Self {
            id: id.into(),
            values: values.into_iter().map(Into::into).collect(),
            label: label.into(),
        }
    }
}

/// Delimited table with a header row.
///
/// The first column is the example key, the last one is the label and every
/// column in between is a categorical attribute named after its header.
#[derive(Clone, Debug)]
pub struct Table {
    attribute_names: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Creates a table from attribute names and records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputShape`] if a record doesn't carry exactly one value per attribute.
    pub fn new(attribute_names: Vec<String>, records: Vec<Record>) -> Result<Self> {
        for (position, record) in records.iter().enumerate() {
            if record.values.len() != attribute_names.len() {
                return Err(Error::InputShape(format!(
                    "record {} ({}) has {} attribute values, expected {}",
                    position + 1,
                    record.id,
                    record.values.len(),
                    attribute_names.len()
                )));
            }
        }
        Ok(Self {
            attribute_names,
            records,
        })
    }

    /// Reads a comma separated table from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a comma separated table with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputShape`] if the header has fewer than three columns
    /// or a row has a different number of columns than the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let num_columns = headers.len();
        if num_columns < 3 {
            return Err(Error::InputShape(format!(
                "a table needs a key, at least one attribute and a label column, found {} columns",
                num_columns
            )));
        }

        let attribute_names = headers
            .iter()
            .skip(1)
            .take(num_columns - 2)
            .map(String::from)
            .collect::<Vec<_>>();

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result?;
            if record.len() != num_columns {
                return Err(Error::InputShape(format!(
                    "row {} has {} columns, expected {}",
                    row + 1,
                    record.len(),
                    num_columns
                )));
            }

            let id = record.get(0).unwrap_or_default().to_string();
            let label = record.get(num_columns - 1).unwrap_or_default().to_string();
            let values = record
                .iter()
                .skip(1)
                .take(num_columns - 2)
                .map(String::from)
                .collect();

            records.push(Record { id, values, label });
        }

        Ok(Self {
            attribute_names,
            records,
        })
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shuffles the records and splits them into a training and a test table.
    ///
    /// # Arguments
    ///
    /// * `train_size` - Fraction of records kept for training, between 0.0 and 1.0.
    /// * `seed` - Seed of the shuffle. `None` seeds from entropy.
    pub fn train_test_split(&self, train_size: f64, seed: Option<u64>) -> Result<(Self, Self)> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(Error::Parameters(
                "train size should be between 0.0 and 1.0".into(),
            ));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.records.len()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.records.len() as f64 * train_size).floor() as usize;

        let pick = |indices: &[usize]| {
            indices
                .iter()
                .map(|&index| self.records[index].clone())
                .collect::<Vec<_>>()
        };

        let train = Self {
            attribute_names: self.attribute_names.clone(),
            records: pick(&indices[..train_size]),
        };
        let test = Self {
            attribute_names: self.attribute_names.clone(),
            records: pick(&indices[train_size..]),
        };

        Ok((train, test))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEATHER: &str = "\
Day,Outlook,Windy,Play
D1,Sunny,No,no
D2,Rain, Yes ,no
D3,Overcast,No,yes
";

    #[test]
    fn test_from_reader() {
        let table = Table::from_reader(WEATHER.as_bytes()).unwrap();

        assert_eq!(table.attribute_names(), &["Outlook", "Windy"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[1], Record::new("D2", vec!["Rain", "Yes"], "no"));
        assert_eq!(table.records()[2].label, "yes");
    }

    #[test]
    fn test_from_reader_too_few_columns() {
        let result = Table::from_reader("Day,Play\nD1,yes\n".as_bytes());
        assert!(matches!(result, Err(Error::InputShape(_))));
    }

    #[test]
    fn test_from_reader_ragged_row() {
        let data = "Day,Outlook,Windy,Play\nD1,Sunny,No,no\nD2,Rain,no\n";
        let result = Table::from_reader(data.as_bytes());
        assert!(matches!(result, Err(Error::InputShape(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Table::from_path("does/not/exist.csv");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_new_rejects_mismatched_record() {
        let result = Table::new(
            vec!["Outlook".into(), "Windy".into()],
            vec![Record::new("D1", vec!["Sunny"], "no")],
        );
        assert!(matches!(result, Err(Error::InputShape(_))));
    }

    #[test]
    fn test_train_test_split() {
        let table = Table::from_reader(WEATHER.as_bytes()).unwrap();
        let (train, test) = table.train_test_split(0.67, Some(42)).unwrap();

        assert_eq!(train.len(), 2);
        assert_eq!(test.len(), 1);
        assert_eq!(train.attribute_names(), table.attribute_names());
    }

    #[test]
    fn test_train_test_split_is_seeded() {
        let table = Table::from_reader(WEATHER.as_bytes()).unwrap();
        let (first, _) = table.train_test_split(0.5, Some(7)).unwrap();
        let (second, _) = table.train_test_split(0.5, Some(7)).unwrap();

        assert_eq!(first.records(), second.records());
    }

    #[test]
    fn test_train_test_split_invalid_size() {
        let table = Table::from_reader(WEATHER.as_bytes()).unwrap();
        assert!(matches!(
            table.train_test_split(1.5, None),
            Err(Error::Parameters(_))
        ));
    }
}
