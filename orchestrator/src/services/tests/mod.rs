//! Service-specific tests
//!
//! Each service has its own test file with dedicated fixtures and helpers.


// Common test utilities for services
pub mod common {
    use crate::core::Row;

    /// Build a row from string literals
    pub fn row(fields: &[&str]) -> Row {
        fields.iter().map(|field| field.to_string()).collect()
    }

    /// Read CSV bytes back as rows, dropping separator records
    pub fn read_rows(bytes: &[u8]) -> Vec<Row> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);
        reader
            .records()
            .map(|record| record.expect("valid csv").iter().map(str::to_string).collect::<Row>())
            .filter(|row| row.iter().any(|field| !field.is_empty()))
            .collect()
    }
}
