//! Export of session collections to external file formats.

pub mod csv;

pub use csv::{
    export_csv_to_file, records_to_csv, CsvRecord, ExportError, GOALS_FILENAME, HISTORY_FILENAME,
};
