//! Course data file input

pub mod csv_parser;

pub use csv_parser::{find_year, parse_course_csv, read_course_records};
