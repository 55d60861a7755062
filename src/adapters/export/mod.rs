//! Export adapters. Turn generated campaigns into file formats.

pub mod csv_utils;

pub use csv_utils::campaigns_to_csv;
