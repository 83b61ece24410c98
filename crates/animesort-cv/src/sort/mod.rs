//! Classification-and-sort pipeline

pub mod sorter;

pub use sorter::FaceSorter;
