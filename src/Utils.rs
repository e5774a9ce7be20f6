//! different utility modules used throughout the project
/// terminal and file logger setup
pub mod logger;
/// pretty-printing of item counts and unit weights as tables
pub mod weight_table;
