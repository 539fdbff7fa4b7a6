pub mod command;
pub mod error;
pub mod generator;
pub mod parse;
pub mod reference;
pub mod workload;
