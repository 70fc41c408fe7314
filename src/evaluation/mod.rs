//! Route assembly: legs, durations, totals, and the CO2 estimate.

mod assembler;

pub use assembler::RouteAssembler;
