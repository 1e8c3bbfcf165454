pub mod builder;
pub mod calculator;
pub mod merge;
pub mod session;
