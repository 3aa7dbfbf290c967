//! Site content: page bodies and the visit counter.

pub mod counter;
pub mod pages;

pub use counter::VisitCounter;
