//! Candidate queue and the decision pass consuming it.

mod pass;
mod queue;

pub use pass::*;
pub use queue::*;

#[cfg(test)]
mod test;
