pub mod attempt;
#[cfg(feature = "deferred")]
pub mod deferred;
pub mod maybe;
pub mod outcome;
pub mod thrown;
