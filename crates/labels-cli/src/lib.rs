//! Library components of the mailing-label CLI.

pub mod backup;
pub mod download;
pub mod logging;
pub mod pipeline;
