//! Platform CLI implementations

mod process;

pub use process::{ChildOutput, ProcessPlatform};
