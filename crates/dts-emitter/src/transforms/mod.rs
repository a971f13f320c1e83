//! Tree rewrites applied before printing.
//!
//! `downlevel` walks each file once and lowers the declaration forms older
//! compilers reject:
//!
//! - `get x(): T` becomes `readonly x: T` (no `readonly` when a matching
//!   `set x` exists);
//! - `set x(v: T)` becomes `x: T`, or disappears next to a matching getter;
//! - `export * as ns from "m"` becomes `import * as ns_1 from "m";` followed
//!   by `export { ns_1 as ns } from "m";`.

pub mod accessors;
pub mod downlevel;
mod errors;
pub mod reexport;
pub mod unique_name;

pub use downlevel::{DownlevelTransformer, VisitResult, transform_all, transform_file};
pub use errors::TransformError;
