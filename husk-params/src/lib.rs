//! Stage parameter descriptors and routing.
//!
//! Each processing stage of an adapter (config-generation,
//! argument-construction, result-processing) declares the named settings it
//! accepts as an ordered [`StageParams`] set. At run time the caller's flat
//! settings map is routed to each stage through [`StageParams::route`], and
//! the union of all stages, [`MergedParams`], documents the adapter's full
//! accepted surface and rejects unknown names.
//!
//! Routing is a pure map-filter over declared descriptors; no stage ever sees
//! a name it did not declare.

mod error;
mod route;
mod spec;

pub use error::{Error, Result};
pub use route::{MergedParams, ParamMap, StageParams, merge};
pub use spec::{ParamSpec, ParamType, value_type_name};
