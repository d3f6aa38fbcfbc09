/// Input file used when the configuration names none
pub const DEFAULT_INPUT: &str = "sample_detsim.jsonl";
/// Log level used when neither the configuration nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Name of the top-level task
pub const DEFAULT_TASK_NAME: &str = "top";

/// Data store field names shared by the converter and the summary algorithm
pub mod fields {
    pub const X: &str = "x";
    pub const Y: &str = "y";
    pub const Z: &str = "z";
    pub const EDEP: &str = "edep";
    pub const PMTID: &str = "pmtid";
    pub const NPE: &str = "npe";
    pub const HITTIME: &str = "hittime";
}
