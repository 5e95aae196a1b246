pub const REPORT_VERB: &str = "took";
pub const REPORT_UNIT: &str = "seconds";

// decimal places of the elapsed field, fixed so report lines are stable
pub const ELAPSED_DECIMALS: usize = 6;

pub const DEFAULT_SLEEP_MS: u64 = 100;
