/// Slack applied to every rule inequality so floating-point noise never flips
/// a pass into a violation.
pub const TOLERANCE: f64 = 1e-6;

/// Surface stall width in feet.
pub const DEFAULT_STALL_WIDTH_FT: f64 = 9.0;
/// Surface stall depth in feet.
pub const DEFAULT_STALL_DEPTH_FT: f64 = 18.0;
/// Two-way drive aisle depth in feet.
pub const DEFAULT_AISLE_DEPTH_FT: f64 = 24.0;
/// Gap kept between the building's rear face and the first parking row.
pub const DEFAULT_CLEARANCE_FT: f64 = 2.0;
/// Most stalls one surface layout will place, however wide the lot.
pub const MAX_SURFACE_STALLS: u32 = 10_000;

/// Ruleset substituted when a scenario references an unknown ruleset id.
pub const DEFAULT_RULESET_ID: &str = "sample_current";
/// Ruleset used for scenario B in a fresh session.
pub const DEFAULT_COMPARE_RULESET_ID: &str = "sample_proposed";
/// Preset form substituted when a scenario references an unknown preset id.
pub const DEFAULT_PRESET_ID: &str = "two_flat";
/// Lot preset loaded into a fresh session.
pub const DEFAULT_LOT_PRESET_ID: &str = "lot_50x150";
