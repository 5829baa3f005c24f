/// Decimal precision for aggregate amounts returned to clients.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of expense categories shown in the yearly ranking.
pub const TOP_CATEGORIES_LIMIT: usize = 5;
