/// Decimal precision for percentage figures handed to the display layer
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
