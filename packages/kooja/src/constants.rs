pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Scale applied to cumulative reward-per-share values
pub const REWARD_PRECISION: i128 = 1_000_000_000_000_000_000;

// Swap fee expressed as the fraction of the input that reaches the curve (99/100)
pub const FEE_NUMERATOR: i128 = 99;
pub const FEE_DENOMINATOR: i128 = 100;

pub const ONE_DAY: u64 = 86400;
pub const ONE_WEEK: u64 = 7 * ONE_DAY;
