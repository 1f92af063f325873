// ################################################################
//                              TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ################################################################
//                              TIME
// ################################################################

pub const ONE_HOUR: u64 = 60 * 60;
pub const ONE_DAY: u64 = 24 * ONE_HOUR;

/// Time it takes for an esRNT lock to become fully redeemable for RNT
pub const LOCK_PERIOD: u64 = 30 * ONE_DAY;

// ################################################################
//                             TOKENS
// ################################################################

pub const MAX_DECIMALS: u32 = 18;
