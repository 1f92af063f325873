use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    #[doc = "Amount must be strictly positive"]
    InvalidAmount = 1,
    #[doc = "Unstake amount exceeds the staked principal"]
    InsufficientPrincipal = 2,
    #[doc = "Spender allowance is lower than the requested amount"]
    InsufficientAllowance = 3,
    #[doc = "Account balance is lower than the requested amount"]
    InsufficientBalance = 4,
    Unauthorized = 5,
    OperationPaused = 6,
    MathError = 7,
    CastingFailure = 8,
    #[doc = "Token decimals above the supported maximum"]
    InvalidDecimals = 9,
    LockNotFound = 10,
    NotInitialized = 11,
    #[doc = "Allowance expiration ledger already passed"]
    InvalidExpirationLedger = 12,
}

pub type RntResult<T = ()> = core::result::Result<T, ErrorCode>;
