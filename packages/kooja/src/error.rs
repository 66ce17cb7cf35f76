use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    #[doc = "A required amount argument is zero"]
    ZeroAmount = 3,
    NegativeAmount = 4,
    #[doc = "Offered quote amount is below what the current reserve ratio requires"]
    InsufficientQuoteAmount = 5,
    InsufficientBalance = 6,
    #[doc = "Pricing or withdrawal against a pool with no reserves"]
    EmptyReserves = 7,
    #[doc = "Swap output is below the caller's minimum"]
    SlippageExceeded = 8,
    ZeroDuration = 9,
    #[doc = "Funded amount would truncate to a zero reward rate"]
    RewardRateTooLow = 10,
    RewardPeriodActive = 11,
    MathError = 12,
    InsufficientAllowance = 13,
    #[doc = "Allowance with a positive amount must expire at or after the current ledger"]
    InvalidExpirationLedger = 14,
}

pub type KoojaResult<T = ()> = core::result::Result<T, ErrorCode>;
