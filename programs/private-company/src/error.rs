use anchor_lang::prelude::*;

/// Custom error codes for the private company program.
#[error_code]
pub enum CompanyError {
    #[msg("Caller is not a company owner")]
    NotAnOwner,

    #[msg("Contract is stopped")]
    ContractStopped,

    #[msg("Company instance has been destroyed")]
    InstanceDestroyed,

    #[msg("Unknown transaction id")]
    UnknownAction,

    #[msg("Transaction already executed")]
    AlreadyExecuted,

    #[msg("Transaction already confirmed by this owner")]
    AlreadyConfirmed,

    #[msg("Vesting schedule already launched")]
    AlreadyLaunched,

    #[msg("No vesting schedule launched for this holder")]
    NoScheduleLaunched,

    #[msg("Insufficient current balance")]
    InsufficientBalance,

    #[msg("Equity transfer to owner only")]
    NotAnOwnerTransferTarget,

    #[msg("Ledger does not reconcile to total supply")]
    LedgerInvariantViolation,

    #[msg("Owner set must not be empty")]
    EmptyOwnerSet,

    #[msg("Duplicate owner")]
    DuplicateOwner,

    #[msg("Owner set is full")]
    TooManyOwners,

    #[msg("Target is already an owner")]
    AlreadyAnOwner,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Company name too long")]
    NameTooLong,

    #[msg("Ticker too long")]
    TickerTooLong,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Equity pool cannot cover a founder grant")]
    EquityPoolExhausted,

    #[msg("Insufficient treasury balance")]
    InsufficientTreasury,

    #[msg("Deposit would leave the treasury below its rent-exempt minimum")]
    DepositBelowRentFloor,

    #[msg("Recipient account required for this transaction")]
    MissingRecipient,

    #[msg("Recipient account does not match transaction target")]
    RecipientMismatch,

    #[msg("Creator registry is full")]
    RegistryFull,

    #[msg("Transaction belongs to another company")]
    ActionCompanyMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
