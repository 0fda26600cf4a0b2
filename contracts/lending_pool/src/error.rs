use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,
    /// LTV or fee rate outside (0, 10_000] / [0, 10_000]
    InvalidParameters = 3,

    // ============================================
    // AMOUNT ERRORS (10-19)
    // ============================================
    /// Amount must be positive
    InvalidAmount = 10,
    /// Withdrawal exceeds deposited balance
    InsufficientBalance = 11,
    /// Balance arithmetic would overflow or underflow
    ArithmeticOverflow = 12,

    // ============================================
    // LOAN ERRORS (20-29)
    // ============================================
    /// Deposit or withdraw attempted while principal or fee is unpaid
    DebtOutstanding = 20,
    /// Borrow exceeds the LTV ceiling of usable collateral
    InsufficientCollateral = 21,
    /// Repayment attempted with no outstanding principal
    NothingOwed = 22,
    /// Repayment larger than principal + fee
    PaymentExceedsDebt = 23,

    // ============================================
    // OPERATIONAL ERRORS (30-39)
    // ============================================
    /// Asset transfer into or out of the pool failed
    TransferFailed = 30,
    /// Contract is paused
    ContractPaused = 31,
}
