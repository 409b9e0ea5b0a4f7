use soroban_sdk::contracterror;

/// Errors surfaced by the employment agreement contract.
///
/// Every mutating entrypoint returns `Result<_, AgreementError>`. A
/// returned error fails the whole invocation and the host rolls back any
/// storage writes and transfers made during it.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AgreementError {
    /// Terms already stored; `initialize` is callable once
    AlreadyInitialized = 1,
    /// No terms stored yet
    NotInitialized = 2,
    /// Wrong caller for `sign` or `withdraw`
    Unauthorized = 3,
    /// Deposit attempted before the employee signed
    NotSigned = 4,
    /// Deposit attempted outside the `[start_date, end_date]` window
    OutOfWindow = 5,
    /// Deposit attempted before `period` elapsed since the last payment
    TooFrequent = 6,
    /// Deposit below the fixed compensation amount
    InsufficientValue = 7,
    /// Rejected construction parameters
    InvalidTerms = 8,
}
