use soroban_sdk::{contracttype, Address, Env};

/// Fixed terms of the agreement, written once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AgreementTerms {
    pub employer: Address,
    pub employee: Address,
    pub token: Address,
    /// Informational creation timestamp supplied by the employer
    pub creation_date: u64,
    /// Minimum seconds between two compensation payments; zero disables
    /// the cooldown
    pub period: u64,
    /// Inclusive start of the deposit window
    pub start_date: u64,
    /// Inclusive end of the deposit window
    pub end_date: u64,
    /// Baseline the first payment's cooldown is evaluated against
    pub start_compensation_date: u64,
    /// Amount released to the employee per accepted deposit
    pub compensation_amount: i128,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Fixed terms; presence doubles as the initialization flag
    Terms,
    /// Set once by the employee
    SignedByEmployee,
    /// Accumulated change owed to the employer
    Collected,
    /// Timestamp of the most recent compensation payment
    LastPaymentTime,
}

pub fn read_terms(env: &Env) -> Option<AgreementTerms> {
    env.storage().persistent().get(&StorageKey::Terms)
}

pub fn write_terms(env: &Env, terms: &AgreementTerms) {
    env.storage().persistent().set(&StorageKey::Terms, terms);
}

pub fn read_signed(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&StorageKey::SignedByEmployee)
        .unwrap_or(false)
}

pub fn write_signed(env: &Env, signed: bool) {
    env.storage()
        .persistent()
        .set(&StorageKey::SignedByEmployee, &signed);
}

pub fn read_collected(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&StorageKey::Collected)
        .unwrap_or(0)
}

pub fn write_collected(env: &Env, amount: i128) {
    env.storage()
        .persistent()
        .set(&StorageKey::Collected, &amount);
}

pub fn read_last_payment_time(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&StorageKey::LastPaymentTime)
        .unwrap_or(0)
}

pub fn write_last_payment_time(env: &Env, timestamp: u64) {
    env.storage()
        .persistent()
        .set(&StorageKey::LastPaymentTime, &timestamp);
}
