use soroban_sdk::{contractevent, Address, Env};

/// Event: agreement created with its fixed terms
#[contractevent]
#[derive(Clone, Debug)]
pub struct AgreementCreated {
    pub employer: Address,
    pub employee: Address,
    pub token: Address,
    pub compensation_amount: i128,
    pub start_date: u64,
    pub end_date: u64,
}

/// Event: employee signed the agreement
#[contractevent]
#[derive(Clone, Debug)]
pub struct AgreementSigned {
    pub employee: Address,
    pub timestamp: u64,
}

/// Event: deposit accepted and compensation released to the employee
#[contractevent]
#[derive(Clone, Debug)]
pub struct CompensationPaid {
    pub from: Address,
    pub employee: Address,
    pub amount: i128,
    pub change: i128,
    pub timestamp: u64,
}

/// Event: accumulated change withdrawn by the employer
#[contractevent]
#[derive(Clone, Debug)]
pub struct ChangeWithdrawn {
    pub employer: Address,
    pub amount: i128,
}

pub fn emit_agreement_created(e: &Env, event: AgreementCreated) {
    event.publish(e);
}

pub fn emit_agreement_signed(e: &Env, event: AgreementSigned) {
    event.publish(e);
}

pub fn emit_compensation_paid(e: &Env, event: CompensationPaid) {
    event.publish(e);
}

pub fn emit_change_withdrawn(e: &Env, event: ChangeWithdrawn) {
    event.publish(e);
}
