#![no_std]

mod errors;
mod events;
mod storage;

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use events::{
    emit_agreement_created, emit_agreement_signed, emit_change_withdrawn, emit_compensation_paid,
    AgreementCreated, AgreementSigned, ChangeWithdrawn, CompensationPaid,
};
use storage::{
    read_collected, read_last_payment_time, read_signed, read_terms, write_collected,
    write_last_payment_time, write_signed, write_terms,
};

pub use errors::AgreementError;
pub use storage::AgreementTerms;

/// EmploymentAgreement contract.
///
/// Models a single employer/employee agreement: the employer instantiates
/// it with fixed terms, the employee signs, and from then on any deposit
/// inside the validity window releases the fixed compensation to the
/// employee, at most once per period. Whatever a deposit carries above the
/// compensation accumulates as change the employer can withdraw.
///
/// # Security Model
///
/// - Only the employee can sign, and only once (re-signing is a no-op)
/// - Deposits are open to any identity but gated on signature, the
///   validity window and the payment cooldown
/// - Only the employer can withdraw accumulated change
/// - Every guard is evaluated before any transfer, so a rejected call has
///   no observable effect
#[contract]
pub struct EmploymentAgreementContract;

#[contractimpl]
impl EmploymentAgreementContract {
    /// Initializes the agreement with its fixed terms.
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `employer` - The agreement owner, authorized to withdraw change
    ///   (must authenticate)
    /// * `employee` - The sole authorized signer and payee
    /// * `token` - The token contract all value moves in
    /// * `creation_date` - Informational creation timestamp
    /// * `period` - Minimum seconds between two compensation payments
    /// * `start_date` - Inclusive start of the deposit window
    /// * `end_date` - Inclusive end of the deposit window
    /// * `start_compensation_date` - Baseline for the first payment's
    ///   cooldown
    /// * `compensation_amount` - Amount released to the employee per
    ///   accepted deposit
    ///
    /// # Requirements
    ///
    /// * Contract must not be already initialized
    /// * `compensation_amount` must be positive
    /// * `start_date` must not be after `end_date`
    ///
    /// # Access Control
    ///
    /// Only callable once. The authenticated employer becomes the owner.
    pub fn initialize(
        env: Env,
        employer: Address,
        employee: Address,
        token: Address,
        creation_date: u64,
        period: u64,
        start_date: u64,
        end_date: u64,
        start_compensation_date: u64,
        compensation_amount: i128,
    ) -> Result<(), AgreementError> {
        employer.require_auth();

        if read_terms(&env).is_some() {
            return Err(AgreementError::AlreadyInitialized);
        }
        if compensation_amount <= 0 || start_date > end_date {
            return Err(AgreementError::InvalidTerms);
        }

        let terms = AgreementTerms {
            employer: employer.clone(),
            employee: employee.clone(),
            token: token.clone(),
            creation_date,
            period,
            start_date,
            end_date,
            start_compensation_date,
            compensation_amount,
        };
        write_terms(&env, &terms);
        write_signed(&env, false);
        write_collected(&env, 0);
        // Seed the cooldown so the first payment is evaluated against a
        // defined baseline.
        write_last_payment_time(&env, start_compensation_date);

        emit_agreement_created(
            &env,
            AgreementCreated {
                employer,
                employee,
                token,
                compensation_amount,
                start_date,
                end_date,
            },
        );

        Ok(())
    }

    /// Signs the agreement as the employee.
    ///
    /// Re-signing by the employee is a no-op success.
    ///
    /// # Access Control
    ///
    /// Requires employee authentication; any other caller is rejected.
    pub fn sign(env: Env, caller: Address) -> Result<(), AgreementError> {
        caller.require_auth();

        let terms = read_terms(&env).ok_or(AgreementError::NotInitialized)?;
        if caller != terms.employee {
            return Err(AgreementError::Unauthorized);
        }
        if read_signed(&env) {
            return Ok(());
        }

        write_signed(&env, true);

        emit_agreement_signed(
            &env,
            AgreementSigned {
                employee: caller,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Deposits funds into the agreement, releasing one compensation
    /// payment to the employee.
    ///
    /// Any identity may deposit; `from` authenticates only to move its
    /// tokens. The surplus above the compensation is recorded as change
    /// owed to the employer.
    ///
    /// # Requirements
    ///
    /// * Agreement must be signed by the employee
    /// * Current ledger time must lie inside `[start_date, end_date]`
    /// * At least `period` seconds must have elapsed since the last
    ///   payment
    /// * `amount` must cover the compensation
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), AgreementError> {
        from.require_auth();

        let terms = read_terms(&env).ok_or(AgreementError::NotInitialized)?;
        if !read_signed(&env) {
            return Err(AgreementError::NotSigned);
        }

        let now = env.ledger().timestamp();
        if now < terms.start_date || now > terms.end_date {
            return Err(AgreementError::OutOfWindow);
        }
        if now.saturating_sub(read_last_payment_time(&env)) < terms.period {
            return Err(AgreementError::TooFrequent);
        }
        if amount < terms.compensation_amount {
            return Err(AgreementError::InsufficientValue);
        }

        let token_client = token::Client::new(&env, &terms.token);
        token_client.transfer(&from, &env.current_contract_address(), &amount);
        token_client.transfer(
            &env.current_contract_address(),
            &terms.employee,
            &terms.compensation_amount,
        );

        let change = amount - terms.compensation_amount;
        let collected = read_collected(&env)
            .checked_add(change)
            .expect("Collected overflow");
        write_collected(&env, collected);
        write_last_payment_time(&env, now);

        emit_compensation_paid(
            &env,
            CompensationPaid {
                from,
                employee: terms.employee,
                amount,
                change,
                timestamp: now,
            },
        );

        Ok(())
    }

    /// Withdraws the accumulated change to the employer.
    ///
    /// Returns the amount withdrawn. Withdrawing with nothing collected is
    /// a no-op returning 0. Allowed at any time, including after the
    /// deposit window has closed.
    ///
    /// # Access Control
    ///
    /// Requires employer authentication; any other caller is rejected.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, AgreementError> {
        caller.require_auth();

        let terms = read_terms(&env).ok_or(AgreementError::NotInitialized)?;
        if caller != terms.employer {
            return Err(AgreementError::Unauthorized);
        }

        let amount = read_collected(&env);
        if amount > 0 {
            let token_client = token::Client::new(&env, &terms.token);
            token_client.transfer(&env.current_contract_address(), &terms.employer, &amount);
        }
        write_collected(&env, 0);

        emit_change_withdrawn(&env, ChangeWithdrawn { employer: caller, amount });

        Ok(amount)
    }

    /// Returns the fixed terms, or None before initialization.
    pub fn get_terms(env: Env) -> Option<AgreementTerms> {
        read_terms(&env)
    }

    /// Returns whether the employee has signed.
    pub fn signed_by_employee(env: Env) -> bool {
        read_signed(&env)
    }

    /// Returns the change accumulated for the employer.
    pub fn collected(env: Env) -> i128 {
        read_collected(&env)
    }

    /// Returns the timestamp of the most recent compensation payment.
    pub fn last_payment_time(env: Env) -> u64 {
        read_last_payment_time(&env)
    }
}
