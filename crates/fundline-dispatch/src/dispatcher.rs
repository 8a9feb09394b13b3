use fundline_ledger::LedgerEngine;
use fundline_store::StateStore;
use tracing::debug;

use crate::error::DispatchError;
use crate::operation::Operation;

/// Routes named invocations onto a [`LedgerEngine`].
///
/// The dispatcher is stateless between calls: it resolves the operation
/// name, checks arity, parses numeric arguments, and forwards. Success
/// payloads are the generated id's bytes for the two mutating operations
/// and the stored value (or the missing-key placeholder) for `read`.
pub struct Dispatcher<S: StateStore> {
    engine: LedgerEngine<S>,
}

impl<S: StateStore> Dispatcher<S> {
    pub fn new(engine: LedgerEngine<S>) -> Self {
        Self { engine }
    }

    /// The wrapped engine. Mainly for embedding and tests.
    pub fn engine(&self) -> &LedgerEngine<S> {
        &self.engine
    }

    /// Lifecycle entry point, separate from named dispatch: seed the
    /// ledger's people and index. Idempotent.
    pub fn init(&self, seed_identities: &[String]) -> Result<(), DispatchError> {
        self.engine.init(seed_identities)?;
        Ok(())
    }

    /// Execute one named operation with its string arguments.
    pub fn dispatch(&self, name: &str, args: &[String]) -> Result<Vec<u8>, DispatchError> {
        let op = Operation::from_name(name)
            .ok_or_else(|| DispatchError::UnknownOperation(name.to_string()))?;

        if args.len() != op.arity() {
            return Err(DispatchError::InvalidArgument {
                reason: format!(
                    "{op} expects {} arguments, got {}",
                    op.arity(),
                    args.len()
                ),
            });
        }

        debug!(operation = %op, "dispatching");
        match op {
            Operation::CreateRequest => {
                let expected_money = parse_amount(&args[3], "expectedMoney")?;
                let rid =
                    self.engine
                        .create_request(&args[0], &args[1], &args[2], expected_money)?;
                Ok(rid.into_bytes())
            }
            Operation::CreateDonation => {
                let money = parse_amount(&args[2], "money")?;
                let did = self.engine.create_donation(&args[0], &args[1], money)?;
                Ok(did.into_bytes())
            }
            Operation::Read => Ok(self.engine.read(&args[0])?),
        }
    }
}

/// Parse a money argument. Failure is `InvalidArgument` before any write.
fn parse_amount(raw: &str, field: &str) -> Result<i64, DispatchError> {
    raw.trim()
        .parse()
        .map_err(|_| DispatchError::InvalidArgument {
            reason: format!("{field} must be an integer, got {raw:?}"),
        })
}
