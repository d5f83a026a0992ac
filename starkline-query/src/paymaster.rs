//! Paymaster-sponsored send-transaction mutation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use starkline_core::error::{Result, StarklineError};
use starkline_core::traits::{Account, PaymasterProvider};
use starkline_core::types::{Call, InvokeResult};

/// Fee-sponsorship options for a paymaster transaction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymasterOptions {
    /// Fee mode understood by the paymaster service (e.g. `"sponsored"`).
    pub fee_mode: String,
    /// Cap on the fee denominated in the gas token.
    pub max_fee_in_gas_token: Option<String>,
}

/// Arguments of the paymaster send mutation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaymasterSendVariables {
    /// Calls to execute under sponsorship.
    pub calls: Vec<Call>,
    /// Sponsorship options; required when the mutation runs.
    pub options: Option<PaymasterOptions>,
}

/// Mutation key for a paymaster-sponsored transaction.
pub fn paymaster_send_mutation_key(calls: &[Call]) -> Value {
    json!([{ "entity": "paymaster_sendTransaction", "calls": calls }])
}

/// Executes calls under paymaster sponsorship.
///
/// Validates the account, a non-empty call list, and the options before any
/// protocol call, then checks paymaster availability and delegates execution
/// to the SDK account seam.
pub async fn paymaster_send_transaction(
    account: Option<&dyn Account>,
    paymaster: &dyn PaymasterProvider,
    variables: &PaymasterSendVariables,
) -> Result<InvokeResult> {
    let account = account.ok_or(StarklineError::MissingParameter("account"))?;
    if variables.calls.is_empty() {
        return Err(StarklineError::MissingParameter("calls"));
    }
    let options = variables
        .options
        .as_ref()
        .ok_or(StarklineError::MissingParameter("options"))?;

    if !paymaster.is_available().await? {
        return Err(StarklineError::Provider(
            "paymaster service is not available".into(),
        ));
    }

    tracing::debug!(
        fee_mode = %options.fee_mode,
        calls = variables.calls.len(),
        "sending paymaster transaction"
    );
    account.execute(&variables.calls).await
}
