use crate::{DepositForm, PaymentForm, TransferFailure};

use bank_auth::{Claims, TokenVerifier};
use bank_client::{ContactRegistryClient, LedgerClient};
use bank_core::{ContactAlias, TransactionIntent};

use std::sync::Arc;

use log::{debug, info, warn};

/// A caller whose token verified. Only [`TransactionOrchestrator::authenticate`]
/// hands these out, so nothing reaches the write path unauthenticated.
pub struct VerifiedCaller<'a> {
    token: &'a str,
    claims: Claims,
}

impl VerifiedCaller<'_> {
    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}

/// Composes the contact registry and the ledger writer under the caller's
/// verified identity.
///
/// At most one ledger submission per call, and none once an earlier step
/// has failed.
pub struct TransactionOrchestrator {
    verifier: Arc<TokenVerifier>,
    contacts: ContactRegistryClient,
    ledger: LedgerClient,
    local_routing_number: String,
}

impl TransactionOrchestrator {
    pub fn new(
        verifier: Arc<TokenVerifier>,
        contacts: ContactRegistryClient,
        ledger: LedgerClient,
        local_routing_number: &str,
    ) -> Self {
        Self {
            verifier,
            contacts,
            ledger,
            local_routing_number: local_routing_number.to_string(),
        }
    }

    pub fn local_routing_number(&self) -> &str {
        &self.local_routing_number
    }

    /// Verify the presented token. Absent, malformed, forged and expired
    /// tokens all end here.
    pub fn authenticate<'a>(
        &self,
        token: Option<&'a str>,
    ) -> Result<VerifiedCaller<'a>, TransferFailure> {
        let claims = self
            .verifier
            .verify(token)
            .map_err(TransferFailure::unauthenticated)?;
        Ok(VerifiedCaller {
            token: token.unwrap_or_default(),
            claims,
        })
    }

    /// Pay another account at this bank from the caller's account.
    pub async fn submit_payment(
        &self,
        caller: &VerifiedCaller<'_>,
        form: &PaymentForm,
    ) -> Result<TransactionIntent, TransferFailure> {
        let VerifiedCaller { token, claims } = caller;
        let plan = form.validate()?;

        if let Some(label) = plan.new_contact_label {
            let contact = ContactAlias {
                label,
                account_number: plan.recipient_account.clone(),
                routing_number: self.local_routing_number.clone(),
                is_external: false,
            };
            self.register_contact(token, claims, &contact).await?;
        }

        let intent = TransactionIntent {
            from_account_number: claims.account_id.clone(),
            from_routing_number: self.local_routing_number.clone(),
            to_account_number: plan.recipient_account,
            to_routing_number: self.local_routing_number.clone(),
            amount_minor_units: plan.amount_minor_units,
            idempotency_id: plan.idempotency_id,
        };

        self.submit(token, &intent).await?;
        info!(
            "Payment initiated successfully from {} to {}",
            intent.from_account_number, intent.to_account_number
        );
        Ok(intent)
    }

    /// Pull money from an external account into the caller's account.
    pub async fn submit_deposit(
        &self,
        caller: &VerifiedCaller<'_>,
        form: &DepositForm,
    ) -> Result<TransactionIntent, TransferFailure> {
        let VerifiedCaller { token, claims } = caller;
        let plan = form.validate()?;

        // Checked before any contact is saved
        if plan.source_routing == self.local_routing_number {
            warn!(
                "Rejecting deposit for {}: source routing number is local",
                claims.account_id
            );
            return Err(TransferFailure::invalid_routing(plan.routing_field));
        }

        if let Some(label) = plan.new_contact_label {
            let contact = ContactAlias {
                label,
                account_number: plan.source_account.clone(),
                routing_number: plan.source_routing.clone(),
                is_external: true,
            };
            self.register_contact(token, claims, &contact).await?;
        }

        let intent = TransactionIntent {
            from_account_number: plan.source_account,
            from_routing_number: plan.source_routing,
            to_account_number: claims.account_id.clone(),
            to_routing_number: self.local_routing_number.clone(),
            amount_minor_units: plan.amount_minor_units,
            idempotency_id: plan.idempotency_id,
        };

        self.submit(token, &intent).await?;
        info!("Deposit submitted successfully to {}", intent.to_account_number);
        Ok(intent)
    }

    async fn register_contact(
        &self,
        token: &str,
        claims: &Claims,
        contact: &ContactAlias,
    ) -> Result<(), TransferFailure> {
        debug!("Saving new contact for {}", claims.subject_username);
        self.contacts
            .create(token, &claims.subject_username, contact)
            .await
            .map_err(|e| {
                warn!("Contact registry refused new contact: {}", e);
                TransferFailure::from_contact_error(e)
            })
    }

    async fn submit(&self, token: &str, intent: &TransactionIntent) -> Result<(), TransferFailure> {
        self.ledger.submit(token, intent).await.map_err(|e| {
            warn!("Ledger submission {} failed: {}", intent.idempotency_id, e);
            TransferFailure::from_ledger_error(e)
        })
    }
}
