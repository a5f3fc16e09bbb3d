//! The Committer: builds commitment bundles and disclosures.
//!
//! Wraps the pure core with cross-document consistency checks, a currency
//! allow list, and an optional proof self-check.

use paycommit_core::{
    derive_record_id, inputs_hash, pay_period_hash, period_summary_hash, verify_merkle_proof,
    Hash32, InputsSet, LeafId, Partitioned, PayPeriodDocument, PeriodSummaryDocument, Scope,
    CURRENCY_USDCX,
};
use tracing::{debug, info, warn};

use crate::commitments::Commitments;
use crate::disclosure::Disclosure;
use crate::error::{Error, Result};

/// Configuration for the Committer.
#[derive(Debug, Clone)]
pub struct CommitterConfig {
    /// Currency codes accepted in documents.
    pub allowed_currencies: Vec<u8>,
    /// Verify every leaf's proof against the fresh root before returning.
    pub self_check: bool,
}

impl Default for CommitterConfig {
    fn default() -> Self {
        Self {
            allowed_currencies: vec![CURRENCY_USDCX],
            self_check: true,
        }
    }
}

/// Builds [`Commitments`] and [`Disclosure`]s for payroll documents.
#[derive(Debug, Clone, Default)]
pub struct Committer {
    config: CommitterConfig,
}

impl Committer {
    /// Create a committer with the given configuration.
    pub fn new(config: CommitterConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CommitterConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commitments
    // ─────────────────────────────────────────────────────────────────────────

    /// Commit a pay-period document.
    ///
    /// Scope is CYCLE, the period id is the document's epoch, and the inputs
    /// hash is the document's upstream payroll inputs hash.
    pub fn commit_pay_period(&self, doc: &PayPeriodDocument) -> Result<Commitments> {
        debug!(
            agreement = %doc.agreement_id,
            epoch = doc.epoch_id,
            "committing pay period"
        );
        self.check_currency(doc.currency_code)?;

        let doc_hash = pay_period_hash(doc)?;
        let leaf_hashes = doc.leaf_hashes()?;
        let root = paycommit_core::merkle_root(&leaf_hashes)?;
        self.self_check(&leaf_hashes, &root)?;

        let scope = Scope::Cycle;
        let record_id = derive_record_id(
            scope,
            doc.epoch_id,
            &doc.agreement_id,
            &doc.payroll_inputs_hash,
        );

        info!(
            record_id = %record_id,
            doc_hash = %doc_hash,
            root = %root,
            "pay period committed"
        );

        Ok(Commitments {
            doc_hash,
            inputs_hash: doc.payroll_inputs_hash,
            root,
            leaf_hashes,
            record_id,
            scope,
            period_id: doc.epoch_id,
            versions: doc.versions,
            agreement_id: doc.agreement_id,
        })
    }

    /// Commit a period summary against the inputs set it was built from.
    ///
    /// The inputs set must hash to the summary's `inputs_hash` and agree
    /// with it on agreement, period, and currency. Scope follows the period
    /// kind; `period_id` is caller-defined.
    pub fn commit_period_summary(
        &self,
        doc: &PeriodSummaryDocument,
        inputs: &InputsSet,
        period_id: u32,
    ) -> Result<Commitments> {
        debug!(
            agreement = %doc.agreement_id,
            items = inputs.items.len(),
            period_id,
            "committing period summary"
        );
        self.check_currency(doc.currency_code)?;
        check_inputs_match(doc, inputs)?;

        let computed = inputs_hash(inputs)?;
        if computed != doc.inputs_hash {
            warn!(
                declared = %doc.inputs_hash,
                computed = %computed,
                "inputs hash mismatch"
            );
            return Err(Error::InputsMismatch {
                declared: doc.inputs_hash,
                computed,
            });
        }

        let doc_hash = period_summary_hash(doc)?;
        let leaf_hashes = doc.leaf_hashes()?;
        let root = paycommit_core::merkle_root(&leaf_hashes)?;
        self.self_check(&leaf_hashes, &root)?;

        let scope = Scope::from(doc.period.kind);
        let record_id = derive_record_id(scope, period_id, &doc.agreement_id, &computed);

        info!(
            record_id = %record_id,
            doc_hash = %doc_hash,
            root = %root,
            scope = ?scope,
            "period summary committed"
        );

        Ok(Commitments {
            doc_hash,
            inputs_hash: computed,
            root,
            leaf_hashes,
            record_id,
            scope,
            period_id,
            versions: doc.versions,
            agreement_id: doc.agreement_id,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Disclosure
    // ─────────────────────────────────────────────────────────────────────────

    /// Disclose one leaf of a pay-period document.
    pub fn disclose_pay_period(&self, doc: &PayPeriodDocument, leaf: LeafId) -> Result<Disclosure> {
        self.disclose(doc, leaf)
    }

    /// Disclose one leaf of a period-summary document.
    pub fn disclose_period_summary(
        &self,
        doc: &PeriodSummaryDocument,
        leaf: LeafId,
    ) -> Result<Disclosure> {
        self.disclose(doc, leaf)
    }

    fn disclose<D: Partitioned>(&self, doc: &D, leaf: LeafId) -> Result<Disclosure> {
        let leaf_bytes = doc.encode_leaf(leaf)?;
        let leaf_hashes = doc.leaf_hashes()?;
        let root = paycommit_core::merkle_root(&leaf_hashes)?;
        let proof = paycommit_core::merkle_proof(&leaf_hashes, leaf.index())?;

        let disclosure = Disclosure {
            leaf,
            object_kind: D::LEAF_KIND.to_u16(),
            leaf_bytes,
            leaf_hash: leaf_hashes[leaf.index()],
            proof,
            root,
        };

        if self.config.self_check && !disclosure.verify() {
            warn!(leaf = ?leaf, root = %root, "disclosure failed self-check");
            return Err(Error::SelfCheckFailed(leaf));
        }

        debug!(leaf = ?leaf, root = %root, "disclosure built");
        Ok(disclosure)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Checks
    // ─────────────────────────────────────────────────────────────────────────

    fn check_currency(&self, code: u8) -> Result<()> {
        if self.config.allowed_currencies.contains(&code) {
            Ok(())
        } else {
            warn!(currency = code, "unsupported currency");
            Err(Error::UnsupportedCurrency(code))
        }
    }

    fn self_check(&self, leaf_hashes: &[Hash32; 3], root: &Hash32) -> Result<()> {
        if !self.config.self_check {
            return Ok(());
        }
        for leaf in LeafId::ALL {
            let proof = paycommit_core::merkle_proof(leaf_hashes, leaf.index())?;
            if !verify_merkle_proof(root, &leaf_hashes[leaf.index()], &proof) {
                warn!(leaf = ?leaf, root = %root, "proof self-check failed");
                return Err(Error::SelfCheckFailed(leaf));
            }
        }
        Ok(())
    }
}

fn check_inputs_match(doc: &PeriodSummaryDocument, inputs: &InputsSet) -> Result<()> {
    if doc.agreement_id != inputs.agreement_id {
        warn!("summary and inputs set agreements differ");
        return Err(Error::AgreementMismatch {
            summary: doc.agreement_id,
            inputs: inputs.agreement_id,
        });
    }
    if doc.period != inputs.period {
        warn!("summary and inputs set periods differ");
        return Err(Error::PeriodMismatch {
            summary: doc.period,
            inputs: inputs.period,
        });
    }
    if doc.currency_code != inputs.currency_code {
        warn!("summary and inputs set currencies differ");
        return Err(Error::CurrencyMismatch {
            summary: doc.currency_code,
            inputs: inputs.currency_code,
        });
    }
    Ok(())
}
