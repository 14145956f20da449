//! Subcommands

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Args;

use checkout_core::{
    Catalog, CheckoutDraft, CheckoutError, CheckoutForm, FailureHandoff, OutcomePolicy,
    OutcomeState, PricingMode, QueryParams, Receipt,
};
use checkout_payments::{PaymentBackend, resolve_outcome, run_submission};

use crate::terminal::TerminalNavigator;

/// Exit code for an order that exists but was not charged
const NOT_CHARGED: u8 = 2;

#[derive(Debug, Default, Args)]
pub struct PayArgs {
    /// Pre-fill query string, as the checkout page would receive it
    #[arg(long, default_value = "")]
    pub query: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Catalog product id; unknown ids fall back to the default course
    #[arg(long, conflicts_with = "amount")]
    pub product: Option<String>,

    /// Free amount (implies --legacy)
    #[arg(long)]
    pub amount: Option<String>,

    /// Use the legacy free-amount checkout
    #[arg(long)]
    pub legacy: bool,

    /// Where to save provider markup returned instead of a redirect URL
    #[arg(long, default_value = "payment-form.html")]
    pub form_out: PathBuf,
}

impl PayArgs {
    pub const fn mode(&self) -> PricingMode {
        if self.legacy || self.amount.is_some() {
            PricingMode::FreeAmount
        } else {
            PricingMode::Catalog
        }
    }

    /// Form seeded from `--query`, with explicit flags taking precedence
    pub fn form(&self) -> CheckoutForm {
        let mut params = QueryParams::parse(&self.query);
        let overrides = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("product_id", &self.product),
            ("amount", &self.amount),
        ];
        for (key, value) in overrides {
            if let Some(value) = value {
                params.set(key, value.as_str());
            }
        }

        let catalog = Catalog::standard();
        let draft = CheckoutDraft::from_params(&params, self.mode(), &catalog);
        CheckoutForm::new(draft, catalog)
    }
}

#[derive(Debug, Default, Args)]
pub struct StatusArgs {
    #[arg(long, conflicts_with = "query", required_unless_present = "query")]
    pub order_id: Option<String>,

    /// Outcome page query string, e.g. `order_id=O123`
    #[arg(long)]
    pub query: Option<String>,

    /// Show whatever status the backend reports instead of requiring CHARGED
    #[arg(long)]
    pub display_only: bool,

    /// Write a receipt for a successful order to this path
    #[arg(long)]
    pub receipt: Option<PathBuf>,
}

impl StatusArgs {
    pub fn outcome_query(&self) -> String {
        self.order_id.as_deref().map_or_else(
            || self.query.clone().unwrap_or_default(),
            OutcomeState::query_for,
        )
    }

    pub const fn policy(&self) -> OutcomePolicy {
        if self.display_only {
            OutcomePolicy::DisplayOnly
        } else {
            OutcomePolicy::RequireCharged
        }
    }
}

pub async fn pay<B>(backend: &B, args: &PayArgs) -> anyhow::Result<ExitCode>
where
    B: PaymentBackend + ?Sized,
{
    let mut form = args.form();
    println!("{}", form.submit_label());

    let navigator = TerminalNavigator::new(&args.form_out);
    match run_submission(&mut form, backend, &navigator).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            for line in submission_error(&err) {
                eprintln!("{line}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Terminal rendering of a failed submission
pub fn submission_error(err: &CheckoutError) -> Vec<String> {
    let mut lines = vec![err.user_message()];
    if err.is_retryable() {
        lines.push("The request can be retried.".to_string());
    }
    lines
}

/// The missing-order-id error, decided before any backend is configured
pub fn order_id_error(args: &StatusArgs) -> Option<CheckoutError> {
    OutcomeState::order_id_from_query(&args.outcome_query()).err()
}

pub async fn status<B>(backend: &B, args: &StatusArgs) -> anyhow::Result<ExitCode>
where
    B: PaymentBackend + ?Sized,
{
    let state = resolve_outcome(backend, &args.outcome_query(), args.policy()).await;

    for line in describe(&state) {
        println!("{line}");
    }

    match state {
        OutcomeState::Success(order) => {
            let Some(receipt) = Receipt::from_order(&order, Utc::now()) else {
                if args.receipt.is_some() {
                    eprintln!(
                        "No receipt written: order {} is {}",
                        order.order_id, order.status
                    );
                }
                return Ok(ExitCode::from(NOT_CHARGED));
            };

            if let Some(path) = &args.receipt {
                write_receipt(&receipt, path)?;
                println!("Receipt saved to {}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        OutcomeState::Failure(_) => Ok(ExitCode::from(NOT_CHARGED)),
        OutcomeState::Loading | OutcomeState::Error(_) => Ok(ExitCode::FAILURE),
    }
}

fn write_receipt(receipt: &Receipt, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, receipt.render())
        .with_context(|| format!("writing receipt to {}", path.display()))
}

/// Terminal rendering of an outcome state
pub fn describe(state: &OutcomeState) -> Vec<String> {
    match state {
        OutcomeState::Loading => vec!["Checking payment status...".to_string()],
        OutcomeState::Success(order) if order.is_charged() => vec![
            "Payment successful".to_string(),
            format!("Order Number: {}", order.order_id),
            format!("Amount Paid: {}", order.amount_text()),
            format!("Status: {}", order.status),
        ],
        OutcomeState::Success(order) => vec![
            "Order status".to_string(),
            format!("Order Number: {}", order.order_id),
            format!("Amount: {}", order.amount_text()),
            format!("Status: {}", order.status),
        ],
        OutcomeState::Failure(handoff) => describe_failure(handoff),
        OutcomeState::Error(message) => vec![format!("Error: {message}")],
    }
}

fn describe_failure(handoff: &FailureHandoff) -> Vec<String> {
    let mut lines = vec!["Payment failed or was cancelled".to_string()];
    if let Some(id) = &handoff.order_id {
        lines.push(format!("Order Number: {id}"));
    }
    if let Some(amount) = handoff.amount {
        lines.push(format!("Amount: {}", amount.normalize()));
    }
    if let Some(status) = &handoff.status {
        lines.push(format!("Status: {status}"));
    }
    lines
}
