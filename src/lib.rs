//! # Financial Advice Report
//!
//! Turns a table of financial transactions and a small user profile into a
//! personalized advice narrative (via a text-completion service) and a styled
//! PDF report (via an HTML-to-PDF backend).
//!
//! ## Core Concepts
//!
//! - **Transactions**: rows of description, amount and `Income`/`Expense` category
//! - **Advice**: one completion request built from the transactions and the profile
//! - **Markup**: summary and advice may use `###` headings and `**` emphasis,
//!   which are translated before embedding
//! - **Report**: a two-section HTML document converted to a paginated PDF
//!
//! ## Example
//!
//! ```rust,ignore
//! use financial_advice_report::*;
//!
//! let transactions = vec![
//!     TransactionRecord::income("Salary", 3200.0),
//!     TransactionRecord::expense("Rent", 1000.0),
//! ];
//! let profile = UserProfile::new(30, "Urban", "Reading");
//!
//! let pipeline = FinancialReportPipeline::new(
//!     AdviceGenerator::new(OpenAiClient::from_env()?),
//!     ReportRenderer::wkhtmltopdf()?,
//! );
//! let summary = FinancialSummary::from_transactions(&transactions).to_markup();
//! pipeline
//!     .run(&transactions, &profile, &summary, "financial_report.pdf".as_ref())
//!     .await?;
//! ```

pub mod error;
pub mod ingestion;
pub mod llm;
pub mod report;
pub mod schema;
pub mod summary;

pub use error::{AdvisorError, Result};
pub use ingestion::*;
pub use llm::*;
pub use report::*;
pub use schema::*;
pub use summary::FinancialSummary;

use log::{debug, info};
use std::path::Path;

/// Runs advice generation and report rendering back to back.
///
/// Either stage failing fails the whole run. When advice generation fails the
/// renderer is never invoked, so no report with a missing advice section is
/// produced.
pub struct FinancialReportPipeline {
    generator: AdviceGenerator,
    renderer: ReportRenderer,
}

impl FinancialReportPipeline {
    pub fn new(generator: AdviceGenerator, renderer: ReportRenderer) -> Self {
        Self {
            generator,
            renderer,
        }
    }

    pub fn generator(&self) -> &AdviceGenerator {
        &self.generator
    }

    pub fn renderer(&self) -> &ReportRenderer {
        &self.renderer
    }

    /// Returns the generated advice once the report has been written.
    pub async fn run(
        &self,
        transactions: &[TransactionRecord],
        profile: &UserProfile,
        summary: &str,
        output_path: &Path,
    ) -> Result<String> {
        info!(
            "Building financial report for {} transactions",
            transactions.len()
        );

        let advice = self.generator.generate(transactions, profile).await?;
        debug!("Advice stage complete, rendering {}", output_path.display());

        self.renderer.render(summary, &advice, output_path).await?;
        Ok(advice)
    }

    /// Same as [`run`](Self::run) with the summary derived by [`FinancialSummary`].
    pub async fn run_with_computed_summary(
        &self,
        transactions: &[TransactionRecord],
        profile: &UserProfile,
        output_path: &Path,
    ) -> Result<String> {
        let summary = FinancialSummary::from_transactions(transactions).to_markup();
        self.run(transactions, profile, &summary, output_path).await
    }
}
