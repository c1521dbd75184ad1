use dotenv::dotenv;
use financial_advice_report::{
    AdviceGenerator, FinancialReportPipeline, OpenAiClient, ReportRenderer, TableRow,
    TransactionRecord, TransactionTable, UserProfile, WkhtmltopdfBackend,
};
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

fn load_transactions() -> Result<Vec<TransactionRecord>, Box<dyn Error>> {
    let table: TransactionTable = match std::env::var("TRANSACTIONS_CSV") {
        Ok(path) => csv::Reader::from_path(path)?
            .deserialize::<TableRow>()
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .collect(),
        Err(_) => vec![
            ("Salary", 3200.0, "Income"),
            ("Rent", 1100.0, "Expense"),
            ("Groceries", 340.0, "Expense"),
            ("Dining Out", 210.0, "Expense"),
            ("Streaming Services", 35.0, "Expense"),
            ("Gym Membership", 45.0, "Expense"),
        ]
        .into_iter()
        .map(|(description, amount, direction)| TableRow {
            description: description.to_string(),
            amount,
            direction: direction.to_string(),
        })
        .collect(),
    };

    Ok(table.records()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let transactions = load_transactions()?;
    let profile = UserProfile::new(30, "Urban", "Reading, hiking");
    let output = PathBuf::from(
        std::env::var("REPORT_PATH").unwrap_or_else(|_| "financial_report.pdf".to_string()),
    );

    println!("📊 Loaded {} transactions", transactions.len());

    let generator = AdviceGenerator::new(OpenAiClient::from_env()?);
    let renderer =
        ReportRenderer::new(WkhtmltopdfBackend::new().with_timeout(Duration::from_secs(60)))?;
    let pipeline = FinancialReportPipeline::new(generator, renderer);

    println!("🤖 Generating advice...");
    match pipeline
        .run_with_computed_summary(&transactions, &profile, &output)
        .await
    {
        Ok(advice) => {
            println!("\n{}\n", advice);
            println!("✅ PDF report generated: {}", output.display());
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
