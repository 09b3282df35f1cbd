//! Example splitting a PDF and following the job until it finishes.
//!
//! Run with: `RENAMED_API_KEY=rt_... cargo run --example pdf_split -- batch.pdf`

use renamed::{Client, PdfSplitOptions, SplitMode};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("renamed=debug")
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "batch.pdf".to_string());
    let api_key = std::env::var(renamed::API_KEY_ENV)?;

    let client = Client::builder()
        .api_key(api_key)
        .poll_interval(Duration::from_secs(1))
        .job_timeout(Duration::from_secs(120))
        .build()?;

    let options = PdfSplitOptions {
        mode: Some(SplitMode::Pages),
        pages_per_split: Some(2),
    };
    let mut job = client.pdf_split_file(&path, Some(options)).await?;
    println!("Polling {}", job.status_url());

    let result = job
        .wait_with_progress(|status| {
            if let Some(progress) = status.progress {
                println!("  {:?}: {}%", status.status, progress);
            }
        })
        .await?;

    println!(
        "Split {} ({} pages) into {} documents:",
        result.original_filename,
        result.total_pages,
        result.documents.len()
    );
    for doc in &result.documents {
        println!(
            "  #{} {} pages {} ({} bytes) {}",
            doc.index, doc.filename, doc.pages, doc.size, doc.download_url
        );
    }

    Ok(())
}
