//! Example showing account lookup, renaming a file and handling errors.
//!
//! Run with: `RENAMED_API_KEY=rt_... cargo run --example basic_usage -- scan.pdf`

use renamed::{Client, Error, RenameOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("renamed=info")
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "scan.pdf".to_string());

    let client = Client::from_env()?;

    println!("=== Account ===");
    let user = client.get_user().await?;
    println!("  Email: {}", user.email);
    println!("  Credits: {:?}", user.credits);
    if let Some(team) = &user.team {
        println!("  Team: {}", team.name);
    }
    println!();

    println!("=== Rename {} ===", path);
    let options = RenameOptions {
        template: Some("{date}_{type}_{company}".to_string()),
    };
    match client.rename_file(&path, Some(options)).await {
        Ok(result) => {
            println!("  Suggested: {}", result.suggested_filename);
            if let Some(folder) = result.folder_path {
                println!("  Folder: {}", folder);
            }
            if let Some(confidence) = result.confidence {
                println!("  Confidence: {:.0}%", confidence * 100.0);
            }
        }
        Err(Error::InsufficientCredits { message }) => {
            println!("  Out of credits: {}", message);
        }
        Err(Error::RateLimit { retry_after, .. }) => {
            println!("  Still rate limited, try again in {:?}", retry_after);
        }
        Err(Error::Validation { message, details }) => {
            println!("  Rejected: {}", message);
            if let Some(details) = details {
                println!("  Details: {}", details);
            }
        }
        Err(e) => {
            println!("  Failed: {}", e);
            println!("  Retryable: {}", e.is_retryable());
        }
    }

    Ok(())
}
