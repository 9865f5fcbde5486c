//! tutorials-client CLI entry point.

use clap::Parser;
use tutorials_client::cli::{Cli, Commands, OutputFormat};
use tutorials_client::client::TutorialsClient;
use tutorials_client::output::format_output;
use tutorials_core::tutorial::{CreateTutorialRequest, UpdateTutorialRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = TutorialsClient::new(&cli.base_url);

    match cli.command {
        Commands::Tutorials(tutorials_cmd) => {
            use tutorials_client::cli::tutorials::TutorialsAction;
            match tutorials_cmd.action {
                TutorialsAction::List => {
                    let tutorials = client.get_all().await?;
                    println!("{}", format_output(&tutorials, cli.format));
                }
                TutorialsAction::Get { id } => {
                    let tutorials = client.get(id).await?;
                    println!("{}", format_output(&tutorials, cli.format));
                }
                TutorialsAction::Create {
                    title,
                    description,
                    published,
                } => {
                    let mut request = CreateTutorialRequest::new(title).with_published(published);
                    request.description = description;
                    let tutorial = client.create(&request).await?;
                    if matches!(cli.format, OutputFormat::Pretty) && !cli.quiet {
                        println!("Created:");
                    }
                    println!("{}", format_output(&tutorial, cli.format));
                }
                TutorialsAction::Update {
                    id,
                    title,
                    description,
                    published,
                } => {
                    let request = UpdateTutorialRequest {
                        title,
                        description,
                        published,
                    };
                    let tutorial = client.update(id, &request).await?;
                    if matches!(cli.format, OutputFormat::Pretty) && !cli.quiet {
                        println!("Updated:");
                    }
                    println!("{}", format_output(&tutorial, cli.format));
                }
                TutorialsAction::Delete { id } => {
                    client.remove(id).await?;
                    if !cli.quiet {
                        println!("Deleted tutorial {}", id);
                    }
                }
                TutorialsAction::DeleteAll => {
                    client.remove_all().await?;
                    if !cli.quiet {
                        println!("Deleted all tutorials");
                    }
                }
                TutorialsAction::Search { title } => {
                    let tutorials = client.find_by_title(&title).await?;
                    println!("{}", format_output(&tutorials, cli.format));
                }
            }
        }
    }

    Ok(())
}
