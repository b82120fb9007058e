use clap::{Parser, Subcommand};

use animal_frontend::animals::HttpAnimalsApi;
use animal_frontend::page::{Msg, PageSession, PageView};

#[derive(Parser)]
#[command(name = "animals-cli")]
#[command(about = "List and add animals through a running front end", long_about = None)]
struct Cli {
    /// Base URL of the front end.
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the animal list
    List {
        /// Only names containing this text (case-insensitive)
        #[arg(short, long, default_value = "")]
        filter: String,
    },
    /// Add an animal, then show the refreshed list
    Add {
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut page = PageSession::new(HttpAnimalsApi::new(&cli.url));
    page.mount().await;

    match cli.command {
        Commands::List { filter } => {
            page.dispatch(Msg::FilterChanged(filter)).await;
        }
        Commands::Add { name } => {
            if name.trim().is_empty() {
                eprintln!("Name must not be empty");
            }
            page.submit(name).await;
        }
    }

    print_view(&page.view());
    Ok(())
}

fn print_view(view: &PageView) {
    if let Some(error) = &view.error {
        eprintln!("Error: {}", error);
    }
    if view.show_empty {
        println!("No animals yet.");
    }
    for row in &view.rows {
        println!("{:>6}  {:<30}  added {}", row.id, row.name, row.added);
    }
    println!("{} shown", view.count);
}
