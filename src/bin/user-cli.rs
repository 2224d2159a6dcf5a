use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "user-cli")]
#[command(about = "Management CLI for the user service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,
    /// Fetch a single user by id
    Get { id: u64 },
    /// Create a new user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Update an existing user's name and/or email
    Update {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user by id
    Delete { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::List => client.get(format!("{}/users", cli.url)).send().await?,
        Commands::Get { id } => {
            client
                .get(format!("{}/users/{}", cli.url, id))
                .send()
                .await?
        }
        Commands::Create { name, email } => {
            client
                .post(format!("{}/users", cli.url))
                .json(&serde_json::json!({ "name": name, "email": email }))
                .send()
                .await?
        }
        Commands::Update { id, name, email } => {
            let mut body = serde_json::Map::new();
            if let Some(name) = name {
                body.insert("name".to_string(), Value::String(name));
            }
            if let Some(email) = email {
                body.insert("email".to_string(), Value::String(email));
            }
            client
                .put(format!("{}/users/{}", cli.url, id))
                .json(&Value::Object(body))
                .send()
                .await?
        }
        Commands::Delete { id } => {
            client
                .delete(format!("{}/users/{}", cli.url, id))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
