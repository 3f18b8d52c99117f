//! Command-line client for the CancerVisionHub backend
//!
//! Thin presentation layer over the client library: each subcommand maps
//! to one auth intent or service-client operation and renders the result
//! as plain text. All business rules live in `hub-client`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use common::config::HubConfig;
use hub_client::api::{ImageApi, PredictionApi, TrainingApi, UserApi};
use hub_client::workflow::HubBackend;
use hub_client::{ApiClient, AuthManager, SessionStore, UploadAnalyze};

mod render;

#[derive(Parser)]
#[command(name = "hub", about = "CancerVisionHub command-line client", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with an identity-document number and password
    Login {
        #[arg(long)]
        cc: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and clear the stored session
    Logout,
    /// Register a new account
    Register {
        #[arg(long)]
        cc: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the logged-in user
    Whoami,
    /// Request a password-recovery email
    RecoverPassword { email: String },
    /// Confirm a password reset using the link parameters
    ResetPassword {
        uidb64: String,
        token: String,
        #[arg(long)]
        new_password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Upload an image and request a prediction for it
    Predict { image: PathBuf },
    /// Show the prediction history
    History,
    /// Manage uploaded medical images
    Images {
        #[command(subcommand)]
        action: ImageAction,
    },
    /// Manage training datasets
    Trainings {
        #[command(subcommand)]
        action: TrainingAction,
    },
    /// Manage user accounts (admin)
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum ImageAction {
    /// List uploaded images
    List,
    /// Delete an uploaded image
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum TrainingAction {
    /// List uploaded datasets
    List,
    /// Upload a dataset file
    Upload { file: PathBuf },
}

#[derive(Subcommand)]
enum UserAction {
    /// List user accounts
    List,
    /// Create a user account
    Create {
        #[arg(long)]
        cc: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: Option<String>,
        /// ADMIN, DEV or MED
        #[arg(long)]
        role: String,
        /// active or inactive
        #[arg(long, default_value = "active")]
        status: String,
        #[arg(long)]
        password: String,
    },
    /// Update a user account
    Update {
        id: i64,
        #[arg(long)]
        cc: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a user account
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    let config = HubConfig::from_env()?;
    let store = SessionStore::open(&config.session_file)?;
    let client = ApiClient::new(&config, store);
    let auth = AuthManager::new(client.clone());

    match cli.command {
        Command::Login { cc, password } => {
            let profile = auth.login(&cc, &password).await?;
            println!("Logged in as {} ({})", profile.name, profile.role);
        }
        Command::Logout => {
            auth.logout()?;
            println!("Logged out");
        }
        Command::Register { cc, email, password } => {
            auth.register(&cc, &email, &password).await?;
            println!("Account created, you can now log in");
        }
        Command::Whoami => match auth.current_user() {
            Some(profile) => {
                println!("{} <{}>", profile.name, profile.email);
                println!("cc: {}  role: {}", profile.cc, profile.role);
            }
            None => println!("Not logged in"),
        },
        Command::RecoverPassword { email } => {
            auth.request_password_reset(&email).await?;
            println!("If the address exists, a recovery email has been sent");
        }
        Command::ResetPassword {
            uidb64,
            token,
            new_password,
            confirm_password,
        } => {
            if !auth.validate_reset_token(&uidb64, &token).await {
                anyhow::bail!("the recovery link is invalid or has expired");
            }
            auth.change_password(&uidb64, &token, &new_password, &confirm_password)
                .await?;
            println!("Password changed, you can now log in");
        }
        Command::Predict { image } => {
            let backend = HubBackend::new(
                ImageApi::new(client.clone()),
                PredictionApi::new(client.clone()),
            );
            let mut workflow = UploadAnalyze::new(backend);
            let report = workflow.run(image).await?;
            render::prediction_report(&report);
        }
        Command::History => {
            let predictions = PredictionApi::new(client.clone()).list().await?;
            render::history(&predictions);
        }
        Command::Images { action } => {
            let images = ImageApi::new(client.clone());
            match action {
                ImageAction::List => render::images(&images.list().await?),
                ImageAction::Delete { id } => {
                    images.delete(id).await?;
                    println!("Image {id} deleted");
                }
            }
        }
        Command::Trainings { action } => {
            let trainings = TrainingApi::new(client.clone());
            match action {
                TrainingAction::List => render::trainings(&trainings.list().await?),
                TrainingAction::Upload { file } => {
                    let record = trainings.upload(&file).await?;
                    println!("Dataset uploaded as record {}", record.id);
                }
            }
        }
        Command::Users { action } => {
            let users = UserApi::new(client.clone());
            match action {
                UserAction::List => render::users(&users.list().await?),
                UserAction::Create {
                    cc,
                    email,
                    name,
                    role,
                    status,
                    password,
                } => {
                    let user = users
                        .create(&hub_client::models::NewUser {
                            cc,
                            email,
                            name,
                            role: role.parse().map_err(anyhow::Error::msg)?,
                            status: status.parse().map_err(anyhow::Error::msg)?,
                            password,
                        })
                        .await?;
                    println!("User {} created with id {}", user.email, user.id);
                }
                UserAction::Update {
                    id,
                    cc,
                    email,
                    name,
                    role,
                    status,
                    password,
                } => {
                    let update = hub_client::models::UserUpdate {
                        cc,
                        email,
                        name,
                        role: role
                            .map(|r| r.parse().map_err(anyhow::Error::msg))
                            .transpose()?,
                        status: status
                            .map(|s| s.parse().map_err(anyhow::Error::msg))
                            .transpose()?,
                        password,
                    };
                    let user = users.update(id, &update).await?;
                    println!("User {} updated", user.id);
                }
                UserAction::Delete { id } => {
                    users.delete(id).await?;
                    println!("User {id} deleted");
                }
            }
        }
    }

    Ok(())
}
