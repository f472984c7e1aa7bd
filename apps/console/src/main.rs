use std::sync::Arc;

use anyhow::Result;
use auth_core::{FixedDelayAuthenticator, LoginController, RegistrationController, Router};
use clap::{Parser, Subcommand};
use shared::domain::NavigationIntent;
use tracing::info;

mod settings;

#[derive(Parser, Debug)]
#[command(about = "Drives the authentication flow controllers against the stub backend")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit the sign-in form once and print the outcome.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Submit the registration form once and print the outcome.
    Register {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
}

struct PrintingRouter;

impl Router for PrintingRouter {
    fn navigate(&self, intent: NavigationIntent) {
        let (action, route) = match intent {
            NavigationIntent::Replace(route) => ("replace", route),
            NavigationIntent::Push(route) => ("push", route),
        };
        println!("navigation: {action} -> {}", route.path());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();
    let settings = settings::load_settings();

    match args.command {
        Command::Login { email, password } => {
            let controller = LoginController::new(
                Arc::new(FixedDelayAuthenticator::new(settings.login_delay())),
                Arc::new(PrintingRouter),
            );
            info!(delay_ms = settings.login_delay_ms, "submitting sign-in form");
            controller.submit(&email, &password).await;
            println!(
                "snapshot: {}",
                serde_json::to_string(&controller.snapshot().await)?
            );
        }
        Command::Register {
            full_name,
            email,
            password,
            confirm_password,
        } => {
            let controller = RegistrationController::new(
                Arc::new(FixedDelayAuthenticator::new(settings.registration_delay())),
                Arc::new(PrintingRouter),
            );
            info!(
                delay_ms = settings.registration_delay_ms,
                "submitting registration form"
            );
            controller
                .submit(&full_name, &email, &password, &confirm_password)
                .await;
            println!(
                "snapshot: {}",
                serde_json::to_string(&controller.snapshot().await)?
            );
        }
    }

    Ok(())
}
