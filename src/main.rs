use std::sync::Arc;

use async_trait::async_trait;
use zamio_onboarding::api::OnboardingClient;
use zamio_onboarding::config::ClientConfig;
use zamio_onboarding::onboarding::{
    completion_banner, effective_percentage, step_state, Navigation, OnboardingController, Router,
    StepKey, STEP_DEFINITIONS,
};

/// Router for the CLI: prints where the UI would go instead of navigating.
struct CliRouter;

#[async_trait]
impl Router for CliRouter {
    async fn navigate(&self, nav: Navigation) {
        if nav.reload {
            println!("→ {} (full reload)", nav.path);
        } else {
            println!("→ {}", nav.path);
        }
    }
}

fn usage() -> ! {
    eprintln!("Usage: zamio-onboarding <status|continue|skip STEP|finish>");
    eprintln!("  STEP is one of: profile, revenue-split, link-artist, payment");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let base_url = std::env::var("ZAMIO_API_BASE")
        .unwrap_or_else(|_| "http://localhost:8000/api/publishers".to_string());
    let auth_token = std::env::var("ZAMIO_API_TOKEN")
        .ok()
        .map(secrecy::SecretString::from);
    let publisher_id = std::env::var("ZAMIO_PUBLISHER_ID").ok();

    let config = ClientConfig {
        base_url: base_url.clone(),
        auth_token,
        // The CLI has no page to reload; the router just prints the path.
        reload_on_done: false,
        ..Default::default()
    };

    eprintln!("ZamIO publisher onboarding v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: {}", base_url);

    let client = Arc::new(OnboardingClient::new(config)?);
    let controller = OnboardingController::new(client, Arc::new(CliRouter), publisher_id);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("status");

    match command {
        "status" => {
            let _ = controller.load_status().await;
            let view = controller.view().await;

            if let Some(error) = &view.error {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
            let Some(status) = &view.status else {
                eprintln!("No status loaded");
                std::process::exit(1);
            };

            println!("Onboarding progress: {:.0}%", effective_percentage(status));
            for def in &STEP_DEFINITIONS {
                let state = step_state(status, def.key);
                let required = if def.required { " (required)" } else { "" };
                println!("  [{}] {}{required}", state.label(), def.title);
            }
            if let Some(kyc) = &status.kyc_status {
                println!("  KYC: {kyc}");
            }
            if let Some(approved_at) = &status.approved_at {
                println!("  Approved: {}", approved_at.format("%Y-%m-%d %H:%M UTC"));
            }
            if let Some(banner) = completion_banner(status) {
                println!("{}", banner.message());
            }
        }
        "continue" => {
            let _ = controller.load_status().await;
            controller.handle_continue().await;
        }
        "skip" => {
            let step = args
                .get(1)
                .and_then(|s| StepKey::parse(s))
                .unwrap_or_else(|| usage());
            if let Err(e) = controller.skip(step).await {
                eprintln!("Error: {}", e.user_message());
                std::process::exit(1);
            }
        }
        "finish" => {
            if let Err(e) = controller.finish().await {
                eprintln!("Error: {}", e.user_message());
                std::process::exit(1);
            }
        }
        _ => usage(),
    }

    Ok(())
}
