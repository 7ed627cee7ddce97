use clap::{Args, Parser, Subcommand};
use spendzen_connect::{refresh_dashboard, NextScreen, RequestContext};
use spendzen_core::config::backend_url_from_env;
use spendzen_core::dashboard::DashboardSummary;
use spendzen_core::onboarding::OnboardingDraft;
use spendzen_core::users::IdentityUser;

use crate::main_lib::AppState;

#[derive(Debug, Parser)]
#[command(name = "spendzen", about = "SpendZen client from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the backend base URL for the current environment
    Url,
    /// Register a user the identity provider just signed up
    Register(RegisterArgs),
    /// Route a signed-in user to the right screen
    Login {
        #[arg(long)]
        clerk_id: String,
    },
    /// Save the first goal and show the dashboard
    Onboard(OnboardArgs),
    /// Show the dashboard
    Dashboard {
        #[arg(long)]
        clerk_id: String,
    },
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub clerk_id: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Debug, Args)]
pub struct OnboardArgs {
    #[arg(long)]
    pub clerk_id: String,
    #[arg(long)]
    pub goal_name: String,
    /// Target amount, e.g. "$1,500"
    #[arg(long)]
    pub goal_amount: String,
    /// Tempting spending category; repeat for several
    #[arg(long = "category")]
    pub categories: Vec<String>,
}

impl From<RegisterArgs> for IdentityUser {
    fn from(args: RegisterArgs) -> Self {
        let full_name = args.full_name.or_else(|| {
            match (args.first_name.as_deref(), args.last_name.as_deref()) {
                (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
                (Some(first), None) => Some(first.to_string()),
                (None, Some(last)) => Some(last.to_string()),
                (None, None) => None,
            }
        });
        Self {
            id: args.clerk_id,
            first_name: args.first_name,
            last_name: args.last_name,
            full_name,
            image_url: args.image_url,
            primary_email: args.email,
        }
    }
}

pub async fn run(command: Command, state: &AppState, ctx: RequestContext) -> anyhow::Result<()> {
    match command {
        Command::Url => {
            println!("{}", backend_url_from_env());
        }
        Command::Register(args) => {
            let identity = IdentityUser::from(args);
            let next = state.auth_handoff().complete_sign_up(&identity, &ctx).await?;
            print_next(next);
        }
        Command::Login { clerk_id } => {
            let next = state.auth_handoff().complete_sign_in(&clerk_id, &ctx).await?;
            print_next(next);
        }
        Command::Onboard(args) => {
            state.user_service().fetch_user(&args.clerk_id, &ctx).await?;

            let mut draft = OnboardingDraft::new();
            draft.goal_name = args.goal_name;
            draft.goal_amount = args.goal_amount;
            for category in &args.categories {
                draft.toggle_category(category)?;
            }
            state.goal_service().submit_onboarding(&draft, &ctx).await?;

            let summary = refresh_dashboard(&state.dashboard_feed, &state.stores, &ctx).await?;
            print_dashboard(&summary);
        }
        Command::Dashboard { clerk_id } => {
            state.user_service().fetch_user(&clerk_id, &ctx).await?;
            let summary = refresh_dashboard(&state.dashboard_feed, &state.stores, &ctx).await?;
            print_dashboard(&summary);
        }
    }
    Ok(())
}

fn print_next(next: NextScreen) {
    let label = match next {
        NextScreen::Welcome => "welcome",
        NextScreen::Register => "register",
        NextScreen::Onboarding => "onboarding",
        NextScreen::Home => "home",
    };
    println!("next: {}", label);
}

fn print_dashboard(summary: &DashboardSummary) {
    println!("{}", summary.greeting);
    println!(
        "{}  {}%  {}",
        summary.primary_goal.goal_name,
        summary.goal_percent,
        summary.goal_amounts()
    );
    println!("Mindful Savings: {}", summary.total_savings);
    for decision in &summary.recent_decisions {
        println!(
            "  {:?} {} at ${:.2}{}",
            decision.decision,
            decision.item_id,
            decision.final_price,
            decision
                .reason
                .as_deref()
                .map(|r| format!(" ({})", r))
                .unwrap_or_default()
        );
    }
}
