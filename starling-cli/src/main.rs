//! Starling CLI
//!
//! Command-line interface for the Starling Bank API.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starling_client::{
    AccountParams, CardControlParams, ClientError, CreateSavingsGoalParams,
    FeedItemsBetweenParams, FeedItemsChangedSinceParams, MandateParams, PayeeParams, Response,
    SavingsGoalParams, SavingsGoalTransferParams, SavingsGoalsParams, Starling,
    StatementPeriodParams, StatementRangeParams, TokenParams,
};
use starling_types::{CardControl, StarlingConfig, StatementFormat};

#[derive(Parser)]
#[command(name = "starling")]
#[command(author, version, about = "Starling Bank API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Starling API
    #[arg(long, env = "STARLING_API_URL")]
    api_url: Option<String>,

    /// Base URL of the OAuth host
    #[arg(long, env = "STARLING_OAUTH_URL")]
    oauth_url: Option<String>,

    #[arg(long, env = "STARLING_CLIENT_ID")]
    client_id: Option<String>,

    #[arg(long, env = "STARLING_CLIENT_SECRET", hide_env_values = true)]
    client_secret: Option<String>,

    /// Bearer token for API calls
    #[arg(long, env = "STARLING_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Redirect URI registered for the authorization-code flow
    #[arg(long, env = "STARLING_REDIRECT_URI")]
    redirect_uri: Option<String>,

    /// Use the sandbox API and OAuth hosts unless URLs are given
    #[arg(long)]
    sandbox: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account operations
    Accounts {
        #[command(subcommand)]
        action: AccountCommands,
    },
    /// Show the account holder
    AccountHolder,
    /// Card operations
    Cards {
        #[command(subcommand)]
        action: CardCommands,
    },
    /// Feed item queries
    Feed {
        #[command(subcommand)]
        action: FeedCommands,
    },
    /// Savings goal operations
    SavingsGoals {
        #[command(subcommand)]
        action: SavingsGoalCommands,
    },
    /// Payee operations
    Payees {
        #[command(subcommand)]
        action: PayeeCommands,
    },
    /// Direct debit mandate operations
    Mandates {
        #[command(subcommand)]
        action: MandateCommands,
    },
    /// Show the scopes and expiry of the access token
    Identity,
    /// OAuth token exchange
    Oauth {
        #[command(subcommand)]
        action: OAuthCommands,
    },
}

#[derive(Subcommand)]
enum AccountCommands {
    /// List accounts
    List,
    /// Get an account's balance
    Balance { account_uid: String },
    /// Get an account's identifiers
    Identifiers { account_uid: String },
    /// List the months statements are available for
    Periods { account_uid: String },
    /// Download a statement for a month or a date range
    Statement {
        account_uid: String,
        /// Month as yyyy-MM (defaults to the current month)
        #[arg(long, conflicts_with = "start")]
        month: Option<String>,
        /// Range start as yyyy-MM-dd
        #[arg(long)]
        start: Option<String>,
        /// Range end as yyyy-MM-dd
        #[arg(long, requires = "start")]
        end: Option<String>,
        /// csv or pdf
        #[arg(long, default_value = "csv")]
        format: StatementFormat,
        /// Write the statement to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Switch {
    On,
    Off,
}

#[derive(Subcommand)]
enum CardCommands {
    /// List cards
    List,
    /// Switch a card control on or off
    Control {
        card_uid: String,
        /// lock, atm, online, mobile-wallet, gambling, pos or mag-stripe
        control: CardControl,
        state: Switch,
    },
}

#[derive(Subcommand)]
enum FeedCommands {
    /// Feed items between two timestamps
    Between {
        account_uid: String,
        category_uid: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Feed items changed since a timestamp
    ChangedSince {
        account_uid: String,
        category_uid: String,
        since: String,
    },
}

#[derive(Subcommand)]
enum SavingsGoalCommands {
    /// List an account's savings goals
    List { account_uid: String },
    /// Create a savings goal
    Create {
        account_uid: String,
        name: String,
        /// Target in minor units
        #[arg(long)]
        target: Option<i64>,
        #[arg(long)]
        currency: Option<String>,
    },
    /// Delete a savings goal
    Delete {
        account_uid: String,
        savings_goal_uid: String,
    },
    /// Move money into a savings goal
    AddMoney {
        account_uid: String,
        savings_goal_uid: String,
        /// Amount in minor units
        amount: i64,
        #[arg(long, default_value = "GBP")]
        currency: String,
        /// Idempotency uid for the transfer (generated when omitted)
        #[arg(long)]
        transfer_uid: Option<String>,
    },
    /// Move money out of a savings goal
    Withdraw {
        account_uid: String,
        savings_goal_uid: String,
        amount: i64,
        #[arg(long, default_value = "GBP")]
        currency: String,
        #[arg(long)]
        transfer_uid: Option<String>,
    },
}

#[derive(Subcommand)]
enum PayeeCommands {
    /// List payees
    List,
    /// Delete a payee
    Delete { payee_uid: String },
}

#[derive(Subcommand)]
enum MandateCommands {
    /// List mandates
    List,
    /// Get a mandate
    Get { mandate_uid: String },
    /// Cancel a mandate
    Delete { mandate_uid: String },
}

#[derive(Subcommand)]
enum OAuthCommands {
    /// Exchange an authorization code for tokens
    Exchange { code: String },
    /// Exchange a refresh token for new tokens
    Refresh { refresh_token: String },
}

impl Cli {
    fn config(&self) -> StarlingConfig {
        let mut config = if self.sandbox {
            StarlingConfig::sandbox()
        } else {
            StarlingConfig::new()
        };
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url);
        }
        if let Some(url) = &self.oauth_url {
            config = config.with_oauth_url(url);
        }
        config.client_id = self.client_id.clone().unwrap_or_default();
        config.client_secret = self.client_secret.clone().unwrap_or_default();
        config.access_token = self.access_token.clone();
        config.redirect_uri = self.redirect_uri.clone();
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,starling_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    tracing::debug!(api_url = %config.api_url, oauth_url = %config.oauth_url, "configured");
    let starling = Starling::new(config);

    if let Err(e) = run(&starling, cli.command).await {
        if let Some(ClientError::Validation(errors)) = e.downcast_ref::<ClientError>() {
            for message in errors.messages() {
                eprintln!("{message}");
            }
            std::process::exit(2);
        }
        return Err(e);
    }
    Ok(())
}

async fn run(starling: &Starling, command: Commands) -> Result<()> {
    match command {
        Commands::Accounts { action } => match action {
            AccountCommands::List => print_response(starling.get_accounts(None).await?).await,
            AccountCommands::Balance { account_uid } => {
                let response = starling
                    .account
                    .get_account_balance(AccountParams::new(account_uid))
                    .await?;
                print_response(response).await
            }
            AccountCommands::Identifiers { account_uid } => {
                let response = starling
                    .account
                    .get_account_identifiers(AccountParams::new(account_uid))
                    .await?;
                print_response(response).await
            }
            AccountCommands::Periods { account_uid } => {
                let response = starling
                    .account
                    .get_statement_periods(AccountParams::new(account_uid))
                    .await?;
                print_response(response).await
            }
            AccountCommands::Statement {
                account_uid,
                month,
                start,
                end,
                format,
                output,
            } => {
                let response = match start {
                    Some(start) => {
                        starling
                            .account
                            .get_statement_for_range(StatementRangeParams {
                                account_uid,
                                start,
                                end,
                                format,
                                ..Default::default()
                            })
                            .await?
                    }
                    None => {
                        starling
                            .account
                            .get_statement_for_period(StatementPeriodParams {
                                account_uid,
                                year_month: month,
                                format,
                                ..Default::default()
                            })
                            .await?
                    }
                };
                save_response(response, output).await
            }
        },

        Commands::AccountHolder => print_response(starling.get_account_holder(None).await?).await,

        Commands::Cards { action } => match action {
            CardCommands::List => print_response(starling.get_cards(None).await?).await,
            CardCommands::Control {
                card_uid,
                control,
                state,
            } => {
                let enabled = matches!(state, Switch::On);
                let response = starling
                    .card
                    .update_card_control(control, CardControlParams::new(card_uid, enabled))
                    .await?;
                print_response(response).await
            }
        },

        Commands::Feed { action } => match action {
            FeedCommands::Between {
                account_uid,
                category_uid,
                from,
                to,
            } => {
                let response = starling
                    .feed_item
                    .get_feed_items_between(FeedItemsBetweenParams {
                        account_uid,
                        category_uid,
                        min_transaction_timestamp: from,
                        max_transaction_timestamp: to,
                        ..Default::default()
                    })
                    .await?;
                print_response(response).await
            }
            FeedCommands::ChangedSince {
                account_uid,
                category_uid,
                since,
            } => {
                let response = starling
                    .feed_item
                    .get_feed_items_changed_since(FeedItemsChangedSinceParams {
                        account_uid,
                        category_uid,
                        changes_since: since,
                        ..Default::default()
                    })
                    .await?;
                print_response(response).await
            }
        },

        Commands::SavingsGoals { action } => match action {
            SavingsGoalCommands::List { account_uid } => {
                let response = starling
                    .savings_goal
                    .get_savings_goals(SavingsGoalsParams {
                        account_uid,
                        ..Default::default()
                    })
                    .await?;
                print_response(response).await
            }
            SavingsGoalCommands::Create {
                account_uid,
                name,
                target,
                currency,
            } => {
                let response = starling
                    .savings_goal
                    .create_savings_goal(CreateSavingsGoalParams {
                        account_uid,
                        name,
                        target_amount: target,
                        target_currency: currency.clone(),
                        currency,
                        ..Default::default()
                    })
                    .await?;
                print_response(response).await
            }
            SavingsGoalCommands::Delete {
                account_uid,
                savings_goal_uid,
            } => {
                let response = starling
                    .savings_goal
                    .delete_savings_goal(SavingsGoalParams {
                        account_uid,
                        savings_goal_uid,
                        ..Default::default()
                    })
                    .await?;
                print_response(response).await
            }
            SavingsGoalCommands::AddMoney {
                account_uid,
                savings_goal_uid,
                amount,
                currency,
                transfer_uid,
            } => {
                let params = transfer_params(
                    account_uid,
                    savings_goal_uid,
                    amount,
                    currency,
                    transfer_uid,
                );
                let response = starling
                    .savings_goal
                    .add_money_to_savings_goal(params)
                    .await?;
                print_response(response).await
            }
            SavingsGoalCommands::Withdraw {
                account_uid,
                savings_goal_uid,
                amount,
                currency,
                transfer_uid,
            } => {
                let params = transfer_params(
                    account_uid,
                    savings_goal_uid,
                    amount,
                    currency,
                    transfer_uid,
                );
                let response = starling
                    .savings_goal
                    .withdraw_money_from_savings_goal(params)
                    .await?;
                print_response(response).await
            }
        },

        Commands::Payees { action } => match action {
            PayeeCommands::List => print_response(starling.get_payees(None).await?).await,
            PayeeCommands::Delete { payee_uid } => {
                let response = starling
                    .payee
                    .delete_payee(PayeeParams::new(payee_uid))
                    .await?;
                print_response(response).await
            }
        },

        Commands::Mandates { action } => match action {
            MandateCommands::List => print_response(starling.list_mandates(None).await?).await,
            MandateCommands::Get { mandate_uid } => {
                let response = starling
                    .mandate
                    .get_mandate(MandateParams::new(mandate_uid))
                    .await?;
                print_response(response).await
            }
            MandateCommands::Delete { mandate_uid } => {
                let response = starling
                    .mandate
                    .delete_mandate(MandateParams::new(mandate_uid))
                    .await?;
                print_response(response).await
            }
        },

        Commands::Identity => {
            let response = starling
                .identity
                .get_token_identity(TokenParams::new())
                .await?;
            print_response(response).await
        }

        Commands::Oauth { action } => match action {
            OAuthCommands::Exchange { code } => {
                print_response(starling.get_access_token(&code).await?).await
            }
            OAuthCommands::Refresh { refresh_token } => {
                print_response(starling.refresh_access_token(&refresh_token).await?).await
            }
        },
    }
}

fn transfer_params(
    account_uid: String,
    savings_goal_uid: String,
    amount: i64,
    currency: String,
    transfer_uid: Option<String>,
) -> SavingsGoalTransferParams {
    SavingsGoalTransferParams {
        account_uid,
        savings_goal_uid,
        transfer_uid: transfer_uid.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        amount,
        currency,
        ..Default::default()
    }
}

/// Status to stderr; JSON bodies pretty-printed to stdout, anything else as-is.
async fn print_response(response: Response) -> Result<()> {
    eprintln!("{}", response.status());
    let body = response.bytes().await?;
    if body.is_empty() {
        return Ok(());
    }
    match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => std::io::stdout().write_all(&body)?,
    }
    Ok(())
}

/// Writes a statement body verbatim to a file or stdout.
async fn save_response(response: Response, output: Option<PathBuf>) -> Result<()> {
    let status = response.status();
    eprintln!("{status}");
    let body = response.bytes().await?;
    match output {
        Some(path) if status.is_success() => {
            std::fs::write(&path, &body)?;
            eprintln!("✓ Statement written to {}", path.display());
        }
        _ => std::io::stdout().write_all(&body)?,
    }
    Ok(())
}
