use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde::Serialize;
use tokio::sync::mpsc;

use cleanzy_client::api::{
    ApiClient, ChatClient, CreateBooking, LoginData, PhotoUpload, SignUpData,
};
use cleanzy_client::chat::{ChatSession, ChatWorker, LinkRenderer, SendOutcome};
use cleanzy_client::config::{self, AppConfig};
use cleanzy_client::ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "cleanzy_client",
    version,
    about = "Cleanzy customer client: chat widget and REST commands"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Backend base URL (overrides config file and CLEANZY_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List bookings as shown on the dashboard
    Orders,
    /// Show one order
    Order { id: String },
    /// Book a pickup
    Book {
        #[arg(long)]
        waste_type: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        pickup_time: String,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long, value_name = "FILE")]
        photo: Option<PathBuf>,
    },
    /// Show the signed-in profile
    Profile,
    Users,
    Drivers,
    Products,
    Product { id: u64 },
    Pricing,
    Services,
    /// Create an account
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "customer")]
        user_type: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Send one message to the assistant and print the rendered reply
    Chat { message: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config)
        .with_overrides(std::env::var(config::API_URL_ENV).ok(), cli.api_url);
    log::info!("Using backend {}", app_config.api_base_url);

    let api = ApiClient::new(&app_config.api_base_url)?;

    match cli.command {
        Some(command) => {
            if let Err(err) = run_command(&api, &app_config, command).await {
                log::error!("Command failed: {err}");
                return Err(err);
            }
            Ok(())
        }
        None => run_chat_widget(api.chat, &app_config).await,
    }
}

async fn run_command(
    api: &ApiClient,
    app_config: &AppConfig,
    command: Command,
) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Orders => print_json(&api.orders.list_orders().await?),
        Command::Order { id } => print_json(&api.orders.get_order(&id).await?),
        Command::Book {
            waste_type,
            address,
            pickup_time,
            notes,
            photo,
        } => {
            let photo = match photo {
                Some(path) => Some(PhotoUpload::from_path(path).await?),
                None => None,
            };
            let booking = CreateBooking {
                waste_type,
                address,
                pickup_time,
                notes,
                photo,
            };
            print_json(&api.bookings.create_booking(booking).await?)
        }
        Command::Profile => print_json(&api.users.get_profile().await?),
        Command::Users => print_json(&api.users.list_users().await?),
        Command::Drivers => print_json(&api.users.list_drivers().await?),
        Command::Products => print_json(&api.products.list_products().await?),
        Command::Product { id } => print_json(&api.products.get_product(id).await?),
        Command::Pricing => print_json(&api.products.pricing().await?),
        Command::Services => print_json(&api.products.services().await?),
        Command::Signup {
            username,
            email,
            password,
            user_type,
            phone,
            location,
        } => {
            let data = SignUpData {
                username,
                email,
                password,
                user_type,
                phone,
                location,
            };
            print_json(&api.auth.signup(&data).await?)
        }
        Command::Login { email, password } => {
            print_json(&api.auth.login(&LoginData { email, password }).await?)
        }
        Command::Chat { message } => {
            let mut session = ChatSession::new();
            let outcome = session.send(&api.chat, &message).await;
            if outcome == SendOutcome::Ignored {
                return Err("message must not be empty".into());
            }

            let renderer = LinkRenderer::from_config(&app_config.links);
            if let Some(reply) = session.messages().last() {
                println!("{}", reply.text);
                print_json(&renderer.render(&reply.text))?;
            }
            match outcome {
                SendOutcome::Failed(notification) => Err(notification.text().into()),
                _ => Ok(()),
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_chat_widget(chat: ChatClient, app_config: &AppConfig) -> Result<(), Box<dyn Error>> {
    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Chat worker
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Chat worker -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 2. Khởi chạy worker gọi API (Chạy ngầm)
    tokio::spawn(async move {
        ChatWorker::new(Arc::new(chat), event_tx, cmd_rx).run().await;
    });

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let renderer = LinkRenderer::from_config(&app_config.links);

    eframe::run_native(
        "Cleanzy",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            Ok(Box::new(ChatApp::new(
                cc,
                renderer.clone(),
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )?;
    Ok(())
}
