use std::time::Duration;

use clap::{Parser, Subcommand};

use idme_client::logging;
use idme_client::text;
use idme_client::viewmodel::{UserProfileViewModel, UserPurchasesViewModel};

#[derive(Parser)]
#[command(name = "idme-client")]
#[command(about = "Client for the id.me take-home profile and purchases API")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and display a user's profile
    Profile {
        /// User identifier to fetch
        #[arg(long)]
        user_id: String,
        /// Also fetch the profile photo and report its format and size
        #[arg(long)]
        with_photo: bool,
    },
    /// Fetch and display a user's purchase history (first page)
    Purchases {
        /// User identifier to fetch
        #[arg(long)]
        user_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Profile {
            user_id,
            with_photo,
        } => show_profile(&user_id, with_photo).await,
        Commands::Purchases { user_id } => show_purchases(&user_id).await,
    }
}

async fn show_profile(user_id: &str, with_photo: bool) -> anyhow::Result<()> {
    let view_model = UserProfileViewModel::new(user_id);
    let mut updates = view_model.user().subscribe();
    view_model.get_user_information();
    updates.changed().await?;

    match view_model.user().get() {
        Some(user) => {
            println!("👤 {}", user.full_name);
            println!("   user name: {}", user.user_name);
            if let Some(phone) = &user.phone_number {
                println!("   phone: {}", text::format_phone_number(phone));
            }
            if let Some(registration) = &user.registration {
                if let Some(date) = text::format_iso8601_date(registration) {
                    println!("   registered: {date}");
                }
            }
            if with_photo {
                match view_model.get_user_photo(&user).await {
                    Ok(image) => {
                        println!("   photo: {:?}, {} bytes", image.format, image.bytes.len());
                    }
                    Err(err) => println!("   ⚠️  photo unavailable: {err}"),
                }
            }
        }
        None => println!("⚠️  No profile available for {user_id}"),
    }
    Ok(())
}

async fn show_purchases(user_id: &str) -> anyhow::Result<()> {
    let view_model = UserPurchasesViewModel::new(user_id);
    let mut updates = view_model.purchases().subscribe();

    // Construction already started the fetch; wait for its terminal publish,
    // bounded in case it landed before the subscription.
    if view_model.purchases().get().is_none() {
        let _ = tokio::time::timeout(Duration::from_secs(15), updates.changed()).await;
    }

    match view_model.purchases().get() {
        Some(purchases) => {
            println!("🧾 {} purchases", purchases.len());
            for purchase in &purchases {
                let date = text::format_iso8601_date(&purchase.purchase_date)
                    .unwrap_or_else(|| purchase.purchase_date.clone());
                println!("   {date} — {} ({})", purchase.item_name, purchase.price);
                if let Some(serial) = &purchase.serial_number {
                    println!("      serial: {serial}");
                }
            }
        }
        None => println!("⚠️  No purchases available for {user_id}"),
    }
    Ok(())
}
