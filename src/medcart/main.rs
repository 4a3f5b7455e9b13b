use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use medcart::api::MedcartApi;
use medcart::catalog::Catalog;
use medcart::commands::config::ConfigAction;
use medcart::commands::{CmdMessage, MessageLevel, Notification};
use medcart::config::MedcartConfig;
use medcart::error::{MedcartError, Result};
use medcart::model::{CartLine, Medicine, UserType};
use medcart::quote::{self, ContactForm};
use medcart::relay::RelayClient;
use medcart::session::{Session, SessionState, CONFIRMATION_TTL};
use medcart::slug;
use medcart::store::fs::FileCartStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MedcartApi<FileCartStore>,
    config: MedcartConfig,
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Search { term }) => handle_search(&ctx, &term),
        Some(Commands::View { selector }) => handle_view(&ctx, &selector),
        Some(Commands::Add { id }) => handle_add(&mut ctx, id),
        Some(Commands::Qty { id, quantity }) => handle_qty(&mut ctx, id, quantity),
        Some(Commands::Remove { id }) => handle_qty(&mut ctx, id, 0),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Submit {
            name,
            email,
            phone,
            message,
            user_type,
        }) => handle_submit(&mut ctx, name, email, phone, message, user_type).await,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Cart) | None => handle_cart(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "medcart", "medcart")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".medcart")),
    };

    let config = MedcartConfig::load(&data_dir).unwrap_or_default();
    let store = FileCartStore::new(&data_dir);
    let relay = RelayClient::new(config.relay.clone(), config.timeout_secs)?;
    let api = MedcartApi::new(Catalog::bundled().clone(), store, relay, data_dir);

    Ok(AppContext { api, config })
}

fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search(term)?;
    if result.medicines.is_empty() {
        println!("No matches.");
    } else {
        print_medicines(&result.medicines);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.view(selector)?;
    for medicine in &result.medicines {
        print_detail(medicine);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.add_to_cart(id)?;
    if let Some(notification) = &result.notification {
        print_notification(notification);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_cart(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.cart_view()?;
    print_cart(&result.cart_lines);
    print_messages(&result.messages);
    Ok(())
}

fn handle_qty(ctx: &mut AppContext, id: u32, quantity: u32) -> Result<()> {
    let result = ctx.api.set_quantity(id, quantity)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_cart()?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_submit(
    ctx: &mut AppContext,
    name: String,
    email: String,
    phone: String,
    message: String,
    user_type: Option<UserType>,
) -> Result<()> {
    if !ctx.config.relay.is_configured() {
        return Err(MedcartError::Validation(
            "Relay is not configured; set service-id, template-id and public-key via `medcart config`"
                .into(),
        ));
    }

    let form = ContactForm {
        name,
        email,
        phone,
        message,
        user_type,
    };

    let mut session = Session::new();
    session.advance(SessionState::CartOpen)?;
    session.advance(SessionState::FormEditing)?;

    // Validation failures stay on the form and never reach the network.
    if ctx.api.total_units() == 0 {
        return Err(MedcartError::Validation(
            "Your request list is empty".into(),
        ));
    }
    quote::validate(&form)?;

    session.advance(SessionState::Submitting)?;
    match ctx.api.submit_quote(&form).await {
        Ok(result) => {
            session.advance(SessionState::Submitted)?;
            print_messages(&result.messages);
            print_confirmation(&result.cart_lines);

            // The confirmation stays visible, then the cart empties.
            tokio::time::sleep(CONFIRMATION_TTL).await;
            let cleared = ctx.api.clear_cart()?;
            print_messages(&cleared.messages);
            session.advance(SessionState::Idle)?;
            Ok(())
        }
        Err(e) => {
            session.advance(SessionState::SubmissionFailed)?;
            print_messages(&[CmdMessage::warning(
                "The quote request could not be sent; your request list was kept. Please try again later.",
            )]);
            Err(e)
        }
    }
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("service-id = {}", config.relay.service_id);
        println!("template-id = {}", config.relay.template_id);
        println!("public-key = {}", config.relay.public_key);
        println!("timeout-secs = {}", config.timeout_secs);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_notification(notification: &Notification) {
    println!("{} {}", "✔".green(), notification.message.green());
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_medicines(medicines: &[Medicine]) {
    for medicine in medicines {
        let origin = match (&medicine.manufacturer, &medicine.country) {
            (Some(m), Some(c)) => format!("{} | {}", m, c),
            (Some(m), None) => m.clone(),
            (None, Some(c)) => c.clone(),
            (None, None) => String::new(),
        };

        let id_str = format!("{:>4}. ", medicine.id);
        let title = format!("{}  {}", medicine.name, medicine.active_ingredient);

        let available = LINE_WIDTH.saturating_sub(id_str.width() + origin.width() + 2);
        let title_display = truncate_to_width(&title, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{}  {}",
            id_str,
            title_display.bold(),
            " ".repeat(padding),
            origin.dimmed()
        );
    }
}

fn print_detail(medicine: &Medicine) {
    println!(
        "{} {}",
        format!("#{}", medicine.id).yellow(),
        medicine.name.bold()
    );
    println!("--------------------------------");
    println!("Active ingredient: {}", medicine.active_ingredient);
    if let Some(description) = &medicine.active_ingredient_description {
        println!("{}", description.dimmed());
    }
    if let Some(packaging) = &medicine.packaging {
        println!("Packaging: {}", packaging);
    }
    if let Some(manufacturer) = &medicine.manufacturer {
        println!("Manufacturer: {}", manufacturer);
    }
    if let Some(country) = &medicine.country {
        println!("Country: {}", country);
    }
    println!("Link: {}", slug::medicine_slug(medicine).dimmed());
}

fn print_cart(lines: &[CartLine]) {
    for line in lines {
        let label = match &line.medicine.packaging {
            Some(packaging) => format!("{} ({})", line.medicine.name, packaging),
            None => line.medicine.name.clone(),
        };

        let qty_str = format!("{:>3} x ", line.quantity);
        let time_ago = format_time_ago(line.added_at);

        let available = LINE_WIDTH.saturating_sub(qty_str.width() + TIME_WIDTH);
        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        println!(
            "{}{}{}{}",
            qty_str,
            label_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn print_confirmation(lines: &[CartLine]) {
    println!();
    println!("{}", "Submitted request:".bold());
    for summary_line in quote::render_summary(lines).lines() {
        println!("  {}", summary_line);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
