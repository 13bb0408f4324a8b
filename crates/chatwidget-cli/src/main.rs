//! chatwidget: terminal front-end for the customer-support chat widget.
//!
//! Collects the visitor's contact details, then relays each line to the
//! configured agent webhook and prints the replies. Logs go to stderr so the
//! conversation on stdout stays readable.

mod command;
mod console;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chatwidget_config::WidgetConfig;
use chatwidget_core::{
    ChatHandler, ChatWidget, Phase, RestTransport, SessionError, WidgetSettings,
};
use clap::Parser;

use crate::command::Command;
use crate::console::Console;

#[derive(Parser)]
#[command(name = "chatwidget", about = "Terminal chat client for a Rasa-style support agent")]
struct Args {
    /// Config file (defaults to the platform config dir).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Agent base URL, overriding the config file.
    #[arg(long)]
    server_url: Option<String>,

    /// Log filter directive, e.g. `debug` or `chatwidget_core=trace`.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match chatwidget_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("chatwidget: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(url) = args.server_url {
        config.server.url = url;
        if let Err(e) = chatwidget_config::validation::validate(&config) {
            eprintln!("chatwidget: {e}");
            return ExitCode::FAILURE;
        }
    }

    init_tracing(args.log_level.as_deref(), &config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "chatwidget failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli_level: Option<&str>, config: &WidgetConfig) {
    let fallback = match cli_level {
        Some(directive) => directive.to_string(),
        None => {
            let level = config.logging.level.as_filter();
            format!("chatwidget={level},chatwidget_core={level},chatwidget_config={level}")
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(config: WidgetConfig) -> chatwidget_common::Result<()> {
    let transport = RestTransport::from_config(&config.server)?;
    tracing::info!(url = %transport.webhook_url(), "Agent webhook");

    let widget = ChatWidget::new(WidgetSettings::from_config(&config), Arc::new(transport));
    let printer = tokio::spawn(render::print_events(widget.subscribe()));
    widget.start().await;
    widget.on_toggle().await;

    let mut console = Console::new();
    'session: loop {
        if !identify(&widget, &mut console).await? {
            break;
        }

        while let Some(line) = console.read_line().await? {
            match Command::parse(&line) {
                Command::Empty => {}
                Command::Quit => break 'session,
                Command::End => {
                    if let Err(e) = widget.on_end_requested().await {
                        console.notice(&e.to_string());
                    }
                }
                Command::Restart => {
                    if widget.phase().await == Phase::Ended {
                        widget.on_restart().await;
                        widget.on_toggle().await;
                        continue 'session;
                    }
                    console.notice("Terminez d'abord la conversation avec /end.");
                }
                Command::Send(text) => match widget.on_send(&text).await {
                    Ok(_) => {}
                    Err(SessionError::Ended) => {
                        console.notice("Conversation terminée. Tapez /restart ou /quit.");
                    }
                    Err(e) => console.notice(&e.to_string()),
                },
            }
        }
        break;
    }

    printer.abort();
    Ok(())
}

/// Run the identification form until it is accepted. Returns `false` on
/// end of input.
async fn identify(widget: &ChatWidget, console: &mut Console) -> std::io::Result<bool> {
    loop {
        let Some(name) = console.prompt("Nom complet: ").await? else {
            return Ok(false);
        };
        let phone = console.prompt("Téléphone (optionnel): ").await?;
        let email = console.prompt("Email (optionnel): ").await?;

        match widget
            .on_identify(&name, phone.as_deref(), email.as_deref())
            .await
        {
            Ok(()) => return Ok(true),
            Err(SessionError::Validation(_)) => continue,
            Err(e) => {
                console.notice(&e.to_string());
                return Ok(false);
            }
        }
    }
}
