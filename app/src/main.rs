use std::io::Write;

use anyhow::Context;
use clap::Parser;
use contacts_app::{view, Command, Outcome, Shell};
use contacts_core::{ContactClient, RemoteContacts, ReqwestTransport, SyncCore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Manage contacts stored on a remote REST server.
#[derive(Debug, Parser)]
#[command(name = "contacts", version)]
struct Args {
    /// Base URL of the server; the collection lives at `<URL>/contacts`.
    #[arg(long, env = "CONTACTS_API_URL", default_value = "http://127.0.0.1:3000")]
    url: String,
}

fn prompt() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush().context("flushing stdout")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let remote = RemoteContacts::new(ContactClient::new(&args.url), ReqwestTransport::new());
    let mut shell = Shell::new(SyncCore::new(remote));

    if let Some(notice) = shell.start().await {
        println!("! {notice}");
    }
    println!("{}", view::screen(shell.state()));
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let outcome = match line.parse::<Command>() {
            Ok(command) => shell.handle(command).await,
            Err(e) => Outcome::Continue(Some(e.to_string())),
        };
        match outcome {
            Outcome::Quit => break,
            Outcome::Continue(notice) => {
                if let Some(notice) = notice {
                    println!("! {notice}");
                }
                println!("{}", view::screen(shell.state()));
            }
        }
        prompt()?;
    }
    Ok(())
}
