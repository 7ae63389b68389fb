use colored::Colorize;

use dispatch_auth::Account;
use dispatch_session::{Dispatch, Disposition, Session};
use dispatch_store::{JsonlStore, MessageStore};
use dispatch_types::Recipient;

use crate::cli::{Action, Cli, Command, LogArgs, RegisterArgs, SendArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Send(args) => cmd_send(args),
        Command::Log(args) => cmd_log(args),
        Command::Register(args) => cmd_register(args),
    }
}

fn cmd_send(args: SendArgs) -> anyhow::Result<()> {
    let store = JsonlStore::open(&args.store)?;
    let session = Session::new(store, 1);

    let disposition = match args.action {
        Action::Send => Disposition::Send,
        Action::Store => Disposition::Store,
        Action::Disregard => Disposition::Disregard,
    };

    let outcome = session.dispatch(Recipient::new(args.recipient), args.message, |_| disposition)?;

    match outcome {
        Dispatch::Sent(message) => {
            println!("{} Message sent", "✓".green().bold());
            println!("  ID: {}", message.id().to_string().yellow());
            println!("  Hash: {}", message.hash().to_string().cyan());
            println!("  Recipient: {}", message.recipient().to_string().bold());
            println!("  Message: {}", message.body().unwrap_or(""));
        }
        Dispatch::Stored(message) => {
            println!("{} Message stored", "✓".green());
            println!("  ID: {}", message.id().to_string().yellow());
        }
        Dispatch::Disregarded(_) => println!("Message disregarded."),
        Dispatch::Rejected { reason, .. } => {
            println!("{} Message rejected: {}", "✗".red().bold(), reason);
        }
        Dispatch::QuotaReached => println!("Message limit reached."),
    }
    Ok(())
}

fn cmd_log(args: LogArgs) -> anyhow::Result<()> {
    let store = JsonlStore::open(&args.store)?;
    let records = store.read_all()?;

    if records.is_empty() {
        println!("No messages sent.");
        return Ok(());
    }
    for record in records {
        println!(
            "ID: {}, Hash: {}, Recipient: {}, Message: {}",
            record.message_id.to_string().yellow(),
            record.message_hash.to_string().cyan(),
            record.recipient,
            record.message.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn cmd_register(args: RegisterArgs) -> anyhow::Result<()> {
    let account = Account::new(args.username, args.password, args.cell);
    match account.register() {
        Ok(()) => println!("{} Registration successful", "✓".green().bold()),
        Err(e) => println!("{} {}", "✗".red().bold(), e),
    }
    Ok(())
}
