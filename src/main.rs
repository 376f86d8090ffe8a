//! Demo driver: a line-oriented stand-in for the View Adapter.
//!
//! Reads user intents from stdin, routes them into the stores, and
//! prints fresh snapshots, the same contract a real rendering layer
//! would follow.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use huddle::logging::init_tracing;
use huddle::{
    Filter, NotificationStore, PreferenceStore, SeedConfig, Theme, TomlFileStorage,
    ConversationStore,
};

#[derive(Parser)]
#[command(name = "huddle", about = "Interaction state engine demo")]
struct Args {
    /// Path to a seed TOML file (defaults to the platform config dir).
    #[arg(long)]
    seed: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let seed = match args.seed {
        Some(path) => SeedConfig::load_from(&path)?,
        None => SeedConfig::load()?,
    };

    let notifications = NotificationStore::with_seed(seed.notification_seed());
    let (contacts, logs) = seed.conversation_seed();
    let conversations = ConversationStore::with_seed(contacts, logs);
    let prefs = PreferenceStore::new(
        Box::new(TomlFileStorage::new(TomlFileStorage::default_path())),
        seed.theme_default.unwrap_or(Theme::Light),
    );

    println!(
        "huddle demo. theme {}, {} unread notifications. Type 'help'.",
        prefs.get().as_str(),
        notifications.unread_count()
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "help" => print_help(),
            "notifications" => {
                let filter = if rest.is_empty() { Some(Filter::All) } else { Filter::parse(rest) };
                match filter {
                    Some(filter) => print_notifications(&notifications, filter),
                    None => println!("unknown filter '{rest}' (all|message|group|like|achievement)"),
                }
            }
            "read" => match rest.parse::<u64>() {
                Ok(id) => notifications.mark_read(id),
                Err(_) => println!("usage: read <id>"),
            },
            "read-all" => notifications.mark_all_read(),
            "rm" => match rest.parse::<u64>() {
                Ok(id) => notifications.remove(id),
                Err(_) => println!("usage: rm <id>"),
            },
            "contacts" => print_contacts(&conversations),
            "open" => match rest.parse::<u64>() {
                Ok(id) => match conversations.select_contact(id) {
                    Ok(()) => print_log(&conversations, id),
                    Err(e) => println!("{}", e.user_message()),
                },
                Err(_) => println!("usage: open <id>"),
            },
            "send" => {
                if let Err(e) = conversations.send_message(rest) {
                    println!("{}", e.user_message());
                }
            }
            "recv" => {
                let (id, text) = rest.split_once(' ').unwrap_or((rest, ""));
                match id.parse::<u64>() {
                    Ok(id) => {
                        if let Err(e) = conversations.receive_message(id, text) {
                            println!("{}", e.user_message());
                        }
                    }
                    Err(_) => println!("usage: recv <id> <text>"),
                }
            }
            "theme" => {
                if rest.is_empty() {
                    println!("theme: {}", prefs.get().as_str());
                } else if let Err(e) = prefs.set_str(rest) {
                    println!("{}", e.user_message());
                }
            }
            "toggle" => match prefs.toggle() {
                Ok(theme) => println!("theme: {}", theme.as_str()),
                Err(e) => println!("{}", e.user_message()),
            },
            "quit" | "exit" => break,
            other => println!("unknown command '{other}', try 'help'"),
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "commands:\n  \
         notifications [all|message|group|like|achievement]\n  \
         read <id> | read-all | rm <id>\n  \
         contacts | open <id> | send <text> | recv <id> <text>\n  \
         theme [light|dark] | toggle\n  \
         quit"
    );
}

fn print_notifications(store: &NotificationStore, filter: Filter) {
    let entries = store.list(filter);
    if entries.is_empty() {
        println!("no notifications found");
        return;
    }
    for n in entries {
        let marker = if n.read { " " } else { "*" };
        println!(
            "{marker} [{}] {}: {} ({})",
            n.id, n.title, n.description, n.created_at
        );
    }
    println!("{} unread", store.unread_count());
}

fn print_contacts(store: &ConversationStore) {
    for contact in store.contacts() {
        let badge = if contact.unread_count > 0 {
            format!(" ({} unread)", contact.unread_count)
        } else {
            String::new()
        };
        let preview = contact.last_message_preview.as_deref().unwrap_or("(no messages)");
        println!("[{}] {}{badge}: {preview}", contact.id, contact.display_name);
    }
}

fn print_log(store: &ConversationStore, contact_id: u64) {
    match store.log(contact_id) {
        Ok(log) if log.is_empty() => println!("no messages yet"),
        Ok(log) => {
            for message in log {
                println!("{:>4}: {}", message.sender.as_str(), message.text);
            }
        }
        Err(e) => println!("{}", e.user_message()),
    }
}
