//! Terminal front end for the Alchemy idle game.
//!
//! Reads one command per line from stdin and prints outcomes to stdout.
//! Logs go to stderr so the two never mix.
//!
//! # Event loop
//!
//! ```text
//! stdin line ----------\
//! chat reply (mpsc) ----+--> select! --> Session (single mutation path)
//! autosave tick -------/
//! Ctrl-C ------------- save and exit
//! ```
//!
//! Chat calls run on spawned tasks; only their replies come back into the
//! loop, so the game never waits on the network.

use std::path::PathBuf;

use alchemy_companion::{ChatClient, CompanionConfig, CompanionError, PromptEngine};
use alchemy_engine::{CONFIG_FILE, Command, EngineConfig, EngineError, HELP, Session, view};
use alchemy_store::JsonFileStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

type ChatReply = Result<String, CompanionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Application entry point.
///
/// Loads configuration, restores the saved game, and runs the command loop
/// until `quit`, end of input, or Ctrl-C. The game is saved on the way out.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("alchemy starting");

    let config = load_config()?;
    info!(
        save_dir = %config.save_dir.display(),
        autosave_secs = config.autosave_secs,
        language = ?config.language,
        "configuration loaded"
    );

    let companion = CompanionConfig::from_env()?;
    let prompts = PromptEngine::new(companion.templates_dir.as_deref())?;
    let chat = match ChatClient::new(&companion) {
        Ok(client) => {
            info!(model = client.model(), api_url = %companion.api_url, "chat API configured");
            Some(client)
        }
        Err(CompanionError::MissingCredential) => {
            info!("no chat API key configured, the companion uses its local voice");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let store = JsonFileStore::new(&config.save_dir);
    let mut session = Session::open(&config, Box::new(store))?
        .with_prompts(prompts)
        .with_leaderboard(&config.save_dir)?;

    println!("{}", view::greeting(&session));
    println!("{}", view::status(&session));
    println!("Type `help` for commands.");

    let (tx, mut rx) = mpsc::channel::<ChatReply>(8);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut autosave = config.autosave_interval().map(|period| {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        interval.reset();
        interval
    });
    let mut thinking = false;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    let flow = handle_line(&line, &mut session, chat.as_ref(), &tx, &mut thinking);
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "failed to read stdin");
                    break;
                }
            },
            Some(reply) = rx.recv() => {
                thinking = false;
                show_reply(&mut session, reply);
            }
            () = next_tick(&mut autosave) => match session.autosave() {
                Ok(true) => debug!("autosaved"),
                Ok(false) => {}
                Err(e) => warn!(error = %e, "autosave failed"),
            },
            _ = &mut ctrl_c => {
                info!("interrupted");
                break;
            }
        }
    }

    session.save()?;
    info!("game saved, goodbye");
    Ok(())
}

/// Load the engine configuration.
///
/// Uses `ALCHEMY_CONFIG` when set (the file must exist), otherwise
/// `alchemy.yaml` in the working directory if present, otherwise defaults.
fn load_config() -> Result<EngineConfig, EngineError> {
    if let Ok(path) = std::env::var("ALCHEMY_CONFIG") {
        return Ok(EngineConfig::from_file(&PathBuf::from(path))?);
    }
    let path = PathBuf::from(CONFIG_FILE);
    if path.exists() {
        Ok(EngineConfig::from_file(&path)?)
    } else {
        info!("config file not found, using defaults");
        let mut config = EngineConfig::default();
        config.apply_env_overrides();
        Ok(config)
    }
}

/// Resolve when the autosave interval fires; never when autosave is off.
async fn next_tick(autosave: &mut Option<Interval>) {
    match autosave {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn handle_line(
    line: &str,
    session: &mut Session,
    chat: Option<&ChatClient>,
    tx: &mpsc::Sender<ChatReply>,
    thinking: &mut bool,
) -> Flow {
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(alchemy_engine::CommandError::Empty) => return Flow::Continue,
        Err(e) => {
            println!("{e}");
            return Flow::Continue;
        }
    };

    match command {
        Command::Craft(ingredients) => match session.attempt_craft(&ingredients) {
            Ok(crafted) => print!("{}", view::crafted(session, &crafted)),
            Err(e) => println!("{}", view::game_error(session, &e)),
        },
        Command::Buy { item, quantity } => {
            for _ in 0..quantity {
                match session.purchase(item.clone()) {
                    Ok(purchased) => print!("{}", view::purchased(session, &purchased)),
                    Err(e) => {
                        println!("{}", view::game_error(session, &e));
                        break;
                    }
                }
            }
        }
        Command::Treat(kind) => match session.give_treat(kind) {
            Ok(given) => println!("{}", view::treat_given(&given)),
            Err(e) => println!("{}", view::game_error(session, &e)),
        },
        Command::Request => match session.offer_request() {
            Some(request) => println!("{}", view::request(session, &request)),
            None => println!("🐕 Dobby does not want anything right now."),
        },
        Command::Give => match session.complete_request() {
            Ok(completed) => println!("{}", view::request_completed(session, &completed)),
            Err(e) => println!("{}", view::game_error(session, &e)),
        },
        Command::Say(text) => say(&text, session, chat, tx, thinking),
        Command::Bonus => match session.claim_daily_bonus() {
            Ok(bonus) => println!("{}", view::daily_bonus(&bonus)),
            Err(e) => println!("{}", view::game_error(session, &e)),
        },
        Command::Inventory => println!("{}", view::inventory(session)),
        Command::Status => println!("{}", view::status(session)),
        Command::Shop => println!("{}", view::shop(session)),
        Command::Top => println!("{}", view::leaderboard(session)),
        Command::Language(language) => {
            session.set_language(language);
            println!("Language: {}", language.display_name());
        }
        Command::Save => match session.save() {
            Ok(saved) => println!("Saved at {}", saved.saved_at.format("%H:%M:%S")),
            Err(e) => println!("Save failed: {e}"),
        },
        Command::Export(path) => match session.export(&path) {
            Ok(_) => println!("Exported to {}", path.display()),
            Err(e) => println!("Export failed: {e}"),
        },
        Command::Import(path) => match session.import(&path) {
            Ok(progress) => {
                println!("Imported {}", path.display());
                print!("{}", view::progress(&progress));
                println!("{}", view::status(session));
            }
            Err(e) => println!("Import failed, current game kept: {e}"),
        },
        Command::Reset => {
            session.reset();
            println!("Game reset.");
            println!("{}", view::status(session));
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

/// Send a message to the companion, or answer locally without a client.
fn say(
    text: &str,
    session: &mut Session,
    chat: Option<&ChatClient>,
    tx: &mpsc::Sender<ChatReply>,
    thinking: &mut bool,
) {
    let Some(client) = chat else {
        println!("({})", CompanionError::MissingCredential);
        println!("🐕 {}", session.companion_fallback());
        return;
    };
    if *thinking {
        println!("Dobby is still thinking...");
        return;
    }
    let prompt = match session.prepare_companion_message(text) {
        Ok(prompt) => prompt,
        Err(e) => {
            warn!(error = %e, "failed to render companion prompt");
            println!("🐕 {}", session.companion_fallback());
            return;
        }
    };

    *thinking = true;
    println!("Dobby is sniffing your words...");
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let reply = client.ask(&prompt).await;
        if tx.send(reply).await.is_err() {
            debug!("session closed before the chat reply arrived");
        }
    });
}

fn show_reply(session: &mut Session, reply: ChatReply) {
    match reply {
        Ok(text) => println!("{}", view::conversation(&session.apply_companion_reply(text))),
        Err(e) => {
            warn!(error = %e, "chat call failed");
            println!("Woof! *Dobby sneezed* Something went wrong... ({e})");
            println!("🐕 {}", session.companion_fallback());
        }
    }
}
