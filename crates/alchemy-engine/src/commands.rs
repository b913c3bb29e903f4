//! Text commands typed at the prompt.
//!
//! One command per line; the first word selects the command and the rest
//! are its arguments. Parsing never touches the session.

use std::path::PathBuf;
use std::str::FromStr;

use alchemy_types::{ElementId, Language, ShopItem, TreatKind};

use crate::error::CommandError;

/// File written by `export` when no path is given.
pub const DEFAULT_EXPORT_FILE: &str = "alchemy-export.json";

/// Largest quantity accepted by `buy`.
pub const MAX_BUY_QUANTITY: u32 = 99;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Combine the given ingredients.
    Craft(Vec<ElementId>),
    /// Buy `quantity` units of an item, one purchase each.
    Buy {
        /// What to buy.
        item: ShopItem,
        /// How many.
        quantity: u32,
    },
    /// Feed the companion a treat.
    Treat(TreatKind),
    /// Show the active request, asking for a new one if there is none.
    Request,
    /// Hand over the elements of the active request.
    Give,
    /// Talk to the companion.
    Say(String),
    /// Claim the daily bonus.
    Bonus,
    /// List the inventory.
    Inventory,
    /// Show level, coins, and companion affinity.
    Status,
    /// List the shop.
    Shop,
    /// Show the leaderboard.
    Top,
    /// Switch the display language.
    Language(Language),
    /// Save now.
    Save,
    /// Write the game to a standalone file.
    Export(PathBuf),
    /// Replace the game with one read from an exported file.
    Import(PathBuf),
    /// Start over with a fresh game.
    Reset,
    /// Show the command list.
    Help,
    /// Save and exit.
    Quit,
}

/// Command reference shown by `help`.
pub const HELP: &str = "\
craft <a> <b> [c] [d]   combine 2 to 4 ingredients
buy <item> [n]          buy an element, meat or bone (n times)
treat <meat|bone>       feed the companion
request                 see what the companion wants
give                    hand over the requested elements
say <text>              talk to the companion
bonus                   claim the daily bonus
inv                     list your elements
status                  level, coins and companion mood
shop                    list prices
top                     leaderboard
lang <en|ru>            switch language
export [path]           write the game to a file
import <path>           load a game from an exported file
save | reset | help | quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));
        if word.is_empty() {
            return Err(CommandError::Empty);
        }
        let args: Vec<&str> = rest.split_whitespace().collect();

        match word.to_lowercase().as_str() {
            "craft" | "c" => {
                if args.is_empty() {
                    return Err(CommandError::Usage("craft <a> <b> [c] [d]"));
                }
                Ok(Self::Craft(
                    args.iter().map(|a| ElementId::new(a.to_lowercase())).collect(),
                ))
            }
            "buy" | "b" => parse_buy(&args),
            "treat" | "feed" => {
                let [kind] = args.as_slice() else {
                    return Err(CommandError::Usage("treat <meat|bone>"));
                };
                kind.parse()
                    .ok()
                    .map(Self::Treat)
                    .ok_or(CommandError::Usage("treat <meat|bone>"))
            }
            "request" => Ok(Self::Request),
            "give" => Ok(Self::Give),
            "say" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("say <text>"));
                }
                Ok(Self::Say(rest.to_owned()))
            }
            "bonus" | "daily" => Ok(Self::Bonus),
            "inv" | "inventory" | "i" => Ok(Self::Inventory),
            "status" | "s" => Ok(Self::Status),
            "shop" => Ok(Self::Shop),
            "top" | "leaderboard" => Ok(Self::Top),
            "lang" | "language" => {
                let [code] = args.as_slice() else {
                    return Err(CommandError::Usage("lang <en|ru>"));
                };
                code.parse()
                    .ok()
                    .map(Self::Language)
                    .ok_or(CommandError::Usage("lang <en|ru>"))
            }
            "save" => Ok(Self::Save),
            "export" => Ok(Self::Export(PathBuf::from(if rest.is_empty() {
                DEFAULT_EXPORT_FILE
            } else {
                rest
            }))),
            "import" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("import <path>"));
                }
                Ok(Self::Import(PathBuf::from(rest)))
            }
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}

fn parse_buy(args: &[&str]) -> Result<Command, CommandError> {
    const USAGE: &str = "buy <item> [n]";
    let (name, quantity) = match args {
        [name] => (*name, 1),
        [name, n] => (*name, n.parse::<u32>().ok().ok_or(CommandError::Usage(USAGE))?),
        _ => return Err(CommandError::Usage(USAGE)),
    };
    if quantity == 0 || quantity > MAX_BUY_QUANTITY {
        return Err(CommandError::Usage(USAGE));
    }
    let item = name.parse::<TreatKind>().map_or_else(
        |_| ShopItem::Element(ElementId::new(name.to_lowercase())),
        ShopItem::Treat,
    );
    Ok(Command::Buy { item, quantity })
}
