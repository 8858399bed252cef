//! Command Dispatcher
//!
//! Maps REPL command names to typed commands and executes them against the
//! fetch client and a caller-owned [`Pokedex`].
//!
//! # Commands
//! - `help` - List commands
//! - `exit` - Leave the REPL
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List pokemon found in an area
//! - `catch <pokemon>` - Try to catch a pokemon
//! - `inspect <pokemon>` - Show a caught pokemon
//! - `pokedex` - List caught pokemon

pub mod catch;
pub mod pagination;
pub mod pokedex;

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::client::PokeApiClient;
use crate::config::Config;
use crate::error::{PokedexError, Result};

pub use catch::{catch_probability, roll_catch, DEFAULT_BENCHMARK};
pub use pagination::Pagination;
pub use pokedex::Pokedex;

const END_OF_RECORDS: &str = "~~~~~~~End of records~~~~~~~~~~";

// == Command ==
/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// Resolves a command by its REPL name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::Help => "help",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Exit => "Exit the Pokedex",
            Command::Help => "Displays a help message",
            Command::Map => "Get the next page of location areas",
            Command::MapBack => "Get the previous page of location areas",
            Command::Explore => "Explore the provided location",
            Command::Catch => "Catch a pokemon",
            Command::Inspect => "Inspect a caught pokemon",
            Command::Pokedex => "List caught pokemon",
        }
    }
}

/// What the REPL should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Dispatcher ==
/// Executes commands. Owns the fetch client, paging state and catch RNG; the
/// pokedex is lent in per call.
#[derive(Debug)]
pub struct Dispatcher<R = StdRng> {
    client: PokeApiClient,
    pages: Pagination,
    benchmark: u32,
    rng: R,
}

impl Dispatcher<StdRng> {
    /// Creates a dispatcher with an entropy-seeded RNG.
    pub fn new(client: PokeApiClient, config: &Config) -> Self {
        Self::with_rng(
            client,
            config.page_size,
            config.catch_benchmark,
            StdRng::from_entropy(),
        )
    }
}

impl<R: Rng> Dispatcher<R> {
    /// Creates a dispatcher with an explicit RNG, for reproducible catches.
    pub fn with_rng(client: PokeApiClient, page_size: usize, benchmark: u32, rng: R) -> Self {
        Self {
            client,
            pages: Pagination::new(page_size),
            benchmark,
            rng,
        }
    }

    /// Releases the fetch client, e.g. to shut its cache down.
    pub fn into_client(self) -> PokeApiClient {
        self.client
    }

    /// Runs `command` with the tokens that followed it on the input line.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        args: &[String],
        pokedex: &mut Pokedex,
        out: &mut W,
    ) -> Result<Flow> {
        debug!(command = command.name(), ?args, "Executing command");

        match command {
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Help => help(out)?,
            Command::Map => {
                let offset = self.pages.next_offset();
                self.show_page(offset, out).await?;
            }
            Command::MapBack => {
                let offset = self.pages.previous_offset();
                self.show_page(offset, out).await?;
            }
            Command::Explore => {
                let area = first_arg(args, "no area found")?;
                self.explore(area, out).await?;
            }
            Command::Catch => {
                let name = first_arg(args, "no pokemon found")?;
                self.catch(name, pokedex, out).await?;
            }
            Command::Inspect => {
                let name = first_arg(args, "no pokemon found")?;
                inspect(name, pokedex, out)?;
            }
            Command::Pokedex => list_pokedex(pokedex, out)?,
        }

        Ok(Flow::Continue)
    }

    async fn show_page<W: Write>(&mut self, offset: usize, out: &mut W) -> Result<()> {
        let limit = self.pages.page_size();
        let locations = self.client.list_location_areas(limit, offset).await?;

        for location in &locations {
            writeln!(out, "{}", location.name)?;
        }
        if self.pages.record(offset, locations.len()) {
            writeln!(out, "{}", END_OF_RECORDS)?;
        }
        writeln!(out)?;
        Ok(())
    }

    async fn explore<W: Write>(&self, area: &str, out: &mut W) -> Result<()> {
        let location = self.client.location_area(area).await?;

        writeln!(out, "Exploring {}...", area)?;
        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(
        &mut self,
        name: &str,
        pokedex: &mut Pokedex,
        out: &mut W,
    ) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;
        writeln!(out, "Throwing a Pokeball at {}...", name)?;

        let probability =
            catch_probability(pokemon.base_experience.unwrap_or(0), self.benchmark);
        let caught = roll_catch(&mut self.rng, probability);
        debug!(pokemon = %pokemon.name, probability, caught, "Catch attempt");

        if caught {
            writeln!(out, "{} was caught!", name)?;
            pokedex.record(pokemon);
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }
}

fn first_arg<'a>(args: &'a [String], missing: &'static str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or(PokedexError::MissingArgument(missing))
}

fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in Command::ALL {
        writeln!(out, "{}: {}", command.name(), command.description())?;
    }
    Ok(())
}

fn inspect<W: Write>(name: &str, pokedex: &Pokedex, out: &mut W) -> Result<()> {
    let pokemon = pokedex
        .get(name)
        .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;
    let stats = pokemon.stat_summary();

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    writeln!(out, "  -hp: {}", stats.hp)?;
    writeln!(out, "  -attack: {}", stats.attack)?;
    writeln!(out, "  -defense: {}", stats.defense)?;
    writeln!(out, "  -special-attack: {}", stats.special_attack)?;
    writeln!(out, "  -special-defense: {}", stats.special_defense)?;
    writeln!(out, "  -speed: {}", stats.speed)?;
    writeln!(out, "Types:")?;
    for kind in pokemon.type_names() {
        writeln!(out, "  - {}", kind)?;
    }
    Ok(())
}

fn list_pokedex<W: Write>(pokedex: &Pokedex, out: &mut W) -> Result<()> {
    writeln!(out, "Your Pokedex:")?;
    for name in pokedex.names() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NamedResource, Pokemon, PokemonStat, PokemonType};

    #[test]
    fn test_parse_known_commands() {
        for command in Command::ALL {
            assert_eq!(Command::parse(command.name()), Some(command));
        }
        assert_eq!(Command::parse("mapb"), Some(Command::MapBack));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(Command::parse("fly"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut out = Vec::new();
        help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Welcome to the Pokedex!\nUsage:\n\n"));
        for command in Command::ALL {
            assert!(text.contains(&format!("{}: {}", command.name(), command.description())));
        }
    }

    #[test]
    fn test_first_arg_missing() {
        let err = first_arg(&[], "no area found").unwrap_err();
        assert_eq!(err.to_string(), "no area found");
    }

    #[test]
    fn test_inspect_formats_caught_pokemon() {
        let named = |name: &str| NamedResource {
            name: name.to_string(),
            url: String::new(),
        };
        let mut pokedex = Pokedex::new();
        pokedex.record(Pokemon {
            id: 16,
            name: "pidgey".to_string(),
            base_experience: Some(50),
            height: 3,
            weight: 18,
            stats: vec![PokemonStat {
                base_stat: 40,
                effort: 0,
                stat: named("hp"),
            }],
            types: vec![
                PokemonType {
                    slot: 1,
                    kind: named("normal"),
                },
                PokemonType {
                    slot: 2,
                    kind: named("flying"),
                },
            ],
        });

        let mut out = Vec::new();
        inspect("pidgey", &pokedex, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Name: pidgey\nHeight: 3\nWeight: 18\nStats:\n  -hp: 40\n  -attack: 0\n  \
             -defense: 0\n  -special-attack: 0\n  -special-defense: 0\n  -speed: 0\n\
             Types:\n  - normal\n  - flying\n"
        );
    }

    #[test]
    fn test_inspect_uncaught() {
        let mut out = Vec::new();
        let err = inspect("mew", &Pokedex::new(), &mut out).unwrap_err();
        assert!(matches!(err, PokedexError::NotCaught(name) if name == "mew"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_list_pokedex() {
        let mut pokedex = Pokedex::new();
        pokedex.record(Pokemon {
            name: "pidgey".to_string(),
            ..Pokemon::default()
        });

        let mut out = Vec::new();
        list_pokedex(&pokedex, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Your Pokedex:\n - pidgey\n");
    }
}
