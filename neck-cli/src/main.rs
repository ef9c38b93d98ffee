//! Terminal front end for the fretboard note-drill engine.
//!
//! Subcommands show the neck as a text grid, run the interactive note
//! drill, export the computed geometry as SVG, and list the built-in
//! scales and tunings.

mod render;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use neck_core::drill::{DrillSession, GuessOutcome};
use neck_core::neck::{Handedness, Neck, NeckConfig};
use neck_core::note::Note;
use neck_core::profile::NeckProfile;
use neck_core::scale;
use neck_core::svg;
use neck_core::tuning::{TUNING_PRESETS, Tuning};
use neck_core::{Marking, NeckLayout};

/// Fretboard note drill
#[derive(Parser)]
#[command(name = "neck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Neck setup shared by every command that builds a neck.
#[derive(Args)]
struct NeckArgs {
    /// Tuning as a compact spec like EADGBE (see `neck tunings`)
    #[arg(short, long, default_value = "EADGBE")]
    tuning: String,

    /// Number of frets (2 to 24)
    #[arg(short, long, default_value_t = 22)]
    frets: u8,

    /// Mirror the neck for left-handed display (SVG export)
    #[arg(long)]
    lefty: bool,

    /// Load the neck setup from a profile JSON instead
    #[arg(short, long)]
    profile: Option<PathBuf>,
}

/// Note or scale selection shared by `show` and `export`.
#[derive(Args)]
struct MarkArgs {
    /// Mark every position of this note
    #[arg(short, long, conflicts_with = "scale")]
    note: Option<String>,

    /// Mark this scale (see `neck scales`)
    #[arg(short, long)]
    scale: Option<String>,

    /// Key for --scale
    #[arg(short, long, default_value = "C")]
    key: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the neck as a text grid, optionally marking a note or scale
    Show {
        #[command(flatten)]
        neck: NeckArgs,

        #[command(flatten)]
        mark: MarkArgs,
    },

    /// Run the interactive note-recognition drill
    Drill {
        #[command(flatten)]
        neck: NeckArgs,
    },

    /// Export the neck as an SVG document
    Export {
        #[command(flatten)]
        neck: NeckArgs,

        #[command(flatten)]
        mark: MarkArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the built-in scales and their interval patterns
    Scales,

    /// List the built-in tuning presets
    Tunings,

    /// Write a neck profile JSON for later use with --profile
    Profile {
        /// Where to write the profile
        path: PathBuf,

        #[command(flatten)]
        neck: NeckArgs,

        /// Optional display name stored in the profile
        #[arg(long)]
        name: Option<String>,
    },
}

impl NeckArgs {
    fn config(&self) -> Result<NeckConfig> {
        let mut config = match &self.profile {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading profile {}", path.display()))?;
                let profile: NeckProfile = serde_json::from_str(&text)
                    .with_context(|| format!("parsing profile {}", path.display()))?;
                profile.config
            }
            None => NeckConfig::new(Tuning::parse(&self.tuning)?, self.frets)?,
        };
        if self.lefty {
            config.handedness = Handedness::Left;
        }
        Ok(config)
    }

    fn build(&self) -> Result<Neck> {
        Ok(Neck::new(self.config()?)?)
    }
}

impl MarkArgs {
    fn marking(&self, neck: &Neck) -> Result<Marking> {
        if let Some(name) = &self.note {
            return Ok(neck.mark_all(Note::parse(name)?));
        }
        if let Some(scale_name) = &self.scale {
            let key = Note::parse(&self.key)?;
            return Ok(neck.mark_scale(scale_name, key)?);
        }
        Ok(Vec::new())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Show { neck, mark } => {
            let neck = neck.build()?;
            let marking = mark.marking(&neck)?;
            print!("{}", render::neck_text(&neck, &marking, false));
        }
        Commands::Drill { neck } => run_drill(neck.build()?)?,
        Commands::Export { neck, mark, output } => {
            let built = neck.build()?;
            let marking = mark.marking(&built)?;
            let layout = NeckLayout::new(built.strings(), built.frets());
            let document = svg::render(&layout, &marking, built.config().handedness);
            match output {
                Some(path) => {
                    fs::write(&path, &document)
                        .with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("[EXPORT] wrote {} bytes to {}", document.len(), path.display());
                }
                None => print!("{document}"),
            }
        }
        Commands::Scales => {
            for name in scale::scale_names() {
                let pattern = scale::intervals(name).unwrap_or(&[]);
                let steps: Vec<String> = pattern.iter().map(|s| s.to_string()).collect();
                println!("{name:<18} {}", steps.join(" "));
            }
        }
        Commands::Tunings => {
            for preset in TUNING_PRESETS {
                println!("{:<10} {}", preset.spec, preset.description);
            }
        }
        Commands::Profile { path, neck, name } => {
            let mut profile = NeckProfile::new(neck.config()?);
            profile.name = name;
            let json = serde_json::to_string_pretty(&profile)?;
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("[PROFILE] wrote {}", path.display());
        }
    }
    Ok(())
}

/// The interactive drill loop: show a concealed position, read a guess,
/// reveal on a wrong answer.
fn run_drill(neck: Neck) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut session = DrillSession::new(neck, &mut rng)?;
    println!("Name the marked note. Enter a note name, 'n' for the next note, 'q' to quit.");
    let stdin = io::stdin();
    loop {
        println!();
        print!("{}", render::neck_text(session.neck(), session.marking(), true));
        print!("note> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        match input {
            "" => continue,
            "q" | "quit" => break,
            "n" | "next" => session.advance(&mut rng)?,
            guess => match Note::parse(guess) {
                Ok(note) => {
                    let target = session.target();
                    match session.guess(note, &mut rng)? {
                        GuessOutcome::Correct => {
                            println!("{} it was {}.", "Correct:".green(), target.unicode());
                        }
                        GuessOutcome::Incorrect => {
                            println!("{} Every position of the note is marked now.", "No.".red());
                        }
                    }
                }
                Err(e) => println!("{e}"),
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_parses_with_defaults() {
        let cli = Cli::try_parse_from(["neck", "show"]).unwrap();
        match cli.command {
            Commands::Show { neck, mark } => {
                assert_eq!(neck.tuning, "EADGBE");
                assert_eq!(neck.frets, 22);
                assert!(!neck.lefty);
                assert!(mark.note.is_none());
                assert!(mark.scale.is_none());
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn note_and_scale_marks_conflict() {
        assert!(Cli::try_parse_from(["neck", "show", "--note", "E", "--scale", "Major"]).is_err());
    }

    #[test]
    fn export_accepts_scale_and_key() {
        let cli = Cli::try_parse_from([
            "neck", "export", "--scale", "Dorian", "--key", "A", "--output", "neck.svg",
        ])
        .unwrap();
        match cli.command {
            Commands::Export { mark, output, .. } => {
                assert_eq!(mark.scale.as_deref(), Some("Dorian"));
                assert_eq!(mark.key, "A");
                assert_eq!(output, Some(PathBuf::from("neck.svg")));
            }
            _ => panic!("expected export"),
        }
    }
}
