use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// The demo pair the tool answers when invoked with no questions. The
/// second one only works because the first answer is still in memory.
pub const DEFAULT_QUESTIONS: [&str; 2] = [
    "How many people live in canada?",
    "what is their national anthem called?",
];

#[derive(Parser, Debug)]
#[command(name = "seeker")]
#[command(version, about = "Conversational web-search agent", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Questions to answer in sequence (defaults to a built-in demo pair)
    pub questions: Vec<String>,

    /// Model to use (e.g. gpt-4o-mini)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Maximum reasoning steps per question
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Print the Thought/Action/Observation trace while answering
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file path (defaults to the per-user location)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigSubcommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommands {
    Init,
    Where,
}

impl Cli {
    #[must_use]
    pub fn effective_questions(&self) -> Vec<String> {
        if self.questions.is_empty() {
            DEFAULT_QUESTIONS.iter().map(ToString::to_string).collect()
        } else {
            self.questions.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_questions_given() {
        let cli = Cli::parse_from(["seeker"]);
        let questions = cli.effective_questions();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0], "How many people live in canada?");
    }

    #[test]
    fn test_explicit_questions_override_defaults() {
        let cli = Cli::parse_from(["seeker", "who won the last world cup?"]);
        assert_eq!(
            cli.effective_questions(),
            vec!["who won the last world cup?".to_string()]
        );
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from(["seeker", "-v", "--max-iterations", "3", "-m", "gpt-4.1", "q"]);
        assert!(cli.verbose);
        assert_eq!(cli.max_iterations, Some(3));
        assert_eq!(cli.model.as_deref(), Some("gpt-4.1"));
    }

    #[test]
    fn test_config_subcommand_parses() {
        let cli = Cli::parse_from(["seeker", "config", "where"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigSubcommands::Where
            })
        ));
    }
}
