//! Command-line interface definition for MarketMind
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for the interactive session, one-shot tool runs,
//! and lead scoring.

use clap::{Parser, Subcommand};

/// MarketMind - AI-powered sales and marketing intelligence
///
/// Generate campaigns, sales pitches, summaries, and research with a hosted
/// language model, score leads, and review everything produced during the
/// session.
#[derive(Parser, Debug, Clone)]
#[command(name = "marketmind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for MarketMind
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive dashboard session
    Session {
        /// Override the provider from config (groq, ollama)
        #[arg(short, long)]
        provider: Option<String>,

        /// View to open first (Dashboard, Campaign, Sales, Lead, Summary, Research, Chat)
        #[arg(long)]
        view: Option<String>,
    },

    /// Run a single tool and print its output
    Run {
        /// Tool to run (campaign, sales, lead, summary, research)
        feature: String,

        /// Primary input: product, lead description, content, or research topic
        #[arg(short, long)]
        input: String,

        /// Audience (campaign) or persona (sales)
        #[arg(short, long)]
        target: Option<String>,

        /// Override the provider from config (groq, ollama)
        #[arg(short, long)]
        provider: Option<String>,

        /// Also write the output to the export directory
        #[arg(long)]
        export: bool,
    },

    /// Classify the buying intent of a lead description
    Score {
        /// Free-text description of the lead
        description: String,

        /// Override the provider from config (groq, ollama)
        #[arg(short, long)]
        provider: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            command: Commands::Session {
                provider: None,
                view: None,
            },
        }
    }
}
