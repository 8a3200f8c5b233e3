/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `session` - Interactive dashboard session
- `run`     - Execute a single tool
- `score`   - Classify a lead description

The session handler is a thin loop around [`crate::session::reduce`]: input
lines become session actions, and [`dispatch::dispatch`] runs whatever
completions they request.
*/

use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};
use crate::config::Config;
use crate::error::{MarketMindError, Result};
use crate::export::Exporter;
use crate::providers::{create_provider, Provider};
use crate::services::{is_error_text, ToolRequest};
use crate::session::{Feature, SessionState, View};
use colored::Colorize;

pub mod dispatch;
pub mod history;
pub mod special_commands;
pub mod views;

/// Last result shown to the user, kept for `/export`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportItem {
    pub title: String,
    pub content: String,
}

impl ExportItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Print generated text, in red when it is failure text
fn print_result(text: &str) {
    if is_error_text(text) {
        println!("\n{}\n", text.red());
    } else {
        println!("\n{}\n", text);
    }
}

// Interactive session handler
pub mod session {
    //! Interactive dashboard session.
    //!
    //! Creates the provider and the session state, then runs a
    //! readline-based loop. Special commands drive navigation and history;
    //! any other line is submitted to the active view.

    use super::dispatch::dispatch;
    use super::history::print_history;
    use super::*;
    use crate::services::analytics::{investor_pitch, usage_insights};
    use crate::services::DashboardSnapshot;
    use crate::session::{HistoryEntry, SessionAction};
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Start an interactive session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `initial_view` - Optional view name overriding `session.default_view`
    ///
    /// # Errors
    ///
    /// Returns error if the provider or the line editor cannot be created
    pub async fn run_session(config: Config, initial_view: Option<String>) -> Result<()> {
        tracing::info!("Starting interactive session");

        let provider = create_provider(&config.provider)?;
        let exporter = Exporter::new(&config.export.output_dir);
        let view_name = initial_view.unwrap_or_else(|| config.session.default_view.clone());

        let mut state = SessionState::new(&view_name);
        let mut last_result: Option<ExportItem> = None;
        let mut rl = DefaultEditor::new()?;

        print_welcome_banner(provider.as_ref());
        views::print_view(&state);

        loop {
            let prompt = format_prompt(state.active_view());
            match rl.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(trimmed)?;

                    match parse_special_command(trimmed) {
                        Ok(SpecialCommand::Exit) => break,
                        Ok(SpecialCommand::None) => {
                            if let Some(item) =
                                handle_input(&mut state, provider.as_ref(), &mut rl, trimmed).await
                            {
                                last_result = Some(item);
                            }
                        }
                        Ok(command) => {
                            handle_command(
                                command,
                                &mut state,
                                provider.as_ref(),
                                &exporter,
                                &mut last_result,
                            )
                            .await;
                        }
                        Err(e) => eprintln!("{}\n", e.to_string().red()),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        tracing::info!(
            tools = state.history.total_tools(),
            chats = state.history.total_chats(),
            "Session ended"
        );
        println!("Goodbye!");
        Ok(())
    }

    /// Submit a plain input line to the active view
    ///
    /// Returns the result to remember for `/export`, if one was produced.
    async fn handle_input(
        state: &mut SessionState,
        provider: &dyn Provider,
        rl: &mut DefaultEditor,
        line: &str,
    ) -> Option<ExportItem> {
        let view = state.active_view();

        if view == View::Chat {
            let result = dispatch(
                state,
                provider,
                SessionAction::SendChatMessage(line.to_string()),
            )
            .await;
            if let Some(reply) = result.chat_reply {
                print_result(&format!("AI: {}", reply));
            }
            return None;
        }

        let feature = match view.feature() {
            Some(feature) => feature,
            None => {
                println!(
                    "{}\n",
                    "Open a tool or the chat first. Type /help for commands.".yellow()
                );
                return None;
            }
        };

        let target = match feature {
            Feature::Campaign => Some(read_field(rl, "Audience: ")?),
            Feature::Sales => Some(read_field(rl, "Persona: ")?),
            _ => None,
        };

        let request = match ToolRequest::from_input(feature, line, target.as_deref()) {
            Ok(request) => request,
            Err(e) => {
                eprintln!("{}\n", e.red());
                return None;
            }
        };

        println!("{}", "Generating...".dimmed());
        let result = dispatch(state, provider, SessionAction::SubmitTool(request)).await;
        let outcome = result.tool_outcome?;

        match &outcome.lead_score {
            Some(score) => println!("\n{}\n", score.to_string().bold()),
            None => print_result(&outcome.output),
        }

        Some(ExportItem::new(feature.export_title(), outcome.output))
    }

    fn read_field(rl: &mut DefaultEditor, prompt: &str) -> Option<String> {
        match rl.readline(prompt) {
            Ok(value) => Some(value.trim().to_string()),
            Err(e) => {
                tracing::debug!("Form input cancelled: {:?}", e);
                None
            }
        }
    }

    async fn handle_command(
        command: SpecialCommand,
        state: &mut SessionState,
        provider: &dyn Provider,
        exporter: &Exporter,
        last_result: &mut Option<ExportItem>,
    ) {
        match command {
            SpecialCommand::SwitchView(name) => {
                let result = dispatch(
                    state,
                    provider,
                    SessionAction::NavigateNamed {
                        name: name.clone(),
                        keep_selection: false,
                    },
                )
                .await;
                if result.render {
                    views::print_view(state);
                } else {
                    println!("{}\n", format!("Unknown view: {}", name).yellow());
                }
            }
            SpecialCommand::ListHistory => print_history(&state.history),
            SpecialCommand::OpenHistory(reference) => {
                let Some((item, view)) = reference.resolve(&state.history) else {
                    println!("{}\n", "No such history item.".yellow());
                    return;
                };
                dispatch(state, provider, SessionAction::SelectHistoryItem { item, view }).await;
                *last_result = match state.selected_entry() {
                    Some(HistoryEntry::Tool(record)) => Some(ExportItem::new(
                        record.feature.export_title(),
                        record.output.clone(),
                    )),
                    Some(HistoryEntry::Chat(record)) => Some(ExportItem::new(
                        "Chat",
                        views::render_transcript(&record.messages),
                    )),
                    None => last_result.take(),
                };
                views::print_view(state);
            }
            SpecialCommand::SaveChat => {
                let result = dispatch(state, provider, SessionAction::SaveChat).await;
                if result.render {
                    println!("{}\n", "Chat saved.".green());
                } else {
                    println!("{}\n", "Nothing to save.".yellow());
                }
            }
            SpecialCommand::Back => {
                let result = dispatch(state, provider, SessionAction::Back).await;
                if result.render {
                    views::print_view(state);
                }
            }
            SpecialCommand::Insights | SpecialCommand::InvestorPitch => {
                let snapshot = DashboardSnapshot::current(&state.history);
                if !snapshot.has_activity() {
                    println!(
                        "{}\n",
                        "Start using the platform to unlock analytics & investor pitch mode."
                            .yellow()
                    );
                    return;
                }
                println!("{}", "Generating...".dimmed());
                let (title, heading, text) = if command == SpecialCommand::Insights {
                    (
                        "Analytics_Report",
                        "🧠 AI Usage Insights",
                        usage_insights(provider, &snapshot).await,
                    )
                } else {
                    (
                        "Investor_Pitch",
                        "🎤 Investor Pitch Script",
                        investor_pitch(provider, &snapshot).await,
                    )
                };
                println!("\n{}", heading.bold().yellow());
                print_result(&text);
                *last_result = Some(ExportItem::new(title, text));
            }
            SpecialCommand::Export { report } => {
                let Some(item) = last_result.as_ref() else {
                    println!("{}\n", "Nothing to export yet.".yellow());
                    return;
                };
                let written = if report {
                    exporter.export_report(&item.title, &item.content)
                } else {
                    exporter.export_text(&item.title, &item.content)
                };
                match written {
                    Ok(path) => println!("{} {}\n", "Saved".green(), path.display()),
                    Err(e) => eprintln!("{}\n", format!("Export failed: {}", e).red()),
                }
            }
            SpecialCommand::ShowStatus => print_status_display(state, provider, exporter),
            SpecialCommand::Help => print_help(),
            SpecialCommand::Exit | SpecialCommand::None => {}
        }
    }

    /// Prompt showing the active view
    pub fn format_prompt(view: View) -> String {
        format!("[{}] >> ", view.label().cyan())
    }

    fn print_welcome_banner(provider: &dyn Provider) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║            MarketMind Intelligence Session                   ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Provider: {} ({})", provider.name().green(), provider.model());
        println!("Type '/help' for available commands, 'exit' to quit\n");
    }

    fn print_status_display(state: &SessionState, provider: &dyn Provider, exporter: &Exporter) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                  MarketMind Session Status                   ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Provider:       {} ({})", provider.name().green(), provider.model());
        println!("Active View:    {}", state.active_view().title());
        println!("Tool Runs:      {}", state.history.total_tools());
        println!("Saved Chats:    {}", state.history.total_chats());
        println!("Current Chat:   {} messages", state.chat.messages().len());
        println!("Export Folder:  {}", exporter.output_dir().display());
        println!();
        println!("{}", views::render_sidebar(state));
        println!();
    }
}

// One-shot tool handler
pub mod r#run {
    //! Execute a single tool and print its output.

    use super::*;
    use crate::services::run_tool;

    /// Run one tool against the configured provider
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration
    /// * `feature` - Tool name (campaign, sales, lead, summary, research)
    /// * `input` - Primary input for the tool
    /// * `target` - Audience (campaign) or persona (sales)
    /// * `export` - Also write the output to the export directory
    ///
    /// # Errors
    ///
    /// Returns error for an unknown tool, missing or empty input, or a failed
    /// export. Provider failures are printed, not returned.
    pub async fn run_tool_once(
        config: Config,
        feature: &str,
        input: &str,
        target: Option<&str>,
        export: bool,
    ) -> Result<()> {
        let feature = Feature::parse_str(feature).map_err(MarketMindError::Config)?;
        let request =
            ToolRequest::from_input(feature, input, target).map_err(MarketMindError::Config)?;
        if request.is_blank() {
            return Err(MarketMindError::Config("Input cannot be empty".to_string()).into());
        }

        let provider = create_provider(&config.provider)?;
        let outcome = run_tool(provider.as_ref(), &request).await;
        print_result(&outcome.output);

        if export {
            let path = Exporter::new(&config.export.output_dir)
                .export_text(feature.export_title(), &outcome.output)?;
            println!("{} {}", "Saved".green(), path.display());
        }

        Ok(())
    }
}

// Lead scoring handler
pub mod score {
    //! Classify a lead description.

    use super::*;
    use crate::services::classify_lead;

    /// Score a lead and print `Score: <n> | Intent: <label>`
    ///
    /// # Errors
    ///
    /// Returns error if the provider cannot be created
    pub async fn run_score(config: Config, description: &str) -> Result<()> {
        let provider = create_provider(&config.provider)?;
        let score = classify_lead(provider.as_ref(), description).await;
        println!("{}", score);
        Ok(())
    }
}
