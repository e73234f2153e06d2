//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use storyloom_assist::{CharacterSketch, ChatReply, StoryElements};
use storyloom_domain::{OutlinePoint, StoryConcept};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const TENSION_BAR_WIDTH: usize = 10;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a generated continuation.
    pub fn format_continuation(&self, text: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({ "text": text }))?),
            OutputFormat::Table if text.trim().is_empty() => {
                Ok(self.warning("The model returned an empty continuation."))
            }
            OutputFormat::Table => Ok(text.to_string()),
        }
    }

    /// Format extracted characters.
    pub fn format_characters(&self, characters: &[CharacterSketch]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(characters)?),
            OutputFormat::Table => Ok(self.characters_table(characters)),
        }
    }

    fn characters_table(&self, characters: &[CharacterSketch]) -> String {
        if characters.is_empty() {
            return self.colorize("No characters found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Role", "Conflict", "Obstacle", "Action", "Ending"]);
        for c in characters {
            builder.push_record([
                c.name.as_str(),
                c.role.as_deref().unwrap_or("-"),
                &c.conflict,
                &c.obstacle,
                &c.action,
                &c.ending,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format outline points as a tension curve.
    pub fn format_outline(&self, points: &[OutlinePoint]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(points)?),
            OutputFormat::Table => Ok(self.outline_table(points)),
        }
    }

    fn outline_table(&self, points: &[OutlinePoint]) -> String {
        if points.is_empty() {
            return self.colorize("No outline points found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Stage", "Tension", "Description"]);
        for (i, p) in points.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                p.stage.clone(),
                format!("{} {:>3}", tension_bar(p.tension), p.tension),
                p.description.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format the combined extraction result.
    pub fn format_elements(&self, elements: Option<&StoryElements>) -> Result<String> {
        match (self.format, elements) {
            (OutputFormat::Json, _) => Ok(serde_json::to_string_pretty(&elements)?),
            (OutputFormat::Table, None) => Ok(self.warning("Could not extract story elements.")),
            (OutputFormat::Table, Some(e)) => Ok(format!(
                "{}\n{}\n\n{}\n{}",
                self.colorize("Characters", "cyan"),
                self.characters_table(&e.characters),
                self.colorize("Outline", "cyan"),
                self.outline_table(&e.outline_points)
            )),
        }
    }

    /// Format a brainstormed concept.
    pub fn format_concept(&self, concept: Option<&StoryConcept>) -> Result<String> {
        match (self.format, concept) {
            (OutputFormat::Json, _) => Ok(serde_json::to_string_pretty(&concept)?),
            (OutputFormat::Table, None) => Ok(self.warning("No concept this time. Try again.")),
            (OutputFormat::Table, Some(c)) => {
                let mut builder = Builder::default();
                builder.push_record(["Title", c.title.as_str()]);
                builder.push_record(["Synopsis", &c.synopsis]);
                builder.push_record(["Character", &c.character_name]);
                builder.push_record(["Role", &c.character_role]);
                builder.push_record(["Description", &c.character_desc]);
                builder.push_record(["Conflict", &c.character_conflict]);
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a chat reply with its sources.
    pub fn format_chat_reply(&self, reply: &ChatReply) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(reply)?);
        }
        if reply.degraded {
            return Ok(self.warning(&reply.text));
        }

        let mut lines = vec![reply.text.clone()];
        if !reply.sources.is_empty() {
            lines.push(String::new());
            lines.push(self.colorize("Sources:", "cyan"));
            for source in &reply.sources {
                lines.push(format!("  - {} <{}>", source.title, source.uri));
            }
        }
        Ok(lines.join("\n"))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// A fixed-width bar for a 0-100 tension score.
pub fn tension_bar(tension: u8) -> String {
    let filled = ((tension as usize + 5) / 10).min(TENSION_BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(TENSION_BAR_WIDTH - filled))
}
