//! Line-oriented terminal front end.

use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::DashboardError;
use crate::model::NewChannel;
use crate::session::{Action, DashboardSession, RowHandle};
use crate::surface::Surface;
use crate::view::{ChannelRow, IndicatorColor, Locale, Notice, NoticePlacement, StatusView};

/// Stdin shared between the command loop and confirmation prompts.
pub type InputLines = Arc<Mutex<Lines<BufReader<Stdin>>>>;

pub fn stdin_lines() -> InputLines {
    Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()))
}

const HELP: &str = "\
commands:
  toggle                          pause or resume the relay
  add <source> <target> [kw,...]  add a channel pair
  delete <row>                    delete the pair shown in that row
  refresh                         re-fetch status and channels
  help                            show this text
  quit                            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Add(NewChannel),
    /// 1-based row number as printed in the table.
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Usage("help"));
        };
        let rest: Vec<&str> = words.collect();

        match head.to_ascii_lowercase().as_str() {
            "toggle" if rest.is_empty() => Ok(Command::Toggle),
            "add" => match rest.as_slice() {
                [source, target] => Ok(Command::Add(NewChannel::new(*source, *target))),
                [source, target, keywords] => Ok(Command::Add(
                    NewChannel::new(*source, *target).with_keywords(
                        keywords
                            .split(',')
                            .map(str::trim)
                            .filter(|kw| !kw.is_empty())
                            .map(str::to_string)
                            .collect(),
                    ),
                )),
                _ => Err(CommandError::Usage("add <source> <target> [kw,...]")),
            },
            "delete" | "del" | "rm" => match rest.as_slice() {
                [row] => row
                    .parse::<usize>()
                    .ok()
                    .filter(|row| *row > 0)
                    .map(Command::Delete)
                    .ok_or(CommandError::Usage("delete <row>")),
                _ => Err(CommandError::Usage("delete <row>")),
            },
            "refresh" if rest.is_empty() => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(head.to_string())),
        }
    }
}

/// Prints every render to stdout.
pub struct ConsoleSurface {
    locale: Locale,
    input: InputLines,
    generation: AtomicU64,
}

impl ConsoleSurface {
    pub fn new(locale: Locale, input: InputLines) -> Self {
        Self {
            locale,
            input,
            generation: AtomicU64::new(0),
        }
    }

    /// Generation of the table the operator is looking at.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    async fn next_line(&self) -> Result<Option<String>, DashboardError> {
        let mut input = self.input.lock().await;
        Ok(input.next_line().await?)
    }
}

#[async_trait]
impl Surface for ConsoleSurface {
    fn show_status(&self, view: &StatusView) {
        let dot = match view.indicator {
            IndicatorColor::Green => "\x1b[32m●\x1b[0m",
            IndicatorColor::Red => "\x1b[31m●\x1b[0m",
        };
        println!(
            "[{}] {dot} {} | {}: {} {}: {} | toggle: {}",
            Local::now().format("%H:%M:%S"),
            view.label,
            view.chart.labels[0],
            view.chart.series[0],
            view.chart.labels[1],
            view.chart.series[1],
            view.toggle_label,
        );
    }

    fn show_channels(&self, generation: u64, rows: &[ChannelRow]) {
        self.generation.store(generation, Ordering::Relaxed);
        println!("{}", format_table(rows));
    }

    fn show_notice(&self, notice: Notice) {
        let prefix = match notice.placement {
            NoticePlacement::Banner => "!",
            NoticePlacement::AddForm => "add:",
            NoticePlacement::ChannelTable => "channels:",
        };
        println!("{prefix} {}", notice.text);
    }

    fn clear_notice(&self, _placement: NoticePlacement) {}

    fn reset_add_form(&self) {}

    async fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = std::io::stdout().flush();
        match self.next_line().await {
            Ok(Some(answer)) => is_yes(&answer, self.locale),
            Ok(None) => false,
            Err(err) => {
                debug!(error = ?err, "Could not read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str, locale: Locale) -> bool {
    let answer = answer.trim().to_lowercase();
    match locale {
        Locale::Ru => matches!(answer.as_str(), "y" | "yes" | "д" | "да"),
        Locale::En => matches!(answer.as_str(), "y" | "yes"),
    }
}

fn format_table(rows: &[ChannelRow]) -> String {
    if rows.is_empty() {
        return "  (no channels)".to_string();
    }
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut line = format!(
                "  {:>3}. {} -> {} [{}]",
                idx + 1,
                row.source,
                row.target,
                row.status_label
            );
            if let Some(name) = &row.name {
                line.push_str(&format!(" ({name})"));
            }
            if !row.keywords.is_empty() {
                line.push_str(&format!(" {{{}}}", row.keywords));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read commands until `quit` or end of input.
pub async fn run(session: &DashboardSession, surface: &ConsoleSurface) -> Result<(), DashboardError> {
    println!("{HELP}");
    while let Some(line) = surface.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let action = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                println!("{HELP}");
                continue;
            }
            Ok(Command::Refresh) => {
                session.refresh_all().await;
                continue;
            }
            Ok(Command::Toggle) => Action::ToggleRunState,
            Ok(Command::Add(channel)) => Action::AddChannel(channel),
            Ok(Command::Delete(row)) => Action::DeleteRow(RowHandle {
                generation: surface.generation(),
                index: row - 1,
            }),
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let outcome = session.handle(action).await;
        debug!(?outcome, "Action handled");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_keywords() {
        assert!("add @news @mirror sale, promo".parse::<Command>().is_err());

        let command: Command = "add @news @mirror sale,,promo".parse().unwrap();
        assert_eq!(
            command,
            Command::Add(
                NewChannel::new("@news", "@mirror")
                    .with_keywords(vec!["sale".to_string(), "promo".to_string()])
            )
        );
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!("toggle".parse::<Command>().unwrap(), Command::Toggle);
        assert_eq!("Refresh".parse::<Command>().unwrap(), Command::Refresh);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("del 2".parse::<Command>().unwrap(), Command::Delete(2));
    }

    #[test]
    fn rejects_bad_rows_and_unknown_words() {
        assert_eq!(
            "delete 0".parse::<Command>(),
            Err(CommandError::Usage("delete <row>"))
        );
        assert_eq!(
            "delete two".parse::<Command>(),
            Err(CommandError::Usage("delete <row>"))
        );
        assert_eq!(
            "add onlyone".parse::<Command>(),
            Err(CommandError::Usage("add <source> <target> [kw,...]"))
        );
        assert_eq!(
            "launch".parse::<Command>(),
            Err(CommandError::Unknown("launch".to_string()))
        );
    }

    #[test]
    fn confirmation_accepts_localized_yes() {
        assert!(is_yes("да", Locale::Ru));
        assert!(is_yes(" Y ", Locale::En));
        assert!(!is_yes("да", Locale::En));
        assert!(!is_yes("", Locale::Ru));
    }

    #[test]
    fn table_lists_rows_with_numbers() {
        let mut rows = vec![ChannelRow {
            source: "a".to_string(),
            target: "b".to_string(),
            name: None,
            status_label: "Active",
            keywords: "sale".to_string(),
            delete_label: "Delete",
            delete_key: "a".to_string(),
        }];
        assert_eq!(format_table(&rows), "    1. a -> b [Active] {sale}");

        rows[0].name = Some("Deals".to_string());
        assert_eq!(format_table(&rows), "    1. a -> b [Active] (Deals) {sale}");
        assert_eq!(format_table(&[]), "  (no channels)");
    }
}
