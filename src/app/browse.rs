use std::io::{BufRead, Write};

use crate::app::render::{render_categories, render_details, render_listing};
use crate::core::browser::{BrowseCommand, BrowserState};
use crate::core::catalog::Catalog;
use crate::utils::error::Result;

const HELP: &str = "\
Commands:
  category <id>       all, bollywood, hollywood, south, webseries
  search [text]       filter by title or year (empty clears)
  list                show the current listing
  open <n|imdb_id>    show details and download links
  close               close the details view
  quit
";

/// 互動瀏覽，逐行讀取指令直到 quit 或輸入結束
pub fn run_browser<R: BufRead, W: Write>(catalog: &Catalog, input: R, mut output: W) -> Result<()> {
    let mut state = BrowserState::new();

    write!(output, "{}", render_categories(state.filter().category))?;
    writeln!(output)?;
    write!(output, "{}", render_listing(&state.visible(catalog), state.filter()))?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let command = match BrowseCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                write!(output, "> ")?;
                output.flush()?;
                continue;
            }
        };

        tracing::debug!("Browse command: {:?}", command);

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => write!(output, "{}", HELP)?,
            BrowseCommand::Category(category) => {
                state.select_category(category);
                write!(output, "{}", render_categories(category))?;
                writeln!(output)?;
                write!(output, "{}", render_listing(&state.visible(catalog), state.filter()))?;
            }
            BrowseCommand::Search(query) => {
                state.set_query(query);
                write!(output, "{}", render_listing(&state.visible(catalog), state.filter()))?;
            }
            BrowseCommand::List => {
                write!(output, "{}", render_listing(&state.visible(catalog), state.filter()))?;
            }
            BrowseCommand::Open(target) => match state.open(catalog, &target) {
                Ok(details) => write!(output, "{}", render_details(details))?,
                Err(e) => writeln!(output, "{}", e.user_friendly_message())?,
            },
            BrowseCommand::Close => {
                if !state.close() {
                    writeln!(output, "Nothing to close")?;
                }
            }
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(())
}
