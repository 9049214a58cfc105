//! The demo scripts and the interactive selector
//!
//! Each demo wires the console presenter around calls to a chat provider.
//! None of them owns any model logic beyond assembling its prompt strings;
//! they exist to show the presenter's color scheme in action.

pub mod chat;
pub mod planner;
pub mod storyteller;

use std::io::{self, BufRead, Write};

use crate::api::ChatProvider;
use crate::console::{Color, Presenter};
use crate::error::Result;

const MENU: &str = "
Available demos:
    0. Chat - an interactive conversation with streamed replies
    1. Planner - a one-shot event plan built from your input
    2. Storyteller - a streamed story told from another year
";

/// Run the menu loop: list the demos, read a number, dispatch, repeat.
///
/// An out-of-range number logs an error line and shows the menu again. The
/// loop ends cleanly when the input stream closes.
pub async fn run_menu<C, R, W>(client: &C, presenter: &mut Presenter<R, W>) -> Result<()>
where
    C: ChatProvider,
    R: BufRead,
    W: Write,
{
    loop {
        presenter.log("\nWelcome to the LLM playground!", Color::Input)?;
        presenter.log(MENU, Color::Default)?;

        let selection = match presenter.input_int("Choose a demo (0-2): ") {
            Ok(selection) => selection,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        match selection {
            0 => chat::run(client, presenter).await?,
            1 => planner::run(client, presenter).await?,
            2 => storyteller::run(client, presenter).await?,
            _ => presenter.log(
                "Invalid selection. Please enter a number between 0 and 2.",
                Color::Error,
            )?,
        }
    }
}
