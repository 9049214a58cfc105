//! One-shot event planning demo built on a blocking completion

use std::io::{BufRead, Write};

use crate::api::{ChatProvider, Message};
use crate::console::{Color, Presenter};
use crate::error::Result;

const TEMPLATE_INTRO: &str = "You are an event planner for corporate team building \
    events. Plan an event that achieves the given objective for a team of the \
    specified size.";

/// Run the event planner: two prompted inputs, one blocking completion.
pub async fn run<C, R, W>(client: &C, presenter: &mut Presenter<R, W>) -> Result<()>
where
    C: ChatProvider,
    R: BufRead,
    W: Write,
{
    presenter.log(&format!("Prompt template:\n{TEMPLATE_INTRO}\n"), Color::Default)?;

    let objective = presenter.input_with_default("Event", "Laser Tag", true)?;
    let team_size = presenter.input_with_default("Team size", "1 million", true)?;

    let prompt =
        format!("{TEMPLATE_INTRO}\nEvent objective: {objective}\nTeam size: {team_size}");
    presenter.log_input(&format!("\n\n{prompt}"))?;

    presenter.log_thinking()?;
    let reply = client.complete(&[Message::user(prompt)]).await?;
    presenter.log_response(&reply)?;

    Ok(())
}
