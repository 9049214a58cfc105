//! Streamed storytelling demo set in a year of your choosing

use std::io::{BufRead, Write};

use crate::api::{ChatProvider, Message};
use crate::console::{Color, Presenter};
use crate::error::Result;
use crate::streaming;

/// Run the storyteller: build a persona from two inputs, then stream the tale.
pub async fn run<C, R, W>(client: &C, presenter: &mut Presenter<R, W>) -> Result<()>
where
    C: ChatProvider,
    R: BufRead,
    W: Write,
{
    presenter.log(
        "Pick a year and ask the resident storyteller anything about it.\n",
        Color::Input,
    )?;

    let year = presenter.input_with_default("Year", "1900", true)?;
    let question = presenter.input_with_default(
        "Question",
        "What does an ordinary day look like?",
        true,
    )?;

    let persona = format!(
        "You are a storyteller living in the year {year}. Answer with vivid, \
         concrete detail drawn from everyday life in that year."
    );
    presenter.log_input(&format!("\n{persona}\nQuestion: {question}"))?;

    presenter.log_thinking()?;
    presenter.set_response_stream_color();

    let stream = client
        .complete_stream(&[Message::system(persona), Message::user(question)])
        .await?;
    streaming::forward_stream(stream, presenter).await?;

    Ok(())
}
