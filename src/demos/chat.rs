//! Interactive conversation demo with streamed replies

use std::io::{self, BufRead, Write};

use crate::api::{ChatProvider, Message};
use crate::console::{Color, Presenter};
use crate::error::Result;
use crate::streaming;

const SYSTEM_PROMPT: &str = "You are a helpful and friendly AI, happy to answer \
    questions about the world and the creatures, places, and things that inhabit it.";

/// Run the chat loop until the user types `exit` or closes the input.
///
/// The full transcript is resent on every turn, so the model sees the whole
/// conversation each time.
pub async fn run<C, R, W>(client: &C, presenter: &mut Presenter<R, W>) -> Result<()>
where
    C: ChatProvider,
    R: BufRead,
    W: Write,
{
    presenter.log(
        "Welcome to the interactive chat! Type 'exit' to end the conversation.",
        Color::Input,
    )?;

    let mut transcript = vec![Message::system(SYSTEM_PROMPT)];

    loop {
        let user_input = match presenter.input("\nYou: ") {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        if user_input.eq_ignore_ascii_case("exit") {
            return Ok(());
        }

        transcript.push(Message::user(user_input));

        presenter.log_thinking()?;
        presenter.set_response_stream_color();

        let stream = client.complete_stream(&transcript).await?;
        let reply = streaming::forward_stream(stream, presenter).await?;

        transcript.push(Message::assistant(reply));
    }
}
