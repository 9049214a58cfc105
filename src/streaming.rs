//! Relay between a provider's token stream and the console
//!
//! The counterpart of [`Presenter::log_streaming`]: demos hand a stream to
//! [`forward_stream`] and get the assembled response back, with every token
//! already printed in the presenter's active stream color.
//!
//! [`Presenter::log_streaming`]: crate::console::Presenter::log_streaming

use std::io::{BufRead, Write};

use futures_util::StreamExt;

use crate::api::TokenStream;
use crate::console::Presenter;
use crate::error::Result;

/// Drain a token stream into the presenter and return the full response text.
///
/// Tokens are forwarded unaltered and unbuffered, in arrival order. When the
/// stream finishes the default stream color is restored; a failing stream
/// also restores it before the error is handed back untouched.
pub async fn forward_stream<R, W>(
    mut stream: TokenStream,
    presenter: &mut Presenter<R, W>,
) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    let mut response = String::new();

    while let Some(chunk) = stream.next().await {
        let token = match chunk {
            Ok(token) => token,
            Err(e) => {
                presenter.set_default_stream_color();
                return Err(e);
            }
        };
        // SSE keep-alives surface as empty chunks; nothing to print.
        if token.is_empty() {
            continue;
        }
        presenter.log_streaming(&token)?;
        response.push_str(&token);
    }

    presenter.set_default_stream_color();
    Ok(response)
}
