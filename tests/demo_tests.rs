//! End-to-end demo runs over scripted input and a scripted provider

use std::io::Cursor;
use std::sync::Mutex;

use futures_util::stream;
use llm_playground::api::{ChatProvider, Message, TokenStream};
use llm_playground::console::Presenter;
use llm_playground::demos;
use llm_playground::error::Result;

/// Provider that replays canned reply chunks and records what it was asked.
struct ScriptedProvider {
    reply_chunks: Vec<&'static str>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedProvider {
    fn new(reply_chunks: Vec<&'static str>) -> Self {
        Self {
            reply_chunks,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, messages: &[Message]) {
        self.requests.lock().unwrap().push(messages.to_vec());
    }

    fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }
}

impl ChatProvider for ScriptedProvider {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        self.record(messages);
        Ok(self.reply_chunks.concat())
    }

    async fn complete_stream(&self, messages: &[Message]) -> Result<TokenStream> {
        self.record(messages);
        let chunks: Vec<Result<String>> = self
            .reply_chunks
            .iter()
            .map(|chunk| Ok((*chunk).to_string()))
            .collect();
        Ok(Box::pin(stream::iter(chunks)))
    }
}

/// Presenter reading from a canned script and writing to a byte buffer
fn scripted_presenter(input: &str) -> Presenter<Cursor<Vec<u8>>, Vec<u8>> {
    Presenter::with_io(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[tokio::test]
async fn chat_demo_streams_the_reply_and_keeps_a_transcript() {
    let provider = ScriptedProvider::new(vec!["Hello", " there!"]);
    let mut presenter = scripted_presenter("hi\nexit\n");

    demos::chat::run(&provider, &mut presenter).await.unwrap();

    let output = String::from_utf8(presenter.into_writer()).unwrap();
    assert!(output.contains("Welcome to the interactive chat!"));
    assert!(output.contains("\x1b[96m\nYou: \x1b[0m"));
    assert!(output.contains("\x1b[95mThinking...\x1b[0m"));
    assert!(output.contains("\x1b[92mHello\x1b[92m there!"));

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    // the standing system prompt plus the user's turn
    assert_eq!(requests[0].len(), 2);
    assert_eq!(requests[0][1].content, "hi");
}

#[tokio::test]
async fn chat_demo_resends_the_whole_transcript_each_turn() {
    let provider = ScriptedProvider::new(vec!["ok"]);
    let mut presenter = scripted_presenter("first\nsecond\nexit\n");

    demos::chat::run(&provider, &mut presenter).await.unwrap();

    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].len(), 4);
    assert_eq!(requests[1][1].content, "first");
    assert_eq!(requests[1][2].content, "ok");
    assert_eq!(requests[1][3].content, "second");
}

#[tokio::test]
async fn chat_demo_ends_cleanly_when_input_closes() {
    let provider = ScriptedProvider::new(vec!["fine"]);
    let mut presenter = scripted_presenter("hello\n");

    demos::chat::run(&provider, &mut presenter).await.unwrap();

    assert_eq!(provider.requests().len(), 1);
}

#[tokio::test]
async fn planner_demo_uses_defaults_on_empty_input() {
    let provider = ScriptedProvider::new(vec!["A great plan."]);
    let mut presenter = scripted_presenter("\n\n");

    demos::planner::run(&provider, &mut presenter).await.unwrap();

    let output = String::from_utf8(presenter.into_writer()).unwrap();
    assert!(output.contains("Event (default - Laser Tag): "));
    assert!(output.contains("Team size (default - 1 million): "));
    assert!(output.contains("\x1b[92mRESPONSE: A great plan.\x1b[0m\n"));

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    let prompt = &requests[0][0].content;
    assert!(prompt.contains("Event objective: Laser Tag"));
    assert!(prompt.contains("Team size: 1 million"));
}

#[tokio::test]
async fn planner_demo_echoes_the_assembled_prompt() {
    let provider = ScriptedProvider::new(vec!["Done."]);
    let mut presenter = scripted_presenter("Scavenger Hunt\n12\n");

    demos::planner::run(&provider, &mut presenter).await.unwrap();

    let output = String::from_utf8(presenter.into_writer()).unwrap();
    assert!(output.contains("INPUT: \n\n"));
    assert!(output.contains("Event objective: Scavenger Hunt"));
    assert!(output.contains("Team size: 12"));
}

#[tokio::test]
async fn storyteller_demo_builds_the_persona_and_streams() {
    let provider = ScriptedProvider::new(vec!["Boats.", " Many boats."]);
    let mut presenter = scripted_presenter("1850\nWhat is for dinner?\n");

    demos::storyteller::run(&provider, &mut presenter)
        .await
        .unwrap();

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].len(), 2);
    assert!(requests[0][0].content.contains("living in the year 1850"));
    assert_eq!(requests[0][1].content, "What is for dinner?");

    let output = String::from_utf8(presenter.into_writer()).unwrap();
    assert!(output.contains("\x1b[92mBoats.\x1b[92m Many boats."));
}

#[tokio::test]
async fn menu_rejects_out_of_range_selections() {
    let provider = ScriptedProvider::new(vec![]);
    let mut presenter = scripted_presenter("9\n");

    demos::run_menu(&provider, &mut presenter).await.unwrap();

    let output = String::from_utf8(presenter.into_writer()).unwrap();
    assert!(output.contains("Invalid selection. Please enter a number between 0 and 2."));
    // shown once before the bad pick and once after
    assert_eq!(output.matches("Welcome to the LLM playground!").count(), 2);
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn menu_reprompts_on_non_numeric_input() {
    let provider = ScriptedProvider::new(vec![]);
    let mut presenter = scripted_presenter("chat\n");

    demos::run_menu(&provider, &mut presenter).await.unwrap();

    let output = String::from_utf8(presenter.into_writer()).unwrap();
    assert!(output.contains("Invalid input! Please enter an integer."));
}

#[tokio::test]
async fn menu_dispatches_to_a_demo_and_returns_to_the_menu() {
    let provider = ScriptedProvider::new(vec!["Plan: laser tag at noon."]);
    let mut presenter = scripted_presenter("1\n\n\n");

    demos::run_menu(&provider, &mut presenter).await.unwrap();

    let output = String::from_utf8(presenter.into_writer()).unwrap();
    assert!(output.contains("\x1b[92mRESPONSE: Plan: laser tag at noon.\x1b[0m\n"));
    assert_eq!(output.matches("Welcome to the LLM playground!").count(), 2);
    assert_eq!(provider.requests().len(), 1);
}
