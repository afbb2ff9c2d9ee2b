//! The BeautyGPT terminal client.

#[macro_use]
extern crate tracing;

use std::io::{self, Write as _};
use std::process::ExitCode;
use std::time::Duration;

use beautygpt::core::conversation::Conversation;
use beautygpt::core::view::TranscriptView;
use beautygpt::input::{self, Input};
use beautygpt::render::{THINKING_MESSAGE, TerminalRenderer};
use beautygpt::{Action, Config, PendingReply, Reply};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Builder as RuntimeBuilder;
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::sleep;

const TICK: Duration = Duration::from_millis(100);

enum Event {
    Line(io::Result<Option<String>>),
    Reply(Reply),
}

fn main() -> ExitCode {
    let runtime = match RuntimeBuilder::new_current_thread().enable_all().build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("cannot start the runtime: {err}");
            return ExitCode::FAILURE;
        }
    };
    let code = runtime.block_on(async_main());
    // A pending stdin read can't be cancelled, don't wait for it.
    runtime.shutdown_background();
    code
}

async fn async_main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    debug!("using {}", config.http_config().chat_url());

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> io::Result<()> {
    let (change_tx, mut change_rx) = mpsc::unbounded_channel();
    let mut session = beautygpt::session_builder(&config)
        .on_change(move |conversation: &Conversation| {
            change_tx.send(conversation.clone()).ok();
        })
        .build();

    let mut renderer = TerminalRenderer::new(io::stdout());
    renderer.render_intro()?;
    renderer.render(&TranscriptView::new(session.conversation()))?;

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .map_err(io::Error::other)?
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let mut progress_bar: Option<ProgressBar> = None;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<PendingReply> = None;

    print_prompt()?;
    loop {
        let event = select! {
            line = lines.next_line() => Event::Line(line),
            reply = wait_reply(&mut pending) => Event::Reply(reply),
            _ = sleep(TICK), if pending.is_some() => {
                if let Some(progress_bar) = &progress_bar {
                    progress_bar.inc(1);
                }
                continue;
            }
        };

        match event {
            Event::Line(Ok(None)) => break,
            Event::Line(Err(err)) => {
                error!("error reading input: {err}");
                break;
            }
            Event::Line(Ok(Some(line))) => {
                let fresh = session.conversation().is_fresh();
                match input::interpret(&line, fresh) {
                    Input::Quit => break,
                    Input::Message(text) => {
                        if let Some(request) =
                            session.dispatch(Action::Submit(text))
                        {
                            pending = Some(request);
                        }
                    }
                }
            }
            Event::Reply(reply) => {
                pending = None;
                session.dispatch(Action::Complete(reply));
            }
        }

        // Finish the progress bar before printing anything else.
        while let Ok(conversation) = change_rx.try_recv() {
            if let Some(progress_bar) = progress_bar.take() {
                progress_bar.finish_and_clear();
            }
            renderer.render(&TranscriptView::new(&conversation))?;
        }

        if renderer.is_waiting() {
            progress_bar.get_or_insert_with(|| {
                let progress_bar = ProgressBar::new_spinner();
                progress_bar.set_style(progress_style.clone());
                progress_bar.set_message(THINKING_MESSAGE);
                progress_bar
            });
        } else {
            print_prompt()?;
        }
    }

    if let Some(progress_bar) = progress_bar {
        progress_bar.finish_and_clear();
    }
    Ok(())
}

/// Resolves when the outstanding request, if any, has a reply.
async fn wait_reply(pending: &mut Option<PendingReply>) -> Reply {
    match pending {
        Some(pending) => pending.await,
        None => std::future::pending().await,
    }
}

fn print_prompt() -> io::Result<()> {
    print!("\n{} ", ">".bright_cyan().bold());
    io::stdout().flush()
}
