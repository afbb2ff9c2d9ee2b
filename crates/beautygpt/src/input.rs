//! Interpretation of the lines typed by the user.

/// Questions offered to the user before the first message.
pub const QUICK_QUESTIONS: [&str; 4] = [
    "Ho la pelle grassa, cosa mi consigli?",
    "Cerco un siero vitamina C sotto i 30 euro",
    "Quale SPF per pelle acneica?",
    "Routine anti-age per principianti",
];

/// The command that leaves the program.
pub const QUIT_COMMAND: &str = "/quit";

/// What a typed line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Leave the program.
    Quit,
    /// Send a message to the assistant.
    Message(String),
}

/// Interprets a line typed by the user.
///
/// `fresh` tells whether the conversation has only the greeting, in which
/// case the numbers of the [`QUICK_QUESTIONS`] stand for the questions
/// themselves. Anything else is sent as typed; empty lines are left to the
/// session to drop.
pub fn interpret(line: &str, fresh: bool) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    let command = line.trim();
    if command == QUIT_COMMAND {
        return Input::Quit;
    }
    if fresh {
        if let Some(question) = quick_question(command) {
            return Input::Message(question.to_owned());
        }
    }
    Input::Message(line.to_owned())
}

fn quick_question(command: &str) -> Option<&'static str> {
    let index = command.parse::<usize>().ok()?;
    QUICK_QUESTIONS.get(index.checked_sub(1)?).copied()
}
