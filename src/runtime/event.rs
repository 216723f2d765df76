use crate::runtime::command::Command;
use crate::runtime::fetch::FetchResult;
use crate::terminal::TerminalEvent;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Terminal(TerminalEvent),
    Command(Command),
    Fetch(FetchResult),
}
