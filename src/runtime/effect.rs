use crate::i18n::Language;
use crate::runtime::fetch::FetchRequest;
use crate::runtime::scheduler::SchedulerCommand;

/// Side effects requested by state transitions, carried out by the runtime.
#[derive(Debug, Clone)]
pub enum Effect {
    Schedule(SchedulerCommand),
    Fetch(FetchRequest),
    SaveLanguage(Language),
    RequestRender,
}
