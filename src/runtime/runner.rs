use std::io;
use std::time::{Duration, Instant};

use crate::app::App;
use crate::config;
use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::runtime::event::AppEvent;
use crate::runtime::fetch::FetchExecutor;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::scheduler::Scheduler;
use crate::terminal::{Terminal, TerminalEvent};

const DEFAULT_POLL: Duration = Duration::from_millis(120);

pub struct Runtime {
    state: App,
    terminal: Terminal,
    scheduler: Scheduler,
    executor: FetchExecutor,
    key_bindings: KeyBindings,
}

impl Runtime {
    pub fn new(state: App, terminal: Terminal, executor: FetchExecutor) -> Self {
        Self {
            state,
            terminal,
            scheduler: Scheduler::new(),
            executor,
            key_bindings: KeyBindings::new(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            let effects = self.state.init_effects();
            self.apply_effects(effects)?;
            self.render()?;

            while !self.state.should_exit() {
                self.process_completions()?;
                self.process_scheduled_events()?;

                let now = Instant::now();
                let timeout = self.scheduler.poll_timeout(now, DEFAULT_POLL);
                if let Some(event) = self.terminal.poll_event(timeout)? {
                    self.dispatch_app_event(AppEvent::Terminal(event))?;
                }
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn process_completions(&mut self) -> io::Result<()> {
        for result in self.executor.drain_ready() {
            self.dispatch_app_event(AppEvent::Fetch(result))?;
        }
        Ok(())
    }

    fn process_scheduled_events(&mut self) -> io::Result<()> {
        for event in self.scheduler.drain_ready(Instant::now()) {
            self.dispatch_app_event(event)?;
        }
        Ok(())
    }

    fn dispatch_app_event(&mut self, event: AppEvent) -> io::Result<()> {
        match event {
            AppEvent::Terminal(TerminalEvent::Resize { width, height }) => {
                self.terminal.set_size(width, height);
                self.render()
            }
            AppEvent::Terminal(TerminalEvent::Key(key)) => {
                let command = self
                    .key_bindings
                    .resolve(key)
                    .unwrap_or(Command::InputKey(key));
                self.process_command(command)
            }
            AppEvent::Command(command) => self.process_command(command),
            AppEvent::Fetch(result) => {
                let effects = self.state.handle_fetch(result);
                self.apply_effects(effects)
            }
        }
    }

    fn process_command(&mut self, command: Command) -> io::Result<()> {
        let effects = self.state.reduce(command);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::Schedule(cmd) => {
                    self.scheduler.schedule(cmd, Instant::now());
                }
                Effect::Fetch(request) => {
                    self.executor.spawn(request);
                }
                Effect::SaveLanguage(language) => {
                    // Persistence failure only costs the next session's default.
                    let _ = config::save_language(language);
                }
                Effect::RequestRender => {
                    render_requested = true;
                }
            }
        }

        if render_requested {
            self.render()?;
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.state.render(self.terminal.size());
        self.terminal.render(&frame)
    }
}
