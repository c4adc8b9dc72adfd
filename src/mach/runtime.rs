use super::{Address, Listing, LoopFrame, Stack, Var};
use crate::display::DisplayPort;
use crate::error;
use crate::lang::{Error, Line, MAX_LINE_LEN};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Statements executed per slice by [`Runtime::process_line`].
const SLICE: usize = 5000;

/// What the host should do after [`Runtime::execute`] returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Back in direct mode, waiting for input.
    Stopped,
    /// The cycle budget ran out with a program still running.
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum State {
    Direct,
    Running,
}

/// ## Interpreter
///
/// Owns the program, the variables, and the loop stack. Input arrives
/// through [`enter`](Runtime::enter); [`execute`](Runtime::execute) then
/// does the work in bounded slices so a host can stay responsive while
/// a program runs.
///
/// ```
/// use retro::display::Transcript;
/// use retro::mach::{Event, Runtime};
///
/// let mut runtime = Runtime::default();
/// let mut port = Transcript::new();
/// runtime.enter(r#"10 PRINT "HI""#);
/// runtime.enter("RUN");
/// assert_eq!(runtime.execute(&mut port, 100), Event::Stopped);
/// assert_eq!(port.text, "HI\n");
/// ```

#[derive(Debug)]
pub struct Runtime {
    pub(super) listing: Listing,
    pub(super) vars: Var,
    pub(super) loops: Stack<LoopFrame>,
    pub(super) state: State,
    pub(super) lines: Vec<u16>,
    pub(super) pc: Address,
    direct: VecDeque<Line>,
    pending: Vec<Error>,
    interrupted: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            listing: Listing::default(),
            vars: Var::new(),
            loops: Stack::new("TOO MANY NESTED LOOPS"),
            state: State::Direct,
            lines: vec![],
            pc: 0,
            direct: VecDeque::new(),
            pending: vec![],
            interrupted: false,
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Accepts one line of input. Numbered lines are stored, or deleted
    /// when nothing follows the number. Anything else is queued for the
    /// next `execute`. Returns true when the line belongs in history.
    pub fn enter(&mut self, s: &str) -> bool {
        if s.len() > MAX_LINE_LEN {
            self.pending.push(error!(LineBufferOverflow));
            return false;
        }
        let line = match Line::new(s) {
            Ok(line) => line,
            Err(error) => {
                self.pending.push(error);
                return false;
            }
        };
        match line.number() {
            None if line.is_empty() => false,
            None => {
                if self.state == State::Running {
                    debug!("direct line stops the program");
                    self.stop();
                }
                self.direct.push_back(line);
                true
            }
            Some(number) if line.is_empty() => {
                if self.listing.remove(number).is_some() {
                    debug!(number, "line deleted");
                }
                true
            }
            Some(number) => {
                debug!(number, "line stored");
                self.listing.insert(line);
                true
            }
        }
    }

    /// Runs the queued direct statements in order, along with any program
    /// one of them starts. At most `cycles` program statements execute;
    /// direct lines after a RUN wait until that program stops.
    pub fn execute(&mut self, port: &mut dyn DisplayPort, cycles: usize) -> Event {
        for error in std::mem::take(&mut self.pending) {
            report(port, &error);
        }
        if std::mem::replace(&mut self.interrupted, false) && self.state == State::Running {
            let line_number = self.lines.get(self.pc).or_else(|| self.lines.last()).copied();
            report(port, &error!(Break, line_number));
            self.stop();
        }
        let mut budget = cycles;
        loop {
            while self.state == State::Running {
                if budget == 0 {
                    return Event::Running;
                }
                budget -= 1;
                self.step(port);
            }
            let line = match self.direct.pop_front() {
                Some(line) => line,
                None => return Event::Stopped,
            };
            trace!(text = line.text(), "direct");
            if let Err(error) = line.statement().and_then(|s| self.statement(port, &s)) {
                report(port, &error);
            }
        }
    }

    /// Enters a line and executes until the interpreter is back in direct mode.
    pub fn process_line(&mut self, s: &str, port: &mut dyn DisplayPort) {
        self.enter(s);
        while self.execute(port, SLICE) == Event::Running {}
    }

    /// Asks a running program to stop. The next `execute` reports BREAK.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn loop_depth(&self) -> usize {
        self.loops.len()
    }

    pub(super) fn stop(&mut self) {
        if self.state == State::Running {
            debug!("program stopped");
        }
        self.state = State::Direct;
        self.lines.clear();
        self.pc = 0;
    }

    /// One program line. The counter advances before the statement runs
    /// so that RUN and NEXT can overwrite it.
    fn step(&mut self, port: &mut dyn DisplayPort) {
        let number = match self.lines.get(self.pc) {
            Some(number) => *number,
            None => {
                self.stop();
                return;
            }
        };
        self.pc += 1;
        let line = match self.listing.get(number) {
            Some(line) => line.clone(),
            None => return,
        };
        trace!(number, text = line.text(), "step");
        if let Err(error) = line.statement().and_then(|s| self.statement(port, &s)) {
            let error = if error.is_direct() {
                error.in_line_number(Some(number))
            } else {
                error
            };
            debug!(%error, "runtime error");
            report(port, &error);
        }
    }
}

fn report(port: &mut dyn DisplayPort, error: &Error) {
    if error.is_evaluation() {
        port.add_str(&format!("?ERROR: {}\n", error));
    } else {
        port.add_str(&format!("?{}\n", error));
    }
}
