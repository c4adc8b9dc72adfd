use crate::display::{DisplayPort, Transcript};
use crate::mach::{Event, Runtime};

mod for_test;
mod runtime_test;

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut port = Transcript::new();
    let mut prev_running = false;
    loop {
        match runtime.execute(&mut port, cycles) {
            Event::Stopped => break,
            Event::Running => {
                if prev_running {
                    port.add_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
                prev_running = true;
            }
        }
    }
    port.text
}
