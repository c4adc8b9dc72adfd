#![allow(dead_code)]
use retro::display::{DisplayPort, Transcript};
use retro::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_port(runtime, &mut Transcript::new(), 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    exec_port(runtime, &mut Transcript::new(), cycles)
}

/// Executes until stopped and returns the text written during this call.
pub fn exec_port(runtime: &mut Runtime, port: &mut Transcript, cycles: usize) -> String {
    let start = port.text.len();
    let mut prev_running = false;
    loop {
        match runtime.execute(port, cycles) {
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
    port.text[start..].to_string()
}

/// Enters each line in order.
pub fn enter_all(runtime: &mut Runtime, lines: &[&str]) {
    for line in lines {
        runtime.enter(line);
    }
}
