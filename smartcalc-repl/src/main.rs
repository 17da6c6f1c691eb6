use ariadne::Source;
use rustyline::{error::ReadlineError, DefaultEditor};
use smartcalc_eval::calculate;
use std::io::{self, IsTerminal, Read};

/// Evaluates one line of input at `x = 0`, printing the value or the error report.
fn eval_line(line: &str) {
    match calculate(line, 0.0) {
        Ok(value) => println!("{}", value),
        Err(err) => {
            let _ = err.build_report("input").eprint(("input", Source::from(line)));
        },
    }
}

fn main() {
    if !io::stdin().is_terminal() {
        // read expressions from stdin, one per line
        let mut input = String::new();
        if io::stdin().read_to_string(&mut input).is_err() {
            return;
        }
        for line in input.lines() {
            if !line.trim().is_empty() {
                eval_line(line.trim());
            }
        }
        return;
    }

    // run the repl / interactive mode
    let Ok(mut rl) = DefaultEditor::new() else {
        return;
    };

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                eval_line(line);
            },
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => {
                eprintln!("{}", err);
                break;
            },
        }
    }
}
