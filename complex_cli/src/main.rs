//! # Complex CLI
//!
//! Small driver that exercises every operation of `complex_core` and prints
//! the results. Optionally reads `<re> <im> <suffix>` triples from stdin.
//!
//! Usage: `complex_cli [config.json]`, logging via `RUST_LOG`.

mod config;

use std::io::{self, Write};

use complex_core::{Complex, ComplexResult, Extraction, TokenReader};

use config::DemoConfig;

struct Printer {
    precision: Option<usize>,
}

impl Printer {
    fn show(&self, label: &str, z: Complex) {
        match self.precision {
            Some(p) => println!("  {:<14} {:.*}", label, p, z),
            None => println!("  {:<14} {}", label, z),
        }
    }

    fn show_scalar(&self, label: &str, value: f64) {
        match self.precision {
            Some(p) => println!("  {:<14} {:.*}", label, p, value),
            None => println!("  {:<14} {}", label, value),
        }
    }
}

fn run_examples(config: &DemoConfig, out: &Printer) {
    let s = config.scalar;
    let a = Complex::new(3.0, 4.0);
    let b = Complex::new(1.0, -2.0);

    println!("Operands: a = {}, b = {}, s = {}", a, b, s);
    println!();

    println!("Binary:");
    out.show("a + b", a + b);
    out.show("a - b", a - b);
    out.show("a * b", a * b);
    out.show("a + s", a + s);
    out.show("s + a", s + a);
    out.show("a - s", a - s);
    out.show("s - a", s - a);
    out.show("a * s", a * s);
    out.show("s * a", s * a);
    out.show("a / s", a / s);
    println!();

    println!("Magnitude:");
    out.show_scalar("|a|", a.abs());
    out.show_scalar("f64::from(b)", f64::from(b));
    println!();

    println!("In place:");
    let mut c = a;
    c += b;
    out.show("c += b", c);
    c -= b;
    out.show("c -= b", c);
    c *= b;
    out.show("c *= b", c);
    c += s;
    out.show("c += s", c);
    c -= s;
    out.show("c -= s", c);
    c *= s;
    out.show("c *= s", c);
    c /= s;
    out.show("c /= s", c);
    c.assign_scalar(s);
    out.show("c = s", c);
    c.assign(b).add_in_place(a).mul_scalar_in_place(s);
    out.show("(b + a) * s", c);
}

fn echo_stdin(out: &Printer) -> ComplexResult<()> {
    println!();
    println!("Reading '<re> <im> <suffix>' values from stdin...");
    let stdin = io::stdin();
    let mut tokens = TokenReader::new(stdin.lock());
    let mut z = Complex::default();

    loop {
        match z.read_from(&mut tokens)? {
            Extraction::Complete => {
                out.show("read", z);
                out.show_scalar("|read|", z.abs());
            }
            Extraction::Incomplete { parts } => {
                log::debug!("stopped after {} part(s)", parts);
                if parts > 0 {
                    out.show("partial", z);
                }
                break;
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    println!("Complex CLI - complex number demo");
    println!("=================================");
    println!();

    let arg = std::env::args().nth(1);
    let config = match DemoConfig::resolve(arg.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(2);
        }
    };
    log::debug!("config = {:?}", config);

    let printer = Printer {
        precision: config.precision,
    };
    run_examples(&config, &printer);

    if config.read_stdin {
        if let Err(e) = echo_stdin(&printer) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let _ = io::stdout().flush();
}
