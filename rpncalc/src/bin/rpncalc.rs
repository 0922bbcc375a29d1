use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Evaluate infix or postfix (RPN) arithmetic, or convert infix to postfix.
/// Runs an interactive prompt when no expression is given.
#[derive(Parser, Debug)]
#[command(name = "rpncalc", version, about, long_about = None)]
struct Args {
    /// How input lines are interpreted.
    #[arg(short, long, value_enum, default_value = "infix")]
    mode: Mode,

    /// History file for the interactive prompt [default: ~/.rpncalc_history]
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,

    /// Expression to evaluate once, eg: rpncalc -m rpn 5 -3 +
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expr: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// evaluate infix expressions: (5 + 3) * 2
    Infix,
    /// evaluate postfix expressions: 5 3 + 2 *
    Rpn,
    /// translate infix to postfix without evaluating
    Convert,
}

mod repl {
    use super::Mode;
    use log::warn;
    use rpncalc::{evaluate_rpn, CalcError, ShuntingParser};
    use rustyline::error::ReadlineError;
    use std::path::Path;

    const EXAMPLES: &str = "\
postfix (:rpn), operands before their operator
  5 3 +                            => 8
  10 2 /                           => 5
  5 3 + 2 *                        => 16
  15 7 1 1 + - / 3 * 2 1 1 + + -   => 5
  2 3 ^                            => 8
infix (:infix), operator between operands
  5 + 3                            => 8
  (5 + 3) * 2                      => 16
  10 / 2 + 3                       => 8
  2 ^ 3 ^ 2                        => 512
  (2 + 3) * (4 - 1)                => 15
operators: + - * / ^, parens and decimals like 2.5 or -.5";

    const HELP: &str = "\
:infix     evaluate infix expressions
:rpn       evaluate postfix expressions
:convert   translate infix to postfix
:examples  show sample expressions
:help      show this message
:quit      leave";

    pub fn process(mode: Mode, input: &str) -> Result<String, CalcError> {
        match mode {
            Mode::Infix => {
                let rpn = ShuntingParser::parse_str(input)?;
                let result = evaluate_rpn(&rpn.to_string())?;
                Ok(format!("{} = {}", rpn.to_infix()?, result))
            }
            Mode::Rpn => Ok(evaluate_rpn(input)?.to_string()),
            Mode::Convert => Ok(ShuntingParser::parse_str(input)?.to_string()),
        }
    }

    fn prompt(mode: Mode) -> &'static str {
        match mode {
            Mode::Infix => ">> ",
            Mode::Rpn => "rpn> ",
            Mode::Convert => "cvt> ",
        }
    }

    pub fn run(mut mode: Mode, history: Option<&Path>) -> anyhow::Result<()> {
        let mut rl = rustyline::DefaultEditor::new()?;
        if let Some(path) = history {
            if let Err(e) = rl.load_history(path) {
                warn!("No history loaded from {}: {}", path.display(), e);
            }
        }
        loop {
            let input = match rl.readline(prompt(mode)) {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
                Ok(line) => line,
            };
            let line = input.trim();
            if line.is_empty() {
                continue;
            }
            let _ = rl.add_history_entry(line);
            match line {
                ":infix" => mode = Mode::Infix,
                ":rpn" => mode = Mode::Rpn,
                ":convert" => mode = Mode::Convert,
                ":examples" => println!("{}", EXAMPLES),
                ":help" => println!("{}", HELP),
                ":quit" | ":q" => break,
                _ => match process(mode, line) {
                    Ok(out) => println!("{}", out),
                    Err(e) => println!("Error: {}", e),
                },
            }
        }
        if let Some(path) = history {
            if let Err(e) = rl.save_history(path) {
                warn!("Couldn't save history to {}: {}", path.display(), e);
            }
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.expr.is_empty() {
        let input = args.expr.join(" ");
        match repl::process(args.mode, &input) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let history = args
        .history
        .or_else(|| dirs::home_dir().map(|h| h.join(".rpncalc_history")));
    repl::run(args.mode, history.as_deref())
}
