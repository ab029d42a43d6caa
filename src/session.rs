use std::fmt::{self, Write as _};

use thiserror::Error;
use tracing::debug;

use crate::{
    convert::{ConversionError, Unit, convert},
    error::EvaluationError,
    evaluate_expression_with,
    format::format_result,
    history::History,
    interpreter::{
        evaluator::function::core::FunctionRegistry,
        lexer::{Token, tokenize},
        symbols::{CONSTANTS, is_constant},
    },
    memory::{ANSWER_NAME, Memory, MemoryError, REGISTER_NAME},
    settings::{AngleMode, Precision, Settings, SettingsError},
    stats::{Statistic, StatsError},
};

const HELP: &str = "\
Enter an expression such as `2 + 3 * sin(30)` to evaluate it.
`name = expr` stores a variable; `ans` is the last result and `mem` the memory register.

Commands:
  :ms [expr]            store expr (or the last result) in memory
  :mr                   recall memory
  :mc                   clear memory
  :m+ :m- :m* :m/ expr  update memory
  :vars                 list variables
  :clear-vars           remove all variables
  :history              list previous calculations
  :clear-history        forget previous calculations
  :mode [deg|rad]       show or set the angle mode
  :precision [n]        show or set the displayed digits (0 to 15)
  :stats name [values]  mean, median, mode, std_dev, variance, sum,
                        product, min, max or range; defaults to the history
  :convert v from to    convert between temperature, angle and length units
  :functions            list functions
  :constants            list constants
  :help                 show this text
  :quit                 leave";

/// What a session line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A computed value, already formatted.
    Value(String),
    /// Informational output such as a listing or a confirmation.
    Message(String),
    /// Nothing to show; the line was blank or a comment.
    Silent,
    /// The user asked to leave.
    Quit,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(text) | Self::Message(text) => f.write_str(text),
            Self::Silent | Self::Quit => Ok(()),
        }
    }
}

/// Errors raised while executing a session line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// An expression failed. `offset` is the character offset of the
    /// expression within the line.
    #[error("{source}")]
    Evaluation {
        source: EvaluationError,
        offset: usize,
    },
    #[error(transparent)]
    Memory(#[from] MemoryError),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Unknown command ':{0}'. Type :help for a list of commands.")]
    UnknownCommand(String),
    /// A command was given the wrong arguments; carries its usage line.
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is a constant and cannot be assigned.")]
    ConstantAssignment(String),
    #[error("'{0}' is reserved and cannot be assigned.")]
    ReservedName(String),
    /// The left side of `=` is not a plain name, e.g. `f(x) = 1`.
    #[error("Cannot assign to '{0}'. Expected a variable name.")]
    InvalidTarget(String),
    #[error("There is no previous result yet.")]
    NoAnswer,
}

impl SessionError {
    /// Character offset within the executed line to point at, if known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Evaluation { source, offset } => match source.position() {
                Some(position) => Some(position + *offset),
                None => None,
            },
            _ => None,
        }
    }
}

/// An interactive calculator: settings, memory and history shared by the
/// lines executed through it.
///
/// # Example
/// ```
/// use calcx::session::{Reply, Session};
///
/// let mut session = Session::new();
/// assert_eq!(session.execute("x = 4").unwrap(), Reply::Message("x = 4".into()));
/// assert_eq!(session.execute("x ^ 2 + 1").unwrap(), Reply::Value("17".into()));
/// assert_eq!(session.execute("ans / 2").unwrap(), Reply::Value("8.5".into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    settings: Settings,
    memory:   Memory,
    history:  History,
}

impl Session {
    /// A session with default settings: degrees, six digits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self { settings,
               ..Self::default() }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Executes one line: a command starting with `:`, an assignment
    /// `name = expr`, or an expression.
    ///
    /// Blank lines and lines starting with `#` do nothing. A failed line
    /// leaves the session unchanged.
    ///
    /// # Errors
    /// Any [`SessionError`]; the error's [`SessionError::position`] is
    /// relative to `line`.
    pub fn execute(&mut self, line: &str) -> Result<Reply, SessionError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Reply::Silent);
        }
        if let Some(command) = trimmed.strip_prefix(':') {
            return self.command(line, command);
        }
        if let Some((target, expr)) = line.split_once('=') {
            return self.assign(line, target, expr);
        }

        let value = self.evaluate(line, line)?;
        self.memory.set_answer(value);
        self.history.push(trimmed, value);
        debug!(expression = trimmed, value, "recorded result");
        Ok(Reply::Value(self.format(value)))
    }

    fn assign(&mut self, line: &str, target: &str, expr: &str) -> Result<Reply, SessionError> {
        let name = assignment_target(target)?;
        if is_constant(&name) {
            return Err(SessionError::ConstantAssignment(name));
        }
        if name == REGISTER_NAME || name == ANSWER_NAME {
            return Err(SessionError::ReservedName(name));
        }

        let value = self.evaluate(line, expr)?;
        self.memory.store_variable(&name, value);
        Ok(Reply::Message(format!("{name} = {}", self.format(value))))
    }

    fn command(&mut self, line: &str, command: &str) -> Result<Reply, SessionError> {
        let (name, rest) = command.split_once(char::is_whitespace)
                                  .unwrap_or((command, ""));
        let argument = rest.trim();
        debug!(command = name, argument, "session command");

        match name {
            "ms" => {
                let value = if argument.is_empty() {
                    self.memory.answer().ok_or(SessionError::NoAnswer)?
                } else {
                    self.evaluate(line, rest)?
                };
                self.memory.store(value);
                Ok(self.register_reply())
            },
            "mr" => Ok(Reply::Value(self.format(self.memory.recall()))),
            "mc" => {
                self.memory.clear();
                Ok(Reply::Message("Memory cleared.".to_string()))
            },
            "m+" | "m-" | "m*" | "m/" => {
                if argument.is_empty() {
                    return Err(SessionError::Usage(":m+ | :m- | :m* | :m/ <expr>"));
                }
                let value = self.evaluate(line, rest)?;
                match name {
                    "m+" => self.memory.add(value),
                    "m-" => self.memory.subtract(value),
                    "m*" => self.memory.multiply(value),
                    _ => self.memory.divide(value)?,
                }
                Ok(self.register_reply())
            },
            "vars" => Ok(self.list_variables()),
            "clear-vars" => {
                self.memory.clear_variables();
                Ok(Reply::Message("Variables cleared.".to_string()))
            },
            "history" => Ok(self.list_history()),
            "clear-history" => {
                self.history.clear();
                Ok(Reply::Message("History cleared.".to_string()))
            },
            "mode" => {
                if !argument.is_empty() {
                    self.settings.angle_mode = argument.parse::<AngleMode>()?;
                }
                Ok(Reply::Message(format!("Angle mode: {}", self.settings.angle_mode)))
            },
            "precision" => {
                if !argument.is_empty() {
                    self.settings.precision = argument.parse::<Precision>()?;
                }
                Ok(Reply::Message(format!("Precision: {}", self.settings.precision)))
            },
            "stats" => self.statistics(line, argument),
            "convert" => self.conversion(line, argument),
            "functions" => Ok(list_functions()),
            "constants" => Ok(list_constants()),
            "help" => Ok(Reply::Message(HELP.to_string())),
            "quit" | "exit" | "q" => Ok(Reply::Quit),
            _ => Err(SessionError::UnknownCommand(name.to_string())),
        }
    }

    fn statistics(&self, line: &str, argument: &str) -> Result<Reply, SessionError> {
        const USAGE: &str = ":stats <mean|median|mode|std_dev|variance|sum|product|min|max|range> \
                             [values]";

        let mut words = split_values(argument);
        let stat = words.next()
                        .ok_or(SessionError::Usage(USAGE))?
                        .parse::<Statistic>()?;

        let data = words.map(|word| self.evaluate(line, word))
                        .collect::<Result<Vec<_>, _>>()?;
        let data = if data.is_empty() { self.history.results() } else { data };

        let value = stat.compute(&data)?;
        Ok(Reply::Value(self.format(value)))
    }

    fn conversion(&self, line: &str, argument: &str) -> Result<Reply, SessionError> {
        const USAGE: &str = ":convert <value> <from> <to>";

        let words = split_values(argument).collect::<Vec<_>>();
        let [value, from, to] = words[..] else {
            return Err(SessionError::Usage(USAGE));
        };
        let (from, to) = (from.parse::<Unit>()?, to.parse::<Unit>()?);
        let value = self.evaluate(line, value)?;

        let converted = convert(value, from, to)?;
        Ok(Reply::Value(format!("{} {to}", self.format(converted))))
    }

    /// Evaluates `part`, a slice of `line`, against the session's memory.
    fn evaluate(&self, line: &str, part: &str) -> Result<f64, SessionError> {
        evaluate_expression_with(part, &self.memory, self.settings.angle_mode).map_err(|source| {
            SessionError::Evaluation { source,
                                       offset: char_offset(line, part) }
        })
    }

    fn format(&self, value: f64) -> String {
        format_result(value, self.settings.precision)
    }

    fn register_reply(&self) -> Reply {
        Reply::Message(format!("M = {}", self.format(self.memory.recall())))
    }

    fn list_variables(&self) -> Reply {
        let variables = self.memory.variables();
        if variables.is_empty() {
            return Reply::Message("No variables stored.".to_string());
        }
        let lines = variables.into_iter()
                             .map(|(name, value)| format!("{name} = {}", self.format(value)))
                             .collect::<Vec<_>>();
        Reply::Message(lines.join("\n"))
    }

    fn list_history(&self) -> Reply {
        if self.history.is_empty() {
            return Reply::Message("History is empty.".to_string());
        }
        let mut out = String::new();
        for (i, entry) in self.history.entries().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(out, "{:>3}. {} = {}", i + 1, entry.expression, self.format(entry.result));
        }
        Reply::Message(out)
    }
}

fn list_functions() -> Reply {
    let registry = FunctionRegistry::standard();
    let lines = registry.names()
                        .into_iter()
                        .filter_map(|name| registry.lookup(name))
                        .map(|def| {
                            let arity = def.arity.to_string();
                            format!("{:<18} {arity:<12} {}", def.name, def.summary)
                        })
                        .collect::<Vec<_>>();
    Reply::Message(lines.join("\n"))
}

fn list_constants() -> Reply {
    let lines = CONSTANTS.iter()
                         .map(|(name, value)| format!("{name:<24} {value}"))
                         .collect::<Vec<_>>();
    Reply::Message(lines.join("\n"))
}

/// The variable name on the left of `=`, which must lex as a single
/// identifier.
fn assignment_target(target: &str) -> Result<String, SessionError> {
    let invalid = || SessionError::InvalidTarget(target.trim().to_string());
    let tokens = tokenize(target).map_err(|_| invalid())?;
    match tokens.as_slice() {
        [(Token::Identifier(name), _), (Token::End, _)] => Ok(name.clone()),
        _ => Err(invalid()),
    }
}

/// Splits command arguments on whitespace and commas.
fn split_values(argument: &str) -> impl Iterator<Item = &str> {
    argument.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|word| !word.is_empty())
}

/// Character offset of `part` within `line`. `part` must be a subslice of
/// `line`.
fn char_offset(line: &str, part: &str) -> usize {
    let byte = part.as_ptr().addr().saturating_sub(line.as_ptr().addr());
    line.get(..byte).map_or(0, |prefix| prefix.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EvalError, LexError};

    fn value(session: &mut Session, line: &str) -> String {
        match session.execute(line) {
            Ok(Reply::Value(text)) => text,
            other => panic!("expected a value for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn expressions_update_answer_and_history() {
        let mut session = Session::new();
        assert_eq!(value(&mut session, "2 + 3 * 4"), "14");
        assert_eq!(value(&mut session, "ans - 4"), "10");
        assert_eq!(session.history().results(), vec![14.0, 10.0]);
        assert_eq!(session.memory().answer(), Some(10.0));
    }

    #[test]
    fn failures_leave_state_alone() {
        let mut session = Session::new();
        value(&mut session, "1");
        assert!(session.execute("1 / 0").is_err());
        assert_eq!(session.memory().answer(), Some(1.0));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn assignment_rules() {
        let mut session = Session::new();
        assert_eq!(session.execute("rate = 0.5 * 4"), Ok(Reply::Message("rate = 2".into())));
        assert!(session.history().is_empty());
        assert_eq!(value(&mut session, "rate * 3"), "6");

        assert_eq!(session.execute("pi = 3"),
                   Err(SessionError::ConstantAssignment("pi".into())));
        assert_eq!(session.execute("ans = 3"), Err(SessionError::ReservedName("ans".into())));
        assert_eq!(session.execute("f(x) = 3"), Err(SessionError::InvalidTarget("f(x)".into())));
        assert_eq!(session.execute("= 3"), Err(SessionError::InvalidTarget(String::new())));
        assert_eq!(session.history().results(), vec![6.0]);
    }

    #[test]
    fn memory_commands() {
        let mut session = Session::new();
        assert_eq!(session.execute(":ms"), Err(SessionError::NoAnswer));
        assert_eq!(session.execute(":ms 10"), Ok(Reply::Message("M = 10".into())));
        session.execute(":m+ 5").unwrap();
        session.execute(":m* 2").unwrap();
        assert_eq!(session.execute(":m/ 0"),
                   Err(SessionError::Memory(MemoryError::DivisionByZero)));
        assert_eq!(session.execute(":mr"), Ok(Reply::Value("30".into())));
        assert_eq!(value(&mut session, "mem / 3"), "10");
        session.execute(":mc").unwrap();
        assert_eq!(session.memory().recall(), 0.0);
        assert_eq!(session.execute(":m-"), Err(SessionError::Usage(":m+ | :m- | :m* | :m/ <expr>")));
    }

    #[test]
    fn settings_commands() {
        let mut session = Session::new();
        assert_eq!(value(&mut session, "sin(90)"), "1");
        session.execute(":mode rad").unwrap();
        assert_eq!(session.settings().angle_mode, AngleMode::Radians);
        assert_eq!(value(&mut session, "cos(pi)"), "-1");

        session.execute(":precision 2").unwrap();
        assert_eq!(value(&mut session, "2 / 3"), "0.67");
        assert!(matches!(session.execute(":precision 99"),
                         Err(SessionError::Settings(SettingsError::PrecisionOutOfRange(99)))));
        assert!(session.execute(":mode gradians").is_err());
    }

    #[test]
    fn statistics_over_arguments_or_history() {
        let mut session = Session::new();
        assert_eq!(value(&mut session, ":stats mean 1, 2, 3, 4, 5"), "3");
        assert_eq!(value(&mut session, ":stats max -1 2^3 pi"), "8");

        session.execute(":clear-history").unwrap();
        assert_eq!(session.execute(":stats sum"),
                   Err(SessionError::Stats(StatsError::EmptyData)));
        value(&mut session, "2");
        value(&mut session, "4");
        assert_eq!(value(&mut session, ":stats median"), "3");
        assert!(matches!(session.execute(":stats avg 1"),
                         Err(SessionError::Stats(StatsError::UnknownStatistic(_)))));
    }

    #[test]
    fn conversions() {
        let mut session = Session::new();
        assert_eq!(value(&mut session, ":convert 100 c f"), "212 fahrenheit");
        assert_eq!(value(&mut session, ":convert 1 in cm"), "2.54 cm");
        assert_eq!(session.execute(":convert 1 m"),
                   Err(SessionError::Usage(":convert <value> <from> <to>")));
        assert!(matches!(session.execute(":convert 1 m kelvin"),
                         Err(SessionError::Conversion(ConversionError::Incompatible { .. }))));
    }

    #[test]
    fn listings() {
        let mut session = Session::new();
        assert_eq!(session.execute(":vars"), Ok(Reply::Message("No variables stored.".into())));
        session.execute("b = 2").unwrap();
        session.execute("a = 1").unwrap();
        assert_eq!(session.execute(":vars"), Ok(Reply::Message("a = 1\nb = 2".into())));
        session.execute(":clear-vars").unwrap();
        assert!(session.memory().variables().is_empty());

        value(&mut session, "1 + 1");
        assert_eq!(session.execute(":history"), Ok(Reply::Message("  1. 1 + 1 = 2".into())));

        let functions = session.execute(":functions").unwrap().to_string();
        assert!(functions.lines().any(|line| line.starts_with("factorial")));
        let constants = session.execute(":constants").unwrap().to_string();
        assert!(constants.contains("speed_of_light"));
    }

    #[test]
    fn error_positions_are_relative_to_the_line() {
        let mut session = Session::new();
        let err = session.execute("x = 1 + $").unwrap_err();
        assert_eq!(err.position(), Some(8));
        assert!(matches!(err,
                         SessionError::Evaluation { source: EvaluationError::Lex(LexError::UnexpectedChar('$', 5)),
                                                    offset: 3 }));

        let err = session.execute(":m+ ((2)").unwrap_err();
        assert_eq!(err.position(), Some(4));

        let err = session.execute("unknown + 1").unwrap_err();
        assert_eq!(err,
                   SessionError::Evaluation { source: EvaluationError::Eval(EvalError::UnknownIdentifier("unknown".into())),
                                              offset: 0 });
        assert_eq!(err.position(), None);
    }

    #[test]
    fn blank_comments_and_quit() {
        let mut session = Session::new();
        assert_eq!(session.execute("   "), Ok(Reply::Silent));
        assert_eq!(session.execute("# a note"), Ok(Reply::Silent));
        assert_eq!(session.execute(":quit"), Ok(Reply::Quit));
        assert!(matches!(session.execute(":bogus"), Err(SessionError::UnknownCommand(_))));
    }
}
