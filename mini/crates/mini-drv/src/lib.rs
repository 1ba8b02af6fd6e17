//! mini-drv - Command-line driver
//!
//! Loads one source file, tokenizes it and prints the kind of every token,
//! one per line, in the order the lexer produced them.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mini_lex::{tokenize, Token};
use mini_util::{SourceResult, SourceText};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a log filter, e.g. `MINI_LOG=mini_lex=trace`.
pub const LOG_ENV: &str = "MINI_LOG";

/// Print the token kinds of a mini source file
#[derive(Parser, Debug, Clone)]
#[command(name = "mini")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the token kinds of a mini source file", long_about = None)]
pub struct Config {
    /// Source file to tokenize
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long, env = "MINI_VERBOSE")]
    pub verbose: bool,

    /// Disable color in log output
    #[arg(long, env = "MINI_NO_COLOR")]
    pub no_color: bool,
}

/// A loaded source, ready to be tokenized.
pub struct Session {
    /// Command-line configuration the session was started with.
    pub config: Config,
    /// The loaded source file.
    pub source: SourceText,
}

impl Session {
    /// Loads the file named by `config`.
    pub fn new(config: Config) -> SourceResult<Self> {
        let source = SourceText::load(&config.path)?;
        Ok(Self { config, source })
    }

    /// Tokenizes the loaded source.
    pub fn tokens(&self) -> Vec<Token> {
        tokenize(&self.source)
    }

    /// Writes the kind of every token to `out`, one per line.
    pub fn emit_tokens<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        let tokens = self.tokens();
        for token in &tokens {
            writeln!(out, "{}", token.kind)?;
        }
        Ok(tokens.len())
    }
}

/// Writes the session's token kinds to `out` through a buffer and flushes it.
///
/// Write failures keep their I/O cause beneath the context message.
pub fn write_tokens<W: Write>(session: &Session, out: W) -> Result<usize> {
    let mut out = BufWriter::new(out);
    let count = session
        .emit_tokens(&mut out)
        .context("failed to write tokens")?;
    out.flush().context("failed to write tokens")?;
    Ok(count)
}

/// Set up the tracing subscriber.
///
/// Logs go to stderr so stdout carries nothing but token kinds. `MINI_LOG`
/// takes precedence over `verbose`.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Entry point shared by the `mini` binary.
pub fn run() -> Result<()> {
    let config = Config::parse();
    init_logging(config.verbose, config.no_color)?;
    debug!(path = %config.path.display(), "starting");

    let session = Session::new(config)?;

    let count = write_tokens(&session, io::stdout().lock())?;

    info!(file = session.source.name(), tokens = count, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(content: &str) -> Session {
        Session {
            config: Config::try_parse_from(["mini", "inline.mini"]).unwrap(),
            source: SourceText::new("inline.mini", content),
        }
    }

    fn emitted(content: &str) -> String {
        let mut out = Vec::new();
        session(content).emit_tokens(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_emit_one_kind_per_line() {
        assert_eq!(
            emitted("foo(bar baz)"),
            "IDENTIFIER\nOPEN\nIDENTIFIER\nWHITESPACE\nIDENTIFIER\nCLOSE\n"
        );
    }

    #[test]
    fn test_emit_empty_source() {
        assert_eq!(emitted(""), "");
    }

    #[test]
    fn test_emit_returns_count() {
        let mut out = Vec::new();
        let count = session("a+b").emit_tokens(&mut out).unwrap();
        assert_eq!(count, 2);
    }

    /// A writer whose every write fails.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_write_tokens_counts() {
        let mut out = Vec::new();
        let count = write_tokens(&session("(a b)"), &mut out).unwrap();
        assert_eq!(count, 5);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "OPEN\nIDENTIFIER\nWHITESPACE\nIDENTIFIER\nCLOSE\n"
        );
    }

    #[test]
    fn test_write_failure_keeps_cause() {
        let err = write_tokens(&session("(a b)"), BrokenPipe).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("failed to write tokens"), "{message}");
        assert!(message.contains("pipe closed"), "{message}");
    }

    #[test]
    fn test_config_positional_path() {
        let config = Config::try_parse_from(["mini", "src/main.mini"]).unwrap();
        assert_eq!(config.path, PathBuf::from("src/main.mini"));
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_config_verbose_flag() {
        let config = Config::try_parse_from(["mini", "-v", "x.mini"]).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_config_requires_path() {
        assert!(Config::try_parse_from(["mini"]).is_err());
    }

    #[test]
    fn test_session_missing_file() {
        let dir = std::env::temp_dir().join("mini-drv-no-such-dir");
        let config = Config::try_parse_from([
            "mini".into(),
            dir.join("missing.mini").into_os_string(),
        ])
        .unwrap();

        let err = Session::new(config).err().expect("load should fail");
        let message = format!("{:#}", anyhow::Error::from(err));
        assert!(message.starts_with("can't read "), "{message}");
        assert!(message.contains("missing.mini: "), "{message}");
    }
}
