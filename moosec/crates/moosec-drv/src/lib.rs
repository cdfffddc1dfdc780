//! moosec-drv - Compiler Driver
//!
//! Reads `.moose` files, lexes them in parallel and reports tokens and
//! diagnostics in input order.
//!
//! ```no_run
//! use moosec_drv::{Config, Options, Session};
//!
//! let options = Options::from_config(vec!["main.moose".into()], &Config::default());
//! let mut session = Session::new(options);
//! let summary = session
//!     .run(&mut std::io::stdout(), &mut std::io::stderr())
//!     .unwrap();
//! assert!(!summary.is_failure(true));
//! ```

pub mod config;
pub mod error;
pub mod timings;

use std::io::Write;
use std::path::{Path, PathBuf};

use moosec_lex::{Lexer, Token};
use moosec_util::{Diagnostic, Handler, SourceFile};
use rayon::prelude::*;
use tracing::debug;

pub use config::{Config, EmitType, LexConfig};
pub use error::{DriverError, Result};
pub use timings::Timings;

/// Source file extension accepted by the driver.
pub const SOURCE_EXTENSION: &str = "moose";

/// Resolved options for one driver run.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Files to lex, in reporting order.
    pub inputs: Vec<PathBuf>,
    /// Output format.
    pub emit: EmitType,
    /// Print phase timings to the error stream.
    pub time: bool,
    /// Size of the lexing thread pool.
    pub jobs: usize,
    /// Count lexical errors as a failed run.
    pub fail_on_error: bool,
}

impl Options {
    /// Options for `inputs` taken from a configuration file.
    pub fn from_config(inputs: Vec<PathBuf>, config: &Config) -> Self {
        Self {
            inputs,
            emit: config.emit,
            time: config.time,
            jobs: config.lex.jobs.max(1) as usize,
            fail_on_error: config.lex.fail_on_error,
        }
    }
}

/// Outcome counts of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files that were read and lexed.
    pub files: usize,
    /// Inputs rejected for not being `.moose` files.
    pub skipped: usize,
    /// Files that could not be read or decoded.
    pub read_failures: usize,
    /// Lexical errors across all files.
    pub errors: usize,
    /// Tokens produced across all files.
    pub tokens: usize,
}

impl Summary {
    /// Whether the run should exit with failure.
    pub fn is_failure(&self, fail_on_error: bool) -> bool {
        self.read_failures > 0 || (fail_on_error && self.errors > 0)
    }
}

/// Tokens and diagnostics of one file.
#[derive(Debug)]
pub struct LexedFile {
    /// The file that was lexed.
    pub file: SourceFile,
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// Everything the lexer reported.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexedFile {
    /// Number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.level.is_error())
            .count()
    }
}

/// Lexes one loaded file with its own handler.
pub fn lex_file(file: SourceFile) -> LexedFile {
    let handler = Handler::new();
    let tokens = Lexer::from_source_file(&file, &handler).lex();
    LexedFile {
        file,
        tokens,
        diagnostics: handler.into_diagnostics(),
    }
}

/// Whether `path` names a Moose source file.
pub fn is_source_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

/// One driver run over a set of input files.
#[derive(Debug)]
pub struct Session {
    options: Options,
    timings: Timings,
}

impl Session {
    /// Creates a session for `options`.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            timings: Timings::new(),
        }
    }

    /// The options this session runs with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Phase timings of the last run.
    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Reads and lexes every input, writing tokens to `out` and
    /// diagnostics, read failures and timings to `err`.
    ///
    /// A file that fails to read is reported and skipped; the run goes on
    /// with the remaining inputs.
    ///
    /// # Errors
    ///
    /// Fails when the thread pool cannot start or writing output fails.
    pub fn run<O: Write, E: Write>(&mut self, out: &mut O, err: &mut E) -> Result<Summary> {
        let mut summary = Summary::default();
        self.timings = Timings::new();

        let mut sources = Vec::with_capacity(self.options.inputs.len());
        for path in &self.options.inputs {
            if is_source_path(path) {
                sources.push(path.clone());
            } else {
                writeln!(err, "invalid input: {}", path.display())?;
                summary.skipped += 1;
            }
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.jobs)
            .build()?;
        debug!(jobs = self.options.jobs, files = sources.len(), "starting run");

        self.timings.start("read");
        let loaded: Vec<Result<SourceFile>> = pool.install(|| {
            sources
                .par_iter()
                .map(|path| SourceFile::load(path).map_err(DriverError::from))
                .collect()
        });

        self.timings.start("lex");
        let lexed: Vec<Result<LexedFile>> = pool.install(|| {
            loaded
                .into_par_iter()
                .map(|file| file.map(lex_file))
                .collect()
        });

        self.timings.start("emit");
        let show_names = sources.len() > 1;
        for result in lexed {
            let lexed = match result {
                Ok(lexed) => lexed,
                Err(error) => {
                    writeln!(err, "error: {}", error)?;
                    summary.read_failures += 1;
                    continue;
                },
            };

            debug!(
                file = lexed.file.name(),
                tokens = lexed.tokens.len(),
                errors = lexed.error_count(),
                "lexed file"
            );
            summary.files += 1;
            summary.tokens += lexed.tokens.len();
            summary.errors += lexed.error_count();

            self.emit(&lexed, show_names, out)?;
            for diagnostic in &lexed.diagnostics {
                writeln!(err, "{}", diagnostic.render(&lexed.file))?;
            }
        }
        self.timings.end();

        if self.options.time {
            writeln!(err, "{}", self.timings)?;
        }
        debug!(
            files = summary.files,
            tokens = summary.tokens,
            errors = summary.errors,
            "lexing finished"
        );
        Ok(summary)
    }

    fn emit<O: Write>(&self, lexed: &LexedFile, show_name: bool, out: &mut O) -> Result<()> {
        match self.options.emit {
            EmitType::Tokens => {
                if show_name {
                    writeln!(out, "{}:", lexed.file.name())?;
                }
                for token in &lexed.tokens {
                    writeln!(out, "{}", token)?;
                }
            },
            EmitType::Json => {
                serde_json::to_writer(&mut *out, &lexed.tokens)?;
                writeln!(out)?;
            },
            EmitType::None => {},
        }
        Ok(())
    }
}
