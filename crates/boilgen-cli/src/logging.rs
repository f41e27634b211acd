// Logging and verbosity control

use std::sync::atomic::{AtomicU8, Ordering};

use tracing::Level;

/// Global verbosity level
static VERBOSITY: AtomicU8 = AtomicU8::new(1);

/// Verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Quiet mode - errors only
    Quiet = 0,
    /// Normal mode - standard output
    Normal = 1,
    /// Verbose mode - detailed output
    Verbose = 2,
}

impl VerbosityLevel {
    /// Get the current verbosity level
    pub fn current() -> Self {
        match VERBOSITY.load(Ordering::Relaxed) {
            0 => VerbosityLevel::Quiet,
            1 => VerbosityLevel::Normal,
            _ => VerbosityLevel::Verbose,
        }
    }

    /// Set the verbosity level
    pub fn set(level: Self) {
        VERBOSITY.store(level as u8, Ordering::Relaxed);
    }

    /// Check if we should output at this level
    pub fn should_output(&self) -> bool {
        self <= &Self::current()
    }

    /// Maximum tracing level emitted for this verbosity
    pub fn tracing_level(&self) -> Level {
        match self {
            VerbosityLevel::Quiet => Level::ERROR,
            VerbosityLevel::Normal => Level::WARN,
            VerbosityLevel::Verbose => Level::DEBUG,
        }
    }
}

/// Resolve the verbosity from CLI flags; `quiet` wins over `verbose`
pub fn verbosity_from_flags(verbose: bool, quiet: bool) -> VerbosityLevel {
    if quiet {
        VerbosityLevel::Quiet
    } else if verbose {
        VerbosityLevel::Verbose
    } else {
        VerbosityLevel::Normal
    }
}

/// Initialize logging based on CLI flags
///
/// Installs a stderr fmt subscriber the first time it is called; later calls
/// only update the verbosity level.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = verbosity_from_flags(verbose, quiet);
    VerbosityLevel::set(level);

    let _ = tracing_subscriber::fmt()
        .with_max_level(level.tracing_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
