//! Variable vocabulary and resolution
//!
//! Builds the closed set of snippet variables (`$TM_FILENAME`, `$CURRENT_YEAR`, ...)
//! available to a single generation run. Every value is derived from the
//! target directory, the workspace and an injected timestamp, so resolution
//! never reads the clock or the environment itself.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, FixedOffset};

/// The fixed vocabulary of substitution variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    /// Name of the generated entity directory
    TmFilename,
    /// `TmFilename` without its extension
    TmFilenameBase,
    /// Absolute path of the entity directory
    TmDirectory,
    /// Entity directory joined with its own name
    TmFilepath,
    /// `TmFilepath` relative to the workspace root
    RelativeFilepath,
    /// Workspace display name
    WorkspaceName,
    /// Workspace root path
    WorkspaceFolder,
    /// Four-digit year
    CurrentYear,
    /// Last two digits of the year
    CurrentYearShort,
    /// Zero-padded month number
    CurrentMonth,
    /// Full month name
    CurrentMonthName,
    /// Abbreviated month name
    CurrentMonthNameShort,
    /// Zero-padded day of month
    CurrentDate,
    /// Full weekday name
    CurrentDayName,
    /// Abbreviated weekday name
    CurrentDayNameShort,
    /// Zero-padded hour (24h)
    CurrentHour,
    /// Zero-padded minute
    CurrentMinute,
    /// Zero-padded second
    CurrentSecond,
    /// Seconds since the Unix epoch
    CurrentSecondsUnix,
    /// UTC offset as `+HHMM`
    CurrentTimezoneOffset,
}

impl Variable {
    /// Every variable, in vocabulary order
    pub const ALL: [Variable; 20] = [
        Variable::TmFilename,
        Variable::TmFilenameBase,
        Variable::TmDirectory,
        Variable::TmFilepath,
        Variable::RelativeFilepath,
        Variable::WorkspaceName,
        Variable::WorkspaceFolder,
        Variable::CurrentYear,
        Variable::CurrentYearShort,
        Variable::CurrentMonth,
        Variable::CurrentMonthName,
        Variable::CurrentMonthNameShort,
        Variable::CurrentDate,
        Variable::CurrentDayName,
        Variable::CurrentDayNameShort,
        Variable::CurrentHour,
        Variable::CurrentMinute,
        Variable::CurrentSecond,
        Variable::CurrentSecondsUnix,
        Variable::CurrentTimezoneOffset,
    ];

    /// Token name as written after the `$` sigil
    pub fn name(&self) -> &'static str {
        match self {
            Variable::TmFilename => "TM_FILENAME",
            Variable::TmFilenameBase => "TM_FILENAME_BASE",
            Variable::TmDirectory => "TM_DIRECTORY",
            Variable::TmFilepath => "TM_FILEPATH",
            Variable::RelativeFilepath => "RELATIVE_FILEPATH",
            Variable::WorkspaceName => "WORKSPACE_NAME",
            Variable::WorkspaceFolder => "WORKSPACE_FOLDER",
            Variable::CurrentYear => "CURRENT_YEAR",
            Variable::CurrentYearShort => "CURRENT_YEAR_SHORT",
            Variable::CurrentMonth => "CURRENT_MONTH",
            Variable::CurrentMonthName => "CURRENT_MONTH_NAME",
            Variable::CurrentMonthNameShort => "CURRENT_MONTH_NAME_SHORT",
            Variable::CurrentDate => "CURRENT_DATE",
            Variable::CurrentDayName => "CURRENT_DAY_NAME",
            Variable::CurrentDayNameShort => "CURRENT_DAY_NAME_SHORT",
            Variable::CurrentHour => "CURRENT_HOUR",
            Variable::CurrentMinute => "CURRENT_MINUTE",
            Variable::CurrentSecond => "CURRENT_SECOND",
            Variable::CurrentSecondsUnix => "CURRENT_SECONDS_UNIX",
            Variable::CurrentTimezoneOffset => "CURRENT_TIMEZONE_OFFSET",
        }
    }

    /// Parse a token name (without the sigil)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|var| var.name() == name)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.name())
    }
}

/// Resolved values for one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    values: HashMap<Variable, String>,
}

impl VariableSet {
    /// Create an empty variable set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of a variable
    pub fn insert(&mut self, variable: Variable, value: impl Into<String>) {
        self.values.insert(variable, value.into());
    }

    /// Value of a variable, if resolved
    pub fn get(&self, variable: Variable) -> Option<&str> {
        self.values.get(&variable).map(String::as_str)
    }

    /// Value for a raw token name; unknown names yield `None`
    pub fn lookup(&self, name: &str) -> Option<&str> {
        Variable::from_name(name).and_then(|var| self.get(var))
    }

    /// Number of resolved variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no variable has been resolved
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builds a [`VariableSet`] from the target directory, workspace and clock
pub struct VariableResolver;

impl VariableResolver {
    /// Resolve the full vocabulary
    ///
    /// # Arguments
    /// * `target_dir` - Directory of the entity being generated
    /// * `workspace_root` - Root folder of the workspace
    /// * `workspace_name` - Display name of the workspace
    /// * `now` - Timestamp shared by every file of the run
    pub fn resolve(
        target_dir: &Path,
        workspace_root: &Path,
        workspace_name: &str,
        now: &DateTime<FixedOffset>,
    ) -> VariableSet {
        let mut vars = VariableSet::new();

        let filename = target_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let filename_base = Path::new(&filename)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let filepath = target_dir.join(&filename);
        let relative = pathdiff::diff_paths(&filepath, workspace_root)
            .unwrap_or_else(|| filepath.clone());

        vars.insert(Variable::TmFilename, filename);
        vars.insert(Variable::TmFilenameBase, filename_base);
        vars.insert(Variable::TmDirectory, target_dir.to_string_lossy());
        vars.insert(Variable::TmFilepath, filepath.to_string_lossy());
        vars.insert(Variable::RelativeFilepath, relative.to_string_lossy());
        vars.insert(Variable::WorkspaceName, workspace_name);
        vars.insert(Variable::WorkspaceFolder, workspace_root.to_string_lossy());

        let year = now.format("%Y").to_string();
        let year_short = year[year.len().saturating_sub(2)..].to_string();

        vars.insert(Variable::CurrentYear, year);
        vars.insert(Variable::CurrentYearShort, year_short);
        vars.insert(Variable::CurrentMonth, now.format("%m").to_string());
        vars.insert(Variable::CurrentMonthName, now.format("%B").to_string());
        vars.insert(Variable::CurrentMonthNameShort, now.format("%b").to_string());
        vars.insert(Variable::CurrentDate, now.format("%d").to_string());
        vars.insert(Variable::CurrentDayName, now.format("%A").to_string());
        vars.insert(Variable::CurrentDayNameShort, now.format("%a").to_string());
        vars.insert(Variable::CurrentHour, now.format("%H").to_string());
        vars.insert(Variable::CurrentMinute, now.format("%M").to_string());
        vars.insert(Variable::CurrentSecond, now.format("%S").to_string());
        vars.insert(Variable::CurrentSecondsUnix, now.timestamp().to_string());
        vars.insert(Variable::CurrentTimezoneOffset, now.format("%z").to_string());

        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn fixed_now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 7, 8, 9)
            .unwrap()
    }

    fn resolve_button() -> VariableSet {
        VariableResolver::resolve(
            &PathBuf::from("/work/app/src/components/Button"),
            &PathBuf::from("/work/app"),
            "app",
            &fixed_now(),
        )
    }

    #[test]
    fn test_every_variable_is_resolved() {
        let vars = resolve_button();
        assert_eq!(vars.len(), Variable::ALL.len());
        for var in Variable::ALL {
            assert!(vars.get(var).is_some(), "{} missing", var);
        }
    }

    #[test]
    fn test_path_variables() {
        let vars = resolve_button();
        assert_eq!(vars.get(Variable::TmFilename), Some("Button"));
        assert_eq!(vars.get(Variable::TmFilenameBase), Some("Button"));
        assert_eq!(
            vars.get(Variable::TmDirectory),
            Some("/work/app/src/components/Button")
        );
        assert_eq!(
            vars.get(Variable::TmFilepath),
            Some("/work/app/src/components/Button/Button")
        );
        assert_eq!(
            vars.get(Variable::RelativeFilepath),
            Some("src/components/Button/Button")
        );
        assert_eq!(vars.get(Variable::WorkspaceName), Some("app"));
        assert_eq!(vars.get(Variable::WorkspaceFolder), Some("/work/app"));
    }

    #[test]
    fn test_filename_base_strips_extension() {
        let vars = VariableResolver::resolve(
            &PathBuf::from("/work/app/widget.module"),
            &PathBuf::from("/work/app"),
            "app",
            &fixed_now(),
        );
        assert_eq!(vars.get(Variable::TmFilename), Some("widget.module"));
        assert_eq!(vars.get(Variable::TmFilenameBase), Some("widget"));
    }

    #[test]
    fn test_time_variables() {
        let vars = resolve_button();
        assert_eq!(vars.get(Variable::CurrentYear), Some("2024"));
        assert_eq!(vars.get(Variable::CurrentYearShort), Some("24"));
        assert_eq!(vars.get(Variable::CurrentMonth), Some("03"));
        assert_eq!(vars.get(Variable::CurrentMonthName), Some("March"));
        assert_eq!(vars.get(Variable::CurrentMonthNameShort), Some("Mar"));
        assert_eq!(vars.get(Variable::CurrentDate), Some("05"));
        assert_eq!(vars.get(Variable::CurrentDayName), Some("Tuesday"));
        assert_eq!(vars.get(Variable::CurrentDayNameShort), Some("Tue"));
        assert_eq!(vars.get(Variable::CurrentHour), Some("07"));
        assert_eq!(vars.get(Variable::CurrentMinute), Some("08"));
        assert_eq!(vars.get(Variable::CurrentSecond), Some("09"));
        assert_eq!(vars.get(Variable::CurrentSecondsUnix), Some("1709615289"));
        assert_eq!(vars.get(Variable::CurrentTimezoneOffset), Some("+0200"));
    }

    #[test]
    fn test_lookup_by_name() {
        let vars = resolve_button();
        assert_eq!(vars.lookup("TM_FILENAME_BASE"), Some("Button"));
        assert_eq!(vars.lookup("NOT_A_VARIABLE"), None);
    }

    #[test]
    fn test_variable_names_round_trip() {
        for var in Variable::ALL {
            assert_eq!(Variable::from_name(var.name()), Some(var));
        }
        assert_eq!(Variable::TmFilename.to_string(), "$TM_FILENAME");
    }
}
