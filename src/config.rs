// src/config.rs
use crate::constants::{DEFAULT_MAX_RECENT, DEFAULT_PROMPT, DEFAULT_SEPARATOR, RC_FILE_NAME};
use crate::error::{AppError, Result};
use crate::output::{ClipboardTool, Clipboarder, DeliveryMode, TypeTool};
use crate::recent::StorePaths;
use crate::types::{RecentLimit, Separator};
use clap::Parser;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed command-line input.
///
/// Options may also be set in `rofigeneric.rc` files in the XDG config
/// directories; flags given on the command line override them.
#[derive(Parser, Debug)]
#[command(
    name = "rofi-generic",
    author,
    version,
    about = "Select, insert or copy text using rofi.",
    long_about = None,
    args_override_self = true
)]
pub struct CommandLineInput {
    /// Do not type the text directly, but copy it to the clipboard, insert it from there and then restore the clipboard's original value
    #[arg(short = 'p', long)]
    pub insert_with_clipboard: bool,

    /// Only copy the text to the clipboard but do not insert it
    #[arg(short = 'c', long)]
    pub copy_only: bool,

    /// Read candidate lines from files
    #[arg(short = 'f', long = "input-files", value_name = "FILE", num_args = 1.., action = clap::ArgAction::Set)]
    pub files: Vec<PathBuf>,

    /// Text separator between the inserted text and its description
    #[arg(short = 's', long = "seperator", visible_alias = "separator", default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Set the picker's prompt
    #[arg(short = 'r', long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// A string of arguments to give to rofi
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub rofi_args: String,

    /// Show at most this number of recently used entries (cannot be larger than 10)
    #[arg(long, default_value_t = DEFAULT_MAX_RECENT)]
    pub max_recent: usize,

    /// Choose the application to access the clipboard with (xsel, xclip, wl-copy, arboard)
    #[arg(long)]
    pub clipboarder: Option<String>,

    /// Choose the application to type with (xdotool, wtype)
    #[arg(long)]
    pub typer: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CommandLineInput {
    /// Parses the process arguments, preceded by the options found in the
    /// rc files.
    pub fn parse_with_rc_files() -> Result<Self> {
        let mut args: Vec<OsString> = std::env::args_os().collect();
        let program = if args.is_empty() {
            OsString::from("rofi-generic")
        } else {
            args.remove(0)
        };

        let mut merged = vec![program];
        for path in rc_file_candidates() {
            merged.extend(read_rc_file(&path)?.into_iter().map(OsString::from));
        }
        merged.extend(args);

        Ok(Self::parse_from(merged))
    }
}

/// Resolved configuration, validated and ready to drive one run.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    pub input_files: Vec<PathBuf>,
    pub separator: Separator,
    pub prompt: String,
    pub rofi_args: Vec<String>,
    pub max_recent: RecentLimit,
    pub mode: DeliveryMode,
    pub typer: TypeTool,
    pub clipboarder: ClipboardTool,
    pub store_paths: StorePaths,
}

impl PickerConfig {
    /// Resolves a complete configuration, placing the recent store under
    /// the user's XDG data directory.
    pub fn resolve(cli: CommandLineInput) -> Result<Self> {
        let data_home = dirs::data_dir().ok_or_else(|| {
            AppError::Configuration("could not determine the XDG data directory".to_string())
        })?;
        Self::resolve_in(cli, &data_home)
    }

    /// Resolves a configuration with the recent store under `data_home`.
    pub fn resolve_in(cli: CommandLineInput, data_home: &Path) -> Result<Self> {
        let separator = Separator::new(cli.separator)?;

        let rofi_args = shlex::split(&cli.rofi_args).ok_or_else(|| {
            AppError::Configuration(format!("unbalanced quoting in --rofi-args: {}", cli.rofi_args))
        })?;

        if RecentLimit::was_clamped(cli.max_recent) {
            log::warn!(
                "--max-recent {} is above the limit of {}; using {}",
                cli.max_recent,
                crate::constants::RECENT_CEILING,
                crate::constants::RECENT_CEILING
            );
        }

        let mode = DeliveryMode::from_flags(cli.copy_only, cli.insert_with_clipboard);
        let clipboarder = ClipboardTool::best_option(cli.clipboarder.as_deref())?;
        if mode == DeliveryMode::CopyPasteRestore && clipboarder.copy_blocks() {
            return Err(AppError::Configuration(format!(
                "--insert-with-clipboard needs xsel, xclip or wl-clipboard; {} cannot restore the clipboard",
                clipboarder.name()
            )));
        }

        Ok(PickerConfig {
            input_files: cli.files,
            separator,
            prompt: cli.prompt,
            rofi_args,
            max_recent: RecentLimit::new(cli.max_recent),
            mode,
            typer: TypeTool::best_option(cli.typer.as_deref())?,
            clipboarder,
            store_paths: StorePaths::under_data_home(data_home),
        })
    }
}

/// Every rc file location, lowest priority first.
///
/// System directories from `XDG_CONFIG_DIRS` come first (the first listed
/// directory wins among them), the user's config directory last.
fn rc_file_candidates() -> Vec<PathBuf> {
    let system_dirs = std::env::var_os("XDG_CONFIG_DIRS")
        .filter(|dirs| !dirs.is_empty())
        .unwrap_or_else(|| OsString::from("/etc/xdg"));

    let mut locations: Vec<PathBuf> = std::env::split_paths(&system_dirs).collect();
    locations.reverse();
    locations.extend(dirs::config_dir());

    locations
        .into_iter()
        .map(|dir| dir.join(RC_FILE_NAME))
        .collect()
}

/// Reads one rc file into command-line arguments; a missing file gives none.
fn read_rc_file(path: &Path) -> Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Reading options from {}", path.display());
            rc_arguments(&content).map_err(|e| match e {
                AppError::Configuration(msg) => {
                    AppError::Configuration(format!("{}: {}", path.display(), msg))
                }
                other => other,
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Converts rc file lines into command-line arguments.
///
/// Accepted lines are `key = value` or `key: value`, split at the first
/// `=` or `:`. A value in double quotes is taken literally, surrounding
/// whitespace included. Otherwise `true` turns a key
/// into a bare flag, `false` drops it, and `[a, b]` expands to several
/// values. Blank lines, `#`/`;` comments and `[section]` headers are skipped.
pub fn rc_arguments(content: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();

    for (number, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty()
            || line.starts_with('#')
            || line.starts_with(';')
            || (line.starts_with('[') && line.ends_with(']'))
        {
            continue;
        }

        let (key, value) = line
            .find(['=', ':'])
            .map(|at| (line[..at].trim(), line[at + 1..].trim()))
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "line {}: expected 'key = value', got '{}'",
                    number + 1,
                    line
                ))
            })?;

        if key.is_empty() {
            return Err(AppError::Configuration(format!(
                "line {}: missing option name",
                number + 1
            )));
        }

        let flag = format!("--{}", key.trim_start_matches('-'));
        if let Some(quoted) = unquote(value) {
            args.push(format!("{}={}", flag, quoted));
            continue;
        }

        match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" => args.push(flag),
            "false" | "no" | "off" => {}
            _ if value.starts_with('[') && value.ends_with(']') => {
                args.push(flag);
                args.extend(
                    value[1..value.len() - 1]
                        .split(',')
                        .map(|item| item.trim().trim_matches('"').to_string())
                        .filter(|item| !item.is_empty()),
                );
            }
            _ => {
                args.push(format!("{}={}", flag, value));
            }
        }
    }

    Ok(args)
}

/// Returns the inside of a `"..."` value, whitespace included.
fn unquote(value: &str) -> Option<&str> {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> CommandLineInput {
        CommandLineInput::parse_from(std::iter::once("rofi-generic").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = PickerConfig::resolve_in(
            cli(&["--typer", "xdotool", "--clipboarder", "xsel"]),
            Path::new("/data"),
        )
        .unwrap();

        assert_eq!(config.separator.as_str(), " ");
        assert_eq!(config.prompt, "😀 ");
        assert_eq!(config.max_recent.get(), 10);
        assert_eq!(config.mode, DeliveryMode::Type);
        assert!(config.rofi_args.is_empty());
        assert_eq!(
            config.store_paths.recent,
            PathBuf::from("/data/rofi-generic/recent")
        );
    }

    #[test]
    fn test_max_recent_is_clamped() {
        let config = PickerConfig::resolve_in(
            cli(&["--max-recent", "42", "--typer", "wtype", "--clipboarder", "arboard"]),
            Path::new("/data"),
        )
        .unwrap();
        assert_eq!(config.max_recent.get(), 10);
    }

    #[test]
    fn test_rofi_args_are_split_like_a_shell() {
        let config = PickerConfig::resolve_in(
            cli(&[
                "--rofi-args",
                "-theme 'my theme' -lines 5",
                "--typer",
                "xdotool",
                "--clipboarder",
                "xclip",
            ]),
            Path::new("/data"),
        )
        .unwrap();
        assert_eq!(config.rofi_args, vec!["-theme", "my theme", "-lines", "5"]);
    }

    #[test]
    fn test_empty_separator_is_rejected() {
        let err = PickerConfig::resolve_in(
            cli(&["--seperator", "", "--typer", "xdotool", "--clipboarder", "xsel"]),
            Path::new("/data"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_copy_paste_mode_rejects_arboard_on_linux() {
        let err = PickerConfig::resolve_in(
            cli(&["-p", "--typer", "xdotool", "--clipboarder", "arboard"]),
            Path::new("/data"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("arboard")));

        let config = PickerConfig::resolve_in(
            cli(&["-c", "--typer", "xdotool", "--clipboarder", "arboard"]),
            Path::new("/data"),
        )
        .unwrap();
        assert_eq!(config.mode, DeliveryMode::Copy);
    }

    #[test]
    fn test_unknown_typer_is_rejected() {
        let err = PickerConfig::resolve_in(cli(&["--typer", "ydotool"]), Path::new("/data"))
            .unwrap_err();
        assert!(err.to_string().contains("ydotool"));
    }

    #[test]
    fn test_later_flags_override_earlier_ones() {
        let input = cli(&["--prompt", "from rc", "--prompt", "from cli", "-f", "a", "-f", "b"]);
        assert_eq!(input.prompt, "from cli");
        assert_eq!(input.files, vec![PathBuf::from("b")]);
    }

    #[test]
    fn test_rc_arguments() {
        let content = "\
# emoji picker
[rofi-generic]
copy-only = true
insert-with-clipboard = false
prompt = >
max-recent: 5
input-files = [/a.txt, \"/b c.txt\"]
";
        assert_eq!(
            rc_arguments(content).unwrap(),
            vec![
                "--copy-only",
                "--prompt=>",
                "--max-recent=5",
                "--input-files",
                "/a.txt",
                "/b c.txt",
            ]
        );
    }

    #[test]
    fn test_rc_arguments_reject_bare_words() {
        let err = rc_arguments("copy-only\n").unwrap_err();
        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("line 1")));
    }

    #[test]
    fn test_rc_arguments_feed_the_parser() {
        let mut args = vec!["rofi-generic".to_string()];
        args.extend(rc_arguments("max-recent = 3\nseperator = ::\n").unwrap());
        args.push("--max-recent=4".to_string());

        let input = CommandLineInput::parse_from(args);
        assert_eq!(input.max_recent, 4);
        assert_eq!(input.separator, "::");
    }

    #[test]
    fn test_rc_arguments_split_at_first_delimiter() {
        assert_eq!(
            rc_arguments("seperator: =\nprompt = a:b\n").unwrap(),
            vec!["--seperator==", "--prompt=a:b"]
        );
    }

    #[test]
    fn test_rc_arguments_keep_quoted_whitespace() {
        let args = rc_arguments("seperator = \" | \"\nprompt = \"true\"\n").unwrap();
        assert_eq!(args, vec!["--seperator= | ", "--prompt=true"]);

        let mut argv = vec!["rofi-generic".to_string()];
        argv.extend(rc_arguments("seperator = \" \"\n").unwrap());
        let input = CommandLineInput::parse_from(argv);
        assert_eq!(input.separator, " ");
    }
}
