use std::path::{Path, PathBuf};

/// What the desktop host was asked to open and where to write the result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl LaunchOptions {
    /// Output path, defaulting to `<stem>.edited.png` next to the input.
    pub fn output_for(&self, input: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(input))
    }
}

pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    input.with_file_name(format!("{stem}.edited.png"))
}

/// Parse `[INPUT] [--out PATH | --out=PATH]`. Unknown flags are ignored.
pub fn parse_launch_args(args: impl IntoIterator<Item = String>) -> LaunchOptions {
    let mut options = LaunchOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" | "-o" => {
                if let Some(next) = args.next() {
                    options.output = Some(PathBuf::from(next));
                }
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--out=") {
                    options.output = Some(PathBuf::from(path));
                } else if arg.starts_with('-') {
                    log::warn!("ignoring unknown argument {arg}");
                } else if options.input.is_none() {
                    options.input = Some(PathBuf::from(arg));
                }
            }
        }
    }
    options
}
