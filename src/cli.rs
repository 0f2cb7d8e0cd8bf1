use clap::Parser;
use std::path::PathBuf;

pub const HELP_KEYS: &str = "\
Key Bindings:
  Esc / q       : Quit
  Left          : Previous image
  Right         : Next image
  Click < / >   : Previous / next image
";

pub const DEFAULT_NAV_WIDTH: u32 = 40;

#[derive(Parser)]
#[command(
    name = "shuffleview",
    about = "Shuffle the images of a directory and browse them full screen",
    after_help = HELP_KEYS
)]
pub struct Cli {
    /// Full path or name of the directory to show. Read from stdin when omitted.
    pub query: Option<String>,

    /// Directory to start the name search from (repeatable). Default: the primary filesystem root.
    #[arg(short, long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Follow symbolic links to directories while searching (default: false)
    #[arg(long)]
    pub follow_links: bool,

    /// Width in pixels of each navigation strip (default: 40)
    #[arg(long, default_value_t = DEFAULT_NAV_WIDTH)]
    pub nav_width: u32,

    /// Seed for the shuffle, for a reproducible order
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// The configured search roots, or the platform's primary root when none were given.
    pub fn search_roots(&self) -> Vec<PathBuf> {
        if self.roots.is_empty() {
            vec![default_root()]
        } else {
            self.roots.clone()
        }
    }
}

#[cfg(windows)]
pub fn default_root() -> PathBuf {
    let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
    PathBuf::from(format!("{}\\", drive))
}

#[cfg(not(windows))]
pub fn default_root() -> PathBuf {
    PathBuf::from("/")
}
