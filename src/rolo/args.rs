use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for dev builds.
/// Format: "0.1.0" without git metadata, "0.1.0@abc1234 2024-01-15" with it
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "rolo",
    bin_name = "rolo",
    version = get_version(),
    about = "A pocket contact book with birthday reminders",
    long_about = None
)]
pub struct Cli {
    /// Directory for the contact snapshot and config (defaults to the user data dir)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}
