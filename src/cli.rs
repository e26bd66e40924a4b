use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gitstrap",
    about = "Clone a repository with git's stored-credential helper enabled",
    version = env!("GIT_DESCRIBE"),
    after_help = "Set GIT_ASKPASS=gitstrap-askpw before running so git can answer its own prompts."
)]
pub struct Cli {
    /// The repository URL to clone
    pub repository: String,

    /// The directory to clone into
    pub directory: PathBuf,

    /// Enable verbose output
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Parser)]
#[command(
    name = "gitstrap-askpw",
    about = "Answer git credential prompts from pre-configured values",
    version = env!("GIT_DESCRIBE")
)]
pub struct AskpwCli {
    /// Prompt text passed by git (unused; accepted for askpass compatibility)
    pub prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_arguments() {
        let cli = Cli::parse_from(["gitstrap", "https://example.invalid/repo.git", "/tmp/out"]);
        assert_eq!(cli.repository, "https://example.invalid/repo.git");
        assert_eq!(cli.directory, PathBuf::from("/tmp/out"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_verbose_flag() {
        let cli = Cli::parse_from(["gitstrap", "-v", "url", "dir"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_rejects_missing_arguments() {
        assert!(Cli::try_parse_from(["gitstrap"]).is_err());
        assert!(Cli::try_parse_from(["gitstrap", "only-a-url"]).is_err());
    }

    #[test]
    fn test_askpw_prompt_argument_is_optional() {
        let cli = AskpwCli::parse_from(["gitstrap-askpw"]);
        assert!(cli.prompt.is_none());

        let cli = AskpwCli::parse_from(["gitstrap-askpw", "Password for 'https://host': "]);
        assert_eq!(cli.prompt.as_deref(), Some("Password for 'https://host': "));
    }
}
