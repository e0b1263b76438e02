use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "dlg-register")]
#[command(about = "Register an application with the DLG registry file", version)]
#[command(after_help = "EXAMPLES:
    dlg-register                          Prompt for ID and email, then register
    dlg-register register --id ABC123     Register without the ID prompt
    dlg-register list                     Show recorded registrations
    dlg-register --file /tmp/reg.dat list Use a different registry file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Registry file (overrides DLG_REGISTRY_FILE and the config file)
    #[arg(long, short, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Show debug diagnostics and full error chains
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register an application (default when no command is given)
    #[command(after_help = "EXAMPLES:
    dlg-register register
    dlg-register register --id ABC123 --email a@b.com
    echo 'ABC123 a@b.com' | dlg-register register")]
    Register(RegisterArgs),
    /// List records stored in the registry file
    #[command(after_help = "EXAMPLES:
    dlg-register list
    dlg-register list --json")]
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    dlg-register completions bash > ~/.bash_completion.d/dlg-register
    dlg-register completions zsh > ~/.zfunc/_dlg-register
    dlg-register completions fish > ~/.config/fish/completions/dlg-register.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    dlg-register init")]
    Init,
}

#[derive(Args, Clone, Debug, Default)]
pub struct RegisterArgs {
    /// DLG identifier (prompted for when omitted)
    #[arg(long)]
    pub id: Option<String>,

    /// Email address (prompted for when omitted)
    #[arg(long)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_defaults_to_register() {
        let cli = Cli::try_parse_from(["dlg-register"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_register_flags() {
        let cli = Cli::try_parse_from([
            "dlg-register",
            "register",
            "--id",
            "ABC123",
            "--file",
            "/tmp/reg.dat",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Register(args)) => {
                assert_eq!(args.id.as_deref(), Some("ABC123"));
                assert!(args.email.is_none());
            }
            _ => panic!("expected register command"),
        }
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/reg.dat")));
    }

    #[test]
    fn test_json_only_applies_to_list() {
        let cli = Cli::try_parse_from(["dlg-register", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { json: true })));

        assert!(Cli::try_parse_from(["dlg-register", "--json"]).is_err());
        assert!(Cli::try_parse_from(["dlg-register", "register", "--json"]).is_err());
    }
}
