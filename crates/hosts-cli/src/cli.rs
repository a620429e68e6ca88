//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hosts_ops::DEFAULT_HOSTS_FILE;

/// hosts-manager - Switch named groups of host entries in and out of your hosts file
#[derive(Parser, Debug)]
#[command(name = "hosts-manager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Group store file (default: ~/.config/hosts-manager/hosts-manager.json)
    #[arg(short, long, global = true, env = "HOSTS_MANAGER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the version number
    Version,

    /// List all hostgroups
    List,

    /// Create a new hostgroup in your editor
    ///
    /// Saving an empty buffer cancels.
    New {
        /// Name of the hostgroup
        name: String,
    },

    /// Edit a specific hostgroup
    ///
    /// Saving an empty buffer removes the group.
    Edit {
        /// Name of the hostgroup
        name: String,
    },

    /// Remove specific hostgroups
    Remove {
        /// Names of the hostgroups
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print hostgroups (all active ones when no name is given)
    Show {
        /// Names of the hostgroups
        names: Vec<String>,
    },

    /// Activate hostgroups
    Activate {
        /// Names of the hostgroups
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Deactivate hostgroups
    Deactivate {
        /// Names of the hostgroups
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Apply active hostgroups to the hosts file
    ///
    /// Examples:
    ///   hosts-manager apply                 # Update /etc/hosts
    ///   hosts-manager apply -n              # Preview only
    ///   hosts-manager apply ./hosts.test    # Update another file
    Apply {
        /// Hosts file to update
        #[arg(default_value = DEFAULT_HOSTS_FILE)]
        hostsfile: PathBuf,

        /// Show the diff without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_apply_defaults() {
        let cli = Cli::try_parse_from(["hosts-manager", "apply"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Apply {
                hostsfile: PathBuf::from("/etc/hosts"),
                dry_run: false,
            }
        );
    }

    #[test]
    fn test_apply_dry_run_short_flag() {
        let cli = Cli::try_parse_from(["hosts-manager", "apply", "-n", "hosts.txt"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Apply {
                hostsfile: PathBuf::from("hosts.txt"),
                dry_run: true,
            }
        );
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["hosts-manager", "list", "-c", "/tmp/x.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.json")));
    }

    #[test]
    fn test_activate_requires_names() {
        assert!(Cli::try_parse_from(["hosts-manager", "activate"]).is_err());
    }

    #[test]
    fn test_new_requires_exactly_one_name() {
        assert!(Cli::try_parse_from(["hosts-manager", "new"]).is_err());
        assert!(Cli::try_parse_from(["hosts-manager", "new", "a", "b"]).is_err());
    }

    #[test]
    fn test_show_allows_no_names() {
        let cli = Cli::try_parse_from(["hosts-manager", "show"]).unwrap();
        assert_eq!(cli.command, Commands::Show { names: vec![] });
    }
}
