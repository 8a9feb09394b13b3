use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fundline",
    about = "Fundline — a keyed-state ledger for crowdfunding donations",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path of the ledger state file.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Optional TOML config file (store path, seed identities).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Seed the ledger with identities and the empty request index
    Init(InitArgs),
    /// Create a funding request
    Request(RequestArgs),
    /// Donate to an existing request
    Donate(DonateArgs),
    /// Read the raw bytes stored under a key
    Read(ReadArgs),
    /// Show a decoded record
    Show(ShowArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Identities to seed, in addition to any from the config file.
    pub identities: Vec<String>,
}

#[derive(Args)]
pub struct RequestArgs {
    /// Author identity.
    pub who: String,
    pub name: String,
    pub description: String,
    /// Target amount. Parsed by the dispatcher; non-numeric input fails
    /// without writing.
    pub expected_money: String,
}

#[derive(Args)]
pub struct DonateArgs {
    /// Donor identity.
    pub from: String,
    /// Target request id.
    pub rid: String,
    pub money: String,
}

#[derive(Args)]
pub struct ReadArgs {
    pub key: String,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(subcommand)]
    pub target: ShowTarget,
}

#[derive(Subcommand)]
pub enum ShowTarget {
    /// A person and the requests/donations they made
    Person { id: String },
    /// A funding request and its donation list
    Request { id: String },
    /// A single donation
    Donation { id: String },
    /// The index of all requests
    Index,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init() {
        let cli = Cli::try_parse_from(["fundline", "init", "alice", "bob"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert_eq!(args.identities, vec!["alice", "bob"]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_request() {
        let cli = Cli::try_parse_from([
            "fundline", "request", "alice", "Tuition", "pay for school", "1000",
        ])
        .unwrap();
        if let Command::Request(args) = cli.command {
            assert_eq!(args.who, "alice");
            assert_eq!(args.expected_money, "1000");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_donate() {
        let cli = Cli::try_parse_from(["fundline", "donate", "bob", "aB3xYz", "500"]).unwrap();
        if let Command::Donate(args) = cli.command {
            assert_eq!(args.from, "bob");
            assert_eq!(args.rid, "aB3xYz");
            assert_eq!(args.money, "500");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_read() {
        let cli = Cli::try_parse_from(["fundline", "read", "Req:aB3xYz"]).unwrap();
        if let Command::Read(args) = cli.command {
            assert_eq!(args.key, "Req:aB3xYz");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_show_index() {
        let cli = Cli::try_parse_from(["fundline", "show", "index"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert!(matches!(args.target, ShowTarget::Index));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_show_person() {
        let cli = Cli::try_parse_from(["fundline", "show", "person", "alice"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert!(matches!(args.target, ShowTarget::Person { id } if id == "alice"));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_global_store_flag() {
        let cli =
            Cli::try_parse_from(["fundline", "--store", "/tmp/state.json", "show", "index"])
                .unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/state.json")));
    }

    #[test]
    fn parse_global_config_flag() {
        let cli = Cli::try_parse_from(["fundline", "init", "--config", "fundline.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("fundline.toml")));
    }
}
