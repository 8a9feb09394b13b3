use colored::Colorize;
use fundline_dispatch::Dispatcher;
use fundline_ledger::{keyspace, LedgerEngine, MISSING_VALUE_PLACEHOLDER};
use fundline_store::FileStateStore;
use fundline_types::{codec, Donation, Person, Request, RequestIndex};

use crate::cli::{Cli, Command, DonateArgs, InitArgs, ReadArgs, RequestArgs, ShowArgs, ShowTarget};
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let store_path = config.resolve_store_path(cli.store.as_deref());
    let store = FileStateStore::open(&store_path)?;
    let dispatcher = Dispatcher::new(LedgerEngine::new(store));

    match cli.command {
        Command::Init(args) => cmd_init(&dispatcher, &config, args),
        Command::Request(args) => cmd_request(&dispatcher, args),
        Command::Donate(args) => cmd_donate(&dispatcher, args),
        Command::Read(args) => cmd_read(&dispatcher, args),
        Command::Show(args) => cmd_show(&dispatcher, args),
    }
}

fn cmd_init(
    dispatcher: &Dispatcher<FileStateStore>,
    config: &CliConfig,
    args: InitArgs,
) -> anyhow::Result<()> {
    let identities = unique_identities(&config.seed_identities, args.identities);

    dispatcher.init(&identities)?;
    println!(
        "{} Ledger initialized at {} ({} identities)",
        "✓".green().bold(),
        dispatcher.engine().store().path().display().to_string().bold(),
        identities.len()
    );
    for identity in &identities {
        println!("  seeded: {}", identity.cyan());
    }
    Ok(())
}

fn cmd_request(dispatcher: &Dispatcher<FileStateStore>, args: RequestArgs) -> anyhow::Result<()> {
    let payload = dispatcher.dispatch(
        "createRequest",
        &[args.who.clone(), args.name, args.description, args.expected_money],
    )?;
    let rid = String::from_utf8_lossy(&payload).into_owned();
    println!(
        "{} Created request {} by {}",
        "✓".green().bold(),
        rid.yellow(),
        args.who.cyan()
    );
    Ok(())
}

fn cmd_donate(dispatcher: &Dispatcher<FileStateStore>, args: DonateArgs) -> anyhow::Result<()> {
    let payload = dispatcher.dispatch(
        "createDonation",
        &[args.from.clone(), args.rid.clone(), args.money.clone()],
    )?;
    let did = String::from_utf8_lossy(&payload).into_owned();
    println!(
        "{} Donation {} of {} from {} to request {}",
        "✓".green().bold(),
        did.yellow(),
        args.money.bold(),
        args.from.cyan(),
        args.rid.yellow()
    );
    Ok(())
}

fn cmd_read(dispatcher: &Dispatcher<FileStateStore>, args: ReadArgs) -> anyhow::Result<()> {
    let payload = dispatcher.dispatch("read", &[args.key])?;
    println!("{}", String::from_utf8_lossy(&payload));
    Ok(())
}

fn cmd_show(dispatcher: &Dispatcher<FileStateStore>, args: ShowArgs) -> anyhow::Result<()> {
    let key = match &args.target {
        ShowTarget::Person { id } => keyspace::person_key(id),
        ShowTarget::Request { id } => keyspace::request_key(id),
        ShowTarget::Donation { id } => keyspace::donation_key(id),
        ShowTarget::Index => keyspace::INDEX_KEY.to_string(),
    };

    let payload = dispatcher.dispatch("read", &[key.clone()])?;
    if payload == MISSING_VALUE_PLACEHOLDER {
        println!("No record under {}", key.yellow());
        return Ok(());
    }

    match args.target {
        ShowTarget::Person { .. } => {
            let person: Person = codec::decode(&payload)?;
            println!("Person {}", person.id.cyan().bold());
            println!("  requests:  {}", join_ids(&person.my_requests));
            println!("  donations: {}", join_ids(&person.my_donations));
        }
        ShowTarget::Request { .. } => {
            let request: Request = codec::decode(&payload)?;
            print_request(&request);
        }
        ShowTarget::Donation { .. } => {
            let donation: Donation = codec::decode(&payload)?;
            println!(
                "Donation {} — {} gave {} to request {}",
                donation.id.yellow().bold(),
                donation.who.cyan(),
                donation.money.to_string().bold(),
                donation.rid.yellow()
            );
        }
        ShowTarget::Index => {
            let index: RequestIndex = codec::decode(&payload)?;
            println!("{} request(s)", index.len().to_string().bold());
            for request in &index.requests {
                print_request(request);
            }
        }
    }
    Ok(())
}

fn print_request(request: &Request) {
    println!(
        "Request {} — {} (by {})",
        request.id.yellow().bold(),
        request.name.bold(),
        request.who.cyan()
    );
    println!("  {}", request.description);
    println!(
        "  raised {} of {} across {} donation(s)",
        request.current_money.to_string().green(),
        request.expected_money.to_string().bold(),
        request.donation_list.len()
    );
}

fn join_ids(ids: &[String]) -> String {
    if ids.is_empty() {
        "(none)".to_string()
    } else {
        ids.join(", ")
    }
}

/// Merge config and command-line identities, keeping first-seen order.
fn unique_identities(from_config: &[String], from_args: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    from_config
        .iter()
        .cloned()
        .chain(from_args)
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unique_identities_drops_non_adjacent_duplicates() {
        let merged = unique_identities(&strings(&["alice"]), strings(&["bob", "alice"]));
        assert_eq!(merged, vec!["alice", "bob"]);
    }

    #[test]
    fn unique_identities_keeps_first_seen_order() {
        let merged = unique_identities(
            &strings(&["carol", "alice"]),
            strings(&["alice", "dave", "carol"]),
        );
        assert_eq!(merged, vec!["carol", "alice", "dave"]);
    }

    #[test]
    fn unique_identities_handles_empty_inputs() {
        assert!(unique_identities(&[], vec![]).is_empty());
        assert_eq!(unique_identities(&[], strings(&["bob"])), vec!["bob"]);
    }
}
