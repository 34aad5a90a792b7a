/// Interactive catalog browser
///
/// Loads the whole catalog once, then re-derives the visible product list
/// from the in-memory snapshot as the user types. Plain lines are search
/// terms and go through the debouncer; lines starting with `:` are commands.
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use yansi::Paint;

use crate::api::RestClient;
use crate::catalog::{fetch_snapshot, CatalogViewModel, FetchToken, SortKey, SortOrder};
use crate::debounce::Debouncer;
use crate::error::CatalogError;
use crate::models::CatalogSnapshot;
use crate::output::{print_list, products_table};
use crate::utils::parse_optional_id;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Organization(Option<i64>),
    Category(Option<i64>),
    Sort(SortKey),
    Order(SortOrder),
    Reset,
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix(':') else {
            return ShellCommand::Search(trimmed.to_string());
        };
        let (cmd, arg) = rest.split_once(' ').map(|(c, a)| (c, a.trim())).unwrap_or((rest, ""));
        match cmd {
            "org" | "organization" => ShellCommand::Organization(parse_optional_id(Some(arg))),
            "cat" | "category" => ShellCommand::Category(parse_optional_id(Some(arg))),
            "sort" => ShellCommand::Sort(SortKey::parse_lenient(arg)),
            "order" => ShellCommand::Order(SortOrder::parse_lenient(arg)),
            "reset" => ShellCommand::Reset,
            "refresh" | "r" => ShellCommand::Refresh,
            "help" | "h" => ShellCommand::Help,
            "quit" | "q" | "exit" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

const HELP: &str = "Type to search. Commands: :org <id>, :cat <id> (empty clears), :sort name|organization|category, :order asc|desc, :reset, :refresh, :quit";

type FetchResult = (FetchToken, Result<CatalogSnapshot, CatalogError>);

fn spawn_fetch(vm: &mut CatalogViewModel, api: &RestClient, tx: &mpsc::UnboundedSender<FetchResult>) {
    let token = vm.begin_fetch();
    let api = api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = fetch_snapshot(&api).await;
        // receiver gone means the shell exited
        let _ = tx.send((token, result));
    });
}

/// Drop search terms the debouncer already emitted but the loop has not applied.
fn discard_pending(rx: &mut mpsc::UnboundedReceiver<String>) -> usize {
    let mut dropped = 0;
    while rx.try_recv().is_ok() {
        dropped += 1;
    }
    dropped
}

fn render(vm: &CatalogViewModel) {
    let visible = vm.visible_products();
    let q = vm.query();
    println!(
        "{} {} of {} products (search: {:?}, sort: {} {})",
        Paint::new("»").cyan(),
        visible.len(),
        vm.snapshot().products.len(),
        q.search,
        q.sort_by,
        q.order
    );
    print_list(products_table(&visible), visible.is_empty(), "products");
}

/// Run the shell on stdin until `:quit` or end of input.
pub async fn run(api: RestClient, debounce: Duration) -> Result<(), CatalogError> {
    let mut vm = CatalogViewModel::new();
    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<FetchResult>();
    let (search_tx, mut search_rx) = mpsc::unbounded_channel::<String>();
    let mut debouncer = Debouncer::new(debounce, move |term: String| {
        let _ = search_tx.send(term);
    });

    println!("{}", Paint::new(HELP).dim());
    println!("Loading catalog...");
    let initial = vm.begin_fetch();
    let snapshot = fetch_snapshot(&api).await?;
    vm.commit(initial, snapshot);
    render(&vm);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.map_err(|e| CatalogError::Network(e.to_string()))? else {
                    break;
                };
                match ShellCommand::parse(&line) {
                    ShellCommand::Search(term) => debouncer.push(term),
                    ShellCommand::Organization(id) => { vm.query_mut().organization_id = id; render(&vm); }
                    ShellCommand::Category(id) => { vm.query_mut().category_id = id; render(&vm); }
                    ShellCommand::Sort(key) => { vm.query_mut().sort_by = key; render(&vm); }
                    ShellCommand::Order(order) => { vm.query_mut().order = order; render(&vm); }
                    ShellCommand::Reset => {
                        debouncer.cancel();
                        discard_pending(&mut search_rx);
                        vm.reset_query();
                        render(&vm);
                    }
                    ShellCommand::Refresh => {
                        println!("Refreshing...");
                        spawn_fetch(&mut vm, &api, &fetch_tx);
                    }
                    ShellCommand::Help => println!("{}", HELP),
                    ShellCommand::Quit => break,
                    ShellCommand::Unknown(cmd) => println!("{} :{}", Paint::new("Unknown command").yellow(), cmd),
                }
            }
            Some(term) = search_rx.recv() => {
                vm.set_search(term);
                render(&vm);
            }
            Some((token, result)) = fetch_rx.recv() => {
                match vm.apply_fetch(token, result) {
                    Ok(Some(_)) => render(&vm),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "Catalog refresh failed");
                        eprintln!("{}: {}", Paint::new(e.notice()).red(), e);
                    }
                }
            }
        }
    }
    debouncer.cancel();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_and_commands() {
        assert_eq!(ShellCommand::parse("  tech "), ShellCommand::Search("tech".into()));
        assert_eq!(ShellCommand::parse(":org 4"), ShellCommand::Organization(Some(4)));
        assert_eq!(ShellCommand::parse(":org"), ShellCommand::Organization(None));
        assert_eq!(ShellCommand::parse(":sort category"), ShellCommand::Sort(SortKey::Category));
        assert_eq!(ShellCommand::parse(":order desc"), ShellCommand::Order(SortOrder::Desc));
        assert_eq!(ShellCommand::parse(":q"), ShellCommand::Quit);
        assert_eq!(ShellCommand::parse(":bogus"), ShellCommand::Unknown("bogus".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_discards_term_already_emitted() {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let mut debouncer = Debouncer::new(Duration::from_millis(300), move |term: String| {
            let _ = tx.send(term);
        });
        let mut vm = CatalogViewModel::new();

        debouncer.push("lamp".to_string());
        tokio::time::sleep(Duration::from_millis(301)).await;

        // what the :reset arm does
        debouncer.cancel();
        assert_eq!(discard_pending(&mut rx), 1);
        vm.reset_query();

        assert!(rx.try_recv().is_err());
        assert_eq!(vm.query().search, "");
    }
}
