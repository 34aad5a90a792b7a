use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use catalog::catalog::{
    fetch_snapshot, filter_items, CatalogViewModel, ProductQuery, SortKey, SortOrder, PRODUCT_SEARCH_FIELDS,
};
use catalog::config::{self, Settings, DEFAULT_HOST, DEFAULT_PORT};
use catalog::models::{AppState, CategoryForm, OrganizationForm, ProductForm};
use catalog::output::{categories_table, counts_table, organizations_table, print_list, products_table};
use catalog::soap::{check_fault, normalize_products, SoapProductInput, XmlDocument};
use catalog::{api, routes, shell, CatalogError};

fn build_client() -> Result<reqwest::Client, CatalogError> {
    reqwest::Client::builder()
        .user_agent(format!("catalog/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(CatalogError::from)
}

fn build_state(settings: &Settings) -> Result<AppState, CatalogError> {
    Ok(AppState::new(build_client()?, settings))
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let app = routes::build_router(state);

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Invalid host/port format").red(), e);
            process::exit(1);
        }
    };

    tracing::info!(%addr, "Starting catalog server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "Server error");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.")
                    .yellow()
            );
            process::exit(1);
        }
    }
}

fn print_soap_products(doc: &XmlDocument, raw: bool, search: Option<&str>) -> Result<(), CatalogError> {
    if raw {
        println!("{}", doc.source());
    }
    let products = normalize_products(doc)?;
    let visible = filter_items(&products, search.unwrap_or_default().trim(), PRODUCT_SEARCH_FIELDS);
    print_list(products_table(&visible), visible.is_empty(), "products");
    Ok(())
}

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Browse and manage the product catalog over REST and SOAP",
    long_about = "Catalog client for the products/organizations/categories service.

Lists and creates records through the REST API, talks to the SOAP products endpoint, offers an interactive debounced search shell (`browse`) and a small web UI (`serve`). Configure endpoints with API_BASE_URL and SOAP_BASE_URL, either in the environment or in a .env file.",
    after_help = "Examples:
      catalog dashboard
      catalog products list --search tech --sort category --order desc
      catalog soap list --raw
      catalog serve --port 3001"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how many products, organizations and categories exist
    Dashboard,
    /// List or create products via REST
    Products {
        #[command(subcommand)]
        sub: ProductCommands,
    },
    /// List or create organizations via REST
    Organizations {
        #[command(subcommand)]
        sub: OrganizationCommands,
    },
    /// List or create categories via REST
    Categories {
        #[command(subcommand)]
        sub: CategoryCommands,
    },
    /// Talk to the SOAP products endpoint
    Soap {
        #[command(subcommand)]
        sub: SoapCommands,
    },
    /// Interactive product search with debounced input
    #[command(long_about = "Load the catalog once and filter it as you type. Plain lines are search terms; `:help` lists the commands for filtering, sorting and refreshing.")]
    Browse,
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    #[command(about = "Print the resolved configuration and probe the REST API.")]
    CheckConfig,
}

#[derive(Subcommand)]
enum ProductCommands {
    /// List products with optional filtering and sorting
    List {
        #[arg(long, short = 's')]
        search: Option<String>,
        /// Only products of this organization id
        #[arg(long)]
        organization: Option<i64>,
        /// Only products of this category id
        #[arg(long)]
        category: Option<i64>,
        /// name | organization | category
        #[arg(long, default_value = "name")]
        sort: String,
        /// asc | desc
        #[arg(long, default_value = "asc")]
        order: String,
    },
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        organization_id: Option<i64>,
        #[arg(long)]
        category_id: Option<i64>,
    },
}

#[derive(Subcommand)]
enum OrganizationCommands {
    List {
        #[arg(long, short = 's')]
        search: Option<String>,
    },
    Create {
        #[arg(long)]
        name: String,
    },
}

#[derive(Subcommand)]
enum CategoryCommands {
    List {
        #[arg(long, short = 's')]
        search: Option<String>,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
enum SoapCommands {
    /// Call GetProductsRequest and print the normalized products
    List {
        /// Also print the raw XML response
        #[arg(long)]
        raw: bool,
        #[arg(long, short = 's')]
        search: Option<String>,
    },
    /// Call CreateProductRequest
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        organization_id: Option<i64>,
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long)]
        raw: bool,
    },
}

async fn run(command: Commands, settings: Settings) -> Result<(), CatalogError> {
    match command {
        Commands::Serve { host, port } => {
            let state = build_state(&settings)?;
            start_server(state, &host, port).await;
        }
        Commands::CheckConfig => {
            println!("API_BASE_URL       {}", settings.api_base_url);
            println!("SOAP_BASE_URL      {}", settings.soap_base_url);
            println!("SEARCH_DEBOUNCE_MS {}", settings.search_debounce.as_millis());
            let state = build_state(&settings)?;
            let snapshot = fetch_snapshot(&state.api).await?;
            println!("{}", yansi::Paint::new("Configuration looks valid (catalog reachable)").green());
            println!("\n{}\n", counts_table(&snapshot.counts()));
        }
        Commands::Dashboard => {
            let state = build_state(&settings)?;
            let mut vm = CatalogViewModel::new();
            let counts = vm.refresh(&state.api).await?;
            println!("\n{}\n", counts_table(&counts));
        }
        Commands::Products { sub } => {
            let state = build_state(&settings)?;
            let mut vm = CatalogViewModel::new();
            match sub {
                ProductCommands::List { search, organization, category, sort, order } => {
                    vm.refresh(&state.api).await?;
                    *vm.query_mut() = ProductQuery {
                        search: search.unwrap_or_default(),
                        organization_id: organization,
                        category_id: category,
                        sort_by: SortKey::parse_lenient(&sort),
                        order: SortOrder::parse_lenient(&order),
                    };
                    let visible = vm.visible_products();
                    print_list(products_table(&visible), visible.is_empty(), "products");
                }
                ProductCommands::Create { name, organization_id, category_id } => {
                    let form = ProductForm { name, organization_id, category_id };
                    let created = vm.create_product(&state.api, &form).await?;
                    println!("{} {}", yansi::Paint::new("Product created").green(), created.id_label());
                }
            }
        }
        Commands::Organizations { sub } => {
            let state = build_state(&settings)?;
            match sub {
                OrganizationCommands::List { search } => {
                    let mut vm = CatalogViewModel::new();
                    vm.refresh(&state.api).await?;
                    let list = vm.search_organizations(search.as_deref().unwrap_or_default());
                    print_list(organizations_table(&list), list.is_empty(), "organizations");
                }
                OrganizationCommands::Create { name } => {
                    let mut vm = CatalogViewModel::new();
                    let created = vm.create_organization(&state.api, &OrganizationForm { name }).await?;
                    println!("{} #{} {}", yansi::Paint::new("Organization created").green(), created.id, created.name);
                }
            }
        }
        Commands::Categories { sub } => {
            let state = build_state(&settings)?;
            match sub {
                CategoryCommands::List { search } => {
                    let mut vm = CatalogViewModel::new();
                    vm.refresh(&state.api).await?;
                    let list = vm.search_categories(search.as_deref().unwrap_or_default());
                    print_list(categories_table(&list), list.is_empty(), "categories");
                }
                CategoryCommands::Create { name, description } => {
                    let mut vm = CatalogViewModel::new();
                    let created = vm.create_category(&state.api, &CategoryForm { name, description }).await?;
                    println!("{} #{} {}", yansi::Paint::new("Category created").green(), created.id, created.name);
                }
            }
        }
        Commands::Soap { sub } => {
            let state = build_state(&settings)?;
            match sub {
                SoapCommands::List { raw, search } => {
                    let doc = state.soap.list_products().await?;
                    print_soap_products(&doc, raw, search.as_deref())?;
                }
                SoapCommands::Create { name, organization_id, category_id, raw } => {
                    let body = ProductForm { name, organization_id, category_id }.validate()?;
                    let doc = state.soap.create_product(&SoapProductInput::from(&body)).await?;
                    if raw {
                        println!("{}", doc.source());
                    }
                    check_fault(&doc)?;
                    println!("{} {}", yansi::Paint::new("Product created via SOAP").green(), body.name);
                }
            }
        }
        Commands::Browse => {
            let state = build_state(&settings)?;
            shell::run(state.api, settings.search_debounce).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    config::load_env_file(cli.env_file.as_deref());
    let settings = Settings::from_env();

    // No subcommand: serve the web app by default
    let command = cli.command.unwrap_or(Commands::Serve {
        host: DEFAULT_HOST.to_string(),
        port: DEFAULT_PORT,
    });

    if let Err(e) = run(command, settings).await {
        eprintln!("{}: {}", yansi::Paint::new(e.notice()).red(), e);
        process::exit(1);
    }
}
