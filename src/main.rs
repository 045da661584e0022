use anyhow::Result;
use arcdir::{ServiceDirectoryExplorer, ServiceType, Settings};
use clap::{Parser, Subcommand};

/// Explore an Esri ArcGIS REST service directory
#[derive(Parser)]
#[command(name = "arcdir", version)]
struct Cli {
    /// Directory root URL; falls back to ARCGIS_SERVER_URL
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the folder names at the directory root
    Folders,

    /// List the services in one folder
    Services {
        /// Folder name as reported by the directory root
        folder: String,
    },

    /// List every service in the directory, including subfolders
    List {
        /// Keep only services of this type, e.g. MapServer
        #[arg(long, value_name = "TYPE")]
        service_type: Option<String>,
    },

    /// Count every service in the directory
    Count,

    /// Show the property sheet for one service
    Properties {
        /// Folder name, or "root" for a service at the directory root
        folder: String,
        /// Service name
        name: String,
        /// Service type label, e.g. MapServer
        service_type: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let server_url = match cli.url {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => Settings::load()?.server_url,
    };

    let explorer = ServiceDirectoryExplorer::new(server_url);

    match cli.command {
        Command::Folders => {
            for folder in explorer.list_folders().await? {
                println!("{}", folder);
            }
        }
        Command::Services { folder } => {
            for service in explorer.list_services_in_folder(&folder).await? {
                println!("{}", service);
            }
        }
        Command::List { service_type } => {
            let services = match service_type {
                Some(ref service_type) => {
                    explorer.list_all_services_by_type(service_type).await?
                }
                None => explorer.list_all_services().await?,
            };
            for service in services {
                println!("{}", service);
            }
        }
        Command::Count => {
            println!("{}", explorer.count_services().await?);
        }
        Command::Properties {
            folder,
            name,
            service_type,
        } => {
            let service_type: ServiceType = service_type.parse()?;
            let properties = explorer
                .service_properties(&folder, &name, service_type)
                .await?;
            for (label, value) in properties.labeled() {
                println!("{}: {}", label, value);
            }
        }
    }

    Ok(())
}
