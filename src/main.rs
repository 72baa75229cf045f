use clap::Parser;
use vaultex::application::{ExportOptions, ExportService, ListTagsService};
use vaultex::cli::{format_manifest, format_tag_list, Cli, Commands};
use vaultex::error::VaultexError;
use vaultex::infrastructure::{Config, Vault};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), VaultexError> {
    match cli.command {
        Commands::Export {
            root,
            tag,
            recursive,
            output,
        } => {
            let vault = Vault::open(&root)?;
            let config = Config::load_from_dir(vault.root())?;

            // CLI flags win over vault-local config defaults.
            let options = ExportOptions {
                tag,
                recursive: recursive || config.recursive,
                output: output.or_else(|| config.output_for(vault.root())),
            };

            let service = ExportService::new(vault);
            let outcome = service.execute(&options)?;

            match outcome.archive {
                Some(archive) => {
                    match archive.parent() {
                        Some(dir) if dir != std::path::Path::new(".") => {
                            println!("Exporting to {}...", dir.display())
                        }
                        _ => println!("Exporting to current path..."),
                    }
                    print!("{}", format_manifest(&outcome.files));
                    println!("Exported {}", archive.display());
                    Ok(())
                }
                None => {
                    println!("No files found, exiting now");
                    Ok(())
                }
            }
        }
        Commands::Tags { root } => {
            let vault = Vault::open(&root)?;
            let service = ListTagsService::new(vault);
            let tags = service.execute()?;
            if tags.is_empty() {
                println!("{}", format_tag_list(&tags));
            } else {
                print!("{}", format_tag_list(&tags));
            }
            Ok(())
        }
    }
}
