use clap::Parser;
use marina_inventory::config::toml_config::{RegistryConfig, TomlConfig};
use marina_inventory::core::registry::Registry;
use marina_inventory::core::{billing, codec, persistence};
use marina_inventory::domain::model::Placement;
use marina_inventory::utils::error::MarinaError;
use marina_inventory::utils::{logger, validation::Validate};
use marina_inventory::{CliConfig, ConfigProvider, LocalStorage};
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting marina-inventory CLI");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 驗證配置
    if let Err(e) = args.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new();

    let result = match &args.config {
        Some(config_path) => {
            let mut config = match TomlConfig::from_file(config_path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file '{}': {}", config_path, e);
                    eprintln!("❌ Failed to load config file '{}': {}", config_path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };

            // CLI 的 --max-boats 優先於 TOML 設定
            if let Some(max_boats) = args.max_boats {
                tracing::info!("🔧 Overriding registry.max_boats with {}", max_boats);
                config.registry = Some(RegistryConfig {
                    max_boats: Some(max_boats),
                });
            }

            if let Err(e) = config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            tracing::info!("✅ Loaded configuration for '{}'", config.marina_name());
            run_shell(&storage, &config, &args.data_file)
        }
        None => run_shell(&storage, &args, &args.data_file),
    };

    if let Err(e) = result {
        tracing::error!("❌ Session failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_shell<C: ConfigProvider>(
    storage: &LocalStorage,
    config: &C,
    data_path: &str,
) -> marina_inventory::Result<()> {
    let mut registry = Registry::with_capacity(config.capacity());
    let rates = config.rates();

    match persistence::load_all(storage, data_path, &mut registry) {
        Ok(summary) => {
            tracing::info!(
                "📁 Loaded {} boats from '{}' ({} lines skipped)",
                summary.loaded,
                data_path,
                summary.skipped
            );
        }
        Err(e) => {
            tracing::warn!(
                "⚠️ Could not read '{}' ({}), starting with an empty inventory",
                data_path,
                e
            );
        }
    }

    // 選單主迴圈：選 x 會寫檔後離開；stdin 讀到 EOF 則直接離開且不寫檔
    loop {
        print!("\n(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : ");
        io::stdout().flush()?;

        let Some(line) = read_line()? else {
            break;
        };
        let Some(option) = line.trim().chars().next() else {
            continue;
        };

        match option.to_ascii_lowercase() {
            'i' => print_inventory(&registry),
            'a' => add_boat(&mut registry)?,
            'r' => remove_boat(&mut registry)?,
            'p' => accept_payment(&mut registry)?,
            'm' => {
                billing::accrue_monthly_charges(&mut registry, &rates);
                println!("Monthly charges updated.");
            }
            'x' => {
                persistence::save_all(storage, data_path, &registry)?;
                tracing::info!("📁 Saved {} boats to '{}'", registry.len(), data_path);
                println!("\nExiting the Boat Management System");
                return Ok(());
            }
            other => println!("Invalid option {}", other),
        }
    }

    Ok(())
}

fn print_inventory(registry: &Registry) {
    for boat in registry.iter() {
        let kind = boat.placement.kind_name();
        match &boat.placement {
            Placement::Slip { number } => println!(
                "{:<20} {:>3.0}' {:<8} #{:<3}   Owes ${:>8.2}",
                boat.name, boat.length, kind, number, boat.amount_owed
            ),
            Placement::Land { bay } => println!(
                "{:<20} {:>3.0}' {:<8} {:<8} Owes ${:>8.2}",
                boat.name, boat.length, kind, bay, boat.amount_owed
            ),
            Placement::Trailer { license } => println!(
                "{:<20} {:>3.0}' {:<8} {:<8} Owes ${:>8.2}",
                boat.name, boat.length, kind, license, boat.amount_owed
            ),
            Placement::Storage { number } => println!(
                "{:<20} {:>3.0}' {:<8} #{:<3}   Owes ${:>8.2}",
                boat.name, boat.length, kind, number, boat.amount_owed
            ),
        }
    }
}

fn add_boat(registry: &mut Registry) -> marina_inventory::Result<()> {
    let Some(line) = prompt("Please enter the boat data in CSV format: ")? else {
        return Ok(());
    };

    let boat = match codec::parse_line(line.trim_end_matches(['\r', '\n'])) {
        Ok(boat) => boat,
        Err(error) => {
            println!("Cannot add boat: {}", error);
            return Ok(());
        }
    };

    match registry.add(boat) {
        Ok(()) => println!("Boat added successfully."),
        Err(MarinaError::CapacityError { .. }) => {
            println!("Cannot add boat: maximum number of boats reached.")
        }
        Err(error) => println!("Cannot add boat: {}", error),
    }

    Ok(())
}

fn remove_boat(registry: &mut Registry) -> marina_inventory::Result<()> {
    let Some(line) = prompt("Please enter the boat name: ")? else {
        return Ok(());
    };

    match registry.remove(line.trim()) {
        Ok(()) => println!("Boat removed successfully."),
        Err(_) => println!("No boat with that name."),
    }

    Ok(())
}

fn accept_payment(registry: &mut Registry) -> marina_inventory::Result<()> {
    let Some(line) = prompt("Please enter the boat name: ")? else {
        return Ok(());
    };

    let Some(boat) = registry.find_mut(line.trim()) else {
        println!("No boat with that name.");
        return Ok(());
    };

    let Some(amount_line) = prompt("Please enter the amount to be paid: ")? else {
        return Ok(());
    };
    let amount = codec::lenient_f64(amount_line.trim());

    match billing::apply_payment(boat, amount) {
        Ok(remaining) => println!("Payment accepted. New amount owed: ${:.2}", remaining),
        Err(MarinaError::PaymentExceedsBalanceError { owed, .. }) => {
            println!("That is more than the amount owed, ${:.2}", owed)
        }
        Err(error) => println!("{}", error),
    }

    Ok(())
}

fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    read_line()
}

fn read_line() -> io::Result<Option<String>> {
    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}
