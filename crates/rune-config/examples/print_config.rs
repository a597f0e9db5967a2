/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    // Load configuration from rune.toml
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Bidi Configuration ===\n");

    println!("Bidi Settings:");
    println!("  Upper Is RTL: {}", config.bidi.upper_is_rtl);
    println!("  Base Dir: {:?}", config.bidi.base_dir);
    println!("  Debug: {}", config.bidi.debug);
    println!("  Encoding: {:?}", config.bidi.encoding);
    println!();

    // Try to serialize to TOML for verification
    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
