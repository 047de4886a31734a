mod config;
mod error;
mod network;
mod selection;

use clap::{CommandFactory, Parser};
use config::{AppConfig, Cli, OutputMode};
use error::ConfigError;
use network::NetworkParams;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let cfg = match AppConfig::resolve(&cli) {
        Ok(c) => c,
        Err(ConfigError::Network(e)) => {
            let help = Cli::command().render_help().to_string();
            let _ = selection::write_diagnostic(&e, &help, &mut std::io::stderr());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = print_profile(&cfg) {
        eprintln!("fatal: {}", e);
        std::process::exit(1);
    }
}

fn print_profile(cfg: &AppConfig) -> Result<(), toml::ser::Error> {
    let params = cfg.network.active_profile();
    tracing::debug!(
        network = %cfg.network.network(),
        output = %cfg.output_mode,
        "printing resolved profile"
    );

    match cfg.output_mode {
        OutputMode::Text => print!("{}", profile_text(params)),
        OutputMode::Toml => print!("{}", toml::to_string(params)?),
    }
    Ok(())
}

fn profile_text(params: &NetworkParams) -> String {
    format!(
        "network: {}\nname: {}\nnet_magic: {:#010x}\np2p_port: {}\nrpc_port: {}\naddress_prefix: {}\ntest_network: {}\n",
        params.network,
        params.name,
        params.net_magic,
        params.default_p2p_port,
        params.default_rpc_port,
        params.address_prefix,
        params.is_test_network,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use network::Network;

    #[test]
    fn text_profile_lists_every_field() {
        let text = profile_text(Network::Testnet.params());
        assert!(text.starts_with("network: testnet\n"));
        assert!(text.contains("name: kaspa-testnet\n"));
        assert!(text.contains("net_magic: 0xddb8af8f\n"));
        assert!(text.contains("rpc_port: 16210\n"));
        assert!(text.contains("test_network: true\n"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn toml_profile_serializes() {
        let out = toml::to_string(Network::Devnet.params()).unwrap();
        assert!(out.contains("network = \"devnet\""));
        assert!(out.contains("address_prefix = \"kaspadev\""));
        assert!(out.contains("default_p2p_port = 16611"));
    }
}
