use clap::Args;
use serde::Deserialize;
use std::io::{self, Write};
use tracing::{debug, info};

use crate::error::NetworkError;
use crate::network::{Network, NetworkParams};

/// Mutually exclusive network selectors. Mainnet has no flag of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Args, Deserialize)]
#[serde(default)]
pub struct NetworkSelection {
    /// Use the test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the regression test network
    #[arg(long)]
    pub regtest: bool,

    /// Use the simulation test network
    #[arg(long)]
    pub simnet: bool,

    /// Use the development test network
    #[arg(long)]
    pub devnet: bool,
}

impl NetworkSelection {
    pub fn is_selected(&self, network: Network) -> bool {
        match network {
            Network::Mainnet => false,
            Network::Testnet => self.testnet,
            Network::Regtest => self.regtest,
            Network::Simnet => self.simnet,
            Network::Devnet => self.devnet,
        }
    }

    pub fn any_selected(&self) -> bool {
        Network::SELECTABLE.iter().any(|&n| self.is_selected(n))
    }

    /// Consume the selectors and settle on exactly one network.
    ///
    /// Fails if more than one selector is set, or if none is: mainnet is never
    /// chosen implicitly.
    pub fn resolve(self) -> Result<ResolvedNetwork, NetworkError> {
        let mut active = Network::Mainnet;
        let mut num_nets = 0;

        for network in Network::SELECTABLE {
            if self.is_selected(network) {
                num_nets += 1;
                active = network;
            }
        }

        debug!(selected = num_nets, "resolving network selectors");

        if num_nets > 1 {
            return Err(NetworkError::ConflictingNetworkSelection);
        }
        if num_nets == 0 {
            return Err(NetworkError::NoNetworkSelected);
        }

        info!(network = %active, "network resolved");
        Ok(ResolvedNetwork {
            params: active.params(),
        })
    }
}

/// Outcome of a successful `NetworkSelection::resolve`.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedNetwork {
    params: &'static NetworkParams,
}

impl ResolvedNetwork {
    pub fn active_profile(&self) -> &'static NetworkParams {
        self.params
    }

    pub fn network(&self) -> Network {
        self.params.network
    }
}

/// Writes the error line, followed by `help` when the error asks for it.
pub fn write_diagnostic<W: Write>(err: &NetworkError, help: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", err)?;
    if err.wants_help() {
        writeln!(out, "{}", help)?;
    }
    Ok(())
}
