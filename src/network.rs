use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
    Simnet,
    Devnet,
}

impl Network {
    /// Networks that can be requested with a selector flag, in resolution order.
    pub const SELECTABLE: [Network; 4] = [
        Network::Testnet,
        Network::Regtest,
        Network::Simnet,
        Network::Devnet,
    ];

    pub fn index(self) -> usize {
        match self {
            Network::Mainnet => 0,
            Network::Testnet => 1,
            Network::Regtest => 2,
            Network::Simnet => 3,
            Network::Devnet => 4,
        }
    }

    pub fn params(self) -> &'static NetworkParams {
        &PARAMS_TABLE[self.index()]
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
            Network::Regtest => write!(f, "regtest"),
            Network::Simnet => write!(f, "simnet"),
            Network::Devnet => write!(f, "devnet"),
        }
    }
}

/// Protocol parameters for one network. Callers only ever see `&'static`
/// references into `PARAMS_TABLE`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct NetworkParams {
    pub network: Network,
    pub name: &'static str,
    pub net_magic: u32,
    pub default_p2p_port: u16,
    pub default_rpc_port: u16,
    pub address_prefix: &'static str,
    pub is_test_network: bool,
}

/// Indexed by `Network::index()`.
static PARAMS_TABLE: [NetworkParams; 5] = [
    NetworkParams {
        network: Network::Mainnet,
        name: "kaspa-mainnet",
        net_magic: 0x3ddc_f71d,
        default_p2p_port: 16111,
        default_rpc_port: 16110,
        address_prefix: "kaspa",
        is_test_network: false,
    },
    NetworkParams {
        network: Network::Testnet,
        name: "kaspa-testnet",
        net_magic: 0xddb8_af8f,
        default_p2p_port: 16211,
        default_rpc_port: 16210,
        address_prefix: "kaspatest",
        is_test_network: true,
    },
    NetworkParams {
        network: Network::Regtest,
        name: "kaspa-regtest",
        net_magic: 0xf396_cdd6,
        default_p2p_port: 16311,
        default_rpc_port: 16310,
        address_prefix: "kaspareg",
        is_test_network: true,
    },
    NetworkParams {
        network: Network::Simnet,
        name: "kaspa-simnet",
        net_magic: 0x374d_cf1c,
        default_p2p_port: 16511,
        default_rpc_port: 16510,
        address_prefix: "kaspasim",
        is_test_network: true,
    },
    NetworkParams {
        network: Network::Devnet,
        name: "kaspa-devnet",
        net_magic: 0x732d_87e1,
        default_p2p_port: 16611,
        default_rpc_port: 16610,
        address_prefix: "kaspadev",
        is_test_network: true,
    },
];
