//! Hardware configuration: stations, modules and their network interfaces.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Hardware family of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
pub enum StationType {
    Simatic300,
    Simatic400,
    Simatic400H,
    SimaticPc,
    #[default]
    Unknown,
}

/// A station: one physical chassis holding a controller and modules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Station {
    #[serde(default)]
    pub station_type: StationType,

    /// Bus systems mastered by this station.
    #[serde(default)]
    pub master_systems: Vec<MasterSystem>,
}

/// A bus/network grouping and the nodes attached to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasterSystem {
    pub name: CompactString,
    #[serde(default)]
    pub nodes: Vec<MasterSystemNode>,
}

/// A node attached to a master system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterSystemNode {
    /// Kind of the attached node (e.g. `ProfibusNode`).
    pub node_type: CompactString,
    /// Bus address of the node.
    pub node_id: i32,
    /// Name of the attached module.
    pub name: CompactString,
}

/// Programmable controller (CPU).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpuModule {
    /// Catalogue order number, e.g. `6ES7 315-2AG10-0AB0`.
    #[serde(default)]
    pub order_number: Option<String>,

    /// Hardware protection password, if one is configured.
    #[serde(default)]
    pub hardware_password: Option<String>,

    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
}

impl CpuModule {
    /// Whether the controller carries a non-empty hardware password.
    pub fn is_password_protected(&self) -> bool {
        self.hardware_password
            .as_deref()
            .is_some_and(|p| !p.is_empty())
    }
}

/// Communication processor (CP) module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommModule {
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
}

impl CommModule {
    /// Ethernet interfaces of this module, in declaration order.
    pub fn ethernet_interfaces(&self) -> impl Iterator<Item = (Ipv4Addr, Ipv4Addr)> + '_ {
        self.network_interfaces
            .iter()
            .filter_map(|ni| match ni.config {
                InterfaceConfig::Ethernet {
                    ip_address,
                    subnet_mask,
                    ..
                } => Some((ip_address, subnet_mask)),
                _ => None,
            })
    }
}

/// A named network interface of a module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub name: CompactString,
    #[serde(flatten)]
    pub config: InterfaceConfig,
}

impl NetworkInterface {
    /// Create a new interface.
    pub fn new(name: impl Into<CompactString>, config: InterfaceConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    /// Interface kind label (`Ethernet`, `Mpi`, `Profibus`, ...).
    pub fn type_label(&self) -> &str {
        match &self.config {
            InterfaceConfig::Ethernet { .. } => "Ethernet",
            InterfaceConfig::Mpi { .. } => "Mpi",
            InterfaceConfig::Profibus { .. } => "Profibus",
            InterfaceConfig::Other { type_name, .. } => type_name,
        }
    }

    /// Kind-specific address rendering.
    pub fn address_label(&self) -> String {
        match &self.config {
            InterfaceConfig::Ethernet {
                ip_address, mac, ..
            } => format!("{ip_address} ({mac})"),
            InterfaceConfig::Mpi { address } | InterfaceConfig::Profibus { address } => {
                format!("Address: {address}")
            }
            InterfaceConfig::Other { description, .. } => description.clone(),
        }
    }
}

/// Kind-specific interface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InterfaceConfig {
    Ethernet {
        ip_address: Ipv4Addr,
        subnet_mask: Ipv4Addr,
        mac: MacAddress,
    },
    Mpi {
        address: u32,
    },
    Profibus {
        address: u32,
    },
    Other {
        type_name: String,
        #[serde(default)]
        description: String,
    },
}

/// Hardware (MAC) address, displayed as upper-case colon-separated pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

impl FromStr for MacAddress {
    type Err = String;

    /// Accepts `:` or `-` separated hex pairs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 6];
        let mut parts = s.split([':', '-']);
        for byte in &mut bytes {
            let part = parts
                .next()
                .ok_or_else(|| format!("MAC address too short: {s}"))?;
            *byte = u8::from_str_radix(part, 16)
                .map_err(|e| format!("Invalid MAC address {s}: {e}"))?;
        }
        if parts.next().is_some() {
            return Err(format!("MAC address too long: {s}"));
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for MacAddress {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ethernet(ip: [u8; 4], mask: [u8; 4]) -> NetworkInterface {
        NetworkInterface::new(
            "PN-IO",
            InterfaceConfig::Ethernet {
                ip_address: Ipv4Addr::from(ip),
                subnet_mask: Ipv4Addr::from(mask),
                mac: MacAddress([0x08, 0x00, 0x06, 0x9a, 0x0b, 0xff]),
            },
        )
    }

    #[test]
    fn test_mac_display_and_parse() {
        let mac: MacAddress = "08-00-06-9a-0b-ff".parse().unwrap();
        assert_eq!(mac.to_string(), "08:00:06:9A:0B:FF");
        assert!("08:00:06".parse::<MacAddress>().is_err());
        assert!("08:00:06:9a:0b:ff:01".parse::<MacAddress>().is_err());
    }

    #[test]
    fn test_address_labels() {
        let eth = ethernet([192, 168, 0, 1], [255, 255, 255, 0]);
        assert_eq!(eth.type_label(), "Ethernet");
        assert_eq!(eth.address_label(), "192.168.0.1 (08:00:06:9A:0B:FF)");

        let dp = NetworkInterface::new("DP", InterfaceConfig::Profibus { address: 2 });
        assert_eq!(dp.address_label(), "Address: 2");

        let other = NetworkInterface::new(
            "ASi",
            InterfaceConfig::Other {
                type_name: "AsInterface".into(),
                description: "AS-i master".into(),
            },
        );
        assert_eq!(other.type_label(), "AsInterface");
        assert_eq!(other.address_label(), "AS-i master");
    }

    #[test]
    fn test_password_protection() {
        let mut cpu = CpuModule::default();
        assert!(!cpu.is_password_protected());
        cpu.hardware_password = Some(String::new());
        assert!(!cpu.is_password_protected());
        cpu.hardware_password = Some("secret".into());
        assert!(cpu.is_password_protected());
    }

    #[test]
    fn test_ethernet_interfaces_filtered() {
        let cp = CommModule {
            network_interfaces: vec![
                ethernet([10, 0, 0, 1], [255, 255, 255, 0]),
                NetworkInterface::new("MPI", InterfaceConfig::Mpi { address: 3 }),
                ethernet([10, 0, 0, 2], [255, 255, 0, 0]),
            ],
        };
        let pairs: Vec<_> = cp.ethernet_interfaces().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].0, Ipv4Addr::new(10, 0, 0, 2));
    }
}
