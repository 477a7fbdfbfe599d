//! Device connection manifest (`devices_connection_information.json`).

use std::fs;

use serde::{Deserialize, Serialize};
use tracing::info;

use plcsnap_core::{ExportError, NodeKind, ProjectNode};

use crate::writer::{DEVICE_MANIFEST_FILE, ExportContext};

/// Device type reported for every station.
pub const DEVICE_TYPE_PLC: &str = "plc";

/// Description used when a station has no controller.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Address pair of one Ethernet interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthernetCommunication {
    pub ip_address: String,
    pub subnet_mask: String,
}

/// Connection descriptor of one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    pub description: String,
    pub order_number: Option<String>,
    pub device_type: String,
    pub origin_device_type: String,
    pub ethernet_communication: Vec<EthernetCommunication>,
    pub password_protected: bool,
}

impl DeviceInfo {
    /// Describe a station node; `None` for any other kind.
    ///
    /// Only the first controller and the first communication module of the
    /// station are considered.
    pub fn from_station(node: &ProjectNode) -> Option<Self> {
        let NodeKind::Station(station) = &node.kind else {
            return None;
        };

        let cpu = node.first_cpu();
        let ethernet_communication = node
            .first_cp()
            .map(|(_, cp)| {
                cp.ethernet_interfaces()
                    .map(|(ip, mask)| EthernetCommunication {
                        ip_address: ip.to_string(),
                        subnet_mask: mask.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            name: node.name.to_string(),
            description: cpu
                .map(|(cpu_node, _)| cpu_node.name.to_string())
                .unwrap_or_else(|| UNKNOWN_DESCRIPTION.to_string()),
            order_number: cpu.and_then(|(_, cpu)| cpu.order_number.clone()),
            device_type: DEVICE_TYPE_PLC.to_string(),
            origin_device_type: station.station_type.to_string(),
            ethernet_communication,
            password_protected: cpu.is_some_and(|(_, cpu)| cpu.is_password_protected()),
        })
    }
}

/// Describe every station in `stations`.
pub fn collect_devices<'a>(stations: impl IntoIterator<Item = &'a ProjectNode>) -> Vec<DeviceInfo> {
    stations
        .into_iter()
        .filter_map(DeviceInfo::from_station)
        .collect()
}

/// Write the manifest for `stations`, pretty-printed, and return it.
pub fn write_manifest<'a>(
    context: &ExportContext,
    stations: impl IntoIterator<Item = &'a ProjectNode>,
) -> Result<Vec<DeviceInfo>, ExportError> {
    let devices = collect_devices(stations);
    let json = serde_json::to_string_pretty(&devices)
        .map_err(|e| ExportError::render(DEVICE_MANIFEST_FILE, e))?;

    let path = context.top_level_file(DEVICE_MANIFEST_FILE);
    fs::write(&path, json).map_err(|e| ExportError::io(&path, e))?;
    info!(devices = devices.len(), path = %path.display(), "device manifest written");

    Ok(devices)
}
