//! Compute instance collection (Compute Engine v1 aggregated list)

mod api;
mod models;

pub use models::{
    AccessConfig, AggregatedInstancesResponse, Instance, InstancesScopedList, NetworkInterface,
    Tags,
};
