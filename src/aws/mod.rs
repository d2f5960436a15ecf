//! AWS interaction module
//!
//! Everything needed to turn a `(resource kind, verb, payload)` triple from a
//! script into one signed AWS API call and a dynamic result.
//!
//! # Module Structure
//!
//! - [`http`] - SigV4-signed Query protocol requests over a per-call client
//! - [`xml`] - Query protocol XML responses parsed into JSON values
//! - [`op`] - typed operation composition erased into uniform callables
//! - [`provider`] - the (verb, resource kind) dispatch tables
//! - [`ec2`] - network service operations (VPCs, subnets, gateways)
//! - [`iam`] - identity service operations (users, access keys)
//! - [`types`] - wire types shared by both services
//!
//! # Example
//!
//! ```ignore
//! use crate::aws::http::ClientConfig;
//! use crate::aws::provider::AwsProvider;
//!
//! async fn example(config: ClientConfig) -> anyhow::Result<()> {
//!     let provider = AwsProvider::new(&config);
//!     let vpcs = provider.list(crate::aws::resource::NETWORK, Default::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod ec2;
pub mod http;
pub mod iam;
pub mod op;
pub mod provider;
pub mod types;
pub mod xml;

/// Resource kind constants. Stable, process-wide tags used as dispatch keys;
/// never validated beyond table membership.
pub mod resource {
    pub const IDENTITY_USER: &str = "identity-user";
    pub const ACCESS_CREDENTIAL: &str = "access-credential";
    pub const NETWORK: &str = "network";
    pub const SUBNET: &str = "subnet";
    pub const GATEWAY: &str = "gateway";
    pub const NAT_GATEWAY: &str = "nat-gateway";
    pub const AVAILABILITY_ZONE: &str = "availability-zone";
}
