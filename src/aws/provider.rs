//! Resource dispatch
//!
//! [`AwsProvider`] maps (resource kind, verb) pairs onto bound operations.
//! All operations are registered once at construction, one table per verb, so
//! dispatch is a single lookup and the set of supported pairs is fixed for
//! the provider's lifetime. A miss means the pair was never registered and is
//! reported as an unknown resource for that verb.

use std::collections::HashMap;
use std::fmt;

use anyhow::{bail, Result};
use tracing::debug;

use crate::aws::http::ClientConfig;
use crate::aws::op::{Callable, Operation};
use crate::aws::resource;
use crate::aws::{ec2, iam};
use crate::value::Obj;

/// The three operations a script can request on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Create,
    List,
    Delete,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verb::Create => "create",
            Verb::List => "list",
            Verb::Delete => "delete",
        })
    }
}

/// Cloud operations keyed by resource kind.
pub struct AwsProvider {
    create: HashMap<&'static str, Callable>,
    list: HashMap<&'static str, Callable>,
    delete: HashMap<&'static str, Callable>,
}

impl AwsProvider {
    /// Build the dispatch tables, binding every operation to `config`.
    pub fn new(config: &ClientConfig) -> Self {
        let mut create: HashMap<&'static str, Callable> = HashMap::new();
        let mut list: HashMap<&'static str, Callable> = HashMap::new();
        let mut delete: HashMap<&'static str, Callable> = HashMap::new();

        create.insert(
            resource::IDENTITY_USER,
            Operation {
                decode: iam::to_create_user_request,
                call: iam::create_user,
                encode: iam::from_create_user_response,
            }
            .bind(config),
        );
        list.insert(
            resource::IDENTITY_USER,
            Operation {
                decode: iam::to_list_users_request,
                call: iam::list_users,
                encode: iam::from_list_users_response,
            }
            .bind(config),
        );
        delete.insert(
            resource::IDENTITY_USER,
            Operation {
                decode: iam::to_delete_user_request,
                call: iam::delete_user,
                encode: iam::from_delete_user_response,
            }
            .bind(config),
        );

        create.insert(
            resource::ACCESS_CREDENTIAL,
            Operation {
                decode: iam::to_create_access_key_request,
                call: iam::create_access_key,
                encode: iam::from_create_access_key_response,
            }
            .bind(config),
        );
        list.insert(
            resource::ACCESS_CREDENTIAL,
            Operation {
                decode: iam::to_list_access_keys_request,
                call: iam::list_access_keys,
                encode: iam::from_list_access_keys_response,
            }
            .bind(config),
        );
        delete.insert(
            resource::ACCESS_CREDENTIAL,
            Operation {
                decode: iam::to_delete_access_key_request,
                call: iam::delete_access_key,
                encode: iam::from_delete_access_key_response,
            }
            .bind(config),
        );

        create.insert(
            resource::NETWORK,
            Operation {
                decode: ec2::to_create_vpc_request,
                call: ec2::create_vpc,
                encode: ec2::from_create_vpc_response,
            }
            .bind(config),
        );
        list.insert(
            resource::NETWORK,
            Operation {
                decode: ec2::to_describe_vpcs_request,
                call: ec2::describe_vpcs,
                encode: ec2::from_describe_vpcs_response,
            }
            .bind(config),
        );
        delete.insert(
            resource::NETWORK,
            Operation {
                decode: ec2::to_delete_vpc_request,
                call: ec2::delete_vpc,
                encode: ec2::from_delete_vpc_response,
            }
            .bind(config),
        );

        create.insert(
            resource::SUBNET,
            Operation {
                decode: ec2::to_create_subnet_request,
                call: ec2::create_subnet,
                encode: ec2::from_create_subnet_response,
            }
            .bind(config),
        );
        list.insert(
            resource::SUBNET,
            Operation {
                decode: ec2::to_describe_subnets_request,
                call: ec2::describe_subnets,
                encode: ec2::from_describe_subnets_response,
            }
            .bind(config),
        );
        delete.insert(
            resource::SUBNET,
            Operation {
                decode: ec2::to_delete_subnet_request,
                call: ec2::delete_subnet,
                encode: ec2::from_delete_subnet_response,
            }
            .bind(config),
        );

        create.insert(
            resource::GATEWAY,
            Operation {
                decode: ec2::to_create_internet_gateway_request,
                call: ec2::create_internet_gateway,
                encode: ec2::from_create_internet_gateway_response,
            }
            .bind(config),
        );
        list.insert(
            resource::GATEWAY,
            Operation {
                decode: ec2::to_describe_internet_gateways_request,
                call: ec2::describe_internet_gateways,
                encode: ec2::from_describe_internet_gateways_response,
            }
            .bind(config),
        );
        delete.insert(
            resource::GATEWAY,
            Operation {
                decode: ec2::to_delete_internet_gateway_request,
                call: ec2::delete_internet_gateway,
                encode: ec2::from_delete_internet_gateway_response,
            }
            .bind(config),
        );

        create.insert(
            resource::NAT_GATEWAY,
            Operation {
                decode: ec2::to_create_nat_gateway_request,
                call: ec2::create_nat_gateway,
                encode: ec2::from_create_nat_gateway_response,
            }
            .bind(config),
        );
        list.insert(
            resource::NAT_GATEWAY,
            Operation {
                decode: ec2::to_describe_nat_gateways_request,
                call: ec2::describe_nat_gateways,
                encode: ec2::from_describe_nat_gateways_response,
            }
            .bind(config),
        );
        delete.insert(
            resource::NAT_GATEWAY,
            Operation {
                decode: ec2::to_delete_nat_gateway_request,
                call: ec2::delete_nat_gateway,
                encode: ec2::from_delete_nat_gateway_response,
            }
            .bind(config),
        );

        // Availability zones are read-only.
        list.insert(
            resource::AVAILABILITY_ZONE,
            Operation {
                decode: ec2::to_describe_availability_zones_request,
                call: ec2::describe_availability_zones,
                encode: ec2::from_describe_availability_zones_response,
            }
            .bind(config),
        );

        Self { create, list, delete }
    }

    /// Create a resource of the given kind.
    pub async fn create(&self, resource: &str, payload: Obj) -> Result<Obj> {
        self.dispatch(Verb::Create, resource, payload).await
    }

    /// List resources of the given kind.
    pub async fn list(&self, resource: &str, payload: Obj) -> Result<Obj> {
        self.dispatch(Verb::List, resource, payload).await
    }

    /// Delete a resource of the given kind.
    pub async fn delete(&self, resource: &str, payload: Obj) -> Result<Obj> {
        self.dispatch(Verb::Delete, resource, payload).await
    }

    async fn dispatch(&self, verb: Verb, resource: &str, payload: Obj) -> Result<Obj> {
        debug!("dispatch: verb={}, resource={}", verb, resource);
        let table = match verb {
            Verb::Create => &self.create,
            Verb::List => &self.list,
            Verb::Delete => &self.delete,
        };
        let Some(op) = table.get(resource) else {
            bail!("unknown resource {:?} for verb {}", resource, verb);
        };
        op(payload).await
    }
}
