//! Network service operations (EC2)
//!
//! Typed requests and responses for VPCs, subnets, internet gateways, NAT
//! gateways and availability zones, plus the transform functions that move
//! them across the dynamic boundary. Input transforms do not fail on missing
//! required fields; they return the empty request, and the remote call fails
//! instead. Response structs serialize with the upstream field casing so the
//! structural serializer emits the same keys the wire uses.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::aws::http::{AwsHttpClient, ClientConfig};
use crate::aws::types::{
    filter_params, filters_from_payload, tag_specification_params, tags_from_payload, Filter, Tag,
};
use crate::aws::xml;
use crate::serialize::ToDynamic;
use crate::value::Obj;

const SERVICE: &str = "ec2";

// =============================================================================
// Requests
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateVpcRequest {
    pub cidr_block: Option<String>,
    pub tags: Vec<Tag>,
}

impl CreateVpcRequest {
    fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(cidr) = &self.cidr_block {
            params.push(("CidrBlock".to_string(), cidr.clone()));
        }
        tag_specification_params("vpc", &self.tags, &mut params);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeVpcsRequest;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteVpcRequest {
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateSubnetRequest {
    pub vpc_id: Option<String>,
    pub cidr_block: Option<String>,
    pub availability_zone_id: Option<String>,
    pub tags: Vec<Tag>,
}

impl CreateSubnetRequest {
    fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(vpc_id) = &self.vpc_id {
            params.push(("VpcId".to_string(), vpc_id.clone()));
        }
        if let Some(cidr) = &self.cidr_block {
            params.push(("CidrBlock".to_string(), cidr.clone()));
        }
        if let Some(az) = &self.availability_zone_id {
            params.push(("AvailabilityZoneId".to_string(), az.clone()));
        }
        tag_specification_params("subnet", &self.tags, &mut params);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeSubnetsRequest {
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteSubnetRequest {
    pub subnet_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateInternetGatewayRequest {
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeInternetGatewaysRequest {
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteInternetGatewayRequest {
    pub internet_gateway_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateNatGatewayRequest {
    pub subnet_id: Option<String>,
    pub allocation_id: Option<String>,
    pub connectivity_type: Option<String>,
    pub tags: Vec<Tag>,
}

impl CreateNatGatewayRequest {
    fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(subnet_id) = &self.subnet_id {
            params.push(("SubnetId".to_string(), subnet_id.clone()));
        }
        if let Some(allocation_id) = &self.allocation_id {
            params.push(("AllocationId".to_string(), allocation_id.clone()));
        }
        if let Some(connectivity) = &self.connectivity_type {
            params.push(("ConnectivityType".to_string(), connectivity.clone()));
        }
        tag_specification_params("natgateway", &self.tags, &mut params);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeNatGatewaysRequest {
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteNatGatewayRequest {
    pub nat_gateway_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeAvailabilityZonesRequest;

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vpc {
    pub vpc_id: String,
    pub cidr_block: String,
    pub state: String,
    pub owner_id: String,
    pub is_default: bool,
    pub tags: Vec<Tag>,
}

impl Vpc {
    fn from_node(node: &Value) -> Self {
        Self {
            vpc_id: xml::text(node, "vpcId"),
            cidr_block: xml::text(node, "cidrBlock"),
            state: xml::text(node, "state"),
            owner_id: xml::text(node, "ownerId"),
            is_default: xml::flag(node, "isDefault"),
            tags: ec2_tags(node),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVpcResponse {
    pub vpc: Option<Vpc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcsResponse {
    pub vpcs: Vec<Vpc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteVpcResponse;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    pub subnet_id: String,
    pub vpc_id: String,
    pub cidr_block: String,
    pub state: String,
    pub availability_zone: String,
    pub availability_zone_id: String,
    pub available_ip_address_count: i64,
    pub map_public_ip_on_launch: bool,
    pub tags: Vec<Tag>,
}

impl Subnet {
    fn from_node(node: &Value) -> Self {
        Self {
            subnet_id: xml::text(node, "subnetId"),
            vpc_id: xml::text(node, "vpcId"),
            cidr_block: xml::text(node, "cidrBlock"),
            state: xml::text(node, "state"),
            availability_zone: xml::text(node, "availabilityZone"),
            availability_zone_id: xml::text(node, "availabilityZoneId"),
            available_ip_address_count: xml::int(node, "availableIpAddressCount"),
            map_public_ip_on_launch: xml::flag(node, "mapPublicIpOnLaunch"),
            tags: ec2_tags(node),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSubnetResponse {
    pub subnet: Option<Subnet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSubnetsResponse {
    pub subnets: Vec<Subnet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteSubnetResponse;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InternetGatewayAttachment {
    pub vpc_id: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InternetGateway {
    pub internet_gateway_id: String,
    pub owner_id: String,
    pub attachments: Vec<InternetGatewayAttachment>,
    pub tags: Vec<Tag>,
}

impl InternetGateway {
    fn from_node(node: &Value) -> Self {
        Self {
            internet_gateway_id: xml::text(node, "internetGatewayId"),
            owner_id: xml::text(node, "ownerId"),
            attachments: xml::list(node, "attachmentSet", "item")
                .into_iter()
                .map(|item| InternetGatewayAttachment {
                    vpc_id: xml::text(item, "vpcId"),
                    state: xml::text(item, "state"),
                })
                .collect(),
            tags: ec2_tags(node),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInternetGatewayResponse {
    pub internet_gateway: Option<InternetGateway>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInternetGatewaysResponse {
    pub internet_gateways: Vec<InternetGateway>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteInternetGatewayResponse;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NatGatewayAddress {
    pub allocation_id: String,
    pub network_interface_id: String,
    pub private_ip: String,
    pub public_ip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NatGateway {
    pub nat_gateway_id: String,
    pub subnet_id: String,
    pub vpc_id: String,
    pub state: String,
    pub connectivity_type: String,
    pub nat_gateway_addresses: Vec<NatGatewayAddress>,
    pub tags: Vec<Tag>,
}

impl NatGateway {
    fn from_node(node: &Value) -> Self {
        Self {
            nat_gateway_id: xml::text(node, "natGatewayId"),
            subnet_id: xml::text(node, "subnetId"),
            vpc_id: xml::text(node, "vpcId"),
            state: xml::text(node, "state"),
            connectivity_type: xml::text(node, "connectivityType"),
            nat_gateway_addresses: xml::list(node, "natGatewayAddressSet", "item")
                .into_iter()
                .map(|item| NatGatewayAddress {
                    allocation_id: xml::text(item, "allocationId"),
                    network_interface_id: xml::text(item, "networkInterfaceId"),
                    private_ip: xml::text(item, "privateIp"),
                    public_ip: xml::text(item, "publicIp"),
                })
                .collect(),
            tags: ec2_tags(node),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNatGatewayResponse {
    pub nat_gateway: Option<NatGateway>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNatGatewaysResponse {
    pub nat_gateways: Vec<NatGateway>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteNatGatewayResponse {
    pub nat_gateway_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailabilityZone {
    pub zone_name: String,
    pub zone_id: String,
    pub state: String,
    pub region_name: String,
    pub group_name: String,
    pub network_border_group: String,
}

impl AvailabilityZone {
    fn from_node(node: &Value) -> Self {
        Self {
            zone_name: xml::text(node, "zoneName"),
            zone_id: xml::text(node, "zoneId"),
            state: xml::text(node, "zoneState"),
            region_name: xml::text(node, "regionName"),
            group_name: xml::text(node, "groupName"),
            network_border_group: xml::text(node, "networkBorderGroup"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAvailabilityZonesResponse {
    pub availability_zones: Vec<AvailabilityZone>,
}

fn ec2_tags(node: &Value) -> Vec<Tag> {
    xml::list(node, "tagSet", "item")
        .into_iter()
        .map(Tag::from_ec2_node)
        .collect()
}

// =============================================================================
// Remote operations
// =============================================================================

async fn query(config: &ClientConfig, action: &str, params: Vec<(String, String)>) -> Result<Value> {
    debug!("ec2 operation: action={}", action);
    let client = AwsHttpClient::new(config);
    let body = client.query_request(SERVICE, action, &params).await?;
    xml::xml_to_json(&body)
}

pub(crate) async fn create_vpc(
    config: ClientConfig,
    request: CreateVpcRequest,
) -> Result<CreateVpcResponse> {
    let doc = query(&config, "CreateVpc", request.query_params()).await?;
    Ok(CreateVpcResponse {
        vpc: xml::child(&doc, &["CreateVpcResponse", "vpc"]).map(Vpc::from_node),
    })
}

pub(crate) async fn describe_vpcs(
    config: ClientConfig,
    _request: DescribeVpcsRequest,
) -> Result<DescribeVpcsResponse> {
    let doc = query(&config, "DescribeVpcs", Vec::new()).await?;
    let root = doc.get("DescribeVpcsResponse").unwrap_or(&Value::Null);
    Ok(DescribeVpcsResponse {
        vpcs: xml::list(root, "vpcSet", "item")
            .into_iter()
            .map(Vpc::from_node)
            .collect(),
    })
}

pub(crate) async fn delete_vpc(
    config: ClientConfig,
    request: DeleteVpcRequest,
) -> Result<DeleteVpcResponse> {
    let mut params = Vec::new();
    if let Some(vpc_id) = &request.vpc_id {
        params.push(("VpcId".to_string(), vpc_id.clone()));
    }
    query(&config, "DeleteVpc", params).await?;
    Ok(DeleteVpcResponse)
}

pub(crate) async fn create_subnet(
    config: ClientConfig,
    request: CreateSubnetRequest,
) -> Result<CreateSubnetResponse> {
    let doc = query(&config, "CreateSubnet", request.query_params()).await?;
    Ok(CreateSubnetResponse {
        subnet: xml::child(&doc, &["CreateSubnetResponse", "subnet"]).map(Subnet::from_node),
    })
}

pub(crate) async fn describe_subnets(
    config: ClientConfig,
    request: DescribeSubnetsRequest,
) -> Result<DescribeSubnetsResponse> {
    let mut params = Vec::new();
    filter_params(&request.filters, &mut params);
    let doc = query(&config, "DescribeSubnets", params).await?;
    let root = doc.get("DescribeSubnetsResponse").unwrap_or(&Value::Null);
    Ok(DescribeSubnetsResponse {
        subnets: xml::list(root, "subnetSet", "item")
            .into_iter()
            .map(Subnet::from_node)
            .collect(),
    })
}

pub(crate) async fn delete_subnet(
    config: ClientConfig,
    request: DeleteSubnetRequest,
) -> Result<DeleteSubnetResponse> {
    let mut params = Vec::new();
    if let Some(subnet_id) = &request.subnet_id {
        params.push(("SubnetId".to_string(), subnet_id.clone()));
    }
    query(&config, "DeleteSubnet", params).await?;
    Ok(DeleteSubnetResponse)
}

pub(crate) async fn create_internet_gateway(
    config: ClientConfig,
    request: CreateInternetGatewayRequest,
) -> Result<CreateInternetGatewayResponse> {
    let mut params = Vec::new();
    tag_specification_params("internet-gateway", &request.tags, &mut params);
    let doc = query(&config, "CreateInternetGateway", params).await?;
    Ok(CreateInternetGatewayResponse {
        internet_gateway: xml::child(&doc, &["CreateInternetGatewayResponse", "internetGateway"])
            .map(InternetGateway::from_node),
    })
}

pub(crate) async fn describe_internet_gateways(
    config: ClientConfig,
    request: DescribeInternetGatewaysRequest,
) -> Result<DescribeInternetGatewaysResponse> {
    let mut params = Vec::new();
    filter_params(&request.filters, &mut params);
    let doc = query(&config, "DescribeInternetGateways", params).await?;
    let root = doc
        .get("DescribeInternetGatewaysResponse")
        .unwrap_or(&Value::Null);
    Ok(DescribeInternetGatewaysResponse {
        internet_gateways: xml::list(root, "internetGatewaySet", "item")
            .into_iter()
            .map(InternetGateway::from_node)
            .collect(),
    })
}

pub(crate) async fn delete_internet_gateway(
    config: ClientConfig,
    request: DeleteInternetGatewayRequest,
) -> Result<DeleteInternetGatewayResponse> {
    let mut params = Vec::new();
    if let Some(id) = &request.internet_gateway_id {
        params.push(("InternetGatewayId".to_string(), id.clone()));
    }
    query(&config, "DeleteInternetGateway", params).await?;
    Ok(DeleteInternetGatewayResponse)
}

pub(crate) async fn create_nat_gateway(
    config: ClientConfig,
    request: CreateNatGatewayRequest,
) -> Result<CreateNatGatewayResponse> {
    let doc = query(&config, "CreateNatGateway", request.query_params()).await?;
    Ok(CreateNatGatewayResponse {
        nat_gateway: xml::child(&doc, &["CreateNatGatewayResponse", "natGateway"])
            .map(NatGateway::from_node),
    })
}

pub(crate) async fn describe_nat_gateways(
    config: ClientConfig,
    request: DescribeNatGatewaysRequest,
) -> Result<DescribeNatGatewaysResponse> {
    let mut params = Vec::new();
    filter_params(&request.filters, &mut params);
    let doc = query(&config, "DescribeNatGateways", params).await?;
    let root = doc
        .get("DescribeNatGatewaysResponse")
        .unwrap_or(&Value::Null);
    Ok(DescribeNatGatewaysResponse {
        nat_gateways: xml::list(root, "natGatewaySet", "item")
            .into_iter()
            .map(NatGateway::from_node)
            .collect(),
    })
}

pub(crate) async fn delete_nat_gateway(
    config: ClientConfig,
    request: DeleteNatGatewayRequest,
) -> Result<DeleteNatGatewayResponse> {
    let mut params = Vec::new();
    if let Some(id) = &request.nat_gateway_id {
        params.push(("NatGatewayId".to_string(), id.clone()));
    }
    let doc = query(&config, "DeleteNatGateway", params).await?;
    let root = doc.get("DeleteNatGatewayResponse").unwrap_or(&Value::Null);
    Ok(DeleteNatGatewayResponse {
        nat_gateway_id: xml::text(root, "natGatewayId"),
    })
}

pub(crate) async fn describe_availability_zones(
    config: ClientConfig,
    _request: DescribeAvailabilityZonesRequest,
) -> Result<DescribeAvailabilityZonesResponse> {
    let doc = query(&config, "DescribeAvailabilityZones", Vec::new()).await?;
    let root = doc
        .get("DescribeAvailabilityZonesResponse")
        .unwrap_or(&Value::Null);
    Ok(DescribeAvailabilityZonesResponse {
        availability_zones: xml::list(root, "availabilityZoneInfo", "item")
            .into_iter()
            .map(AvailabilityZone::from_node)
            .collect(),
    })
}

// =============================================================================
// Transform functions
//
// Input transforms return the empty request when required fields are missing;
// the remote call then rejects the empty request.
// =============================================================================

pub(crate) fn to_create_vpc_request(payload: &Obj) -> CreateVpcRequest {
    let cidr = payload.get_string("cidr");
    if cidr.is_empty() {
        return CreateVpcRequest::default();
    }
    CreateVpcRequest {
        cidr_block: Some(cidr.to_string()),
        tags: tags_from_payload(payload),
    }
}

pub(crate) fn from_create_vpc_response(response: CreateVpcResponse) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_describe_vpcs_request(_payload: &Obj) -> DescribeVpcsRequest {
    DescribeVpcsRequest
}

pub(crate) fn from_describe_vpcs_response(response: DescribeVpcsResponse) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_delete_vpc_request(payload: &Obj) -> DeleteVpcRequest {
    let vpc_id = payload.get_string("vpc_id");
    if vpc_id.is_empty() {
        return DeleteVpcRequest::default();
    }
    DeleteVpcRequest {
        vpc_id: Some(vpc_id.to_string()),
    }
}

pub(crate) fn from_delete_vpc_response(response: DeleteVpcResponse) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_create_subnet_request(payload: &Obj) -> CreateSubnetRequest {
    let cidr = payload.get_string("cidr");
    let vpc_id = payload.get_string("vpc_id");
    if cidr.is_empty() || vpc_id.is_empty() {
        return CreateSubnetRequest::default();
    }

    let az = payload.get_string("availability_zone_id");
    CreateSubnetRequest {
        vpc_id: Some(vpc_id.to_string()),
        cidr_block: Some(cidr.to_string()),
        availability_zone_id: (!az.is_empty()).then(|| az.to_string()),
        tags: tags_from_payload(payload),
    }
}

pub(crate) fn from_create_subnet_response(response: CreateSubnetResponse) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_describe_subnets_request(payload: &Obj) -> DescribeSubnetsRequest {
    DescribeSubnetsRequest {
        filters: filters_from_payload(payload),
    }
}

pub(crate) fn from_describe_subnets_response(response: DescribeSubnetsResponse) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_delete_subnet_request(payload: &Obj) -> DeleteSubnetRequest {
    let subnet_id = payload.get_string("subnet_id");
    if subnet_id.is_empty() {
        return DeleteSubnetRequest::default();
    }
    DeleteSubnetRequest {
        subnet_id: Some(subnet_id.to_string()),
    }
}

pub(crate) fn from_delete_subnet_response(response: DeleteSubnetResponse) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_create_internet_gateway_request(payload: &Obj) -> CreateInternetGatewayRequest {
    CreateInternetGatewayRequest {
        tags: tags_from_payload(payload),
    }
}

pub(crate) fn from_create_internet_gateway_response(
    response: CreateInternetGatewayResponse,
) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_describe_internet_gateways_request(
    payload: &Obj,
) -> DescribeInternetGatewaysRequest {
    DescribeInternetGatewaysRequest {
        filters: filters_from_payload(payload),
    }
}

pub(crate) fn from_describe_internet_gateways_response(
    response: DescribeInternetGatewaysResponse,
) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_delete_internet_gateway_request(payload: &Obj) -> DeleteInternetGatewayRequest {
    let id = payload.get_string("gateway_id");
    if id.is_empty() {
        return DeleteInternetGatewayRequest::default();
    }
    DeleteInternetGatewayRequest {
        internet_gateway_id: Some(id.to_string()),
    }
}

pub(crate) fn from_delete_internet_gateway_response(
    response: DeleteInternetGatewayResponse,
) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_create_nat_gateway_request(payload: &Obj) -> CreateNatGatewayRequest {
    let subnet_id = payload.get_string("subnet_id");
    if subnet_id.is_empty() {
        return CreateNatGatewayRequest::default();
    }

    let allocation_id = payload.get_string("allocation_id");
    let connectivity = payload.get_string("connectivity_type");
    CreateNatGatewayRequest {
        subnet_id: Some(subnet_id.to_string()),
        allocation_id: (!allocation_id.is_empty()).then(|| allocation_id.to_string()),
        connectivity_type: (!connectivity.is_empty()).then(|| connectivity.to_string()),
        tags: tags_from_payload(payload),
    }
}

pub(crate) fn from_create_nat_gateway_response(response: CreateNatGatewayResponse) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_describe_nat_gateways_request(payload: &Obj) -> DescribeNatGatewaysRequest {
    DescribeNatGatewaysRequest {
        filters: filters_from_payload(payload),
    }
}

pub(crate) fn from_describe_nat_gateways_response(response: DescribeNatGatewaysResponse) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_delete_nat_gateway_request(payload: &Obj) -> DeleteNatGatewayRequest {
    let id = payload.get_string("nat_gateway_id");
    if id.is_empty() {
        return DeleteNatGatewayRequest::default();
    }
    DeleteNatGatewayRequest {
        nat_gateway_id: Some(id.to_string()),
    }
}

pub(crate) fn from_delete_nat_gateway_response(response: DeleteNatGatewayResponse) -> Obj {
    response.to_dynamic()
}

pub(crate) fn to_describe_availability_zones_request(
    _payload: &Obj,
) -> DescribeAvailabilityZonesRequest {
    DescribeAvailabilityZonesRequest
}

pub(crate) fn from_describe_availability_zones_response(
    response: DescribeAvailabilityZonesResponse,
) -> Obj {
    response.to_dynamic()
}
