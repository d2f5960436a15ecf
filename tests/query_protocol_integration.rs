//! Integration tests for the AWS Query protocol wire format using wiremock
//!
//! These tests pin down the wire-level behavior the client code relies on:
//! Action/Version query parameters, POST with an empty body, XML response
//! bodies, and error responses with an XML error document.

use quick_xml::events::Event;
use quick_xml::Reader;
use wiremock::matchers::{body_bytes, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Extract the text of the first occurrence of a tag from an XML document.
fn first_tag_text(xml: &str, tag: &str) -> Option<String> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut inside = false;
    loop {
        match reader.read_event_into(&mut buf).ok()? {
            Event::Start(e) if e.name().as_ref() == tag.as_bytes() => inside = true,
            Event::Text(e) if inside => return Some(e.unescape().ok()?.to_string()),
            Event::End(e) if e.name().as_ref() == tag.as_bytes() => inside = false,
            Event::Eof => return None,
            _ => {}
        }
        buf.clear();
    }
}

/// Collect the text of every occurrence of a tag from an XML document.
fn all_tag_texts(xml: &str, tag: &str) -> Vec<String> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut inside = false;
    let mut texts = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == tag.as_bytes() => inside = true,
            Ok(Event::Text(e)) if inside => {
                if let Ok(text) = e.unescape() {
                    texts.push(text.to_string());
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == tag.as_bytes() => inside = false,
            Ok(Event::Eof) | Err(_) => return texts,
            _ => {}
        }
        buf.clear();
    }
}

mod query_protocol_tests {
    use super::*;

    /// A create call is a POST with Action/Version in the query string and an
    /// empty body; the response is an XML document.
    #[tokio::test]
    async fn test_create_call_posts_action_and_version() {
        let server = MockServer::start().await;

        let response_xml = "<CreateVpcResponse>\
                              <requestId>req-1</requestId>\
                              <vpc>\
                                <vpcId>vpc-0abc</vpcId>\
                                <state>pending</state>\
                                <cidrBlock>10.0.0.0/16</cidrBlock>\
                              </vpc>\
                            </CreateVpcResponse>";

        Mock::given(method("POST"))
            .and(query_param("Action", "CreateVpc"))
            .and(query_param("Version", "2016-11-15"))
            .and(query_param("CidrBlock", "10.0.0.0/16"))
            .and(body_bytes(Vec::new()))
            .respond_with(ResponseTemplate::new(200).set_body_string(response_xml))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!(
            "{}/?Action=CreateVpc&Version=2016-11-15&CidrBlock=10.0.0.0%2F16",
            server.uri()
        );
        let response = client.post(&url).send().await.unwrap();

        assert_eq!(response.status(), 200);
        let body = response.text().await.unwrap();
        assert_eq!(first_tag_text(&body, "vpcId").as_deref(), Some("vpc-0abc"));
        assert_eq!(first_tag_text(&body, "state").as_deref(), Some("pending"));
    }

    /// List responses carry repeated collection elements.
    #[tokio::test]
    async fn test_list_response_repeats_member_elements() {
        let server = MockServer::start().await;

        let response_xml = "<ListUsersResponse>\
                              <ListUsersResult>\
                                <Users>\
                                  <member><UserName>alice</UserName></member>\
                                  <member><UserName>bob</UserName></member>\
                                </Users>\
                                <IsTruncated>false</IsTruncated>\
                              </ListUsersResult>\
                            </ListUsersResponse>";

        Mock::given(method("POST"))
            .and(query_param("Action", "ListUsers"))
            .and(query_param("Version", "2010-05-08"))
            .respond_with(ResponseTemplate::new(200).set_body_string(response_xml))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/?Action=ListUsers&Version=2010-05-08", server.uri());
        let body = client.post(&url).send().await.unwrap().text().await.unwrap();

        assert_eq!(all_tag_texts(&body, "UserName"), ["alice", "bob"]);
    }

    /// Failed calls return a non-2xx status with an XML error document whose
    /// body carries the service error code and message.
    #[tokio::test]
    async fn test_error_response_carries_xml_error_document() {
        let server = MockServer::start().await;

        let error_xml = "<Response>\
                           <Errors>\
                             <Error>\
                               <Code>VpcLimitExceeded</Code>\
                               <Message>The maximum number of VPCs has been reached.</Message>\
                             </Error>\
                           </Errors>\
                           <RequestID>req-2</RequestID>\
                         </Response>";

        Mock::given(method("POST"))
            .and(query_param("Action", "CreateVpc"))
            .respond_with(ResponseTemplate::new(400).set_body_string(error_xml))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/?Action=CreateVpc&Version=2016-11-15", server.uri());
        let response = client.post(&url).send().await.unwrap();

        assert_eq!(response.status(), 400);
        let body = response.text().await.unwrap();
        assert_eq!(
            first_tag_text(&body, "Code").as_deref(),
            Some("VpcLimitExceeded")
        );
    }

    /// Flattened list parameters keep their numbered names through URL
    /// encoding.
    #[tokio::test]
    async fn test_flattened_parameters_survive_url_encoding() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(query_param("Action", "DescribeSubnets"))
            .and(query_param("Filter.1.Name", "vpc-id"))
            .and(query_param("Filter.1.Value.1", "vpc-0abc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(
                    "<DescribeSubnetsResponse><subnetSet/></DescribeSubnetsResponse>",
                ),
            )
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!(
            "{}/?Action=DescribeSubnets&Version=2016-11-15&Filter.1.Name=vpc-id&Filter.1.Value.1=vpc-0abc",
            server.uri()
        );
        let response = client.post(&url).send().await.unwrap();
        assert_eq!(response.status(), 200);
    }

    /// Unauthorized requests fail with 403; the body still parses as XML.
    #[tokio::test]
    async fn test_unauthorized_request_is_403() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string(
                "<ErrorResponse>\
                   <Error><Code>SignatureDoesNotMatch</Code></Error>\
                 </ErrorResponse>",
            ))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/?Action=ListUsers&Version=2010-05-08", server.uri());
        let response = client.post(&url).send().await.unwrap();

        assert_eq!(response.status(), 403);
        let body = response.text().await.unwrap();
        assert_eq!(
            first_tag_text(&body, "Code").as_deref(),
            Some("SignatureDoesNotMatch")
        );
    }
}
