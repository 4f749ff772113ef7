//! Minimal SNMP agent demo: answers GetRequest for a couple of hardcoded
//! OIDs and ignores everything else. Not part of the library's public
//! API surface - MIB storage and request policy are external
//! collaborators per the crate's scope.

use std::net::Ipv4Addr;

use snmp_endpoint::ber::Value;
use snmp_endpoint::config::Role;
use snmp_endpoint::endpoint::Endpoint;
use snmp_endpoint::message::{error_status, Message, PduKind};
use tracing_subscriber::EnvFilter;

const SYS_DESCR: &str = "1.3.6.1.2.1.1.1.0";
const SYS_NAME: &str = "1.3.6.1.2.1.1.5.0";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let agent = Endpoint::new(Role::Agent);
    agent.initialize(Ipv4Addr::UNSPECIFIED, 1610).await?;

    let reply_endpoint = agent.clone();
    agent.on_message(move |msg, ip, port| {
        if msg.pdu_type() != snmp_endpoint::ber::Tag::PDU_GET_REQUEST {
            return;
        }
        let mut response = match Message::new(msg.version(), msg.community(), PduKind::GetResponse) {
            Ok(m) => m,
            Err(_) => return,
        };
        response.set_request_id(msg.request_id());

        for vb in msg.varbind_list() {
            let oid_str = vb.name.to_string();
            let value = match oid_str.as_str() {
                SYS_DESCR => Value::OctetString(b"snmp-endpoint demo agent".to_vec()),
                SYS_NAME => Value::OctetString(b"demo-agent-1".to_vec()),
                _ => Value::NoSuchObject,
            };
            response.add(vb.name.clone(), value);
        }
        if msg.varbind_list().is_empty() {
            response.set_error(error_status::NO_ERROR, 0);
        }

        let reply_endpoint = reply_endpoint.clone();
        tokio::spawn(async move {
            reply_endpoint.send(&response, ip, port).await;
        });
    });
    agent.on_error(|e| tracing::warn!(error = %e, "agent error"));

    agent.start();
    tracing::info!("demo agent listening on UDP/1610");
    tokio::signal::ctrl_c().await?;
    agent.stop();
    Ok(())
}
