//! Minimal SNMP manager demo: sends a single GetRequest to an agent and
//! prints whatever varbinds come back.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use snmp_endpoint::ber::Value;
use snmp_endpoint::config::Role;
use snmp_endpoint::endpoint::Endpoint;
use snmp_endpoint::message::{random_request_id, Message, PduKind};
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let target: Ipv4Addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1".to_string())
        .parse()?;
    let target_port: u16 = std::env::args().nth(2).unwrap_or_else(|| "1610".to_string()).parse()?;

    let manager = Endpoint::new(Role::Manager);
    manager.initialize(Ipv4Addr::UNSPECIFIED, 0).await?;

    let done = Arc::new(Notify::new());
    let done2 = done.clone();
    manager.on_message(move |msg, ip, _port| {
        tracing::info!(%ip, request_id = msg.request_id(), "response received");
        for vb in msg.varbind_list() {
            println!("{} = {:?}", vb.name, vb.value);
        }
        done2.notify_one();
    });
    manager.on_error(|e| tracing::warn!(error = %e, "manager error"));
    manager.start();

    let mut request = Message::new(1, "public", PduKind::GetRequest)?;
    request.set_request_id(random_request_id());
    request.add("1.3.6.1.2.1.1.1.0".parse().unwrap(), Value::Null);
    manager.send(&request, target, target_port).await;

    let _ = tokio::time::timeout(Duration::from_secs(3), done.notified()).await;
    manager.stop();
    Ok(())
}
