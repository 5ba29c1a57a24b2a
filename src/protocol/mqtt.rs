// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MQTT transport for the Z-Wave JS UI gateway.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Global counter for generating unique client IDs.
static CLIENT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

use rumqttc::{AsyncClient, EventLoop, MqttOptions, QoS};

use crate::command::SetValueCommand;
use crate::error::TransportError;

use super::Transport;

/// Default topic prefix of the gateway.
const DEFAULT_PREFIX: &str = "zwave";

/// Default gateway name.
const DEFAULT_GATEWAY_NAME: &str = "zwave-js-ui";

/// Sends set-value commands through the gateway's `writeValue` API.
///
/// Commands are published to
/// `<prefix>/_CLIENTS/ZWAVE_GATEWAY-<name>/api/writeValue/set`. The gateway
/// answers on the same topic without `/set`; answers are only logged.
///
/// # Examples
///
/// ```ignore
/// use zwave_light::protocol::MqttTransportBuilder;
///
/// let transport = MqttTransportBuilder::new()
///     .broker("mqtt://192.168.1.50:1883")
///     .gateway_name("zwave-js-ui")
///     .credentials("mqtt_user", "mqtt_password")
///     .build()
///     .await?;
/// ```
#[derive(Debug)]
pub struct MqttTransport {
    client: AsyncClient,
    api_topic: String,
}

impl MqttTransport {
    /// Connects to a broker with the default prefix and gateway name.
    ///
    /// # Errors
    ///
    /// Returns error if the URL is invalid or the subscription fails.
    pub async fn connect(broker_url: impl Into<String>) -> Result<Self, TransportError> {
        MqttTransportBuilder::new().broker(broker_url).build().await
    }

    /// Returns the topic commands are published to.
    #[must_use]
    pub fn api_topic(&self) -> &str {
        &self.api_topic
    }
}

impl Transport for MqttTransport {
    async fn send(&self, command: &SetValueCommand) -> Result<(), TransportError> {
        let payload = write_value_payload(command)?.to_string();

        tracing::debug!(
            topic = %self.api_topic,
            node_id = command.node_id,
            value_id = %command.value_id,
            payload = %payload,
            "Publishing writeValue"
        );

        self.client
            .publish(&self.api_topic, QoS::AtLeastOnce, false, payload)
            .await
            .map_err(TransportError::Mqtt)
    }
}

/// Builds the gateway `writeValue` request body for a command.
///
/// `{"args": [{nodeId, commandClass, endpoint, property, propertyKey?}, value, options?]}`
///
/// # Errors
///
/// Returns the serializer error if the command cannot be encoded.
pub fn write_value_payload(command: &SetValueCommand) -> Result<serde_json::Value, TransportError> {
    let mut args = vec![
        serde_json::to_value(command.value_id_args(true))?,
        serde_json::to_value(&command.value)?,
    ];
    if let Some(options) = &command.options {
        args.push(serde_json::to_value(options)?);
    }
    Ok(serde_json::json!({ "args": args }))
}

/// Parses an MQTT URL into host and port.
fn parse_mqtt_url(url: &str) -> Result<(String, u16), TransportError> {
    let url = url
        .strip_prefix("mqtt://")
        .or_else(|| url.strip_prefix("tcp://"))
        .unwrap_or(url);

    let (host, port) = if let Some((h, p)) = url.rsplit_once(':') {
        let port = p
            .parse()
            .map_err(|_| TransportError::InvalidAddress(format!("Invalid port: {p}")))?;
        (h.to_string(), port)
    } else {
        (url.to_string(), 1883)
    };

    if host.is_empty() {
        return Err(TransportError::InvalidAddress("empty host".to_string()));
    }

    Ok((host, port))
}

/// Drives the MQTT connection and logs gateway answers.
async fn handle_mqtt_events(mut event_loop: EventLoop, response_topic: String) {
    use rumqttc::{Event, Packet};

    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(connack))) => {
                tracing::debug!(?connack, "MQTT connected");
            }
            Ok(Event::Incoming(Packet::SubAck(suback))) => {
                tracing::debug!(?suback, "MQTT subscription acknowledged");
            }
            Ok(Event::Incoming(Packet::Publish(publish))) if publish.topic == response_topic => {
                log_gateway_answer(&publish.payload);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "MQTT event loop error");
                break;
            }
        }
    }
}

fn log_gateway_answer(payload: &[u8]) {
    match serde_json::from_slice::<serde_json::Value>(payload) {
        Ok(answer) if answer.get("success").and_then(serde_json::Value::as_bool) == Some(false) => {
            tracing::warn!(
                reason = %answer.get("message").unwrap_or(&serde_json::Value::Null),
                "Gateway rejected writeValue"
            );
        }
        Ok(answer) => tracing::debug!(answer = %answer, "Gateway answered writeValue"),
        Err(e) => tracing::warn!(error = %e, "Unreadable gateway answer"),
    }
}

/// Builder for an [`MqttTransport`].
#[derive(Debug, Default)]
pub struct MqttTransportBuilder {
    broker: Option<String>,
    prefix: Option<String>,
    gateway_name: Option<String>,
    username: Option<String>,
    password: Option<String>,
    client_id: Option<String>,
    keep_alive: Option<Duration>,
}

impl MqttTransportBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the MQTT broker URL.
    #[must_use]
    pub fn broker(mut self, broker: impl Into<String>) -> Self {
        self.broker = Some(broker.into());
        self
    }

    /// Sets the gateway topic prefix (default `zwave`).
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the gateway name (default `zwave-js-ui`).
    #[must_use]
    pub fn gateway_name(mut self, name: impl Into<String>) -> Self {
        self.gateway_name = Some(name.into());
        self
    }

    /// Sets authentication credentials for the MQTT broker.
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Sets a custom client ID.
    #[must_use]
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Sets the keep-alive interval.
    #[must_use]
    pub fn keep_alive(mut self, duration: Duration) -> Self {
        self.keep_alive = Some(duration);
        self
    }

    /// Returns the `writeValue` topic the built transport will use.
    #[must_use]
    pub fn api_topic(&self) -> String {
        format!(
            "{}/_CLIENTS/ZWAVE_GATEWAY-{}/api/writeValue/set",
            self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX),
            self.gateway_name.as_deref().unwrap_or(DEFAULT_GATEWAY_NAME)
        )
    }

    /// Builds and connects the transport.
    ///
    /// # Errors
    ///
    /// Returns error if the broker is missing or invalid, or the
    /// subscription to gateway answers fails.
    pub async fn build(self) -> Result<MqttTransport, TransportError> {
        let api_topic = self.api_topic();
        let broker = self
            .broker
            .ok_or_else(|| TransportError::InvalidAddress("broker is required".to_string()))?;

        let (host, port) = parse_mqtt_url(&broker)?;

        // PID + counter keeps ids unique across processes and instances
        let client_id = self.client_id.unwrap_or_else(|| {
            let counter = CLIENT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
            format!("zwave_light_{}_{}", std::process::id(), counter)
        });

        let mut mqtt_options = MqttOptions::new(&client_id, host, port);
        mqtt_options.set_keep_alive(self.keep_alive.unwrap_or(Duration::from_secs(30)));
        mqtt_options.set_clean_session(true);

        if let (Some(username), Some(password)) = (self.username, self.password) {
            mqtt_options.set_credentials(username, password);
        }

        let (client, event_loop) = AsyncClient::new(mqtt_options, 10);

        let response_topic = api_topic
            .strip_suffix("/set")
            .unwrap_or(&api_topic)
            .to_string();
        client
            .subscribe(&response_topic, QoS::AtLeastOnce)
            .await
            .map_err(TransportError::Mqtt)?;

        tokio::spawn(handle_mqtt_events(event_loop, response_topic));

        tracing::debug!(client_id = %client_id, topic = %api_topic, "MQTT transport ready");

        Ok(MqttTransport { client, api_topic })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandValue, SetValueOptions};
    use crate::types::TransitionDuration;
    use crate::value::{CommandClass, ValueId, ValueMetadata, ValueType};
    use serde_json::json;

    #[test]
    fn parse_mqtt_url_with_port() {
        let (host, port) = parse_mqtt_url("mqtt://192.168.1.50:1883").unwrap();
        assert_eq!(host, "192.168.1.50");
        assert_eq!(port, 1883);
    }

    #[test]
    fn parse_mqtt_url_default_port() {
        let (host, port) = parse_mqtt_url("broker.local").unwrap();
        assert_eq!(host, "broker.local");
        assert_eq!(port, 1883);
    }

    #[test]
    fn parse_mqtt_url_rejects_bad_input() {
        assert!(matches!(
            parse_mqtt_url("tcp://broker:abc"),
            Err(TransportError::InvalidAddress(_))
        ));
        assert!(matches!(
            parse_mqtt_url("mqtt://:1883"),
            Err(TransportError::InvalidAddress(_))
        ));
    }

    #[test]
    fn api_topic_defaults_and_overrides() {
        assert_eq!(
            MqttTransportBuilder::new().api_topic(),
            "zwave/_CLIENTS/ZWAVE_GATEWAY-zwave-js-ui/api/writeValue/set"
        );
        assert_eq!(
            MqttTransportBuilder::new()
                .prefix("home")
                .gateway_name("attic")
                .api_topic(),
            "home/_CLIENTS/ZWAVE_GATEWAY-attic/api/writeValue/set"
        );
    }

    #[tokio::test]
    async fn build_requires_broker() {
        let result = MqttTransportBuilder::new().build().await;
        assert!(matches!(result, Err(TransportError::InvalidAddress(_))));
    }

    #[test]
    fn write_value_payload_shape() {
        let target = ValueId::new(
            CommandClass::SWITCH_MULTILEVEL,
            1,
            "targetValue",
            ValueMetadata::new(ValueType::Number).with_bounds(0, 99),
        );
        let command = SetValueCommand::new(94, target, CommandValue::Level(255))
            .with_options(SetValueOptions::transition(TransitionDuration::Seconds(10)));

        assert_eq!(
            write_value_payload(&command).unwrap(),
            json!({"args": [
                {"nodeId": 94, "commandClass": 38, "endpoint": 1, "property": "targetValue"},
                255,
                {"transitionDuration": "10s"}
            ]})
        );
    }

    #[test]
    fn write_value_payload_without_options() {
        let target = ValueId::new(
            CommandClass::SWITCH_BINARY,
            0,
            "targetValue",
            ValueMetadata::new(ValueType::Boolean),
        );
        let command = SetValueCommand::new(2, target, CommandValue::Switch(false));
        let payload = write_value_payload(&command).unwrap();
        assert_eq!(payload["args"].as_array().unwrap().len(), 2);
    }
}
