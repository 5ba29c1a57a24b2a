// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory transport.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::command::SetValueCommand;
use crate::error::TransportError;
use crate::value::CommandClass;

use super::Transport;

/// A transport that records commands instead of sending them.
///
/// Clones share the same record, so a test can keep one handle and give
/// another to a [`Light`](crate::Light).
///
/// # Examples
///
/// ```
/// use zwave_light::protocol::{MemoryTransport, Transport};
/// use zwave_light::command::{CommandValue, SetValueCommand};
/// use zwave_light::value::{CommandClass, ValueId, ValueMetadata, ValueType};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let transport = MemoryTransport::new();
/// let target = ValueId::new(
///     CommandClass::SWITCH_BINARY, 0, "targetValue",
///     ValueMetadata::new(ValueType::Boolean),
/// );
///
/// transport
///     .send(&SetValueCommand::new(7, target, CommandValue::Switch(true)))
///     .await
///     .unwrap();
/// assert_eq!(transport.sent().len(), 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    inner: Arc<Mutex<Record>>,
}

#[derive(Debug, Default)]
struct Record {
    sent: Vec<SetValueCommand>,
    rejected: HashSet<CommandClass>,
    disconnected: bool,
}

impl MemoryTransport {
    /// Creates an empty transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every command accepted so far.
    #[must_use]
    pub fn sent(&self) -> Vec<SetValueCommand> {
        self.inner.lock().sent.clone()
    }

    /// Returns and clears the accepted commands.
    pub fn take(&self) -> Vec<SetValueCommand> {
        std::mem::take(&mut self.inner.lock().sent)
    }

    /// Rejects every later command targeting `command_class`.
    pub fn reject(&self, command_class: CommandClass) {
        self.inner.lock().rejected.insert(command_class);
    }

    /// Fails every later command as if the controller were unreachable.
    pub fn disconnect(&self) {
        self.inner.lock().disconnected = true;
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, command: &SetValueCommand) -> Result<(), TransportError> {
        let mut record = self.inner.lock();
        if record.disconnected {
            return Err(TransportError::ConnectionFailed(
                "controller unreachable".to_string(),
            ));
        }
        if record.rejected.contains(&command.value_id.command_class) {
            return Err(TransportError::Rejected(format!(
                "{} on node {}",
                command.value_id, command.node_id
            )));
        }
        record.sent.push(command.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandValue;
    use crate::value::{TARGET_VALUE, ValueId, ValueMetadata, ValueType};

    fn command(command_class: CommandClass) -> SetValueCommand {
        let target = ValueId::new(
            command_class,
            0,
            TARGET_VALUE,
            ValueMetadata::new(ValueType::Number).with_bounds(0, 99),
        );
        SetValueCommand::new(3, target, CommandValue::Level(10))
    }

    #[tokio::test]
    async fn records_in_order_and_shares_between_clones() {
        let transport = MemoryTransport::new();
        let handle = transport.clone();

        transport.send(&command(CommandClass::SWITCH_COLOR)).await.unwrap();
        transport
            .send(&command(CommandClass::SWITCH_MULTILEVEL))
            .await
            .unwrap();

        let sent = handle.take();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].value_id.command_class, CommandClass::SWITCH_COLOR);
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn rejected_commands_are_not_recorded() {
        let transport = MemoryTransport::new();
        transport.reject(CommandClass::SWITCH_COLOR);

        let result = transport.send(&command(CommandClass::SWITCH_COLOR)).await;
        assert!(matches!(result, Err(TransportError::Rejected(_))));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn disconnected_fails_everything() {
        let transport = MemoryTransport::new();
        transport.disconnect();
        let result = transport
            .send(&command(CommandClass::SWITCH_MULTILEVEL))
            .await;
        assert!(matches!(result, Err(TransportError::ConnectionFailed(_))));
    }
}
