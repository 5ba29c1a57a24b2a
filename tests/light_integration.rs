// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests: discovery dumps in, set-value commands out, value
//! events back into state.

use std::time::Duration;

use serde_json::{Value, json};
use zwave_light::command::{CommandValue, SetValueCommand};
use zwave_light::event::{LightEvent, ValueUpdatedEvent};
use zwave_light::protocol::MemoryTransport;
use zwave_light::types::{
    Brightness, ColorMode, ColorTemp, RgbColor, RgbwColor, TransitionDuration,
};
use zwave_light::value::{CommandClass, ValueId};
use zwave_light::{Error, Light, LightIntent, TranslatorConfig};

// ============================================================================
// Fixtures
// ============================================================================

const CHANNEL_NAMES: [&str; 5] = ["warmWhite", "coldWhite", "red", "green", "blue"];

fn level_values(endpoint: u8, current: Value, transition: bool) -> Vec<Value> {
    let options = if transition {
        json!(["transitionDuration"])
    } else {
        json!([])
    };
    vec![
        json!({
            "commandClassName": "Multilevel Switch",
            "commandClass": 38,
            "endpoint": endpoint,
            "property": "targetValue",
            "propertyName": "targetValue",
            "metadata": {
                "type": "number", "readable": true, "writeable": true,
                "label": "Target value", "min": 0, "max": 99,
                "valueChangeOptions": options
            }
        }),
        json!({
            "commandClassName": "Multilevel Switch",
            "commandClass": 38,
            "endpoint": endpoint,
            "property": "currentValue",
            "propertyName": "currentValue",
            "metadata": {
                "type": "number", "readable": true, "writeable": false,
                "label": "Current value", "min": 0, "max": 99
            },
            "value": current
        }),
    ]
}

fn color_values(endpoint: u8, channels: &[(u32, Value)], transition: bool) -> Vec<Value> {
    let options = if transition {
        json!(["transitionDuration"])
    } else {
        json!([])
    };
    let mut values = vec![json!({
        "commandClassName": "Color Switch",
        "commandClass": 51,
        "endpoint": endpoint,
        "property": "targetColor",
        "propertyName": "targetColor",
        "metadata": {
            "type": "any", "readable": true, "writeable": true,
            "valueChangeOptions": options
        }
    })];
    for (key, value) in channels {
        values.push(json!({
            "commandClassName": "Color Switch",
            "commandClass": 51,
            "endpoint": endpoint,
            "property": "currentColor",
            "propertyName": "currentColor",
            "propertyKey": key,
            "propertyKeyName": CHANNEL_NAMES[*key as usize],
            "metadata": {
                "type": "number", "readable": true, "writeable": false,
                "min": 0, "max": 255
            },
            "value": value
        }));
    }
    values
}

fn parse(values: Vec<Value>) -> Vec<ValueId> {
    serde_json::from_value(Value::Array(values)).unwrap()
}

/// Multilevel bulb with RGB and both whites, lit warm white.
fn bulb6_values() -> Vec<ValueId> {
    let mut values = level_values(0, json!(99), true);
    values.extend(color_values(
        0,
        &[
            (0, json!(255)),
            (1, json!(0)),
            (2, json!(0)),
            (3, json!(0)),
            (4, json!(0)),
        ],
        true,
    ));
    parse(values)
}

/// RGBW controller on endpoint 1 with a warm white strip, currently lit.
fn zen31_values() -> Vec<ValueId> {
    let mut values = level_values(0, json!(0), true);
    values.extend(level_values(1, json!(59), true));
    values.extend(color_values(
        1,
        &[
            (0, json!(141)),
            (2, json!(255)),
            (3, json!(159)),
            (4, json!(70)),
        ],
        true,
    ));
    parse(values)
}

fn value_event(
    node_id: u16,
    endpoint: u8,
    cc: u8,
    property: &str,
    key: Option<u32>,
    new: Value,
) -> String {
    let mut args = json!({
        "commandClass": cc,
        "endpoint": endpoint,
        "property": property,
        "newValue": new
    });
    if let Some(key) = key {
        args["propertyKey"] = json!(key);
    }
    json!({
        "type": "event",
        "event": {
            "source": "node",
            "event": "value updated",
            "nodeId": node_id,
            "args": args
        }
    })
    .to_string()
}

fn feed<T: zwave_light::protocol::Transport>(light: &Light<T>, events: &[String]) {
    for raw in events {
        light.handle_event(&ValueUpdatedEvent::from_json(raw).unwrap());
    }
}

fn color_events(node_id: u16, endpoint: u8, channels: &[(u32, u8)]) -> Vec<String> {
    channels
        .iter()
        .map(|(key, value)| {
            value_event(node_id, endpoint, 51, "currentColor", Some(*key), json!(value))
        })
        .collect()
}

fn color_json(command: &SetValueCommand) -> Value {
    serde_json::to_value(&command.value).unwrap()
}

// ============================================================================
// Multilevel bulb with RGB and tunable white
// ============================================================================

#[tokio::test]
async fn bulb6_initial_state_from_discovery() {
    let light = Light::from_values(
        MemoryTransport::new(),
        39,
        0,
        &bulb6_values(),
        TranslatorConfig::default(),
    )
    .unwrap();

    assert_eq!(
        light.capabilities().supported_color_modes(),
        vec![ColorMode::ColorTemp, ColorMode::Hs]
    );
    let state = light.state();
    assert_eq!(state.is_on, Some(true));
    assert_eq!(state.brightness, Some(Brightness::MAX));
    assert_eq!(state.color_mode, ColorMode::ColorTemp);
    assert_eq!(state.color_temp, Some(ColorTemp::new(370)));
}

#[tokio::test]
async fn bulb6_rgb_round_trip() {
    let transport = MemoryTransport::new();
    let light = Light::from_values(
        transport.clone(),
        39,
        0,
        &bulb6_values(),
        TranslatorConfig::default(),
    )
    .unwrap();

    let sent = light
        .turn_on(&LightIntent::new().with_rgb(RgbColor::new(255, 76, 255)))
        .await
        .unwrap();
    assert_eq!(sent, 2);

    let commands = transport.take();
    assert!(commands[0].value_id.is(CommandClass::SWITCH_COLOR, "targetColor"));
    assert_eq!(
        color_json(&commands[0]),
        json!({"blue": 255, "coldWhite": 0, "green": 76, "red": 255, "warmWhite": 0})
    );
    assert_eq!(commands[0].transition(), Some(TransitionDuration::Default));
    assert_eq!(commands[1].value, CommandValue::Level(255));

    feed(
        &light,
        &color_events(39, 0, &[(0, 0), (1, 0), (2, 255), (3, 76), (4, 255)]),
    );

    let state = light.state();
    assert_eq!(state.color_mode, ColorMode::Hs);
    assert_eq!(state.rgb_color, Some(RgbColor::new(255, 76, 255)));
    let hs = state.hs_color.unwrap();
    assert_eq!(hs.hue().round(), 300.0);
    assert_eq!(hs.saturation().round(), 70.0);
}

#[tokio::test]
async fn bulb6_color_temp_round_trip() {
    let transport = MemoryTransport::new();
    let light = Light::from_values(
        transport.clone(),
        39,
        0,
        &bulb6_values(),
        TranslatorConfig::default(),
    )
    .unwrap();

    light
        .turn_on(&LightIntent::new().with_color_temp(ColorTemp::new(170)))
        .await
        .unwrap();
    let commands = transport.take();
    assert_eq!(
        color_json(&commands[0]),
        json!({"blue": 0, "coldWhite": 235, "green": 0, "red": 0, "warmWhite": 20})
    );

    feed(&light, &color_events(39, 0, &[(0, 20), (1, 235)]));

    let state = light.state();
    assert_eq!(state.color_mode, ColorMode::ColorTemp);
    assert_eq!(state.color_temp, Some(ColorTemp::new(170)));
    assert_eq!(state.hs_color, None);
}

#[tokio::test]
async fn bulb6_transition_and_turn_off() {
    let transport = MemoryTransport::new();
    let light = Light::from_values(
        transport.clone(),
        39,
        0,
        &bulb6_values(),
        TranslatorConfig::default(),
    )
    .unwrap();

    light
        .turn_on(
            &LightIntent::new()
                .with_brightness(Brightness::new(129))
                .with_transition(Duration::from_secs(10)),
        )
        .await
        .unwrap();
    let commands = transport.take();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].value, CommandValue::Level(50));
    assert_eq!(commands[0].transition(), Some(TransitionDuration::Seconds(10)));

    light.turn_off(None).await.unwrap();
    let commands = transport.take();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].value_id.is(CommandClass::SWITCH_MULTILEVEL, "targetValue"));
    assert_eq!(commands[0].value, CommandValue::Level(0));

    feed(&light, &[value_event(39, 0, 38, "currentValue", None, json!(0))]);
    assert_eq!(light.state().is_on, Some(false));
}

#[tokio::test]
async fn bulb6_state_changes_are_published() {
    let light = Light::from_values(
        MemoryTransport::new(),
        39,
        0,
        &bulb6_values(),
        TranslatorConfig::default(),
    )
    .unwrap();
    let mut events = light.subscribe();

    // Another node and another endpoint leave the light alone
    feed(
        &light,
        &[
            value_event(40, 0, 38, "currentValue", None, json!(0)),
            value_event(39, 2, 38, "currentValue", None, json!(0)),
        ],
    );
    assert!(events.try_recv().is_err());

    feed(&light, &[value_event(39, 0, 38, "currentValue", None, json!(0))]);
    match events.try_recv().unwrap() {
        LightEvent::StateChanged {
            node_id,
            endpoint,
            state,
        } => {
            assert_eq!((node_id, endpoint), (39, 0));
            assert_eq!(state.is_on, Some(false));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

// ============================================================================
// RGBW controller on a sub-endpoint
// ============================================================================

#[tokio::test]
async fn zen31_white_only_rgbw() {
    let transport = MemoryTransport::new();
    let light = Light::from_values(
        transport.clone(),
        94,
        1,
        &zen31_values(),
        TranslatorConfig::default(),
    )
    .unwrap();
    assert_eq!(
        light.capabilities().supported_color_modes(),
        vec![ColorMode::Rgbw]
    );
    assert!(light.capabilities().supports_transition());

    let state = light.state();
    assert_eq!(state.is_on, Some(true));
    assert_eq!(state.color_mode, ColorMode::Rgbw);
    assert_eq!(state.rgbw_color, Some(RgbwColor::new(255, 159, 70, 141)));

    light
        .turn_on(&LightIntent::new().with_rgbw(RgbwColor::new(0, 0, 0, 128)))
        .await
        .unwrap();

    let commands = transport.take();
    assert_eq!(commands.len(), 2);
    assert!(commands.iter().all(|c| c.value_id.endpoint == 1));
    assert_eq!(
        color_json(&commands[0]),
        json!({"blue": 0, "green": 0, "red": 0, "warmWhite": 128})
    );
    assert_eq!(commands[1].value, CommandValue::Level(255));
    assert!(
        commands
            .iter()
            .all(|c| c.transition() == Some(TransitionDuration::Default))
    );

    feed(
        &light,
        &color_events(94, 1, &[(0, 128), (2, 0), (3, 0), (4, 0)]),
    );
    feed(&light, &[value_event(94, 1, 38, "currentValue", None, json!(99))]);

    let state = light.state();
    assert_eq!(state.is_on, Some(true));
    assert_eq!(state.color_mode, ColorMode::Rgbw);
    assert_eq!(state.rgbw_color, Some(RgbwColor::new(0, 0, 0, 128)));
}

#[tokio::test]
async fn zen31_rejects_color_temp() {
    let transport = MemoryTransport::new();
    let light = Light::from_values(
        transport.clone(),
        94,
        1,
        &zen31_values(),
        TranslatorConfig::default(),
    )
    .unwrap();

    let result = light
        .turn_on(&LightIntent::new().with_color_temp(ColorTemp::new(200)))
        .await;
    assert!(matches!(result, Err(Error::UnsupportedCapability { .. })));
    assert!(transport.sent().is_empty());
}

// ============================================================================
// Dimmers and edge cases
// ============================================================================

#[tokio::test]
async fn v4_dimmer_brightness_from_event() {
    let light = Light::from_values(
        MemoryTransport::new(),
        5,
        0,
        &parse(level_values(0, json!(0), true)),
        TranslatorConfig::default(),
    )
    .unwrap();
    assert_eq!(light.state().is_on, Some(false));
    assert_eq!(light.state().color_mode, ColorMode::Brightness);

    feed(&light, &[value_event(5, 0, 38, "currentValue", None, json!(22))]);

    let state = light.state();
    assert_eq!(state.is_on, Some(true));
    assert_eq!(state.brightness, Some(Brightness::new(57)));
}

#[tokio::test]
async fn null_color_values_are_tolerated() {
    let mut values = level_values(0, json!(99), false);
    values.extend(color_values(
        0,
        &[(2, Value::Null), (3, Value::Null), (4, Value::Null)],
        false,
    ));
    let light = Light::from_values(
        MemoryTransport::new(),
        7,
        0,
        &parse(values),
        TranslatorConfig::default(),
    )
    .unwrap();

    assert_eq!(
        light.capabilities().supported_color_modes(),
        vec![ColorMode::Hs]
    );
    let state = light.state();
    assert_eq!(state.is_on, Some(true));
    assert_eq!(state.hs_color, None);
}

#[tokio::test]
async fn skip_redundant_turn_on() {
    let transport = MemoryTransport::new();
    let light = Light::from_values(
        transport.clone(),
        5,
        0,
        &parse(level_values(0, json!(50), false)),
        TranslatorConfig::new().with_skip_redundant(),
    )
    .unwrap();
    let mut events = light.subscribe();

    assert_eq!(light.turn_on(&LightIntent::new()).await.unwrap(), 0);
    assert!(transport.sent().is_empty());
    assert!(events.try_recv().is_err());

    assert_eq!(
        light
            .turn_on(&LightIntent::new().with_brightness(Brightness::new(255)))
            .await
            .unwrap(),
        1
    );
    assert!(matches!(
        events.try_recv().unwrap(),
        LightEvent::CommandsDispatched { sent: 1, failed: 0, .. }
    ));
}
