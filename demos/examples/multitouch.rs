// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-touch button basics.
//!
//! Two fingers and a mouse interact with one button. Only the first finger
//! presses it; the click fires when the last finger lifts.
//!
//! Run:
//! - `cargo run -p understory_demos --example multitouch`

use ui_events::pointer::PointerType;
use understory_button::{Button, ButtonConfig, PointerEventKind, PointerRecord};
use understory_demos::{PrintTrace, SceneNode, Sprite};

fn main() {
    let mut button = Button::with_trace(SceneNode::default(), ButtonConfig::default(), PrintTrace)
        .with_nodes(
            Some(Sprite::new("play_up", 120, 40)),
            Some(Sprite::new("play_down", 120, 40)),
            Some(Sprite::new("play_disabled", 120, 40)),
        )
        .expect("up and down visuals are both given")
        .with_on_press(|event| println!("  >> pressed by {}", event.pointer_id))
        .with_on_click(|event| println!("  >> clicked by {}", event.pointer_id));

    let script = [
        (PointerEventKind::Over, 100, PointerType::Mouse),
        (PointerEventKind::Press, 1, PointerType::Touch),
        (PointerEventKind::Press, 2, PointerType::Touch),
        (PointerEventKind::Release, 1, PointerType::Touch),
        (PointerEventKind::Out, 100, PointerType::Mouse),
        (PointerEventKind::Release, 2, PointerType::Touch),
        // A finger that slides off before lifting does not click.
        (PointerEventKind::Press, 3, PointerType::Touch),
        (PointerEventKind::Out, 3, PointerType::Touch),
        (PointerEventKind::Release, 3, PointerType::Touch),
    ];

    for (kind, id, pointer_type) in script {
        println!("{kind:?} from {id} ({pointer_type:?})");
        let handled = button.handle(kind, &PointerRecord::new(id, pointer_type));
        println!(
            "  handled: {handled}, showing: {:?}, captured: {:?}",
            button.host().shown,
            button.host().captured
        );
    }

    println!("Disable while a finger is down");
    button.on_press(&PointerRecord::touch(4));
    button.set_enabled(false);
    println!(
        "  showing: {:?}, captured: {:?}",
        button.host().shown,
        button.host().captured
    );
}
