// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkable button.
//!
//! Each click flips the toggle; the pressed visual stays up while checked.
//!
//! Run:
//! - `cargo run -p understory_demos --example toggle`

use understory_button::{Button, ButtonConfig, HoverPolicy, PointerRecord};
use understory_demos::{SceneNode, Sprite};

fn main() {
    let config = ButtonConfig::new()
        .checkable(true)
        .hover(HoverPolicy::FromPointers);
    let mut button = Button::with_config(SceneNode::default(), config)
        .with_nodes(
            Some(Sprite::new("mute_off", 48, 48)),
            Some(Sprite::new("mute_on", 48, 48)),
            None,
        )
        .expect("up and down visuals are both given");

    for round in 1..=3 {
        let mouse = PointerRecord::mouse(7);
        button.on_over(&mouse);
        button.on_press(&mouse);
        button.on_release(&mouse);
        button.on_out(&mouse);
        println!(
            "click {round}: checked = {}, showing {:?}",
            button.is_checked(),
            button.host().shown
        );
    }

    button.set_checked(false);
    println!("reset: checked = {}", button.is_checked());
}
