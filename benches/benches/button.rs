// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Size;
use understory_button::{Button, ButtonEvents, ButtonHost, PointerEventKind, PointerRecord};

/// Host that accepts every request and keeps nothing.
#[derive(Default)]
struct NullHost;

impl ButtonHost for NullHost {
    type PointerId = u32;
    type Visual = u8;

    fn add_child(&mut self, _visual: u8) {}

    fn remove_child(&mut self, _visual: u8) {}

    fn set_active(&mut self, visual: u8, active: bool) {
        black_box((visual, active));
    }

    fn visual_size(&self, _visual: u8) -> Size {
        Size::new(64.0, 24.0)
    }

    fn set_size(&mut self, _size: Size) {}

    fn set_pointer_capture(&mut self, pointer: u32) {
        black_box(pointer);
    }

    fn release_pointer_capture(&mut self, pointer: u32) {
        black_box(pointer);
    }

    fn set_event_interest(&mut self, _events: ButtonEvents) {}
}

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

fn button() -> Button<NullHost> {
    Button::new(NullHost)
        .with_nodes(Some(0), Some(1), Some(2))
        .expect("up and down are both given")
        .with_on_click(|event| {
            black_box(event.pointer_id);
        })
}

fn random_events(len: usize, pointers: u32, seed: u64) -> Vec<(PointerEventKind, u32)> {
    const KINDS: [PointerEventKind; 4] = [
        PointerEventKind::Press,
        PointerEventKind::Release,
        PointerEventKind::Over,
        PointerEventKind::Out,
    ];
    let mut rng = Lcg(seed);
    (0..len)
        .map(|_| {
            let kind = KINDS[(rng.next_u32() % 4) as usize];
            (kind, rng.next_u32() % pointers)
        })
        .collect()
}

fn bench_click_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("button/click_cycle");
    group.throughput(Throughput::Elements(1));
    group.bench_function("press_release", |b| {
        let mut button = button();
        b.iter(|| {
            button.on_press(&PointerRecord::mouse(0));
            black_box(button.on_release(&PointerRecord::mouse(0)));
        });
    });
    group.finish();
}

fn bench_multitouch(c: &mut Criterion) {
    let mut group = c.benchmark_group("button/multitouch");

    // All fingers land, then all lift: one press, one click per round.
    for fingers in [2_u32, 5, 10] {
        group.throughput(Throughput::Elements(u64::from(fingers) * 2));
        group.bench_with_input(BenchmarkId::new("land_lift", fingers), &fingers, |b, &n| {
            let mut button = button();
            b.iter(|| {
                for id in 0..n {
                    button.on_press(&PointerRecord::touch(id));
                }
                for id in 0..n {
                    black_box(button.on_release(&PointerRecord::touch(id)));
                }
            });
        });
    }

    group.finish();
}

fn bench_random_interleaving(c: &mut Criterion) {
    let mut group = c.benchmark_group("button/random_interleaving");

    for len in [256_usize, 4_096] {
        let events = random_events(len, 4, 0x5eed);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &events, |b, events| {
            b.iter_batched(
                button,
                |mut button| {
                    for &(kind, id) in events {
                        black_box(button.handle(kind, &PointerRecord::touch(id)));
                    }
                    button
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_click_cycle,
    bench_multitouch,
    bench_random_interleaving
);
criterion_main!(benches);
