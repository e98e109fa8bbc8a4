//! Drives a picker without a window: sets values, drags the end thumb off the
//! track, lets go and prints the track as it springs back.
//!
//! Run with `RUST_LOG=debug` to see the picker's lifecycle logging.

use std::time::Duration;

use rubber_range::prelude::*;

struct PrintListener;

impl RangePickerListener for PrintListener {
    fn on_progress_changed(&mut self, start_value: i32, end_value: i32, from_user: bool) {
        let source = if from_user { "user" } else { "code" };
        println!("range {start_value}..={end_value} ({source})");
    }

    fn on_start_tracking_touch(&mut self, is_start_thumb: bool) {
        println!("grabbed {} thumb", if is_start_thumb { "start" } else { "end" });
    }

    fn on_stop_tracking_touch(&mut self, is_start_thumb: bool) {
        println!("released {} thumb", if is_start_thumb { "start" } else { "end" });
    }
}

fn describe(commands: &[DrawCommand]) -> String {
    commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Line { to, .. } | DrawCommand::Cubic { to, .. } => {
                Some(format!("({:.0}, {:.1})", to.0, to.1))
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = PickerConfig::new()
        .range(0, 200)
        .thumb_radius(12.0)
        .stretch_range(32.0)
        .elastic_behavior(ElasticBehavior::Cubic);
    let mut picker = match RangePicker::new(config) {
        Ok(picker) => picker,
        Err(err) => {
            eprintln!("bad picker config: {err}");
            return;
        }
    };
    picker.set_listener(PrintListener);

    // Parked until the first layout
    picker.set_current_start_value(40);
    picker.set_current_end_value(120);

    let size = picker.measure(Constraints::loose(Size::new(360.0, 120.0)));
    let size = Size::new(size.width, 96.0);
    picker.layout(size);

    let Some(geometry) = picker.geometry().copied() else {
        eprintln!("surface {}x{} is too small", size.width, size.height);
        return;
    };

    let end = *picker.thumb(Thumb::End);
    let grab = (end.x, geometry.track_y);
    picker.event(&Event::PointerDown { x: grab.0, y: grab.1 });
    for step in 1..=4 {
        let offset = step as f32 * 10.0;
        picker.event(&Event::PointerMove {
            x: grab.0 + offset,
            y: grab.1 + offset,
        });
    }
    picker.event(&Event::PointerUp {
        x: grab.0 + 40.0,
        y: grab.1 + 40.0,
    });

    let mut canvas = PaintContext::new(size);
    let mut frame = 0;
    loop {
        let animating = picker.advance_animations(Duration::from_millis(16));
        if picker.needs_paint() {
            canvas.clear();
            picker.paint(&mut canvas);
            picker.clear_dirty();
            println!("frame {frame:>3}: {}", describe(canvas.commands()));
        }
        if !animating {
            break;
        }
        frame += 1;
    }

    println!(
        "settled at {}..={}",
        picker.current_start_value(),
        picker.current_end_value()
    );
}
