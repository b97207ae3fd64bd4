use std::cell::Cell;
use std::rc::Rc;
use tweenkit::prelude::*;

/// Drive a handful of tweens with a simulated 60fps clock
fn main() -> tweenkit::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    println!("🎞️ tweenkit demo");
    println!("================");

    let clock = Rc::new(ManualClock::new());
    let mut tweens = TweenCollection::with_clock(clock.clone());

    let fade = tweens.append(TweenConfig::new(0.0, 1.0, 0.5).with_easing("easeOutQuad"))?;
    let slide = tweens.append(
        TweenConfig::new(vec![0.0, 0.0], vec![320.0, 240.0], 1.0).with_easing("easeInOutCubic"),
    )?;
    let bounce = tweens.append(
        TweenConfig::new(0, 100, 0.25)
            .with_easing("easeOutElastic")
            .with_pingpong(2),
    )?;
    let typing = tweens.append(TweenConfig::new("", "Hello, tweens!", 0.75))?;

    // JSON-loaded configurations work the same way
    let spin = tweens.append(TweenConfig::from_json(
        r#"{"from": 0, "to": 360, "duration": 0.5, "easing": "easeInSine", "repeat": 1}"#,
    )?)?;

    let group = TweenGroup::new(vec![
        fade.clone(),
        slide.clone(),
        bounce.clone(),
        typing.clone(),
        spin.clone(),
    ]);
    let all_done = Rc::new(Cell::new(false));
    let flag = all_done.clone();
    group.on(TweenEvent::Complete, move |_| {
        println!("🏁 every tween in the group completed");
        flag.set(true);
    });

    let mut frame = 0;
    while !tweens.is_empty() {
        clock.advance(1.0 / 60.0);
        tweens.update();
        frame += 1;

        if frame % 6 == 0 {
            println!(
                "frame {:>3} | fade {:<6} | slide {:<22} | bounce {:<5} | typing {:<16} | spin {}",
                frame,
                show(&fade),
                show(&slide),
                show(&bounce),
                show(&typing),
                show(&spin),
            );
        }
    }

    println!("\n✅ finished after {} frames ({:.2}s)", frame, clock.now());
    println!("   group complete: {}", group.is_complete());
    println!("   group callback fired: {}", all_done.get());

    println!("\n📈 easing curves at t = 0.25 / 0.5 / 0.75:");
    for curve in EasingCurve::ALL {
        println!(
            "   {:<18} {:>7.3} {:>7.3} {:>7.3}",
            curve.name(),
            curve.apply(0.25),
            curve.apply(0.5),
            curve.apply(0.75)
        );
    }

    Ok(())
}

fn show(handle: &TweenHandle) -> String {
    match handle.value() {
        Some(Value::Float(v)) => format!("{:.3}", v),
        Some(value) => value.to_string(),
        None => "done".to_string(),
    }
}
