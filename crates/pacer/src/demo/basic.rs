use pacer_progress::{Renderer, Tracker};

use super::Demo;

pub const NESTED_OUTER: usize = 3;
pub const NESTED_INNER: usize = 30;

pub fn simple_loop<R: Renderer>(demo: &Demo<'_, R>) {
    demo.section(1, "Simple Progress Bar");
    for _ in demo.renderer.track(0..100, demo.config().desc("Processing")) {
        demo.pace.sleep(20);
    }
}

pub fn with_description<R: Renderer>(demo: &Demo<'_, R>) {
    demo.section(2, "Progress Bar with Dynamic Description");
    for i in demo.renderer.track(0..50, demo.config().desc("Loading")) {
        demo.pace.sleep(30);
        if i == 25 {
            demo.line("Halfway done!");
        }
    }
}

/// Ten units of work, each advancing the bar by ten.
pub fn manual_update<R: Renderer>(demo: &Demo<'_, R>) {
    demo.section(3, "Manual Progress Updates");
    let bar = demo
        .renderer
        .acquire(demo.config().desc("Manual updates").total(100));
    for _ in 0..10 {
        demo.pace.sleep(100);
        bar.step(10);
    }
}

/// Inner bars are cleared when done; the outer one stays.
pub fn nested<R: Renderer>(demo: &Demo<'_, R>) {
    demo.section(4, "Nested Progress Bars");
    for i in demo
        .renderer
        .track(0..NESTED_OUTER, demo.config().desc("Outer loop"))
    {
        let inner = demo.config().desc(format!("  Inner {}", i + 1)).leave(false);
        for _ in demo.renderer.track(0..NESTED_INNER, inner) {
            demo.pace.sleep(20);
        }
    }
}

pub fn run<R: Renderer>(demo: &Demo<'_, R>) {
    demo.banner("Pacer Basic Demos");

    simple_loop(demo);
    with_description(demo);
    manual_update(demo);
    nested(demo);

    demo.footer("All demos completed!");
}
