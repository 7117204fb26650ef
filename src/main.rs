//! Demo host: builds a small landing page, installs the enhancement
//! behaviors, and scripts a click-and-scroll session so the reveals and
//! the smooth scroll can be watched in the logs.
//!
//! Run with `RUST_LOG=debug` to see per-section reveal events.

use common::Rect;
use dom::Attr;
use pagemotion::PageEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;
use viewport::Viewport;

const FRAME_MS: f32 = 16.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut engine = PageEngine::new(Viewport::new(800.0, 600.0));
    let pricing_anchor = build_landing_page(&mut engine);

    engine.initialize().expect("document has a root");
    info!("page initialized");

    // The user clicks the "Pricing" nav link.
    let allowed = engine.click(pricing_anchor);
    info!(default_allowed = allowed, "clicked #pricing anchor");

    // Let the smooth scroll and the reveal transitions play out.
    let mut frames = 0;
    while engine.scroller.is_animating() || frames < 120 {
        engine.tick(FRAME_MS);
        frames += 1;
    }

    info!(
        scroll_y = engine.scroller.y(),
        revealed = engine.revealed_sections(),
        frames,
        "session finished"
    );
}

/// Assemble the document and its geometry: a nav with fragment anchors
/// and three content sections stacked down the page.
///
/// Returns the "Pricing" anchor node.
fn build_landing_page(engine: &mut PageEngine) -> dom::NodeId {
    let dom = &mut engine.dom;

    let body = dom.create_plain_element("body");
    let nav = dom.create_plain_element("nav");
    dom.append_child(body, nav);

    let mut pricing_anchor = None;
    for (label, href) in [
        ("Features", "#features"),
        ("About", "#about"),
        ("Pricing", "#pricing"),
    ] {
        let a = dom.create_element("a", vec![Attr::new("href", href)]);
        let text = dom.create_text(label);
        dom.append_child(a, text);
        dom.append_child(nav, a);
        if href == "#pricing" {
            pricing_anchor = Some(a);
        }
    }

    for (id, y) in [("features", 700.0), ("about", 1400.0), ("pricing", 2100.0)] {
        let section = dom.create_element(
            "div",
            vec![Attr::new("id", id), Attr::new("class", "section")],
        );
        dom.append_child(body, section);
        engine
            .boxes
            .set(section, Rect::new(0.0, y, 800.0, 600.0))
            .expect("finite geometry");
    }

    dom.set_root(body);
    pricing_anchor.expect("nav contains the pricing anchor")
}
