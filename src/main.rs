//! Grantboard - GPUI interface for browsing available grants.

use anyhow::Context as _;
use gpui::*;
use tracing_subscriber::EnvFilter;

use grantboard::app::Grantboard;
use grantboard::store;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The store is a compile-time constant, but its invariants are checked
    // once before any UI exists.
    store::validate(&store::seed_grants()).context("seed grant store failed validation")?;

    Application::new().run(|cx: &mut App| {
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: Point::default(),
                size: Size {
                    width: px(1200.0),
                    height: px(800.0),
                },
            })),
            titlebar: Some(TitlebarOptions {
                title: Some("Grantboard - Available Grants".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Grantboard::new(window, cx))
        }) {
            tracing::error!("failed to open window: {}", e);
        }
    });

    Ok(())
}
