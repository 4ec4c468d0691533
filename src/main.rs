use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("[Logging] Could not install subscriber: {e}");
    }

    let Some(renderer) = renderer() else {
        tracing::error!("Built without a renderer; rebuild with `--features desktop`");
        std::process::exit(1);
    };

    tracing::info!(renderer, "Starting MeetBridge");
    launch();
}

/// Renderer compiled into this binary, if any.
fn renderer() -> Option<&'static str> {
    cfg!(feature = "desktop").then_some("desktop")
}

#[cfg(feature = "desktop")]
fn launch() {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
    use meetbridge_auth::App;

    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title("MeetBridge")
            .with_inner_size(LogicalSize::new(520.0, 760.0))
            .with_min_inner_size(LogicalSize::new(360.0, 560.0)),
    );
    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    unreachable!("main exits before launching when no renderer is compiled in");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_follows_desktop_feature() {
        if cfg!(feature = "desktop") {
            assert_eq!(renderer(), Some("desktop"));
        } else {
            assert_eq!(renderer(), None);
        }
    }
}
