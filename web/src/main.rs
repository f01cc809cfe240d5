use dioxus::prelude::*;
use tracing::Level;

use ui::chart::{default_backend, ChartMount, ChartPanel};
use ui::page;

fn main() {
    dioxus::logger::init(Level::INFO).ok();

    page::on_ready(|| {
        if let Some(mount) = page::enhance() {
            launch_chart(mount);
        }
    });
}

/// Render the score chart panel into the container the page gave us.
#[cfg(feature = "web")]
fn launch_chart(mount: ChartMount) {
    let root = mount.container_id.clone();
    dioxus::LaunchBuilder::web()
        .with_cfg(dioxus::web::Config::new().rootname(root))
        .with_context(mount)
        .launch(ChartRoot);
}

#[cfg(not(feature = "web"))]
fn launch_chart(mount: ChartMount) {
    dioxus::LaunchBuilder::new().with_context(mount).launch(ChartRoot);
}

#[component]
fn ChartRoot() -> Element {
    let mount = use_context::<ChartMount>();
    let backend = use_hook(default_backend);

    rsx! {
        ChartPanel {
            state: mount.state,
            backend,
            config: mount.config,
            container_id: mount.container_id,
        }
    }
}
