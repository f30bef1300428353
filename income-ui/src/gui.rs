use gpui::{
    AnyView, App, AppContext, Bounds, KeyBinding, Menu, MenuItem, WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::{
    Quit,
    app::AppServices,
    components::{CalculatorView, WindowPreferences},
    quit,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Income Calculator".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window centered on the primary display.
pub fn open_main_window(
    app_cx: &mut App,
    services: AppServices,
    prefs: WindowPreferences,
) {
    let bounds = Bounds::centered(None, prefs.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        ..Default::default()
    };

    let opened = app_cx.open_window(options, |window, cx| {
        let view = cx.new(|view_cx| CalculatorView::new(services, window, view_cx));
        cx.new(|root_cx| Root::new(AnyView::from(view), window, root_cx))
    });

    match opened {
        Ok(_) => info!("Main window opened"),
        Err(error) => error!(?error, "failed to open main window"),
    }
}
