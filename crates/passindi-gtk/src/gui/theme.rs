use gtk::gdk;
use gtk4 as gtk;
use passindi::units::Density;

/// DPI at which one dp is one logical pixel.
const BASELINE_DPI: f64 = 96.0;

/// Pixels per dp, following the font DPI the desktop is configured with.
pub fn display_density() -> Density {
    gtk::Settings::default()
        .map(|s| s.gtk_xft_dpi())
        .filter(|&dpi| dpi > 0)
        .map(|dpi| Density::new(dpi as f64 / 1024.0 / BASELINE_DPI))
        .filter(Density::is_valid)
        .unwrap_or_default()
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.passindi-indicator {
    background: none;
    background-color: transparent;
}
.passindi-window box {
    padding: 24px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
