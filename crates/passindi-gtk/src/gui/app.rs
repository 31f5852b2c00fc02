use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::indicator::{self, IndicatorView};
use crate::gui::theme;
use gtk::prelude::*;
use gtk4 as gtk;
use passindi::PasswordIndicator;
use passindi::ipc::Command;
use passindi::units::Density;
use relm4::prelude::*;

pub struct AppModel {
    pub view: IndicatorView,
    pub typed: usize,
    pub density: Density,
    pub root: gtk::ApplicationWindow,
    pub entry: gtk::PasswordEntry,
}

#[derive(Debug)]
pub enum AppMsg {
    Command(Command),
    TextChanged(usize),
    Clear,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Command(c) => AppMsg::Command(c),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn build_indicator(config: &Config, density: Density) -> PasswordIndicator {
    PasswordIndicator::new(config.indicator.clone(), density).unwrap_or_else(|e| {
        log::error!("Invalid indicator settings, using defaults: {}", e);
        PasswordIndicator::default()
    })
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Passindi"),
            set_resizable: false,
            add_css_class: "passindi-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Clear);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_halign: gtk::Align::Center,
                    add_css_class: "passindi-indicator",
                },

                #[name = "entry"]
                gtk::PasswordEntry {
                    set_show_peek_icon: true,
                    connect_changed[sender] => move |entry| {
                        sender.input(AppMsg::TextChanged(entry.text().chars().count()));
                    },
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();
        let density = theme::display_density();
        log::debug!("Display density: {}", density);

        let widgets = view_output!();

        let model = AppModel {
            view: IndicatorView::new(
                widgets.drawing_area.clone(),
                build_indicator(&config, density),
                config.window.padding(density),
            ),
            typed: 0,
            density,
            root: root.clone(),
            entry: widgets.entry.clone(),
        };
        root.set_title(Some(&config.window.title));

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            // Socket commands override the typed count until the next edit.
            AppMsg::Command(command) => {
                log::debug!("Received command: {}", command);
                self.view.apply(command);
            }
            AppMsg::TextChanged(len) => {
                let filled = self.view.filled_count();
                for command in indicator::commands_for_edit(filled, len, self.view.count()) {
                    self.view.apply(command);
                }
                self.typed = len;
            }
            AppMsg::Clear => {
                self.entry.set_text("");
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    let padding = new_config.window.padding(self.density);
                    match self
                        .view
                        .reconfigure(new_config.indicator, padding, self.density)
                    {
                        Ok(()) => {
                            self.view.fill_to(self.typed);
                            self.root.set_title(Some(&new_config.window.title));
                            log::info!("Configuration reloaded");
                        }
                        Err(e) => log::error!("Failed to apply config: {}", e),
                    }
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
