// SPDX-License-Identifier: MPL-2.0

use crate::config::Config;
use crate::fl;
use crate::pages;
use crate::pages::picker::{PickerMsg, PickerState};
use crate::palette::PaletteKind;
use crate::widgets::search_select::SearchSelectMessage;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::event::Status;
use cosmic::iced::{mouse, touch, Event, Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, about::About, icon, menu, nav_bar};
use std::collections::HashMap;

const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");
const APP_ICON: &[u8] = include_bytes!("../resources/icons/hicolor/scalable/apps/icon.svg");

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// The about page for this app.
    about: About,
    /// Contains items assigned to the nav bar panel.
    nav: nav_bar::Model,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Cosmic config context for saving
    config_context: Option<cosmic_config::Config>,

    // === App-specific state ===
    /// Picker page state
    pub picker: PickerState,
    /// Active notifications to display
    pub notifications: Vec<Notification>,
    /// Counter for generating unique notification IDs
    pub notification_id_counter: u32,
}

/// Notification level/type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationLevel {
    #[allow(dead_code)]
    Info,
    Success,
    #[allow(dead_code)]
    Warning,
    Error,
}

/// A notification message to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u32,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation & UI
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),

    // Settings
    PaletteSelected(usize),
    ShowValuesChanged(bool),

    // Notifications
    AddNotification(NotificationLevel, String, String),
    DismissNotification(u32),
    CopyNotification(u32),

    // Picker
    Picker(PickerMsg),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "dev.ossian.Swatch";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create a nav bar with two pages: Picker and Settings
        let mut nav = nav_bar::Model::default();

        nav.insert()
            .text(fl!("picker"))
            .data::<Page>(Page::Picker)
            .icon(icon::from_name("applications-graphics-symbolic"))
            .activate();

        nav.insert()
            .text(fl!("settings"))
            .data::<Page>(Page::Settings)
            .icon(icon::from_name("preferences-system-symbolic"));

        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("CARGO_PKG_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let config_context = cosmic_config::Config::new(Self::APP_ID, Config::VERSION).ok();
        let config = config_context
            .as_ref()
            .map(|context| match Config::get_entry(context) {
                Ok(config) => config,
                Err((_errors, config)) => config,
            })
            .unwrap_or_default();

        // Build the picker over the configured palette
        let picker = PickerState::new(config.palette);

        // Construct the app model with the runtime's core.
        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            nav,
            key_binds: HashMap::new(),
            config,
            config_context,
            picker,
            notifications: Vec::new(),
            notification_id_counter: 0,
        };

        // Create a startup command that sets the window title.
        let command = app.update_title();

        (app, command)
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![menu::Item::Button(fl!("about"), None, MenuAction::About)],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Enables the COSMIC application to create a nav bar with this model.
    fn nav_model(&self) -> Option<&nav_bar::Model> {
        Some(&self.nav)
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match &self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About.clone()),
            ),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let space_m = cosmic::theme::spacing().space_m;

        let page_content: Element<_> = match self.nav.active_data::<Page>().unwrap_or(&Page::Picker)
        {
            Page::Picker => pages::picker::view(
                &self.picker,
                Message::Picker,
                self.config.show_values,
                space_s,
                space_m,
            ),
            Page::Settings => pages::settings::view(self, space_s, space_m),
        };

        // Build view with notifications at the top if any
        let mut content_column = widget::column::with_capacity(2);

        // Add notifications section if there are any
        if !self.notifications.is_empty() {
            let notifications_row = widget::row::with_children(
                self.notifications
                    .iter()
                    .map(|n| pages::widgets::notification_toast(n)),
            )
            .spacing(space_s);
            content_column = content_column.push(notifications_row);
        }

        content_column = content_column.push(page_content);

        widget::container(content_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(space_m)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        Subscription::batch(vec![
            // Watch for application configuration changes.
            self.core()
                .watch_config::<Config>(Self::APP_ID)
                .map(|update| Message::UpdateConfig(update.config)),
            // Close the picker's option list on presses outside of it.
            cosmic::iced::event::listen_with(dismiss_on_outside_press),
        ])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::UpdateConfig(config) => {
                if config.palette != self.config.palette {
                    self.picker.set_palette(config.palette);
                }
                self.config = config;
            }

            Message::LaunchUrl(url) => match open::that_detached(&url) {
                Ok(()) => {}
                Err(err) => {
                    log::warn!("failed to open {url:?}: {err}");
                }
            },

            // Settings
            Message::PaletteSelected(index) => {
                if let Some(palette) = PaletteKind::all().get(index).copied() {
                    if palette != self.config.palette {
                        self.config.palette = palette;
                        self.picker.set_palette(palette);
                        return self.save_config();
                    }
                }
            }

            Message::ShowValuesChanged(show_values) => {
                if self.config.show_values != show_values {
                    self.config.show_values = show_values;
                    return self.save_config();
                }
            }

            // Notifications
            Message::AddNotification(level, title, message) => {
                self.notification_id_counter += 1;
                self.notifications.push(Notification {
                    id: self.notification_id_counter,
                    level,
                    title,
                    message,
                });
            }

            Message::DismissNotification(id) => {
                self.notifications.retain(|n| n.id != id);
            }

            Message::CopyNotification(id) => {
                if let Some(notification) = self.notifications.iter().find(|n| n.id == id) {
                    let text = format!("{}: {}", notification.title, notification.message);
                    return cosmic::task::future(async move {
                        if let Ok(mut clipboard) = arboard::Clipboard::new() {
                            let _ = clipboard.set_text(&text);
                        }
                        cosmic::Action::App(Message::AddNotification(
                            NotificationLevel::Success,
                            fl!("notification-copied"),
                            String::new(),
                        ))
                    });
                }
            }

            // Picker
            Message::Picker(picker_msg) => {
                return self.handle_picker_message(picker_msg);
            }
        }
        Task::none()
    }

    /// Called when a nav item is selected.
    fn on_nav_select(&mut self, id: nav_bar::Id) -> Task<cosmic::Action<Self::Message>> {
        self.nav.activate(id);
        self.update_title()
    }
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let mut window_title = fl!("app-title");

        if let Some(page) = self.nav.text(self.nav.active()) {
            window_title.push_str(" — ");
            window_title.push_str(page);
        }

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Writes the configuration entry, reporting a failure as a notification.
    fn save_config(&mut self) -> Task<cosmic::Action<Message>> {
        if let Some(ref context) = self.config_context {
            if let Err(e) = self.config.write_entry(context) {
                log::warn!("failed to save config: {e}");
                return self.update(Message::AddNotification(
                    NotificationLevel::Error,
                    fl!("error"),
                    format!("{}: {e}", fl!("config-save-failed")),
                ));
            }
        }
        Task::none()
    }

    /// Handles picker page messages.
    fn handle_picker_message(&mut self, msg: PickerMsg) -> Task<cosmic::Action<Message>> {
        match msg {
            PickerMsg::Select(select_msg) => {
                // The returned value is the one committed selection for this
                // interaction; record and announce it.
                if let Some(value) = self.picker.select.apply(select_msg) {
                    log::info!("selected color: {value}");
                    self.picker.record_pick(value.clone());
                    return self.update(Message::AddNotification(
                        NotificationLevel::Success,
                        fl!("color-picked"),
                        value,
                    ));
                }
            }

            PickerMsg::CopyLastPick => {
                if let Some(value) = self.picker.last_pick() {
                    let text = value.to_string();
                    return cosmic::task::future(async move {
                        if let Ok(mut clipboard) = arboard::Clipboard::new() {
                            let _ = clipboard.set_text(&text);
                        }
                        cosmic::Action::App(Message::AddNotification(
                            NotificationLevel::Success,
                            fl!("pick-copied"),
                            String::new(),
                        ))
                    });
                }
            }

            PickerMsg::ClearHistory => {
                self.picker.history.clear();
            }
        }

        Task::none()
    }
}

/// Closes the picker's option list when a press lands on no interactive
/// element at all. Presses inside the widget are claimed by its input, rows,
/// and region and never reach this listener with an ignored status.
fn dismiss_on_outside_press(
    event: Event,
    status: Status,
    _window: cosmic::iced::window::Id,
) -> Option<Message> {
    if !matches!(status, Status::Ignored) {
        return None;
    }

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(_))
        | Event::Touch(touch::Event::FingerPressed { .. }) => {
            Some(Message::Picker(PickerMsg::Select(
                SearchSelectMessage::Dismiss,
            )))
        }
        _ => None,
    }
}

/// The page to display in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Picker,
    Settings,
}

/// The context page to display in the context drawer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    About,
}

impl menu::action::MenuAction for MenuAction {
    type Message = Message;

    fn message(&self) -> Self::Message {
        match self {
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
        }
    }
}
