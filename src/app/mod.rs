// SPDX-License-Identifier: MPL-2.0
//! Application root: the gallery, its masonry layout and the single lightbox.
//!
//! `App` owns one [`MasonryController`] for all containers and one
//! [`LightboxController`] for the whole window. Probes, resizes and clicks
//! arrive as messages; lightbox timers leave as tasks and come back as
//! [`Message::TimerElapsed`].

mod message;
pub mod paths;
mod subscription;
mod timers;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::gallery::{binding, Gallery};
use crate::lightbox::{LightboxController, TransitionPhase};
use crate::masonry::{ColumnBalancer, ContainerId, MasonryController, MeasurementProvider};
use crate::media;
use crate::ui::design_tokens::sizing;
use crate::ui::state::{target_opacity, Fade};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 300.0;

const APP_TITLE: &str = "IcedMasonry";

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(mut flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.take());

    // iced 0.14 requires a `Fn` boot; flags are consumed by the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Width available to every container for a given window width.
#[must_use]
pub fn content_width(window_width: f32) -> f32 {
    (window_width - 2.0 * view::PAGE_PADDING - sizing::SCROLLBAR_ALLOWANCE).max(0.0)
}

/// Measurements read from the gallery model and the current window width.
///
/// Every container spans the full content width; an item's height is its
/// intrinsic aspect ratio applied to the pass's item width.
pub struct AppMeasurements<'a> {
    gallery: &'a Gallery,
    window_width: f32,
}

impl<'a> AppMeasurements<'a> {
    #[must_use]
    pub fn new(gallery: &'a Gallery, window_width: f32) -> Self {
        Self {
            gallery,
            window_width,
        }
    }
}

impl MeasurementProvider for AppMeasurements<'_> {
    fn container_width(&self, _container: ContainerId) -> f32 {
        content_width(self.window_width)
    }

    fn item_height(&self, container: ContainerId, index: usize, item_width: f32) -> f32 {
        self.gallery
            .container(container.index())
            .and_then(|c| c.size(index))
            .map_or(0.0, |size| size.height_at(item_width))
    }
}

/// Root Iced application state.
pub struct App {
    gallery: Gallery,
    masonry: MasonryController,
    /// Masonry id of each gallery container, by gallery index.
    container_ids: Vec<ContainerId>,
    lightbox: LightboxController<PathBuf>,
    window_size: Size,
    overlay_fade: Fade,
    image_fade: Fade,
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("containers", &self.gallery.len())
            .field("lightbox", &self.lightbox.state())
            .field("window_size", &self.window_size)
            .finish()
    }
}

impl App {
    /// Loads settings, scans the directories and starts probing every item.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = &config_warning {
            tracing::warn!(%warning, "settings could not be loaded, using defaults");
        }

        let directories = if flags.directories.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            flags.directories
        };
        let sort_order = config.gallery.sort_order.unwrap_or_default();
        let gallery = Gallery::scan_all(&directories, sort_order);

        let balancer = ColumnBalancer::new(config.layout.min_column_width(), config.layout.gap());
        let mut app = App {
            gallery,
            masonry: MasonryController::new(balancer),
            container_ids: Vec::new(),
            lightbox: LightboxController::new(config.lightbox.timings()),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            overlay_fade: Fade::new(0.0),
            image_fade: Fade::default(),
            config_warning,
        };

        let measurements = AppMeasurements::new(&app.gallery, app.window_size.width);
        let mut container_ids = Vec::with_capacity(app.gallery.len());
        for container in app.gallery.containers() {
            container_ids.push(app.masonry.register(container.len(), &measurements));
        }
        app.container_ids = container_ids;

        let probes: Vec<Task<Message>> = app
            .gallery
            .containers()
            .iter()
            .enumerate()
            .flat_map(|(container, gallery_container)| {
                gallery_container
                    .items()
                    .iter()
                    .enumerate()
                    .map(move |(index, item)| {
                        let path = item.path().to_path_buf();
                        let kind = item.kind();
                        Task::perform(media::probe_or_placeholder(path, kind), move |size| {
                            Message::ItemProbed {
                                container,
                                index,
                                size,
                            }
                        })
                    })
            })
            .collect();

        tracing::info!(
            containers = app.gallery.len(),
            items = probes.len(),
            "gallery scanned"
        );
        (app, Task::batch(probes))
    }

    fn title(&self) -> String {
        let current = self
            .lightbox
            .displayed_source()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match current {
            Some(name) if self.lightbox.is_visible() => format!("{name} - {APP_TITLE}"),
            _ => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ItemProbed {
                container,
                index,
                size,
            } => {
                let Some(gallery_container) = self.gallery.container_mut(container) else {
                    return Task::none();
                };
                gallery_container.set_size(index, size);

                if let Some(&id) = self.container_ids.get(container) {
                    let measurements = AppMeasurements::new(&self.gallery, self.window_size.width);
                    self.masonry.item_ready(id, index, &measurements);
                }
                Task::none()
            }
            Message::ItemClicked { container, index } => {
                let Some(gallery_container) = self.gallery.container(container) else {
                    return Task::none();
                };
                let was_visible = self.lightbox.is_visible();
                let timer = binding::activate(&mut self.lightbox, gallery_container, index);
                if timer.is_some() {
                    if !was_visible {
                        self.overlay_fade.set(0.0);
                    }
                    self.image_fade.set(1.0);
                }
                timers::schedule(timer)
            }
            Message::Key(key) => timers::schedule(binding::handle_key(&mut self.lightbox, key)),
            Message::Button(button) => {
                timers::schedule(binding::handle_button(&mut self.lightbox, button))
            }
            Message::TimerElapsed(id) => {
                let follow_up = self.lightbox.on_timer(id);
                if !self.lightbox.is_visible() {
                    self.overlay_fade.set(0.0);
                    self.image_fade.set(1.0);
                }
                timers::schedule(follow_up)
            }
            Message::WindowResized(size) => {
                let width_changed = (size.width - self.window_size.width).abs() > f32::EPSILON;
                self.window_size = size;
                if width_changed {
                    let measurements = AppMeasurements::new(&self.gallery, size.width);
                    let passes = self.masonry.resize(&measurements);
                    tracing::debug!(width = size.width, passes, "window resized");
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.animate(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
            masonry: &self.masonry,
            container_ids: &self.container_ids,
            lightbox: &self.lightbox,
            overlay_opacity: self.overlay_fade.value(),
            image_opacity: self.image_fade.value(),
            config_warning: self.config_warning.as_deref(),
        })
    }

    /// Whether fades still have to move, which keeps the tick running.
    fn is_animating(&self) -> bool {
        if !self.lightbox.is_visible() {
            return false;
        }
        self.lightbox.is_animating()
            || !self
                .overlay_fade
                .is_settled(target_opacity(self.lightbox.overlay_phase()))
            || !self
                .image_fade
                .is_settled(target_opacity(self.lightbox.image_phase()))
    }

    fn animate(&mut self, now: Instant) {
        let timings = self.lightbox.timings();
        let overlay_phase = self.lightbox.overlay_phase();
        let overlay_duration = match overlay_phase {
            TransitionPhase::Leaving => timings.close,
            _ => timings.entrance,
        };

        self.overlay_fade.advance(
            target_opacity(overlay_phase),
            now,
            overlay_duration.as_duration(),
        );
        self.image_fade.advance(
            target_opacity(self.lightbox.image_phase()),
            now,
            timings.swap.as_duration(),
        );
    }
}
